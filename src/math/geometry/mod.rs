// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod sphere;

// Re-Exporte für einfache Verwendung
pub use self::sphere::sampling::fibonacci_sphere_points;
