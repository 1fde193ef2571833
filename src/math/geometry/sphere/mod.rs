// src/math/geometry/sphere/mod.rs

// Deklaration der Untermodule für Kugel-spezifische Funktionalität
pub mod sampling;

pub use self::sampling::fibonacci_sphere_points;
