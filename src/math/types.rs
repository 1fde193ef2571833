// src/math/types.rs

// Re-export häufig verwendeter externer Typen
pub use bevy::math::Vec3;

// Einheitliche Typen für das gesamte Modul
pub type Point3D = Vec3;
