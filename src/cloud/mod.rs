// src/cloud/mod.rs

// Deklaration der Punktwolken-Module
pub mod components;
pub mod resources;
pub mod systems;

// Re-Exporte für den einfachen Zugriff
pub use components::CloudPoint;
pub use resources::{PointCloud, ViewerSettings};
pub use systems::spawn_point_cloud;
