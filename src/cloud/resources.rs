use crate::math::types::Point3D;
use bevy::prelude::*;

/// Alle Stellschrauben des Viewers an einem Ort. Es gibt keine CLI und keine
/// Konfigurationsdatei; wer andere Werte will, ändert die Defaults.
#[derive(Resource, Debug, Clone)]
pub struct ViewerSettings {
    // --- Punktwolke ---
    pub point_count: usize,
    pub cloud_radius: f32,

    // --- Darstellung der einzelnen Punkte ---
    /// Radius des geteilten Kugel-Meshes, vor der Pro-Punkt-Skalierung.
    pub point_mesh_radius: f32,
    pub point_scale_min: f32,
    pub point_scale_max: f32,
    pub point_color_a: Color,
    pub point_color_b: Color,

    // --- Kamera & Atmosphäre ---
    pub camera_distance: f32,
    pub camera_fov_deg: f32,
    /// Linearer Nebel: voll sichtbar bis `fog_start`, ab `fog_end` komplett
    /// im Hintergrund verschwunden.
    pub fog_start: f32,
    pub fog_end: f32,
    pub background_color: Color,

    // --- Steuerung ---
    pub orbit_sensitivity: f32,
    pub orbit_smoothness: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            // Punktwolke
            point_count: 200,
            cloud_radius: 2.0,

            // Darstellung
            point_mesh_radius: 0.04,
            point_scale_min: 0.5,
            point_scale_max: 1.5,
            point_color_a: Color::WHITE,
            point_color_b: Color::YELLOW,

            // Kamera & Atmosphäre
            camera_distance: 23.0,
            camera_fov_deg: 20.0,
            fog_start: 22.0,
            fog_end: 25.0,
            background_color: Color::rgb_u8(0x24, 0x24, 0x24),

            // Steuerung
            orbit_sensitivity: 5.0,
            orbit_smoothness: 0.95,
        }
    }
}

/// Die einmal erzeugten Punktkoordinaten, gehalten für die Lebensdauer der
/// Ansicht. Wird nach dem Start nicht mehr verändert.
#[derive(Resource, Debug)]
pub struct PointCloud {
    pub points: Vec<Point3D>,
}
