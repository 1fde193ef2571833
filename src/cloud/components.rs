use bevy::prelude::*;

/// Markiert eine Entity als Punkt der Wolke und hält die beim Spawnen einmal
/// gewürfelten Darstellungswerte, damit das Bild über Frames stabil bleibt.
#[derive(Component, Debug, Clone, Copy)]
pub struct CloudPoint {
    /// Index des Punktes in der erzeugten Reihenfolge.
    pub index: usize,
    /// Einheitlicher Skalierungsfaktor des geteilten Kugel-Meshes.
    pub size: f32,
}
