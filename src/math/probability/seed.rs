use bevy::prelude::*;

/// Globaler Seed für alle visuellen Zufallsentscheidungen (Punktfarbe und
/// Punktgröße). Die Positionen selbst sind deterministisch und gehen nicht
/// über diesen Seed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedResource {
    pub seed: u64,
}

impl SeedResource {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for SeedResource {
    fn default() -> Self {
        let seed_number = rand::random::<u64>();
        Self::from_seed(seed_number)
    }
}
