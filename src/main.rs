// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use bevy_panorbit_camera::PanOrbitCameraPlugin;

// Eigene Module deklarieren
pub mod cloud;
pub mod debug;
pub mod math;
pub mod setup;

use cloud::resources::ViewerSettings;
use cloud::systems::spawn_point_cloud;
use debug::ui::viewer_info_ui_system;
use math::probability::SeedResource;
use setup::setup_scene;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(EguiPlugin)
        .add_plugins(PanOrbitCameraPlugin)
        .init_resource::<ViewerSettings>()
        .init_resource::<SeedResource>()
        // Szene zuerst, dann die Punktwolke in die fertige Szene spawnen.
        .add_systems(Startup, (setup_scene, spawn_point_cloud).chain())
        .add_systems(Update, viewer_info_ui_system)
        .run();
}
