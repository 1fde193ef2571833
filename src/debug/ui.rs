// ./src/debug/ui.rs
use crate::cloud::resources::{PointCloud, ViewerSettings};
use crate::math::probability::SeedResource;
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui::Window};

/// Info-Overlay zur Punktwolke. Reine Anzeige, keine Steuerung.
pub fn viewer_info_ui_system(
    mut contexts: EguiContexts,
    settings: Res<ViewerSettings>,
    seed: Res<SeedResource>,
    cloud: Option<Res<PointCloud>>,
) {
    Window::new("Punktwolke")
        .default_width(260.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.heading("Fibonacci-Kugel");
            match &cloud {
                Some(cloud) => {
                    ui.label(format!("Punkte: {}", cloud.points.len()));
                }
                // Die Ressource fehlt nur, wenn die Generierung fehlgeschlagen ist.
                None => {
                    ui.label("Punkte: keine (Generierung fehlgeschlagen)");
                }
            }
            ui.label(format!("Radius: {:.2}", settings.cloud_radius));
            ui.label(format!("Seed: {}", seed.seed));

            ui.separator();

            ui.collapsing("Kamerasteuerung Info", |ui| {
                ui.label("Linke Maustaste + Ziehen: Orbit");
                ui.label("Pan & Zoom: deaktiviert");
            });
        });
}
