// ./src/setup.rs
use crate::cloud::resources::ViewerSettings;
use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

const AMBIENT_BRIGHTNESS: f32 = 1_000.0;

pub fn setup_scene(mut commands: Commands, settings: Res<ViewerSettings>) {
    // Hintergrund und Umgebungslicht
    commands.insert_resource(ClearColor(settings.background_color));
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });

    // Kamera: blickt von der Z-Achse auf den Ursprung, Distanznebel in
    // Hintergrundfarbe, Orbit mit linker Maustaste. Pan und Zoom sind
    // deaktiviert, die Distanz zur Wolke bleibt konstant.
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_xyz(0.0, 0.0, settings.camera_distance)
                .looking_at(Vec3::ZERO, Vec3::Y),
            projection: PerspectiveProjection {
                fov: settings.camera_fov_deg.to_radians(),
                ..default()
            }
            .into(),
            ..default()
        },
        FogSettings {
            color: settings.background_color,
            falloff: FogFalloff::Linear {
                start: settings.fog_start,
                end: settings.fog_end,
            },
            ..default()
        },
        PanOrbitCamera {
            button_orbit: MouseButton::Left,
            radius: Some(settings.camera_distance),
            orbit_sensitivity: settings.orbit_sensitivity,
            orbit_smoothness: settings.orbit_smoothness,
            pan_sensitivity: 0.0,
            zoom_sensitivity: 0.0,
            allow_upside_down: true,
            ..default()
        },
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<ViewerSettings>();
        app.add_systems(Startup, setup_scene);
        app.update();
        app
    }

    #[test]
    fn test_camera_is_orbit_only() {
        let mut app = setup_app();

        let mut query = app.world.query::<&PanOrbitCamera>();
        let camera = query.single(&app.world);
        assert_eq!(camera.button_orbit, MouseButton::Left);
        assert_eq!(camera.pan_sensitivity, 0.0);
        assert_eq!(camera.zoom_sensitivity, 0.0);
        assert_eq!(camera.radius, Some(ViewerSettings::default().camera_distance));
    }

    #[test]
    fn test_fog_matches_background() {
        let mut app = setup_app();
        let settings = ViewerSettings::default();

        let clear = app.world.resource::<ClearColor>();
        assert_eq!(clear.0, settings.background_color);

        let mut query = app.world.query::<&FogSettings>();
        let fog = query.single(&app.world);
        assert_eq!(fog.color, settings.background_color);
        match fog.falloff {
            FogFalloff::Linear { start, end } => {
                assert_eq!(start, settings.fog_start);
                assert_eq!(end, settings.fog_end);
            }
            _ => panic!("expected linear fog falloff"),
        }
    }
}
