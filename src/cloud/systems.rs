use crate::cloud::components::CloudPoint;
use crate::cloud::resources::{PointCloud, ViewerSettings};
use crate::math::prelude::*;
use bevy::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Erzeugt die Fibonacci-Punktwolke und spawnt pro Punkt eine Entity.
///
/// Größe und Farbe werden genau einmal beim Spawnen aus dem [`SeedResource`]
/// gewürfelt und in [`CloudPoint`] abgelegt. Alle Punkte teilen sich ein
/// Kugel-Mesh, pro Farbe gibt es ein Material.
pub fn spawn_point_cloud(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    seed: Res<SeedResource>,
) {
    let points = match fibonacci_sphere_points(settings.point_count, settings.cloud_radius) {
        Ok(points) => points,
        Err(err) => {
            error!("Point cloud generation failed: {}", err);
            return;
        }
    };
    info!(
        "Spawning {} cloud points (radius {}, seed {})",
        points.len(),
        settings.cloud_radius,
        seed.seed
    );

    let point_mesh = meshes.add(Sphere::new(settings.point_mesh_radius).mesh().uv(64, 64));
    let material_a = materials.add(point_material(settings.point_color_a));
    let material_b = materials.add(point_material(settings.point_color_b));

    let mut rng = StdRng::seed_from_u64(seed.seed);

    // Jeder erzeugte Punkt wird gespawnt, auch bei Koordinaten von exakt 0.0.
    for (index, point) in points.iter().enumerate() {
        let size = rng.random_range(settings.point_scale_min..settings.point_scale_max);
        let material = if rng.random_bool(0.5) {
            material_a.clone()
        } else {
            material_b.clone()
        };

        commands.spawn((
            PbrBundle {
                mesh: point_mesh.clone(),
                material,
                transform: Transform::from_translation(*point).with_scale(Vec3::splat(size)),
                ..default()
            },
            CloudPoint { index, size },
        ));
    }

    commands.insert_resource(PointCloud { points });
}

/// Unbeleuchtetes Material, Distanznebel greift weiterhin.
fn point_material(color: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        unlit: true,
        ..default()
    }
}
