//! Minimal backdrop for the snow volume: a dark ground disc and night lighting.

use bevy::prelude::*;

/// Ground sits just under the respawn floor so flakes vanish into it.
const GROUND_Y: f32 = -5.0;
const GROUND_RADIUS: f32 = 40.0;

pub fn setup_lighting(mut commands: Commands) {
    // Cold ambient light for a night scene
    commands.insert_resource(AmbientLight {
        color: Color::srgb(0.6, 0.65, 0.9),
        brightness: 150.0,
    });

    // Moonlight angled from above
    commands.spawn((
        DirectionalLight {
            illuminance: 2000.0,
            color: Color::srgb(0.7, 0.75, 1.0),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::XYZ,
            -std::f32::consts::FRAC_PI_3, // 60 degrees down
            std::f32::consts::FRAC_PI_6,
            0.0,
        )),
    ));
}

pub fn spawn_ground(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(GROUND_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.08, 0.09, 0.12),
            perceptual_roughness: 0.95,
            ..default()
        })),
        // Circle is built in the XY plane; lay it flat.
        Transform::from_xyz(0.0, GROUND_Y, 0.0)
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));
}
