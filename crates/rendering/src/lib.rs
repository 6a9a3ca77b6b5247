use bevy::prelude::*;

pub mod camera;
pub mod scene;
pub mod snowfall_render;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.02, 0.03, 0.06)))
            .add_systems(
                Startup,
                (camera::setup_camera, scene::setup_lighting, scene::spawn_ground),
            )
            .add_systems(
                Update,
                (
                    camera::camera_orbit_drag,
                    camera::camera_zoom,
                    camera::camera_rotate_keyboard,
                    camera::apply_orbit_camera,
                )
                    .chain(),
            )
            .add_plugins(snowfall_render::SnowfallRenderPlugin);
    }
}
