use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

const ZOOM_SPEED: f32 = 0.1;
const MIN_DISTANCE: f32 = 5.0;
const MAX_DISTANCE: f32 = 80.0;
const MIN_PITCH: f32 = -10.0 * std::f32::consts::PI / 180.0; // slightly below the horizon
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
const KEY_ROTATE_SPEED: f32 = 1.2; // radians per second

/// Orbital camera model: camera orbits around a focus point inside the snow volume.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::new(0.0, 4.0, 0.0),
            yaw: 0.0,
            pitch: 15.0_f32.to_radians(),
            distance: 28.0,
        }
    }
}

#[derive(Resource, Default)]
pub struct CameraOrbitDrag {
    pub dragging: bool,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let (pos, look_at) = orbit_to_transform(&orbit);

    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(pos).looking_at(look_at, Vec3::Y),
    ));
    commands.insert_resource(orbit);
    commands.init_resource::<CameraOrbitDrag>();
}

pub(crate) fn orbit_to_transform(orbit: &OrbitCamera) -> (Vec3, Vec3) {
    // Spherical to cartesian offset from focus
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    let pos = orbit.focus + Vec3::new(x, y, z);
    (pos, orbit.focus)
}

/// System: apply OrbitCamera state to the actual camera Transform each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if !orbit.is_changed() {
        return;
    }
    let (pos, look_at) = orbit_to_transform(&orbit);
    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = Transform::from_translation(pos).looking_at(look_at, Vec3::Y);
}

/// Right-mouse drag: orbit (horizontal = yaw, vertical = pitch).
pub fn camera_orbit_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut drag: ResMut<CameraOrbitDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Right) {
        if let Some(pos) = window.cursor_position() {
            drag.dragging = true;
            drag.last_pos = pos;
        }
    }

    if buttons.just_released(MouseButton::Right) {
        drag.dragging = false;
    }

    if drag.dragging {
        if let Some(pos) = window.cursor_position() {
            let delta = pos - drag.last_pos;
            orbit.yaw += delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch - delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
            drag.last_pos = pos;
        }
    }
}

/// Q/E: rotate around the focus.
pub fn camera_rotate_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let mut dir = 0.0;
    if keys.pressed(KeyCode::KeyQ) {
        dir -= 1.0;
    }
    if keys.pressed(KeyCode::KeyE) {
        dir += 1.0;
    }
    if dir != 0.0 {
        orbit.yaw += dir * KEY_ROTATE_SPEED * time.delta_secs();
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(mut scroll_evts: EventReader<MouseWheel>, mut orbit: ResMut<OrbitCamera>) {
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_to_transform_distance() {
        let orbit = OrbitCamera {
            focus: Vec3::new(1.0, 2.0, 3.0),
            yaw: 0.7,
            pitch: 0.3,
            distance: 20.0,
        };
        let (pos, look_at) = orbit_to_transform(&orbit);
        assert_eq!(look_at, orbit.focus);
        assert!(((pos - look_at).length() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_orbit_zero_yaw_looks_down_negative_z() {
        let orbit = OrbitCamera {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 10.0,
        };
        let (pos, _) = orbit_to_transform(&orbit);
        assert!((pos - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn test_default_camera_sees_volume() {
        let orbit = OrbitCamera::default();
        assert!((MIN_DISTANCE..=MAX_DISTANCE).contains(&orbit.distance));
        assert!((MIN_PITCH..=MAX_PITCH).contains(&orbit.pitch));
        // Camera sits outside the 30x30 volume.
        let (pos, _) = orbit_to_transform(&orbit);
        assert!(pos.z > 15.0);
    }
}
