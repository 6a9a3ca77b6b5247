//! Snowflake sprite rendering.
//!
//! Every flake is drawn as a camera-facing quad. All quads live in one
//! mesh whose vertex positions are rewritten on the CPU each frame from the
//! `Snowfall` buffer, so the GPU only ever sees plain uploads. The material
//! is unlit white with additive blending; its alpha tracks the simulator's
//! eased opacity, and the entity is hidden while the field is faded out.

use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use bevy::render::view::NoFrustumCulling;

use simulation::simulation_sets::SimulationUpdateSet;
use simulation::snowfall::Snowfall;

/// Edge length (world units) of the largest flake sprite.
pub const BASE_POINT_SIZE: f32 = 0.1;

/// Resolution of the generated round flake texture.
const FLAKE_TEX_SIZE: usize = 32;

/// Marker for the single entity holding every flake quad.
#[derive(Component)]
pub struct SnowfallSprites;

/// Build the flake mesh and material once the simulator exists.
pub fn spawn_snowfall_sprites(
    mut commands: Commands,
    snowfall: Res<Snowfall>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    let count = snowfall.count();
    let mesh = meshes.add(build_flake_mesh(count));

    let material = materials.add(StandardMaterial {
        base_color_texture: Some(images.add(create_flake_image())),
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.0),
        alpha_mode: AlphaMode::Add,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::IDENTITY,
        Visibility::Hidden,
        // Vertices move every frame; the spawn-time AABB is meaningless.
        NoFrustumCulling,
        SnowfallSprites,
    ));
    info!("Snowfall sprites spawned: {count} quads");
}

/// Rewrite quad corners from the current flake positions and camera basis.
pub fn upload_snowfall_sprites(
    snowfall: Res<Snowfall>,
    camera_q: Query<&GlobalTransform, With<Camera3d>>,
    sprites_q: Query<&Mesh3d, With<SnowfallSprites>>,
    mut meshes: ResMut<Assets<Mesh>>,
) {
    if !snowfall.is_visible() {
        return;
    }
    let Ok(camera) = camera_q.get_single() else {
        return;
    };
    let Ok(mesh_handle) = sprites_q.get_single() else {
        return;
    };
    let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
        return;
    };
    let Some(VertexAttributeValues::Float32x3(corners)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    else {
        return;
    };

    write_billboards(
        corners,
        snowfall.positions(),
        snowfall.sizes(),
        snowfall.config().size.max,
        *camera.right(),
        *camera.up(),
    );
}

/// Push the eased opacity into the material and toggle visibility.
pub fn update_snowfall_opacity(
    snowfall: Res<Snowfall>,
    mut sprites_q: Query<(&MeshMaterial3d<StandardMaterial>, &mut Visibility), With<SnowfallSprites>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok((mat_handle, mut vis)) = sprites_q.get_single_mut() else {
        return;
    };

    let visible = snowfall.is_visible();
    let desired = if visible {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    if *vis != desired {
        *vis = desired;
    }

    if !visible {
        return;
    }
    if let Some(mat) = materials.get_mut(&mat_handle.0) {
        mat.base_color = Color::srgba(1.0, 1.0, 1.0, snowfall.opacity());
    }
}

/// Half edge length of flake `size` relative to the largest configured size.
#[inline]
pub(crate) fn sprite_half_extent(size: f32, size_max: f32) -> f32 {
    if size_max <= 0.0 {
        return 0.0;
    }
    0.5 * BASE_POINT_SIZE * (size / size_max)
}

/// Write four corners per flake into `corners`, facing along `right` x `up`.
///
/// `corners` must hold `4 * positions.len()` entries; extra entries are
/// left untouched.
pub(crate) fn write_billboards(
    corners: &mut [[f32; 3]],
    positions: &[Vec3],
    sizes: &[f32],
    size_max: f32,
    right: Vec3,
    up: Vec3,
) {
    for ((quad, center), size) in corners.chunks_exact_mut(4).zip(positions).zip(sizes) {
        let h = sprite_half_extent(*size, size_max);
        let r = right * h;
        let u = up * h;
        quad[0] = (*center - r - u).to_array();
        quad[1] = (*center + r - u).to_array();
        quad[2] = (*center + r + u).to_array();
        quad[3] = (*center - r + u).to_array();
    }
}

/// Mesh with `count` quads: four vertices and two triangles per flake.
pub(crate) fn build_flake_mesh(count: usize) -> Mesh {
    let positions = vec![[0.0_f32; 3]; count * 4];
    let normals = vec![[0.0_f32, 0.0, 1.0]; count * 4];
    let mut uvs = Vec::with_capacity(count * 4);
    let mut indices = Vec::with_capacity(count * 6);

    for i in 0..count as u32 {
        uvs.extend_from_slice(&[[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
        let base = i * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// White disc with a soft quadratic edge falloff in the alpha channel.
pub(crate) fn create_flake_image() -> Image {
    let size = FLAKE_TEX_SIZE;
    let half = size as f32 / 2.0;
    let mut data = Vec::with_capacity(size * size * 4);
    for py in 0..size {
        for px in 0..size {
            let dx = (px as f32 + 0.5 - half) / half;
            let dy = (py as f32 + 0.5 - half) / half;
            let falloff = (1.0 - (dx * dx + dy * dy).sqrt()).clamp(0.0, 1.0);
            let alpha = (falloff * falloff * 255.0).round() as u8;
            data.extend_from_slice(&[255, 255, 255, alpha]);
        }
    }

    let mut image = Image::new(
        Extent3d {
            width: size as u32,
            height: size as u32,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD | RenderAssetUsages::MAIN_WORLD,
    );
    image.sampler = bevy::image::ImageSampler::linear();
    image
}

pub struct SnowfallRenderPlugin;

impl Plugin for SnowfallRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_snowfall_sprites).add_systems(
            Update,
            (upload_snowfall_sprites, update_snowfall_opacity).in_set(SimulationUpdateSet::Visual),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flake_mesh_layout() {
        let mesh = build_flake_mesh(3);
        assert_eq!(mesh.count_vertices(), 12);
        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 18);
        assert_eq!(&indices[6..12], &[4, 5, 6, 4, 6, 7]);
    }

    #[test]
    fn test_largest_flake_matches_base_point_size() {
        let h = sprite_half_extent(0.10, 0.10);
        assert!((h * 2.0 - BASE_POINT_SIZE).abs() < 1e-6);
        let small = sprite_half_extent(0.02, 0.10);
        assert!((small * 2.0 - BASE_POINT_SIZE * 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_size_max_collapses_sprite() {
        assert_eq!(sprite_half_extent(0.05, 0.0), 0.0);
    }

    #[test]
    fn test_billboards_centered_on_flake() {
        let positions = [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, 7.0)];
        let sizes = [0.1, 0.05];
        let mut corners = vec![[0.0; 3]; 8];
        write_billboards(&mut corners, &positions, &sizes, 0.1, Vec3::X, Vec3::Y);

        for (quad, center) in corners.chunks_exact(4).zip(positions) {
            let sum = quad
                .iter()
                .fold(Vec3::ZERO, |acc, c| acc + Vec3::from_array(*c));
            assert!((sum / 4.0 - center).length() < 1e-6);
        }
        // First flake is the largest: edge equals BASE_POINT_SIZE.
        let edge = Vec3::from_array(corners[1]) - Vec3::from_array(corners[0]);
        assert!((edge.length() - BASE_POINT_SIZE).abs() < 1e-6);
        assert!(edge.normalize().abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_billboards_face_camera_basis() {
        let positions = [Vec3::ZERO];
        let sizes = [0.1];
        let mut corners = vec![[0.0; 3]; 4];
        write_billboards(&mut corners, &positions, &sizes, 0.1, Vec3::Z, Vec3::Y);
        // With right = +Z every corner lies in the X = 0 plane.
        assert!(corners.iter().all(|c| c[0].abs() < 1e-6));
    }

    #[test]
    fn test_flake_image_is_round() {
        let image = create_flake_image();
        let size = FLAKE_TEX_SIZE;
        let alpha = |x: usize, y: usize| image.data[(y * size + x) * 4 + 3];
        assert_eq!(alpha(0, 0), 0, "corner should be transparent");
        assert!(alpha(size / 2, size / 2) > 200, "center should be opaque");
    }
}
