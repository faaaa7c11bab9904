// Stand-in for the device model: a base plate with the pads arranged
// around its center. The real asset only has to expose the same node names.

use crate::constants::{BASE_HALF_EXTENTS, PAD_HALF_EXTENTS, PAD_LIFT, PAD_RING_RADIUS};
use fsr_core::{Aabb, SceneGraph};
use glam::Vec3;

pub fn pad_offset(name: &str) -> Option<Vec3> {
    let r = PAD_RING_RADIUS;
    match name {
        "PadLeft" => Some(Vec3::new(-r, PAD_LIFT, 0.0)),
        "PadRight" => Some(Vec3::new(r, PAD_LIFT, 0.0)),
        "PadTop" => Some(Vec3::new(0.0, PAD_LIFT, -r)),
        "PadBottom" => Some(Vec3::new(0.0, PAD_LIFT, r)),
        _ => None,
    }
}

/// Build the device scene. Pads with unknown names are spread evenly on the
/// ring after the four standard positions.
pub fn build_device_scene(pad_names: &[String]) -> SceneGraph {
    let mut scene = SceneGraph::new("Scene");
    let root = scene.root();
    scene.add_child(
        root,
        "Base",
        Vec3::ZERO,
        Some(Aabb::from_center_half_extents(
            Vec3::ZERO,
            Vec3::from_array(BASE_HALF_EXTENTS),
        )),
    );
    let pad_box = Aabb::from_center_half_extents(Vec3::ZERO, Vec3::from_array(PAD_HALF_EXTENTS));
    let n = pad_names.len().max(1) as f32;
    for (i, name) in pad_names.iter().enumerate() {
        let pos = pad_offset(name).unwrap_or_else(|| {
            let a = std::f32::consts::TAU * i as f32 / n;
            Vec3::new(PAD_RING_RADIUS * a.cos(), PAD_LIFT, PAD_RING_RADIUS * a.sin())
        });
        scene.add_child(root, name, pos, Some(pad_box));
    }
    scene
}
