use anyhow::{Context, Result};
use glam::{DMat4, DVec3};
use std::path::Path;

use crate::math::AABB;

/// What the walkthrough needs to know about a loaded scene model
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSummary {
    pub scenes: usize,
    pub nodes: usize,
    pub meshes: usize,
    /// World-space bounds of every mesh vertex, `None` if the model has no geometry
    pub bounds: Option<AABB>,
}

/// Loads a glTF file and summarizes it. The camera never depends on the result.
pub fn probe_model(path: impl AsRef<Path>) -> Result<ModelSummary> {
    let path = path.as_ref();
    log::debug!("Loading glTF file: {:?}", path);

    let (gltf, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;

    let mut bounds = AABB::empty();
    for scene in gltf.scenes() {
        for node in scene.nodes() {
            accumulate_node(&node, &buffers, &DMat4::IDENTITY, &mut bounds)?;
        }
    }

    Ok(ModelSummary {
        scenes: gltf.scenes().count(),
        nodes: gltf.nodes().count(),
        meshes: gltf.meshes().count(),
        bounds: (!bounds.is_empty()).then_some(bounds),
    })
}

/// Recursively grows `bounds` by the vertices under `node`
fn accumulate_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &DMat4,
    bounds: &mut AABB,
) -> Result<()> {
    let local = node.transform().matrix().map(|col| col.map(f64::from));
    let global_transform = *parent_transform * DMat4::from_cols_array_2d(&local);

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));
            let positions = reader
                .read_positions()
                .with_context(|| format!("Mesh {:?} primitive has no positions", mesh.name()))?;

            for pos in positions {
                let v = DVec3::new(pos[0] as f64, pos[1] as f64, pos[2] as f64);
                bounds.include(global_transform.transform_point3(v));
            }
        }
    }

    for child in node.children() {
        accumulate_node(&child, buffers, &global_transform, bounds)?;
    }

    Ok(())
}
