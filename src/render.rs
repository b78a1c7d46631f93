//! Renderer-facing outputs: the upload seam and per-frame draw composition.
//!
//! The crate never talks to a GPU itself. An external rasterizer implements
//! [`MeshRenderer`] to receive parsed attribute buffers and mints an opaque
//! [`GeometryHandle`] in return; each frame, [`compose_frame`] turns the
//! scene plus camera into a [`Frame`]: one view matrix, one projection
//! matrix, a shared light direction, and an ordered list of [`DrawCall`]s.
//!
//! # Draw order
//!
//! Fixed backdrop instances come first, then the placed model instances in
//! insertion order, with the selected instance carrying the highlight
//! diffuse. Only instances already committed to the scene appear, so every
//! referenced geometry handle is fully uploaded.

use crate::{
    camera::{Camera, Projection},
    data_structures::scene::Scene,
    error::Error,
    math::{Mat4, Vec3},
    resources::mesh::ObjMesh,
};

/// Flat placeholder texel (RGBA) renderers use for instances that have no
/// real texture assigned yet.
pub const PLACEHOLDER_TEXEL: [u8; 4] = [100, 0, 0, 255];

/// Diffuse colour for fixed and unselected instances.
pub const NEUTRAL_DIFFUSE: [f32; 4] = [0.7, 0.7, 0.7, 1.0];

/// Diffuse colour highlighting the selected instance.
pub const SELECTED_DIFFUSE: [f32; 4] = [1.0, 0.7, 0.5, 1.0];

/// Opaque reference to uploaded attribute buffers. Minted by the rendering
/// collaborator on upload; the scene core only stores and hands it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GeometryHandle(u32);

impl GeometryHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// The upload seam towards the external rasterizer.
///
/// `upload_mesh` is called exactly once per successful load, after parsing
/// succeeded and the mesh was checked to be non-empty, and before the
/// instance is committed to the scene.
pub trait MeshRenderer {
    fn upload_mesh(&mut self, name: &str, mesh: &ObjMesh) -> GeometryHandle;
}

/// One draw: a geometry handle, its world matrix and shading inputs.
#[derive(Clone, Debug)]
pub struct DrawCall {
    pub geometry: GeometryHandle,
    pub vertex_count: usize,
    pub world: Mat4,
    pub diffuse: [f32; 4],
    pub use_texture: bool,
}

/// Everything a rasterizer needs for one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub view: Mat4,
    pub projection: Mat4,
    pub light_direction: Vec3,
    pub calls: Vec<DrawCall>,
}

/// Compose the per-frame draw list. Tolerates an empty scene (the frame
/// simply carries no calls); fails only on a degenerate camera.
pub fn compose_frame(
    scene: &Scene,
    camera: &Camera,
    projection: &Projection,
) -> Result<Frame, Error> {
    let view = camera.view_matrix()?;

    let mut calls = Vec::with_capacity(scene.fixed_models().len() + scene.models().len());
    for fixed in scene.fixed_models() {
        calls.push(DrawCall {
            geometry: fixed.geometry,
            vertex_count: fixed.vertex_count,
            world: fixed.transform.to_matrix(),
            diffuse: NEUTRAL_DIFFUSE,
            use_texture: true,
        });
    }
    for model in scene.models() {
        let diffuse = if scene.selected_id() == Some(model.id) {
            SELECTED_DIFFUSE
        } else {
            NEUTRAL_DIFFUSE
        };
        calls.push(DrawCall {
            geometry: model.geometry,
            vertex_count: model.vertex_count,
            world: model.transform.to_matrix(),
            diffuse,
            use_texture: model.use_texture,
        });
    }

    Ok(Frame {
        view,
        projection: projection.matrix(),
        light_direction: Vec3::new(-1.0, 3.0, 5.0).normalize(),
        calls,
    })
}
