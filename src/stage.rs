//! High-level orchestration: load models into the scene and persist it.
//!
//! A [`Stage`] bundles the scene with the camera and projection and drives
//! the two-phase load: an async fetch+parse phase that can fail with no
//! side effects, then a synchronous upload+commit phase that is only
//! reached on success. A partially-loaded model is therefore never visible
//! to frame composition or to selection, and a failed load leaves the
//! scene exactly as it was.

use anyhow::Context;
use log::{info, warn};

use crate::{
    camera::{Camera, Projection},
    data_structures::{
        scene::{Scene, SceneSnapshot},
        transform::Transform,
    },
    error::Error,
    render::{self, Frame, MeshRenderer},
    resources,
};

#[derive(Debug, Default)]
pub struct Stage {
    pub scene: Scene,
    pub camera: Camera,
    pub projection: Projection,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch, parse, upload and commit one model instance; returns its id.
    ///
    /// The new instance starts with the identity transform, texturing off,
    /// and becomes the current selection.
    pub async fn load_model(
        &mut self,
        file_name: &str,
        renderer: &mut dyn MeshRenderer,
    ) -> anyhow::Result<u32> {
        let mesh = resources::load_mesh_obj(file_name).await?;
        let geometry = renderer.upload_mesh(file_name, &mesh);
        let id = self.scene.add_model(file_name, geometry, mesh.vertex_count());
        info!("model {file_name} (id {id}) added to the scene");
        Ok(id)
    }

    /// Fetch, parse, upload and commit one fixed backdrop instance at the
    /// given placement. Fixed instances are decorative: immutable, never
    /// selectable, and not part of the persisted model list restore.
    pub async fn load_fixed_model(
        &mut self,
        file_name: &str,
        transform: Transform,
        renderer: &mut dyn MeshRenderer,
    ) -> anyhow::Result<()> {
        let mesh = resources::load_mesh_obj(file_name).await?;
        let geometry = renderer.upload_mesh(file_name, &mesh);
        self.scene
            .add_fixed_model(file_name, geometry, mesh.vertex_count(), transform);
        info!(
            "fixed model {file_name} placed at ({}, {}, {})",
            transform.translation.x, transform.translation.y, transform.translation.z
        );
        Ok(())
    }

    /// The persisted shape of the current scene, for an external
    /// serializer to encode.
    pub fn save_scene(&self) -> SceneSnapshot {
        self.scene.snapshot()
    }

    /// Restore a persisted scene: clear the placed models (ids restart at
    /// 0), re-fetch every record by name, reapply its transform and
    /// texture flag, and select the first restored model.
    ///
    /// A record that fails to load is skipped with a warning and the rest
    /// of the snapshot is still restored; fixed instances are not reloaded.
    pub async fn load_scene(
        &mut self,
        snapshot: &SceneSnapshot,
        renderer: &mut dyn MeshRenderer,
    ) -> anyhow::Result<()> {
        self.scene.clear_models();

        for record in &snapshot.models {
            match self.load_model(&record.name, renderer).await {
                Ok(id) => {
                    self.scene
                        .set_transform(id, record.transform)
                        .context("restoring transform")?;
                    self.scene
                        .set_use_texture(id, record.use_texture)
                        .context("restoring texture flag")?;
                }
                Err(e) => warn!("skipping scene model {}: {e:#}", record.name),
            }
        }

        if let Some(first) = self.scene.models().first().map(|model| model.id) {
            self.scene.select(first).context("selecting first restored model")?;
        }
        info!("scene restored with {} models", self.scene.models().len());
        Ok(())
    }

    /// Compose this stage's draw list for the current frame.
    pub fn compose_frame(&self) -> Result<Frame, Error> {
        render::compose_frame(&self.scene, &self.camera, &self.projection)
    }
}
