//! The scene aggregate: placed model instances, fixed backdrop instances
//! and the single selection.
//!
//! The scene owns everything a renderer needs to draw a frame apart from
//! the camera: an ordered list of user-placed model instances (insertion
//! order is render order is UI list order), a separate ordered list of
//! fixed decorative instances, at most one selected model, and the
//! monotonic id counter. All mutation goes through methods that uphold the
//! selection invariant: the selected id always names a live model instance.

use serde::{Deserialize, Serialize};

use crate::{data_structures::transform::Transform, error::Error, render::GeometryHandle};

/// A user-placed, editable mesh instance.
#[derive(Clone, Debug)]
pub struct ModelInstance {
    /// Unique within the scene, assigned at creation, never reused.
    pub id: u32,
    /// Source geometry file name; re-fetched by name when a persisted
    /// scene is restored.
    pub name: String,
    pub geometry: GeometryHandle,
    pub vertex_count: usize,
    pub transform: Transform,
    pub use_texture: bool,
}

/// Decorative background geometry: placed once, never edited, never
/// selectable, always drawn textured.
#[derive(Clone, Debug)]
pub struct FixedModelInstance {
    pub name: String,
    pub geometry: GeometryHandle,
    pub vertex_count: usize,
    pub transform: Transform,
}

#[derive(Debug, Default)]
pub struct Scene {
    models: Vec<ModelInstance>,
    fixed: Vec<FixedModelInstance>,
    selected: Option<u32>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new model instance with identity transform and texturing
    /// off, select it, and return its id.
    pub fn add_model(&mut self, name: &str, geometry: GeometryHandle, vertex_count: usize) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.models.push(ModelInstance {
            id,
            name: name.to_string(),
            geometry,
            vertex_count,
            transform: Transform::default(),
            use_texture: false,
        });
        self.selected = Some(id);
        id
    }

    /// Append a fixed backdrop instance at the given placement.
    pub fn add_fixed_model(
        &mut self,
        name: &str,
        geometry: GeometryHandle,
        vertex_count: usize,
        transform: Transform,
    ) {
        self.fixed.push(FixedModelInstance {
            name: name.to_string(),
            geometry,
            vertex_count,
            transform,
        });
    }

    /// Remove every model instance, clear the selection and restart id
    /// assignment from 0. Fixed instances are untouched; this is the reset
    /// used when restoring a persisted scene.
    pub fn clear_models(&mut self) {
        self.models.clear();
        self.selected = None;
        self.next_id = 0;
    }

    pub fn set_transform(&mut self, id: u32, transform: Transform) -> Result<(), Error> {
        self.model_mut(id)?.transform = transform;
        Ok(())
    }

    pub fn set_use_texture(&mut self, id: u32, use_texture: bool) -> Result<(), Error> {
        self.model_mut(id)?.use_texture = use_texture;
        Ok(())
    }

    /// Make `id` the selected model instance. Fixed instances have no ids
    /// and can never be selected.
    pub fn select(&mut self, id: u32) -> Result<(), Error> {
        if !self.models.iter().any(|model| model.id == id) {
            return Err(Error::ModelNotFound(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn selected(&self) -> Option<&ModelInstance> {
        self.selected.and_then(|id| self.model(id))
    }

    pub fn model(&self, id: u32) -> Option<&ModelInstance> {
        self.models.iter().find(|model| model.id == id)
    }

    fn model_mut(&mut self, id: u32) -> Result<&mut ModelInstance, Error> {
        self.models
            .iter_mut()
            .find(|model| model.id == id)
            .ok_or(Error::ModelNotFound(id))
    }

    /// Model instances in render order.
    pub fn models(&self) -> &[ModelInstance] {
        &self.models
    }

    /// Fixed backdrop instances in render order.
    pub fn fixed_models(&self) -> &[FixedModelInstance] {
        &self.fixed
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.fixed.is_empty()
    }

    /// The persisted shape of the current scene. Encoding and file I/O are
    /// the external serializer's job.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            models: self
                .models
                .iter()
                .map(|model| ModelRecord {
                    name: model.name.clone(),
                    transform: model.transform,
                    use_texture: model.use_texture,
                })
                .collect(),
            fixed_models: self
                .fixed
                .iter()
                .map(|fixed| FixedModelRecord {
                    name: fixed.name.clone(),
                    transform: fixed.transform,
                })
                .collect(),
        }
    }
}

/// The persisted scene shape. Serde field names match the JSON scene files
/// (`models`, `fixedModels`, `useTexture`, nested `translation`/`rotation`/
/// `scale` records).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub models: Vec<ModelRecord>,
    pub fixed_models: Vec<FixedModelRecord>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    pub name: String,
    pub transform: Transform,
    pub use_texture: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedModelRecord {
    pub name: String,
    pub transform: Transform,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn handle(raw: u32) -> GeometryHandle {
        GeometryHandle::new(raw)
    }

    #[test]
    fn adding_a_model_selects_it_and_ids_are_monotonic() {
        let mut scene = Scene::new();
        let first = scene.add_model("well.obj", handle(0), 36);
        let second = scene.add_model("castle.obj", handle(1), 300);
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(scene.selected_id(), Some(second));
        assert_eq!(scene.models().len(), 2);
    }

    #[test]
    fn clear_models_resets_ids_and_selection_but_keeps_fixed() {
        let mut scene = Scene::new();
        scene.add_fixed_model("forest.obj", handle(7), 99, Transform::default());
        scene.add_model("well.obj", handle(0), 36);
        scene.clear_models();

        assert!(scene.models().is_empty());
        assert_eq!(scene.selected_id(), None);
        assert_eq!(scene.fixed_models().len(), 1);
        // Ids restart from 0 after the reset.
        assert_eq!(scene.add_model("well.obj", handle(1), 36), 0);
    }

    #[test]
    fn select_validates_the_id() {
        let mut scene = Scene::new();
        let id = scene.add_model("well.obj", handle(0), 36);
        assert_eq!(scene.select(99), Err(Error::ModelNotFound(99)));
        // Failed select leaves the previous selection in place.
        assert_eq!(scene.selected_id(), Some(id));
    }

    #[test]
    fn mutations_on_unknown_ids_leave_the_scene_unmodified() {
        let mut scene = Scene::new();
        let id = scene.add_model("well.obj", handle(0), 36);
        let edited = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 0.5);

        assert_eq!(scene.set_transform(99, edited), Err(Error::ModelNotFound(99)));
        assert_eq!(scene.set_use_texture(99, true), Err(Error::ModelNotFound(99)));
        let model = scene.model(id).unwrap();
        assert_eq!(model.transform, Transform::default());
        assert!(!model.use_texture);
    }

    #[test]
    fn transform_edits_apply_in_place() {
        let mut scene = Scene::new();
        let id = scene.add_model("well.obj", handle(0), 36);
        let edited = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.2, 0.3), 0.5);
        scene.set_transform(id, edited).unwrap();
        scene.set_use_texture(id, true).unwrap();

        let model = scene.model(id).unwrap();
        assert_eq!(model.transform, edited);
        assert!(model.use_texture);
    }

    #[test]
    fn snapshot_serializes_to_the_persisted_shape() {
        let mut scene = Scene::new();
        scene.add_fixed_model(
            "forest.obj",
            handle(9),
            120,
            Transform::new(Vec3::new(-6.0, 6.2, 8.15), Vec3::ZERO, 0.08),
        );
        let id = scene.add_model("well.obj", handle(0), 36);
        scene.set_use_texture(id, true).unwrap();

        let json = serde_json::to_value(scene.snapshot()).unwrap();
        assert_eq!(json["models"][0]["name"], "well.obj");
        assert_eq!(json["models"][0]["useTexture"], true);
        assert_eq!(json["models"][0]["transform"]["scale"], 1.0);
        assert_eq!(json["models"][0]["transform"]["translation"]["x"], 0.0);
        assert_eq!(json["fixedModels"][0]["name"], "forest.obj");
        assert_eq!(
            json["fixedModels"][0]["transform"]["translation"]["y"],
            serde_json::json!(6.2f32)
        );
    }

    #[test]
    fn snapshot_roundtrips_through_json() {
        let mut scene = Scene::new();
        scene.add_model("bridge.obj", handle(0), 42);
        let json = serde_json::to_string(&scene.snapshot()).unwrap();
        let restored: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.models.len(), 1);
        assert_eq!(restored.models[0].name, "bridge.obj");
        assert!(restored.fixed_models.is_empty());
    }
}
