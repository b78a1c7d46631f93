use stage_ngin::{GeometryHandle, MeshRenderer, ObjMesh};

/// Stand-in for the external rasterizer: records every upload and mints
/// sequential geometry handles, so tests can assert exactly what crossed
/// the renderer seam.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) uploads: Vec<(String, usize)>,
}

impl MeshRenderer for RecordingRenderer {
    fn upload_mesh(&mut self, name: &str, mesh: &ObjMesh) -> GeometryHandle {
        let handle = GeometryHandle::new(self.uploads.len() as u32);
        self.uploads.push((name.to_string(), mesh.vertex_count()));
        handle
    }
}
