//! stage-ngin
//!
//! A lightweight, cross-platform staging core for placing, transforming and
//! persisting OBJ mesh instances in a shared scene. This crate exposes a
//! small surface for parsing mesh files into flat attribute buffers,
//! composing camera and per-instance world matrices, and handing both to an
//! external rasterizer each frame. The design keeps all GPU, windowing and
//! UI concerns on the far side of a narrow renderer seam so the same core
//! runs natively and on the web.
//!
//! High-level modules
//! - `math`: row-major 4x4 matrix and 3-vector primitives (row-vector convention)
//! - `camera`: eye/target/up camera and perspective projection records
//! - `data_structures`: engine data models (transforms, the scene aggregate)
//! - `resources`: helpers to fetch and parse OBJ mesh files
//! - `render`: renderer seam and per-frame draw-list composition
//! - `stage`: high level flow control (two-phase loading, scene persistence)
//! - `error`: classified failure conditions
//! - `logging`: `log` backend initialization per platform
//!

pub mod camera;
pub mod data_structures;
pub mod error;
pub mod logging;
pub mod math;
pub mod render;
pub mod resources;
pub mod stage;

// Re-exports commonly used types for convenience in downstream code.
pub use camera::{Camera, Projection};
pub use data_structures::scene::{
    FixedModelInstance, FixedModelRecord, ModelInstance, ModelRecord, Scene, SceneSnapshot,
};
pub use data_structures::transform::Transform;
pub use error::Error;
pub use math::{Mat4, Vec3};
pub use render::{DrawCall, Frame, GeometryHandle, MeshRenderer};
pub use resources::mesh::{ObjMesh, ObjWarning, parse_obj};
pub use stage::Stage;
