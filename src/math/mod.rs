//! Vector and matrix math for scene and camera transforms.
//!
//! Matrices are 4x4 homogeneous, stored row-major as a flat `[f32; 16]`,
//! and follow the row-vector convention: a point transforms as `p' = p * M`
//! and "apply A, then B" composes as `A * B`. The whole crate (world-matrix
//! composition, camera basis, projection) depends on this convention, so it
//! is a tested contract rather than an implementation detail.

pub mod mat4;
pub mod vec3;

pub use mat4::Mat4;
pub use vec3::Vec3;
