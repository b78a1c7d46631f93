//! Per-instance transformation data.
//!
//! Each placed instance carries a translation, an Euler XYZ rotation in
//! radians, and a single uniform scale factor. The record is what UI edits
//! mutate and what the persisted scene stores; the renderer only ever sees
//! the composed world matrix.

use serde::{Deserialize, Serialize};

use crate::math::{Mat4, Vec3};

/// Translation, Euler XYZ rotation (radians) and uniform scale for one
/// placed instance.
///
/// A scale of zero is legal; it degenerates the instance to a point and
/// renders nothing visible.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Transform {
    pub fn new(translation: Vec3, rotation: Vec3, scale: f32) -> Self {
        Self { translation, rotation, scale }
    }

    /// Compose the world matrix: scale, then rotate about X, Y, Z in that
    /// fixed sequence, then translate.
    ///
    /// The order is a contract shared with every scene persisted so far;
    /// reordering it changes where existing scenes place their instances.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::identity()
            .multiply(Mat4::from_scale(self.scale, self.scale, self.scale))
            .multiply(Mat4::from_angle_x(self.rotation.x))
            .multiply(Mat4::from_angle_y(self.rotation.y))
            .multiply(Mat4::from_angle_z(self.rotation.z))
            .multiply(Mat4::from_translation(
                self.translation.x,
                self.translation.y,
                self.translation.z,
            ))
    }
}

impl Default for Transform {
    /// Identity placement: no move, no rotation, unit scale.
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_transform_composes_to_identity() {
        assert_eq!(Transform::default().to_matrix(), Mat4::identity());
    }

    #[test]
    fn scale_applies_before_translation() {
        // (1,0,0) scaled by 2 lands at (2,0,0), then translates to (3,0,0).
        // Were the order flipped, the translation itself would be scaled
        // and the point would land at (4,0,0).
        let transform = Transform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 2.0);
        let p = transform.to_matrix().transform_point(Vec3::new(1.0, 0.0, 0.0));
        assert!((p.x - 3.0).abs() < 1e-5, "{p:?}");
        assert!(p.y.abs() < 1e-5 && p.z.abs() < 1e-5, "{p:?}");
    }

    #[test]
    fn rotations_apply_in_x_y_z_order() {
        let transform = Transform::new(
            Vec3::ZERO,
            Vec3::new(std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2, 0.0),
            1.0,
        );
        // +Y rotates to +Z about X, then +Z rotates to +X about Y.
        let p = transform.to_matrix().transform_point(Vec3::UNIT_Y);
        assert!((p.x - 1.0).abs() < 1e-5, "{p:?}");
        assert!(p.y.abs() < 1e-5 && p.z.abs() < 1e-5, "{p:?}");
    }
}
