//! Camera types for view and projection matrices.
//!
//! [`Camera`] is the orbiting eye/target/up record the application mutates;
//! [`Projection`] tracks the perspective parameters and follows viewport
//! resizes. Both only produce matrices; uniform upload is the renderer's
//! business.

use crate::{
    error::Error,
    math::{Mat4, Vec3},
};

/// Below this length a camera axis is considered degenerate.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Eye position, look target and up hint defining the camera basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn new(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        Self { eye, target, up }
    }

    /// The camera-basis (look-at) matrix placing the camera in the world.
    /// Callers wanting the view matrix should use
    /// [`view_matrix`](Self::view_matrix), which guards the degenerate
    /// cases first.
    pub fn basis_matrix(&self) -> Mat4 {
        Mat4::look_at(self.eye, self.target, self.up)
    }

    /// The view matrix: the inverted camera basis.
    ///
    /// Rejects a degenerate basis (eye on top of the target, or up parallel
    /// to the view direction) instead of inverting a singular matrix.
    pub fn view_matrix(&self) -> Result<Mat4, Error> {
        let back = self.eye - self.target;
        if back.length() < DEGENERATE_EPSILON {
            return Err(Error::DegenerateCamera);
        }
        if self.up.cross(back.normalize()).length() < DEGENERATE_EPSILON {
            return Err(Error::DegenerateCamera);
        }
        Ok(self.basis_matrix().invert())
    }
}

impl Default for Camera {
    /// The default orbit position looking down at the origin.
    fn default() -> Self {
        Self {
            eye: Vec3::new(5.0, 4.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::UNIT_Y,
        }
    }
}

/// Symmetric perspective projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Vertical field of view in radians, in `(0, PI)`.
    pub fovy: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self { fovy, aspect, znear, zfar }
    }

    /// Track a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy: std::f32::consts::PI * 0.6,
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
