use std::ops::Mul;

use crate::math::vec3::Vec3;

/// A 4x4 homogeneous transform, row-major, row-vector convention.
///
/// `p' = p * M`, so chained application reads left to right:
/// `p * (A * B)` applies `A` first, then `B`. The rotation sign layouts and
/// the perspective/look-at forms below all assume this convention; they are
/// load-bearing for the world-matrix composition order and must not be
/// transposed independently of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub [f32; 16]);

impl Mat4 {
    pub fn identity() -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    pub fn from_translation(tx: f32, ty: f32, tz: f32) -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            tx, ty, tz, 1.0,
        ])
    }

    pub fn from_scale(sx: f32, sy: f32, sz: f32) -> Self {
        Self([
            sx, 0.0, 0.0, 0.0, //
            0.0, sy, 0.0, 0.0, //
            0.0, 0.0, sz, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about +X: +Y rotates towards +Z.
    pub fn from_angle_x(radians: f32) -> Self {
        let c = radians.cos();
        let s = radians.sin();
        Self([
            1.0, 0.0, 0.0, 0.0, //
            0.0, c, s, 0.0, //
            0.0, -s, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about +Y: +Z rotates towards +X.
    pub fn from_angle_y(radians: f32) -> Self {
        let c = radians.cos();
        let s = radians.sin();
        Self([
            c, 0.0, -s, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            s, 0.0, c, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Right-handed rotation about +Z: +X rotates towards +Y.
    pub fn from_angle_z(radians: f32) -> Self {
        let c = radians.cos();
        let s = radians.sin();
        Self([
            c, s, 0.0, 0.0, //
            -s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// Symmetric perspective projection mapping the view frustum to
    /// `z in [-1, 1]` clip space.
    ///
    /// Preconditions: `fovy` in `(0, PI)`, `aspect > 0`, `0 < znear < zfar`.
    pub fn from_perspective(fovy: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        debug_assert!(fovy > 0.0 && fovy < std::f32::consts::PI);
        debug_assert!(aspect > 0.0);
        debug_assert!(0.0 < znear && znear < zfar);

        let f = (std::f32::consts::FRAC_PI_2 - 0.5 * fovy).tan();
        let range_inv = 1.0 / (znear - zfar);
        Self([
            f / aspect, 0.0, 0.0, 0.0, //
            0.0, f, 0.0, 0.0, //
            0.0, 0.0, (znear + zfar) * range_inv, -1.0, //
            0.0, 0.0, znear * zfar * range_inv * 2.0, 0.0,
        ])
    }

    /// Camera basis matrix: rows are the right, up and back axes, the
    /// translation row is `eye`. This places the camera in the world; the
    /// view matrix for rendering is its [`invert`](Self::invert).
    ///
    /// Precondition: `eye != target` and `up` not parallel to the view
    /// direction, otherwise an axis degenerates to zero length. The camera
    /// component checks this before calling.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let back = (eye - target).normalize();
        let right = up.cross(back).normalize();
        let true_up = back.cross(right).normalize();

        Self([
            right.x, right.y, right.z, 0.0, //
            true_up.x, true_up.y, true_up.z, 0.0, //
            back.x, back.y, back.z, 0.0, //
            eye.x, eye.y, eye.z, 1.0,
        ])
    }

    /// Standard matrix product: `result[i,j] = sum_k self[i,k] * rhs[k,j]`.
    /// Not commutative.
    pub fn multiply(self, rhs: Self) -> Self {
        let a = &self.0;
        let b = &rhs.0;
        let mut result = [0.0f32; 16];
        for i in 0..4 {
            for j in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += a[i * 4 + k] * b[k * 4 + j];
                }
                result[i * 4 + j] = sum;
            }
        }
        Self(result)
    }

    /// General inverse by cofactor expansion (adjugate over determinant).
    ///
    /// Makes no affine or orthogonality assumption, so it correctly inverts
    /// camera basis and projection matrices. A singular input propagates
    /// non-finite entries through the `1/det` factor; callers guard the
    /// call site instead of inspecting the result.
    pub fn invert(self) -> Self {
        let m = &self.0;
        let mut adj = [0.0f32; 16];
        for row in 0..4 {
            for col in 0..4 {
                let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
                // The adjugate is the transposed cofactor matrix.
                adj[col * 4 + row] = sign * minor(m, row, col);
            }
        }
        let det: f32 = (0..4).map(|col| m[col] * adj[col * 4]).sum();
        let inv_det = 1.0 / det;
        Self(adj.map(|v| v * inv_det))
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(self) -> f32 {
        let m = &self.0;
        (0..4)
            .map(|col| {
                let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
                sign * m[col] * minor(m, 0, col)
            })
            .sum()
    }

    /// Transform a point as a row vector with `w = 1`, dividing by the
    /// resulting `w` when it is non-zero (projective case).
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        let m = &self.0;
        let x = p.x * m[0] + p.y * m[4] + p.z * m[8] + m[12];
        let y = p.x * m[1] + p.y * m[5] + p.z * m[9] + m[13];
        let z = p.x * m[2] + p.y * m[6] + p.z * m[10] + m[14];
        let w = p.x * m[3] + p.y * m[7] + p.z * m[11] + m[15];
        if w != 0.0 {
            Vec3::new(x / w, y / w, z / w)
        } else {
            Vec3::new(x, y, z)
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl From<Mat4> for [f32; 16] {
    fn from(m: Mat4) -> Self {
        m.0
    }
}

/// Determinant of the 3x3 submatrix left after removing `row` and `col`.
fn minor(m: &[f32; 16], row: usize, col: usize) -> f32 {
    let mut sub = [0.0f32; 9];
    let mut idx = 0;
    for r in 0..4 {
        if r == row {
            continue;
        }
        for c in 0..4 {
            if c == col {
                continue;
            }
            sub[idx] = m[r * 4 + c];
            idx += 1;
        }
    }
    sub[0] * (sub[4] * sub[8] - sub[5] * sub[7]) - sub[1] * (sub[3] * sub[8] - sub[5] * sub[6])
        + sub[2] * (sub[3] * sub[7] - sub[4] * sub[6])
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f32 = 1e-5;

    fn assert_mat_eq(a: Mat4, b: Mat4) {
        for (i, (x, y)) in a.0.iter().zip(b.0.iter()).enumerate() {
            assert!(
                (x - y).abs() < TOLERANCE,
                "element {i} differs: {x} vs {y}\nleft: {a:?}\nright: {b:?}"
            );
        }
    }

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!((a.x - b.x).abs() < TOLERANCE, "{a:?} vs {b:?}");
        assert!((a.y - b.y).abs() < TOLERANCE, "{a:?} vs {b:?}");
        assert!((a.z - b.z).abs() < TOLERANCE, "{a:?} vs {b:?}");
    }

    // A general, clearly non-orthogonal invertible matrix for inverse tests.
    fn general_matrix() -> Mat4 {
        let basis = Mat4::look_at(
            Vec3::new(1.5, -1.0, 2.0),
            Vec3::new(0.2, 0.4, 0.0),
            Vec3::UNIT_Y,
        );
        let projection = Mat4::from_perspective(1.0, 1.5, 0.1, 10.0);
        basis.multiply(projection)
    }

    #[test]
    fn identity_is_neutral_on_both_sides() {
        let m = general_matrix();
        assert_mat_eq(Mat4::identity().multiply(m), m);
        assert_mat_eq(m.multiply(Mat4::identity()), m);
    }

    #[test]
    fn multiply_is_not_commutative() {
        let a = Mat4::from_translation(1.0, 0.0, 0.0);
        let b = Mat4::from_scale(2.0, 2.0, 2.0);
        assert_ne!(a.multiply(b), b.multiply(a));
    }

    #[test]
    fn inverse_roundtrips_to_identity() {
        let m = general_matrix();
        assert_mat_eq(m.multiply(m.invert()), Mat4::identity());
        assert_mat_eq(m.invert().multiply(m), Mat4::identity());
    }

    #[test]
    fn determinant_of_flattening_scale_is_zero() {
        assert_eq!(Mat4::from_scale(1.0, 1.0, 0.0).determinant(), 0.0);
    }

    #[test]
    fn rotation_x_turns_y_towards_z() {
        let m = Mat4::from_angle_x(std::f32::consts::FRAC_PI_2);
        assert_vec_eq(m.transform_point(Vec3::UNIT_Y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn rotation_y_turns_z_towards_x() {
        let m = Mat4::from_angle_y(std::f32::consts::FRAC_PI_2);
        assert_vec_eq(
            m.transform_point(Vec3::new(0.0, 0.0, 1.0)),
            Vec3::new(1.0, 0.0, 0.0),
        );
    }

    #[test]
    fn rotation_z_turns_x_towards_y() {
        let m = Mat4::from_angle_z(std::f32::consts::FRAC_PI_2);
        assert_vec_eq(m.transform_point(Vec3::new(1.0, 0.0, 0.0)), Vec3::UNIT_Y);
    }

    #[test]
    fn perspective_maps_near_and_far_planes_to_clip_bounds() {
        let m = Mat4::from_perspective(std::f32::consts::FRAC_PI_3, 1.0, 0.1, 100.0);
        // The camera looks down -Z in view space.
        let near = m.transform_point(Vec3::new(0.0, 0.0, -0.1));
        let far = m.transform_point(Vec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < TOLERANCE, "near plane: {near:?}");
        assert!((far.z - 1.0).abs() < TOLERANCE, "far plane: {far:?}");
    }

    #[test]
    fn look_at_places_eye_in_translation_row() {
        let eye = Vec3::new(5.0, 4.0, 5.0);
        let m = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y);
        assert_vec_eq(Vec3::new(m.0[12], m.0[13], m.0[14]), eye);
    }

    #[test]
    fn inverted_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let view = Mat4::look_at(eye, Vec3::ZERO, Vec3::UNIT_Y).invert();
        assert_vec_eq(view.transform_point(eye), Vec3::ZERO);
    }
}
