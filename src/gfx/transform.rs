//! # Affine Transforms
//!
//! [`Transform`] wraps a column-major `cgmath` 4x4 matrix. Composition is
//! right-multiplication: `parent * local` yields the world transform of a
//! child, and the incremental edits used by the interaction controller
//! (`translated`, `scaled`, `rotated`) are applied in the local frame, i.e.
//! after the current transform.

use std::ops::Mul;

use cgmath::{Deg, Matrix4, Point3, Quaternion, Rad, SquareMatrix, Transform as _, Vector3};

/// A 4x4 affine transformation (translation, rotation and scale).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix4<f32>,
}

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    pub fn from_matrix(matrix: Matrix4<f32>) -> Self {
        Self { matrix }
    }

    pub fn from_translation(translation: Vector3<f32>) -> Self {
        Self::from_matrix(Matrix4::from_translation(translation))
    }

    pub fn from_scale(scale: f32) -> Self {
        Self::from_matrix(Matrix4::from_scale(scale))
    }

    pub fn from_nonuniform_scale(scale: Vector3<f32>) -> Self {
        Self::from_matrix(Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z))
    }

    pub fn from_rotation(rotation: Quaternion<f32>) -> Self {
        Self::from_matrix(Matrix4::from(rotation))
    }

    /// Rotation of `angle` around `axis` (the axis does not need to be normalized).
    pub fn from_axis_angle(axis: Vector3<f32>, angle: Deg<f32>) -> Self {
        use cgmath::InnerSpace;
        Self::from_matrix(Matrix4::from_axis_angle(axis.normalize(), Rad::from(angle)))
    }

    /// The underlying column-major matrix.
    pub fn matrix(&self) -> Matrix4<f32> {
        self.matrix
    }

    /// Composes `self * local`.
    pub fn then(&self, local: &Transform) -> Transform {
        Transform::from_matrix(self.matrix * local.matrix)
    }

    /// Applies a translation after the current transform.
    pub fn translated(&self, translation: Vector3<f32>) -> Transform {
        self.then(&Transform::from_translation(translation))
    }

    /// Applies a per-axis scale after the current transform.
    pub fn scaled(&self, scale: Vector3<f32>) -> Transform {
        self.then(&Transform::from_nonuniform_scale(scale))
    }

    /// Applies a rotation after the current transform.
    pub fn rotated(&self, rotation: Quaternion<f32>) -> Transform {
        self.then(&Transform::from_rotation(rotation))
    }

    pub fn transform_point(&self, point: Point3<f32>) -> Point3<f32> {
        self.matrix.transform_point(point)
    }

    /// Translation part of the matrix (last column).
    pub fn translation(&self) -> Vector3<f32> {
        self.matrix.w.truncate()
    }

    pub fn inverse(&self) -> Option<Transform> {
        self.matrix.invert().map(Transform::from_matrix)
    }

    /// Element-wise comparison within `epsilon`.
    pub fn approx_eq(&self, other: &Transform, epsilon: f32) -> bool {
        let a: &[f32; 16] = self.matrix.as_ref();
        let b: &[f32; 16] = other.matrix.as_ref();
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() <= epsilon)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix4<f32>> for Transform {
    fn from(matrix: Matrix4<f32>) -> Self {
        Self::from_matrix(matrix)
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        self.then(&rhs)
    }
}

impl<'a, 'b> Mul<&'b Transform> for &'a Transform {
    type Output = Transform;

    fn mul(self, rhs: &'b Transform) -> Transform {
        self.then(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{EuclideanSpace, InnerSpace, Vector3};

    fn close(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (a - b).magnitude() < 1e-5
    }

    #[test]
    fn test_translation_is_applied_in_local_frame() {
        let base = Transform::from_scale(2.0);
        let moved = base.translated(Vector3::new(1.0, 0.0, 0.0));
        // local unit step becomes two world units under the scale
        assert!(close(moved.translation(), Vector3::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn test_composition_matches_matrix_product() {
        let a = Transform::from_translation(Vector3::new(1.0, 2.0, 3.0));
        let b = Transform::from_axis_angle(Vector3::unit_y(), Deg(90.0));
        let c = Transform::from_nonuniform_scale(Vector3::new(1.0, 2.0, 0.5));

        let left = (a * b) * c;
        let right = a * (b * c);
        assert!(left.approx_eq(&right, 1e-5));
        let product = Transform::from_matrix(a.matrix() * b.matrix() * c.matrix());
        assert!(left.approx_eq(&product, 1e-5));
    }

    #[test]
    fn test_transform_point() {
        let t = Transform::from_translation(Vector3::new(0.0, 0.0, -1.0))
            .scaled(Vector3::new(3.0, 3.0, 3.0));
        let p = t.transform_point(Point3::new(1.0, 0.0, 0.0));
        assert!(close(p.to_vec(), Vector3::new(3.0, 0.0, -1.0)));
    }
}
