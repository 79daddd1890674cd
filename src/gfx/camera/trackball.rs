//! Virtual trackball
//!
//! Pointer positions in normalized device coordinates are projected onto a
//! unit sphere (or a hyperbolic sheet outside it) and the rotation between two
//! successive projections becomes the drag increment.

use cgmath::*;

/// Arcball rotation driven by pointer drags.
#[derive(Debug, Clone, Copy)]
pub struct Trackball {
    rotation: Quaternion<f32>,
    last: Option<Vector3<f32>>,
    /// Multiplier applied to the drag angle
    pub sensitivity: f32,
}

impl Trackball {
    pub fn new(rotation: Quaternion<f32>, sensitivity: f32) -> Self {
        Self {
            rotation,
            last: None,
            sensitivity,
        }
    }

    /// Starts a drag at `point`.
    pub fn press(&mut self, point: Vector2<f32>) {
        self.last = Some(project(point));
    }

    /// Continues a drag and returns the rotation since the previous call.
    ///
    /// The increment is also folded into the accumulated [`Trackball::rotation`].
    /// Outside a drag the identity is returned.
    pub fn drag(&mut self, point: Vector2<f32>) -> Quaternion<f32> {
        let Some(last) = self.last else {
            return Quaternion::one();
        };

        let current = project(point);
        self.last = Some(current);

        let axis = last.cross(current);
        if axis.magnitude2() <= f32::EPSILON {
            return Quaternion::one();
        }

        let angle = last.dot(current).clamp(-1.0, 1.0).acos() * self.sensitivity;
        let delta = Quaternion::from_axis_angle(axis.normalize(), Rad(angle));
        self.rotation = (delta * self.rotation).normalize();
        delta
    }

    /// Ends a drag; returns the final increment.
    pub fn release(&mut self, point: Vector2<f32>) -> Quaternion<f32> {
        let delta = self.drag(point);
        self.last = None;
        delta
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }

    pub fn rotation(&self) -> Quaternion<f32> {
        self.rotation
    }

    /// Replaces the accumulated rotation and abandons any drag.
    pub fn reset(&mut self, rotation: Quaternion<f32>) {
        self.rotation = rotation;
        self.last = None;
    }
}

impl Default for Trackball {
    fn default() -> Self {
        Self::new(Quaternion::one(), 1.0)
    }
}

fn project(point: Vector2<f32>) -> Vector3<f32> {
    let d2 = point.magnitude2();
    let z = if d2 <= 0.5 {
        (1.0 - d2).sqrt()
    } else {
        0.5 / d2.sqrt()
    };
    Vector3::new(point.x, point.y, z).normalize()
}
