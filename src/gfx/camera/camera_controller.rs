use cgmath::*;

use super::{
    camera::{Camera, Lens},
    trackball::Trackball,
};

/// Standard view directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDirection {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

impl ViewDirection {
    /// Scene rotation that faces this side of the scene.
    pub fn rotation(&self) -> Quaternion<f32> {
        match self {
            ViewDirection::Front => Quaternion::one(),
            ViewDirection::Back => Quaternion::from_angle_y(Deg(180.0)),
            ViewDirection::Left => Quaternion::from_angle_y(Deg(-90.0)),
            ViewDirection::Right => Quaternion::from_angle_y(Deg(90.0)),
            ViewDirection::Top => Quaternion::from_angle_x(Deg(90.0)),
            ViewDirection::Bottom => Quaternion::from_angle_x(Deg(-90.0)),
        }
    }
}

/// Orbit, pan and zoom of the scene camera.
///
/// The trackball holds the scene rotation; the camera is kept at its inverse
/// after every change.
#[derive(Debug, Clone, Copy)]
pub struct CameraController {
    pub trackball: Trackball,
    /// Divisor turning wheel angle units into a zoom exponent
    pub zoom_divisor: f32,
    /// Eye-space units per NDC unit of pan drag
    pub pan_speed: f32,
    last_pan: Option<Vector2<f32>>,
}

impl CameraController {
    pub fn new(trackball: Trackball, zoom_divisor: f32, pan_speed: f32) -> Self {
        Self {
            trackball,
            zoom_divisor,
            pan_speed,
            last_pan: None,
        }
    }

    /// Copies the trackball rotation into the camera.
    pub fn sync(&self, camera: &mut Camera) {
        camera.set_rotation(self.trackball.rotation().invert());
    }

    pub fn begin_orbit(&mut self, point: Vector2<f32>) {
        self.trackball.press(point);
    }

    pub fn orbit(&mut self, point: Vector2<f32>, camera: &mut Camera) {
        self.trackball.drag(point);
        self.sync(camera);
    }

    pub fn end_orbit(&mut self, point: Vector2<f32>, camera: &mut Camera) {
        self.trackball.release(point);
        self.sync(camera);
    }

    pub fn begin_pan(&mut self, point: Vector2<f32>) {
        self.last_pan = Some(point);
    }

    /// Moves the camera opposite to the drag so the scene follows the pointer.
    pub fn pan(&mut self, point: Vector2<f32>, camera: &mut Camera) {
        let Some(last) = self.last_pan.replace(point) else {
            return;
        };
        let delta = point - last;
        let offset = Vector3::new(-delta.x, -delta.y, 0.0) * self.pan_speed;
        camera.set_position(camera.position() + offset);
    }

    pub fn end_pan(&mut self) {
        self.last_pan = None;
    }

    /// Zooms by `exp(-wheel_delta / zoom_divisor)`.
    ///
    /// A perspective camera dollies so the focal distance scales by the
    /// multiplier; an orthographic camera scales its visible height instead.
    pub fn zoom(&self, wheel_delta: f32, camera: &mut Camera) {
        let multiplier = (-wheel_delta / self.zoom_divisor).exp();

        match camera.lens() {
            Lens::Orthographic => camera.scale_height(multiplier),
            Lens::Perspective => {
                let old_focal = camera.focal_distance();
                let new_focal = old_focal * multiplier;
                let position = camera.position() + Vector3::unit_z() * (new_focal - old_focal);
                camera.set_position(position);
                camera.set_focal_distance(new_focal);
            }
        }
    }

    pub fn view(&mut self, direction: ViewDirection, camera: &mut Camera) {
        self.reset_rotation(direction.rotation(), camera);
    }

    /// Replaces the scene rotation, e.g. after a camera recall.
    pub fn reset_rotation(&mut self, rotation: Quaternion<f32>, camera: &mut Camera) {
        self.trackball.reset(rotation);
        self.sync(camera);
    }
}
