use cgmath::*;

/// Projection used by the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lens {
    #[default]
    Perspective,
    Orthographic,
}

/// Construction parameters of a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub lens: Lens,
    /// Vertical field of view of the perspective lens
    pub fovy: Deg<f32>,
    /// Visible height of the orthographic lens
    pub height: f32,
    pub znear: f32,
    pub zfar: f32,
    /// Eye-space offset the scene is viewed from
    pub home_position: Vector3<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lens: Lens::Perspective,
            fovy: Deg(45.0),
            height: 3.0,
            znear: 0.1,
            zfar: 1000.0,
            home_position: Vector3::new(0.0, 0.0, 3.5),
        }
    }
}

/// Snapshot of the values that store/recall/reset operate on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParameters {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub focal_distance: f32,
    pub lens: Lens,
    pub height: f32,
}

/// Viewer camera.
///
/// The view matrix rotates the scene by the inverse of `rotation` and then
/// moves it by `-position`, so `position` is an eye-space offset: the home
/// position `(0, 0, 3.5)` looks at the origin from 3.5 units away.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    position: Vector3<f32>,
    rotation: Quaternion<f32>,
    focal_distance: f32,
    lens: Lens,
    fovy: Deg<f32>,
    height: f32,
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: config.home_position,
            rotation: Quaternion::one(),
            focal_distance: config.home_position.magnitude(),
            lens: config.lens,
            fovy: config.fovy,
            height: config.height,
            aspect: 1.0,
            znear: config.znear,
            zfar: config.zfar,
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::from_translation(-self.position) * Matrix4::from(self.rotation.conjugate())
    }

    pub fn projection_matrix(&self) -> Matrix4<f32> {
        match self.lens {
            Lens::Perspective => perspective(self.fovy, self.aspect, self.znear, self.zfar),
            Lens::Orthographic => {
                let half_height = self.height * 0.5;
                let half_width = half_height * self.aspect;
                ortho(
                    -half_width,
                    half_width,
                    -half_height,
                    half_height,
                    self.znear,
                    self.zfar,
                )
            }
        }
    }

    pub fn view_projection_matrix(&self) -> Matrix4<f32> {
        self.projection_matrix() * self.view_matrix()
    }

    /// Camera position in world space.
    pub fn eye(&self) -> Vector3<f32> {
        self.rotation.rotate_vector(self.position)
    }

    pub fn position(&self) -> Vector3<f32> {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    pub fn rotation(&self) -> Quaternion<f32> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quaternion<f32>) {
        self.rotation = rotation.normalize();
    }

    pub fn focal_distance(&self) -> f32 {
        self.focal_distance
    }

    pub fn set_focal_distance(&mut self, distance: f32) {
        self.focal_distance = distance.max(f32::EPSILON);
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect
    }

    /// Non-positive ratios (a collapsed window) are ignored.
    pub fn set_aspect_ratio(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn lens(&self) -> Lens {
        self.lens
    }

    pub fn set_lens(&mut self, lens: Lens) {
        self.lens = lens;
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Scales the visible height of the orthographic lens.
    pub fn scale_height(&mut self, factor: f32) {
        self.height = (self.height * factor).max(f32::EPSILON);
    }

    pub fn parameters(&self) -> CameraParameters {
        CameraParameters {
            position: self.position,
            rotation: self.rotation,
            focal_distance: self.focal_distance,
            lens: self.lens,
            height: self.height,
        }
    }

    pub fn apply(&mut self, parameters: &CameraParameters) {
        self.position = parameters.position;
        self.rotation = parameters.rotation;
        self.focal_distance = parameters.focal_distance;
        self.lens = parameters.lens;
        self.height = parameters.height;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_camera_looks_at_origin() {
        let camera = Camera::default();
        let origin = camera.view_matrix() * Vector4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin.z + 3.5).abs() < 1e-6);
        assert_eq!(camera.focal_distance(), 3.5);
    }

    #[test]
    fn test_rotation_moves_eye() {
        let mut camera = Camera::default();
        camera.set_rotation(Quaternion::from_angle_y(Deg(90.0)));
        let eye = camera.eye();
        assert!((eye.x - 3.5).abs() < 1e-5);
        assert!(eye.z.abs() < 1e-5);
    }

    #[test]
    fn test_orthographic_height() {
        let mut camera = Camera::default();
        camera.set_lens(Lens::Orthographic);
        camera.scale_height(2.0);
        assert_eq!(camera.height(), 6.0);

        let projection = camera.projection_matrix();
        assert!((projection.y.y - 2.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_aspect_ratio_is_ignored() {
        let mut camera = Camera::default();
        camera.set_aspect_ratio(2.0);
        camera.set_aspect_ratio(0.0);
        assert_eq!(camera.aspect_ratio(), 2.0);
    }

    #[test]
    fn test_parameters_round_trip() {
        let mut camera = Camera::default();
        let stored = camera.parameters();

        camera.set_position(Vector3::new(1.0, 2.0, 3.0));
        camera.set_lens(Lens::Orthographic);
        camera.apply(&stored);

        assert_eq!(camera.parameters(), stored);
    }
}
