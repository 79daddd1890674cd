pub mod camera;
pub mod camera_controller;
pub mod trackball;

// Re-export main types
pub use camera::{Camera, CameraConfig, CameraParameters, Lens};
pub use camera_controller::{CameraController, ViewDirection};
pub use trackball::Trackball;
