//! # Prelude
//!
//! Commonly used types of the viewer in one import.
//!
//! ```rust
//! use diorama::prelude::*;
//!
//! let mut viewer = Viewer::headless(ViewerConfig::default());
//! let id = viewer.add_shape(Shape::Sphere(SphereOptions::default())).unwrap();
//! viewer.scene_mut().select(id).unwrap();
//! ```

// Application
pub use crate::app::{Viewer, ViewerConfig};
pub use crate::error::{GeometryError, InteractionError, SceneError, ShaderError};

// Scene and geometry
pub use crate::gfx::geometry::{Axis, BoundingBox, GeometryBuffer, GeometryData, Topology};
pub use crate::gfx::scene::{
    Actor, ActorId, ConeOptions, CylinderOptions, Drawable, GridOptions, Group, IcosphereOptions,
    Node, PyramidOptions, RenderType, Scene, Shape, SphereOptions, TorusOptions,
};
pub use crate::gfx::transform::Transform;

// Rendering
pub use crate::gfx::rendering::{
    DrawCommand, DrawList, DrawSink, DrawStyle, ShaderCache, ShaderCompiler, ShaderProvider,
};
pub use crate::gfx::resources::{Light, Material};

// Interaction
pub use crate::gfx::camera::{Camera, Lens, ViewDirection};
pub use crate::gfx::gizmos::GizmoKind;
pub use crate::gfx::interaction::{InputEvent, InteractionState, KeyInput, PointerButton};

// Performance monitoring
pub use crate::performance::{PerformanceMetrics, PerformanceMonitor};

// Re-export common external dependencies
pub use cgmath::{Deg, Quaternion, Vector2, Vector3};
