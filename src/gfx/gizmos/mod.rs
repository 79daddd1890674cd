//! # Transform Gizmos
//!
//! Visual handles shown around the selected actor while it is scaled,
//! translated or rotated. A gizmo is an ordinary [`Group`](crate::gfx::scene::Group)
//! built from the target's bounds and transform:
//!
//! - an overlay line cross through the target's center, one line per axis
//! - three markers at the axis ends, named `"xaxis"`, `"yaxis"` and `"zaxis"`
//!   (cubes for scale, cones for translate, rings for rotate)
//!
//! With an axis filter only the filtered axis keeps its color; the other two
//! turn gray. The rotate gizmo ignores the filter. Gizmos are never pickable
//! and are rebuilt wholesale whenever the mode, filter or target changes.
//!
//! ## Usage
//!
//! ```rust
//! use diorama::gfx::{
//!     geometry::{Axis, BoundingBox},
//!     gizmos::{GizmoConfig, GizmoKind, TransformGizmo},
//!     rendering::ShaderCache,
//!     transform::Transform,
//! };
//!
//! let shaders = ShaderCache::headless();
//! let bounds = BoundingBox::from_points(&[[-1.0, -1.0, -1.0], [1.0, 1.0, 1.0]]);
//! let gizmo = TransformGizmo::build(
//!     GizmoKind::Translate,
//!     Some(Axis::X),
//!     &bounds,
//!     &Transform::identity(),
//!     &GizmoConfig::default(),
//!     &shaders,
//! )
//! .unwrap();
//! assert!(gizmo.group().part_named("xaxis").is_some());
//! ```

use std::fmt;

use crate::gfx::geometry::{primitives::AXIS_GRAY, Axis};

pub mod transform_gizmo;

#[cfg(test)]
mod test_gizmos;

// Re-export main types
pub use transform_gizmo::TransformGizmo;

/// Manipulation a gizmo stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GizmoKind {
    Scale,
    Translate,
    Rotate,
}

impl GizmoKind {
    /// Whether an axis filter changes the gizmo.
    pub fn uses_axis_filter(&self) -> bool {
        !matches!(self, GizmoKind::Rotate)
    }
}

impl fmt::Display for GizmoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GizmoKind::Scale => "scale",
            GizmoKind::Translate => "translate",
            GizmoKind::Rotate => "rotate",
        };
        f.write_str(name)
    }
}

/// Layout and colors of the gizmos.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoConfig {
    /// Added to the target's half size on every axis
    pub margin: f32,
    /// Cube size relative to the gizmo size
    pub scale_marker: f32,
    /// Cone size relative to the gizmo size
    pub translate_marker: f32,
    /// Ring size relative to the gizmo size
    pub rotate_marker: f32,
    /// Colors of the x, y and z axis
    pub axis_colors: [[f32; 3]; 3],
    /// Color of axes hidden by a filter
    pub inactive_color: [f32; 3],
    /// Specular color and shininess of the markers
    pub marker_specular: ([f32; 3], f32),
}

impl Default for GizmoConfig {
    fn default() -> Self {
        Self {
            margin: 1.0,
            scale_marker: 0.03,
            translate_marker: 0.05,
            rotate_marker: 0.08,
            axis_colors: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            inactive_color: AXIS_GRAY,
            marker_specular: ([0.5, 0.5, 0.5], 76.8),
        }
    }
}

impl GizmoConfig {
    /// Color of `axis` under `filter`.
    pub fn axis_color(&self, axis: Axis, filter: Option<Axis>) -> [f32; 3] {
        match filter {
            Some(only) if only != axis => self.inactive_color,
            _ => self.axis_colors[axis.index()],
        }
    }

    pub fn marker_scale(&self, kind: GizmoKind) -> f32 {
        match kind {
            GizmoKind::Scale => self.scale_marker,
            GizmoKind::Translate => self.translate_marker,
            GizmoKind::Rotate => self.rotate_marker,
        }
    }
}
