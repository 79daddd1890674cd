//! # Geometry Generation and Storage
//!
//! This module holds the raw arrays produced when an actor generates its
//! geometry ([`GeometryData`]), the validated and immutable buffer an actor
//! draws from ([`GeometryBuffer`]), and the untransformed [`BoundingBox`] used
//! for gizmo placement and picking.
//!
//! ## Sources
//!
//! - [`primitives`] - procedural shapes (cube, sphere, cone, torus, grid, ...)
//! - [`obj`] - OBJ/MTL models loaded through `tobj`
//!
//! ## Usage
//!
//! ```rust
//! use diorama::gfx::geometry::{primitives, GeometryBuffer};
//!
//! let cube = primitives::generate_cube();
//! let bounds = cube.bounds();
//! let buffer = GeometryBuffer::create(cube).unwrap();
//! assert!(buffer.capabilities().indexed);
//! assert_eq!(bounds.size().x, 1.0);
//! ```

pub mod bounds;
pub mod buffer;
pub mod obj;
pub mod primitives;

pub use bounds::BoundingBox;
pub use buffer::{Capabilities, DrawCall, GeometryBuffer};

/// Primitive type the vertex (or index) stream is assembled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Independent triangles, three elements each.
    Triangles,
    /// Independent line segments, two elements each.
    Lines,
    /// Three-vertex patches fed to the tessellation stages.
    Patches,
}

impl Topology {
    /// Number of elements consumed by one primitive.
    pub fn elements_per_primitive(&self) -> usize {
        match self {
            Topology::Triangles | Topology::Patches => 3,
            Topology::Lines => 2,
        }
    }
}

/// A principal axis, used by axis filters and gizmo markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Position of the axis in `[x, y, z]` arrays.
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    pub fn unit(&self) -> [f32; 3] {
        let mut unit = [0.0; 3];
        unit[self.index()] = 1.0;
        unit
    }

    /// Gizmo part name of the marker on this axis.
    pub fn marker_name(&self) -> &'static str {
        match self {
            Axis::X => "xaxis",
            Axis::Y => "yaxis",
            Axis::Z => "zaxis",
        }
    }

    pub fn from_marker_name(name: &str) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| axis.marker_name() == name)
    }

    /// Maps the `x`/`y`/`z` keys (either case) to an axis.
    pub fn from_key(key: char) -> Option<Axis> {
        match key.to_ascii_lowercase() {
            'x' => Some(Axis::X),
            'y' => Some(Axis::Y),
            'z' => Some(Axis::Z),
            _ => None,
        }
    }
}

/// Raw arrays produced by geometry generation, before they are bound into a
/// [`GeometryBuffer`].
#[derive(Debug, Clone)]
pub struct GeometryData {
    /// Vertex positions (x, y, z)
    pub vertices: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z); empty when the shape has none
    pub normals: Vec<[f32; 3]>,
    /// Per-vertex colors (r, g, b); empty when the shape uses a uniform material
    pub colors: Vec<[f32; 3]>,
    /// Texture coordinates (u, v); empty when absent
    pub tex_coords: Vec<[f32; 2]>,
    /// Element indices; empty for non-indexed drawing
    pub indices: Vec<u32>,
    /// How the elements are assembled
    pub topology: Topology,
}

impl GeometryData {
    /// Create an empty triangle geometry.
    pub fn new() -> Self {
        Self::with_topology(Topology::Triangles)
    }

    pub fn with_topology(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            tex_coords: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    /// Get the number of vertices in this geometry
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of elements drawn: indices when indexed, vertices otherwise.
    pub fn element_count(&self) -> usize {
        if self.indices.is_empty() {
            self.vertices.len()
        } else {
            self.indices.len()
        }
    }

    /// Get the number of triangles (or patches) in this geometry
    pub fn triangle_count(&self) -> usize {
        match self.topology {
            Topology::Lines => 0,
            Topology::Triangles | Topology::Patches => self.element_count() / 3,
        }
    }

    /// Bounding box of the raw, untransformed positions.
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Fills `colors` with one color for every vertex.
    pub fn paint(&mut self, color: [f32; 3]) {
        self.colors = vec![color; self.vertices.len()];
    }
}

impl Default for GeometryData {
    fn default() -> Self {
        Self::new()
    }
}
