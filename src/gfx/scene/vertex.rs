//! # Vertex Data Structures
//!
//! The interleaved vertex layout handed to the rendering backend.

/// A 3D vertex with position, normal, color and texture coordinates.
///
/// # Memory Layout
///
/// The `#[repr(C)]` attribute fixes the field order so the struct can be cast
/// to bytes with `bytemuck` and uploaded as-is. Attributes a geometry does
/// not carry are zero-filled.
///
/// | location | attribute    | format      | offset |
/// |----------|--------------|-------------|--------|
/// | 0        | `position`   | `f32 x 3`   | 0      |
/// | 1        | `normal`     | `f32 x 3`   | 12     |
/// | 2        | `color`      | `f32 x 3`   | 24     |
/// | 3        | `tex_coords` | `f32 x 2`   | 36     |
///
/// # Examples
///
/// ```
/// use diorama::gfx::scene::vertex::Vertex3D;
///
/// let vertex = Vertex3D {
///     position: [0.0, 1.0, 0.0],
///     normal: [0.0, 1.0, 0.0],
///     color: [1.0, 1.0, 1.0],
///     tex_coords: [0.5, 0.5],
/// };
/// assert_eq!(bytemuck::bytes_of(&vertex).len(), Vertex3D::STRIDE);
/// ```
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    /// 3D position coordinates [x, y, z]
    pub position: [f32; 3],
    /// 3D normal vector [nx, ny, nz] for lighting calculations
    pub normal: [f32; 3],
    /// Per-vertex color [r, g, b]
    pub color: [f32; 3],
    /// Texture coordinates [u, v]
    pub tex_coords: [f32; 2],
}

impl Vertex3D {
    /// Size in bytes of one interleaved vertex.
    pub const STRIDE: usize = std::mem::size_of::<Vertex3D>();
}
