//! # Geometry Buffers
//!
//! A [`GeometryBuffer`] is the validated, immutable form of a [`GeometryData`].
//! Validation happens once in [`GeometryBuffer::create`]; afterwards the
//! buffer only answers questions (capabilities, draw call, interleaved bytes)
//! and is never modified. Each buffer is owned by exactly one actor.

use super::{GeometryData, Topology};
use crate::{error::GeometryError, gfx::scene::vertex::Vertex3D};

/// Which optional attributes a buffer carries.
///
/// Shader selection keys off these flags, so they are derived once from the
/// arrays the buffer was created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Capabilities {
    pub has_color: bool,
    pub has_normal: bool,
    pub has_texcoord: bool,
    pub indexed: bool,
}

/// How a buffer is submitted to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCall {
    /// Indexed drawing of `count` elements.
    Elements { topology: Topology, count: u32 },
    /// Non-indexed drawing of `count` vertices starting at `first`.
    Arrays {
        topology: Topology,
        first: u32,
        count: u32,
    },
}

impl DrawCall {
    pub fn topology(&self) -> Topology {
        match self {
            DrawCall::Elements { topology, .. } | DrawCall::Arrays { topology, .. } => *topology,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            DrawCall::Elements { count, .. } | DrawCall::Arrays { count, .. } => *count,
        }
    }
}

/// Immutable vertex and index storage for one actor.
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    data: GeometryData,
    capabilities: Capabilities,
}

impl GeometryBuffer {
    /// Validate `data` and take ownership of it.
    ///
    /// Fails when an optional attribute is not parallel to the positions, when
    /// the element count does not form whole primitives, or when an index is
    /// out of range.
    pub fn create(data: GeometryData) -> Result<Self, GeometryError> {
        let expected = data.vertices.len();

        check_parallel("normals", expected, data.normals.len())?;
        check_parallel("colors", expected, data.colors.len())?;
        check_parallel("texture coordinates", expected, data.tex_coords.len())?;

        let count = data.element_count();
        if count % data.topology.elements_per_primitive() != 0 {
            return Err(GeometryError::IncompleteTopology {
                topology: data.topology,
                count,
            });
        }

        if let Some(&index) = data.indices.iter().find(|&&index| index as usize >= expected) {
            return Err(GeometryError::IndexOutOfRange {
                index: index as usize,
                count: expected,
            });
        }

        let capabilities = Capabilities {
            has_color: !data.colors.is_empty(),
            has_normal: !data.normals.is_empty(),
            has_texcoord: !data.tex_coords.is_empty(),
            indexed: !data.indices.is_empty(),
        };

        Ok(Self { data, capabilities })
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn topology(&self) -> Topology {
        self.data.topology
    }

    /// The draw call matching the stored topology and element count.
    pub fn draw_call(&self) -> DrawCall {
        let topology = self.data.topology;
        let count = self.data.element_count() as u32;

        if self.capabilities.indexed {
            DrawCall::Elements { topology, count }
        } else {
            DrawCall::Arrays {
                topology,
                first: 0,
                count,
            }
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.data.vertex_count()
    }

    pub fn triangle_count(&self) -> usize {
        self.data.triangle_count()
    }

    pub fn data(&self) -> &GeometryData {
        &self.data
    }

    pub fn indices(&self) -> &[u32] {
        &self.data.indices
    }

    /// Interleaved vertices; absent attributes are zero-filled.
    pub fn vertices(&self) -> Vec<Vertex3D> {
        let data = &self.data;
        (0..data.vertices.len())
            .map(|i| Vertex3D {
                position: data.vertices[i],
                normal: data.normals.get(i).copied().unwrap_or_default(),
                color: data.colors.get(i).copied().unwrap_or_default(),
                tex_coords: data.tex_coords.get(i).copied().unwrap_or_default(),
            })
            .collect()
    }

    /// Interleaved vertex bytes ready for upload.
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.vertices()).to_vec()
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data.indices)
    }
}

fn check_parallel(
    attribute: &'static str,
    expected: usize,
    found: usize,
) -> Result<(), GeometryError> {
    if found == 0 || found == expected {
        Ok(())
    } else {
        Err(GeometryError::AttributeLength {
            attribute,
            expected,
            found,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::primitives;

    fn triangle() -> GeometryData {
        let mut data = GeometryData::new();
        data.vertices = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        data
    }

    #[test]
    fn test_capabilities_follow_attributes() {
        let mut data = triangle();
        data.normals = vec![[0.0, 0.0, 1.0]; 3];

        let buffer = GeometryBuffer::create(data).unwrap();
        let caps = buffer.capabilities();
        assert!(caps.has_normal);
        assert!(!caps.has_color);
        assert!(!caps.has_texcoord);
        assert!(!caps.indexed);
        assert_eq!(
            buffer.draw_call(),
            DrawCall::Arrays {
                topology: Topology::Triangles,
                first: 0,
                count: 3
            }
        );
    }

    #[test]
    fn test_indexed_buffer_draws_elements() {
        let buffer = GeometryBuffer::create(primitives::generate_cube()).unwrap();
        assert_eq!(
            buffer.draw_call(),
            DrawCall::Elements {
                topology: Topology::Triangles,
                count: 36
            }
        );
        assert_eq!(buffer.index_bytes().len(), 36 * 4);
    }

    #[test]
    fn test_mismatched_colors_are_rejected() {
        let mut data = triangle();
        data.colors = vec![[1.0, 0.0, 0.0]; 2];

        match GeometryBuffer::create(data) {
            Err(GeometryError::AttributeLength {
                attribute,
                expected,
                found,
            }) => {
                assert_eq!(attribute, "colors");
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_incomplete_primitives_are_rejected() {
        let mut data = triangle();
        data.vertices.push([1.0, 1.0, 0.0]);
        assert!(matches!(
            GeometryBuffer::create(data),
            Err(GeometryError::IncompleteTopology { count: 4, .. })
        ));

        let mut lines = GeometryData::with_topology(Topology::Lines);
        lines.vertices = vec![[0.0; 3]; 3];
        assert!(GeometryBuffer::create(lines).is_err());
    }

    #[test]
    fn test_index_out_of_range() {
        let mut data = triangle();
        data.indices = vec![0, 1, 3];
        assert!(matches!(
            GeometryBuffer::create(data),
            Err(GeometryError::IndexOutOfRange { index: 3, count: 3 })
        ));
    }

    #[test]
    fn test_interleaved_bytes() {
        let mut data = triangle();
        data.paint([0.2, 0.4, 0.6]);
        let buffer = GeometryBuffer::create(data).unwrap();

        let vertices = buffer.vertices();
        assert_eq!(vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(vertices[1].color, [0.2, 0.4, 0.6]);
        assert_eq!(vertices[1].normal, [0.0, 0.0, 0.0]);
        assert_eq!(
            buffer.vertex_bytes().len(),
            3 * std::mem::size_of::<Vertex3D>()
        );
    }
}
