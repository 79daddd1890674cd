//! # Shape Descriptions
//!
//! A [`Shape`] is the construction recipe an actor generates its geometry
//! from. Each parametric shape has an options struct with `Default` values;
//! the options are range-checked before anything is generated, so a bad value
//! surfaces as [`GeometryError::InvalidOption`] rather than as a degenerate
//! mesh.

use std::path::PathBuf;

use crate::{
    error::GeometryError,
    gfx::geometry::{obj, primitives, GeometryData, Topology},
};

/// Highest tessellation level the patch programs accept.
pub const MAX_SUBDIVISION_LEVEL: u32 = 64;

/// UV sphere options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereOptions {
    pub radius: f32,
    /// Segments around the equator
    pub horizontal_segments: u32,
    /// Rings from pole to pole
    pub vertical_segments: u32,
    /// Color each vertex by the absolute value of its position
    pub use_vertex_color: bool,
}

impl Default for SphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            horizontal_segments: 30,
            vertical_segments: 30,
            use_vertex_color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConeOptions {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for ConeOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            segments: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CylinderOptions {
    pub radius: f32,
    pub height: f32,
    pub segments: u32,
}

impl Default for CylinderOptions {
    fn default() -> Self {
        Self {
            radius: 0.5,
            height: 1.0,
            segments: 16,
        }
    }
}

/// Icosahedron control mesh refined on the GPU by tessellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IcosphereOptions {
    pub radius: f32,
    /// Initial tessellation level
    pub level: u32,
    pub use_vertex_color: bool,
}

impl Default for IcosphereOptions {
    fn default() -> Self {
        Self {
            radius: 1.0,
            level: 1,
            use_vertex_color: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidOptions {
    pub height: f32,
    /// Duplicate vertices per face for flat per-face normals
    pub faceted: bool,
}

impl Default for PyramidOptions {
    fn default() -> Self {
        Self {
            height: 1.0,
            faceted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusOptions {
    pub major_radius: f32,
    pub minor_radius: f32,
    pub rings: u32,
    pub sides: u32,
}

impl Default for TorusOptions {
    fn default() -> Self {
        Self {
            major_radius: 1.0,
            minor_radius: 0.25,
            rings: 32,
            sides: 16,
        }
    }
}

/// Floor grid options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridOptions {
    /// Lines on each side of the origin, per direction
    pub divisions: u32,
    pub spacing: f32,
    pub color: [f32; 3],
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            divisions: 10,
            spacing: 1.0,
            color: primitives::AXIS_GRAY,
        }
    }
}

/// What an actor is built from.
#[derive(Debug, Clone)]
pub enum Shape {
    Cube,
    Sphere(SphereOptions),
    Cone(ConeOptions),
    Cylinder(CylinderOptions),
    Icosphere(IcosphereOptions),
    Pyramid(PyramidOptions),
    Torus(TorusOptions),
    /// Three unit lines colored x, y, z; used by gizmos
    AxisCross([[f32; 3]; 3]),
    Grid(GridOptions),
    /// A Wavefront OBJ file and its material libraries
    Obj(PathBuf),
    /// Caller-supplied arrays
    Mesh(GeometryData),
}

impl Shape {
    /// Checks the options without generating anything.
    pub fn validate(&self) -> Result<(), GeometryError> {
        match self {
            Shape::Cube | Shape::AxisCross(_) | Shape::Mesh(_) => Ok(()),
            Shape::Sphere(options) => {
                positive("radius", options.radius)?;
                at_least("horizontal_segments", options.horizontal_segments, 3)?;
                at_least("vertical_segments", options.vertical_segments, 2)
            }
            Shape::Cone(options) => {
                positive("radius", options.radius)?;
                positive("height", options.height)?;
                at_least("segments", options.segments, 3)
            }
            Shape::Cylinder(options) => {
                positive("radius", options.radius)?;
                positive("height", options.height)?;
                at_least("segments", options.segments, 3)
            }
            Shape::Icosphere(options) => {
                positive("radius", options.radius)?;
                subdivision_level(options.level)
            }
            Shape::Pyramid(options) => positive("height", options.height),
            Shape::Torus(options) => {
                positive("major_radius", options.major_radius)?;
                positive("minor_radius", options.minor_radius)?;
                at_least("rings", options.rings, 3)?;
                at_least("sides", options.sides, 3)
            }
            Shape::Grid(options) => {
                positive("spacing", options.spacing)?;
                at_least("divisions", options.divisions, 1)
            }
            Shape::Obj(path) => {
                if path.as_os_str().is_empty() {
                    Err(GeometryError::InvalidOption {
                        option: "path",
                        reason: "empty path".to_string(),
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Validates the options and produces the raw arrays.
    pub fn generate(&self) -> Result<GeometryData, GeometryError> {
        self.validate()?;

        let data = match self {
            Shape::Cube => primitives::generate_cube(),
            Shape::Sphere(o) => primitives::generate_sphere(
                o.radius,
                o.horizontal_segments,
                o.vertical_segments,
                o.use_vertex_color,
            ),
            Shape::Cone(o) => primitives::generate_cone(o.radius, o.height, o.segments),
            Shape::Cylinder(o) => primitives::generate_cylinder(o.radius, o.height, o.segments),
            Shape::Icosphere(o) => primitives::generate_icosahedron(o.radius, o.use_vertex_color),
            Shape::Pyramid(o) if o.faceted => primitives::generate_faceted_pyramid(o.height),
            Shape::Pyramid(o) => primitives::generate_pyramid(o.height),
            Shape::Torus(o) => {
                primitives::generate_torus(o.major_radius, o.minor_radius, o.rings, o.sides)
            }
            Shape::AxisCross(colors) => primitives::generate_axis_cross(*colors),
            Shape::Grid(o) => primitives::generate_grid(o.divisions, o.spacing, o.color),
            Shape::Obj(path) => obj::load_obj(path)?,
            Shape::Mesh(data) => data.clone(),
        };

        Ok(data)
    }

    /// Topology of the generated geometry, known before generation.
    pub fn topology(&self) -> Topology {
        match self {
            Shape::Icosphere(_) => Topology::Patches,
            Shape::AxisCross(_) | Shape::Grid(_) => Topology::Lines,
            Shape::Mesh(data) => data.topology,
            _ => Topology::Triangles,
        }
    }

    /// Name given to actors that were not named explicitly.
    pub fn default_name(&self) -> String {
        match self {
            Shape::Cube => "cube".to_string(),
            Shape::Sphere(_) => "sphere".to_string(),
            Shape::Cone(_) => "cone".to_string(),
            Shape::Cylinder(_) => "cylinder".to_string(),
            Shape::Icosphere(_) => "icosphere".to_string(),
            Shape::Pyramid(_) => "pyramid".to_string(),
            Shape::Torus(_) => "torus".to_string(),
            Shape::AxisCross(_) => "axes".to_string(),
            Shape::Grid(_) => "grid".to_string(),
            Shape::Obj(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| "model".to_string()),
            Shape::Mesh(_) => "mesh".to_string(),
        }
    }
}

/// Checks a tessellation level against `1..=MAX_SUBDIVISION_LEVEL`.
pub fn subdivision_level(level: u32) -> Result<(), GeometryError> {
    if (1..=MAX_SUBDIVISION_LEVEL).contains(&level) {
        Ok(())
    } else {
        Err(GeometryError::InvalidOption {
            option: "level",
            reason: format!("{level} is outside 1..={MAX_SUBDIVISION_LEVEL}"),
        })
    }
}

fn positive(option: &'static str, value: f32) -> Result<(), GeometryError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeometryError::InvalidOption {
            option,
            reason: format!("{value} must be a positive finite number"),
        })
    }
}

fn at_least(option: &'static str, value: u32, minimum: u32) -> Result<(), GeometryError> {
    if value >= minimum {
        Ok(())
    } else {
        Err(GeometryError::InvalidOption {
            option,
            reason: format!("{value} is below the minimum of {minimum}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_defaults() {
        let options = SphereOptions::default();
        assert_eq!(options.radius, 1.0);
        assert_eq!(options.horizontal_segments, 30);
        assert_eq!(options.vertical_segments, 30);
        assert!(!options.use_vertex_color);
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let sphere = Shape::Sphere(SphereOptions {
            radius: -1.0,
            ..Default::default()
        });
        assert!(matches!(
            sphere.generate(),
            Err(GeometryError::InvalidOption { option: "radius", .. })
        ));

        let torus = Shape::Torus(TorusOptions {
            sides: 2,
            ..Default::default()
        });
        assert!(torus.validate().is_err());

        let ico = Shape::Icosphere(IcosphereOptions {
            level: 0,
            ..Default::default()
        });
        assert!(ico.validate().is_err());
    }

    #[test]
    fn test_topology_is_known_up_front() {
        for shape in [
            Shape::Cube,
            Shape::Icosphere(IcosphereOptions::default()),
            Shape::Grid(GridOptions::default()),
            Shape::Pyramid(PyramidOptions {
                faceted: true,
                ..Default::default()
            }),
        ] {
            let data = shape.generate().unwrap();
            assert_eq!(data.topology, shape.topology());
        }
    }

    #[test]
    fn test_default_names() {
        assert_eq!(Shape::Cube.default_name(), "cube");
        assert_eq!(
            Shape::Obj(PathBuf::from("models/mill.obj")).default_name(),
            "mill"
        );
    }

    #[test]
    fn test_missing_obj_file() {
        let shape = Shape::Obj(PathBuf::from("no/such/model.obj"));
        assert!(matches!(shape.generate(), Err(GeometryError::MissingFile(_))));
    }

    fn assert_box_invariants(label: &str, data: &GeometryData) {
        let bounds = data.bounds();
        let center = bounds.center();
        let size = bounds.size();
        for i in 0..3 {
            assert!(bounds.min[i] <= bounds.max[i], "{label}: min > max on axis {i}");
            assert!(
                (center[i] - (bounds.min[i] + bounds.max[i]) * 0.5).abs() < 1e-6,
                "{label}: center off on axis {i}"
            );
            assert!(
                (size[i] - (bounds.max[i] - bounds.min[i])).abs() < 1e-6,
                "{label}: size off on axis {i}"
            );
        }
    }

    #[test]
    fn test_every_shape_has_a_consistent_box() -> anyhow::Result<()> {
        use std::io::Cursor;

        let source = "v 0 0 0\nv 2 0 0\nv 2 1 0\nv 0 1 -3\nf 1 2 3 4\n";
        let model = obj::load_obj_from_reader(
            &mut Cursor::new(source),
            std::path::Path::new("slab.obj"),
            |_| tobj::load_mtl_buf(&mut Cursor::new("")),
        )?;

        let shapes = [
            Shape::Cube,
            Shape::Sphere(SphereOptions::default()),
            Shape::Sphere(SphereOptions {
                use_vertex_color: true,
                ..Default::default()
            }),
            Shape::Cone(ConeOptions::default()),
            Shape::Cylinder(CylinderOptions::default()),
            Shape::Icosphere(IcosphereOptions::default()),
            Shape::Pyramid(PyramidOptions::default()),
            Shape::Pyramid(PyramidOptions {
                faceted: true,
                ..Default::default()
            }),
            Shape::Torus(TorusOptions::default()),
            Shape::AxisCross([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]),
            Shape::Grid(GridOptions::default()),
            Shape::Mesh(model),
        ];

        for shape in &shapes {
            let data = shape.generate()?;
            assert!(data.vertex_count() > 0, "{} is empty", shape.default_name());
            assert_box_invariants(&shape.default_name(), &data);
        }

        let empty = GeometryData::new();
        assert_box_invariants("empty", &empty);
        assert_eq!(empty.bounds().size(), cgmath::Vector3::new(0.0, 0.0, 0.0));
        Ok(())
    }
}
