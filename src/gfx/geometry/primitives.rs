//! # Primitive Shape Generation
//!
//! Procedural generators for the shapes the viewer can place in a scene, the
//! gizmo markers, and the helper line sets (axis cross, floor grid).
//!
//! All solids are Y-up and generated with normals. Segment counts below the
//! minimum a shape needs are clamped rather than rejected; range checking of
//! user options happens in [`crate::gfx::scene::shape`].

use std::f32::consts::PI;

use super::{Axis, GeometryData, Topology};

/// Neutral gray of grid lines and of gizmo axes outside the active filter.
pub const AXIS_GRAY: [f32; 3] = [0.5, 0.5, 0.5];

/// Generate a unit cube centered at the origin
///
/// Returns a cube with vertices from -0.5 to 0.5 on all axes.
/// Each face has its own four vertices so normals stay sharp.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    #[rustfmt::skip]
    let positions = [
        // Front face
        [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5],
        // Back face
        [-0.5, -0.5, -0.5], [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
        // Left face
        [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
        // Right face
        [ 0.5, -0.5,  0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
        // Top face
        [-0.5,  0.5,  0.5], [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5],
        // Bottom face
        [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5],
    ];

    let face_normals = [
        [0.0, 0.0, 1.0],
        [0.0, 0.0, -1.0],
        [-1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, -1.0, 0.0],
    ];

    data.vertices = positions.to_vec();
    for normal in face_normals {
        data.normals.extend_from_slice(&[normal; 4]);
        data.tex_coords
            .extend_from_slice(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
    }

    // Two counter-clockwise triangles per face
    data.indices = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base + 2, base + 3, base]
        })
        .collect();

    data
}

/// Generate a UV sphere.
///
/// Rings run from the north pole (`+y`) to the south pole; the pole rows emit a
/// single triangle per segment so no degenerate faces are produced. With
/// `vertex_colors` every vertex is colored by the absolute value of its
/// position.
pub fn generate_sphere(
    radius: f32,
    horizontal_segments: u32,
    vertical_segments: u32,
    vertex_colors: bool,
) -> GeometryData {
    let mut data = GeometryData::new();

    let h_segs = horizontal_segments.max(3);
    let v_segs = vertical_segments.max(2);
    let h_step = 2.0 * PI / h_segs as f32;
    let v_step = PI / v_segs as f32;

    for i in 0..=v_segs {
        let theta = PI / 2.0 - i as f32 * v_step;

        for j in 0..=h_segs {
            let phi = j as f32 * h_step;

            let x = theta.cos() * phi.sin();
            let y = theta.sin();
            let z = theta.cos() * phi.cos();

            data.vertices.push([radius * x, radius * y, radius * z]);
            data.normals.push([x, y, z]);
            data.tex_coords
                .push([j as f32 / h_segs as f32, i as f32 / v_segs as f32]);
        }
    }

    for i in 0..v_segs {
        let mut k1 = i * (h_segs + 1);
        let mut k2 = k1 + h_segs + 1;

        for _ in 0..h_segs {
            if i != 0 {
                data.indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != v_segs - 1 {
                data.indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    if vertex_colors {
        data.colors = absolute_colors(&data.vertices);
    }

    data
}

/// Generate a capped cylinder around the `y` axis, from `-height/2` to `height/2`.
pub fn generate_cylinder(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let half_height = height * 0.5;

    for i in 0..=segs {
        let angle = i as f32 * 2.0 * PI / segs as f32;
        let (sin_a, cos_a) = angle.sin_cos();
        let x = radius * cos_a;
        let z = radius * sin_a;
        let u = i as f32 / segs as f32;

        data.vertices.push([x, -half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([u, 0.0]);

        data.vertices.push([x, half_height, z]);
        data.normals.push([cos_a, 0.0, sin_a]);
        data.tex_coords.push([u, 1.0]);
    }

    for i in 0..segs {
        let bottom = i * 2;
        let top = bottom + 1;
        let bottom_next = bottom + 2;
        let top_next = bottom + 3;

        data.indices.extend_from_slice(&[bottom, top, bottom_next]);
        data.indices.extend_from_slice(&[top, top_next, bottom_next]);
    }

    // Caps get their own rims so their normals stay flat
    for (y, normal_y) in [(-half_height, -1.0), (half_height, 1.0)] {
        let center = data.vertices.len() as u32;
        data.vertices.push([0.0, y, 0.0]);
        data.normals.push([0.0, normal_y, 0.0]);
        data.tex_coords.push([0.5, 0.5]);

        for i in 0..=segs {
            let angle = i as f32 * 2.0 * PI / segs as f32;
            let (sin_a, cos_a) = angle.sin_cos();
            data.vertices.push([radius * cos_a, y, radius * sin_a]);
            data.normals.push([0.0, normal_y, 0.0]);
            data.tex_coords.push([0.5 + 0.5 * cos_a, 0.5 + 0.5 * sin_a]);
        }

        for i in 0..segs {
            let current = center + 1 + i;
            if normal_y < 0.0 {
                data.indices.extend_from_slice(&[center, current, current + 1]);
            } else {
                data.indices.extend_from_slice(&[center, current + 1, current]);
            }
        }
    }

    data
}

/// Generate a cone around the `y` axis with its base at `y = 0` and its apex at
/// `y = height`. Emitted as a non-indexed triangle list.
pub fn generate_cone(radius: f32, height: f32, segments: u32) -> GeometryData {
    let mut data = GeometryData::new();

    let segs = segments.max(3);
    let slant = (radius * radius + height * height).sqrt().max(f32::EPSILON);

    let rim = |step: f32| (step * 2.0 * PI / segs as f32).sin_cos();
    let side_normal =
        |sin_a: f32, cos_a: f32| [cos_a * height / slant, radius / slant, sin_a * height / slant];

    for i in 0..segs {
        let (s0, c0) = rim(i as f32);
        let (s1, c1) = rim(i as f32 + 1.0);
        // the apex normal bisects the segment
        let (sm, cm) = rim(i as f32 + 0.5);

        // side
        data.vertices.push([radius * c0, 0.0, radius * s0]);
        data.vertices.push([0.0, height, 0.0]);
        data.vertices.push([radius * c1, 0.0, radius * s1]);
        data.normals.push(side_normal(s0, c0));
        data.normals.push(side_normal(sm, cm));
        data.normals.push(side_normal(s1, c1));

        // base
        data.vertices.push([0.0, 0.0, 0.0]);
        data.vertices.push([radius * c0, 0.0, radius * s0]);
        data.vertices.push([radius * c1, 0.0, radius * s1]);
        data.normals.extend_from_slice(&[[0.0, -1.0, 0.0]; 3]);
    }

    data
}

/// Generate a torus lying in the XZ plane, i.e. a ring around the `y` axis.
///
/// * `major_radius` - distance from the center to the middle of the tube
/// * `minor_radius` - radius of the tube
pub fn generate_torus(
    major_radius: f32,
    minor_radius: f32,
    rings: u32,
    sides: u32,
) -> GeometryData {
    let mut data = GeometryData::new();

    let rings = rings.max(3);
    let sides = sides.max(3);

    for i in 0..=rings {
        let u = i as f32 / rings as f32;
        let (sin_u, cos_u) = (u * 2.0 * PI).sin_cos();

        for j in 0..=sides {
            let v = j as f32 / sides as f32;
            let (sin_v, cos_v) = (v * 2.0 * PI).sin_cos();

            let ring = major_radius + minor_radius * cos_v;
            data.vertices
                .push([ring * cos_u, minor_radius * sin_v, ring * sin_u]);
            data.normals.push([cos_v * cos_u, sin_v, cos_v * sin_u]);
            data.tex_coords.push([u, v]);
        }
    }

    for i in 0..rings {
        for j in 0..sides {
            let a = i * (sides + 1) + j;
            let b = a + sides + 1;

            data.indices.extend_from_slice(&[a, a + 1, b]);
            data.indices.extend_from_slice(&[b, a + 1, b + 1]);
        }
    }

    data
}

/// Generate the 20-face icosahedron used as the control mesh for tessellated
/// spheres. Vertices are pushed onto the sphere of `radius`, normals point
/// outward, and the topology is [`Topology::Patches`].
pub fn generate_icosahedron(radius: f32, vertex_colors: bool) -> GeometryData {
    let mut data = GeometryData::with_topology(Topology::Patches);

    let t = (1.0 + 5.0f32.sqrt()) / 2.0;
    let corners = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];

    for corner in corners {
        let normal = normalized(corner);
        data.vertices
            .push([normal[0] * radius, normal[1] * radius, normal[2] * radius]);
        data.normals.push(normal);
    }

    #[rustfmt::skip]
    let faces: [[u32; 3]; 20] = [
        [0, 11, 5], [0, 5, 1], [0, 1, 7], [0, 7, 10], [0, 10, 11],
        [1, 5, 9], [5, 11, 4], [11, 10, 2], [10, 7, 6], [7, 1, 8],
        [3, 9, 4], [3, 4, 2], [3, 2, 6], [3, 6, 8], [3, 8, 9],
        [4, 9, 5], [2, 4, 11], [6, 2, 10], [8, 6, 7], [9, 8, 1],
    ];
    data.indices = faces.iter().flatten().copied().collect();

    if vertex_colors {
        data.colors = absolute_colors(&data.vertices);
    }

    data
}

/// Square pyramid with a unit base on `y = 0` and its apex at `height`.
///
/// The indexed variant shares its five corners, so lighting across the faces
/// is smooth; the faceted variant duplicates vertices per face and carries
/// one normal per face.
pub fn generate_pyramid(height: f32) -> GeometryData {
    let mut data = GeometryData::new();

    data.vertices = vec![
        [-0.5, 0.0, -0.5],
        [0.5, 0.0, -0.5],
        [-0.5, 0.0, 0.5],
        [0.5, 0.0, 0.5],
        [0.0, height, 0.0],
    ];
    data.normals = vec![
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, -1.0, 0.0],
        [0.0, 1.0, 0.0],
    ];
    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,   1, 3, 2,
        0, 2, 4,   1, 0, 4,   3, 1, 4,   2, 3, 4,
    ];
    data.indices = indices;

    data
}

/// Non-indexed square pyramid with per-face normals. See [`generate_pyramid`].
pub fn generate_faceted_pyramid(height: f32) -> GeometryData {
    let mut data = GeometryData::new();

    let apex = [0.0, height, 0.0];
    let (a, b, c, d) = (
        [-0.5, 0.0, -0.5],
        [0.5, 0.0, -0.5],
        [-0.5, 0.0, 0.5],
        [0.5, 0.0, 0.5],
    );
    let faces = [
        [a, b, c],
        [b, d, c],
        [a, c, apex],
        [b, a, apex],
        [d, b, apex],
        [c, d, apex],
    ];

    let centroid = [0.0, height * 0.25, 0.0];
    for face in faces {
        let mut normal = normalized(cross(sub(face[1], face[0]), sub(face[2], face[0])));
        let face_center = [
            (face[0][0] + face[1][0] + face[2][0]) / 3.0,
            (face[0][1] + face[1][1] + face[2][1]) / 3.0,
            (face[0][2] + face[1][2] + face[2][2]) / 3.0,
        ];
        if dot(normal, sub(face_center, centroid)) < 0.0 {
            normal = [-normal[0], -normal[1], -normal[2]];
        }

        data.vertices.extend_from_slice(&face);
        data.normals.extend_from_slice(&[normal; 3]);
    }

    data
}

/// Three line segments from the origin to `+1` on each axis, colored
/// `colors[x]`, `colors[y]` and `colors[z]`.
pub fn generate_axis_cross(colors: [[f32; 3]; 3]) -> GeometryData {
    let mut data = GeometryData::with_topology(Topology::Lines);

    for axis in Axis::ALL {
        let end = axis.unit();
        data.vertices.push([0.0, 0.0, 0.0]);
        data.vertices.push(end);
        data.colors.extend_from_slice(&[colors[axis.index()]; 2]);
    }

    data
}

/// Floor grid in the XZ plane made of `2 * divisions + 1` lines per direction,
/// spaced `spacing` apart and centered on the origin.
pub fn generate_grid(divisions: u32, spacing: f32, color: [f32; 3]) -> GeometryData {
    let mut data = GeometryData::with_topology(Topology::Lines);

    let n = divisions as i32;
    let extent = n as f32 * spacing;

    for i in -n..=n {
        let offset = i as f32 * spacing;
        data.vertices.push([offset, 0.0, -extent]);
        data.vertices.push([offset, 0.0, extent]);
        data.vertices.push([-extent, 0.0, offset]);
        data.vertices.push([extent, 0.0, offset]);
    }
    data.paint(color);

    data
}

fn absolute_colors(vertices: &[[f32; 3]]) -> Vec<[f32; 3]> {
    vertices
        .iter()
        .map(|v| [v[0].abs(), v[1].abs(), v[2].abs()])
        .collect()
}

fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Unit-length copy of `v`; the zero vector maps to `+y`.
pub(crate) fn normalized(v: [f32; 3]) -> [f32; 3] {
    let len = dot(v, v).sqrt();
    if len <= f32::EPSILON {
        [0.0, 1.0, 0.0]
    } else {
        [v[0] / len, v[1] / len, v[2] / len]
    }
}
