use cgmath::{Deg, Quaternion, Rotation3, Vector3};

use crate::{
    error::GeometryError,
    gfx::{
        geometry::{Axis, BoundingBox},
        rendering::ShaderProvider,
        resources::Material,
        scene::{
            actor::{Actor, RenderType},
            group::Group,
            node::Drawable,
            shape::{ConeOptions, Shape, TorusOptions},
        },
        transform::Transform,
    },
};

use super::{GizmoConfig, GizmoKind};

/// A built gizmo: the group to draw plus what it was built for.
#[derive(Debug, Clone)]
pub struct TransformGizmo {
    kind: GizmoKind,
    axis: Option<Axis>,
    group: Group,
}

impl TransformGizmo {
    /// Builds the gizmo for a target with untransformed `bounds` placed by
    /// `target_transform`.
    pub fn build(
        kind: GizmoKind,
        axis: Option<Axis>,
        bounds: &BoundingBox,
        target_transform: &Transform,
        config: &GizmoConfig,
        shaders: &dyn ShaderProvider,
    ) -> Result<Self, GeometryError> {
        let filter = if kind.uses_axis_filter() { axis } else { None };
        let colors = Axis::ALL.map(|a| config.axis_color(a, filter));

        let center = bounds.center();
        let size = bounds.size() / 2.0 + Vector3::new(config.margin, config.margin, config.margin);

        let mut group = Group::new()
            .with_name(format!("{kind} gizmo"))
            .with_transform(*target_transform);

        let cross = Actor::new(Shape::AxisCross(colors), shaders)
        .with_name("axes")
        .with_transform(Transform::from_translation(center).scaled(size))
        .with_render_type(RenderType::Overlay)
        .with_pickable(false)
        .with_selectable(false);
        group.add_part(cross);

        let marker_scale = config.marker_scale(kind);
        let (specular, shininess) = config.marker_specular;
        for a in Axis::ALL {
            let mut offset = center;
            offset[a.index()] += size[a.index()];

            let transform = Transform::from_translation(offset)
                .scaled(Vector3::new(marker_scale, marker_scale, marker_scale))
                .scaled(size)
                .rotated(marker_rotation(a));

            let marker = Actor::new(marker_shape(kind), shaders)
                .with_name(a.marker_name())
                .with_transform(transform)
                .with_material(
                    Material::new(colors[a.index()]).with_specular(specular, shininess),
                )
                .with_pickable(false)
                .with_selectable(false);
            group.add_part(marker);
        }

        group.initialize()?;

        Ok(Self {
            kind,
            axis: filter,
            group,
        })
    }

    pub fn kind(&self) -> GizmoKind {
        self.kind
    }

    /// The filter the gizmo was built with; always `None` for rotate.
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn group(&self) -> &Group {
        &self.group
    }
}

/// Turns a marker modelled along +y onto `axis`.
fn marker_rotation(axis: Axis) -> Quaternion<f32> {
    match axis {
        Axis::X => Quaternion::from_angle_z(Deg(-90.0)),
        Axis::Y => Quaternion::from_angle_y(Deg(0.0)),
        Axis::Z => Quaternion::from_angle_x(Deg(90.0)),
    }
}

fn marker_shape(kind: GizmoKind) -> Shape {
    match kind {
        GizmoKind::Scale => Shape::Cube,
        GizmoKind::Translate => Shape::Cone(ConeOptions::default()),
        GizmoKind::Rotate => Shape::Torus(TorusOptions {
            major_radius: 1.0,
            minor_radius: 0.1,
            rings: 32,
            sides: 8,
        }),
    }
}
