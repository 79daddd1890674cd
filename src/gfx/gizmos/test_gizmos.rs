//! Gizmo construction tests

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, Vector3, Vector4};

    use crate::gfx::{
        geometry::{primitives::AXIS_GRAY, Axis, BoundingBox},
        gizmos::{GizmoConfig, GizmoKind, TransformGizmo},
        rendering::{DrawList, FrameContext, ShaderCache, Shading},
        scene::{actor::Actor, node::Drawable},
        transform::Transform,
    };

    const RED: [f32; 3] = [1.0, 0.0, 0.0];
    const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
    const BLUE: [f32; 3] = [0.0, 0.0, 1.0];

    fn unit_bounds() -> BoundingBox {
        BoundingBox::from_points(&[[-0.5, -0.5, -0.5], [0.5, 0.5, 0.5]])
    }

    fn build(kind: GizmoKind, axis: Option<Axis>) -> TransformGizmo {
        let shaders = ShaderCache::headless();
        TransformGizmo::build(
            kind,
            axis,
            &unit_bounds(),
            &Transform::identity(),
            &GizmoConfig::default(),
            &shaders,
        )
        .unwrap()
    }

    fn marker(gizmo: &TransformGizmo, axis: Axis) -> &Actor {
        gizmo
            .group()
            .part_named(axis.marker_name())
            .and_then(|node| node.as_actor())
            .unwrap()
    }

    fn cross_colors(gizmo: &TransformGizmo) -> Vec<[f32; 3]> {
        let cross = gizmo
            .group()
            .part_named("axes")
            .and_then(|node| node.as_actor())
            .unwrap();
        let colors = &cross.geometry().unwrap().data().colors;
        colors.chunks(2).map(|pair| pair[0]).collect()
    }

    #[test]
    fn test_unfiltered_axes_keep_their_colors() {
        for kind in [GizmoKind::Scale, GizmoKind::Translate, GizmoKind::Rotate] {
            let gizmo = build(kind, None);
            assert_eq!(marker(&gizmo, Axis::X).material().diffuse, RED);
            assert_eq!(marker(&gizmo, Axis::Y).material().diffuse, GREEN);
            assert_eq!(marker(&gizmo, Axis::Z).material().diffuse, BLUE);
            assert_eq!(cross_colors(&gizmo), vec![RED, GREEN, BLUE]);
        }
    }

    #[test]
    fn test_filter_grays_other_axes() {
        for kind in [GizmoKind::Scale, GizmoKind::Translate] {
            let gizmo = build(kind, Some(Axis::Y));
            assert_eq!(gizmo.axis(), Some(Axis::Y));
            assert_eq!(marker(&gizmo, Axis::X).material().diffuse, AXIS_GRAY);
            assert_eq!(marker(&gizmo, Axis::Y).material().diffuse, GREEN);
            assert_eq!(marker(&gizmo, Axis::Z).material().diffuse, AXIS_GRAY);
            assert_eq!(cross_colors(&gizmo), vec![AXIS_GRAY, GREEN, AXIS_GRAY]);
        }
    }

    #[test]
    fn test_rotate_ignores_filter() {
        let gizmo = build(GizmoKind::Rotate, Some(Axis::Z));
        assert_eq!(gizmo.axis(), None);
        assert_eq!(marker(&gizmo, Axis::X).material().diffuse, RED);
        assert_eq!(cross_colors(&gizmo), vec![RED, GREEN, BLUE]);
    }

    #[test]
    fn test_markers_sit_at_axis_ends() {
        let gizmo = build(GizmoKind::Scale, None);

        // half size 0.5 plus a margin of 1.0
        let origin = Vector4::new(0.0, 0.0, 0.0, 1.0);
        let x_end = marker(&gizmo, Axis::X).transform().matrix() * origin;
        let z_end = marker(&gizmo, Axis::Z).transform().matrix() * origin;
        assert!((x_end.truncate() - Vector3::new(1.5, 0.0, 0.0)).magnitude() < 1e-6);
        assert!((z_end.truncate() - Vector3::new(0.0, 0.0, 1.5)).magnitude() < 1e-6);
    }

    #[test]
    fn test_gizmo_follows_target_transform() {
        let shaders = ShaderCache::headless();
        let target = Transform::from_translation(Vector3::new(4.0, 0.0, 0.0));
        let gizmo = TransformGizmo::build(
            GizmoKind::Translate,
            None,
            &unit_bounds(),
            &target,
            &GizmoConfig::default(),
            &shaders,
        )
        .unwrap();

        assert!(gizmo.group().transform().approx_eq(&target, 1e-6));
    }

    #[test]
    fn test_gizmo_parts_are_not_pickable() {
        let gizmo = build(GizmoKind::Translate, None);
        let mut count = 0;
        gizmo
            .group()
            .for_each_actor(&Transform::identity(), &mut |actor, _| {
                assert!(!actor.is_pickable());
                assert!(!actor.is_selectable());
                count += 1;
            });
        assert_eq!(count, 4);
    }

    #[test]
    fn test_cross_renders_as_unlit_overlay() {
        let gizmo = build(GizmoKind::Scale, None);
        let mut list = DrawList::new();
        gizmo
            .group()
            .render(&FrameContext::default(), &Transform::identity(), &mut list);

        let cross = list.named("axes").next().unwrap();
        assert!(cross.overlay);
        assert_eq!(cross.program.kind.shading, Shading::Unlit);

        let x_marker = list.named("xaxis").next().unwrap();
        assert!(!x_marker.overlay);
        assert_eq!(x_marker.program.kind.shading, Shading::Phong);
    }
}
