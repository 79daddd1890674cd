//! # Interaction Controller
//!
//! Turns [`InputEvent`]s into scene edits. The controller is a small state
//! machine over [`InteractionState`]:
//!
//! - Shift + left press on an actor selects and highlights it
//! - a left press that hits nothing clears selection, highlight and gizmo
//! - `s`, `t` and `r` enter scaling, translating and rotating with a gizmo
//! - `x`, `y` and `z` constrain scaling and translating to one axis
//! - Delete (or `x` with nothing but a selection) removes the selected actor
//! - Escape abandons the manipulation and clears the selection
//!
//! With nothing selected, left drags orbit the camera, right drags pan and
//! the wheel zooms. Axis-constrained edits of the selected actor are composed
//! after its current transform; a free translate follows the screen plane.
//! Every edit rebuilds the gizmo.

use cgmath::{Quaternion, Rotation, Vector2, Vector3};
use log::{debug, info};

use crate::{
    error::InteractionError,
    gfx::{
        camera::{CameraController, Trackball},
        geometry::Axis,
        gizmos::GizmoKind,
        scene::{ActorId, Scene},
        transform::Transform,
    },
};

use super::input::{InputEvent, KeyInput, Modifiers, PointerButton};

/// Where the controller is in the select/manipulate cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Selected,
    Scaling(Option<Axis>),
    Translating(Option<Axis>),
    Rotating,
}

impl InteractionState {
    pub fn gizmo_kind(&self) -> Option<GizmoKind> {
        match self {
            InteractionState::Scaling(_) => Some(GizmoKind::Scale),
            InteractionState::Translating(_) => Some(GizmoKind::Translate),
            InteractionState::Rotating => Some(GizmoKind::Rotate),
            InteractionState::Idle | InteractionState::Selected => None,
        }
    }

    pub fn axis(&self) -> Option<Axis> {
        match self {
            InteractionState::Scaling(axis) | InteractionState::Translating(axis) => *axis,
            _ => None,
        }
    }

    fn with_axis(self, axis: Axis) -> Self {
        match self {
            InteractionState::Scaling(_) => InteractionState::Scaling(Some(axis)),
            InteractionState::Translating(_) => InteractionState::Translating(Some(axis)),
            other => other,
        }
    }
}

/// Tuning of the pointer and wheel mappings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Wheel angle units per e-fold of camera zoom
    pub zoom_divisor: f32,
    /// Wheel angle units per e-fold of actor scale
    pub scale_divisor: f32,
    /// Local units per NDC unit of translate drag
    pub translate_speed: f32,
    /// Eye-space units per NDC unit of pan drag
    pub pan_speed: f32,
    pub scene_sensitivity: f32,
    pub actor_sensitivity: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            zoom_divisor: 950.0,
            scale_divisor: 950.0,
            translate_speed: 1.0,
            pan_speed: 2.0,
            scene_sensitivity: 1.0,
            actor_sensitivity: 1.0,
        }
    }
}

/// Which side of the current transform an edit lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    /// `current * edit`, in the actor's own axes
    Local,
    /// `edit * current`, in the axes of the scene
    Parent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drag {
    Orbit,
    Pan,
    Manipulate,
}

pub struct InteractionController {
    config: InteractionConfig,
    state: InteractionState,
    camera: CameraController,
    actor_trackball: Trackball,
    drag: Option<Drag>,
    last_position: Option<Vector2<f32>>,
}

impl InteractionController {
    /// `home_rotation` is the initial scene rotation of the camera trackball.
    pub fn new(config: InteractionConfig, home_rotation: Quaternion<f32>) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
            camera: CameraController::new(
                Trackball::new(home_rotation, config.scene_sensitivity),
                config.zoom_divisor,
                config.pan_speed,
            ),
            actor_trackball: Trackball::new(
                Quaternion::new(1.0, 0.0, 0.0, 0.0),
                config.actor_sensitivity,
            ),
            drag: None,
            last_position: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn camera_controller(&self) -> &CameraController {
        &self.camera
    }

    pub fn camera_controller_mut(&mut self) -> &mut CameraController {
        &mut self.camera
    }

    /// Forgets selection-related state, e.g. after the scene was cleared.
    pub fn reset(&mut self) {
        self.state = InteractionState::Idle;
        self.drag = None;
        self.last_position = None;
    }

    /// Applies one input event. Returns whether the scene needs a redraw.
    pub fn handle(&mut self, scene: &mut Scene, event: &InputEvent) -> bool {
        // the selection may have been removed behind our back
        if self.state != InteractionState::Idle && scene.selected().is_none() {
            self.reset();
        }

        match *event {
            InputEvent::Key(key) => self.key(scene, key),
            InputEvent::PointerDown {
                button,
                position,
                modifiers,
            } => self.press(scene, button, position, modifiers),
            InputEvent::PointerMove { position, .. } => self.motion(scene, position),
            InputEvent::PointerUp {
                button, position, ..
            } => self.release(scene, button, position),
            InputEvent::Wheel { delta, .. } => self.wheel(scene, delta),
        }
    }

    fn key(&mut self, scene: &mut Scene, key: KeyInput) -> bool {
        match key {
            KeyInput::Escape => {
                scene.clear_selection();
                self.reset();
                true
            }
            KeyInput::Delete => self.delete_selected(scene),
            KeyInput::Char('x') if self.state == InteractionState::Selected => {
                self.delete_selected(scene)
            }
            KeyInput::Char(c) => {
                if let Some(axis) = Axis::from_key(c) {
                    return self.set_axis(scene, axis);
                }
                let kind = match c {
                    's' => GizmoKind::Scale,
                    't' => GizmoKind::Translate,
                    'r' => GizmoKind::Rotate,
                    _ => return false,
                };
                self.enter_mode(scene, kind)
            }
        }
    }

    fn delete_selected(&mut self, scene: &mut Scene) -> bool {
        let Some(id) = scene.selected() else {
            return false;
        };
        if let Err(err) = scene.remove_actor(id) {
            debug!("delete ignored: {err}");
        }
        self.reset();
        true
    }

    fn enter_mode(&mut self, scene: &mut Scene, kind: GizmoKind) -> bool {
        let Some(id) = scene.selected() else {
            debug!("{kind} ignored without a selection");
            return false;
        };

        self.state = match kind {
            GizmoKind::Scale => InteractionState::Scaling(None),
            GizmoKind::Translate => InteractionState::Translating(None),
            GizmoKind::Rotate => InteractionState::Rotating,
        };
        info!("{kind} mode on actor {id}");
        self.show_gizmo(scene, id);
        true
    }

    fn set_axis(&mut self, scene: &mut Scene, axis: Axis) -> bool {
        if !matches!(
            self.state,
            InteractionState::Scaling(_) | InteractionState::Translating(_)
        ) {
            return false;
        }
        let Some(id) = scene.selected() else {
            return false;
        };

        self.state = self.state.with_axis(axis);
        debug!("axis filter {axis:?}");
        self.show_gizmo(scene, id);
        true
    }

    fn show_gizmo(&self, scene: &mut Scene, id: ActorId) {
        let Some(kind) = self.state.gizmo_kind() else {
            return;
        };
        if let Err(err) = scene.show_gizmo(id, kind, self.state.axis()) {
            debug!("gizmo not shown: {err}");
        }
    }

    fn press(
        &mut self,
        scene: &mut Scene,
        button: PointerButton,
        position: Vector2<f32>,
        modifiers: Modifiers,
    ) -> bool {
        match button {
            PointerButton::Left if modifiers.shift => self.pick(scene, position),
            PointerButton::Left => self.begin_left_drag(scene, position),
            PointerButton::Right => {
                if scene.selected().is_some() {
                    return false;
                }
                self.camera.begin_pan(position);
                self.drag = Some(Drag::Pan);
                false
            }
            PointerButton::Middle => false,
        }
    }

    fn pick(&mut self, scene: &mut Scene, position: Vector2<f32>) -> bool {
        let Some(hit) = scene.pick(position) else {
            self.clear(scene);
            return true;
        };

        scene.clear_selection();
        if let Err(err) = scene.select(hit.target).and_then(|_| scene.highlight(hit.target)) {
            debug!("pick ignored: {err}");
            return false;
        }
        self.state = if scene.selected().is_some() {
            InteractionState::Selected
        } else {
            InteractionState::Idle
        };
        true
    }

    fn begin_left_drag(&mut self, scene: &mut Scene, position: Vector2<f32>) -> bool {
        let Some(kind) = self.state.gizmo_kind() else {
            if scene.selected().is_some() {
                if scene.pick(position).is_some() {
                    return false;
                }
                self.clear(scene);
            }
            self.camera.begin_orbit(position);
            self.drag = Some(Drag::Orbit);
            return true;
        };

        let mut redraw = false;
        if let Some(axis) = scene.pick_gizmo_axis(position) {
            if kind.uses_axis_filter() {
                redraw = self.set_axis(scene, axis);
            }
        } else if scene.pick(position).is_none() {
            self.clear(scene);
            return true;
        }

        self.drag = Some(Drag::Manipulate);
        self.last_position = Some(position);
        if kind == GizmoKind::Rotate {
            self.actor_trackball.press(position);
        }
        redraw
    }

    fn motion(&mut self, scene: &mut Scene, position: Vector2<f32>) -> bool {
        match self.drag {
            Some(Drag::Orbit) => {
                self.camera.orbit(position, scene.camera_mut());
                true
            }
            Some(Drag::Pan) => {
                self.camera.pan(position, scene.camera_mut());
                true
            }
            Some(Drag::Manipulate) => self.manipulate_drag(scene, position),
            None => false,
        }
    }

    fn manipulate_drag(&mut self, scene: &mut Scene, position: Vector2<f32>) -> bool {
        let Some(last) = self.last_position.replace(position) else {
            return false;
        };
        let delta = position - last;

        let (edit, frame) = match self.state {
            InteractionState::Translating(Some(axis)) => {
                let offset = axis_delta(delta, axis) * self.config.translate_speed;
                (Transform::from_translation(offset), Frame::Local)
            }
            InteractionState::Translating(None) => {
                let offset = screen_delta(delta, scene.camera().rotation());
                let offset = offset * self.config.translate_speed;
                (Transform::from_translation(offset), Frame::Parent)
            }
            InteractionState::Rotating => {
                let increment = self.actor_trackball.drag(position);
                (Transform::from_rotation(increment), Frame::Local)
            }
            _ => return false,
        };
        self.apply(scene, edit, frame)
    }

    fn release(
        &mut self,
        scene: &mut Scene,
        button: PointerButton,
        position: Vector2<f32>,
    ) -> bool {
        let redraw = match (button, self.drag) {
            (PointerButton::Left, Some(Drag::Orbit)) => {
                self.camera.end_orbit(position, scene.camera_mut());
                true
            }
            (PointerButton::Right, Some(Drag::Pan)) => {
                self.camera.end_pan();
                false
            }
            (PointerButton::Left, Some(Drag::Manipulate)) => {
                let redraw = self.manipulate_drag(scene, position);
                if self.state == InteractionState::Rotating {
                    self.actor_trackball.release(position);
                }
                redraw
            }
            _ => return false,
        };

        self.drag = None;
        self.last_position = None;
        redraw
    }

    fn wheel(&mut self, scene: &mut Scene, delta: f32) -> bool {
        match self.state {
            InteractionState::Scaling(axis) => {
                let factor = (-delta / self.config.scale_divisor).exp();
                let scale = match axis {
                    None => Vector3::new(factor, factor, factor),
                    Some(axis) => {
                        let mut scale = Vector3::new(1.0, 1.0, 1.0);
                        scale[axis.index()] = factor;
                        scale
                    }
                };
                self.apply(scene, Transform::from_nonuniform_scale(scale), Frame::Local)
            }
            _ if scene.selected().is_some() => false,
            _ => {
                self.camera.zoom(delta, scene.camera_mut());
                true
            }
        }
    }

    /// Composes `edit` with the selected actor's transform.
    fn apply(&mut self, scene: &mut Scene, edit: Transform, frame: Frame) -> bool {
        match self.try_apply(scene, edit, frame) {
            Ok(()) => true,
            Err(err) => {
                debug!("manipulation ignored: {err}");
                self.reset();
                false
            }
        }
    }

    fn try_apply(
        &self,
        scene: &mut Scene,
        edit: Transform,
        frame: Frame,
    ) -> Result<(), InteractionError> {
        let id = scene
            .selected()
            .ok_or(InteractionError::InvalidManipulation)?;
        let current = scene
            .transform(id)
            .map_err(|_| InteractionError::InvalidManipulation)?;
        let updated = match frame {
            Frame::Local => current.then(&edit),
            Frame::Parent => edit.then(&current),
        };
        scene
            .set_actor_transform(id, updated)
            .map_err(|_| InteractionError::InvalidManipulation)
    }

    fn clear(&mut self, scene: &mut Scene) {
        scene.clear_selection();
        self.reset();
    }
}

/// Drag delta in NDC mapped to a local translation along `axis`.
fn axis_delta(delta: Vector2<f32>, axis: Axis) -> Vector3<f32> {
    match axis {
        Axis::X => Vector3::new(delta.x, 0.0, 0.0),
        Axis::Y => Vector3::new(0.0, delta.y, 0.0),
        Axis::Z => Vector3::new(0.0, 0.0, -delta.x),
    }
}

/// Drag delta in NDC mapped to a scene translation in the screen plane.
/// The view rotates the scene by the inverse of `camera_rotation`, so the
/// screen axes in the scene are the camera rotation applied to x and y.
fn screen_delta(delta: Vector2<f32>, camera_rotation: Quaternion<f32>) -> Vector3<f32> {
    camera_rotation.rotate_vector(Vector3::new(delta.x, delta.y, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use cgmath::{Deg, InnerSpace, One, Rotation3};

    use crate::gfx::{
        camera::Camera,
        rendering::ShaderCache,
        scene::{Actor, Shape},
    };

    fn setup() -> (Scene, InteractionController, ActorId) {
        let mut scene = Scene::new(Rc::new(ShaderCache::headless()), Camera::default());
        let cube = Actor::new(Shape::Cube, scene.shaders());
        let id = scene.add_actor(cube).unwrap();
        let controller =
            InteractionController::new(InteractionConfig::default(), Quaternion::one());
        (scene, controller, id)
    }

    fn down(position: Vector2<f32>, modifiers: Modifiers) -> InputEvent {
        InputEvent::PointerDown {
            button: PointerButton::Left,
            position,
            modifiers,
        }
    }

    fn moved(position: Vector2<f32>) -> InputEvent {
        InputEvent::PointerMove {
            position,
            modifiers: Modifiers::NONE,
        }
    }

    fn up(position: Vector2<f32>) -> InputEvent {
        InputEvent::PointerUp {
            button: PointerButton::Left,
            position,
            modifiers: Modifiers::NONE,
        }
    }

    fn key(c: char) -> InputEvent {
        InputEvent::Key(KeyInput::Char(c))
    }

    fn select(scene: &mut Scene, controller: &mut InteractionController) {
        let center = Vector2::new(0.0, 0.0);
        controller.handle(scene, &down(center, Modifiers::SHIFT));
        controller.handle(scene, &up(center));
    }

    #[test]
    fn test_translate_along_x_then_escape() {
        let (mut scene, mut controller, id) = setup();

        select(&mut scene, &mut controller);
        assert_eq!(controller.state(), InteractionState::Selected);
        assert_eq!(scene.selected(), Some(id));
        assert_eq!(scene.highlighted(), Some(id));
        assert!(scene.gizmo().is_none());

        controller.handle(&mut scene, &key('t'));
        assert_eq!(controller.state(), InteractionState::Translating(None));
        assert!(scene.gizmo().is_some());

        controller.handle(&mut scene, &key('x'));
        assert_eq!(controller.state(), InteractionState::Translating(Some(Axis::X)));
        assert_eq!(scene.gizmo().and_then(|g| g.axis()), Some(Axis::X));

        // off-center so the press lands on the cube, not on the z marker
        let start = Vector2::new(0.1, 0.1);
        controller.handle(&mut scene, &down(start, Modifiers::NONE));
        controller.handle(&mut scene, &moved(start + Vector2::new(1.0, 0.0)));
        controller.handle(&mut scene, &up(start + Vector2::new(1.0, 0.0)));

        let translation = scene.transform(id).unwrap().translation();
        assert!((translation - Vector3::new(1.0, 0.0, 0.0)).magnitude() < 1e-6);

        controller.handle(&mut scene, &InputEvent::Key(KeyInput::Escape));
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(scene.gizmo().is_none());
        assert!(scene.selected().is_none());
        assert!(scene.highlighted().is_none());
    }

    #[test]
    fn test_scale_wheel_along_axis() {
        let (mut scene, mut controller, id) = setup();
        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('s'));
        controller.handle(&mut scene, &key('y'));

        controller.handle(
            &mut scene,
            &InputEvent::Wheel {
                delta: -950.0,
                position: Vector2::new(0.0, 0.0),
            },
        );

        let matrix = scene.transform(id).unwrap().matrix();
        assert!((matrix.y.y - 1.0f32.exp()).abs() < 1e-5);
        assert!((matrix.x.x - 1.0).abs() < 1e-6);
        assert!((matrix.z.z - 1.0).abs() < 1e-6);
        assert!(scene.gizmo().is_some());
    }

    #[test]
    fn test_rotate_ignores_axis_keys() {
        let (mut scene, mut controller, _) = setup();
        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('r'));

        assert!(!controller.handle(&mut scene, &key('z')));
        assert_eq!(controller.state(), InteractionState::Rotating);
        assert_eq!(scene.gizmo().map(|g| g.kind()), Some(GizmoKind::Rotate));
    }

    #[test]
    fn test_rotate_drag_changes_orientation_only() {
        let (mut scene, mut controller, id) = setup();
        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('r'));

        let start = Vector2::new(0.1, 0.1);
        controller.handle(&mut scene, &down(start, Modifiers::NONE));
        controller.handle(&mut scene, &moved(Vector2::new(0.3, 0.1)));

        let transform = scene.transform(id).unwrap();
        assert!(!transform.approx_eq(&Transform::identity(), 1e-4));
        assert!(transform.translation().magnitude() < 1e-6);
    }

    #[test]
    fn test_x_deletes_plain_selection() {
        let (mut scene, mut controller, _) = setup();
        select(&mut scene, &mut controller);

        assert!(controller.handle(&mut scene, &key('x')));
        assert!(scene.is_empty());
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_delete_key_removes_selection() {
        let (mut scene, mut controller, _) = setup();
        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('t'));

        controller.handle(&mut scene, &InputEvent::Key(KeyInput::Delete));
        assert!(scene.is_empty());
        assert!(scene.gizmo().is_none());
        assert_eq!(controller.state(), InteractionState::Idle);
    }

    #[test]
    fn test_missed_press_clears_everything() {
        let (mut scene, mut controller, _) = setup();
        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('s'));

        controller.handle(&mut scene, &down(Vector2::new(0.9, 0.9), Modifiers::NONE));
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(scene.selected().is_none());
        assert!(scene.gizmo().is_none());
    }

    #[test]
    fn test_mode_keys_need_a_selection() {
        let (mut scene, mut controller, _) = setup();
        assert!(!controller.handle(&mut scene, &key('t')));
        assert_eq!(controller.state(), InteractionState::Idle);
        assert!(scene.gizmo().is_none());
    }

    #[test]
    fn test_drag_without_selection_orbits_camera() {
        let (mut scene, mut controller, id) = setup();
        let before = scene.camera().rotation();

        controller.handle(&mut scene, &down(Vector2::new(0.0, 0.0), Modifiers::NONE));
        controller.handle(&mut scene, &moved(Vector2::new(0.3, 0.0)));
        controller.handle(&mut scene, &up(Vector2::new(0.3, 0.0)));

        assert_ne!(scene.camera().rotation(), before);
        assert!(scene.transform(id).unwrap().approx_eq(&Transform::identity(), 1e-6));
    }

    #[test]
    fn test_wheel_without_selection_zooms() {
        let (mut scene, mut controller, _) = setup();
        let before = scene.camera().focal_distance();

        controller.handle(
            &mut scene,
            &InputEvent::Wheel {
                delta: 120.0,
                position: Vector2::new(0.0, 0.0),
            },
        );
        assert!(scene.camera().focal_distance() < before);
    }

    #[test]
    fn test_manipulation_without_selection_is_swallowed() {
        let (mut scene, mut controller, id) = setup();
        let err = controller
            .try_apply(&mut scene, Transform::from_scale(2.0), Frame::Local)
            .unwrap_err();
        assert_eq!(err, InteractionError::InvalidManipulation);
        assert!(!controller.apply(&mut scene, Transform::from_scale(2.0), Frame::Local));
        assert!(scene.transform(id).unwrap().approx_eq(&Transform::identity(), 1e-6));
    }

    fn project(scene: &Scene, point: Vector3<f32>) -> Vector2<f32> {
        let clip = scene.camera().view_projection_matrix() * point.extend(1.0);
        Vector2::new(clip.x / clip.w, clip.y / clip.w)
    }

    #[test]
    fn test_free_translate_follows_screen_plane() {
        let (mut scene, mut controller, id) = setup();
        let rotation = Quaternion::from_angle_x(Deg(25.0)) * Quaternion::from_angle_y(Deg(-50.0));
        scene.camera_mut().set_rotation(rotation);

        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('t'));
        assert_eq!(controller.state(), InteractionState::Translating(None));

        let before = project(&scene, scene.transform(id).unwrap().translation());
        let start = Vector2::new(0.05, -0.05);
        let end = start + Vector2::new(0.2, 0.0);
        controller.handle(&mut scene, &down(start, Modifiers::NONE));
        controller.handle(&mut scene, &moved(end));
        controller.handle(&mut scene, &up(end));

        let translation = scene.transform(id).unwrap().translation();
        assert!((translation.magnitude() - 0.2).abs() < 1e-5);

        let after = project(&scene, translation);
        assert!(after.x - before.x > 0.01);
        assert!((after.y - before.y).abs() < 1e-5);
    }

    #[test]
    fn test_free_translate_ignores_actor_rotation() {
        let (mut scene, mut controller, id) = setup();
        let turned = Transform::from_axis_angle(Vector3::unit_y(), Deg(90.0));
        scene.set_actor_transform(id, turned).unwrap();

        select(&mut scene, &mut controller);
        controller.handle(&mut scene, &key('t'));
        let start = Vector2::new(0.05, -0.05);
        controller.handle(&mut scene, &down(start, Modifiers::NONE));
        controller.handle(&mut scene, &moved(start + Vector2::new(0.5, 0.0)));

        let translation = scene.transform(id).unwrap().translation();
        assert!((translation - Vector3::new(0.5, 0.0, 0.0)).magnitude() < 1e-5);
    }

    #[test]
    fn test_camera_stays_put_while_selected() {
        let (mut scene, mut controller, id) = setup();
        select(&mut scene, &mut controller);
        let before = scene.camera().parameters();

        let on_actor = Vector2::new(0.05, 0.05);
        controller.handle(&mut scene, &down(on_actor, Modifiers::NONE));
        controller.handle(&mut scene, &moved(Vector2::new(0.4, 0.05)));
        controller.handle(&mut scene, &up(Vector2::new(0.4, 0.05)));
        controller.handle(
            &mut scene,
            &InputEvent::PointerDown {
                button: PointerButton::Right,
                position: on_actor,
                modifiers: Modifiers::NONE,
            },
        );
        controller.handle(&mut scene, &moved(Vector2::new(0.4, 0.4)));
        controller.handle(
            &mut scene,
            &InputEvent::Wheel {
                delta: 120.0,
                position: on_actor,
            },
        );

        assert_eq!(scene.camera().parameters(), before);
        assert_eq!(scene.selected(), Some(id));
        assert_eq!(controller.state(), InteractionState::Selected);
    }
}
