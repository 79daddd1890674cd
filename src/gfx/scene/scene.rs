use std::{fmt, rc::Rc};

use cgmath::Vector2;
use log::{debug, info, warn};

use crate::{
    error::{GeometryError, SceneError},
    gfx::{
        camera::{Camera, CameraParameters, Lens},
        geometry::Axis,
        gizmos::{GizmoConfig, GizmoKind, TransformGizmo},
        picking::{self, PickResult, Ray},
        rendering::{DrawSink, DrawStyle, FrameContext, ShaderProvider},
        resources::Light,
        transform::Transform,
    },
};

use super::{
    actor::Actor,
    node::{Drawable, Node},
    shape::{GridOptions, Shape},
};

/// Stable handle of a top-level scene entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActorId(u64);

impl ActorId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The gizmo currently shown and the actor it was built around.
#[derive(Debug, Clone)]
struct ActiveGizmo {
    target: ActorId,
    gizmo: TransformGizmo,
}

/// The viewer's world: actors, camera, light, draw style and the
/// selection/highlight/gizmo state.
pub struct Scene {
    shaders: Rc<dyn ShaderProvider>,
    entries: Vec<(ActorId, Node)>,
    next_id: u64,
    camera: Camera,
    stored_camera: CameraParameters,
    home_camera: CameraParameters,
    light: Light,
    style: DrawStyle,
    lighting: bool,
    selected: Option<ActorId>,
    highlighted: Option<ActorId>,
    gizmo: Option<ActiveGizmo>,
    gizmo_config: GizmoConfig,
}

impl Scene {
    /// Creates an empty scene. The camera's current parameters become both
    /// the home and the stored snapshot.
    pub fn new(shaders: Rc<dyn ShaderProvider>, camera: Camera) -> Self {
        let home = camera.parameters();
        Self {
            shaders,
            entries: Vec::new(),
            next_id: 1,
            camera,
            stored_camera: home,
            home_camera: home,
            light: Light::default(),
            style: DrawStyle::default(),
            lighting: true,
            selected: None,
            highlighted: None,
            gizmo: None,
            gizmo_config: GizmoConfig::default(),
        }
    }

    pub fn with_gizmo_config(mut self, config: GizmoConfig) -> Self {
        self.gizmo_config = config;
        self
    }

    /// Program lookup for building actors.
    pub fn shaders(&self) -> &dyn ShaderProvider {
        self.shaders.as_ref()
    }

    /// Initializes `node`, gives it a unique name and takes ownership of it.
    ///
    /// A node whose geometry fails to generate is dropped and never stored.
    pub fn add_actor(&mut self, node: impl Into<Node>) -> Result<ActorId, GeometryError> {
        let mut node = node.into();
        if let Err(err) = node.initialize() {
            warn!("failed to create {:?}: {err}", node.name());
            return Err(err);
        }

        let desired = node
            .name()
            .map(str::to_owned)
            .unwrap_or_else(|| node.default_name());
        let name = self.ensure_unique_name(&desired);
        node.set_name(name.clone());

        let id = ActorId(self.next_id);
        self.next_id += 1;

        let mut vertices = 0;
        node.for_each_actor(&Transform::identity(), &mut |actor, _| {
            vertices += actor.vertex_count()
        });
        info!("added actor '{name}' {id} with {vertices} vertices");

        self.entries.push((id, node));
        Ok(id)
    }

    /// Removes an entry, dropping any selection, highlight or gizmo that
    /// refers to it.
    pub fn remove_actor(&mut self, id: ActorId) -> Result<Node, SceneError> {
        let index = self.index_of(id)?;
        let (_, node) = self.entries.remove(index);

        if self.selected == Some(id) {
            self.selected = None;
        }
        if self.highlighted == Some(id) {
            self.highlighted = None;
        }
        if self.gizmo_target() == Some(id) {
            self.clear_gizmo();
        }

        info!("removed actor {:?} {id}", node.name());
        Ok(node)
    }

    pub fn actor(&self, id: ActorId) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, node)| node)
    }

    /// First top-level entry called `name`.
    pub fn find(&self, name: &str) -> Option<ActorId> {
        self.entries
            .iter()
            .find(|(_, node)| node.name() == Some(name))
            .map(|(id, _)| *id)
    }

    pub fn actor_ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry and resets selection, highlight and gizmo.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selected = None;
        self.highlighted = None;
        self.gizmo = None;
        info!("scene cleared");
    }

    /// Adds a floor grid that can be neither picked nor selected.
    pub fn create_grid_lines(&mut self, options: GridOptions) -> Result<ActorId, GeometryError> {
        let grid = Actor::new(Shape::Grid(options), self.shaders())
            .with_pickable(false)
            .with_selectable(false);
        self.add_actor(grid)
    }

    // Selection and highlight

    /// Selects `id`, replacing the previous selection. Entries that are not
    /// selectable are ignored.
    pub fn select(&mut self, id: ActorId) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        if !self.entries[index].1.is_selectable() {
            debug!("actor {id} is not selectable");
            return Ok(());
        }

        if let Some(previous) = self.selected.take() {
            if let Ok(i) = self.index_of(previous) {
                self.entries[i].1.set_selected(false);
            }
        }
        self.entries[index].1.set_selected(true);
        self.selected = Some(id);
        debug!("selected actor {id}");
        Ok(())
    }

    pub fn selected(&self) -> Option<ActorId> {
        self.selected
    }

    pub fn highlight(&mut self, id: ActorId) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.clear_highlight();
        self.entries[index].1.set_highlighted(true);
        self.highlighted = Some(id);
        Ok(())
    }

    pub fn clear_highlight(&mut self) {
        if let Some(previous) = self.highlighted.take() {
            if let Ok(i) = self.index_of(previous) {
                self.entries[i].1.set_highlighted(false);
            }
        }
    }

    pub fn highlighted(&self) -> Option<ActorId> {
        self.highlighted
    }

    /// Drops selection, highlight and gizmo.
    pub fn clear_selection(&mut self) {
        if let Some(previous) = self.selected.take() {
            if let Ok(i) = self.index_of(previous) {
                self.entries[i].1.set_selected(false);
            }
        }
        self.clear_highlight();
        self.clear_gizmo();
    }

    // Transforms

    pub fn transform(&self, id: ActorId) -> Result<Transform, SceneError> {
        let index = self.index_of(id)?;
        Ok(*self.entries[index].1.transform())
    }

    /// Replaces the transform of `id` and rebuilds a gizmo targeting it.
    pub fn set_actor_transform(
        &mut self,
        id: ActorId,
        transform: Transform,
    ) -> Result<(), SceneError> {
        let index = self.index_of(id)?;
        self.entries[index].1.set_transform(transform);

        if self.gizmo_target() == Some(id) {
            self.refresh_gizmo()?;
        }
        Ok(())
    }

    /// Sets the tessellation level of an actor; returns the level stored.
    pub fn set_subdivision_level(&mut self, id: ActorId, level: u32) -> Result<u32, SceneError> {
        let index = self.index_of(id)?;
        let actor = self.entries[index]
            .1
            .as_actor_mut()
            .ok_or(SceneError::UnknownActor(id.0))?;
        let stored = actor.set_subdivision_level(level);
        debug!("actor {id} subdivision level {stored}");
        Ok(stored)
    }

    // Picking

    /// Closest pickable actor under the NDC position.
    pub fn pick(&self, ndc: Vector2<f32>) -> Option<PickResult<ActorId>> {
        let ray = self.ray(ndc)?;

        let hits = self.entries.iter().filter_map(|(id, node)| {
            let actor = node.as_actor().filter(|actor| actor.is_pickable())?;
            let bounds = actor.bounds().ok()?;
            let distance = ray.hit_distance(&bounds, actor.transform())?;
            Some(PickResult {
                target: *id,
                distance,
            })
        });

        picking::closest(hits)
    }

    /// Axis of the gizmo marker under the NDC position.
    pub fn pick_gizmo_axis(&self, ndc: Vector2<f32>) -> Option<Axis> {
        let gizmo = self.gizmo.as_ref()?;
        let ray = self.ray(ndc)?;

        let mut hits = Vec::new();
        gizmo
            .gizmo
            .group()
            .for_each_actor(&Transform::identity(), &mut |actor, world| {
                let axis = actor.name().and_then(Axis::from_marker_name);
                let distance = actor
                    .bounds()
                    .ok()
                    .and_then(|bounds| ray.hit_distance(&bounds, world));
                if let (Some(target), Some(distance)) = (axis, distance) {
                    hits.push(PickResult { target, distance });
                }
            });

        picking::closest(hits).map(|hit| hit.target)
    }

    fn ray(&self, ndc: Vector2<f32>) -> Option<Ray> {
        Ray::from_ndc(ndc, self.camera.view_projection_matrix())
    }

    // Gizmo

    /// Replaces the gizmo with one of `kind` around `target`.
    pub fn show_gizmo(
        &mut self,
        target: ActorId,
        kind: GizmoKind,
        axis: Option<Axis>,
    ) -> Result<(), SceneError> {
        let index = self.index_of(target)?;
        let node = &self.entries[index].1;
        let gizmo = TransformGizmo::build(
            kind,
            axis,
            &node.bounds()?,
            node.transform(),
            &self.gizmo_config,
            self.shaders.as_ref(),
        )?;

        debug!("{kind} gizmo on actor {target}, axis {axis:?}");
        self.gizmo = Some(ActiveGizmo { target, gizmo });
        Ok(())
    }

    /// Rebuilds the current gizmo from its target's current state.
    pub fn refresh_gizmo(&mut self) -> Result<(), SceneError> {
        let Some(active) = self.gizmo.as_ref() else {
            return Ok(());
        };
        let (target, kind, axis) = (active.target, active.gizmo.kind(), active.gizmo.axis());
        self.show_gizmo(target, kind, axis)
    }

    pub fn clear_gizmo(&mut self) {
        if self.gizmo.take().is_some() {
            debug!("gizmo discarded");
        }
    }

    pub fn gizmo(&self) -> Option<&TransformGizmo> {
        self.gizmo.as_ref().map(|active| &active.gizmo)
    }

    pub fn gizmo_target(&self) -> Option<ActorId> {
        self.gizmo.as_ref().map(|active| active.target)
    }

    // Rendering

    /// Values shared by every draw command of the next frame.
    pub fn frame_context(&self) -> FrameContext {
        FrameContext {
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            camera_position: self.camera.eye(),
            light: self.light.to_uniform(),
            style: self.style,
            lighting: self.lighting,
        }
    }

    /// Draws every entry in insertion order, then the gizmo.
    pub fn render<'a>(&'a self, sink: &mut dyn DrawSink<'a>) {
        let frame = self.frame_context();
        sink.begin_frame(&frame);

        let root = Transform::identity();
        for (_, node) in &self.entries {
            node.render(&frame, &root, sink);
        }
        if let Some(active) = &self.gizmo {
            active.gizmo.group().render(&frame, &root, sink);
        }
    }

    pub fn style(&self) -> DrawStyle {
        self.style
    }

    pub fn set_style(&mut self, style: DrawStyle) {
        debug!("draw style {style:?}");
        self.style = style;
    }

    pub fn lighting(&self) -> bool {
        self.lighting
    }

    pub fn set_lighting(&mut self, lighting: bool) {
        self.lighting = lighting;
    }

    pub fn light(&self) -> &Light {
        &self.light
    }

    pub fn light_mut(&mut self) -> &mut Light {
        &mut self.light
    }

    // Camera

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn set_lens(&mut self, lens: Lens) {
        self.camera.set_lens(lens);
    }

    /// Remembers the current camera for [`Scene::recall_camera`].
    pub fn store_camera(&mut self) {
        self.stored_camera = self.camera.parameters();
    }

    /// Restores the stored camera and returns what was applied.
    pub fn recall_camera(&mut self) -> CameraParameters {
        self.camera.apply(&self.stored_camera);
        self.stored_camera
    }

    /// Restores the home camera and returns what was applied.
    pub fn reset_camera(&mut self) -> CameraParameters {
        self.camera.apply(&self.home_camera);
        self.home_camera
    }

    pub fn set_home_camera(&mut self, parameters: CameraParameters) {
        self.home_camera = parameters;
    }

    // Bookkeeping

    pub fn statistics(&self) -> SceneStatistics {
        let mut total_triangles = 0;
        let mut total_vertices = 0;
        for (_, node) in &self.entries {
            node.for_each_actor(&Transform::identity(), &mut |actor, _| {
                total_triangles += actor.triangle_count();
                total_vertices += actor.vertex_count();
            });
        }

        SceneStatistics {
            actor_count: self.entries.len(),
            total_triangles,
            total_vertices,
        }
    }

    /// `desired_name`, or the first free `"desired_name (n)"`.
    pub fn ensure_unique_name(&self, desired_name: &str) -> String {
        let mut counter = 0;
        let mut test_name = desired_name.to_string();

        while self
            .entries
            .iter()
            .any(|(_, node)| node.name() == Some(test_name.as_str()))
        {
            counter += 1;
            test_name = format!("{} ({})", desired_name, counter);
        }

        test_name
    }

    fn index_of(&self, id: ActorId) -> Result<usize, SceneError> {
        self.entries
            .iter()
            .position(|(entry, _)| *entry == id)
            .ok_or(SceneError::UnknownActor(id.0))
    }
}

/// Scene statistics for debugging and display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneStatistics {
    pub actor_count: usize,
    pub total_triangles: usize,
    pub total_vertices: usize,
}
