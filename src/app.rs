use std::{path::Path, rc::Rc};

use cgmath::{Deg, Quaternion, Rotation, Rotation3};
use log::{debug, info, warn};
use winit::event::WindowEvent;

use crate::{
    error::{GeometryError, ShaderError},
    gfx::{
        camera::{Camera, CameraConfig, Lens, ViewDirection},
        geometry::Topology,
        gizmos::GizmoConfig,
        interaction::{
            InputEvent, InputTranslator, InteractionConfig, InteractionController,
        },
        rendering::{DrawList, DrawSink, DrawStyle, ShaderCache, ShaderCompiler},
        scene::{Actor, ActorId, GridOptions, Node, Scene, SceneStatistics, Shape},
    },
    performance::PerformanceMonitor,
};

/// Start-up settings of a [`Viewer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub lighting: bool,
    /// Show frame statistics
    pub statistics: bool,
    pub camera: CameraConfig,
    /// Scene rotation the camera starts from and resets to
    pub home_rotation: Quaternion<f32>,
    pub interaction: InteractionConfig,
    pub gizmo: GizmoConfig,
    /// Initial window size in pixels
    pub size: (u32, u32),
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            lighting: true,
            statistics: true,
            camera: CameraConfig::default(),
            home_rotation: Quaternion::from_angle_x(Deg(25.0))
                * Quaternion::from_angle_y(Deg(-50.0)),
            interaction: InteractionConfig::default(),
            gizmo: GizmoConfig::default(),
            size: (1200, 800),
        }
    }
}

/// Composition root: the scene, the interaction controller and the frame
/// statistics behind one window.
pub struct Viewer {
    scene: Scene,
    controller: InteractionController,
    translator: InputTranslator,
    monitor: PerformanceMonitor,
    statistics: bool,
    tessellated: Option<ActorId>,
}

impl Viewer {
    pub fn new(config: ViewerConfig, shaders: Rc<ShaderCache>) -> Self {
        let (width, height) = config.size;
        let mut camera = Camera::new(&config.camera);
        camera.set_aspect_ratio(width as f32 / height.max(1) as f32);

        let mut scene = Scene::new(shaders, camera).with_gizmo_config(config.gizmo);
        scene.set_lighting(config.lighting);

        let controller = InteractionController::new(config.interaction, config.home_rotation);
        controller.camera_controller().sync(scene.camera_mut());
        scene.set_home_camera(scene.camera().parameters());
        scene.store_camera();

        let mut monitor = PerformanceMonitor::new();
        monitor.set_enabled(config.statistics);

        Self {
            scene,
            controller,
            translator: InputTranslator::new(width, height),
            monitor,
            statistics: config.statistics,
            tessellated: None,
        }
    }

    /// Compiles every shader program through `compiler` first.
    pub fn with_compiler(
        config: ViewerConfig,
        compiler: &mut dyn ShaderCompiler,
    ) -> Result<Self, ShaderError> {
        let shaders = ShaderCache::new(compiler)?;
        Ok(Self::new(config, Rc::new(shaders)))
    }

    /// A viewer without a graphics backend.
    pub fn headless(config: ViewerConfig) -> Self {
        Self::new(config, Rc::new(ShaderCache::headless()))
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn monitor(&self) -> &PerformanceMonitor {
        &self.monitor
    }

    // Content

    pub fn add_actor(&mut self, node: impl Into<Node>) -> Result<ActorId, GeometryError> {
        let node = node.into();
        let tessellated = node
            .as_actor()
            .is_some_and(|actor| actor.topology() == Topology::Patches);

        let id = self.scene.add_actor(node)?;
        if tessellated {
            self.tessellated = Some(id);
        }
        Ok(id)
    }

    pub fn add_shape(&mut self, shape: Shape) -> Result<ActorId, GeometryError> {
        let actor = Actor::new(shape, self.scene.shaders());
        self.add_actor(actor)
    }

    pub fn add_model(&mut self, path: impl AsRef<Path>) -> Result<ActorId, GeometryError> {
        self.add_shape(Shape::Obj(path.as_ref().to_path_buf()))
    }

    /// Loads several model files; a failure does not stop the others.
    pub fn add_models<I, P>(&mut self, paths: I) -> Vec<Result<ActorId, GeometryError>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        paths
            .into_iter()
            .map(|path| {
                let result = self.add_model(&path);
                if let Err(err) = &result {
                    warn!("could not load {}: {err}", path.as_ref().display());
                }
                result
            })
            .collect()
    }

    pub fn create_grid(&mut self, options: GridOptions) -> Result<ActorId, GeometryError> {
        self.scene.create_grid_lines(options)
    }

    pub fn clear_scene(&mut self) {
        self.scene.clear();
        self.controller.reset();
        self.tessellated = None;
    }

    /// Sets the tessellation level of the selected patch actor, or of the
    /// last one added. Returns the level stored, if there was such an actor.
    pub fn set_subdivision_level(&mut self, level: u32) -> Option<u32> {
        let selected_patch = self.scene.selected().filter(|id| {
            self.scene
                .actor(*id)
                .and_then(Node::as_actor)
                .is_some_and(|actor| actor.topology() == Topology::Patches)
        });
        let target = selected_patch.or(self.tessellated)?;

        match self.scene.set_subdivision_level(target, level) {
            Ok(stored) => Some(stored),
            Err(err) => {
                debug!("subdivision ignored: {err}");
                self.tessellated = None;
                None
            }
        }
    }

    // Input

    /// Feeds a window event through the input translator. Returns whether a
    /// redraw is needed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        if let WindowEvent::Resized(size) = event {
            self.resize(size.width, size.height);
            return true;
        }

        match self.translator.translate(event) {
            Some(input) => self.handle_input(&input),
            None => false,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.controller.handle(&mut self.scene, event)
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.translator.resize(width, height);
        if height > 0 {
            self.scene
                .camera_mut()
                .set_aspect_ratio(width as f32 / height as f32);
        }
    }

    // Toggles

    pub fn set_draw_style(&mut self, style: DrawStyle) {
        self.scene.set_style(style);
    }

    pub fn toggle_lighting(&mut self) -> bool {
        let lighting = !self.scene.lighting();
        self.scene.set_lighting(lighting);
        lighting
    }

    pub fn toggle_head_light(&mut self) -> bool {
        self.scene.light_mut().toggle_head_light()
    }

    pub fn toggle_directional_light(&mut self) -> bool {
        self.scene.light_mut().toggle_directional()
    }

    pub fn toggle_statistics(&mut self) -> bool {
        self.statistics = !self.statistics;
        self.monitor.set_enabled(self.statistics);
        self.statistics
    }

    pub fn toggle_lens(&mut self) -> Lens {
        let lens = match self.scene.camera().lens() {
            Lens::Perspective => Lens::Orthographic,
            Lens::Orthographic => Lens::Perspective,
        };
        info!("lens {lens:?}");
        self.scene.set_lens(lens);
        lens
    }

    // Camera

    pub fn view(&mut self, direction: ViewDirection) {
        self.controller
            .camera_controller_mut()
            .view(direction, self.scene.camera_mut());
    }

    pub fn store_camera(&mut self) {
        self.scene.store_camera();
    }

    pub fn recall_camera(&mut self) {
        let parameters = self.scene.recall_camera();
        self.controller
            .camera_controller_mut()
            .reset_rotation(parameters.rotation.invert(), self.scene.camera_mut());
    }

    pub fn reset_camera(&mut self) {
        let parameters = self.scene.reset_camera();
        self.controller
            .camera_controller_mut()
            .reset_rotation(parameters.rotation.invert(), self.scene.camera_mut());
    }

    // Frames

    /// Emits the draw commands of one frame into `sink`.
    pub fn render<'a>(&'a self, sink: &mut dyn DrawSink<'a>) {
        self.scene.render(sink);
    }

    /// Renders one frame into a draw list and records its statistics.
    pub fn render_frame(&mut self) -> DrawList<'_> {
        self.monitor.begin_frame();

        let mut list = DrawList::new();
        self.scene.render(&mut list);

        self.monitor
            .update_render_stats(list.len() as u32, list.vertex_count() as u32);
        self.monitor.end_frame();
        list
    }

    pub fn statistics(&self) -> SceneStatistics {
        self.scene.statistics()
    }

    /// Overlay text, or `None` while statistics are hidden.
    pub fn status_text(&self) -> Option<String> {
        if !self.statistics {
            return None;
        }
        let stats = self.scene.statistics();
        Some(format!(
            "{} actors | {} triangles | {}",
            stats.actor_count,
            stats.total_triangles,
            self.monitor.summary()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        interaction::{KeyInput, Modifiers, PointerButton},
        rendering::SequentialCompiler,
        scene::{IcosphereOptions, SphereOptions},
    };
    use cgmath::Vector2;

    #[test]
    fn test_frame_statistics_follow_the_scene() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        viewer.add_shape(Shape::Cube).unwrap();
        viewer.add_shape(Shape::Sphere(SphereOptions::default())).unwrap();

        let draws = viewer.render_frame().len();
        assert_eq!(draws, 2);
        assert_eq!(viewer.monitor().metrics().draw_calls, 2);

        let text = viewer.status_text().unwrap();
        assert!(text.starts_with("2 actors"));

        assert!(!viewer.toggle_statistics());
        assert!(viewer.status_text().is_none());
    }

    #[test]
    fn test_compiled_viewer() {
        let viewer =
            Viewer::with_compiler(ViewerConfig::default(), &mut SequentialCompiler::default());
        assert!(viewer.is_ok());
    }

    #[test]
    fn test_missing_models_do_not_stop_the_rest() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        let results = viewer.add_models(["missing/a.obj", "missing/b.obj"]);
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(Result::is_err));
        assert!(viewer.scene().is_empty());
    }

    #[test]
    fn test_subdivision_targets_last_icosphere() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        assert_eq!(viewer.set_subdivision_level(3), None);

        let id = viewer
            .add_shape(Shape::Icosphere(IcosphereOptions::default()))
            .unwrap();
        viewer.add_shape(Shape::Cube).unwrap();

        assert_eq!(viewer.set_subdivision_level(5), Some(5));
        let level = viewer
            .scene()
            .actor(id)
            .and_then(Node::as_actor)
            .map(Actor::subdivision_level);
        assert_eq!(level, Some(5));

        viewer.clear_scene();
        assert_eq!(viewer.set_subdivision_level(2), None);
    }

    #[test]
    fn test_recall_restores_camera_rotation() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        let home = viewer.scene().camera().rotation();

        viewer.store_camera();
        viewer.view(ViewDirection::Top);
        assert_ne!(viewer.scene().camera().rotation(), home);

        viewer.recall_camera();
        let recalled = viewer.scene().camera().rotation();
        assert!((recalled.s - home.s).abs() < 1e-5);
        assert!((recalled.v.x - home.v.x).abs() < 1e-5);
        assert!((recalled.v.y - home.v.y).abs() < 1e-5);
        assert!((recalled.v.z - home.v.z).abs() < 1e-5);
    }

    #[test]
    fn test_toggles() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        assert!(!viewer.toggle_lighting());
        assert!(!viewer.toggle_head_light());
        assert!(viewer.toggle_directional_light());
        assert_eq!(viewer.toggle_lens(), Lens::Orthographic);
        assert_eq!(viewer.toggle_lens(), Lens::Perspective);

        viewer.set_draw_style(DrawStyle::Wireframe);
        viewer.add_shape(Shape::Cube).unwrap();
        let list = viewer.render_frame();
        assert_eq!(list.frame.map(|f| f.style), Some(DrawStyle::Wireframe));
    }

    #[test]
    fn test_escape_after_pick() {
        let mut viewer = Viewer::headless(ViewerConfig::default());
        let id = viewer.add_shape(Shape::Cube).unwrap();

        let center = Vector2::new(0.0, 0.0);
        viewer.handle_input(&InputEvent::PointerDown {
            button: PointerButton::Left,
            position: center,
            modifiers: Modifiers::SHIFT,
        });
        assert_eq!(viewer.scene().selected(), Some(id));

        viewer.handle_input(&InputEvent::Key(KeyInput::Escape));
        assert!(viewer.scene().selected().is_none());
    }
}
