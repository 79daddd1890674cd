//! Draw styles, draw commands and sinks
//!
//! Rendering a scene produces a stream of [`DrawCommand`]s. Each command
//! borrows the actor's [`GeometryBuffer`] for the duration of the frame and
//! carries everything the backend needs to submit it: program, model matrix,
//! material and draw call.

use cgmath::{Matrix4, SquareMatrix, Vector3};

use crate::gfx::{
    geometry::{DrawCall, GeometryBuffer},
    resources::{light::LightUniform, material::Material},
    transform::Transform,
};

use super::shader_cache::ShaderProgram;

/// Global draw style of the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawStyle {
    /// Filled polygons, Phong with interpolated normals
    #[default]
    SolidSmooth,
    /// Filled polygons, Phong with per-primitive normals
    SolidFlat,
    /// Polygon outlines, unlit
    Wireframe,
    /// Filled polygons, unlit
    Unlit,
}

impl DrawStyle {
    pub fn polygon_mode(&self) -> PolygonMode {
        match self {
            DrawStyle::Wireframe => PolygonMode::Line,
            _ => PolygonMode::Fill,
        }
    }
}

/// Polygon rasterization mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    Fill,
    Line,
}

/// Per-frame values shared by every draw command.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub view: Matrix4<f32>,
    pub projection: Matrix4<f32>,
    pub camera_position: Vector3<f32>,
    pub light: LightUniform,
    pub style: DrawStyle,
    pub lighting: bool,
}

impl FrameContext {
    pub fn view_projection(&self) -> Matrix4<f32> {
        self.projection * self.view
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            view: Matrix4::identity(),
            projection: Matrix4::identity(),
            camera_position: Vector3::new(0.0, 0.0, 0.0),
            light: Default::default(),
            style: DrawStyle::default(),
            lighting: true,
        }
    }
}

/// One draw submission.
#[derive(Debug, Clone)]
pub struct DrawCommand<'a> {
    pub name: Option<&'a str>,
    pub program: ShaderProgram,
    /// World transform of the actor
    pub model: Transform,
    pub material: Material,
    pub call: DrawCall,
    pub polygon_mode: PolygonMode,
    pub highlighted: bool,
    pub selected: bool,
    /// Overlays are drawn after the scene without depth testing
    pub overlay: bool,
    /// Tessellation level for patch topologies
    pub subdivision_level: Option<u32>,
    pub geometry: &'a GeometryBuffer,
}

/// Receiver of the draw commands of one frame.
pub trait DrawSink<'a> {
    /// Called once before the first command of a frame.
    fn begin_frame(&mut self, _frame: &FrameContext) {}

    fn submit(&mut self, command: DrawCommand<'a>);
}

/// A sink that records the commands of a frame in order.
#[derive(Debug, Default)]
pub struct DrawList<'a> {
    pub frame: Option<FrameContext>,
    pub commands: Vec<DrawCommand<'a>>,
}

impl<'a> DrawList<'a> {
    pub fn new() -> Self {
        Self {
            frame: None,
            commands: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands of actors carrying `name`, in draw order.
    pub fn named(&self, name: &str) -> impl Iterator<Item = &DrawCommand<'a>> + '_ {
        let name = name.to_owned();
        self.commands
            .iter()
            .filter(move |command| command.name == Some(name.as_str()))
    }

    /// Vertices submitted this frame.
    pub fn vertex_count(&self) -> usize {
        self.commands
            .iter()
            .map(|command| command.call.count() as usize)
            .sum()
    }
}

impl<'a> DrawSink<'a> for DrawList<'a> {
    fn begin_frame(&mut self, frame: &FrameContext) {
        self.frame = Some(*frame);
        self.commands.clear();
    }

    fn submit(&mut self, command: DrawCommand<'a>) {
        self.commands.push(command);
    }
}
