//! # Actors
//!
//! An [`Actor`] is one drawable piece of geometry in the scene. It is built
//! from a [`Shape`] and goes through three steps:
//!
//! 1. [`Actor::generate_geometry`] turns the shape into raw arrays and records
//!    the untransformed bounding box
//! 2. [`Actor::create`] validates the arrays into the actor's own
//!    [`GeometryBuffer`]
//! 3. [`Actor::render`] emits a [`DrawCommand`] per frame
//!
//! [`Actor::initialize`] runs the first two lazily. Until then the bounds
//! queries fail with [`SceneError::NotInitialized`].

use cgmath::Vector3;
use log::debug;

use crate::{
    error::{GeometryError, SceneError},
    gfx::{
        geometry::{BoundingBox, GeometryBuffer, GeometryData, Topology},
        rendering::{
            ColorSource, DrawCommand, DrawSink, DrawStyle, FrameContext, ProgramKind, Shading,
            ShaderProgram, ShaderProvider,
        },
        resources::Material,
        transform::Transform,
    },
};

use super::shape::{Shape, MAX_SUBDIVISION_LEVEL};

/// How an actor is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderType {
    /// Depth-tested with the rest of the scene
    #[default]
    Solid,
    /// Drawn on top of the scene and never lit
    Overlay,
}

/// Programs an actor can be drawn with, looked up once at construction.
#[derive(Debug, Clone, Copy)]
pub struct ShaderTable {
    programs: [ShaderProgram; ProgramKind::COUNT],
}

impl ShaderTable {
    pub fn register(provider: &dyn ShaderProvider) -> Self {
        Self {
            programs: ProgramKind::all().map(|kind| provider.program(kind)),
        }
    }

    pub fn program(&self, kind: ProgramKind) -> ShaderProgram {
        self.programs[kind.index()]
    }
}

/// A drawable leaf of the scene.
#[derive(Debug, Clone)]
pub struct Actor {
    name: Option<String>,
    shape: Shape,
    geometry: Option<GeometryBuffer>,
    bounds: Option<BoundingBox>,
    transform: Transform,
    material: Material,
    shaders: ShaderTable,
    render_type: RenderType,
    selectable: bool,
    pickable: bool,
    selected: bool,
    highlighted: bool,
    subdivision_level: u32,
}

impl Actor {
    /// Creates an actor without geometry; see [`Actor::initialize`].
    pub fn new(shape: Shape, shaders: &dyn ShaderProvider) -> Self {
        let subdivision_level = match &shape {
            Shape::Icosphere(options) => options.level.clamp(1, MAX_SUBDIVISION_LEVEL),
            _ => 1,
        };

        Self {
            name: None,
            shape,
            geometry: None,
            bounds: None,
            transform: Transform::identity(),
            material: Material::default(),
            shaders: ShaderTable::register(shaders),
            render_type: RenderType::Solid,
            selectable: true,
            pickable: true,
            selected: false,
            highlighted: false,
            subdivision_level,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_render_type(mut self, render_type: RenderType) -> Self {
        self.render_type = render_type;
        self
    }

    pub fn with_pickable(mut self, pickable: bool) -> Self {
        self.pickable = pickable;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    /// Produces the raw arrays for the shape and records their bounding box.
    pub fn generate_geometry(&mut self) -> Result<GeometryData, GeometryError> {
        let data = self.shape.generate()?;
        self.bounds = Some(data.bounds());
        Ok(data)
    }

    /// Binds `data` into the actor's geometry buffer.
    pub fn create(&mut self, data: GeometryData) -> Result<(), GeometryError> {
        let buffer = GeometryBuffer::create(data)?;
        if self.bounds.is_none() {
            self.bounds = Some(buffer.data().bounds());
        }
        self.geometry = Some(buffer);
        Ok(())
    }

    /// Generates and binds the geometry unless a buffer already exists.
    pub fn initialize(&mut self) -> Result<(), GeometryError> {
        if self.geometry.is_some() {
            return Ok(());
        }
        let data = self.generate_geometry()?;
        self.create(data)
    }

    pub fn is_initialized(&self) -> bool {
        self.geometry.is_some()
    }

    /// Program for the given draw style and lighting flag.
    ///
    /// Attribute-color programs are used when the geometry carries colors.
    /// Overlays, unlit scenes and the wireframe and unlit styles get the
    /// unlit program; the solid styles pick smooth or flat Phong. Patch
    /// geometry always uses the tessellation variant.
    pub fn select_shader(&self, style: DrawStyle, lit: bool) -> ShaderProgram {
        let has_color = self
            .geometry
            .as_ref()
            .map(|buffer| buffer.capabilities().has_color)
            .unwrap_or(false);
        let source = if has_color {
            ColorSource::AttributeColor
        } else {
            ColorSource::UniformMaterial
        };

        let shading = if self.render_type == RenderType::Overlay || !lit {
            Shading::Unlit
        } else {
            match style {
                DrawStyle::SolidSmooth => Shading::Phong,
                DrawStyle::SolidFlat => Shading::PhongFlat,
                DrawStyle::Wireframe | DrawStyle::Unlit => Shading::Unlit,
            }
        };

        let tessellated = self.topology() == Topology::Patches;
        self.shaders
            .program(ProgramKind::new(source, shading, tessellated))
    }

    /// Emits one draw command placed by `parent * transform`.
    ///
    /// Actors without geometry are skipped.
    pub fn render<'a>(
        &'a self,
        frame: &FrameContext,
        parent: &Transform,
        sink: &mut dyn DrawSink<'a>,
    ) {
        let Some(geometry) = self.geometry.as_ref() else {
            debug!("skipping uninitialized actor {:?}", self.name);
            return;
        };

        let subdivision_level =
            (geometry.topology() == Topology::Patches).then_some(self.subdivision_level);

        sink.submit(DrawCommand {
            name: self.name.as_deref(),
            program: self.select_shader(frame.style, frame.lighting),
            model: parent * &self.transform,
            material: self.material,
            call: geometry.draw_call(),
            polygon_mode: frame.style.polygon_mode(),
            highlighted: self.highlighted,
            selected: self.selected,
            overlay: self.render_type == RenderType::Overlay,
            subdivision_level,
            geometry,
        });
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn geometry(&self) -> Option<&GeometryBuffer> {
        self.geometry.as_ref()
    }

    /// Topology of the buffer, or the one the shape will produce.
    pub fn topology(&self) -> Topology {
        self.geometry
            .as_ref()
            .map(GeometryBuffer::topology)
            .unwrap_or_else(|| self.shape.topology())
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Replaces the transform wholesale.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn render_type(&self) -> RenderType {
        self.render_type
    }

    pub fn is_pickable(&self) -> bool {
        self.pickable
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    pub fn subdivision_level(&self) -> u32 {
        self.subdivision_level
    }

    /// Sets the tessellation level, clamped to the accepted range. Returns
    /// the level actually stored.
    pub fn set_subdivision_level(&mut self, level: u32) -> u32 {
        self.subdivision_level = level.clamp(1, MAX_SUBDIVISION_LEVEL);
        self.subdivision_level
    }

    /// Untransformed bounding box of the geometry.
    pub fn bounds(&self) -> Result<BoundingBox, SceneError> {
        self.bounds.ok_or(SceneError::NotInitialized { what: "bounds" })
    }

    pub fn point_min(&self) -> Result<Vector3<f32>, SceneError> {
        self.bounds
            .map(|bounds| bounds.min)
            .ok_or(SceneError::NotInitialized { what: "point_min" })
    }

    pub fn point_max(&self) -> Result<Vector3<f32>, SceneError> {
        self.bounds
            .map(|bounds| bounds.max)
            .ok_or(SceneError::NotInitialized { what: "point_max" })
    }

    pub fn center(&self) -> Result<Vector3<f32>, SceneError> {
        self.bounds
            .map(|bounds| bounds.center())
            .ok_or(SceneError::NotInitialized { what: "center" })
    }

    pub fn size(&self) -> Result<Vector3<f32>, SceneError> {
        self.bounds
            .map(|bounds| bounds.size())
            .ok_or(SceneError::NotInitialized { what: "size" })
    }

    pub fn vertex_count(&self) -> usize {
        self.geometry.as_ref().map_or(0, GeometryBuffer::vertex_count)
    }

    pub fn triangle_count(&self) -> usize {
        self.geometry.as_ref().map_or(0, GeometryBuffer::triangle_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::DrawCall,
        rendering::{DrawList, ShaderCache},
        scene::shape::{IcosphereOptions, SphereOptions},
    };

    fn colored_mesh() -> GeometryData {
        let mut data = GeometryData::new();
        data.vertices = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        data.colors = vec![[1.0, 0.0, 0.0]; 3];
        data
    }

    #[test]
    fn test_bounds_fail_before_generation() {
        let cache = ShaderCache::headless();
        let actor = Actor::new(Shape::Cube, &cache);

        assert!(matches!(
            actor.center(),
            Err(SceneError::NotInitialized { what: "center" })
        ));
        assert!(actor.size().is_err());
        assert!(actor.point_min().is_err());
        assert!(actor.point_max().is_err());
    }

    #[test]
    fn test_initialize_records_bounds() {
        let cache = ShaderCache::headless();
        let mut actor = Actor::new(Shape::Cube, &cache);
        actor.initialize().unwrap();

        assert!(actor.is_initialized());
        assert_eq!(actor.center().unwrap(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(actor.size().unwrap(), Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(actor.triangle_count(), 12);
    }

    #[test]
    fn test_invalid_options_fail_initialization() {
        let cache = ShaderCache::headless();
        let mut actor = Actor::new(
            Shape::Sphere(SphereOptions {
                horizontal_segments: 1,
                ..Default::default()
            }),
            &cache,
        );

        assert!(actor.initialize().is_err());
        assert!(!actor.is_initialized());
    }

    #[test]
    fn test_mismatched_arrays_fail_create() {
        let cache = ShaderCache::headless();
        let mut data = colored_mesh();
        data.normals = vec![[0.0, 0.0, 1.0]];

        let mut actor = Actor::new(Shape::Mesh(data), &cache);
        assert!(matches!(
            actor.initialize(),
            Err(GeometryError::AttributeLength { attribute: "normals", .. })
        ));
    }

    #[test]
    fn test_shader_mapping_is_total() {
        let cache = ShaderCache::headless();
        let mut plain = Actor::new(Shape::Cube, &cache);
        let mut colored = Actor::new(Shape::Mesh(colored_mesh()), &cache);
        plain.initialize().unwrap();
        colored.initialize().unwrap();

        let styles = [
            DrawStyle::SolidSmooth,
            DrawStyle::SolidFlat,
            DrawStyle::Wireframe,
            DrawStyle::Unlit,
        ];
        for (actor, source) in [
            (&plain, ColorSource::UniformMaterial),
            (&colored, ColorSource::AttributeColor),
        ] {
            for style in styles {
                for lit in [true, false] {
                    let kind = actor.select_shader(style, lit).kind;
                    assert_eq!(kind.source, source);
                    assert!(!kind.tessellated);

                    let expected = match (style, lit) {
                        (DrawStyle::SolidSmooth, true) => Shading::Phong,
                        (DrawStyle::SolidFlat, true) => Shading::PhongFlat,
                        _ => Shading::Unlit,
                    };
                    assert_eq!(kind.shading, expected);
                    assert_eq!(actor.select_shader(style, lit), actor.select_shader(style, lit));
                }
            }
        }
    }

    #[test]
    fn test_overlay_is_always_unlit() {
        let cache = ShaderCache::headless();
        let mut actor = Actor::new(Shape::Cube, &cache).with_render_type(RenderType::Overlay);
        actor.initialize().unwrap();

        let kind = actor.select_shader(DrawStyle::SolidSmooth, true).kind;
        assert_eq!(kind.shading, Shading::Unlit);
    }

    #[test]
    fn test_patches_use_tessellation_programs() {
        let cache = ShaderCache::headless();
        let mut actor = Actor::new(
            Shape::Icosphere(IcosphereOptions {
                level: 4,
                ..Default::default()
            }),
            &cache,
        );
        actor.initialize().unwrap();

        let kind = actor.select_shader(DrawStyle::SolidFlat, true).kind;
        assert!(kind.tessellated);
        assert_eq!(kind.shading, Shading::PhongFlat);

        let mut list = DrawList::new();
        actor.render(&FrameContext::default(), &Transform::identity(), &mut list);
        assert_eq!(list.commands[0].subdivision_level, Some(4));
        assert_eq!(actor.set_subdivision_level(500), MAX_SUBDIVISION_LEVEL);
    }

    #[test]
    fn test_render_emits_indexed_call() {
        let cache = ShaderCache::headless();
        let mut actor = Actor::new(Shape::Cube, &cache).with_name("box");
        actor.initialize().unwrap();

        let parent = Transform::from_translation(Vector3::new(1.0, 0.0, 0.0));
        let mut list = DrawList::new();
        actor.render(&FrameContext::default(), &parent, &mut list);

        let command = &list.commands[0];
        assert_eq!(command.name, Some("box"));
        assert_eq!(
            command.call,
            DrawCall::Elements {
                topology: Topology::Triangles,
                count: 36
            }
        );
        assert!(command.model.approx_eq(&parent, 1e-6));
        assert!(command.subdivision_level.is_none());
    }

    #[test]
    fn test_uninitialized_actor_draws_nothing() {
        let cache = ShaderCache::headless();
        let actor = Actor::new(Shape::Cube, &cache);
        let mut list = DrawList::new();
        actor.render(&FrameContext::default(), &Transform::identity(), &mut list);
        assert!(list.is_empty());
    }
}
