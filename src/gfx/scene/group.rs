//! Composite actors
//!
//! A [`Group`] owns an ordered list of [`Node`]s and places them with its own
//! transform. It has no geometry of its own and is never picked or selected.

use log::debug;

use crate::{
    error::{GeometryError, SceneError},
    gfx::{
        geometry::BoundingBox,
        rendering::{DrawSink, FrameContext},
        transform::Transform,
    },
};

use super::{
    actor::Actor,
    node::{Drawable, Node},
};

#[derive(Debug, Clone, Default)]
pub struct Group {
    name: Option<String>,
    transform: Transform,
    parts: Vec<Node>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Appends a child; insertion order is draw order.
    pub fn add_part(&mut self, part: impl Into<Node>) -> &mut Self {
        let part = part.into();
        debug!("group {:?} adds part {:?}", self.name, part.name());
        self.parts.push(part);
        self
    }

    pub fn parts(&self) -> &[Node] {
        &self.parts
    }

    /// First descendant called `name`, depth-first in draw order.
    pub fn part_named(&self, name: &str) -> Option<&Node> {
        self.parts.iter().find_map(|part| {
            if part.name() == Some(name) {
                return Some(part);
            }
            part.as_group().and_then(|group| group.part_named(name))
        })
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Drawable for Group {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn initialize(&mut self) -> Result<(), GeometryError> {
        self.parts.iter_mut().try_for_each(Drawable::initialize)
    }

    fn render<'a>(&'a self, frame: &FrameContext, parent: &Transform, sink: &mut dyn DrawSink<'a>) {
        let world = parent * &self.transform;
        for part in &self.parts {
            part.render(frame, &world, sink);
        }
    }

    /// Union of the children's boxes mapped through their transforms. An
    /// empty group has the zero box.
    fn bounds(&self) -> Result<BoundingBox, SceneError> {
        let mut bounds: Option<BoundingBox> = None;
        for part in &self.parts {
            let placed = part.bounds()?.transform(part.transform());
            bounds = Some(match bounds {
                Some(acc) => acc.union(&placed),
                None => placed,
            });
        }
        Ok(bounds.unwrap_or_else(BoundingBox::zero))
    }

    fn for_each_actor(&self, parent: &Transform, visit: &mut dyn FnMut(&Actor, &Transform)) {
        let world = parent * &self.transform;
        for part in &self.parts {
            part.for_each_actor(&world, visit);
        }
    }
}
