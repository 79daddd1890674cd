use crate::{
    error::{GeometryError, SceneError},
    gfx::{
        geometry::BoundingBox,
        rendering::{DrawSink, FrameContext},
        transform::Transform,
    },
};

use super::{actor::Actor, group::Group};

/// Anything the scene can hold and draw.
pub trait Drawable {
    fn name(&self) -> Option<&str>;

    /// Transform relative to the parent.
    fn transform(&self) -> &Transform;

    /// Generates missing geometry, recursively for composites.
    fn initialize(&mut self) -> Result<(), GeometryError>;

    /// Emits draw commands placed by `parent * transform`.
    fn render<'a>(&'a self, frame: &FrameContext, parent: &Transform, sink: &mut dyn DrawSink<'a>);

    /// Bounding box in the drawable's own frame, before its transform.
    fn bounds(&self) -> Result<BoundingBox, SceneError>;

    /// Visits every actor with its world transform, in draw order.
    fn for_each_actor(&self, parent: &Transform, visit: &mut dyn FnMut(&Actor, &Transform));
}

impl Drawable for Actor {
    fn name(&self) -> Option<&str> {
        Actor::name(self)
    }

    fn transform(&self) -> &Transform {
        Actor::transform(self)
    }

    fn initialize(&mut self) -> Result<(), GeometryError> {
        Actor::initialize(self)
    }

    fn render<'a>(&'a self, frame: &FrameContext, parent: &Transform, sink: &mut dyn DrawSink<'a>) {
        Actor::render(self, frame, parent, sink)
    }

    fn bounds(&self) -> Result<BoundingBox, SceneError> {
        Actor::bounds(self)
    }

    fn for_each_actor(&self, parent: &Transform, visit: &mut dyn FnMut(&Actor, &Transform)) {
        visit(self, &(parent * Actor::transform(self)));
    }
}

/// A child of a group or a top-level scene entry.
#[derive(Debug, Clone)]
pub enum Node {
    Actor(Actor),
    Group(Group),
}

impl Node {
    pub fn as_actor(&self) -> Option<&Actor> {
        match self {
            Node::Actor(actor) => Some(actor),
            Node::Group(_) => None,
        }
    }

    pub fn as_actor_mut(&mut self) -> Option<&mut Actor> {
        match self {
            Node::Actor(actor) => Some(actor),
            Node::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::Actor(_) => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Node::Actor(actor) => actor.set_name(name),
            Node::Group(group) => group.set_name(name),
        }
    }

    /// Name used when none was given.
    pub fn default_name(&self) -> String {
        match self {
            Node::Actor(actor) => actor.shape().default_name(),
            Node::Group(_) => "group".to_string(),
        }
    }

    pub fn set_transform(&mut self, transform: Transform) {
        match self {
            Node::Actor(actor) => actor.set_transform(transform),
            Node::Group(group) => group.set_transform(transform),
        }
    }

    /// Groups are never pickable.
    pub fn is_pickable(&self) -> bool {
        self.as_actor().is_some_and(Actor::is_pickable)
    }

    /// Groups are never selectable.
    pub fn is_selectable(&self) -> bool {
        self.as_actor().is_some_and(Actor::is_selectable)
    }

    pub fn set_selected(&mut self, selected: bool) {
        if let Some(actor) = self.as_actor_mut() {
            actor.set_selected(selected);
        }
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        if let Some(actor) = self.as_actor_mut() {
            actor.set_highlighted(highlighted);
        }
    }
}

impl Drawable for Node {
    fn name(&self) -> Option<&str> {
        match self {
            Node::Actor(actor) => Drawable::name(actor),
            Node::Group(group) => Drawable::name(group),
        }
    }

    fn transform(&self) -> &Transform {
        match self {
            Node::Actor(actor) => Drawable::transform(actor),
            Node::Group(group) => Drawable::transform(group),
        }
    }

    fn initialize(&mut self) -> Result<(), GeometryError> {
        match self {
            Node::Actor(actor) => Drawable::initialize(actor),
            Node::Group(group) => Drawable::initialize(group),
        }
    }

    fn render<'a>(&'a self, frame: &FrameContext, parent: &Transform, sink: &mut dyn DrawSink<'a>) {
        match self {
            Node::Actor(actor) => Drawable::render(actor, frame, parent, sink),
            Node::Group(group) => Drawable::render(group, frame, parent, sink),
        }
    }

    fn bounds(&self) -> Result<BoundingBox, SceneError> {
        match self {
            Node::Actor(actor) => Drawable::bounds(actor),
            Node::Group(group) => Drawable::bounds(group),
        }
    }

    fn for_each_actor(&self, parent: &Transform, visit: &mut dyn FnMut(&Actor, &Transform)) {
        match self {
            Node::Actor(actor) => actor.for_each_actor(parent, visit),
            Node::Group(group) => group.for_each_actor(parent, visit),
        }
    }
}

impl From<Actor> for Node {
    fn from(actor: Actor) -> Self {
        Node::Actor(actor)
    }
}

impl From<Group> for Node {
    fn from(group: Group) -> Self {
        Node::Group(group)
    }
}
