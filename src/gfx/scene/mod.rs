//! # Scene Management Module
//!
//! The scene graph of the viewer: actors built from shapes, groups composing
//! them, and the [`Scene`] that owns everything drawn in a frame together
//! with the camera, light and selection state.
//!
//! ## Key Components
//!
//! - [`Scene`] - owns the entries, camera, light, selection and the active gizmo
//! - [`Actor`] - one piece of geometry with transform, material and shader table
//! - [`Group`] - ordered children placed by a shared transform
//! - [`Node`] / [`Drawable`] - what a scene or group can hold
//! - [`Shape`] - the construction options an actor generates geometry from
//! - [`Vertex3D`] - interleaved vertex layout for backend upload
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//! use diorama::gfx::{
//!     camera::Camera,
//!     rendering::{DrawList, ShaderCache},
//!     scene::{Actor, Scene, Shape},
//! };
//!
//! let mut scene = Scene::new(Rc::new(ShaderCache::headless()), Camera::default());
//! let cube = Actor::new(Shape::Cube, scene.shaders());
//! let id = scene.add_actor(cube).unwrap();
//!
//! let mut frame = DrawList::new();
//! scene.render(&mut frame);
//! assert_eq!(frame.len(), 1);
//! assert_eq!(scene.find("cube"), Some(id));
//! ```

pub mod actor;
pub mod group;
pub mod node;
pub mod scene;
pub mod shape;
pub mod vertex;

// Re-export main types
pub use actor::{Actor, RenderType, ShaderTable};
pub use group::Group;
pub use node::{Drawable, Node};
pub use scene::{ActorId, Scene, SceneStatistics};
pub use shape::{
    ConeOptions, CylinderOptions, GridOptions, IcosphereOptions, PyramidOptions, Shape,
    SphereOptions, TorusOptions,
};
pub use vertex::Vertex3D;
