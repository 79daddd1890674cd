//! # Graphics Module
//!
//! Everything between input events and draw commands.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - procedural shapes, OBJ loading, validated buffers
//! - **Scene** ([`scene`]) - actors, groups and the scene that owns them
//! - **Gizmos** ([`gizmos`]) - scale, translate and rotate handles
//! - **Camera** ([`camera`]) - camera, trackball and orbit/pan/zoom controller
//! - **Picking** ([`picking`]) - pointer rays against actor bounds
//! - **Interaction** ([`interaction`]) - input events and the manipulation state machine
//! - **Rendering** ([`rendering`]) - shader cache, draw styles and draw commands
//! - **Resources** ([`resources`]) - materials and the light
//!
//! A frame is produced by [`scene::Scene::render`], which walks the scene
//! graph and pushes one [`rendering::DrawCommand`] per actor into a
//! [`rendering::DrawSink`].

pub mod camera;
pub mod geometry;
pub mod gizmos;
pub mod interaction;
pub mod picking;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod transform;
