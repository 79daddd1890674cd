// src/gfx/rendering/mod.rs
//! Render-mode dispatch
//!
//! Program registry, draw styles and the draw commands a frame is made of.
//! Submitting commands to a graphics API is left to the backend that owns the
//! [`DrawSink`].

pub mod draw;
pub mod shader_cache;

// Re-export main types
pub use draw::{DrawCommand, DrawList, DrawSink, DrawStyle, FrameContext, PolygonMode};
pub use shader_cache::{
    ColorSource, ProgramKind, SequentialCompiler, ShaderCache, ShaderCompiler, ShaderProgram,
    ShaderProvider, Shading,
};
