//! diorama
//!
//! Core of an interactive 3D model viewer: procedural and OBJ geometry,
//! a scene graph of actors and groups, picking, transform gizmos and the
//! input state machine that drives them. Draw commands are handed to a
//! graphics backend through [`gfx::rendering::DrawSink`].

pub mod app;
pub mod error;
pub mod gfx;
pub mod performance;
pub mod prelude;

// Re-export main types for convenience
pub use app::{Viewer, ViewerConfig};

/// Installs `env_logger` with an `info` default filter. Safe to call more
/// than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
