// src/gfx/resources/mod.rs
//! Shading resources
//!
//! Materials owned by actors and the scene light, with their uniform layouts.

pub mod light;
pub mod material;

// Re-export main types
pub use light::{Light, LightUniform};
pub use material::{Material, MaterialUniform};
