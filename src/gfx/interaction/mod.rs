pub mod controller;
pub mod input;

// Re-export main types
pub use controller::{InteractionConfig, InteractionController, InteractionState};
pub use input::{pixel_to_ndc, InputEvent, InputTranslator, KeyInput, Modifiers, PointerButton};
