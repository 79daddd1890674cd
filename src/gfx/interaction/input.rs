//! Input events
//!
//! The interaction controller consumes toolkit-neutral [`InputEvent`]s with
//! pointer positions in normalized device coordinates. [`InputTranslator`]
//! produces them from `winit` window events.

use cgmath::Vector2;
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    keyboard::{Key, NamedKey},
};

/// Wheel angle units per notch.
pub const WHEEL_NOTCH: f32 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

/// Keyboard modifiers held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        control: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        control: false,
        alt: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A printable key, lowercased
    Char(char),
    Delete,
    Escape,
}

/// One input event with its pointer position in NDC.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        position: Vector2<f32>,
        modifiers: Modifiers,
    },
    PointerMove {
        position: Vector2<f32>,
        modifiers: Modifiers,
    },
    PointerUp {
        button: PointerButton,
        position: Vector2<f32>,
        modifiers: Modifiers,
    },
    /// Wheel rotation in angle units, positive away from the user
    Wheel { delta: f32, position: Vector2<f32> },
    Key(KeyInput),
}

/// Maps a pixel position (origin top left) to NDC (origin center, y up).
pub fn pixel_to_ndc(x: f32, y: f32, width: u32, height: u32) -> Vector2<f32> {
    let width = width.max(1) as f32;
    let height = height.max(1) as f32;
    Vector2::new(2.0 * x / width - 1.0, 1.0 - 2.0 * y / height)
}

/// Tracks window size, cursor and modifiers to turn window events into
/// [`InputEvent`]s.
#[derive(Debug, Clone, Copy)]
pub struct InputTranslator {
    width: u32,
    height: u32,
    cursor: Vector2<f32>,
    modifiers: Modifiers,
}

impl InputTranslator {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            cursor: Vector2::new(0.0, 0.0),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn cursor(&self) -> Vector2<f32> {
        self.cursor
    }

    /// Translates a window event; `None` for events the viewer ignores or
    /// only tracks.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                None
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.modifiers = Modifiers {
                    shift: state.shift_key(),
                    control: state.control_key(),
                    alt: state.alt_key(),
                };
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor =
                    pixel_to_ndc(position.x as f32, position.y as f32, self.width, self.height);
                Some(InputEvent::PointerMove {
                    position: self.cursor,
                    modifiers: self.modifiers,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButton::Left,
                    MouseButton::Right => PointerButton::Right,
                    MouseButton::Middle => PointerButton::Middle,
                    _ => return None,
                };
                let (position, modifiers) = (self.cursor, self.modifiers);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button,
                        position,
                        modifiers,
                    },
                    ElementState::Released => InputEvent::PointerUp {
                        button,
                        position,
                        modifiers,
                    },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * WHEEL_NOTCH,
                    MouseScrollDelta::PixelDelta(pixels) => pixels.y as f32,
                };
                Some(InputEvent::Wheel {
                    delta,
                    position: self.cursor,
                })
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                let key = match &event.logical_key {
                    Key::Named(NamedKey::Escape) => KeyInput::Escape,
                    Key::Named(NamedKey::Delete) => KeyInput::Delete,
                    Key::Character(text) => {
                        KeyInput::Char(text.chars().next()?.to_ascii_lowercase())
                    }
                    _ => return None,
                };
                Some(InputEvent::Key(key))
            }
            _ => None,
        }
    }
}
