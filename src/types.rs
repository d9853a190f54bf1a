//! Core types for canvas-input.
//!
//! The vocabulary the normalized events are expressed in: button and modifier
//! masks, event kinds, and the physical key location reported by the host.

use std::fmt;
use std::str::FromStr;

use crate::error::{InputError, Result};

// =============================================================================
// Mouse Buttons (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Buttons held during a pointer event.
    ///
    /// Combine with bitwise OR: `MouseButtons::LEFT | MouseButtons::RIGHT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MouseButtons: u32 {
        const EMPTY = 0;
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
        const MIDDLE = 1 << 2;
    }
}

// =============================================================================
// Input Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Modifier keys held during a pointer or keyboard event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct InputModifiers: u32 {
        const EMPTY = 0;
        const META = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

// =============================================================================
// Event Kinds
// =============================================================================

/// What a pointer event means to the toolkit.
///
/// The native event alone cannot always tell (a `mousemove` is a drag only
/// while a button is held), so the caller supplies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventKind {
    #[default]
    Unknown,
    Down,
    Up,
    Move,
    Drag,
    Scroll,
    Enter,
    Exit,
}

impl PointerEventKind {
    /// Classify a DOM event type name (`"mousedown"`, `"wheel"`, ...).
    ///
    /// `Drag` has no DOM event of its own; hosts stamp it on moves made
    /// while a button is down.
    pub fn from_dom_event_type(event_type: &str) -> Result<Self> {
        match event_type {
            "mousedown" | "pointerdown" => Ok(Self::Down),
            "mouseup" | "pointerup" => Ok(Self::Up),
            "mousemove" | "pointermove" => Ok(Self::Move),
            "wheel" => Ok(Self::Scroll),
            "mouseenter" | "mouseover" | "pointerenter" | "pointerover" => Ok(Self::Enter),
            "mouseleave" | "mouseout" | "pointerleave" | "pointerout" => Ok(Self::Exit),
            other => Err(InputError::UnknownEventType(other.to_string())),
        }
    }
}

impl FromStr for PointerEventKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dom_event_type(s)
    }
}

impl fmt::Display for PointerEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Down => "down",
            Self::Up => "up",
            Self::Move => "move",
            Self::Drag => "drag",
            Self::Scroll => "scroll",
            Self::Enter => "enter",
            Self::Exit => "exit",
        };
        f.write_str(name)
    }
}

/// What a keyboard-derived event means to the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardEventKind {
    #[default]
    Unknown,
    Down,
    Up,
    /// Text entry, see [`crate::InputEvent`].
    Type,
}

impl KeyboardEventKind {
    /// Classify a DOM event type name (`"keydown"`, `"keyup"`, `"keypress"`).
    pub fn from_dom_event_type(event_type: &str) -> Result<Self> {
        match event_type {
            "keydown" => Ok(Self::Down),
            "keyup" => Ok(Self::Up),
            "keypress" => Ok(Self::Type),
            other => Err(InputError::UnknownEventType(other.to_string())),
        }
    }
}

impl FromStr for KeyboardEventKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_dom_event_type(s)
    }
}

impl fmt::Display for KeyboardEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Down => "down",
            Self::Up => "up",
            Self::Type => "type",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Key Location
// =============================================================================

/// Physical location of a key, as reported by `KeyboardEvent.location`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u32)]
pub enum KeyLocation {
    #[default]
    Standard = 0,
    Left = 1,
    Right = 2,
    Numpad = 3,
}

impl TryFrom<u32> for KeyLocation {
    type Error = InputError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            3 => Ok(Self::Numpad),
            other => Err(InputError::UnknownKeyLocation(other)),
        }
    }
}
