//! Normalized event records.
//!
//! One record per native event. Records borrow their native event for
//! diagnostics (`platform`) and never own it.

use super::keys::KeyCode;
use super::native::{NativeKeyboardEvent, NativeMouseEvent};
use crate::types::{InputModifiers, KeyboardEventKind, MouseButtons, PointerEventKind};

/// A pointer (mouse, pen, wheel) event.
#[derive(Debug, Clone, Copy)]
pub struct PointerEvent<'n> {
    pub x: f64,
    pub y: f64,
    /// Scroll delta, `0.0` unless `kind` is [`PointerEventKind::Scroll`].
    pub delta_x: f64,
    pub delta_y: f64,
    pub buttons: MouseButtons,
    pub modifiers: InputModifiers,
    pub kind: PointerEventKind,
    /// Milliseconds.
    pub timestamp: i64,
    pub platform: Option<&'n dyn NativeMouseEvent>,
}

impl PointerEvent<'_> {
    /// A pointer event with no native origin.
    pub fn new(x: f64, y: f64, kind: PointerEventKind) -> Self {
        Self {
            x,
            y,
            delta_x: 0.0,
            delta_y: 0.0,
            buttons: MouseButtons::EMPTY,
            modifiers: InputModifiers::EMPTY,
            kind,
            timestamp: 0,
            platform: None,
        }
    }

    pub fn is_scroll(&self) -> bool {
        self.kind == PointerEventKind::Scroll
    }
}

/// A key press or release.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardEvent<'n> {
    pub key: KeyCode,
    pub modifiers: InputModifiers,
    pub kind: KeyboardEventKind,
    /// Milliseconds.
    pub timestamp: i64,
    pub platform: Option<&'n dyn NativeKeyboardEvent>,
}

/// Text produced by a key.
#[derive(Debug, Clone)]
pub struct InputEvent<'n> {
    /// One character, or `"\n"` / `"\t"` for Enter / Tab.
    pub input: String,
    pub key: KeyCode,
    pub modifiers: InputModifiers,
    /// Always [`KeyboardEventKind::Type`] when built by the normalizer.
    pub kind: KeyboardEventKind,
    pub platform: Option<&'n dyn NativeKeyboardEvent>,
}
