//! Native event seam.
//!
//! The normalizer reads host events only through these traits, so it runs
//! the same against `web_sys` events (feature `web`) and against the
//! plain-data `Raw*` events below, which hosts outside the browser (replay,
//! remote input, tests) construct themselves.

use std::fmt;

use crate::types::KeyLocation;

// =============================================================================
// Traits
// =============================================================================

/// Modifier key state carried by every native input event.
pub trait NativeModifierState {
    fn alt_key(&self) -> bool;
    fn shift_key(&self) -> bool;
    fn ctrl_key(&self) -> bool;
    fn meta_key(&self) -> bool;
}

/// A native mouse or pointer event.
pub trait NativeMouseEvent: NativeModifierState + fmt::Debug {
    /// Horizontal offset from the target's padding edge, in CSS pixels.
    fn offset_x(&self) -> f64;
    /// Vertical offset from the target's padding edge, in CSS pixels.
    fn offset_y(&self) -> f64;
    /// DOM button id: 0 main, 1 auxiliary, 2 secondary, others device-specific.
    fn button(&self) -> i16;
    /// Milliseconds, as `Event.timeStamp`.
    fn time_stamp(&self) -> f64;
}

/// A native wheel event.
pub trait NativeWheelEvent: NativeMouseEvent {
    fn delta_x(&self) -> f64;
    fn delta_y(&self) -> f64;
}

/// A native keyboard event.
pub trait NativeKeyboardEvent: NativeModifierState + fmt::Debug {
    /// DOM `keyCode`.
    fn key_code(&self) -> u32;
    fn location(&self) -> KeyLocation;
    /// DOM `key` value (`"a"`, `"Enter"`, `"F5"`, ...).
    fn key(&self) -> String;
    /// Milliseconds, as `Event.timeStamp`.
    fn time_stamp(&self) -> f64;
}

// =============================================================================
// Modifier state
// =============================================================================

/// Plain modifier flags shared by the `Raw*` events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawModifiers {
    pub alt: bool,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl RawModifiers {
    /// Create from booleans
    pub fn from_flags(alt: bool, shift: bool, ctrl: bool, meta: bool) -> Self {
        Self { alt, shift, ctrl, meta }
    }
}

impl NativeModifierState for RawModifiers {
    fn alt_key(&self) -> bool {
        self.alt
    }

    fn shift_key(&self) -> bool {
        self.shift
    }

    fn ctrl_key(&self) -> bool {
        self.ctrl
    }

    fn meta_key(&self) -> bool {
        self.meta
    }
}

macro_rules! delegate_modifiers {
    ($ty:ty) => {
        impl NativeModifierState for $ty {
            fn alt_key(&self) -> bool {
                self.modifiers.alt
            }

            fn shift_key(&self) -> bool {
                self.modifiers.shift
            }

            fn ctrl_key(&self) -> bool {
                self.modifiers.ctrl
            }

            fn meta_key(&self) -> bool {
                self.modifiers.meta
            }
        }
    };
}

// =============================================================================
// Raw Mouse Event
// =============================================================================

/// A mouse event described as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMouseEvent {
    pub offset_x: f64,
    pub offset_y: f64,
    pub button: i16,
    pub time_stamp: f64,
    pub modifiers: RawModifiers,
}

impl RawMouseEvent {
    /// Create an event at the given offset, main button, no modifiers.
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Self::default()
        }
    }

    pub fn with_button(mut self, button: i16) -> Self {
        self.button = button;
        self
    }

    pub fn with_time_stamp(mut self, time_stamp: f64) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    pub fn with_modifiers(mut self, modifiers: RawModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

delegate_modifiers!(RawMouseEvent);

impl NativeMouseEvent for RawMouseEvent {
    fn offset_x(&self) -> f64 {
        self.offset_x
    }

    fn offset_y(&self) -> f64 {
        self.offset_y
    }

    fn button(&self) -> i16 {
        self.button
    }

    fn time_stamp(&self) -> f64 {
        self.time_stamp
    }
}

// =============================================================================
// Raw Wheel Event
// =============================================================================

/// A wheel event described as plain data.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawWheelEvent {
    pub mouse: RawMouseEvent,
    pub delta_x: f64,
    pub delta_y: f64,
}

impl RawWheelEvent {
    pub fn new(mouse: RawMouseEvent, delta_x: f64, delta_y: f64) -> Self {
        Self { mouse, delta_x, delta_y }
    }
}

impl NativeModifierState for RawWheelEvent {
    fn alt_key(&self) -> bool {
        self.mouse.alt_key()
    }

    fn shift_key(&self) -> bool {
        self.mouse.shift_key()
    }

    fn ctrl_key(&self) -> bool {
        self.mouse.ctrl_key()
    }

    fn meta_key(&self) -> bool {
        self.mouse.meta_key()
    }
}

impl NativeMouseEvent for RawWheelEvent {
    fn offset_x(&self) -> f64 {
        self.mouse.offset_x
    }

    fn offset_y(&self) -> f64 {
        self.mouse.offset_y
    }

    fn button(&self) -> i16 {
        self.mouse.button
    }

    fn time_stamp(&self) -> f64 {
        self.mouse.time_stamp
    }
}

impl NativeWheelEvent for RawWheelEvent {
    fn delta_x(&self) -> f64 {
        self.delta_x
    }

    fn delta_y(&self) -> f64 {
        self.delta_y
    }
}

// =============================================================================
// Raw Keyboard Event
// =============================================================================

/// A keyboard event described as plain data.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawKeyboardEvent {
    pub key: String,
    pub key_code: u32,
    pub location: KeyLocation,
    pub time_stamp: f64,
    pub modifiers: RawModifiers,
}

impl RawKeyboardEvent {
    /// Create an event for `key` with the given DOM key code, standard location.
    pub fn new(key: impl Into<String>, key_code: u32) -> Self {
        Self {
            key: key.into(),
            key_code,
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: KeyLocation) -> Self {
        self.location = location;
        self
    }

    pub fn with_time_stamp(mut self, time_stamp: f64) -> Self {
        self.time_stamp = time_stamp;
        self
    }

    pub fn with_modifiers(mut self, modifiers: RawModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

delegate_modifiers!(RawKeyboardEvent);

impl NativeKeyboardEvent for RawKeyboardEvent {
    fn key_code(&self) -> u32 {
        self.key_code
    }

    fn location(&self) -> KeyLocation {
        self.location
    }

    fn key(&self) -> String {
        self.key.clone()
    }

    fn time_stamp(&self) -> f64 {
        self.time_stamp
    }
}
