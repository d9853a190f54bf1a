//! # canvas-input
//!
//! Normalizes browser input events for canvas-based toolkits.
//!
//! A host (wasm glue, a replay tool, a remote-input bridge) receives native
//! pointer, wheel and keyboard events and hands each one to this crate, which
//! returns a toolkit-neutral record: coordinates, held buttons and modifiers as
//! bitflags, a layout-independent [`KeyCode`] with left/right Control, Shift
//! and Meta told apart, and typed text with non-printable keys filtered out.
//!
//! Every operation is a pure function of one event. There is no queue, no
//! state and no threading concern.
//!
//! ## Modules
//!
//! - [`types`] - Button/modifier masks, event kinds, key location
//! - [`input`] - Native event traits, key codes, event records, the normalizer
//! - [`error`] - Errors of the explicit `TryFrom` / `FromStr` conversions
//!
//! ## Features
//!
//! - `web` - implements the native traits for `web_sys` events
//! - `serde` - serialization for the vocabulary types and `Raw*` events
//!
//! # Example
//! ```rust
//! use canvas_input::{
//!     normalize_key_event, InputModifiers, KeyCode, KeyLocation, KeyboardEventKind,
//!     RawKeyboardEvent, RawModifiers,
//! };
//!
//! let native = RawKeyboardEvent::new("Control", 17)
//!     .with_location(KeyLocation::Right)
//!     .with_modifiers(RawModifiers::from_flags(false, false, true, false));
//! let event = normalize_key_event(&native, KeyboardEventKind::Down);
//!
//! assert_eq!(event.key, KeyCode::RightControl);
//! assert_eq!(event.modifiers, InputModifiers::CONTROL);
//! ```

pub mod error;
pub mod input;
pub mod types;

// Re-export commonly used items
pub use error::{InputError, Result};
pub use types::*;

pub use input::{
    // Records
    InputEvent, KeyboardEvent, PointerEvent,
    // Keys
    KeyCode, RIGHT_SIDE_MARKER, SIDE_SPLIT_KEYS,
    // Native seam
    NativeKeyboardEvent, NativeModifierState, NativeMouseEvent, NativeWheelEvent,
    RawKeyboardEvent, RawModifiers, RawMouseEvent, RawWheelEvent,
    // Normalizer
    is_special_key, normalize_drag_event, normalize_key_event, normalize_pointer_event,
    normalize_scroll_event, normalize_text_event, normalize_typed_key, resolve_buttons,
    resolve_key_code, resolve_modifiers, SPECIAL_KEYS,
};
