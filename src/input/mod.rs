//! Input normalization: native browser event → toolkit event.
//!
//! The host owns the event source and calls in once per native event,
//! adding the context the native event cannot express (is a button held,
//! what kind of event is this). Nothing is queued or remembered.
//!
//! # Architecture
//!
//! ```text
//! host listener (mousemove, wheel, keydown, ...)
//!        │  &native + context
//!        ▼
//!   native traits ── web_sys events (feature "web") / Raw* events
//!        │
//!    normalize ── resolve_buttons / resolve_modifiers / resolve_key_code
//!        │
//!        ▼
//!   PointerEvent | KeyboardEvent | Option<InputEvent>  → toolkit pipeline
//! ```

pub mod events;
pub mod keys;
pub mod native;
pub mod normalize;
#[cfg(feature = "web")]
pub mod web;

pub use events::{InputEvent, KeyboardEvent, PointerEvent};
pub use keys::{KeyCode, RIGHT_SIDE_MARKER, SIDE_SPLIT_KEYS};
pub use native::{
    NativeKeyboardEvent, NativeModifierState, NativeMouseEvent, NativeWheelEvent,
    RawKeyboardEvent, RawModifiers, RawMouseEvent, RawWheelEvent,
};
pub use normalize::{
    is_special_key, normalize_drag_event, normalize_key_event, normalize_pointer_event,
    normalize_scroll_event, normalize_text_event, normalize_typed_key, resolve_buttons,
    resolve_key_code, resolve_modifiers, SPECIAL_KEYS,
};
