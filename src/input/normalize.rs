//! Native event → normalized event.
//!
//! Every function here is a pure, total mapping of one native event:
//! - pointer / drag / wheel → [`PointerEvent`]
//! - key down / up → [`KeyboardEvent`]
//! - typed character → [`InputEvent`], or nothing for non-printable keys
//!
//! Unknown key codes become [`KeyCode::Unknown`], unknown buttons add no flag.
//! Nothing here returns an error.

use super::events::{InputEvent, KeyboardEvent, PointerEvent};
use super::keys::{KeyCode, RIGHT_SIDE_MARKER, SIDE_SPLIT_KEYS};
use super::native::{NativeKeyboardEvent, NativeModifierState, NativeMouseEvent, NativeWheelEvent};
use crate::types::{InputModifiers, KeyLocation, KeyboardEventKind, MouseButtons, PointerEventKind};

/// DOM `key` values that never produce text.
///
/// Kept exactly as the host contract lists it. "Clear" appears twice and
/// Insert / F23 / F24 are absent; neither affects membership tests.
pub const SPECIAL_KEYS: &[&str] = &[
    "Unidentified",
    "Alt",
    "AltGraph",
    "Backspace",
    "CapsLock",
    "Control",
    "Fn",
    "FnLock",
    "Hyper",
    "Meta",
    "NumLock",
    "ScrollLock",
    "Shift",
    "Super",
    "Symbol",
    "SymbolLock",
    "F1",
    "F2",
    "F3",
    "F4",
    "F5",
    "F6",
    "F7",
    "F8",
    "F9",
    "F10",
    "F11",
    "F12",
    "F13",
    "F14",
    "F15",
    "F16",
    "F17",
    "F18",
    "F19",
    "F20",
    "F21",
    "F22",
    "ArrowLeft",
    "ArrowUp",
    "ArrowRight",
    "ArrowDown",
    "Help",
    "Home",
    "Delete",
    "End",
    "PageUp",
    "PageDown",
    "Escape",
    "Clear",
    "Clear",
];

/// Whether `key` is one of [`SPECIAL_KEYS`].
pub fn is_special_key(key: &str) -> bool {
    SPECIAL_KEYS.iter().any(|special| *special == key)
}

// =============================================================================
// Pointer
// =============================================================================

/// Normalize a mouse or pointer event.
///
/// `buttons_active` says whether the event's button is held; when it is
/// false the result carries no buttons at all.
///
/// # Example
/// ```rust
/// use canvas_input::{normalize_pointer_event, MouseButtons, PointerEventKind, RawMouseEvent};
///
/// let native = RawMouseEvent::new(10.0, 20.0).with_button(2);
/// let event = normalize_pointer_event(&native, true, PointerEventKind::Down);
/// assert_eq!(event.buttons, MouseButtons::RIGHT);
/// assert_eq!((event.x, event.y), (10.0, 20.0));
/// ```
pub fn normalize_pointer_event<'n, N: NativeMouseEvent>(
    native: &'n N,
    buttons_active: bool,
    kind: PointerEventKind,
) -> PointerEvent<'n> {
    PointerEvent {
        x: native.offset_x(),
        y: native.offset_y(),
        delta_x: 0.0,
        delta_y: 0.0,
        buttons: resolve_buttons(native, buttons_active),
        modifiers: resolve_modifiers(native),
        kind,
        timestamp: timestamp_millis(native.time_stamp()),
        platform: Some(native),
    }
}

/// Normalize a move made while a button is held.
pub fn normalize_drag_event<'n, N: NativeMouseEvent>(native: &'n N) -> PointerEvent<'n> {
    normalize_pointer_event(native, true, PointerEventKind::Drag)
}

/// Normalize a wheel event. Deltas are copied unchanged.
pub fn normalize_scroll_event<'n, N: NativeWheelEvent>(
    native: &'n N,
    buttons_active: bool,
) -> PointerEvent<'n> {
    PointerEvent {
        delta_x: native.delta_x(),
        delta_y: native.delta_y(),
        ..normalize_pointer_event(native, buttons_active, PointerEventKind::Scroll)
    }
}

/// Buttons held, from the DOM button id.
///
/// Only `pressed` events carry a button: 0 → LEFT, 1 → MIDDLE, 2 → RIGHT.
/// Any other id adds nothing.
pub fn resolve_buttons<N: NativeMouseEvent + ?Sized>(native: &N, pressed: bool) -> MouseButtons {
    if !pressed {
        return MouseButtons::EMPTY;
    }
    match native.button() {
        0 => MouseButtons::LEFT,
        1 => MouseButtons::MIDDLE,
        2 => MouseButtons::RIGHT,
        other => {
            tracing::trace!(button = other, "unrecognized mouse button");
            MouseButtons::EMPTY
        }
    }
}

// =============================================================================
// Keyboard
// =============================================================================

/// Normalize a key down / key up event.
pub fn normalize_key_event<'n, N: NativeKeyboardEvent>(
    native: &'n N,
    kind: KeyboardEventKind,
) -> KeyboardEvent<'n> {
    KeyboardEvent {
        key: resolve_key_code(native),
        modifiers: resolve_modifiers(native),
        kind,
        timestamp: timestamp_millis(native.time_stamp()),
        platform: Some(native),
    }
}

/// Normalize a typed character into text input.
///
/// Returns `None` for [`SPECIAL_KEYS`]. "Enter" and "Tab" become `"\n"` and
/// `"\t"`. Without a native event the key is [`KeyCode::Unknown`] and no
/// modifiers are set.
///
/// # Example
/// ```rust
/// use canvas_input::{normalize_text_event, KeyCode};
///
/// let event = normalize_text_event("Enter", None).unwrap();
/// assert_eq!(event.input, "\n");
/// assert_eq!(event.key, KeyCode::Unknown);
///
/// assert!(normalize_text_event("F5", None).is_none());
/// ```
pub fn normalize_text_event<'n>(
    character: &str,
    native: Option<&'n dyn NativeKeyboardEvent>,
) -> Option<InputEvent<'n>> {
    if is_special_key(character) {
        tracing::trace!(key = character, "special key produces no text");
        return None;
    }

    let input = match character {
        "Enter" => "\n",
        "Tab" => "\t",
        other => other,
    };

    let (key, modifiers) = match native {
        Some(native) => (resolve_key_code(native), resolve_modifiers(native)),
        None => (KeyCode::Unknown, InputModifiers::EMPTY),
    };

    Some(InputEvent {
        input: input.to_string(),
        key,
        modifiers,
        kind: KeyboardEventKind::Type,
        platform: native,
    })
}

/// Normalize the text a native key event types, using its DOM `key` value.
pub fn normalize_typed_key<'n, N: NativeKeyboardEvent>(native: &'n N) -> Option<InputEvent<'n>> {
    normalize_text_event(&native.key(), Some(native))
}

/// Key identity, with left/right Control, Shift and Meta told apart.
///
/// A right-hand location marks those three keys with [`RIGHT_SIDE_MARKER`];
/// every other key ignores location. Codes outside the table resolve to
/// [`KeyCode::Unknown`].
pub fn resolve_key_code<N: NativeKeyboardEvent + ?Sized>(native: &N) -> KeyCode {
    let mut code = native.key_code();
    if native.location() == KeyLocation::Right
        && SIDE_SPLIT_KEYS.iter().any(|key| key.platform_code() == code)
    {
        code |= RIGHT_SIDE_MARKER;
    }
    KeyCode::from_platform_code(code)
}

// =============================================================================
// Shared
// =============================================================================

/// Modifier keys held, one flag per native boolean.
pub fn resolve_modifiers<N: NativeModifierState + ?Sized>(native: &N) -> InputModifiers {
    let mut result = InputModifiers::EMPTY;
    if native.alt_key() {
        result |= InputModifiers::ALT;
    }
    if native.shift_key() {
        result |= InputModifiers::SHIFT;
    }
    if native.ctrl_key() {
        result |= InputModifiers::CONTROL;
    }
    if native.meta_key() {
        result |= InputModifiers::META;
    }
    result
}

/// Truncate a floating DOM timestamp to whole milliseconds.
fn timestamp_millis(time_stamp: f64) -> i64 {
    time_stamp as i64
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::native::{RawKeyboardEvent, RawModifiers, RawMouseEvent, RawWheelEvent};

    fn mods(alt: bool, shift: bool, ctrl: bool, meta: bool) -> RawModifiers {
        RawModifiers::from_flags(alt, shift, ctrl, meta)
    }

    #[test]
    fn test_pointer_copies_fields() {
        let native = RawMouseEvent::new(12.5, 40.25)
            .with_time_stamp(1234.9)
            .with_modifiers(mods(false, true, false, false));
        let ev = normalize_pointer_event(&native, false, PointerEventKind::Move);

        assert_eq!(ev.x, 12.5);
        assert_eq!(ev.y, 40.25);
        assert_eq!(ev.delta_x, 0.0);
        assert_eq!(ev.delta_y, 0.0);
        assert_eq!(ev.timestamp, 1234);
        assert_eq!(ev.kind, PointerEventKind::Move);
        assert_eq!(ev.modifiers, InputModifiers::SHIFT);
        assert!(ev.buttons.is_empty());
        assert!(ev.platform.is_some());
    }

    #[test]
    fn test_drag_forces_buttons() {
        let native = RawMouseEvent::new(1.0, 1.0).with_button(1);
        let ev = normalize_drag_event(&native);
        assert_eq!(ev.kind, PointerEventKind::Drag);
        assert_eq!(ev.buttons, MouseButtons::MIDDLE);
    }

    #[test]
    fn test_scroll_copies_deltas() {
        let native = RawWheelEvent::new(RawMouseEvent::new(5.0, 6.0), -3.5, 100.0);
        let ev = normalize_scroll_event(&native, false);
        assert_eq!(ev.kind, PointerEventKind::Scroll);
        assert_eq!(ev.delta_x, -3.5);
        assert_eq!(ev.delta_y, 100.0);
        assert_eq!((ev.x, ev.y), (5.0, 6.0));
        assert!(ev.buttons.is_empty());
        assert!(ev.is_scroll());
    }

    #[test]
    fn test_buttons_released_is_empty() {
        for id in [-1, 0, 1, 2, 3, 4, i16::MAX] {
            let native = RawMouseEvent::new(0.0, 0.0).with_button(id);
            assert!(resolve_buttons(&native, false).is_empty(), "button {id}");
        }
    }

    #[test]
    fn test_buttons_pressed_table() {
        let table = [
            (0, MouseButtons::LEFT),
            (1, MouseButtons::MIDDLE),
            (2, MouseButtons::RIGHT),
            (3, MouseButtons::EMPTY),
            (4, MouseButtons::EMPTY),
            (-1, MouseButtons::EMPTY),
        ];
        for (id, expected) in table {
            let native = RawMouseEvent::new(0.0, 0.0).with_button(id);
            assert_eq!(resolve_buttons(&native, true), expected, "button {id}");
        }
    }

    #[test]
    fn test_modifiers_bit_independent() {
        let flags = [
            InputModifiers::ALT,
            InputModifiers::SHIFT,
            InputModifiers::CONTROL,
            InputModifiers::META,
        ];
        for bits in 0u8..16 {
            let set = |i: u8| bits & (1 << i) != 0;
            let base = mods(set(0), set(1), set(2), set(3));
            let resolved = resolve_modifiers(&base);

            for (i, flag) in flags.iter().enumerate() {
                let mut toggled = base;
                match i {
                    0 => toggled.alt = !toggled.alt,
                    1 => toggled.shift = !toggled.shift,
                    2 => toggled.ctrl = !toggled.ctrl,
                    _ => toggled.meta = !toggled.meta,
                }
                assert_eq!(resolve_modifiers(&toggled), resolved ^ *flag);
            }
        }
    }

    #[test]
    fn test_key_event() {
        let native = RawKeyboardEvent::new("a", 65)
            .with_time_stamp(77.7)
            .with_modifiers(mods(false, false, true, false));
        let ev = normalize_key_event(&native, KeyboardEventKind::Down);
        assert_eq!(ev.key, KeyCode::A);
        assert_eq!(ev.modifiers, InputModifiers::CONTROL);
        assert_eq!(ev.kind, KeyboardEventKind::Down);
        assert_eq!(ev.timestamp, 77);
    }

    #[test]
    fn test_right_side_modifiers() {
        let cases = [
            (17, KeyCode::LeftControl, KeyCode::RightControl),
            (16, KeyCode::LeftShift, KeyCode::RightShift),
            (91, KeyCode::LeftMeta, KeyCode::RightMeta),
        ];
        for (code, left, right) in cases {
            let native = RawKeyboardEvent::new("", code);
            assert_eq!(resolve_key_code(&native.clone().with_location(KeyLocation::Left)), left);
            assert_eq!(resolve_key_code(&native.clone().with_location(KeyLocation::Standard)), left);
            assert_eq!(resolve_key_code(&native.with_location(KeyLocation::Right)), right);
        }
    }

    #[test]
    fn test_location_independent_keys() {
        let locations = [
            KeyLocation::Standard,
            KeyLocation::Left,
            KeyLocation::Right,
            KeyLocation::Numpad,
        ];
        for code in [18, 65, 13, 93, 107, 0, 92, 5000] {
            let expected = KeyCode::from_platform_code(code);
            for location in locations {
                let native = RawKeyboardEvent::new("", code).with_location(location);
                assert_eq!(resolve_key_code(&native), expected, "code {code} at {location:?}");
            }
        }
    }

    #[test]
    fn test_unknown_key_code() {
        let native = RawKeyboardEvent::new("Unidentified", 255);
        assert_eq!(resolve_key_code(&native), KeyCode::Unknown);
    }

    #[test]
    fn test_text_enter_without_native() {
        let ev = normalize_text_event("Enter", None).unwrap();
        assert_eq!(ev.input, "\n");
        assert_eq!(ev.key, KeyCode::Unknown);
        assert!(ev.modifiers.is_empty());
        assert_eq!(ev.kind, KeyboardEventKind::Type);
        assert!(ev.platform.is_none());
    }

    #[test]
    fn test_text_tab() {
        assert_eq!(normalize_text_event("Tab", None).unwrap().input, "\t");
    }

    #[test]
    fn test_text_special_keys() {
        for key in SPECIAL_KEYS {
            assert!(normalize_text_event(key, None).is_none(), "{key}");
        }
        assert!(normalize_text_event("F5", None).is_none());
    }

    #[test]
    fn test_text_not_special() {
        // Absent from the list, so they pass through as text.
        assert_eq!(normalize_text_event("Insert", None).unwrap().input, "Insert");
        assert_eq!(normalize_text_event("F23", None).unwrap().input, "F23");
    }

    #[test]
    fn test_text_with_native() {
        let native = RawKeyboardEvent::new("a", 65).with_modifiers(mods(true, false, false, false));
        let ev = normalize_text_event("a", Some(&native)).unwrap();
        assert_eq!(ev.input, "a");
        assert_eq!(ev.key, KeyCode::A);
        assert!(ev.modifiers.contains(InputModifiers::ALT));
        assert!(ev.platform.is_some());
    }

    #[test]
    fn test_typed_key() {
        let native = RawKeyboardEvent::new("Z", 90).with_modifiers(mods(false, true, false, false));
        let ev = normalize_typed_key(&native).unwrap();
        assert_eq!(ev.input, "Z");
        assert_eq!(ev.key, KeyCode::Z);
        assert_eq!(ev.modifiers, InputModifiers::SHIFT);

        let shift = RawKeyboardEvent::new("Shift", 16).with_location(KeyLocation::Right);
        assert!(normalize_typed_key(&shift).is_none());
    }

    #[test]
    fn test_timestamp_truncates() {
        assert_eq!(timestamp_millis(0.999), 0);
        assert_eq!(timestamp_millis(16.5), 16);
        assert_eq!(timestamp_millis(f64::NAN), 0);
    }
}
