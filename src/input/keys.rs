//! Key code vocabulary.
//!
//! Discriminants are the DOM `keyCode` values. The host reports Control, Shift
//! and Meta with the same code on both sides of the keyboard, so the right-hand
//! variants carry that code with [`RIGHT_SIDE_MARKER`] set. No other key is
//! split by side.

use crate::error::{InputError, Result};

/// High bit marking the right-hand variant of a side-split key.
pub const RIGHT_SIDE_MARKER: u32 = 0x8000_0000;

/// Keys whose right-hand variant is reachable through [`RIGHT_SIDE_MARKER`].
pub const SIDE_SPLIT_KEYS: [KeyCode; 3] = [KeyCode::LeftControl, KeyCode::LeftShift, KeyCode::LeftMeta];

macro_rules! key_codes {
    ($( $(#[$meta:meta])* $name:ident = $code:expr, )*) => {
        /// Key identity, independent of keyboard layout.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u32)]
        pub enum KeyCode {
            $( $(#[$meta])* $name = $code, )*
        }

        impl KeyCode {
            /// Every key in the vocabulary, in table order.
            pub const ALL: &'static [KeyCode] = &[ $( KeyCode::$name, )* ];
        }

        impl TryFrom<u32> for KeyCode {
            type Error = InputError;

            fn try_from(code: u32) -> Result<Self> {
                $(
                    if code == KeyCode::$name as u32 {
                        return Ok(KeyCode::$name);
                    }
                )*
                Err(InputError::UnknownKeyCode(code))
            }
        }
    };
}

key_codes! {
    /// Sentinel for codes outside the table.
    #[default]
    Unknown = 0,

    // Editing / whitespace
    Backspace = 8,
    Tab = 9,
    Enter = 13,
    Escape = 27,
    Space = 32,
    Insert = 45,
    Delete = 46,

    // Modifiers
    LeftShift = 16,
    RightShift = 16 | RIGHT_SIDE_MARKER,
    LeftControl = 17,
    RightControl = 17 | RIGHT_SIDE_MARKER,
    Alt = 18,
    LeftMeta = 91,
    RightMeta = 91 | RIGHT_SIDE_MARKER,
    ContextMenu = 93,

    // Locks and system
    Pause = 19,
    CapsLock = 20,
    PrintScreen = 44,
    NumLock = 144,
    ScrollLock = 145,

    // Navigation
    PageUp = 33,
    PageDown = 34,
    End = 35,
    Home = 36,
    Left = 37,
    Up = 38,
    Right = 39,
    Down = 40,

    // Digits
    Key0 = 48,
    Key1 = 49,
    Key2 = 50,
    Key3 = 51,
    Key4 = 52,
    Key5 = 53,
    Key6 = 54,
    Key7 = 55,
    Key8 = 56,
    Key9 = 57,

    // Letters
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,

    // Numpad
    Numpad0 = 96,
    Numpad1 = 97,
    Numpad2 = 98,
    Numpad3 = 99,
    Numpad4 = 100,
    Numpad5 = 101,
    Numpad6 = 102,
    Numpad7 = 103,
    Numpad8 = 104,
    Numpad9 = 105,
    NumpadMultiply = 106,
    NumpadAdd = 107,
    NumpadSubtract = 109,
    NumpadDecimal = 110,
    NumpadDivide = 111,

    // Function keys
    F1 = 112,
    F2 = 113,
    F3 = 114,
    F4 = 115,
    F5 = 116,
    F6 = 117,
    F7 = 118,
    F8 = 119,
    F9 = 120,
    F10 = 121,
    F11 = 122,
    F12 = 123,

    // Punctuation (US layout positions)
    Semicolon = 186,
    Equals = 187,
    Comma = 188,
    Minus = 189,
    Period = 190,
    Slash = 191,
    Backquote = 192,
    OpenBracket = 219,
    BackSlash = 220,
    CloseBracket = 221,
    Quote = 222,
}

impl KeyCode {
    /// The integer code this key is exchanged as, marker bit included.
    #[inline]
    pub const fn platform_code(self) -> u32 {
        self as u32
    }

    /// Map a platform code, falling back to [`KeyCode::Unknown`].
    pub fn from_platform_code(code: u32) -> Self {
        Self::try_from(code).unwrap_or_else(|err| {
            tracing::trace!("{err}, resolving to Unknown");
            Self::Unknown
        })
    }

    /// Whether this is the right-hand variant of Control, Shift or Meta.
    #[inline]
    pub const fn is_right_side(self) -> bool {
        self.platform_code() & RIGHT_SIDE_MARKER != 0
    }

    /// Whether the host reports this key with a side that changes its identity.
    pub fn is_side_split(self) -> bool {
        SIDE_SPLIT_KEYS.contains(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_codes_are_unique() {
        for (i, a) in KeyCode::ALL.iter().enumerate() {
            for b in &KeyCode::ALL[i + 1..] {
                assert_ne!(a.platform_code(), b.platform_code(), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_try_from_every_entry() {
        for key in KeyCode::ALL {
            assert_eq!(KeyCode::try_from(key.platform_code()), Ok(*key));
        }
    }

    #[test]
    fn test_unmapped_code() {
        assert_eq!(KeyCode::try_from(92), Err(InputError::UnknownKeyCode(92)));
        assert_eq!(KeyCode::from_platform_code(92), KeyCode::Unknown);
        assert_eq!(KeyCode::from_platform_code(65 | RIGHT_SIDE_MARKER), KeyCode::Unknown);
    }

    #[test]
    fn test_right_side_variants() {
        assert_eq!(KeyCode::RightControl.platform_code(), 0x8000_0011);
        assert_eq!(KeyCode::RightShift.platform_code(), 0x8000_0010);
        assert_eq!(KeyCode::RightMeta.platform_code(), 0x8000_005B);

        let right: Vec<_> = KeyCode::ALL.iter().filter(|k| k.is_right_side()).collect();
        assert_eq!(right, [&KeyCode::RightShift, &KeyCode::RightControl, &KeyCode::RightMeta]);
    }

    #[test]
    fn test_side_split() {
        assert!(KeyCode::LeftMeta.is_side_split());
        assert!(!KeyCode::RightMeta.is_side_split());
        assert!(!KeyCode::Alt.is_side_split());
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(KeyCode::default(), KeyCode::Unknown);
    }
}
