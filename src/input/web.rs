//! Browser bindings for the native event traits.
//!
//! Lets a wasm host hand `web_sys` events straight to the normalizer:
//!
//! ```ignore
//! let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::WheelEvent| {
//!     let scroll = canvas_input::normalize_scroll_event(&event, false);
//!     toolkit.borrow_mut().on_pointer_event(&scroll);
//! });
//! canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())?;
//! ```

use super::native::{NativeKeyboardEvent, NativeModifierState, NativeMouseEvent, NativeWheelEvent};
use crate::types::KeyLocation;

macro_rules! mouse_like {
    ($ty:ty) => {
        impl NativeModifierState for $ty {
            fn alt_key(&self) -> bool {
                web_sys::MouseEvent::alt_key(self)
            }

            fn shift_key(&self) -> bool {
                web_sys::MouseEvent::shift_key(self)
            }

            fn ctrl_key(&self) -> bool {
                web_sys::MouseEvent::ctrl_key(self)
            }

            fn meta_key(&self) -> bool {
                web_sys::MouseEvent::meta_key(self)
            }
        }

        impl NativeMouseEvent for $ty {
            fn offset_x(&self) -> f64 {
                web_sys::MouseEvent::offset_x(self) as f64
            }

            fn offset_y(&self) -> f64 {
                web_sys::MouseEvent::offset_y(self) as f64
            }

            fn button(&self) -> i16 {
                web_sys::MouseEvent::button(self)
            }

            fn time_stamp(&self) -> f64 {
                web_sys::Event::time_stamp(self)
            }
        }
    };
}

mouse_like!(web_sys::MouseEvent);
mouse_like!(web_sys::PointerEvent);
mouse_like!(web_sys::WheelEvent);

impl NativeWheelEvent for web_sys::WheelEvent {
    fn delta_x(&self) -> f64 {
        web_sys::WheelEvent::delta_x(self)
    }

    fn delta_y(&self) -> f64 {
        web_sys::WheelEvent::delta_y(self)
    }
}

impl NativeModifierState for web_sys::KeyboardEvent {
    fn alt_key(&self) -> bool {
        web_sys::KeyboardEvent::alt_key(self)
    }

    fn shift_key(&self) -> bool {
        web_sys::KeyboardEvent::shift_key(self)
    }

    fn ctrl_key(&self) -> bool {
        web_sys::KeyboardEvent::ctrl_key(self)
    }

    fn meta_key(&self) -> bool {
        web_sys::KeyboardEvent::meta_key(self)
    }
}

impl NativeKeyboardEvent for web_sys::KeyboardEvent {
    fn key_code(&self) -> u32 {
        web_sys::KeyboardEvent::key_code(self)
    }

    fn location(&self) -> KeyLocation {
        let raw = web_sys::KeyboardEvent::location(self);
        KeyLocation::try_from(raw).unwrap_or_else(|err| {
            tracing::trace!("{err}, treating as standard");
            KeyLocation::Standard
        })
    }

    fn key(&self) -> String {
        web_sys::KeyboardEvent::key(self)
    }

    fn time_stamp(&self) -> f64 {
        web_sys::Event::time_stamp(self)
    }
}
