//! Input event types for editor dispatch.
//!
//! Hosts translate their native input (terminal sequences, GUI toolkit
//! events) into these types and hand them to
//! [`Editor::handle_event`](crate::Editor::handle_event).

mod event;
mod keyboard;

pub use event::{Event, PointerEvent};
pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};
