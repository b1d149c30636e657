//! Classified input events.

use super::keyboard::KeyEvent;

/// A pointer press targeted at a line, with pixel coordinates relative to
/// that line's origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Line index the press landed on (clamped by the editor).
    pub line: usize,
    /// Horizontal offset into the line, in pixels.
    pub x: f32,
    /// Vertical offset into the line's visual rows, in pixels.
    pub y: f32,
    /// Whether Shift was held (extends the selection).
    pub shift: bool,
}

impl PointerEvent {
    /// Create a pointer press event.
    #[must_use]
    pub fn new(line: usize, x: f32, y: f32) -> Self {
        Self {
            line,
            x,
            y,
            shift: false,
        }
    }

    /// Mark the event as shift-held.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }
}

/// An input event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),
    /// A pointer press.
    Pointer(PointerEvent),
}

impl From<KeyEvent> for Event {
    fn from(event: KeyEvent) -> Self {
        Self::Key(event)
    }
}

impl From<PointerEvent> for Event {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}
