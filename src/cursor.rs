//! Cursor, selection anchor, and normalized selection bounds.
//!
//! The model tracks two positions: the primary cursor and a "virtual" cursor
//! that marks the far end of a selection. Plain movement moves the primary
//! cursor and snaps the virtual cursor onto it; extending movement moves only
//! the virtual cursor while the primary cursor stays fixed. After every move
//! the two are re-normalized into [`SelectionBounds`].

use crate::metrics::GlyphMetrics;
use crate::store::LineStore;

/// Movement direction for cursor navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// A `(line, column)` position. Column is a character offset in
/// `[0, line_len]`; column == line_len means "after the last character".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Clamp into the valid domain of `store`.
    #[must_use]
    pub fn clamped(self, store: &LineStore) -> Self {
        let line = self.line.min(store.len() - 1);
        let col = self.col.min(store.line_len(line));
        Self { line, col }
    }
}

/// Normalized selection: `start <= end` lexicographically by `(line, col)`.
/// An empty selection has `start == end`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionBounds {
    pub start: Position,
    pub end: Position,
}

impl SelectionBounds {
    /// Whether the selection covers no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Primary cursor plus selection anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorModel {
    cursor: Position,
    virtual_cursor: Position,
    selection: SelectionBounds,
}

impl CursorModel {
    /// Create a model with both positions at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The primary cursor.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The selection's far end.
    #[must_use]
    pub fn virtual_cursor(&self) -> Position {
        self.virtual_cursor
    }

    /// The normalized selection bounds.
    #[must_use]
    pub fn selection(&self) -> SelectionBounds {
        self.selection
    }

    /// Whether a non-empty selection is active.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.cursor != self.virtual_cursor
    }

    /// Move to an absolute position, clamped into `store`.
    ///
    /// Without `extend`, both positions move (collapsing any selection); with
    /// `extend`, only the virtual cursor moves and the primary cursor anchors
    /// the selection.
    pub fn move_to(&mut self, target: Position, extend: bool, store: &LineStore) {
        let target = target.clamped(store);
        if extend {
            self.virtual_cursor = target;
        } else {
            self.cursor = target;
            self.virtual_cursor = target;
        }
        self.update_selection();
    }

    /// Move one step in `direction` with line-length-aware clamping and
    /// wraparound. One routine serves both positions; extending moves the
    /// virtual cursor, plain movement moves the primary cursor and collapses.
    pub fn move_by(&mut self, direction: Direction, extend: bool, store: &LineStore) {
        if extend {
            self.virtual_cursor = step(self.virtual_cursor, direction, store);
        } else {
            self.cursor = step(self.cursor, direction, store);
            self.virtual_cursor = self.cursor;
        }
        self.update_selection();
    }

    /// Snap the virtual cursor onto the primary cursor, dropping any
    /// selection.
    pub fn collapse(&mut self) {
        self.virtual_cursor = self.cursor;
        self.update_selection();
    }

    /// Place the primary cursor (collapsing the selection) without movement
    /// semantics; used by edit operations after they mutate the store.
    pub fn set_cursor(&mut self, position: Position, store: &LineStore) {
        self.cursor = position.clamped(store);
        self.virtual_cursor = self.cursor;
        self.update_selection();
    }

    /// Re-clamp both positions after the store changed underneath them.
    pub fn clamp_to(&mut self, store: &LineStore) {
        self.cursor = self.cursor.clamped(store);
        self.virtual_cursor = self.virtual_cursor.clamped(store);
        self.update_selection();
    }

    fn update_selection(&mut self) {
        use std::cmp::Ordering;
        self.selection = match self.cursor.line.cmp(&self.virtual_cursor.line) {
            Ordering::Less => SelectionBounds {
                start: self.cursor,
                end: self.virtual_cursor,
            },
            Ordering::Greater => SelectionBounds {
                start: self.virtual_cursor,
                end: self.cursor,
            },
            Ordering::Equal => {
                let line = self.cursor.line;
                SelectionBounds {
                    start: Position::new(line, self.cursor.col.min(self.virtual_cursor.col)),
                    end: Position::new(line, self.cursor.col.max(self.virtual_cursor.col)),
                }
            }
        };
    }
}

/// Step a position one unit in `direction`, clamping and wrapping against the
/// store: column underflow wraps to the end of the previous line, overflow
/// wraps to the start of the next line (or steps back to the line end on the
/// last line). Vertical movement clamps the column to the new line's length.
#[must_use]
pub fn step(position: Position, direction: Direction, store: &LineStore) -> Position {
    let last_line = store.len() - 1;
    let mut line = position.line.min(last_line);
    let mut col = position.col as isize;
    let mut line_changed = false;

    match direction {
        Direction::Right => col += 1,
        Direction::Left => col -= 1,
        Direction::Up => {
            line = line.saturating_sub(1);
            line_changed = true;
        }
        Direction::Down => {
            line = (line + 1).min(last_line);
            line_changed = true;
        }
    }

    if line_changed {
        col = col.clamp(0, store.line_len(line) as isize);
    }

    if col < 0 {
        if line > 0 {
            // Wrap to the end of the previous line.
            line -= 1;
            col = isize::MAX;
        } else {
            col = 0;
        }
    } else if col > store.line_len(line) as isize {
        if line < last_line {
            line += 1;
            col = 0;
        } else {
            col -= 1;
        }
    }

    // A horizontal step from an out-of-range column can still be past the
    // line end here, so the final clamp runs on every path.
    col = col.clamp(0, store.line_len(line) as isize);
    Position::new(line, col as usize)
}

/// Resolve a pointer position within a line to a column.
///
/// `x`/`y` are pixels relative to the line's origin; `wrap_width` is the
/// width at which the line visually wraps to the next row. The scan
/// accumulates per-character widths left to right (and heights across visual
/// rows) until the cumulative extent covers the pointer; if nothing does, the
/// column is the line's length. A small positive x bias makes boundary hits
/// resolve to the character under the pointer rather than the one before it.
#[must_use]
pub fn column_at_point(
    text: &str,
    x: f32,
    y: f32,
    wrap_width: f32,
    metrics: &dyn GlyphMetrics,
) -> usize {
    let (total_width, total_height) = metrics.measure_string(text);
    let x = x + 0.5;
    if x > total_width || y > total_height {
        return text.chars().count();
    }

    let mut acc_x = 0.0f32;
    let mut acc_y = 0.0f32;
    for (i, ch) in text.chars().enumerate() {
        let char_width = metrics.measure_char(ch);
        let char_height = metrics.line_height();
        acc_x += char_width;
        if acc_x >= wrap_width {
            acc_x = 0.0;
            acc_y += char_height;
        }
        if x <= acc_x && y <= acc_y + char_height {
            return i;
        }
    }
    text.chars().count()
}
