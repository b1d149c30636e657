//! Editing operations over a line store with cursor/selection tracking.
//!
//! [`Editor`] is the primary type of this crate. It owns the [`LineStore`]
//! and [`CursorModel`], shares a read-only [`RuleSet`], and keeps a per-line
//! markup cache in lockstep with the store: every operation re-colorizes
//! exactly the lines whose text changed, never the whole buffer.
//!
//! # Examples
//!
//! ```
//! use linetint::{Editor, RuleSet};
//! use std::sync::Arc;
//!
//! let mut editor = Editor::with_text("hello\nworld", Arc::new(RuleSet::stock()));
//! editor.insert_char('!');
//! assert_eq!(editor.line(0), "!hello");
//! assert_eq!(editor.text(), "!hello\nworld\n");
//! ```

use std::sync::Arc;

use crate::colorize::colorize_line;
use crate::cursor::{CursorModel, Direction, Position, SelectionBounds, column_at_point};
use crate::event::{LogLevel, emit_log};
use crate::input::{Event, KeyCode, KeyEvent, KeyModifiers, PointerEvent};
use crate::metrics::GlyphMetrics;
use crate::rules::RuleSet;
use crate::store::LineStore;

/// Clipboard collaborator consumed by copy/cut/paste.
pub trait Clipboard {
    /// Read the clipboard contents.
    fn get(&mut self) -> String;
    /// Replace the clipboard contents.
    fn set(&mut self, text: &str);
}

/// In-process clipboard, for tests and hosts without an OS clipboard.
#[derive(Clone, Debug, Default)]
pub struct MemoryClipboard {
    contents: String,
}

impl MemoryClipboard {
    /// Create an empty clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents without consuming them.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> String {
        self.contents.clone()
    }

    fn set(&mut self, text: &str) {
        self.contents = text.to_string();
    }
}

/// Text editor core: line store, cursor/selection, and colorized markup.
pub struct Editor {
    store: LineStore,
    cursor: CursorModel,
    rules: Arc<RuleSet>,
    markup: Vec<String>,
}

impl Editor {
    /// Create an editor holding a single empty line.
    #[must_use]
    pub fn new(rules: Arc<RuleSet>) -> Self {
        Self::with_text("", rules)
    }

    /// Create an editor from raw text.
    #[must_use]
    pub fn with_text(text: &str, rules: Arc<RuleSet>) -> Self {
        let store = LineStore::load(text);
        let markup = store.iter().map(|line| colorize_line(line, &rules)).collect();
        Self {
            store,
            cursor: CursorModel::new(),
            rules,
            markup,
        }
    }

    /// Replace the whole buffer from raw text. The cursor is clamped into
    /// the new bounds rather than reset, and any selection collapses.
    pub fn load(&mut self, text: &str) {
        self.store = LineStore::load(text);
        self.markup = self
            .store
            .iter()
            .map(|line| colorize_line(line, &self.rules))
            .collect();
        self.cursor.clamp_to(&self.store);
        self.cursor.collapse();
        emit_log(
            LogLevel::Debug,
            &format!("loaded buffer: {} lines", self.store.len()),
        );
    }

    /// Serialize the buffer: lines joined by `\n` with one trailing `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.store.serialize()
    }

    /// Number of lines. Always ≥ 1.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.store.len()
    }

    /// Text of line `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        self.store.line(index)
    }

    /// Colorized markup of line `index`, with balanced color tags.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    #[must_use]
    pub fn markup(&self, index: usize) -> &str {
        &self.markup[index]
    }

    /// The underlying line store.
    #[must_use]
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    /// The cursor/selection model.
    #[must_use]
    pub fn cursor_model(&self) -> &CursorModel {
        &self.cursor
    }

    /// The primary cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor.cursor()
    }

    /// The normalized selection bounds.
    #[must_use]
    pub fn selection(&self) -> SelectionBounds {
        self.cursor.selection()
    }

    /// Whether a non-empty selection is active.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.cursor.has_selection()
    }

    /// The shared rule set.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    // ── Cursor movement ──────────────────────────────────────────────

    /// Move the cursor to an absolute position (clamped). With `extend`,
    /// grows the selection instead of collapsing it.
    pub fn move_to(&mut self, position: Position, extend: bool) {
        self.cursor.move_to(position, extend, &self.store);
    }

    /// Move the cursor one step in `direction`, wrapping across line ends.
    pub fn move_cursor(&mut self, direction: Direction, extend: bool) {
        self.cursor.move_by(direction, extend, &self.store);
    }

    /// Resolve a pointer press on `line` at pixel `(x, y)` to a cursor
    /// position using the host's glyph metrics.
    pub fn pointer_press(
        &mut self,
        line: usize,
        x: f32,
        y: f32,
        extend: bool,
        metrics: &dyn GlyphMetrics,
        wrap_width: f32,
    ) {
        let line = line.min(self.store.len() - 1);
        let col = column_at_point(self.store.line(line), x, y, wrap_width, metrics);
        self.cursor.move_to(Position::new(line, col), extend, &self.store);
    }

    // ── Edit operations ──────────────────────────────────────────────

    /// Insert a character at the cursor and advance one column.
    ///
    /// Newlines do not belong here; line splits go through
    /// [`split_line`](Self::split_line).
    pub fn insert_char(&mut self, ch: char) {
        let pos = self.cursor.cursor();
        let mut line = self.store.line(pos.line).to_string();
        let at = byte_index(&line, pos.col);
        line.insert(at, ch);
        self.set_line(pos.line, line);
        self.cursor
            .set_cursor(Position::new(pos.line, pos.col + 1), &self.store);
    }

    /// Insert a tab character at the cursor.
    pub fn insert_tab(&mut self) {
        self.insert_char('\t');
    }

    /// Delete backward: removes the character before the cursor, or joins
    /// the current line onto the previous one when the cursor is at column 0.
    /// A no-op at the very start of the buffer.
    pub fn backspace(&mut self) {
        let pos = self.cursor.cursor();
        if pos.col > 0 {
            let mut line = self.store.line(pos.line).to_string();
            let start = byte_index(&line, pos.col - 1);
            let end = byte_index(&line, pos.col);
            line.replace_range(start..end, "");
            self.set_line(pos.line, line);
            self.cursor
                .set_cursor(Position::new(pos.line, pos.col - 1), &self.store);
        } else if pos.line > 0 {
            let prev_len = self.store.line_len(pos.line - 1);
            let joined = format!(
                "{}{}",
                self.store.line(pos.line - 1),
                self.store.line(pos.line)
            );
            self.set_line(pos.line - 1, joined);
            self.remove_line(pos.line);
            self.cursor
                .set_cursor(Position::new(pos.line - 1, prev_len), &self.store);
        } else {
            self.cursor.collapse();
        }
    }

    /// Remove the selected range and collapse the cursor to the selection
    /// start. No-op without an active selection.
    pub fn delete_selection(&mut self) {
        if !self.cursor.has_selection() {
            return;
        }
        let sel = self.cursor.selection();
        if sel.start.line == sel.end.line {
            let mut line = self.store.line(sel.start.line).to_string();
            let start = byte_index(&line, sel.start.col);
            let end = byte_index(&line, sel.end.col);
            line.replace_range(start..end, "");
            self.set_line(sel.start.line, line);
        } else {
            // Start line keeps its prefix, end line keeps its suffix, and
            // the two merge into one line; everything in between goes.
            let prefix: String = self
                .store
                .line(sel.start.line)
                .chars()
                .take(sel.start.col)
                .collect();
            let suffix: String = self
                .store
                .line(sel.end.line)
                .chars()
                .skip(sel.end.col)
                .collect();
            self.set_line(sel.start.line, format!("{prefix}{suffix}"));
            for _ in sel.start.line..sel.end.line {
                self.remove_line(sel.start.line + 1);
            }
        }
        self.cursor.set_cursor(sel.start, &self.store);
    }

    /// Split the current line at the cursor: the prefix becomes a new line
    /// inserted before it, the current line keeps the suffix, and the cursor
    /// lands at the start of the suffix line.
    pub fn split_line(&mut self) {
        let pos = self.cursor.cursor();
        let text = self.store.line(pos.line);
        let at = byte_index(text, pos.col);
        let (prefix, suffix) = text.split_at(at);
        let (prefix, suffix) = (prefix.to_string(), suffix.to_string());
        self.set_line(pos.line, suffix);
        self.insert_line(pos.line, prefix);
        self.cursor
            .set_cursor(Position::new(pos.line + 1, 0), &self.store);
    }

    /// Paste text at the cursor. Single-line text inserts in place; text with
    /// newlines has carriage returns replaced by spaces, the first segment
    /// inserted into the current line, and each further segment inserted as a
    /// new line below. The cursor ends after the last inserted segment.
    pub fn paste_text(&mut self, text: &str) {
        let pos = self.cursor.cursor();
        if text.contains('\n') {
            let text = text.replace('\r', " ");
            let segments: Vec<&str> = text.split('\n').collect();

            let mut line = self.store.line(pos.line).to_string();
            let at = byte_index(&line, pos.col);
            line.insert_str(at, segments[0]);
            self.set_line(pos.line, line);

            for (offset, segment) in segments[1..].iter().enumerate() {
                self.insert_line(pos.line + 1 + offset, (*segment).to_string());
            }

            let last = segments[segments.len() - 1];
            self.cursor.set_cursor(
                Position::new(pos.line + segments.len() - 1, last.chars().count()),
                &self.store,
            );
        } else {
            let mut line = self.store.line(pos.line).to_string();
            let at = byte_index(&line, pos.col);
            line.insert_str(at, text);
            self.set_line(pos.line, line);
            self.cursor.set_cursor(
                Position::new(pos.line, pos.col + text.chars().count()),
                &self.store,
            );
        }
        emit_log(LogLevel::Debug, "pasted text at cursor");
    }

    /// The selected text as a single string: a substring for a single-line
    /// selection; for multi-line, the start line's suffix, the middle lines,
    /// and the end line's prefix joined by `\n`. Empty without a selection.
    #[must_use]
    pub fn selected_text(&self) -> String {
        let sel = self.cursor.selection();
        if sel.start.line == sel.end.line {
            self.store
                .line(sel.start.line)
                .chars()
                .skip(sel.start.col)
                .take(sel.end.col.saturating_sub(sel.start.col))
                .collect()
        } else {
            let mut parts: Vec<String> = Vec::new();
            parts.push(
                self.store
                    .line(sel.start.line)
                    .chars()
                    .skip(sel.start.col)
                    .collect(),
            );
            for line in sel.start.line + 1..sel.end.line {
                parts.push(self.store.line(line).to_string());
            }
            parts.push(
                self.store
                    .line(sel.end.line)
                    .chars()
                    .take(sel.end.col)
                    .collect(),
            );
            parts.join("\n")
        }
    }

    /// Write the selected text to the clipboard.
    pub fn copy_selection(&self, clipboard: &mut dyn Clipboard) {
        clipboard.set(&self.selected_text());
        emit_log(LogLevel::Debug, "copied selection to clipboard");
    }

    /// Write the selected text to the clipboard, then delete it.
    pub fn cut_selection(&mut self, clipboard: &mut dyn Clipboard) {
        self.copy_selection(clipboard);
        self.delete_selection();
    }

    // ── Event dispatch ───────────────────────────────────────────────

    /// Dispatch one classified input event to the matching operation.
    pub fn handle_event(
        &mut self,
        event: &Event,
        clipboard: &mut dyn Clipboard,
        metrics: &dyn GlyphMetrics,
        wrap_width: f32,
    ) {
        match event {
            Event::Key(key) => self.handle_key(key, clipboard),
            Event::Pointer(pointer) => self.handle_pointer(pointer, metrics, wrap_width),
        }
    }

    /// Dispatch a key event.
    pub fn handle_key(&mut self, key: &KeyEvent, clipboard: &mut dyn Clipboard) {
        match key.code {
            KeyCode::Backspace | KeyCode::Delete => {
                if self.has_selection() {
                    self.delete_selection();
                } else {
                    self.backspace();
                }
            }
            KeyCode::Tab => self.insert_tab(),
            KeyCode::Enter => {
                if self.has_selection() {
                    self.delete_selection();
                }
                self.split_line();
            }
            KeyCode::Left => self.move_cursor(Direction::Left, key.shift()),
            KeyCode::Right => self.move_cursor(Direction::Right, key.shift()),
            KeyCode::Up => self.move_cursor(Direction::Up, key.shift()),
            KeyCode::Down => self.move_cursor(Direction::Down, key.shift()),
            KeyCode::Char(ch) => {
                if key.ctrl() || key.modifiers.contains(KeyModifiers::SUPER) {
                    self.handle_shortcut(ch, clipboard);
                } else if !ch.is_control() {
                    if self.has_selection() {
                        self.delete_selection();
                    }
                    self.insert_char(ch);
                }
            }
            KeyCode::Esc => {}
        }
    }

    fn handle_shortcut(&mut self, ch: char, clipboard: &mut dyn Clipboard) {
        match ch {
            'v' => {
                if self.has_selection() {
                    self.delete_selection();
                }
                let text = clipboard.get();
                self.paste_text(&text);
            }
            'c' => self.copy_selection(clipboard),
            'x' => self.cut_selection(clipboard),
            _ => {}
        }
    }

    /// Dispatch a pointer press.
    pub fn handle_pointer(
        &mut self,
        pointer: &PointerEvent,
        metrics: &dyn GlyphMetrics,
        wrap_width: f32,
    ) {
        self.pointer_press(
            pointer.line,
            pointer.x,
            pointer.y,
            pointer.shift,
            metrics,
            wrap_width,
        );
    }

    // ── Store mutation, keeping the markup cache in lockstep ─────────

    fn set_line(&mut self, index: usize, text: String) {
        self.store.set_line(index, text);
        self.markup[index] = colorize_line(self.store.line(index), &self.rules);
    }

    fn insert_line(&mut self, index: usize, text: String) {
        self.store.insert_line(index, text);
        self.markup
            .insert(index, colorize_line(self.store.line(index), &self.rules));
    }

    fn remove_line(&mut self, index: usize) {
        self.store.remove_line(index);
        self.markup.remove(index);
        // The store backfills one empty line rather than going empty.
        if self.markup.is_empty() {
            self.markup.push(colorize_line("", &self.rules));
        }
    }
}

/// Byte index of the `char_idx`-th character, or the string's length when
/// the index is at (or past) the end.
fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
