//! Ordered line storage.
//!
//! A [`LineStore`] is the plain data the rest of the crate operates on: a
//! non-empty vector of newline-free strings. Index bounds are a caller
//! contract; callers that hold a clamped cursor never go out of range.

/// Ordered sequence of text lines. Always holds at least one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<String>,
}

impl Default for LineStore {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl LineStore {
    /// Create a store holding a single empty line.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from raw text, splitting on `\n`.
    ///
    /// A trailing fragment without a final newline becomes the last line; a
    /// trailing newline does not produce an extra empty line. Empty input
    /// yields one empty line.
    #[must_use]
    pub fn load(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch == '\n' {
                lines.push(std::mem::take(&mut current));
            } else {
                current.push(ch);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self { lines }
    }

    /// Number of lines. Always ≥ 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// A store is never empty; this exists for API completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the text of line `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        assert!(index < self.lines.len(), "line index {index} out of range");
        &self.lines[index]
    }

    /// Character count of line `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    #[must_use]
    pub fn line_len(&self, index: usize) -> usize {
        self.line(index).chars().count()
    }

    /// Replace the text of line `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    pub fn set_line(&mut self, index: usize, text: impl Into<String>) {
        assert!(index < self.lines.len(), "line index {index} out of range");
        self.lines[index] = text.into();
    }

    /// Insert a new line before `index`; `index == len()` appends.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` (caller contract).
    pub fn insert_line(&mut self, index: usize, text: impl Into<String>) {
        assert!(
            index <= self.lines.len(),
            "line index {index} out of range"
        );
        self.lines.insert(index, text.into());
    }

    /// Remove line `index`. Removing the only line leaves one empty line so
    /// the store never becomes empty.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range (caller contract).
    pub fn remove_line(&mut self, index: usize) {
        assert!(index < self.lines.len(), "line index {index} out of range");
        self.lines.remove(index);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    /// Join all lines with `\n`, always appending one trailing newline.
    ///
    /// `serialize(load(s))` equals `s` only when `s` already ended in exactly
    /// one newline; otherwise one is added. This asymmetry is part of the
    /// contract.
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Iterate over line texts in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
