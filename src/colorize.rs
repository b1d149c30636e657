//! Per-line syntax colorizer.
//!
//! The colorizer walks one line at a time and emits the line's text with
//! colored spans wrapped in `[color=#RRGGBB]…[/color]` tags. Scanner state is
//! an explicit value constructed fresh for every line and dropped at the end
//! of it, so no region ever spans lines: an unterminated region simply
//! auto-closes at end of line and the output stays balanced.

use crate::color::Rgba;
use crate::rules::RuleSet;

/// Closing tag emitted for every opened color span.
pub const CLOSE_TAG: &str = "[/color]";

/// Lexical state of the line scanner.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ScanState {
    /// Accumulating a word; not inside any region.
    #[default]
    Normal,
    /// Inside a word-delimited region; closes when a word equals `end_word`.
    InWordRegion { end_word: String },
    /// Inside a character-delimited region; closes at `end_char`.
    InCharRegion { end_char: char },
}

fn open_tag(color: Rgba) -> String {
    format!("[color={color}]")
}

struct LineScanner<'a> {
    rules: &'a RuleSet,
    out: String,
    word: String,
    state: ScanState,
}

impl<'a> LineScanner<'a> {
    fn new(rules: &'a RuleSet, capacity: usize) -> Self {
        Self {
            rules,
            out: String::with_capacity(capacity),
            word: String::new(),
            state: ScanState::Normal,
        }
    }

    /// Flush the accumulated word through the keyword/region check. Inside an
    /// active region the word passes through verbatim; otherwise a region
    /// start token opens a (still unclosed) colored span, a keyword emits a
    /// closed colored span, and anything else is emitted unchanged.
    fn flush_word(&mut self) {
        if self.state != ScanState::Normal {
            self.out.push_str(&self.word);
            return;
        }
        if let Some(region) = self.rules.region(&self.word) {
            self.out.push_str(&open_tag(region.color));
            self.out.push_str(&self.word);
            self.state = ScanState::InWordRegion {
                end_word: region.end_word.clone(),
            };
        } else if let Some(color) = self.rules.keyword(&self.word) {
            self.out.push_str(&open_tag(color));
            self.out.push_str(&self.word);
            self.out.push_str(CLOSE_TAG);
        } else {
            self.out.push_str(&self.word);
        }
    }

    /// Try the char rules against `ch`. On a match the accumulated word is
    /// flushed first, then `ch` is emitted inside a color tag; a
    /// region-enabled rule leaves the tag open and enters the char region.
    /// Returns false (emitting nothing) when no rule applies.
    fn try_char_rule(&mut self, ch: char) -> bool {
        let Some(rule) = self.rules.char_region(ch) else {
            return false;
        };
        if rule.word_start_only && !self.word.is_empty() {
            return false;
        }
        let rule = *rule;

        if rule.region_enabled && self.state == ScanState::Normal {
            // The word that was accumulating passes through verbatim: the
            // region is considered active from this character on.
            self.out.push_str(&self.word);
            self.word.clear();
            self.out.push_str(&open_tag(rule.color));
            self.out.push(ch);
            self.state = ScanState::InCharRegion {
                end_char: rule.end_char,
            };
        } else {
            self.flush_word();
            self.word.clear();
            self.out.push_str(&open_tag(rule.color));
            self.out.push(ch);
            self.out.push_str(CLOSE_TAG);
        }
        true
    }

    fn scan_char(&mut self, ch: char) {
        match &self.state {
            ScanState::Normal => {
                if self.try_char_rule(ch) {
                    return;
                }
                if self.rules.is_word_break(ch) {
                    // Char rules were tested above with the word still
                    // pending; a word-start-only trigger right after a word
                    // falls through to here and emits plain.
                    self.flush_word();
                    self.word.clear();
                    self.out.push(ch);
                } else {
                    self.word.push(ch);
                }
            }
            ScanState::InWordRegion { end_word } => {
                if self.rules.is_word_break(ch) {
                    let closes = self.word == *end_word;
                    self.out.push_str(&self.word);
                    if closes {
                        self.out.push_str(CLOSE_TAG);
                        self.state = ScanState::Normal;
                    }
                    self.out.push(ch);
                    self.word.clear();
                } else {
                    self.word.push(ch);
                }
            }
            ScanState::InCharRegion { end_char } => {
                let closes = ch == *end_char;
                self.out.push(ch);
                if closes {
                    self.out.push_str(CLOSE_TAG);
                    self.state = ScanState::Normal;
                }
            }
        }
    }

    fn finish(mut self) -> String {
        // End-of-line cleanup, in this order: an open char region closes
        // first, a pending word flushes (and may itself open a word region),
        // then an open word region closes. Every opened tag ends up closed.
        if matches!(self.state, ScanState::InCharRegion { .. }) {
            self.out.push_str(CLOSE_TAG);
            self.word.clear();
            self.state = ScanState::Normal;
        }
        if !self.word.is_empty() {
            self.flush_word();
            self.word.clear();
        }
        if matches!(self.state, ScanState::InWordRegion { .. }) {
            self.out.push_str(CLOSE_TAG);
        }
        self.out
    }
}

/// Colorize one line of text into markup with balanced color tags.
#[must_use]
pub fn colorize_line(line: &str, rules: &RuleSet) -> String {
    let mut scanner = LineScanner::new(rules, line.len());
    for ch in line.chars() {
        scanner.scan_char(ch);
    }
    scanner.finish()
}
