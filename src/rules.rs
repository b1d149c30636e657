//! Colorization rule set: keyword colors, word-delimited regions,
//! single-character regions, and word-break characters.
//!
//! A [`RuleSet`] is built once through [`RuleSetBuilder`], then shared
//! read-only across every colorization call. Nothing mutates it afterwards.

use std::collections::{HashMap, HashSet};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A word-delimited region: opened when a flushed word equals the start token,
/// closed when a later word equals `end_word` (or the line ends).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionRule {
    /// Word that closes the region. `"\n"` means "to end of line": words are
    /// split before newlines are compared, so the region can only auto-close.
    pub end_word: String,
    pub color: Rgba,
}

/// A single-character rule. If `region_enabled`, the trigger opens a region
/// that closes on the next `end_char`; otherwise only the trigger itself is
/// colored. `word_start_only` restricts the trigger to positions where no
/// word is accumulating (used for digits so `x1` stays plain).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharRegionRule {
    pub end_char: char,
    pub region_enabled: bool,
    pub word_start_only: bool,
    pub color: Rgba,
}

/// Immutable colorization configuration.
#[derive(Clone, Debug, Default)]
pub struct RuleSet {
    keywords: HashMap<String, Rgba>,
    regions: HashMap<String, RegionRule>,
    char_regions: HashMap<char, CharRegionRule>,
    word_breaks: HashSet<char>,
}

impl RuleSet {
    /// Start building a rule set.
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Color for an exact keyword, if registered.
    #[must_use]
    pub fn keyword(&self, word: &str) -> Option<Rgba> {
        self.keywords.get(word).copied()
    }

    /// Region rule whose start token is `word`, if registered.
    #[must_use]
    pub fn region(&self, word: &str) -> Option<&RegionRule> {
        self.regions.get(word)
    }

    /// Char rule triggered by `ch`, if registered.
    #[must_use]
    pub fn char_region(&self, ch: char) -> Option<&CharRegionRule> {
        self.char_regions.get(&ch)
    }

    /// Whether `ch` terminates word accumulation.
    #[must_use]
    pub fn is_word_break(&self, ch: char) -> bool {
        self.word_breaks.contains(&ch)
    }

    /// The stock rule set: a script-style coloring based on the New Moon
    /// palette, with keywords, literals, digits, operators, comments, and
    /// string regions.
    ///
    /// # Panics
    ///
    /// Never panics; all embedded hex colors are valid.
    #[must_use]
    pub fn stock() -> Self {
        let keyword = Rgba::from_hex("ffeea6").expect("stock color");
        let support = Rgba::from_hex("e1a6f2").expect("stock color");
        let operator = Rgba::from_hex("ac8d58").expect("stock color");
        let comment = Rgba::from_hex("777c85").expect("stock color");
        let string = Rgba::from_hex("92d192").expect("stock color");

        let mut builder = Self::builder();
        for word in [
            "var",
            "func",
            "if",
            "elif",
            "else",
            "const",
            "class_name",
            "extends",
            "onready",
            "for",
        ] {
            builder = builder.keyword(word, keyword);
        }
        for word in ["null", "true", "false"] {
            builder = builder.keyword(word, support);
        }
        // Digits color as standalone literals but not inside identifiers.
        for digit in "0123456789".chars() {
            builder = builder.char_rule_at_word_start(digit, support);
        }
        for op in "+-*=<>.!|;:()[]{}".chars() {
            builder = builder.char_rule(op, operator);
        }
        builder = builder
            .region("//", comment)
            .region("#", comment)
            .region_until("/*", "*/", comment)
            .char_region('"', '"', string)
            .char_region('$', ' ', string);
        for brk in " .\t+-=<>!|;:()[]{}\n".chars() {
            builder = builder.word_break(brk);
        }
        builder.build()
    }
}

/// Builder for [`RuleSet`]. Registering the same keyword, region start, or
/// trigger character again overrides the earlier rule.
#[derive(Clone, Debug, Default)]
pub struct RuleSetBuilder {
    rules: RuleSet,
}

impl RuleSetBuilder {
    /// Map an exact word to a color.
    #[must_use]
    pub fn keyword(mut self, word: impl Into<String>, color: Rgba) -> Self {
        self.rules.keywords.insert(word.into(), color);
        self
    }

    /// Map an exact word to a hex color, validating the hex string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for a malformed hex string and
    /// [`Error::EmptyToken`] for an empty word.
    pub fn keyword_hex(self, word: impl Into<String>, hex: &str) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(Error::EmptyToken);
        }
        let color = Rgba::from_hex(hex).ok_or_else(|| Error::InvalidColor(hex.to_string()))?;
        Ok(self.keyword(word, color))
    }

    /// Register a to-end-of-line region opened by `start`.
    #[must_use]
    pub fn region(self, start: impl Into<String>, color: Rgba) -> Self {
        self.region_until(start, "\n", color)
    }

    /// Register a region opened by `start` and closed by the word `end`.
    #[must_use]
    pub fn region_until(
        mut self,
        start: impl Into<String>,
        end: impl Into<String>,
        color: Rgba,
    ) -> Self {
        self.rules.regions.insert(
            start.into(),
            RegionRule {
                end_word: end.into(),
                color,
            },
        );
        self
    }

    /// Register a single highlighted character (no region).
    #[must_use]
    pub fn char_rule(self, trigger: char, color: Rgba) -> Self {
        self.char_rule_full(trigger, '\n', false, false, color)
    }

    /// Register a single highlighted character that only triggers at the
    /// start of a word.
    #[must_use]
    pub fn char_rule_at_word_start(self, trigger: char, color: Rgba) -> Self {
        self.char_rule_full(trigger, '\n', false, true, color)
    }

    /// Register a character-delimited region from `trigger` to `end`.
    #[must_use]
    pub fn char_region(self, trigger: char, end: char, color: Rgba) -> Self {
        self.char_rule_full(trigger, end, true, false, color)
    }

    /// Register a char rule with every knob exposed.
    #[must_use]
    pub fn char_rule_full(
        mut self,
        trigger: char,
        end_char: char,
        region_enabled: bool,
        word_start_only: bool,
        color: Rgba,
    ) -> Self {
        self.rules.char_regions.insert(
            trigger,
            CharRegionRule {
                end_char,
                region_enabled,
                word_start_only,
                color,
            },
        );
        self
    }

    /// Add a word-break character.
    #[must_use]
    pub fn word_break(mut self, ch: char) -> Self {
        self.rules.word_breaks.insert(ch);
        self
    }

    /// Add several word-break characters.
    #[must_use]
    pub fn word_breaks(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.rules.word_breaks.extend(chars);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> RuleSet {
        self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let rules = RuleSet::builder()
            .keyword("if", Rgba::RED)
            .char_rule('=', Rgba::GREEN)
            .word_breaks([' ', '='])
            .build();

        assert_eq!(rules.keyword("if"), Some(Rgba::RED));
        assert_eq!(rules.keyword("else"), None);
        assert!(rules.char_region('=').is_some());
        assert!(rules.is_word_break(' '));
        assert!(!rules.is_word_break('x'));
    }

    #[test]
    fn test_later_registration_overrides() {
        let rules = RuleSet::builder()
            .keyword("if", Rgba::RED)
            .keyword("if", Rgba::BLUE)
            .build();
        assert_eq!(rules.keyword("if"), Some(Rgba::BLUE));
    }

    #[test]
    fn test_region_defaults_to_eol() {
        let rules = RuleSet::builder().region("//", Rgba::BLACK).build();
        assert_eq!(rules.region("//").unwrap().end_word, "\n");
    }

    #[test]
    fn test_keyword_hex_validation() {
        let builder = RuleSet::builder();
        assert!(matches!(
            builder.clone().keyword_hex("if", "nope"),
            Err(Error::InvalidColor(_))
        ));
        assert!(matches!(
            builder.clone().keyword_hex("", "#FF0000"),
            Err(Error::EmptyToken)
        ));
        let rules = builder.keyword_hex("if", "#FF0000").unwrap().build();
        assert_eq!(rules.keyword("if"), Some(Rgba::RED));
    }

    #[test]
    fn test_stock_rules() {
        let rules = RuleSet::stock();
        assert!(rules.keyword("func").is_some());
        assert!(rules.keyword("true").is_some());
        assert!(rules.region("//").is_some());
        assert_eq!(rules.region("/*").unwrap().end_word, "*/");

        let string = rules.char_region('"').unwrap();
        assert!(string.region_enabled);
        assert_eq!(string.end_char, '"');

        let digit = rules.char_region('7').unwrap();
        assert!(digit.word_start_only);
        assert!(!digit.region_enabled);

        assert!(rules.is_word_break(' '));
        assert!(rules.is_word_break('\t'));
    }
}
