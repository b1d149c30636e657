//! `linetint` - Line-oriented text editing with incremental syntax coloring
//!
//! An in-memory multi-line text buffer with cursor and selection tracking,
//! plus a per-line colorizer that emits `[color=#RRGGBB]…[/color]` markup.
//! Hosts feed classified input events in and read colorized markup out; only
//! lines whose text changed are re-colorized.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for pixel math
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::format_push_string)] // format! with push_str is fine
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod color;
pub mod colorize;
pub mod cursor;
pub mod edit;
pub mod error;
pub mod event;
pub mod input;
pub mod metrics;
pub mod rules;
pub mod store;

// Re-export core types at crate root
pub use color::Rgba;
pub use colorize::{CLOSE_TAG, ScanState, colorize_line};
pub use cursor::{CursorModel, Direction, Position, SelectionBounds, column_at_point, step};
pub use edit::{Clipboard, Editor, MemoryClipboard};
pub use error::{Error, Result};
pub use event::{LogLevel, emit_log, set_log_callback};
pub use metrics::{GlyphMetrics, MonospaceMetrics};
pub use rules::{CharRegionRule, RegionRule, RuleSet, RuleSetBuilder};
pub use store::LineStore;

// Re-export input types
pub use input::{Event, KeyCode, KeyEvent, KeyModifiers, PointerEvent};
