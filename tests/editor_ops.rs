//! End-to-end editor behavior: edit operations, event dispatch, and the
//! serialize round trip.

use std::sync::Arc;

use linetint::{
    Clipboard, Editor, Event, KeyCode, KeyEvent, KeyModifiers, MemoryClipboard,
    MonospaceMetrics, PointerEvent, Position, RuleSet, colorize_line,
};

const WRAP: f32 = 1000.0;

fn editor(text: &str) -> Editor {
    Editor::with_text(text, Arc::new(RuleSet::stock()))
}

fn type_str(ed: &mut Editor, clipboard: &mut MemoryClipboard, text: &str) {
    for ch in text.chars() {
        ed.handle_key(&KeyEvent::char(ch), clipboard);
    }
}

#[test]
fn paste_splits_into_new_lines() {
    let mut ed = editor("abc");
    ed.move_to(Position::new(0, 1), false);
    ed.paste_text("X\nY");

    assert_eq!(ed.line(0), "aXbc");
    assert_eq!(ed.line(1), "Y");
    assert_eq!(ed.cursor(), Position::new(1, 1));
}

#[test]
fn delete_selection_across_lines_merges_prefix_and_suffix() {
    let mut ed = editor("hello\nworld");
    ed.move_to(Position::new(0, 2), false);
    ed.move_to(Position::new(1, 3), true);
    ed.delete_selection();

    assert_eq!(ed.line_count(), 1);
    assert_eq!(ed.line(0), "held");
    assert_eq!(ed.cursor(), Position::new(0, 2));
    assert!(!ed.has_selection());
}

#[test]
fn serialize_appends_trailing_newline() {
    assert_eq!(editor("a\nb").text(), "a\nb\n");
    assert_eq!(editor("a\nb\n").text(), "a\nb\n");
    assert_eq!(editor("").text(), "\n");
}

#[test]
fn load_then_serialize_round_trip() {
    let text = "func f():\n\treturn 1\n";
    let mut ed = editor("");
    ed.load(text);
    assert_eq!(ed.text(), text);
}

#[test]
fn typing_through_dispatch() {
    let mut ed = editor("");
    let mut clipboard = MemoryClipboard::new();

    type_str(&mut ed, &mut clipboard, "var x");
    ed.handle_key(&KeyEvent::key(KeyCode::Enter), &mut clipboard);
    type_str(&mut ed, &mut clipboard, "x");

    assert_eq!(ed.text(), "var x\nx\n");
    assert_eq!(ed.cursor(), Position::new(1, 1));
}

#[test]
fn control_characters_do_not_insert() {
    let mut ed = editor("");
    let mut clipboard = MemoryClipboard::new();
    ed.handle_key(&KeyEvent::char('\u{1b}'), &mut clipboard);
    ed.handle_key(&KeyEvent::char('\u{7}'), &mut clipboard);
    assert_eq!(ed.line(0), "");
}

#[test]
fn backspace_key_deletes_selection_when_active() {
    let mut ed = editor("abcdef");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 1), false);
    ed.move_to(Position::new(0, 4), true);
    ed.handle_key(&KeyEvent::key(KeyCode::Backspace), &mut clipboard);
    assert_eq!(ed.line(0), "aef");

    // Without a selection the same key deletes one character backward.
    ed.handle_key(&KeyEvent::key(KeyCode::Delete), &mut clipboard);
    assert_eq!(ed.line(0), "ef");
}

#[test]
fn enter_replaces_selection_with_line_split() {
    let mut ed = editor("abcdef");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 2), false);
    ed.move_to(Position::new(0, 4), true);
    ed.handle_key(&KeyEvent::key(KeyCode::Enter), &mut clipboard);

    assert_eq!(ed.line(0), "ab");
    assert_eq!(ed.line(1), "ef");
    assert_eq!(ed.cursor(), Position::new(1, 0));
}

#[test]
fn typed_char_replaces_selection() {
    let mut ed = editor("abcdef");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 1), false);
    ed.move_to(Position::new(0, 5), true);
    ed.handle_key(&KeyEvent::char('X'), &mut clipboard);
    assert_eq!(ed.line(0), "aXf");
}

#[test]
fn shift_arrows_extend_selection() {
    let mut ed = editor("abcdef");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 2), false);
    ed.handle_key(&KeyEvent::with_shift(KeyCode::Right), &mut clipboard);
    ed.handle_key(&KeyEvent::with_shift(KeyCode::Right), &mut clipboard);

    assert!(ed.has_selection());
    assert_eq!(ed.selected_text(), "cd");
    assert_eq!(ed.cursor(), Position::new(0, 2));

    // A plain arrow collapses the selection again.
    ed.handle_key(&KeyEvent::key(KeyCode::Left), &mut clipboard);
    assert!(!ed.has_selection());
}

#[test]
fn arrow_wraps_across_line_boundary() {
    let mut ed = editor("ab\ncd");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 2), false);
    ed.handle_key(&KeyEvent::key(KeyCode::Right), &mut clipboard);
    assert_eq!(ed.cursor(), Position::new(1, 0));
    ed.handle_key(&KeyEvent::key(KeyCode::Left), &mut clipboard);
    assert_eq!(ed.cursor(), Position::new(0, 2));
}

#[test]
fn clipboard_copy_cut_paste_shortcuts() {
    let mut ed = editor("hello world");
    let mut clipboard = MemoryClipboard::new();

    ed.move_to(Position::new(0, 0), false);
    ed.move_to(Position::new(0, 5), true);
    ed.handle_key(
        &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CTRL),
        &mut clipboard,
    );
    assert_eq!(clipboard.contents(), "hello");
    assert_eq!(ed.line(0), "hello world");

    ed.move_to(Position::new(0, 5), false);
    ed.move_to(Position::new(0, 11), true);
    ed.handle_key(
        &KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CTRL),
        &mut clipboard,
    );
    assert_eq!(clipboard.contents(), " world");
    assert_eq!(ed.line(0), "hello");

    ed.move_to(Position::new(0, 0), false);
    ed.handle_key(
        &KeyEvent::new(KeyCode::Char('v'), KeyModifiers::SUPER),
        &mut clipboard,
    );
    assert_eq!(ed.line(0), " worldhello");
}

#[test]
fn paste_shortcut_replaces_selection() {
    let mut ed = editor("abc");
    let mut clipboard = MemoryClipboard::new();
    clipboard.set("XY");

    ed.move_to(Position::new(0, 0), false);
    ed.move_to(Position::new(0, 2), true);
    ed.handle_key(
        &KeyEvent::new(KeyCode::Char('v'), KeyModifiers::CTRL),
        &mut clipboard,
    );
    assert_eq!(ed.line(0), "XYc");
}

#[test]
fn multi_line_cut_then_paste_into_empty_buffer() {
    let mut ed = editor("one\ntwo\nthree");
    let mut clipboard = MemoryClipboard::new();
    ed.move_to(Position::new(0, 1), false);
    ed.move_to(Position::new(2, 2), true);
    ed.cut_selection(&mut clipboard);
    assert_eq!(clipboard.contents(), "ne\ntwo\nth");
    assert_eq!(ed.text(), "oree\n");

    let mut fresh = editor("");
    fresh.paste_text(&clipboard.get());
    assert_eq!(fresh.text(), "ne\ntwo\nth\n");
    assert_eq!(fresh.cursor(), Position::new(2, 2));
}

#[test]
fn pointer_press_places_cursor() {
    let mut ed = editor("abcdef");
    let mut clipboard = MemoryClipboard::new();
    let metrics = MonospaceMetrics::new(8.0, 16.0);

    let press = Event::Pointer(PointerEvent::new(0, 20.0, 0.0));
    ed.handle_event(&press, &mut clipboard, &metrics, WRAP);
    assert_eq!(ed.cursor(), Position::new(0, 2));

    // Shift-press extends from the placed cursor.
    let extend = Event::Pointer(PointerEvent::new(0, 44.0, 0.0).with_shift());
    ed.handle_event(&extend, &mut clipboard, &metrics, WRAP);
    assert_eq!(ed.selected_text(), "cde");
}

#[test]
fn pointer_press_past_text_end_clamps() {
    let mut ed = editor("ab\ncd");
    let metrics = MonospaceMetrics::new(8.0, 16.0);
    ed.pointer_press(99, 500.0, 0.0, false, &metrics, WRAP);
    assert_eq!(ed.cursor(), Position::new(1, 2));
}

#[test]
fn markup_stays_consistent_through_edit_session() {
    let mut ed = editor("var x = 1");
    let mut clipboard = MemoryClipboard::new();

    ed.move_to(Position::new(0, 9), false);
    ed.handle_key(&KeyEvent::key(KeyCode::Enter), &mut clipboard);
    type_str(&mut ed, &mut clipboard, "if true:");
    ed.handle_key(&KeyEvent::key(KeyCode::Tab), &mut clipboard);
    ed.paste_text("a\r\nb");
    ed.handle_key(&KeyEvent::key(KeyCode::Backspace), &mut clipboard);

    for i in 0..ed.line_count() {
        assert_eq!(ed.markup(i), colorize_line(ed.line(i), ed.rules()));
    }
}
