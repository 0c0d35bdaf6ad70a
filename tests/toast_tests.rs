//! Tests for the copy action and the "Copied" toast.

use std::time::{Duration, Instant};

use symbolbar::{copy_symbol, Clipboard, ClipboardError, MemoryClipboard, ToastState};

struct BrokenClipboard;

impl Clipboard for BrokenClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError("pasteboard unavailable".to_string()))
    }
}

const SECOND: Duration = Duration::from_secs(1);

#[test]
fn copy_writes_name_and_shows_toast() {
    let mut clipboard = MemoryClipboard::default();
    let mut toast = ToastState::new(2 * SECOND);

    assert!(copy_symbol(&mut clipboard, &mut toast, "star.fill", Instant::now()));
    assert_eq!(clipboard.contents(), Some("star.fill"));
    assert_eq!(toast.message().as_deref(), Some("Copied: star.fill"));
}

#[test]
fn failed_copy_shows_nothing() {
    let mut toast = ToastState::new(2 * SECOND);
    assert!(!copy_symbol(&mut BrokenClipboard, &mut toast, "star", Instant::now()));
    assert_eq!(toast.current(), None);
    assert_eq!(toast.next_deadline(), None);
}

#[test]
fn toast_hides_after_duration() {
    let start = Instant::now();
    let mut toast = ToastState::new(2 * SECOND);
    toast.show("heart", start);

    assert!(!toast.tick(start + SECOND));
    assert_eq!(toast.current(), Some("heart"));
    assert!(toast.tick(start + 2 * SECOND));
    assert_eq!(toast.current(), None);
}

#[test]
fn second_copy_of_other_name_replaces_text() {
    let start = Instant::now();
    let mut toast = ToastState::new(2 * SECOND);
    toast.show("heart", start);
    toast.show("bolt", start + SECOND);

    assert_eq!(toast.current(), Some("bolt"));
    // The first timer is stale and must not hide the newer toast
    assert!(!toast.tick(start + 2 * SECOND));
    assert_eq!(toast.current(), Some("bolt"));
    assert!(toast.tick(start + 3 * SECOND));
}

#[test]
fn repeat_copy_of_same_name_restarts_timer() {
    let start = Instant::now();
    let mut toast = ToastState::new(2 * SECOND);
    toast.show("heart", start);
    toast.show("heart", start + SECOND + SECOND / 2);

    assert!(!toast.tick(start + 2 * SECOND));
    assert_eq!(toast.current(), Some("heart"));
    assert!(toast.tick(start + 4 * SECOND));
}

#[test]
fn next_deadline_is_earliest_timer() {
    let start = Instant::now();
    let mut toast = ToastState::new(2 * SECOND);
    toast.show("a", start);
    toast.show("b", start + SECOND);
    assert_eq!(toast.next_deadline(), Some(start + 2 * SECOND));
}

#[test]
fn clear_drops_pending_timers() {
    let start = Instant::now();
    let mut toast = ToastState::default();
    toast.show("a", start);
    toast.clear();
    assert_eq!(toast.current(), None);
    assert_eq!(toast.next_deadline(), None);
}
