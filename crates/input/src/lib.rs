//! Input event types for the folio text viewer.
//!
//! These types abstract over platform event details (window messages, key
//! codes, scrollbar notifications) and provide a clean Rust-native
//! vocabulary for the viewer shell. The crate is shared between the shell
//! and any platform layer, and has no dependencies.
//!
//! It also hosts [`KeyRepeatDebouncer`], the explicit replacement for
//! keeping "last key + last timestamp" in static storage: the platform
//! event loop owns one and consults it before forwarding a key.

use std::time::{Duration, Instant};

/// A navigation key the viewer responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Scroll up one line
    Up,
    /// Scroll down one line
    Down,
    /// Scroll left one character
    Left,
    /// Scroll right one character
    Right,
    /// Scroll up one page
    PageUp,
    /// Scroll down one page
    PageDown,
}

/// A scrollbar message, already translated out of platform-specific codes.
///
/// Line and page variants are relative motions; `Thumb` carries an absolute
/// position in the widget's own `0..=WIDGET_RANGE` domain and must be scaled
/// back to line units before it reaches the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    /// One unit towards the start (line up / character left)
    LineBack,
    /// One unit towards the end (line down / character right)
    LineForward,
    /// One page towards the start
    PageBack,
    /// One page towards the end
    PageForward,
    /// Absolute thumb position in the widget domain
    Thumb(u32),
}

/// Suppresses auto-repeat of a held key.
///
/// The platform delivers a stream of key-down events while a key is held;
/// the viewer only wants discrete steps. The debouncer remembers the last
/// key and when it arrived, and rejects a repeat of the same key within the
/// hold window. A different key always passes (and becomes the new "last").
///
/// The current time is passed in by the caller, which keeps the type a pure
/// data structure and makes the window easy to test.
#[derive(Debug, Clone)]
pub struct KeyRepeatDebouncer {
    /// Last accepted key and its arrival time
    last: Option<(Key, Instant)>,
    /// Repeats of the same key inside this window are dropped
    hold: Duration,
}

/// Default hold window for key auto-repeat.
pub const DEFAULT_HOLD_MS: u64 = 100;

impl KeyRepeatDebouncer {
    /// Creates a debouncer with the given hold window.
    pub fn new(hold: Duration) -> Self {
        Self { last: None, hold }
    }

    /// Creates a debouncer with the default hold window (100ms).
    pub fn with_default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_HOLD_MS))
    }

    /// Decides whether a key-down event should be acted on.
    ///
    /// Returns `false` for a repeat of the same key within the hold window.
    /// Accepted keys update the remembered key and timestamp.
    ///
    /// # Arguments
    ///
    /// * `key` - The key that was pressed
    /// * `now` - The current timestamp (passed in for testability)
    pub fn accept(&mut self, key: Key, now: Instant) -> bool {
        if let Some((last_key, last_at)) = self.last {
            if last_key == key && now.duration_since(last_at) <= self.hold {
                return false;
            }
        }
        self.last = Some((key, now));
        true
    }

    /// Forgets the remembered key, so the next event always passes.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn debouncer(hold_ms: u64) -> KeyRepeatDebouncer {
        KeyRepeatDebouncer::new(Duration::from_millis(hold_ms))
    }

    #[test]
    fn test_first_key_always_accepted() {
        let mut d = debouncer(100);
        assert!(d.accept(Key::Down, Instant::now()));
    }

    #[test]
    fn test_same_key_within_hold_suppressed() {
        let mut d = debouncer(100);
        let t0 = Instant::now();
        assert!(d.accept(Key::Down, t0));
        assert!(!d.accept(Key::Down, t0 + Duration::from_millis(50)));
    }

    #[test]
    fn test_same_key_after_hold_accepted() {
        let mut d = debouncer(100);
        let t0 = Instant::now();
        assert!(d.accept(Key::Down, t0));
        assert!(d.accept(Key::Down, t0 + Duration::from_millis(150)));
    }

    #[test]
    fn test_different_key_within_hold_accepted() {
        let mut d = debouncer(100);
        let t0 = Instant::now();
        assert!(d.accept(Key::Down, t0));
        assert!(d.accept(Key::Up, t0 + Duration::from_millis(10)));
    }

    #[test]
    fn test_suppressed_repeat_does_not_extend_window() {
        // A dropped repeat must not refresh the timestamp: holding a key
        // yields one step per hold window, not one step total.
        let mut d = debouncer(100);
        let t0 = Instant::now();
        assert!(d.accept(Key::Down, t0));
        assert!(!d.accept(Key::Down, t0 + Duration::from_millis(60)));
        assert!(d.accept(Key::Down, t0 + Duration::from_millis(120)));
    }

    #[test]
    fn test_reset_forgets_last_key() {
        let mut d = debouncer(100);
        let t0 = Instant::now();
        assert!(d.accept(Key::Down, t0));
        d.reset();
        assert!(d.accept(Key::Down, t0 + Duration::from_millis(1)));
    }
}
