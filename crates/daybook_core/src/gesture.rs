//! Double-tap detection helper for touch frontends.
//!
//! Pure timestamp arithmetic only; wiring taps to editor actions is the
//! caller's concern.

/// Two taps within this window on the same target open the editor.
pub const DOUBLE_TAP_WINDOW_MS: i64 = 350;

/// Whether a tap at `now_ms` completes a double tap begun at
/// `previous_tap_ms` on the same target.
pub fn is_double_tap(previous_tap_ms: i64, now_ms: i64, same_target: bool) -> bool {
    same_target && now_ms > previous_tap_ms && now_ms - previous_tap_ms < DOUBLE_TAP_WINDOW_MS
}
