//! Shared crate-wide constants.

/// Maximum time between two taps for the pair to count as a double-tap.
///
/// The comparison is strict: a second tap landing exactly at this delta is
/// classified as a fresh single tap. Units: milliseconds.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Maximum per-axis distance between two taps for the pair to count as a
/// double-tap. Both axes are checked independently and strictly, so a second
/// tap 10px away on either axis starts a fresh gesture.
///
/// Units: pixels. Raising this makes double-tap detection more forgiving on
/// jittery touch hardware at the cost of misreading fast repositioning taps.
pub const DOUBLE_TAP_SLOP_PX: f32 = 10.0;

/// Smallest width and height a resize session will shrink a target to.
pub const MIN_TARGET_SIZE_PX: f32 = 50.0;

/// Side length of the square hit region overlaid at a target's bottom-right
/// corner that routes a gesture into a resize session instead of a drag.
pub const RESIZE_HANDLE_EXTENT_PX: f32 = 15.0;
