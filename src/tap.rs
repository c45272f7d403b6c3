//! Double-tap / double-click disambiguation.

use crate::constants::{DOUBLE_TAP_SLOP_PX, DOUBLE_TAP_WINDOW_MS};
use crate::geom::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapKind {
    Single,
    Double,
}

/// Classifies each new tap against the previous one.
///
/// A tap is a double-tap iff a previous tap exists, arrived less than
/// [`DOUBLE_TAP_WINDOW_MS`] ago, and both axis deltas are under
/// [`DOUBLE_TAP_SLOP_PX`]. The last-tap state is a single global pair, not
/// scoped per target, so two rapid taps on two different targets can read as
/// one double-tap.
///
/// Timestamps are caller-supplied milliseconds from an arbitrary epoch; the
/// classifier never consults a clock itself.
#[derive(Debug, Default)]
pub struct TapClassifier {
    last_tap: Option<(Point, u64)>,
}

impl TapClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a tap and unconditionally record it as the latest one.
    pub fn classify(&mut self, position: Point, at_ms: u64) -> TapKind {
        let kind = match self.last_tap {
            Some((last_pos, last_ms))
                if at_ms.saturating_sub(last_ms) < DOUBLE_TAP_WINDOW_MS
                    && (position.x - last_pos.x).abs() < DOUBLE_TAP_SLOP_PX
                    && (position.y - last_pos.y).abs() < DOUBLE_TAP_SLOP_PX =>
            {
                TapKind::Double
            }
            _ => TapKind::Single,
        };
        self.last_tap = Some((position, at_ms));
        kind
    }
}
