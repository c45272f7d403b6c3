//! Per-mode session data and the move math each mode applies.

use crate::geom::{Point, Size};
use crate::pointer::Modality;
use crate::subscription::Route;
use crate::target::TargetId;

/// Follows the pointer at a fixed grab offset captured at session start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub offset: Point,
}

impl DragSession {
    pub fn begin(pointer: Point, origin: Point) -> Self {
        Self {
            offset: Point::new(pointer.x - origin.x, pointer.y - origin.y),
        }
    }

    pub fn position_for(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.offset.x, pointer.y - self.offset.y)
    }
}

/// Mirrors the pointer position directly, no offset: the target's corner
/// snaps to the pointer, not to the grab point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickySession;

impl StickySession {
    pub fn position_for(&self, pointer: Point) -> Point {
        pointer
    }
}

/// Grows or shrinks from the start size by the pointer delta, clamped to a
/// minimum per axis. There is no abort path for size: reset restores
/// position only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeSession {
    pub start_pointer: Point,
    pub start_size: Size,
}

impl ResizeSession {
    pub fn begin(pointer: Point, size: Size) -> Self {
        Self {
            start_pointer: pointer,
            start_size: size,
        }
    }

    pub fn size_for(&self, pointer: Point, min_size: f32) -> Size {
        let width = self.start_size.width + (pointer.x - self.start_pointer.x);
        let height = self.start_size.height + (pointer.y - self.start_pointer.y);
        Size::new(width.max(min_size), height.max(min_size))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionKind {
    Drag(DragSession),
    Sticky(StickySession),
    Resize(ResizeSession),
}

/// The listener set a session holds while active, scoped to the modality
/// that started it so a touch session never reacts to synthesized mouse
/// events from a hybrid device.
///
/// Drag and resize end on release; sticky ends on the next plain tap of the
/// same modality, so it subscribes to downs instead of ups.
pub fn session_routes(kind: &SessionKind, modality: Modality) -> &'static [Route] {
    const MOUSE_UNTIL_RELEASE: [Route; 2] = [Route::MouseMove, Route::MouseUp];
    const TOUCH_UNTIL_RELEASE: [Route; 2] = [Route::TouchMove, Route::TouchEnd];
    const MOUSE_UNTIL_TAP: [Route; 2] = [Route::MouseMove, Route::MouseDown];
    const TOUCH_UNTIL_TAP: [Route; 2] = [Route::TouchMove, Route::TouchStart];

    match (kind, modality) {
        (SessionKind::Drag(_) | SessionKind::Resize(_), Modality::Mouse) => &MOUSE_UNTIL_RELEASE,
        (SessionKind::Drag(_) | SessionKind::Resize(_), Modality::Touch) => &TOUCH_UNTIL_RELEASE,
        (SessionKind::Sticky(_), Modality::Mouse) => &MOUSE_UNTIL_TAP,
        (SessionKind::Sticky(_), Modality::Touch) => &TOUCH_UNTIL_TAP,
    }
}

/// An active session: the bound target, its pre-interaction position
/// snapshot (used only by reset), the starting modality, and the per-mode
/// data.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub target: TargetId,
    pub modality: Modality,
    pub initial_position: Point,
    pub kind: SessionKind,
}
