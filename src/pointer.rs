//! Raw input model and the pointer normalizer.
//!
//! Mouse and touch streams collapse into one `PointerSample` shape so the
//! rest of the crate branches on a checked `Modality` tag instead of
//! event-type strings. Host-level `click`/`dblclick` notions are derived
//! downstream by the tap classifier from plain down events; they are not
//! separate raw variants.

use crate::geom::Point;

/// The input channel a gesture originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modality {
    Mouse,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
}

/// Keys the engine consumes. Everything except Escape is filtered out by the
/// host before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Escape,
}

/// A raw host event, before normalization.
///
/// Touch events carry the full contact lists so multi-touch abort detection
/// can inspect the active count before any normalization happens.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    Mouse {
        phase: PointerPhase,
        position: Point,
    },
    Touch {
        phase: PointerPhase,
        /// Contacts currently on the surface.
        touches: Vec<Point>,
        /// Contacts that changed in this event; on `Up` the lifted finger
        /// appears here rather than in `touches`.
        changed: Vec<Point>,
    },
    Key(KeyInput),
}

impl RawInput {
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self::Mouse {
            phase,
            position: Point::new(x, y),
        }
    }

    /// Single-contact touch event; the contact doubles as the changed point.
    pub fn touch(phase: PointerPhase, x: f32, y: f32) -> Self {
        let point = Point::new(x, y);
        match phase {
            PointerPhase::Up => Self::Touch {
                phase,
                touches: Vec::new(),
                changed: vec![point],
            },
            _ => Self::Touch {
                phase,
                touches: vec![point],
                changed: vec![point],
            },
        }
    }
}

/// A modality-tagged pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub modality: Modality,
    pub position: Point,
}

/// Pure normalization of a raw event into a pointer sample.
///
/// Touch uses the first active contact on down/move and the first changed
/// contact on up (the primary-finger convention). A touch event with no
/// resolvable contact should not occur per platform contract, but yields
/// `None` so the caller skips that frame instead of terminating a session.
pub fn normalize(raw: &RawInput) -> Option<PointerSample> {
    match raw {
        RawInput::Mouse { position, .. } => Some(PointerSample {
            modality: Modality::Mouse,
            position: *position,
        }),
        RawInput::Touch {
            phase,
            touches,
            changed,
        } => {
            let point = match phase {
                PointerPhase::Up => changed.first().or_else(|| touches.first()),
                _ => touches.first().or_else(|| changed.first()),
            };
            point.map(|position| PointerSample {
                modality: Modality::Touch,
                position: *position,
            })
        }
        RawInput::Key(_) => None,
    }
}

/// Pointer phase of a raw event, if it has one.
pub fn phase(raw: &RawInput) -> Option<PointerPhase> {
    match raw {
        RawInput::Mouse { phase, .. } | RawInput::Touch { phase, .. } => Some(*phase),
        RawInput::Key(_) => None,
    }
}
