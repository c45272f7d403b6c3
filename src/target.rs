use std::collections::BTreeMap;

use crate::geom::{PixelRect, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TargetId(usize);

/// Binary visual state used to color a target. `Active` marks the target
/// currently mirrored to the pointer by a sticky session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    #[default]
    Neutral,
    Active,
}

#[derive(Debug, Clone, Copy)]
pub struct Target {
    pub rect: PixelRect,
    pub tint: Tint,
}

/// Where on a target a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Body(TargetId),
    ResizeHandle(TargetId),
}

/// Owns the manipulable targets and their z-order.
///
/// The stage only provides lookup and hit-testing; position, size, and tint
/// are mutated exclusively by the interaction controller while a session
/// owns the target, which is why `target_mut` is crate-private.
#[derive(Debug, Default)]
pub struct Stage {
    targets: BTreeMap<TargetId, Target>,
    z_order: Vec<TargetId>,
    next_id: usize,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target supplied by the host. Later attachments render and
    /// hit-test above earlier ones.
    pub fn attach(&mut self, rect: PixelRect) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.targets.insert(
            id,
            Target {
                rect,
                tint: Tint::Neutral,
            },
        );
        self.z_order.push(id);
        tracing::debug!(target_id = ?id, ?rect, "attached target");
        id
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(&id)
    }

    pub(crate) fn target_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Targets in draw order, bottom-most first.
    pub fn iter_z(&self) -> impl Iterator<Item = (TargetId, &Target)> {
        self.z_order
            .iter()
            .filter_map(|id| self.targets.get(id).map(|target| (*id, target)))
    }

    /// Topmost target under `point`, distinguishing the resize-handle corner
    /// from the body. The handle is checked first so a gesture starting on it
    /// never falls through to a body drag.
    pub fn hit_test(&self, point: Point, handle_extent: f32) -> Option<Hit> {
        for id in self.z_order.iter().rev() {
            let Some(target) = self.targets.get(id) else {
                continue;
            };
            if !target.rect.contains(point) {
                continue;
            }
            if target.rect.corner_region(handle_extent).contains(point) {
                return Some(Hit::ResizeHandle(*id));
            }
            return Some(Hit::Body(*id));
        }
        None
    }
}
