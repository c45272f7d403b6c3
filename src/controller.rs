//! The exclusive owner of interaction state.
//!
//! All mode and binding changes go through the five operations here:
//! `request_drag`, `request_sticky`, `request_resize`, `end_session`, and
//! `reset`. No other code path mutates the mode, the bound target, or the
//! target's visual state, which keeps the exclusivity invariant enforceable
//! at one call site.

use thiserror::Error;

use crate::pointer::{PointerPhase, PointerSample};
use crate::session::{
    DragSession, ResizeSession, Session, SessionKind, StickySession, session_routes,
};
use crate::subscription::{Route, SubscriptionError, SubscriptionSet};
use crate::target::{Stage, TargetId, Tint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Dragging,
    Sticky,
    Resizing,
}

#[derive(Debug, Error)]
pub enum InteractionError {
    /// A session start was requested while another mode owns the state.
    /// Callers treat this as a defensive no-op.
    #[error("a {0:?} session is already active")]
    Busy(Mode),
    #[error("target {0:?} is not attached to the stage")]
    UnknownTarget(TargetId),
    #[error(transparent)]
    Subscription(#[from] SubscriptionError),
}

pub struct InteractionController {
    session: Option<Session>,
    subscriptions: SubscriptionSet,
    min_size: f32,
}

impl InteractionController {
    pub fn new(min_size: f32) -> Self {
        Self {
            session: None,
            subscriptions: SubscriptionSet::new(),
            min_size,
        }
    }

    pub fn mode(&self) -> Mode {
        match &self.session {
            None => Mode::Idle,
            Some(session) => match session.kind {
                SessionKind::Drag(_) => Mode::Dragging,
                SessionKind::Sticky(_) => Mode::Sticky,
                SessionKind::Resize(_) => Mode::Resizing,
            },
        }
    }

    /// Target owned by the active session; `None` iff idle.
    pub fn bound_target(&self) -> Option<TargetId> {
        self.session.as_ref().map(|session| session.target)
    }

    pub fn subscriptions(&self) -> &SubscriptionSet {
        &self.subscriptions
    }

    /// Begin a drag: bind the target, snapshot its position, and retain the
    /// pointer-to-corner offset. Only valid while idle.
    pub fn request_drag(
        &mut self,
        stage: &mut Stage,
        id: TargetId,
        sample: PointerSample,
    ) -> Result<(), InteractionError> {
        self.ensure_idle()?;
        let rect = stage
            .target(id)
            .ok_or(InteractionError::UnknownTarget(id))?
            .rect;
        let kind = SessionKind::Drag(DragSession::begin(sample.position, rect.position()));
        self.install(Session {
            target: id,
            modality: sample.modality,
            initial_position: rect.position(),
            kind,
        })?;
        tracing::debug!(target_id = ?id, modality = ?sample.modality, "started drag");
        Ok(())
    }

    /// Begin a sticky follow: bind the target, snapshot its position, and
    /// mark it visually active. Only valid while idle.
    pub fn request_sticky(
        &mut self,
        stage: &mut Stage,
        id: TargetId,
        sample: PointerSample,
    ) -> Result<(), InteractionError> {
        self.ensure_idle()?;
        let target = stage
            .target_mut(id)
            .ok_or(InteractionError::UnknownTarget(id))?;
        let initial_position = target.rect.position();
        target.tint = Tint::Active;
        self.install(Session {
            target: id,
            modality: sample.modality,
            initial_position,
            kind: SessionKind::Sticky(StickySession),
        })?;
        tracing::debug!(target_id = ?id, modality = ?sample.modality, "started sticky follow");
        Ok(())
    }

    /// Begin a resize from the target's current size. Resize is exclusive
    /// with drag and sticky, so this too is only valid while idle.
    pub fn request_resize(
        &mut self,
        stage: &mut Stage,
        id: TargetId,
        sample: PointerSample,
    ) -> Result<(), InteractionError> {
        self.ensure_idle()?;
        let rect = stage
            .target(id)
            .ok_or(InteractionError::UnknownTarget(id))?
            .rect;
        let kind = SessionKind::Resize(ResizeSession::begin(sample.position, rect.size()));
        self.install(Session {
            target: id,
            modality: sample.modality,
            initial_position: rect.position(),
            kind,
        })?;
        tracing::debug!(target_id = ?id, modality = ?sample.modality, "started resize");
        Ok(())
    }

    /// Apply a move event to the active session. Samples from a modality the
    /// session did not subscribe to are ignored, as are moves while idle.
    /// Returns whether the sample was applied.
    pub fn pointer_moved(&mut self, stage: &mut Stage, sample: PointerSample) -> bool {
        let route = Route::pointer(sample.modality, PointerPhase::Move);
        if !self.subscriptions.active(route) {
            return false;
        }
        let Some(session) = &self.session else {
            return false;
        };
        let Some(target) = stage.target_mut(session.target) else {
            return false;
        };
        match &session.kind {
            SessionKind::Drag(drag) => target.rect.set_position(drag.position_for(sample.position)),
            SessionKind::Sticky(sticky) => {
                target.rect.set_position(sticky.position_for(sample.position));
            }
            SessionKind::Resize(resize) => {
                target
                    .rect
                    .set_size(resize.size_for(sample.position, self.min_size));
            }
        }
        true
    }

    /// Handle a pointer release. Ends drag and resize sessions started by
    /// the same modality, committing the current position or size. Sticky
    /// ignores releases; it ends on the next plain tap.
    pub fn pointer_released(&mut self, stage: &mut Stage, sample: PointerSample) -> bool {
        let route = Route::pointer(sample.modality, PointerPhase::Up);
        if !self.subscriptions.active(route) {
            return false;
        }
        match self.mode() {
            Mode::Dragging | Mode::Resizing => {
                self.end_session(stage);
                true
            }
            _ => false,
        }
    }

    /// End the active session, committing whatever position and size the
    /// target currently has, and return to idle. No-op while idle.
    pub fn end_session(&mut self, stage: &mut Stage) {
        let Some(session) = self.session.take() else {
            return;
        };
        if matches!(session.kind, SessionKind::Sticky(_))
            && let Some(target) = stage.target_mut(session.target)
        {
            target.tint = Tint::Neutral;
        }
        self.teardown(&session);
        tracing::debug!(target_id = ?session.target, "session ended");
    }

    /// Abort the active session: restore the bound target to its
    /// pre-interaction position, mark it neutral, and return to idle.
    /// Size is never restored. No-op while idle.
    pub fn reset(&mut self, stage: &mut Stage) {
        let Some(session) = self.session.take() else {
            return;
        };
        if let Some(target) = stage.target_mut(session.target) {
            target.rect.set_position(session.initial_position);
            target.tint = Tint::Neutral;
        }
        self.teardown(&session);
        tracing::debug!(target_id = ?session.target, "session reset");
    }

    fn ensure_idle(&self) -> Result<(), InteractionError> {
        match self.mode() {
            Mode::Idle => Ok(()),
            mode => Err(InteractionError::Busy(mode)),
        }
    }

    fn install(&mut self, session: Session) -> Result<(), InteractionError> {
        self.subscriptions
            .acquire(session_routes(&session.kind, session.modality))?;
        self.session = Some(session);
        Ok(())
    }

    fn teardown(&mut self, session: &Session) {
        let routes = session_routes(&session.kind, session.modality);
        if let Err(err) = self.subscriptions.release(routes) {
            // Cannot happen while sessions are the only acquirers; surface
            // loudly in debug builds if that stops being true.
            debug_assert!(false, "listener release mismatch: {err}");
            tracing::warn!(%err, "listener release mismatch");
        }
    }
}
