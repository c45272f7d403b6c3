//! Mode-scoped listener bookkeeping.
//!
//! Every interaction mode registers a bounded, known set of routes on entry
//! and must deregister exactly that set on every exit path. Modeling the
//! registrations as an owned resource makes the symmetry checkable: the set
//! is empty whenever the controller is idle, and double registration or a
//! mismatched release surfaces as an error instead of a leaked listener.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::pointer::{Modality, PointerPhase};

/// One listener a mode may hold while active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Route {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl Route {
    /// The route a pointer event of the given modality and phase arrives on.
    pub fn pointer(modality: Modality, phase: PointerPhase) -> Self {
        match (modality, phase) {
            (Modality::Mouse, PointerPhase::Down) => Route::MouseDown,
            (Modality::Mouse, PointerPhase::Move) => Route::MouseMove,
            (Modality::Mouse, PointerPhase::Up) => Route::MouseUp,
            (Modality::Touch, PointerPhase::Down) => Route::TouchStart,
            (Modality::Touch, PointerPhase::Move) => Route::TouchMove,
            (Modality::Touch, PointerPhase::Up) => Route::TouchEnd,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubscriptionError {
    #[error("route {0:?} is already registered")]
    AlreadyRegistered(Route),
    #[error("route {0:?} is not registered")]
    NotRegistered(Route),
}

#[derive(Debug, Default)]
pub struct SubscriptionSet {
    active: BTreeSet<Route>,
}

impl SubscriptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every route in `routes`. Fails without side effects if any
    /// route is already held.
    pub fn acquire(&mut self, routes: &[Route]) -> Result<(), SubscriptionError> {
        if let Some(route) = routes.iter().find(|route| self.active.contains(*route)) {
            return Err(SubscriptionError::AlreadyRegistered(*route));
        }
        self.active.extend(routes.iter().copied());
        Ok(())
    }

    /// Deregister every route in `routes`. Fails without side effects if any
    /// route is not currently held.
    pub fn release(&mut self, routes: &[Route]) -> Result<(), SubscriptionError> {
        if let Some(route) = routes.iter().find(|route| !self.active.contains(*route)) {
            return Err(SubscriptionError::NotRegistered(*route));
        }
        for route in routes {
            self.active.remove(route);
        }
        Ok(())
    }

    pub fn active(&self, route: Route) -> bool {
        self.active.contains(&route)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
