//! A modality-unified pointer interaction engine for draggable, resizable
//! on-screen targets.
//!
//! Mouse and touch input streams collapse into one raw event model, a tap
//! classifier decides whether a new gesture is a double-tap, and a single
//! interaction controller arbitrates which of the mutually exclusive modes
//! (drag, sticky follow, resize) a gesture enters. Escape or a second touch
//! contact aborts the active session and restores the target's
//! pre-interaction position.

pub mod constants;
pub mod controller;
pub mod driver;
pub mod engine;
pub mod event_loop;
pub mod geom;
pub mod pointer;
pub mod session;
pub mod subscription;
pub mod tap;
pub mod target;
pub mod tracing_sub;

pub use controller::{InteractionController, InteractionError, Mode};
pub use engine::{EngineConfig, InteractionEngine};
pub use geom::{PixelRect, Point, Size};
pub use pointer::{KeyInput, Modality, PointerPhase, PointerSample, RawInput};
pub use tap::{TapClassifier, TapKind};
pub use target::{Hit, Stage, Target, TargetId, Tint};
