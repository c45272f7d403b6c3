//! Event router tying the normalizer, tap classifier, controller, and stage
//! together, plus the global abort handling (Escape and multi-touch).

use crate::constants::{MIN_TARGET_SIZE_PX, RESIZE_HANDLE_EXTENT_PX};
use crate::controller::{InteractionController, InteractionError, Mode};
use crate::geom::PixelRect;
use crate::pointer::{self, KeyInput, PointerPhase, PointerSample, RawInput};
use crate::subscription::Route;
use crate::tap::{TapClassifier, TapKind};
use crate::target::{Hit, Stage, TargetId};

#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Smallest width/height a resize may shrink a target to.
    pub min_size: f32,
    /// Side length of the bottom-right resize-handle hit region.
    pub handle_extent: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_TARGET_SIZE_PX,
            handle_extent: RESIZE_HANDLE_EXTENT_PX,
        }
    }
}

/// The process-wide interaction engine: one stage of targets, one
/// controller, one tap classifier.
pub struct InteractionEngine {
    stage: Stage,
    controller: InteractionController,
    taps: TapClassifier,
    config: EngineConfig,
}

impl Default for InteractionEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl InteractionEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            stage: Stage::new(),
            controller: InteractionController::new(config.min_size),
            taps: TapClassifier::new(),
            config,
        }
    }

    pub fn attach_target(&mut self, rect: PixelRect) -> TargetId {
        self.stage.attach(rect)
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Route one raw host event. `now_ms` is the event timestamp in
    /// milliseconds from an arbitrary epoch, used only for tap
    /// classification. Returns whether the event was consumed.
    pub fn handle_input(&mut self, raw: &RawInput, now_ms: u64) -> bool {
        // Global abort gestures come first and bypass normalization: the
        // Escape key carries no position, and a multi-touch start must be
        // detected from the raw contact count without recording a tap.
        match raw {
            RawInput::Key(KeyInput::Escape) => return self.abort(),
            RawInput::Touch {
                phase: PointerPhase::Down,
                touches,
                ..
            } if touches.len() > 1 => return self.abort(),
            _ => {}
        }

        let Some(sample) = pointer::normalize(raw) else {
            // e.g. a touch event with an empty contact list: skip the frame,
            // keep the session
            return false;
        };
        match pointer::phase(raw) {
            Some(PointerPhase::Down) => self.pointer_down(sample, now_ms),
            Some(PointerPhase::Move) => self.controller.pointer_moved(&mut self.stage, sample),
            Some(PointerPhase::Up) => self.controller.pointer_released(&mut self.stage, sample),
            None => false,
        }
    }

    fn abort(&mut self) -> bool {
        if self.controller.mode() == Mode::Idle {
            return false;
        }
        self.controller.reset(&mut self.stage);
        true
    }

    fn pointer_down(&mut self, sample: PointerSample, now_ms: u64) -> bool {
        let tap = self.taps.classify(sample.position, now_ms);

        match self.controller.mode() {
            Mode::Sticky => {
                // Only the modality that started the sticky session may
                // toggle it off.
                let route = Route::pointer(sample.modality, PointerPhase::Down);
                if !self.controller.subscriptions().active(route) {
                    return false;
                }
                if tap == TapKind::Double {
                    // part of a fresh double-tap: sticky keeps following
                    return true;
                }
                // A deliberate plain tap commits the placement. Consume the
                // event so the same down cannot immediately grab whatever
                // sits under the pointer.
                self.controller.end_session(&mut self.stage);
                true
            }
            Mode::Dragging | Mode::Resizing => {
                // A down mid-session can only come from the other modality
                // of a hybrid device; ignore it.
                false
            }
            Mode::Idle => match self.stage.hit_test(sample.position, self.config.handle_extent) {
                Some(Hit::ResizeHandle(id)) => {
                    self.start(|ctl, stage| ctl.request_resize(stage, id, sample))
                }
                Some(Hit::Body(id)) if tap == TapKind::Double => {
                    self.start(|ctl, stage| ctl.request_sticky(stage, id, sample))
                }
                Some(Hit::Body(id)) => self.start(|ctl, stage| ctl.request_drag(stage, id, sample)),
                None => false,
            },
        }
    }

    fn start<F>(&mut self, request: F) -> bool
    where
        F: FnOnce(&mut InteractionController, &mut Stage) -> Result<(), InteractionError>,
    {
        match request(&mut self.controller, &mut self.stage) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(%err, "session request denied");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Point;

    fn engine_with_target() -> (InteractionEngine, TargetId) {
        let mut engine = InteractionEngine::default();
        let id = engine.attach_target(PixelRect::new(50.0, 50.0, 100.0, 80.0));
        (engine, id)
    }

    #[test]
    fn handle_grab_starts_resize_not_drag() {
        let (mut engine, id) = engine_with_target();
        // bottom-right corner of the target
        assert!(engine.handle_input(&RawInput::mouse(PointerPhase::Down, 148.0, 128.0), 0));
        assert_eq!(engine.mode(), Mode::Resizing);

        engine.handle_input(&RawInput::mouse(PointerPhase::Move, 168.0, 128.0), 16);
        let target = engine.stage().target(id).unwrap();
        // size changed, position did not
        assert_eq!(target.rect.position(), Point::new(50.0, 50.0));
        assert_eq!(target.rect.size().width, 120.0);
    }

    #[test]
    fn down_on_empty_space_is_ignored() {
        let (mut engine, _id) = engine_with_target();
        assert!(!engine.handle_input(&RawInput::mouse(PointerPhase::Down, 500.0, 500.0), 0));
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn escape_while_idle_is_a_noop() {
        let (mut engine, _id) = engine_with_target();
        assert!(!engine.handle_input(&RawInput::Key(KeyInput::Escape), 0));
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn empty_touch_move_skips_frame_without_ending_session() {
        let (mut engine, id) = engine_with_target();
        engine.handle_input(&RawInput::touch(PointerPhase::Down, 60.0, 55.0), 0);
        assert_eq!(engine.mode(), Mode::Dragging);

        let hollow = RawInput::Touch {
            phase: PointerPhase::Move,
            touches: vec![],
            changed: vec![],
        };
        assert!(!engine.handle_input(&hollow, 16));
        assert_eq!(engine.mode(), Mode::Dragging);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn second_touch_contact_aborts_active_session() {
        let (mut engine, id) = engine_with_target();
        engine.handle_input(&RawInput::touch(PointerPhase::Down, 60.0, 55.0), 0);
        engine.handle_input(&RawInput::touch(PointerPhase::Move, 200.0, 150.0), 16);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(190.0, 145.0)
        );

        let two_fingers = RawInput::Touch {
            phase: PointerPhase::Down,
            touches: vec![Point::new(200.0, 150.0), Point::new(10.0, 10.0)],
            changed: vec![Point::new(10.0, 10.0)],
        };
        assert!(engine.handle_input(&two_fingers, 32));
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn down_from_other_modality_does_not_disturb_session() {
        let (mut engine, _id) = engine_with_target();
        engine.handle_input(&RawInput::touch(PointerPhase::Down, 60.0, 55.0), 0);
        assert_eq!(engine.mode(), Mode::Dragging);
        // synthesized mouse down from the same physical gesture
        assert!(!engine.handle_input(&RawInput::mouse(PointerPhase::Down, 60.0, 55.0), 5));
        assert_eq!(engine.mode(), Mode::Dragging);
    }
}
