#[cfg(test)]
mod tests {
    use drag_stage::{
        EngineConfig, InteractionEngine, KeyInput, Mode, PixelRect, Point, PointerPhase, RawInput,
        TargetId, Tint,
    };

    fn engine() -> (InteractionEngine, TargetId) {
        let mut engine = InteractionEngine::new(EngineConfig {
            min_size: 50.0,
            handle_extent: 15.0,
        });
        let id = engine.attach_target(PixelRect::new(50.0, 50.0, 100.0, 80.0));
        (engine, id)
    }

    fn mouse(phase: PointerPhase, x: f32, y: f32) -> RawInput {
        RawInput::mouse(phase, x, y)
    }

    fn touch(phase: PointerPhase, x: f32, y: f32) -> RawInput {
        RawInput::touch(phase, x, y)
    }

    #[test]
    fn drag_commits_on_release() {
        let (mut engine, id) = engine();

        assert!(engine.handle_input(&mouse(PointerPhase::Down, 60.0, 55.0), 0));
        assert_eq!(engine.mode(), Mode::Dragging);

        engine.handle_input(&mouse(PointerPhase::Move, 200.0, 150.0), 16);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(190.0, 145.0)
        );

        assert!(engine.handle_input(&mouse(PointerPhase::Up, 200.0, 150.0), 32));
        assert_eq!(engine.mode(), Mode::Idle);
        // committed, not restored
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(190.0, 145.0)
        );
    }

    #[test]
    fn double_click_enters_sticky_and_escape_restores() {
        let (mut engine, id) = engine();

        // first click: transient zero-move drag
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 50);
        // second click within the window: sticky
        engine.handle_input(&mouse(PointerPhase::Down, 105.0, 105.0), 250);
        assert_eq!(engine.mode(), Mode::Sticky);
        assert_eq!(engine.stage().target(id).unwrap().tint, Tint::Active);

        engine.handle_input(&mouse(PointerPhase::Move, 300.0, 300.0), 300);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(300.0, 300.0)
        );

        assert!(engine.handle_input(&RawInput::Key(KeyInput::Escape), 350));
        let target = engine.stage().target(id).unwrap();
        assert_eq!(target.rect.position(), Point::new(50.0, 50.0));
        assert_eq!(target.tint, Tint::Neutral);
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn late_second_click_starts_a_fresh_drag_instead_of_sticky() {
        let (mut engine, _id) = engine();

        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 50);
        // outside the 300ms window
        engine.handle_input(&mouse(PointerPhase::Down, 105.0, 105.0), 350);
        assert_eq!(engine.mode(), Mode::Dragging);
    }

    #[test]
    fn double_tap_boundaries() {
        // 299ms and 9px away on each axis: double
        let (mut engine, _id) = engine();
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 10);
        engine.handle_input(&mouse(PointerPhase::Down, 109.0, 109.0), 299);
        assert_eq!(engine.mode(), Mode::Sticky);

        // 301ms: single
        let (mut engine, _id) = self::engine();
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 10);
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 301);
        assert_eq!(engine.mode(), Mode::Dragging);

        // 11px on one axis: single
        let (mut engine, _id) = self::engine();
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 10);
        engine.handle_input(&mouse(PointerPhase::Down, 111.0, 100.0), 100);
        assert_eq!(engine.mode(), Mode::Dragging);
    }

    #[test]
    fn plain_click_commits_sticky_placement() {
        let (mut engine, id) = engine();

        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&mouse(PointerPhase::Up, 100.0, 100.0), 50);
        engine.handle_input(&mouse(PointerPhase::Down, 100.0, 100.0), 200);
        assert_eq!(engine.mode(), Mode::Sticky);

        engine.handle_input(&mouse(PointerPhase::Move, 400.0, 250.0), 300);

        // well past the double-tap window: a deliberate placement click
        assert!(engine.handle_input(&mouse(PointerPhase::Down, 400.0, 250.0), 2000));
        assert_eq!(engine.mode(), Mode::Idle);
        let target = engine.stage().target(id).unwrap();
        assert_eq!(target.rect.position(), Point::new(400.0, 250.0));
        assert_eq!(target.tint, Tint::Neutral);

        // the committing click was consumed: the target under the pointer
        // did not start a new drag
        assert!(engine.controller().subscriptions().is_empty());
    }

    #[test]
    fn resize_commits_and_clamps() {
        let (mut engine, id) = engine();

        // grab the bottom-right handle
        engine.handle_input(&mouse(PointerPhase::Down, 148.0, 128.0), 0);
        assert_eq!(engine.mode(), Mode::Resizing);

        engine.handle_input(&mouse(PointerPhase::Move, 198.0, 158.0), 16);
        let size = engine.stage().target(id).unwrap().rect.size();
        assert_eq!(size.width, 150.0);
        assert_eq!(size.height, 110.0);

        // drag far past the minimum
        engine.handle_input(&mouse(PointerPhase::Move, -500.0, -500.0), 32);
        let size = engine.stage().target(id).unwrap().rect.size();
        assert_eq!(size.width, 50.0);
        assert_eq!(size.height, 50.0);

        engine.handle_input(&mouse(PointerPhase::Up, -500.0, -500.0), 48);
        assert_eq!(engine.mode(), Mode::Idle);
        let target = engine.stage().target(id).unwrap();
        assert_eq!(target.rect.size().width, 50.0);
        // resize never moves the target
        assert_eq!(target.rect.position(), Point::new(50.0, 50.0));
    }

    #[test]
    fn touch_drag_and_multi_touch_abort() {
        let (mut engine, id) = engine();

        engine.handle_input(&touch(PointerPhase::Down, 60.0, 55.0), 0);
        assert_eq!(engine.mode(), Mode::Dragging);
        engine.handle_input(&touch(PointerPhase::Move, 200.0, 150.0), 500);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(190.0, 145.0)
        );

        let second_finger = RawInput::Touch {
            phase: PointerPhase::Down,
            touches: vec![Point::new(200.0, 150.0), Point::new(20.0, 20.0)],
            changed: vec![Point::new(20.0, 20.0)],
        };
        assert!(engine.handle_input(&second_finger, 600));
        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(50.0, 50.0)
        );
    }

    #[test]
    fn touch_double_tap_enters_sticky() {
        let (mut engine, id) = engine();

        engine.handle_input(&touch(PointerPhase::Down, 100.0, 100.0), 0);
        engine.handle_input(&touch(PointerPhase::Up, 100.0, 100.0), 60);
        engine.handle_input(&touch(PointerPhase::Down, 103.0, 98.0), 220);
        assert_eq!(engine.mode(), Mode::Sticky);

        engine.handle_input(&touch(PointerPhase::Move, 10.0, 10.0), 400);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(10.0, 10.0)
        );

        // mouse events synthesized by a hybrid device must not toggle the
        // touch-started sticky session off
        assert!(!engine.handle_input(&mouse(PointerPhase::Down, 10.0, 10.0), 2000));
        assert_eq!(engine.mode(), Mode::Sticky);

        // a plain touch tap does
        assert!(engine.handle_input(&touch(PointerPhase::Down, 10.0, 10.0), 4000));
        assert_eq!(engine.mode(), Mode::Idle);
    }

    #[test]
    fn no_listener_growth_across_gesture_cycles() {
        let (mut engine, _id) = engine();

        for cycle in 0..20u64 {
            let base = cycle * 10_000;
            // drag out and back so the geometry stays fixed across cycles
            engine.handle_input(&mouse(PointerPhase::Down, 60.0, 55.0), base);
            assert_eq!(engine.mode(), Mode::Dragging);
            engine.handle_input(&mouse(PointerPhase::Move, 70.0, 65.0), base + 16);
            engine.handle_input(&mouse(PointerPhase::Move, 60.0, 55.0), base + 24);
            engine.handle_input(&mouse(PointerPhase::Up, 60.0, 55.0), base + 32);
            assert_eq!(engine.mode(), Mode::Idle);
            assert!(engine.controller().subscriptions().is_empty());

            // sticky, aborted by Escape
            engine.handle_input(&mouse(PointerPhase::Down, 80.0, 75.0), base + 1000);
            engine.handle_input(&mouse(PointerPhase::Up, 80.0, 75.0), base + 1050);
            engine.handle_input(&mouse(PointerPhase::Down, 80.0, 75.0), base + 1200);
            assert_eq!(engine.mode(), Mode::Sticky);
            engine.handle_input(&RawInput::Key(KeyInput::Escape), base + 1300);
            assert_eq!(engine.mode(), Mode::Idle);
            assert!(engine.controller().subscriptions().is_empty());
        }
    }

    #[test]
    fn escape_during_drag_restores_position() {
        let (mut engine, id) = engine();

        engine.handle_input(&mouse(PointerPhase::Down, 60.0, 55.0), 0);
        engine.handle_input(&mouse(PointerPhase::Move, 500.0, 400.0), 16);
        assert!(engine.handle_input(&RawInput::Key(KeyInput::Escape), 32));

        assert_eq!(engine.mode(), Mode::Idle);
        assert_eq!(
            engine.stage().target(id).unwrap().rect.position(),
            Point::new(50.0, 50.0)
        );
    }
}
