//! Terminal input driver and the translation from crossterm events into the
//! engine's raw input model.
//!
//! Terminals only deliver mouse and keyboard events; the touch side of the
//! raw model is exercised by hosts with a touch surface (and by tests).

use std::io;
use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEventKind,
};

use crate::pointer::{KeyInput, PointerPhase, RawInput};

pub trait InputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool>;
    fn read(&mut self) -> io::Result<Event>;
    fn set_mouse_capture(&mut self, _enabled: bool) -> io::Result<()> {
        Ok(())
    }
}

impl<T: InputDriver + ?Sized> InputDriver for &mut T {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        (**self).poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        (**self).read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        (**self).set_mouse_capture(enabled)
    }
}

#[derive(Debug, Default)]
pub struct ConsoleInputDriver;

impl ConsoleInputDriver {
    pub fn new() -> Self {
        Self
    }
}

impl InputDriver for ConsoleInputDriver {
    fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    fn read(&mut self) -> io::Result<Event> {
        crossterm::event::read()
    }

    fn set_mouse_capture(&mut self, enabled: bool) -> io::Result<()> {
        if enabled {
            crossterm::execute!(std::io::stdout(), EnableMouseCapture)
        } else {
            crossterm::execute!(std::io::stdout(), DisableMouseCapture)
        }
    }
}

/// Map a crossterm event onto the engine's raw input model, treating one
/// terminal cell as one pixel. Events the engine does not consume (scroll,
/// non-Escape keys, other buttons) map to `None`.
pub fn to_raw_input(event: &Event) -> Option<RawInput> {
    match event {
        Event::Mouse(mouse) => {
            let phase = match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => PointerPhase::Down,
                MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                    PointerPhase::Move
                }
                MouseEventKind::Up(MouseButton::Left) => PointerPhase::Up,
                _ => return None,
            };
            Some(RawInput::mouse(
                phase,
                f32::from(mouse.column),
                f32::from(mouse.row),
            ))
        }
        Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc => {
            Some(RawInput::Key(KeyInput::Escape))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn left_button_maps_to_pointer_phases() {
        let down = to_raw_input(&mouse_event(MouseEventKind::Down(MouseButton::Left), 3, 7));
        assert_eq!(down, Some(RawInput::mouse(PointerPhase::Down, 3.0, 7.0)));

        let drag = to_raw_input(&mouse_event(MouseEventKind::Drag(MouseButton::Left), 4, 7));
        assert_eq!(drag, Some(RawInput::mouse(PointerPhase::Move, 4.0, 7.0)));

        let hover = to_raw_input(&mouse_event(MouseEventKind::Moved, 5, 7));
        assert_eq!(hover, Some(RawInput::mouse(PointerPhase::Move, 5.0, 7.0)));

        let up = to_raw_input(&mouse_event(MouseEventKind::Up(MouseButton::Left), 5, 8));
        assert_eq!(up, Some(RawInput::mouse(PointerPhase::Up, 5.0, 8.0)));
    }

    #[test]
    fn scroll_and_other_buttons_are_dropped() {
        assert!(to_raw_input(&mouse_event(MouseEventKind::ScrollDown, 0, 0)).is_none());
        assert!(
            to_raw_input(&mouse_event(MouseEventKind::Down(MouseButton::Right), 0, 0)).is_none()
        );
    }

    #[test]
    fn escape_press_maps_to_key_input() {
        let mut key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        key.kind = KeyEventKind::Press;
        assert_eq!(
            to_raw_input(&Event::Key(key)),
            Some(RawInput::Key(KeyInput::Escape))
        );

        let mut release = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(to_raw_input(&Event::Key(release)).is_none());

        let other = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(to_raw_input(&Event::Key(other)).is_none());
    }
}
