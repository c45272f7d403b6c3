use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::driver::InputDriver;

pub enum ControlFlow {
    Continue,
    Quit,
}

/// Synchronous poll-and-dispatch loop that drives the demo UI thread.
///
/// All interaction logic runs inside the handler this loop invokes, so the
/// single-threaded ordering guarantee the engine relies on (down before move
/// before up, per device) is exactly the delivery order of the host event
/// queue.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run until the handler requests a quit.
    ///
    /// The handler receives `Some(event)` for each input event and `None`
    /// when the poll interval elapses quietly (the redraw tick). Pending
    /// events are drained in a burst before the next tick so a fast drag
    /// never falls behind the input stream.
    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                return Ok(());
            }
            if !self.driver.poll(self.poll_interval)? {
                continue;
            }
            loop {
                let event = self.driver.read()?;
                if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                    return Ok(());
                }
                if !self.driver.poll(Duration::from_millis(0))? {
                    break;
                }
            }
        }
    }
}
