use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{DisableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::{Frame, Terminal};

use drag_stage::driver::{ConsoleInputDriver, InputDriver, to_raw_input};
use drag_stage::event_loop::{ControlFlow, EventLoop};
use drag_stage::{EngineConfig, InteractionEngine, PixelRect, Tint, tracing_sub};

/// Interactive demo: drag the boxes with the mouse, double-click to make one
/// stick to the pointer, grab the bottom-right corner to resize, Esc to
/// abort the active gesture.
#[derive(Debug, Parser)]
#[command(name = "drag-stage", version, about)]
struct Cli {
    /// Number of demo targets to place on the stage.
    #[arg(long, default_value_t = 3)]
    targets: usize,

    /// Minimum target size, in terminal cells.
    #[arg(long, default_value_t = 4.0)]
    min_size: f32,

    /// Resize-handle hit region size, in terminal cells.
    #[arg(long, default_value_t = 2.0)]
    handle_extent: f32,

    /// Log session transitions to stderr.
    #[arg(long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_sub::init_default();
    }

    let mut engine = InteractionEngine::new(EngineConfig {
        min_size: cli.min_size,
        handle_extent: cli.handle_extent,
    });
    for i in 0..cli.targets {
        let offset = i as f32;
        engine.attach_target(PixelRect::new(
            4.0 + offset * 8.0,
            2.0 + offset * 4.0,
            16.0,
            8.0,
        ));
    }

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut driver = ConsoleInputDriver::new();
    driver.set_mouse_capture(true)?;

    let epoch = Instant::now();
    let mut event_loop = EventLoop::new(driver, Duration::from_millis(16));
    let result = event_loop.run(|_, event| {
        match event {
            Some(event) => {
                if should_quit(&event) {
                    return Ok(ControlFlow::Quit);
                }
                if let Some(raw) = to_raw_input(&event) {
                    let now_ms = epoch.elapsed().as_millis() as u64;
                    engine.handle_input(&raw, now_ms);
                }
            }
            None => {
                terminal.draw(|frame| render(frame, &engine))?;
            }
        }
        Ok(ControlFlow::Continue)
    });

    terminal::disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn should_quit(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key)
            if key.kind == KeyEventKind::Press
                && (key.code == KeyCode::Char('q')
                    || (key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)))
    )
}

fn render(frame: &mut Frame, engine: &InteractionEngine) {
    let area = frame.area();
    for (_id, target) in engine.stage().iter_z() {
        let Some(rect) = cell_rect(target.rect, area) else {
            continue;
        };
        let color = match target.tint {
            Tint::Neutral => Color::Red,
            Tint::Active => Color::Green,
        };
        frame.render_widget(Block::default().style(Style::default().bg(color)), rect);
        // mark the resize-handle corner
        let corner_x = rect.x + rect.width.saturating_sub(1);
        let corner_y = rect.y + rect.height.saturating_sub(1);
        if let Some(cell) = frame.buffer_mut().cell_mut((corner_x, corner_y)) {
            cell.set_symbol("◢");
            cell.set_style(Style::default().fg(Color::Gray).bg(color));
        }
    }

    if area.height > 0 {
        let status = Rect {
            x: area.x,
            y: area.y + area.height - 1,
            width: area.width,
            height: 1,
        };
        let line = format!(
            " mode: {:?}   drag: press+move | sticky: double-click | resize: corner | Esc aborts | q quits",
            engine.mode()
        );
        frame.render_widget(
            Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
            status,
        );
    }
}

/// Clamp a pixel box (one cell per pixel) to the drawable area. Returns
/// `None` when the visible intersection is empty.
fn cell_rect(rect: PixelRect, area: Rect) -> Option<Rect> {
    let left = rect.left.round() as i32;
    let top = rect.top.round() as i32;
    let right = (rect.left + rect.width).round() as i32;
    let bottom = (rect.top + rect.height).round() as i32;

    let area_right = i32::from(area.x) + i32::from(area.width);
    let area_bottom = i32::from(area.y) + i32::from(area.height);
    let x0 = left.max(i32::from(area.x));
    let y0 = top.max(i32::from(area.y));
    let x1 = right.min(area_right);
    let y1 = bottom.min(area_bottom);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(Rect {
        x: x0 as u16,
        y: y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}
