use std::io;
use std::panic;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::warn;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;

use crate::app::{Frontend, Notifier};
use crate::config::THEME;
use crate::game::Session;
use crate::input::{GameInput, is_acknowledge_key, map_key_event};
use crate::renderer;
use crate::ui::menu::render_notice_over;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Owns terminal lifecycle (raw mode + alternate screen) for one game run
/// and acts as the game's frontend.
///
/// On drop, this type restores terminal state best-effort.
pub struct TerminalSession {
    terminal: AppTerminal,
    /// Last game frame, shown behind blocking notices.
    last_frame: Option<Buffer>,
}

impl TerminalSession {
    /// Enters raw mode, switches to alternate screen, and creates a ratatui terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(error) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error);
        }

        let backend = CrosstermBackend::new(stdout);
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self {
                terminal,
                last_frame: None,
            }),
            Err(error) => {
                let _ = cleanup_terminal_best_effort();
                Err(error)
            }
        }
    }

    fn draw_notice(&mut self, message: &str) -> io::Result<()> {
        let backdrop = self.last_frame.as_ref();
        self.terminal
            .draw(|frame| render_notice_over(frame, backdrop, message, &THEME))?;
        Ok(())
    }
}

impl Notifier for TerminalSession {
    /// Shows the notice over the last game frame and blocks until it is
    /// acknowledged.
    fn announce(&mut self, message: &str) -> io::Result<()> {
        self.draw_notice(message)?;

        loop {
            match event::read()? {
                Event::Key(key) if is_acknowledge_key(key) => return Ok(()),
                Event::Resize(..) => self.draw_notice(message)?,
                _ => {}
            }
        }
    }
}

impl Frontend for TerminalSession {
    fn next_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }

            if let Event::Key(key) = event::read()? {
                if let Some(input) = map_key_event(key) {
                    return Ok(Some(input));
                }
            }

            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }

    fn redraw<R>(&mut self, session: &Session<R>, elapsed: Duration) -> io::Result<()> {
        let completed = self
            .terminal
            .draw(|frame| renderer::render(frame, session, elapsed, &THEME))?;
        self.last_frame = Some(completed.buffer.clone());
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = cleanup_terminal_best_effort();
    }
}

/// Restores the terminal before the default panic message is printed.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if let Err(error) = cleanup_terminal_best_effort() {
            warn!("terminal restore after panic failed: {error}");
        }
        default_hook(panic_info);
    }));
}

fn cleanup_terminal_best_effort() -> io::Result<()> {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, Show, LeaveAlternateScreen)
}
