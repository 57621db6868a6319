//! Terminal session and keyboard controls.
//!
//! The session owns raw mode and the alternate screen for the duration of a
//! run. Restoring happens in `Drop` as well, so a failed draw still leaves
//! the user's shell usable.

use std::io::{self, stdout, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::runner::{Command, Controls};

pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }

        match Self::open_backend(stdout) {
            Ok(terminal) => Ok(Self { terminal, restored: false }),
            Err(e) => {
                let mut out = io::stdout();
                let _ = execute!(out, LeaveAlternateScreen, cursor::Show);
                let _ = terminal::disable_raw_mode();
                Err(e)
            }
        }
    }

    fn open_backend(stdout: Stdout) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;
        Ok(terminal)
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leave the alternate screen and give the terminal back to the shell.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        terminal::disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Combine a run result with the result of restoring the terminal.
/// A run error wins; a restore error that would hide it is printed instead.
pub fn settle<T>(run: io::Result<T>, restore: io::Result<()>) -> io::Result<T> {
    match (run, restore) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(restore_err)) => Err(restore_err),
        (Err(run_err), Ok(())) => Err(run_err),
        (Err(run_err), Err(restore_err)) => {
            eprintln!("Failed to restore terminal: {}", restore_err);
            Err(run_err)
        }
    }
}

/// `q`, `Esc` and `Ctrl-C` end the run. Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Where [`KeyboardControls`] reads input from.
pub trait EventSource {
    /// Wait up to `timeout` for the next event. `None` means the timeout passed quietly.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// The real terminal: crossterm's poll followed by a read.
#[derive(Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

/// Paces the run loop by polling for keys until the pause elapses.
pub struct KeyboardControls<S = CrosstermEvents> {
    source: S,
}

impl KeyboardControls<CrosstermEvents> {
    pub fn new() -> Self {
        Self { source: CrosstermEvents }
    }
}

impl Default for KeyboardControls<CrosstermEvents> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSource> KeyboardControls<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: EventSource> Controls for KeyboardControls<S> {
    fn pause(&mut self, pause: Duration) -> io::Result<Command> {
        let deadline = Instant::now() + pause;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.source.next_event(remaining)? {
                None => return Ok(Command::Continue),
                Some(Event::Key(key)) if is_quit_key(&key) => return Ok(Command::Quit),
                Some(_) => {}
            }
            if remaining.is_zero() {
                return Ok(Command::Continue);
            }
        }
    }
}
