//! The simulation run loop.
//!
//! Each iteration draws the current generation, advances the grid, then
//! pauses through [`Controls`]. The pause doubles as the input check, so a
//! quit request ends the run at the next pause instead of being ignored.

use std::io;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::config::LifeConfig;
use crate::grid::Grid;
use crate::render;

/// What the input side wants after a pause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Continue,
    Quit,
}

/// Source of pacing and quit requests for the run loop.
pub trait Controls {
    /// Wait up to `pause`. Returns early with [`Command::Quit`] when the user asks to stop.
    fn pause(&mut self, pause: Duration) -> io::Result<Command>;
}

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    GenerationLimit,
    Quit,
    Stable,
}

/// Stopping conditions for [`run`].
#[derive(Clone, Copy, Debug)]
pub struct RunLimit {
    pub max_generations: u64,
    pub stop_when_stable: bool,
}

impl From<&LifeConfig> for RunLimit {
    fn from(config: &LifeConfig) -> Self {
        Self {
            max_generations: config.max_generations,
            stop_when_stable: config.stop_when_stable,
        }
    }
}

/// Grid plus the index of the generation it currently holds.
pub struct Simulation {
    pub grid: Grid,
    pub generation: u64,
}

impl Simulation {
    pub fn new(grid: Grid) -> Self {
        Self { grid, generation: 0 }
    }

    /// Advance one generation, returning the number of changed cells.
    pub fn step(&mut self) -> usize {
        let changed = self.grid.advance();
        self.generation += 1;
        changed
    }
}

/// Outcome of a finished run.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub started: DateTime<Local>,
    pub elapsed: Duration,
    pub generations: u64,
    pub final_alive: usize,
    pub reason: StopReason,
}

/// Draw one frame: status lines followed by the grid.
pub fn draw_frame<B: Backend>(
    terminal: &mut Terminal<B>,
    sim: &Simulation,
    speed_ms: u64,
) -> io::Result<()> {
    let text = render::frame_text(&sim.grid, speed_ms, sim.generation);
    terminal.draw(|f| {
        f.render_widget(Paragraph::new(text), f.area());
    })?;
    Ok(())
}

/// Run until a limit is reached or the controls ask to quit.
pub fn run<B: Backend, C: Controls>(
    terminal: &mut Terminal<B>,
    sim: &mut Simulation,
    controls: &mut C,
    limit: RunLimit,
    speed_ms: u64,
) -> io::Result<RunOutcome> {
    let started = Local::now();
    let clock = Instant::now();
    let pause = Duration::from_millis(speed_ms);

    let reason = loop {
        if sim.generation >= limit.max_generations {
            break StopReason::GenerationLimit;
        }

        draw_frame(terminal, sim, speed_ms)?;

        let changed = sim.step();
        if limit.stop_when_stable && changed == 0 {
            break StopReason::Stable;
        }

        if controls.pause(pause)? == Command::Quit {
            break StopReason::Quit;
        }
    };

    Ok(RunOutcome {
        started,
        elapsed: clock.elapsed(),
        generations: sim.generation,
        final_alive: sim.grid.live_count(),
        reason,
    })
}
