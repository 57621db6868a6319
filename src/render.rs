//! Text rendering of the grid and the per-frame status block.
//!
//! Every cell takes a two-character field: the glyph followed by a space.
//! Plain text is used for snapshots and tests; the styled lines feed the
//! ratatui frame, where live cells are highlighted.

use ratatui::prelude::*;

use crate::grid::{Cell, Grid};

pub const ALIVE_GLYPH: char = '■';
pub const DEAD_GLYPH: char = '·';

/// Width in terminal columns of one rendered cell.
pub const CELL_WIDTH: usize = 2;

/// Number of status lines drawn above the grid.
pub const STATUS_LINES: usize = 3;

fn glyph(cell: Cell) -> char {
    if cell.is_alive() {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

fn field(cell: Cell) -> String {
    format!("{:<width$}", glyph(cell), width = CELL_WIDTH)
}

/// Render the grid as plain text, one line per row.
pub fn render_text(grid: &Grid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() * CELL_WIDTH * 3 + 1));
    for row in 0..grid.rows() {
        for &cell in grid.row(row) {
            out.push_str(&field(cell));
        }
        out.push('\n');
    }
    out
}

fn cell_style(cell: Cell) -> Style {
    if cell.is_alive() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Render the grid as styled terminal lines.
/// Adjacent cells with the same state are merged into one span.
pub fn grid_lines(grid: &Grid) -> Vec<Line<'static>> {
    (0..grid.rows())
        .map(|row| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_state: Option<Cell> = None;

            for &cell in grid.row(row) {
                if run_state != Some(cell) {
                    if let Some(state) = run_state {
                        spans.push(Span::styled(std::mem::take(&mut run), cell_style(state)));
                    }
                    run_state = Some(cell);
                }
                run.push_str(&field(cell));
            }
            if let Some(state) = run_state {
                spans.push(Span::styled(run, cell_style(state)));
            }

            Line::from(spans)
        })
        .collect()
}

/// The three status lines shown above every frame.
pub fn status_lines(speed_ms: u64, generation: u64, alive: usize) -> [String; STATUS_LINES] {
    [
        format!("Speed(ms): {}", speed_ms),
        format!("Generation: {}", generation),
        format!("Alive: {}", alive),
    ]
}

/// Status block followed by the grid, ready to draw as one paragraph.
pub fn frame_text(grid: &Grid, speed_ms: u64, generation: u64) -> Text<'static> {
    let status_style = Style::default().fg(Color::White);
    let mut lines: Vec<Line<'static>> = status_lines(speed_ms, generation, grid.live_count())
        .into_iter()
        .map(|s| Line::styled(s, status_style))
        .collect();
    lines.extend(grid_lines(grid));
    Text::from(lines)
}
