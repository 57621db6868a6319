//! Conway's Game of Life in the terminal.
//!
//! Re-exports modules for use by the binary and tests.

pub mod config;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod report;
pub mod runner;
pub mod terminal;
pub mod tilemap;
