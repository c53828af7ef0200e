//! A terminal-based maze editor and pathfinding visualizer.
//!
//! This crate implements an interactive board editor where walls, a start cell, and an end cell
//! are painted with a keyboard cursor, three classic search algorithms (depth-first,
//! breadth-first, and A*) that record their exploration as a step log, and a frame-by-frame
//! replay of that log over the board. Boards are saved to and loaded from plain-text `.maze`
//! files in the working directory.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod animate;
mod app;
mod boards;
mod cli;
mod events;
mod grid;
mod search;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
