//! Windowed front end for the Game of Life engine.
//!
//! A macroquad frame loop polls the keyboard and mouse, turns presses into
//! [`gol_core::Command`]s, feeds the frame time to the engine, and draws the
//! grid with its help overlay and status line.

pub mod app;
pub mod input;
pub mod render;
pub mod theme;
