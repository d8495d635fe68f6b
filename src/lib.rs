//! Grid snake: a fixed-rate tick loop over a 24x24 board with weighted food
//! and instant restart after every death.

pub mod app;
pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod input;
pub mod logging;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
