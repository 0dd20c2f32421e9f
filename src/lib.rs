//! # Connect Four
//!
//! Rules engine for two-player Connect Four on a fixed 4x4 grid, plus a
//! terminal front-end built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine
//! - [`ui`] — Terminal UI: board view and key handling
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — File-backed tracing subscriber
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
