//! Psico Assist is a terminal help assistant for the Psico Assist
//! patient-management app.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the help-chat widget, its canned responses and timing,
//!   toast notifications, configuration, and the interactive [`core::app::App`].
//! - [`ui`] renders the terminal interface and runs the event loop that feeds
//!   key presses, clicks and timer ticks into the app.
//! - [`forms`] validates treatment-plan style forms described in TOML.
//! - [`utils`] holds the transcript log, clipboard and text helpers.
//! - [`logging`] installs the `tracing` subscriber.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod cli;
pub mod core;
pub mod forms;
pub mod logging;
pub mod ui;
pub mod utils;
