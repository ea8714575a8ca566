//! Script-driven harness for the slideshow engine.
//!
//! Runs a [`MemoryDeck`](slideshow_core::MemoryDeck) through a list of
//! navigation commands and prints the notification stream, so transition
//! behaviour can be inspected without a renderer.

pub mod runner;
pub mod script;

pub use runner::{RunConfig, RunReport, format_event, run_script};
pub use script::{ScriptCommand, ScriptError, parse_script};
