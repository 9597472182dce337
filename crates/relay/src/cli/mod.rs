//! Command-line interface module.
//!
//! This module provides the argument parser and the prompt handler for the
//! relay binary.

mod commands;
mod run;

pub use commands::Cli;
pub use run::{INTERRUPT_EXIT_CODE, await_second_interrupt, run_prompt, watch_interrupts};
