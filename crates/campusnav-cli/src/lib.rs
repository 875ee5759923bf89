//! Campus navigator CLI library.
//!
//! Subcommand handlers, output formatting, terminal styling and logging
//! setup for the `campusnav-cli` binary.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;
