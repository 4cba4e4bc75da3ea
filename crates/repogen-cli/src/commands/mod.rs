//! Command handlers.
//!
//! Each submodule exposes a single `execute` function; `main.rs` dispatches
//! to them and nothing else.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
