//! tierboard command-line components.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod session;
pub mod summary;
