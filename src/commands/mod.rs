//! Command implementations

pub mod console;

pub use console::run_console;
