//! Interactive and scriptable shell over [`crate::core::ExpenseManager`].

pub mod commands;
pub mod core;
pub mod forms;
mod help;
mod io;
pub mod output;
mod shell;
mod shell_context;
pub mod ui;

pub use shell::{run_cli, SCRIPT_ENV};
