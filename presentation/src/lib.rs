//! Presentation layer for storefront
//!
//! This crate contains the CLI definition, console formatting, the loading
//! spinner and the interactive shop REPL.

pub mod cli;
pub mod output;
pub mod progress;
pub mod shop;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::LoadingSpinner;
pub use shop::ShopRepl;
