//! Command-line interface for Roofline.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    Cli, Commands, CompareArgs, ContactArgs, FavoritesCommand, ListArgs, NewsletterArgs,
    PropertiesCommand, QuoteArgs, ReviewArgs, ShowArgs,
};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
