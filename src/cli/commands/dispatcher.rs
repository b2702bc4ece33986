//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, FavoritesCommand, PropertiesCommand};
use crate::error::Result;
use crate::ui::UserInterface;

use super::compare::CompareCommand;
use super::completions::CompletionsCommand;
use super::context::CommandContext;
use super::favorites::{
    CheckFavoriteCommand, ClearFavoritesCommand, ListFavoritesCommand, ToggleFavoriteCommand,
};
use super::forms::{ContactCommand, QuoteCommand, ReviewCommand};
use super::newsletter::NewsletterCommand;
use super::properties::{FacetsCommand, ListPropertiesCommand, ShowPropertyCommand};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    ///
    /// Returns a [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Completions never need config or network access.
        if let Commands::Completions(args) = &cli.command {
            return CompletionsCommand::new(args.clone()).execute(ui);
        }

        let context = CommandContext::from_cli(&self.project_root, cli)?;

        match &cli.command {
            Commands::Properties(PropertiesCommand::List(args)) => {
                ListPropertiesCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Properties(PropertiesCommand::Show(args)) => {
                ShowPropertyCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Properties(PropertiesCommand::Facets(args)) => {
                FacetsCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Properties(PropertiesCommand::Review(args)) => {
                ReviewCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Properties(PropertiesCommand::Quote(args)) => {
                QuoteCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Favorites(FavoritesCommand::List { json }) => {
                ListFavoritesCommand::new(&context, *json).execute(ui)
            }
            Commands::Favorites(FavoritesCommand::Toggle { id, offline }) => {
                ToggleFavoriteCommand::new(&context, id, *offline).execute(ui)
            }
            Commands::Favorites(FavoritesCommand::Check { id }) => {
                CheckFavoriteCommand::new(&context, id).execute(ui)
            }
            Commands::Favorites(FavoritesCommand::Clear { force }) => {
                ClearFavoritesCommand::new(&context, *force).execute(ui)
            }
            Commands::Compare(args) => CompareCommand::new(&context, args.clone()).execute(ui),
            Commands::Newsletter(args) => {
                NewsletterCommand::new(&context, args.clone()).execute(ui)
            }
            Commands::Contact(args) => ContactCommand::new(&context, args.clone()).execute(ui),
            Commands::Completions(args) => CompletionsCommand::new(args.clone()).execute(ui),
        }
    }
}
