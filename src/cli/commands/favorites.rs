//! Favorites commands: `favorites list|toggle|check|clear`.

use crate::error::Result;
use crate::property::PropertyRef;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{favorites_table, print_json};

/// Exit code for `favorites check` when the id is not saved.
pub const NOT_FAVORITED_EXIT_CODE: i32 = 2;

/// The `favorites list` command.
pub struct ListFavoritesCommand {
    context: CommandContext,
    json: bool,
}

impl ListFavoritesCommand {
    pub fn new(context: &CommandContext, json: bool) -> Self {
        Self {
            context: context.clone(),
            json,
        }
    }
}

impl Command for ListFavoritesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.context.favorites();

        if self.json {
            print_json(ui, store.list())?;
            return Ok(CommandResult::success());
        }

        if store.is_empty() {
            ui.message("No favorites yet. Save one with 'roofline favorites toggle <id>'.");
            return Ok(CommandResult::success());
        }

        let noun = if store.len() == 1 {
            "favorite"
        } else {
            "favorites"
        };
        ui.show_header(&format!("{} {}", store.len(), noun));
        ui.message(&favorites_table(store.list()).render());
        Ok(CommandResult::success())
    }
}

/// The `favorites toggle` command.
pub struct ToggleFavoriteCommand {
    context: CommandContext,
    id: String,
    offline: bool,
}

impl ToggleFavoriteCommand {
    pub fn new(context: &CommandContext, id: &str, offline: bool) -> Self {
        Self {
            context: context.clone(),
            id: id.trim().to_string(),
            offline,
        }
    }

    /// Reference to save: fetched details when online, the bare id otherwise.
    fn reference(&self, ui: &mut dyn UserInterface) -> Result<PropertyRef> {
        if self.offline {
            return Ok(PropertyRef::new(self.id.as_str()));
        }

        let client = self.context.api_client()?;
        let mut spinner = ui.start_spinner("Fetching listing...");
        match client.get_property(&self.id) {
            Ok(property) => {
                spinner.finish_clear();
                Ok(property.to_ref())
            }
            Err(e) => {
                spinner.finish_error("Could not fetch listing");
                Err(e)
            }
        }
    }
}

impl Command for ToggleFavoriteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.id.is_empty() {
            ui.error("Property id must not be empty");
            return Ok(CommandResult::failure(1));
        }

        let mut store = self.context.favorites();

        // Removal only needs the id.
        let reference = if store.is_favorited(&self.id) {
            PropertyRef::new(self.id.as_str())
        } else {
            self.reference(ui)?
        };

        let label = store
            .get(&self.id)
            .map(|r| r.label().to_string())
            .unwrap_or_else(|| reference.label().to_string());

        if store.toggle(reference) {
            ui.success(&format!("Added '{}' to favorites", label));
        } else {
            ui.success(&format!("Removed '{}' from favorites", label));
        }

        if !store.is_persistent() {
            ui.warning("Storage is disabled; this change lasts for this run only");
        }
        Ok(CommandResult::success())
    }
}

/// The `favorites check` command.
pub struct CheckFavoriteCommand {
    context: CommandContext,
    id: String,
}

impl CheckFavoriteCommand {
    pub fn new(context: &CommandContext, id: &str) -> Self {
        Self {
            context: context.clone(),
            id: id.trim().to_string(),
        }
    }
}

impl Command for CheckFavoriteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.context.favorites().is_favorited(&self.id) {
            ui.message(&format!("{} is a favorite", self.id));
            Ok(CommandResult::success())
        } else {
            ui.message(&format!("{} is not a favorite", self.id));
            Ok(CommandResult::failure(NOT_FAVORITED_EXIT_CODE))
        }
    }
}

/// The `favorites clear` command.
pub struct ClearFavoritesCommand {
    context: CommandContext,
    force: bool,
}

impl ClearFavoritesCommand {
    pub fn new(context: &CommandContext, force: bool) -> Self {
        Self {
            context: context.clone(),
            force,
        }
    }
}

impl Command for ClearFavoritesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.context.favorites();

        if store.is_empty() {
            ui.message("No favorites to clear");
            return Ok(CommandResult::success());
        }

        let count = store.len();
        if !self.force && !ui.confirm(&format!("Remove all {} favorites?", count), false)? {
            ui.warning("Nothing cleared (pass --force to skip the prompt)");
            return Ok(CommandResult::success());
        }

        store.clear();
        ui.success(&format!("Cleared {} favorites", count));
        Ok(CommandResult::success())
    }
}
