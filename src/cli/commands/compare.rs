//! The `compare` command.

use crate::cli::args::CompareArgs;
use crate::compare::{CompareStore, CompareToggle};
use crate::error::{Result, RooflineError};
use crate::property::PropertyId;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{comparison_table, print_json};

/// Fetches listings and shows them side by side.
pub struct CompareCommand {
    context: CommandContext,
    args: CompareArgs,
}

impl CompareCommand {
    pub fn new(context: &CommandContext, args: CompareArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Fill a compare selection from the arguments, warning about ids that
    /// do not fit.
    fn selection(&self, ui: &mut dyn UserInterface) -> CompareStore {
        let candidates: Vec<PropertyId> = if self.args.favorites {
            self.context.favorites().ids().cloned().collect()
        } else {
            self.args
                .ids
                .iter()
                .map(|id| PropertyId::new(id.trim()))
                .filter(|id| !id.is_blank())
                .collect()
        };

        let mut store = self.context.compare_store();
        for id in candidates {
            if let CompareToggle::Rejected { limit } = store.add(id.clone()) {
                ui.warning(&format!(
                    "Comparing at most {} listings; skipped {}",
                    limit, id
                ));
            }
        }
        store
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.selection(ui);
        if store.is_empty() {
            return Err(RooflineError::InvalidInput {
                message: if self.args.favorites {
                    "no favorites to compare".to_string()
                } else {
                    "pass at least one listing id".to_string()
                },
            });
        }

        let client = self.context.api_client()?;
        let mut spinner = ui.start_spinner(&format!("Comparing {}...", store.query_value()));
        let properties = match client.compare_properties(store.ids()) {
            Ok(properties) => {
                spinner.finish_clear();
                properties
            }
            Err(e) => {
                spinner.finish_error("Could not load listings");
                return Err(e);
            }
        };

        if self.args.json {
            print_json(ui, &properties)?;
            return Ok(CommandResult::success());
        }

        if properties.is_empty() {
            ui.warning("None of these listings were found");
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Comparing {} listings", properties.len()));
        ui.message(&comparison_table(&properties).render());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RooflineConfig;
    use crate::property::PropertyRef;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn context(api_url: String, data_dir: &TempDir, limit: usize) -> CommandContext {
        let mut config = RooflineConfig::default();
        config.api.base_url = api_url;
        config.storage.data_dir = Some(data_dir.path().to_path_buf());
        config.compare.limit = limit;
        CommandContext::new(config)
    }

    fn args(ids: &[&str]) -> CompareArgs {
        CompareArgs {
            ids: ids.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn compares_ids_side_by_side() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/properties/compare")
                .query_param("ids", "a,b");
            then.status(200).json_body(json!([
                { "_id": "a", "title": "Villa", "bedrooms": 4 },
                { "_id": "b", "title": "Flat", "bedrooms": 2 }
            ]));
        });

        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        CompareCommand::new(&context(server.url("/api"), &temp, 4), args(&["a", "b", "a"]))
            .execute(&mut ui)
            .unwrap();

        mock.assert();
        assert_eq!(ui.headers(), ["Comparing 2 listings"]);
        let bedrooms = ui
            .output()
            .lines()
            .find(|l| l.contains("Bedrooms"))
            .map(String::from)
            .unwrap();
        assert!(bedrooms.contains('4') && bedrooms.contains('2'));
    }

    #[test]
    fn extra_ids_are_rejected_with_warning() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/properties/compare")
                .query_param("ids", "a,b");
            then.status(200).json_body(json!([]));
        });

        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        CompareCommand::new(&context(server.url("/api"), &temp, 2), args(&["a", "b", "c"]))
            .execute(&mut ui)
            .unwrap();

        mock.assert();
        assert!(ui.has_warning("skipped c"));
    }

    #[test]
    fn compares_favorites() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/properties/compare")
                .query_param("ids", "f1,f2");
            then.status(200)
                .json_body(json!([{ "_id": "f1" }, { "_id": "f2" }]));
        });

        let temp = TempDir::new().unwrap();
        let context = context(server.url("/api"), &temp, 4);
        let mut favorites = context.favorites();
        favorites.toggle(PropertyRef::new("f1"));
        favorites.toggle(PropertyRef::new("f2"));

        let compare_args = CompareArgs {
            favorites: true,
            json: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        CompareCommand::new(&context, compare_args)
            .execute(&mut ui)
            .unwrap();

        mock.assert();
        assert!(ui.output().contains("\"_id\": \"f2\""));
    }

    #[test]
    fn no_favorites_is_an_error() {
        let temp = TempDir::new().unwrap();
        let compare_args = CompareArgs {
            favorites: true,
            ..Default::default()
        };
        let err = CompareCommand::new(
            &context("http://127.0.0.1:9/api".into(), &temp, 4),
            compare_args,
        )
        .execute(&mut MockUI::new())
        .unwrap_err();
        assert!(err.to_string().contains("no favorites"));
    }
}
