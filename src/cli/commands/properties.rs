//! Listing commands: `properties list`, `properties show`, `properties facets`.

use crate::cli::args::{FacetsArgs, ListArgs, ShowArgs};
use crate::error::{Result, RooflineError};
use crate::filters::{derive_filter_options, FacetField, PropertyQuery};
use crate::property::format_price;
use crate::ui::{should_use_colors, RooflineTheme, UserInterface};

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};
use super::display::{listing_table, print_json, show_property};

fn theme() -> RooflineTheme {
    if should_use_colors() {
        RooflineTheme::new()
    } else {
        RooflineTheme::plain()
    }
}

/// The `properties list` command.
pub struct ListPropertiesCommand {
    context: CommandContext,
    args: ListArgs,
}

impl ListPropertiesCommand {
    pub fn new(context: &CommandContext, args: ListArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }

    /// Translate the CLI flags into a listing query.
    ///
    /// `--filter` pairs are read first, then the dedicated flags override.
    pub fn query(&self) -> Result<PropertyQuery> {
        for (name, price) in [
            ("--price-min", self.args.price_min),
            ("--price-max", self.args.price_max),
        ] {
            if let Some(p) = price.filter(|p| !p.is_finite() || *p < 0.0) {
                return Err(RooflineError::InvalidInput {
                    message: format!("{} must be a non-negative number, got {}", name, p),
                });
            }
        }
        if self.args.page == Some(0) {
            return Err(RooflineError::InvalidInput {
                message: "--page starts at 1".to_string(),
            });
        }

        let pairs = self
            .args
            .filters
            .iter()
            .map(String::as_str)
            .map(split_filter)
            .collect::<Result<Vec<_>>>()?;
        let mut query = PropertyQuery::from_pairs(pairs)?;

        let facets = [
            (FacetField::City, &self.args.city),
            (FacetField::BhkType, &self.args.bhk_type),
            (FacetField::PropertyType, &self.args.property_type),
            (FacetField::Furnishing, &self.args.furnishing),
            (FacetField::TransactionType, &self.args.transaction_type),
            (FacetField::Status, &self.args.status),
        ];

        if let Some(search) = &self.args.search {
            query = query.with_search(search.as_str());
        }
        for (field, value) in facets {
            if let Some(value) = value {
                query = query.with_facet(field, value.as_str());
            }
        }
        if self.args.price_min.is_some() {
            query.price_min = self.args.price_min;
        }
        if self.args.price_max.is_some() {
            query.price_max = self.args.price_max;
        }
        if let Some(page) = self.args.page {
            query = query.with_page(page);
        }
        Ok(query)
    }
}

fn split_filter(filter: &str) -> Result<(&str, &str)> {
    filter
        .split_once('=')
        .map(|(key, value)| (key.trim(), value))
        .ok_or_else(|| RooflineError::InvalidInput {
            message: format!("--filter expects KEY=VALUE, got '{}'", filter),
        })
}

impl Command for ListPropertiesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let query = self.query()?;
        let client = self.context.api_client()?;

        let mut spinner = ui.start_spinner("Loading listings...");
        let page = match client.list_properties(&query) {
            Ok(page) => {
                spinner.finish_clear();
                page
            }
            Err(e) => {
                spinner.finish_error("Could not load listings");
                return Err(e);
            }
        };

        if self.args.json {
            print_json(ui, &page)?;
            return Ok(CommandResult::success());
        }

        if page.properties.is_empty() {
            ui.warning("No listings match these filters");
            return Ok(CommandResult::success());
        }

        let favorites = self.context.favorites();
        let theme = theme();
        ui.show_header("Listings");
        ui.message(&listing_table(&page.properties, &favorites, &theme).render());
        ui.message(&format!(
            "{}",
            theme
                .dim
                .apply_to(format!("Page {} of {}", page.page, page.total_pages))
        ));
        if page.has_next() {
            ui.message(&format!(
                "{}",
                theme
                    .dim
                    .apply_to(format!("Next page: --page {}", page.page + 1))
            ));
        }

        Ok(CommandResult::success())
    }
}

/// The `properties show` command.
pub struct ShowPropertyCommand {
    context: CommandContext,
    args: ShowArgs,
}

impl ShowPropertyCommand {
    pub fn new(context: &CommandContext, args: ShowArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for ShowPropertyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = self.context.api_client()?;
        let property = client.get_property(&self.args.id)?;

        if self.args.json {
            print_json(ui, &property)?;
            return Ok(CommandResult::success());
        }

        let favorited = self.context.favorites().is_favorited(property.id.as_str());
        show_property(ui, &property, favorited, client.base_url(), &theme());
        Ok(CommandResult::success())
    }
}

/// The `properties facets` command.
pub struct FacetsCommand {
    context: CommandContext,
    args: FacetsArgs,
}

impl FacetsCommand {
    pub fn new(context: &CommandContext, args: FacetsArgs) -> Self {
        Self {
            context: context.clone(),
            args,
        }
    }
}

impl Command for FacetsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let client = self.context.api_client()?;

        let mut spinner = ui.start_spinner("Loading filter options...");
        let properties = match client.all_properties() {
            Ok(properties) => {
                spinner.finish_clear();
                properties
            }
            Err(e) => {
                spinner.finish_error("Could not load listings");
                return Err(e);
            }
        };
        let options = derive_filter_options(&properties);

        if self.args.json {
            print_json(ui, &options)?;
            return Ok(CommandResult::success());
        }

        let theme = theme();
        ui.show_header("Filters");
        for field in FacetField::ALL {
            let values = options.options(field);
            let shown = if values.is_empty() {
                "-".to_string()
            } else {
                values.join(", ")
            };
            ui.message(&format!(
                "  {:<18} {}",
                theme.key.apply_to(field.label()),
                shown
            ));
        }
        ui.message(&format!(
            "  {:<18} {} to {}",
            theme.key.apply_to("Price"),
            format_price(options.price_min),
            format_price(options.price_max)
        ));

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RooflineConfig;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use serde_json::json;

    fn context_for(server: &MockServer) -> CommandContext {
        let mut config = RooflineConfig::default();
        config.api.base_url = server.url("/api");
        config.storage.enabled = false;
        CommandContext::new(config)
    }

    #[test]
    fn query_from_flags() {
        let args = ListArgs {
            city: Some("Jaipur".into()),
            bhk_type: Some("3 BHK".into()),
            price_min: Some(100000.0),
            page: Some(3),
            ..Default::default()
        };
        let query = ListPropertiesCommand::new(&CommandContext::default(), args)
            .query()
            .unwrap();

        assert_eq!(query.facet(FacetField::City), Some("Jaipur"));
        assert_eq!(query.facet(FacetField::BhkType), Some("3 BHK"));
        assert_eq!(query.price_min, Some(100000.0));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn filter_pairs_feed_the_query_and_flags_win() {
        let args = ListArgs {
            filters: vec![
                "furnishing=Semi-Furnished".into(),
                "city=Delhi".into(),
                "priceMax=8000000".into(),
                "page=2".into(),
            ],
            city: Some("Jaipur".into()),
            ..Default::default()
        };
        let query = ListPropertiesCommand::new(&CommandContext::default(), args)
            .query()
            .unwrap();

        assert_eq!(query.facet(FacetField::Furnishing), Some("Semi-Furnished"));
        assert_eq!(query.facet(FacetField::City), Some("Jaipur"));
        assert_eq!(query.price_max, Some(8_000_000.0));
        assert_eq!(query.page, 2);
    }

    #[test]
    fn malformed_filters_are_rejected() {
        for filter in ["furnishing", "colour=red", "priceMin=-5", "page=0"] {
            let args = ListArgs {
                filters: vec![filter.to_string()],
                ..Default::default()
            };
            let result = ListPropertiesCommand::new(&CommandContext::default(), args).query();
            assert!(
                matches!(result, Err(RooflineError::InvalidInput { .. })),
                "accepted {}",
                filter
            );
        }
    }

    #[test]
    fn query_rejects_negative_price() {
        let args = ListArgs {
            price_max: Some(-1.0),
            page: Some(1),
            ..Default::default()
        };
        let err = ListPropertiesCommand::new(&CommandContext::default(), args)
            .query()
            .unwrap_err();
        assert!(err.to_string().contains("--price-max"));
    }

    #[test]
    fn list_renders_table() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/properties");
            then.status(200).json_body(json!({
                "properties": [{ "_id": "p1", "title": "Sea View", "price": 4500000 }],
                "totalCount": 12
            }));
        });

        let args = ListArgs {
            page: Some(1),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = ListPropertiesCommand::new(&context_for(&server), args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("Sea View"));
        assert!(ui.has_message("₹ 4,500,000"));
        assert!(ui.has_message("Page 1 of 2"));
        assert_eq!(ui.spinners(), ["Loading listings..."]);
    }

    #[test]
    fn empty_list_warns() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/properties");
            then.status(200).json_body(json!([]));
        });

        let mut ui = MockUI::new();
        ListPropertiesCommand::new(
            &context_for(&server),
            ListArgs {
                page: Some(1),
                ..Default::default()
            },
        )
        .execute(&mut ui)
        .unwrap();

        assert!(ui.has_warning("No listings"));
    }

    #[test]
    fn show_missing_property_fails() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/properties/nope");
            then.status(404);
        });

        let args = ShowArgs {
            id: "nope".into(),
            json: false,
        };
        let err = ShowPropertyCommand::new(&context_for(&server), args)
            .execute(&mut MockUI::new())
            .unwrap_err();
        assert!(matches!(err, RooflineError::PropertyNotFound { .. }));
    }

    #[test]
    fn facets_lists_sorted_values() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/properties");
            then.status(200).json_body(json!([
                { "_id": "1", "city": "Jaipur", "price": 2000000 },
                { "_id": "2", "city": "Delhi", "price": 8000000 },
                { "_id": "3", "city": "Jaipur" },
                { "_id": "4", "city": "" }
            ]));
        });

        let mut ui = MockUI::new();
        FacetsCommand::new(&context_for(&server), FacetsArgs { json: false })
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_message("Delhi, Jaipur"));
        assert!(ui.has_message("₹ 2,000,000 to ₹ 8,000,000"));
    }
}
