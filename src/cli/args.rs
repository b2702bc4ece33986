//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Roofline - browse, compare and favorite property listings.
#[derive(Debug, Parser)]
#[command(name = "roofline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (merged over ~/.roofline and .roofline configs)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Property API base URL (overrides config and ROOFLINE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory for persisted favorites (overrides config and ROOFLINE_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Browse listings
    #[command(subcommand)]
    Properties(PropertiesCommand),

    /// Manage saved favorites
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Compare listings side by side
    Compare(CompareArgs),

    /// Subscribe to the newsletter
    Newsletter(NewsletterArgs),

    /// Send a message to the agency
    Contact(ContactArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// `roofline properties ...`
#[derive(Debug, Clone, Subcommand)]
pub enum PropertiesCommand {
    /// List listings matching filters
    List(ListArgs),

    /// Show one listing in full
    Show(ShowArgs),

    /// Show the values available for each filter
    Facets(FacetsArgs),

    /// Post a review for a listing
    Review(ReviewArgs),

    /// Ask the agent for a quote on a listing
    Quote(QuoteArgs),
}

/// Arguments for `properties list`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Free-text search
    #[arg(short, long)]
    pub search: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    /// e.g. "2 BHK"
    #[arg(long)]
    pub bhk_type: Option<String>,

    #[arg(long)]
    pub property_type: Option<String>,

    #[arg(long)]
    pub furnishing: Option<String>,

    #[arg(long)]
    pub transaction_type: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    /// Minimum price in rupees
    #[arg(long)]
    pub price_min: Option<f64>,

    /// Maximum price in rupees
    #[arg(long)]
    pub price_max: Option<f64>,

    /// Filter by API parameter name, e.g. `--filter furnishing=Furnished`.
    /// Repeatable; the dedicated flags above take precedence.
    #[arg(short, long = "filter", value_name = "KEY=VALUE")]
    pub filters: Vec<String>,

    /// Page number, starting at 1 [default: 1]
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `properties show`.
#[derive(Debug, Clone, clap::Args)]
pub struct ShowArgs {
    /// Listing id
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `properties facets`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct FacetsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `properties review`.
#[derive(Debug, Clone, clap::Args)]
pub struct ReviewArgs {
    /// Listing id
    pub id: String,

    /// Your name
    #[arg(long)]
    pub name: String,

    /// Star rating from 1 to 5
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
    pub rating: u8,

    /// Review text
    #[arg(long)]
    pub message: String,
}

/// Arguments for `properties quote`.
#[derive(Debug, Clone, clap::Args)]
pub struct QuoteArgs {
    /// Listing id
    pub id: String,

    /// Your name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    /// Contact number the agent should call
    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub message: Option<String>,
}

/// `roofline favorites ...`
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesCommand {
    /// List saved favorites
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a listing to favorites, or remove it if already saved
    Toggle {
        /// Listing id
        id: String,

        /// Save the bare id without fetching listing details
        #[arg(long)]
        offline: bool,
    },

    /// Exit 0 if the listing is a favorite, 2 otherwise
    Check {
        /// Listing id
        id: String,
    },

    /// Remove every favorite
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

/// Arguments for `compare`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CompareArgs {
    /// Listing ids to compare
    #[arg(required_unless_present = "favorites", conflicts_with = "favorites")]
    pub ids: Vec<String>,

    /// Compare saved favorites instead
    #[arg(long)]
    pub favorites: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `newsletter`.
#[derive(Debug, Clone, clap::Args)]
pub struct NewsletterArgs {
    /// Email address to subscribe
    pub email: String,

    /// Your name
    #[arg(long)]
    pub name: Option<String>,
}

/// Arguments for `contact`.
#[derive(Debug, Clone, clap::Args)]
pub struct ContactArgs {
    /// Your name
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Budget, free text (e.g. "50-75 lakh")
    #[arg(long)]
    pub budget: Option<String>,

    #[arg(long)]
    pub message: String,
}

/// Arguments for `completions`.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn review_rating_is_range_checked() {
        let review = |rating: &str| {
            Cli::try_parse_from([
                "roofline",
                "properties",
                "review",
                "p1",
                "--name",
                "Asha",
                "--rating",
                rating,
                "--message",
                "Nice",
            ])
        };

        assert!(review("5").is_ok());
        assert!(review("0").is_err());
        assert!(review("6").is_err());
    }

    #[test]
    fn parses_list_filters() {
        let cli = Cli::parse_from([
            "roofline",
            "properties",
            "list",
            "--city",
            "Jaipur",
            "--price-max",
            "5000000",
            "--page",
            "2",
        ]);
        match cli.command {
            Commands::Properties(PropertiesCommand::List(args)) => {
                assert_eq!(args.city.as_deref(), Some("Jaipur"));
                assert_eq!(args.price_max, Some(5_000_000.0));
                assert_eq!(args.page, Some(2));
                assert!(!args.json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "roofline",
            "favorites",
            "list",
            "--data-dir",
            "/tmp/x",
            "-q",
        ]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(cli.quiet);
    }

    #[test]
    fn compare_requires_ids_or_favorites() {
        assert!(Cli::try_parse_from(["roofline", "compare"]).is_err());
        assert!(Cli::try_parse_from(["roofline", "compare", "--favorites"]).is_ok());
        assert!(Cli::try_parse_from(["roofline", "compare", "a", "b"]).is_ok());
        assert!(Cli::try_parse_from(["roofline", "compare", "a", "--favorites"]).is_err());
    }

    #[test]
    fn toggle_offline_flag() {
        let cli = Cli::parse_from(["roofline", "favorites", "toggle", "p1", "--offline"]);
        match cli.command {
            Commands::Favorites(FavoritesCommand::Toggle { id, offline }) => {
                assert_eq!(id, "p1");
                assert!(offline);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
