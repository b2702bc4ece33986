//! Roofline - browse, compare and favorite real-estate listings.
//!
//! Roofline is the client side of a property listings service: it keeps the
//! user's favorites and compare selection, derives filter dropdown options
//! from fetched listings, and talks to the listings REST API.
//!
//! # Modules
//!
//! - [`api`] - Blocking REST client for the listings backend
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compare`] - Bounded, session-scoped compare selection
//! - [`config`] - Configuration loading, merging and validation
//! - [`error`] - Error types and result aliases
//! - [`favorites`] - Persisted favorites selection
//! - [`filters`] - Filter option derivation and listing queries
//! - [`notify`] - Change subscriptions for the stores
//! - [`property`] - Listing records and the references stores keep
//! - [`storage`] - Durable key-value slots
//! - [`ui`] - Terminal output, spinners and prompts
//!
//! # Example
//!
//! ```
//! use roofline::favorites::FavoritesStore;
//! use roofline::property::PropertyRef;
//!
//! let mut favorites = FavoritesStore::in_memory();
//! assert!(favorites.toggle(PropertyRef::new("p1").with_title("Sea View")));
//! assert!(favorites.is_favorited("p1"));
//!
//! assert!(!favorites.toggle(PropertyRef::new("p1")));
//! assert!(favorites.is_empty());
//! ```

pub mod api;
pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod favorites;
pub mod filters;
pub mod notify;
pub mod property;
pub mod storage;
pub mod ui;

pub use error::{Result, RooflineError};
