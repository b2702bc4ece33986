//! Blocking client for the property REST API.
//!
//! # Example
//!
//! ```no_run
//! use roofline::api::ApiClient;
//! use roofline::config::ApiSettings;
//! use roofline::filters::PropertyQuery;
//!
//! let client = ApiClient::new(&ApiSettings::default()).unwrap();
//! let page = client.list_properties(&PropertyQuery::new()).unwrap();
//! println!("{} listings on page {}", page.properties.len(), page.page);
//! ```

mod client;
mod types;

pub use client::ApiClient;
pub use types::{ContactRequest, NewsletterRequest, PropertyPage, QuoteRequest, ReviewRequest};
