//! Listing filters: facet options and search queries.
//!
//! - [`derive_filter_options`] scans a property collection and collects the
//!   distinct, sorted values of every [`FacetField`] for dropdowns
//! - [`PropertyQuery`] holds the user's current selection and turns it into
//!   `GET /properties` query parameters
//!
//! # Example
//!
//! ```
//! use roofline::filters::{derive_filter_options, FacetField};
//! use roofline::property::Property;
//!
//! let cities = ["Jaipur", "Delhi", "Jaipur", ""];
//! let properties: Vec<Property> = cities
//!     .iter()
//!     .enumerate()
//!     .map(|(i, city)| {
//!         let mut p = Property::new(format!("p{}", i));
//!         p.city = Some(city.to_string());
//!         p
//!     })
//!     .collect();
//!
//! let options = derive_filter_options(&properties);
//! assert_eq!(options.options(FacetField::City), ["Delhi", "Jaipur"]);
//! ```

mod facets;
mod query;

pub use facets::{
    derive_filter_options, FacetField, FilterOptions, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN,
};
pub use query::{total_pages, PropertyQuery, DEFAULT_PAGE_SIZE};
