//! Facet fields and option derivation.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::property::Property;

/// Lower price bound used when no listing has a price.
pub const DEFAULT_PRICE_MIN: f64 = 0.0;

/// Upper price bound used when no listing has a price.
pub const DEFAULT_PRICE_MAX: f64 = 1_000_000.0;

/// A filterable listing field whose distinct values populate a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FacetField {
    PropertyType,
    City,
    BhkType,
    Furnishing,
    TransactionType,
    Status,
}

impl FacetField {
    /// Every facet, in display order.
    pub const ALL: [FacetField; 6] = [
        FacetField::PropertyType,
        FacetField::City,
        FacetField::BhkType,
        FacetField::Furnishing,
        FacetField::TransactionType,
        FacetField::Status,
    ];

    /// Field name used on the wire and in query strings.
    pub fn key(&self) -> &'static str {
        match self {
            Self::PropertyType => "propertyType",
            Self::City => "city",
            Self::BhkType => "bhkType",
            Self::Furnishing => "furnishing",
            Self::TransactionType => "transactionType",
            Self::Status => "status",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PropertyType => "Property Type",
            Self::City => "City",
            Self::BhkType => "BHK Type",
            Self::Furnishing => "Furnishing",
            Self::TransactionType => "Transaction Type",
            Self::Status => "Status",
        }
    }

    /// Look up a facet by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Read this field from a property.
    pub fn value_of<'a>(&self, property: &'a Property) -> Option<&'a str> {
        let value = match self {
            Self::PropertyType => &property.property_type,
            Self::City => &property.city,
            Self::BhkType => &property.bhk_type,
            Self::Furnishing => &property.furnishing,
            Self::TransactionType => &property.transaction_type,
            Self::Status => &property.status,
        };
        value.as_deref()
    }
}

impl fmt::Display for FacetField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FacetField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown facet: {}", s))
    }
}

/// Dropdown options for every facet plus the price slider bounds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub property_types: Vec<String>,
    pub cities: Vec<String>,
    pub bhk_types: Vec<String>,
    pub furnishings: Vec<String>,
    pub transaction_types: Vec<String>,
    pub statuses: Vec<String>,
    pub price_min: f64,
    pub price_max: f64,
}

impl FilterOptions {
    /// Options for one facet.
    pub fn options(&self, field: FacetField) -> &[String] {
        match field {
            FacetField::PropertyType => &self.property_types,
            FacetField::City => &self.cities,
            FacetField::BhkType => &self.bhk_types,
            FacetField::Furnishing => &self.furnishings,
            FacetField::TransactionType => &self.transaction_types,
            FacetField::Status => &self.statuses,
        }
    }

    fn options_mut(&mut self, field: FacetField) -> &mut Vec<String> {
        match field {
            FacetField::PropertyType => &mut self.property_types,
            FacetField::City => &mut self.cities,
            FacetField::BhkType => &mut self.bhk_types,
            FacetField::Furnishing => &mut self.furnishings,
            FacetField::TransactionType => &mut self.transaction_types,
            FacetField::Status => &mut self.statuses,
        }
    }
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            property_types: Vec::new(),
            cities: Vec::new(),
            bhk_types: Vec::new(),
            furnishings: Vec::new(),
            transaction_types: Vec::new(),
            statuses: Vec::new(),
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

/// Collect distinct facet values and the price range from a collection.
///
/// Missing and empty values are skipped; duplicates are matched exactly
/// (case-sensitive) and options are sorted by byte-wise string order. Prices
/// of zero are ignored. An empty collection yields empty option lists and
/// the default price bounds.
pub fn derive_filter_options(properties: &[Property]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for field in FacetField::ALL {
        let values: BTreeSet<&str> = properties
            .iter()
            .filter_map(|p| field.value_of(p))
            .filter(|v| !v.is_empty())
            .collect();
        *options.options_mut(field) = values.into_iter().map(String::from).collect();
    }

    let prices: Vec<f64> = properties
        .iter()
        .filter_map(|p| p.price)
        .filter(|p| *p != 0.0 && !p.is_nan())
        .collect();

    if !prices.is_empty() {
        options.price_min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        options.price_max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    }

    options
}
