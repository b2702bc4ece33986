//! Listing search queries and pagination.

use std::collections::BTreeMap;

use super::FacetField;
use crate::error::{Result, RooflineError};

/// Listings shown per page.
pub const DEFAULT_PAGE_SIZE: u32 = 9;

/// The user's current search and filter selection.
///
/// Any filter change moves back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyQuery {
    pub search: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub facets: BTreeMap<FacetField, String>,
    pub page: u32,
    pub limit: u32,
}

impl Default for PropertyQuery {
    fn default() -> Self {
        Self {
            search: None,
            price_min: None,
            price_max: None,
            facets: BTreeMap::new(),
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PropertyQuery {
    /// Create an unfiltered query for the first page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a query from `name=value` pairs, as found in a URL query string.
    ///
    /// `page` and `limit` are honored; other unknown names are rejected.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut query = Self::new();
        let mut page = None;

        for (name, value) in pairs {
            match name {
                "page" => page = Some(parse_positive(name, value)?),
                "limit" => query.limit = parse_positive(name, value)?,
                _ => query.set(name, value)?,
            }
        }

        if let Some(page) = page {
            query.page = page;
        }
        Ok(query)
    }

    /// Set the free-text search.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_empty(search.into());
        self
    }

    /// Select a facet value.
    pub fn with_facet(mut self, field: FacetField, value: impl Into<String>) -> Self {
        if let Some(value) = non_empty(value.into()) {
            self.facets.insert(field, value);
        }
        self
    }

    /// Set the price bounds.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min;
        self.price_max = max;
        self
    }

    /// Select a page (pages start at 1).
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Update one filter by its wire name.
    ///
    /// Empty values clear the filter. The page resets to 1.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let value = value.trim();

        match name {
            "search" => self.search = non_empty(value.to_string()),
            "priceMin" => self.price_min = parse_price(name, value)?,
            "priceMax" => self.price_max = parse_price(name, value)?,
            _ => {
                let field =
                    FacetField::from_key(name).ok_or_else(|| RooflineError::InvalidInput {
                        message: format!("unknown filter '{}'", name),
                    })?;
                match non_empty(value.to_string()) {
                    Some(v) => self.facets.insert(field, v),
                    None => self.facets.remove(&field),
                };
            }
        }

        self.page = 1;
        Ok(())
    }

    /// Selected value for a facet.
    pub fn facet(&self, field: FacetField) -> Option<&str> {
        self.facets.get(&field).map(String::as_str)
    }

    /// Check whether no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.price_min.is_none()
            && self.price_max.is_none()
            && self.facets.is_empty()
    }

    /// Drop every filter and go back to the first page.
    pub fn clear(&mut self) {
        self.search = None;
        self.price_min = None;
        self.price_max = None;
        self.facets.clear();
        self.page = 1;
    }

    /// Query parameters for `GET /properties`, skipping unset filters.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(min) = self.price_min {
            params.push(("priceMin".to_string(), format_number(min)));
        }
        if let Some(max) = self.price_max {
            params.push(("priceMax".to_string(), format_number(max)));
        }
        for (field, value) in &self.facets {
            params.push((field.key().to_string(), value.clone()));
        }
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("limit".to_string(), self.limit.to_string()));

        params
    }
}

/// Page count from a listing response.
///
/// Prefers an explicit page count, then derives one from the total count.
/// Always at least 1.
pub fn total_pages(total_pages: Option<u32>, total_count: Option<u64>, per_page: u32) -> u32 {
    if let Some(pages) = total_pages.filter(|p| *p > 0) {
        return pages;
    }

    match total_count {
        Some(count) if count > 0 && per_page > 0 => {
            let pages = count.div_ceil(u64::from(per_page));
            u32::try_from(pages).unwrap_or(u32::MAX)
        }
        _ => 1,
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_price(name: &str, value: &str) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(Some(n)),
        _ => Err(RooflineError::InvalidInput {
            message: format!("{} must be a non-negative number, got '{}'", name, value),
        }),
    }
}

fn parse_positive(name: &str, value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(RooflineError::InvalidInput {
            message: format!("{} must be a positive integer, got '{}'", name, value),
        }),
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn default_query_has_only_paging() {
        let query = PropertyQuery::new();
        assert!(query.is_unfiltered());
        assert_eq!(
            query.to_params(),
            vec![
                ("page".to_string(), "1".to_string()),
                ("limit".to_string(), "9".to_string())
            ]
        );
    }

    #[test]
    fn params_skip_empty_values() {
        let query = PropertyQuery::new()
            .with_search("  ")
            .with_facet(FacetField::City, "")
            .with_facet(FacetField::BhkType, "2 BHK");

        let params = query.to_params();
        assert_eq!(param(&params, "search"), None);
        assert_eq!(param(&params, "city"), None);
        assert_eq!(param(&params, "bhkType"), Some("2 BHK"));
    }

    #[test]
    fn prices_render_as_integers() {
        let query = PropertyQuery::new().with_price_range(Some(500000.0), Some(1250000.5));
        let params = query.to_params();
        assert_eq!(param(&params, "priceMin"), Some("500000"));
        assert_eq!(param(&params, "priceMax"), Some("1250000.5"));
    }

    #[test]
    fn set_updates_by_wire_name_and_resets_page() {
        let mut query = PropertyQuery::new().with_page(3);

        query.set("city", "Jaipur").unwrap();
        assert_eq!(query.facet(FacetField::City), Some("Jaipur"));
        assert_eq!(query.page, 1);

        query.set("priceMin", "100000").unwrap();
        assert_eq!(query.price_min, Some(100000.0));

        query.set("city", "").unwrap();
        assert_eq!(query.facet(FacetField::City), None);
    }

    #[test]
    fn set_rejects_unknown_names_and_bad_prices() {
        let mut query = PropertyQuery::new();
        assert!(matches!(
            query.set("color", "red"),
            Err(RooflineError::InvalidInput { .. })
        ));
        assert!(query.set("priceMax", "lots").is_err());
        assert!(query.set("priceMin", "-5").is_err());
    }

    #[test]
    fn clear_drops_filters() {
        let mut query = PropertyQuery::new()
            .with_search("villa")
            .with_facet(FacetField::Status, "Ready")
            .with_price_range(Some(1.0), None)
            .with_page(4);

        query.clear();

        assert!(query.is_unfiltered());
        assert_eq!(query.page, 1);
    }

    #[test]
    fn from_pairs_reads_url_query() {
        let query = PropertyQuery::from_pairs([
            ("search", "sea view"),
            ("city", "Mumbai"),
            ("priceMax", "9000000"),
            ("page", "2"),
        ])
        .unwrap();

        assert_eq!(query.search.as_deref(), Some("sea view"));
        assert_eq!(query.facet(FacetField::City), Some("Mumbai"));
        assert_eq!(query.price_max, Some(9000000.0));
        assert_eq!(query.page, 2);
    }

    #[test]
    fn from_pairs_rejects_zero_page() {
        assert!(PropertyQuery::from_pairs([("page", "0")]).is_err());
    }

    #[test]
    fn total_pages_prefers_explicit_count() {
        assert_eq!(total_pages(Some(5), Some(100), 9), 5);
    }

    #[test]
    fn total_pages_derives_from_total_count() {
        assert_eq!(total_pages(None, Some(19), 9), 3);
        assert_eq!(total_pages(None, Some(18), 9), 2);
        assert_eq!(total_pages(Some(0), Some(1), 9), 1);
    }

    #[test]
    fn total_pages_defaults_to_one() {
        assert_eq!(total_pages(None, None, 9), 1);
        assert_eq!(total_pages(None, Some(0), 9), 1);
        assert_eq!(total_pages(None, Some(10), 0), 1);
    }
}
