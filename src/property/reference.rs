//! The minimal property form held by the stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::PropertyId;

/// A property reference: identifier plus cached display fields.
///
/// Equality and hashing consider the `id` only, so two fetches of the same
/// listing taken at different times are the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRef {
    #[serde(alias = "_id")]
    pub id: PropertyId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhk_type: Option<String>,

    /// First image name or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// When the entry was favorited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl PropertyRef {
    /// Create a bare reference with no display fields.
    pub fn new(id: impl Into<PropertyId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            price: None,
            city: None,
            bhk_type: None,
            image: None,
            saved_at: None,
        }
    }

    /// Set the cached title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the cached price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the cached city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Title, falling back to the identifier.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }
}

impl PartialEq for PropertyRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PropertyRef {}

impl Hash for PropertyRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl From<PropertyId> for PropertyRef {
    fn from(id: PropertyId) -> Self {
        Self::new(id)
    }
}

impl From<&super::Property> for PropertyRef {
    fn from(property: &super::Property) -> Self {
        property.to_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_display_fields() {
        let a = PropertyRef::new("p1").with_title("Old title").with_price(100.0);
        let b = PropertyRef::new("p1").with_title("New title");
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn different_ids_are_different_entries() {
        assert_ne!(PropertyRef::new("p1"), PropertyRef::new("p2"));
    }

    #[test]
    fn serializes_with_id_key_and_skips_empty_fields() {
        let json = serde_json::to_string(&PropertyRef::new("p1")).unwrap();
        assert_eq!(json, r#"{"id":"p1"}"#);

        let json = serde_json::to_string(&PropertyRef::new("p1").with_city("Pune")).unwrap();
        assert_eq!(json, r#"{"id":"p1","city":"Pune"}"#);
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let r: PropertyRef =
            serde_json::from_str(r#"{"id":"p1","bhkType":"3 BHK","price":9900000}"#).unwrap();
        assert_eq!(r.bhk_type.as_deref(), Some("3 BHK"));
        assert_eq!(r.price, Some(9900000.0));
    }

    #[test]
    fn label_prefers_title() {
        assert_eq!(PropertyRef::new("p1").label(), "p1");
        assert_eq!(PropertyRef::new("p1").with_title("Villa").label(), "Villa");
    }
}
