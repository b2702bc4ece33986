//! Full property records as served by the API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::{PropertyId, PropertyRef};

/// A property listing as returned by `GET /properties` and friends.
///
/// Only the identifier is required; every other field may be missing on
/// partially filled listings. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Backend primary key.
    #[serde(rename = "_id", alias = "id")]
    pub id: PropertyId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Asking price in rupees.
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bhk_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furnishing: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub bedrooms: Option<u32>,

    #[serde(
        default,
        deserialize_with = "deserialize_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub bathrooms: Option<u32>,

    /// Super built-up area in square feet.
    #[serde(
        default,
        deserialize_with = "deserialize_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub super_builtup_area: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    /// Image file names or absolute URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

/// GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl GeoPoint {
    /// Latitude and longitude, when exactly two non-zero coordinates exist.
    pub fn lat_lng(&self) -> Option<(f64, f64)> {
        match self.coordinates.as_slice() {
            [lng, lat] if *lat != 0.0 && *lng != 0.0 => Some((*lat, *lng)),
            _ => None,
        }
    }
}

impl Property {
    /// Create a record with only an identifier set.
    pub fn new(id: impl Into<PropertyId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Project this record onto the minimal form the stores keep.
    pub fn to_ref(&self) -> PropertyRef {
        PropertyRef {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            city: self.city.clone(),
            bhk_type: self.bhk_type.clone(),
            image: self.images.first().cloned(),
            saved_at: None,
        }
    }

    /// Title, falling back to the identifier.
    pub fn label(&self) -> &str {
        self.title.as_deref().unwrap_or(self.id.as_str())
    }

    /// Address and city joined for display, skipping missing parts.
    pub fn display_address(&self) -> Option<String> {
        let parts: Vec<&str> = [self.address.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Resolve the first image against the API's upload directory.
    ///
    /// Absolute URLs pass through untouched.
    pub fn image_url(&self, api_base: &str) -> Option<String> {
        let image = self.images.first()?;
        if image.starts_with("http") {
            Some(image.clone())
        } else {
            Some(format!(
                "{}/uploads/{}",
                api_base.trim_end_matches('/'),
                image
            ))
        }
    }

    /// Google Maps link for the listing's coordinates.
    pub fn maps_url(&self) -> Option<String> {
        let (lat, lng) = self.location.as_ref()?.lat_lng()?;
        Some(format!("https://www.google.com/maps?q={},{}", lat, lng))
    }
}

/// Form-submitted listings carry numbers as text, sometimes with thousands
/// separators. Anything that is not a finite number reads as missing.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().replace(',', "").parse().ok(),
        _ => None,
    };
    Ok(amount.filter(|n: &f64| n.is_finite()))
}

/// Room counts: whole non-negative numbers, as JSON numbers or text.
fn deserialize_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "_id": "p1",
        "title": "Sea View Apartment",
        "price": 4500000,
        "city": "Mumbai",
        "address": "Marine Drive",
        "propertyType": "Apartment",
        "bhkType": "2 BHK",
        "furnishing": "Semi-Furnished",
        "transactionType": "Resale",
        "status": "Ready to Move",
        "bedrooms": 2,
        "bathrooms": 2,
        "superBuiltupArea": 1150,
        "images": ["front.jpg", "https://cdn.example.com/hall.jpg"],
        "location": { "type": "Point", "coordinates": [72.8231, 18.9442] },
        "createdAt": "2024-01-01T00:00:00Z"
    }"#;

    #[test]
    fn parses_api_record() {
        let property: Property = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(property.id.as_str(), "p1");
        assert_eq!(property.price, Some(4500000.0));
        assert_eq!(property.bhk_type.as_deref(), Some("2 BHK"));
        assert_eq!(property.super_builtup_area, Some(1150.0));
        assert_eq!(property.images.len(), 2);
    }

    #[test]
    fn accepts_plain_id_key() {
        let property: Property = serde_json::from_str(r#"{"id": "p9"}"#).unwrap();
        assert_eq!(property.id.as_str(), "p9");
        assert!(property.title.is_none());
    }

    #[test]
    fn accepts_price_as_string() {
        let property: Property =
            serde_json::from_str(r#"{"_id": "p1", "price": "1,250,000"}"#).unwrap();
        assert_eq!(property.price, Some(1250000.0));

        let garbage: Property =
            serde_json::from_str(r#"{"_id": "p1", "price": "call us"}"#).unwrap();
        assert_eq!(garbage.price, None);
    }

    #[test]
    fn accepts_form_submitted_numbers() {
        let property: Property = serde_json::from_str(
            r#"{"_id": "p2", "bedrooms": "3", "bathrooms": 2, "superBuiltupArea": "1,200"}"#,
        )
        .unwrap();
        assert_eq!(property.bedrooms, Some(3));
        assert_eq!(property.bathrooms, Some(2));
        assert_eq!(property.super_builtup_area, Some(1200.0));
    }

    #[test]
    fn unreadable_numbers_are_missing() {
        let property: Property = serde_json::from_str(
            r#"{"_id": "p2", "bedrooms": "three", "bathrooms": -1, "superBuiltupArea": "1200 sq ft"}"#,
        )
        .unwrap();
        assert_eq!(property.bedrooms, None);
        assert_eq!(property.bathrooms, None);
        assert_eq!(property.super_builtup_area, None);
    }

    #[test]
    fn to_ref_keeps_display_fields() {
        let property: Property = serde_json::from_str(SAMPLE).unwrap();
        let r = property.to_ref();

        assert_eq!(r.id.as_str(), "p1");
        assert_eq!(r.title.as_deref(), Some("Sea View Apartment"));
        assert_eq!(r.city.as_deref(), Some("Mumbai"));
        assert_eq!(r.image.as_deref(), Some("front.jpg"));
        assert!(r.saved_at.is_none());
    }

    #[test]
    fn image_url_resolves_relative_names() {
        let property: Property = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            property.image_url("http://localhost:5000/api/").as_deref(),
            Some("http://localhost:5000/api/uploads/front.jpg")
        );

        let mut absolute = property.clone();
        absolute.images.remove(0);
        assert_eq!(
            absolute.image_url("http://localhost:5000/api").as_deref(),
            Some("https://cdn.example.com/hall.jpg")
        );

        assert!(Property::new("p2").image_url("http://x").is_none());
    }

    #[test]
    fn maps_url_uses_lat_then_lng() {
        let property: Property = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(
            property.maps_url().as_deref(),
            Some("https://www.google.com/maps?q=18.9442,72.8231")
        );
    }

    #[test]
    fn maps_url_requires_two_nonzero_coordinates() {
        let mut property = Property::new("p1");
        assert!(property.maps_url().is_none());

        property.location = Some(GeoPoint {
            kind: None,
            coordinates: vec![72.0],
        });
        assert!(property.maps_url().is_none());

        property.location = Some(GeoPoint {
            kind: None,
            coordinates: vec![0.0, 18.9],
        });
        assert!(property.maps_url().is_none());
    }

    #[test]
    fn display_address_joins_parts() {
        let mut property = Property::new("p1");
        assert!(property.display_address().is_none());

        property.city = Some("Jaipur".into());
        assert_eq!(property.display_address().as_deref(), Some("Jaipur"));

        property.address = Some("MI Road".into());
        assert_eq!(property.display_address().as_deref(), Some("MI Road, Jaipur"));
    }

    #[test]
    fn label_falls_back_to_id() {
        let mut property = Property::new("p1");
        assert_eq!(property.label(), "p1");
        property.title = Some("Villa".into());
        assert_eq!(property.label(), "Villa");
    }
}
