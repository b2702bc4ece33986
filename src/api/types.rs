//! Request and response bodies for the property API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Result, RooflineError};
use crate::filters::total_pages;
use crate::property::{Property, PropertyId};

/// One page of listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPage {
    pub properties: Vec<Property>,
    pub page: u32,
    pub total_pages: u32,
}

impl PropertyPage {
    /// Check whether a later page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Listing payloads come back either bare or wrapped with paging counts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListingResponse {
    Bare(#[serde(deserialize_with = "listings")] Vec<Property>),
    Paged {
        #[serde(default, deserialize_with = "listings")]
        properties: Vec<Property>,
        #[serde(default, rename = "totalPages")]
        total_pages: Option<u32>,
        #[serde(default, rename = "totalCount")]
        total_count: Option<u64>,
    },
}

/// Decode listings one at a time, skipping entries that are not listings.
fn listings<'de, D>(deserializer: D) -> std::result::Result<Vec<Property>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Property>(value) {
            Ok(property) => Some(property),
            Err(e) => {
                tracing::debug!("Skipping unreadable listing: {}", e);
                None
            }
        })
        .collect())
}

impl ListingResponse {
    /// Decode a listing body; anything unrecognized is an empty listing.
    pub(crate) fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_else(|e| {
            tracing::warn!("Unrecognized listing response, treating as empty: {}", e);
            ListingResponse::Bare(Vec::new())
        })
    }

    pub(crate) fn into_page(self, page: u32, per_page: u32) -> PropertyPage {
        match self {
            ListingResponse::Bare(properties) => PropertyPage {
                properties,
                page,
                total_pages: 1,
            },
            ListingResponse::Paged {
                properties,
                total_pages: pages,
                total_count,
            } => PropertyPage {
                properties,
                page,
                total_pages: total_pages(pages, total_count, per_page),
            },
        }
    }

    pub(crate) fn into_properties(self) -> Vec<Property> {
        match self {
            ListingResponse::Bare(properties) | ListingResponse::Paged { properties, .. } => {
                properties
            }
        }
    }
}

/// Body of `POST /properties/{id}/reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRequest {
    pub name: String,
    pub message: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl ReviewRequest {
    pub fn validate(&self) -> Result<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(RooflineError::InvalidInput {
                message: format!("rating must be between 1 and 5, got {}", self.rating),
            });
        }
        require("name", &self.name)?;
        require("message", &self.message)
    }
}

/// Body of `POST /quotes`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub property_id: PropertyId,
    pub name: String,
    pub email: String,
    pub contact_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<()> {
        if self.property_id.is_blank() {
            return Err(RooflineError::InvalidInput {
                message: "property id is required".to_string(),
            });
        }
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("contact number", &self.contact_number)
    }
}

/// Body of `POST /contact-us`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<String>,
    pub message: String,
}

impl ContactRequest {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("message", &self.message)
    }
}

/// Body of `POST /user/newsletter/subscribe`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsletterRequest {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl NewsletterRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        require_email(&self.email)
    }
}

/// `{ "message": ... }` bodies returned by write endpoints and errors.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RooflineError::InvalidInput {
            message: format!("{} is required", field),
        });
    }
    Ok(())
}

fn require_email(email: &str) -> Result<()> {
    let email = email.trim();
    match email.split_once('@') {
        Some((user, domain)) if !user.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(RooflineError::InvalidInput {
            message: format!("'{}' is not a valid email address", email),
        }),
    }
}
