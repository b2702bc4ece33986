//! HTTP transport for the property API.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use std::time::Duration;

use super::types::{
    ContactRequest, ListingResponse, MessageBody, NewsletterRequest, PropertyPage, QuoteRequest,
    ReviewRequest,
};
use crate::config::ApiSettings;
use crate::error::{Result, RooflineError};
use crate::filters::PropertyQuery;
use crate::property::{Property, PropertyId};

/// Client for the listings backend.
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl ApiClient {
    /// Build a client from connection settings.
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let timeout = Duration::from_secs(settings.timeout_secs.max(1));
        let client = Client::builder()
            .user_agent("roofline")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.clone().filter(|t| !t.is_empty()),
            timeout,
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch one page of listings matching the query.
    pub fn list_properties(&self, query: &PropertyQuery) -> Result<PropertyPage> {
        let url = self.url_with_params("/properties", query.to_params())?;
        let body = self.send(self.client.get(url))?.text()?;
        Ok(ListingResponse::parse(&body).into_page(query.page, query.limit))
    }

    /// Fetch every listing, unpaged.
    pub fn all_properties(&self) -> Result<Vec<Property>> {
        let url = self.url("/properties")?;
        let body = self.send(self.client.get(url))?.text()?;
        Ok(ListingResponse::parse(&body).into_properties())
    }

    /// Fetch a single listing.
    pub fn get_property(&self, id: &str) -> Result<Property> {
        let url = self.resource_url("/properties", &[id])?;
        let response = self.authorize(self.client.get(url)).send()?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RooflineError::PropertyNotFound { id: id.to_string() });
        }
        Ok(check_status(response)?.json()?)
    }

    /// Fetch listings side by side, in the order the server returns them.
    pub fn compare_properties(&self, ids: &[PropertyId]) -> Result<Vec<Property>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let joined = ids
            .iter()
            .map(PropertyId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let url = self.url_with_params("/properties/compare", [("ids".to_string(), joined)])?;
        let body = self.send(self.client.get(url))?.text()?;
        Ok(ListingResponse::parse(&body).into_properties())
    }

    /// Post a review for a listing.
    pub fn submit_review(&self, id: &str, review: &ReviewRequest) -> Result<()> {
        review.validate()?;
        let url = self.resource_url("/properties", &[id, "reviews"])?;
        self.post_to(url, review).map(drop)
    }

    /// Ask the agent for a quote on a listing.
    pub fn request_quote(&self, quote: &QuoteRequest) -> Result<()> {
        quote.validate()?;
        self.post("/quotes", quote).map(drop)
    }

    /// Send the general contact form.
    pub fn contact(&self, request: &ContactRequest) -> Result<()> {
        request.validate()?;
        self.post("/contact-us", request).map(drop)
    }

    /// Subscribe an address to the newsletter, returning the server's message.
    pub fn subscribe_newsletter(&self, request: &NewsletterRequest) -> Result<String> {
        request.validate()?;
        let body = self.post("/user/newsletter/subscribe", request)?;
        Ok(body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Subscribed!".to_string()))
    }

    fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<MessageBody> {
        self.post_to(self.url(path)?, body)
    }

    fn post_to<T: Serialize>(&self, url: Url, body: &T) -> Result<MessageBody> {
        let response = self.send(self.client.post(url).json(body))?;
        let text = response.text()?;
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    fn send(&self, request: RequestBuilder) -> Result<Response> {
        check_status(self.authorize(request).send()?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url, path);
        tracing::debug!("Requesting {}", raw);
        Url::parse(&raw).map_err(|e| RooflineError::InvalidInput {
            message: format!("invalid API URL '{}': {}", raw, e),
        })
    }

    /// Append caller-supplied segments, each percent-encoded as one segment.
    fn resource_url(&self, path: &str, segments: &[&str]) -> Result<Url> {
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|_| RooflineError::InvalidInput {
                message: format!("API URL '{}' cannot take a path", self.base_url),
            })?
            .extend(segments);
        Ok(url)
    }

    fn url_with_params(
        &self,
        path: &str,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Url> {
        let mut url = self.url(path)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.token.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Map non-success statuses to errors.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    tracing::debug!("Response {} from {}", status, response.url());

    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(RooflineError::Unauthorized);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<MessageBody>(&text)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });

    Err(RooflineError::Api {
        status: status.as_u16(),
        message,
    })
}
