//! Stateless request builder and response parser for the Alma bibs API.
//!
//! # Design
//! `AlmaClient` holds only the resolved `Config` and the base URL derived
//! from it, and carries no mutable state between calls. Each operation is
//! split into a `build_*` method that produces an `HttpRequest` and a
//! `parse_*` method that consumes an `HttpResponse`; the round-trip in
//! between is somebody else's job (see [`Alma`](crate::api::Alma)).

use tracing::warn;

use crate::config::Config;
use crate::content::{extract_content, Content};
use crate::error::{ApiError, Result};
use crate::headers::{build_headers, ContentType};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::region::base_url_for;
use crate::resource::{Ids, ResourceKind};

/// Synchronous, stateless client for the Alma bibs API.
#[derive(Debug, Clone)]
pub struct AlmaClient {
    config: Config,
    base_url: String,
}

impl AlmaClient {
    /// Client addressing the API host of the configured region.
    pub fn new(config: Config) -> Self {
        let base_url = config.region().base_url();
        Self { config, base_url }
    }

    /// Client addressing `host` instead of the region's registry entry,
    /// e.g. a proxy or a local mock server.
    pub fn with_host(config: Config, host: &str) -> Self {
        Self {
            base_url: base_url_for(host),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL, ending in `/almaws/v1/`.
    pub fn baseurl(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of `kind` with its placeholders filled from `ids`.
    pub fn fullurl(&self, kind: ResourceKind, ids: &Ids) -> Result<String> {
        Ok(format!("{}{}", self.base_url, kind.path(ids)?))
    }

    pub fn headers(&self, content_type: ContentType) -> Vec<(String, String)> {
        build_headers(self.config.api_key(), content_type)
    }

    pub fn build_get(
        &self,
        kind: ResourceKind,
        ids: &Ids,
        content_type: ContentType,
    ) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Get,
            url: self.fullurl(kind, ids)?,
            headers: self.headers(content_type),
            body: None,
        })
    }

    /// Build a full-record update. `Content-Type` follows the body variant.
    pub fn build_put(&self, kind: ResourceKind, ids: &Ids, body: &Content) -> Result<HttpRequest> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: self.fullurl(kind, ids)?,
            headers: self.headers(body.content_type()),
            body: Some(body.to_body()?),
        })
    }

    /// Status check followed by content extraction.
    pub fn parse_content(&self, response: HttpResponse) -> Result<Content> {
        check_status(&response)?;
        extract_content(&response)
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
pub fn check_status(response: &HttpResponse) -> Result<()> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "request failed");
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}
