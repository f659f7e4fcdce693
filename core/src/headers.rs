//! Standard request headers for the Alma API.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

pub const USER_AGENT: &str = concat!("alma-core/", env!("CARGO_PKG_VERSION"));

pub const JSON_MIME: &str = "application/json";
pub const XML_MIME: &str = "application/xml";

/// Body format of a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ContentType {
    #[default]
    Json,
    Xml,
}

impl ContentType {
    pub fn mime(self) -> &'static str {
        match self {
            ContentType::Json => JSON_MIME,
            ContentType::Xml => XML_MIME,
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime())
    }
}

impl FromStr for ContentType {
    type Err = ApiError;

    /// Accepts the short names (`json`, `xml`) or the full MIME types.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | JSON_MIME => Ok(ContentType::Json),
            "xml" | XML_MIME => Ok(ContentType::Xml),
            _ => Err(ApiError::UnknownContentType(s.to_string())),
        }
    }
}

/// Build the header set sent with every request.
///
/// `Accept` is always JSON; `content_type` only selects the `Content-Type`
/// value describing the request body.
pub fn build_headers(api_key: &str, content_type: ContentType) -> Vec<(String, String)> {
    vec![
        ("User-Agent".to_string(), USER_AGENT.to_string()),
        ("Authorization".to_string(), format!("apikey {api_key}")),
        ("Accept".to_string(), JSON_MIME.to_string()),
        ("Content-Type".to_string(), content_type.mime().to_string()),
    ]
}
