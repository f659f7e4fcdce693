//! Response content extraction: parsed JSON or raw XML text.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::headers::ContentType;
use crate::http::HttpResponse;

/// Decoded body of an Alma response, or a body to send with a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Json(Value),
    Xml(String),
}

impl Content {
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Json(_) => ContentType::Json,
            Content::Xml(_) => ContentType::Xml,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Content::Json(value) => Some(value),
            Content::Xml(_) => None,
        }
    }

    pub fn as_xml(&self) -> Option<&str> {
        match self {
            Content::Json(_) => None,
            Content::Xml(text) => Some(text),
        }
    }

    /// Serialize for use as a request body.
    pub fn to_body(&self) -> Result<String> {
        match self {
            Content::Json(value) => {
                serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
            }
            Content::Xml(text) => Ok(text.clone()),
        }
    }
}

impl From<Value> for Content {
    fn from(value: Value) -> Self {
        Content::Json(value)
    }
}

/// True when the media type (parameters stripped) denotes JSON.
pub fn is_json_media_type(content_type: &str) -> bool {
    let media = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    media == "application/json" || media.ends_with("+json")
}

/// Decode a response body according to its declared content type.
///
/// JSON bodies are parsed; every other body, including one with no
/// `Content-Type` at all, is returned verbatim as [`Content::Xml`].
pub fn extract_content(response: &HttpResponse) -> Result<Content> {
    match response.content_type() {
        Some(ct) if is_json_media_type(ct) => serde_json::from_str(&response.body)
            .map(Content::Json)
            .map_err(|e| ApiError::DeserializationError(e.to_string())),
        _ => Ok(Content::Xml(response.body.clone())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn response(content_type: Option<&str>, body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            headers: content_type
                .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
                .unwrap_or_default(),
            body: body.to_string(),
        }
    }

    #[test]
    fn json_is_parsed() {
        let resp = response(Some("application/json"), r#"{"mms_id":"1","title":"T"}"#);
        let content = extract_content(&resp).unwrap();
        assert_eq!(content, Content::Json(json!({"mms_id": "1", "title": "T"})));
    }

    #[test]
    fn json_with_charset_is_parsed() {
        let resp = response(Some("application/json;charset=UTF-8"), "[1,2]");
        assert_eq!(extract_content(&resp).unwrap(), Content::Json(json!([1, 2])));
    }

    #[test]
    fn xml_is_returned_verbatim() {
        let body = "<?xml version=\"1.0\"?>\n<bib><mms_id>1</mms_id></bib>\n";
        let resp = response(Some("application/xml"), body);
        assert_eq!(extract_content(&resp).unwrap(), Content::Xml(body.to_string()));
    }

    #[test]
    fn missing_content_type_is_treated_as_text() {
        let resp = response(None, "{}");
        assert_eq!(extract_content(&resp).unwrap(), Content::Xml("{}".to_string()));
    }

    #[test]
    fn malformed_json_fails() {
        let resp = response(Some("application/json"), "not json");
        assert!(matches!(
            extract_content(&resp),
            Err(ApiError::DeserializationError(_))
        ));
    }

    #[test]
    fn media_type_detection() {
        assert!(is_json_media_type("Application/JSON"));
        assert!(is_json_media_type("application/problem+json"));
        assert!(!is_json_media_type("application/xml"));
        assert!(!is_json_media_type("text/plain"));
    }

    #[test]
    fn body_serialization_follows_variant() {
        let json = Content::Json(json!({"a": 1}));
        assert_eq!(json.to_body().unwrap(), r#"{"a":1}"#);
        assert_eq!(json.content_type(), ContentType::Json);

        let xml = Content::Xml("<bib/>".to_string());
        assert_eq!(xml.to_body().unwrap(), "<bib/>");
        assert_eq!(xml.content_type(), ContentType::Xml);
    }
}
