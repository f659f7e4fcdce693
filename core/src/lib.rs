//! Synchronous client for the Ex Libris Alma bibs API.
//!
//! # Overview
//! Fetches bib, holding, and item records over HTTPS. Requests are described
//! as plain data (`HttpRequest` / `HttpResponse`) so URL and header
//! construction and response extraction can be exercised without a network;
//! a [`Transport`] performs the actual round-trip.
//!
//! # Design
//! - `Config` is resolved once (explicit values or `ALMA_API_KEY` /
//!   `ALMA_API_REGION`) and never mutated afterwards.
//! - `AlmaClient` is stateless beyond that config: `build_*` produces
//!   requests, `parse_content` consumes responses.
//! - `Alma` ties a client to a transport and offers `get_bib`, `bib`, and
//!   friends.
//! - JSON responses are parsed into `serde_json::Value`; any other content
//!   type is handed back as raw text.

pub mod api;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod headers;
pub mod http;
pub mod records;
pub mod region;
pub mod resource;
pub mod transport;

pub use api::Alma;
pub use client::AlmaClient;
pub use config::Config;
pub use content::{extract_content, Content};
pub use error::{ApiError, Result};
pub use headers::{build_headers, ContentType};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use records::{Bib, Holding, Item, Record};
pub use region::Region;
pub use resource::{Ids, ResourceKind};
pub use transport::{Transport, UreqTransport};
