//! Blocking convenience API: build, execute, check, extract.
//!
//! # Design
//! `Alma` pairs an [`AlmaClient`] with a [`Transport`]. The client is
//! immutable and the transport is only borrowed per call, so one `Alma` can
//! serve any number of callers. Errors surface on the first failure; nothing
//! is retried.

use tracing::debug;

use crate::client::{check_status, AlmaClient};
use crate::config::Config;
use crate::content::{extract_content, Content};
use crate::error::Result;
use crate::headers::ContentType;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::records::{Bib, Holding, Item, Record};
use crate::resource::{Ids, ResourceKind};
use crate::transport::{Transport, UreqTransport};

/// Alma API session over a blocking transport.
#[derive(Debug, Clone)]
pub struct Alma<T = UreqTransport> {
    client: AlmaClient,
    transport: T,
}

impl Alma<UreqTransport> {
    pub fn new(config: Config) -> Self {
        Self::with_transport(AlmaClient::new(config), UreqTransport::new())
    }

    /// Resolve configuration from `ALMA_API_KEY` and `ALMA_API_REGION`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(Config::resolve(None, None)?))
    }
}

impl<T: Transport> Alma<T> {
    pub fn with_transport(client: AlmaClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &AlmaClient {
        &self.client
    }

    pub fn baseurl(&self) -> &str {
        self.client.baseurl()
    }

    pub fn fullurl(&self, kind: ResourceKind, ids: &Ids) -> Result<String> {
        self.client.fullurl(kind, ids)
    }

    pub fn headers(&self, content_type: ContentType) -> Vec<(String, String)> {
        self.client.headers(content_type)
    }

    /// Execute a prepared request. Non-2xx statuses become errors; a
    /// successful response is returned untouched.
    pub fn send(&self, request: &HttpRequest) -> Result<HttpResponse> {
        let response = self.transport.execute(request)?;
        check_status(&response)?;
        Ok(response)
    }

    /// Issue a body-less request for `kind` with the default headers.
    pub fn request(&self, method: HttpMethod, kind: ResourceKind, ids: &Ids) -> Result<HttpResponse> {
        let request = HttpRequest {
            method,
            url: self.client.fullurl(kind, ids)?,
            headers: self.client.headers(ContentType::default()),
            body: None,
        };
        self.send(&request)
    }

    pub fn extract_content(&self, response: &HttpResponse) -> Result<Content> {
        extract_content(response)
    }

    /// GET `kind` and extract its content.
    pub fn get(&self, kind: ResourceKind, ids: &Ids, content_type: ContentType) -> Result<Content> {
        let request = self.client.build_get(kind, ids, content_type)?;
        let response = self.send(&request)?;
        debug!(resource = %kind, "fetched resource");
        extract_content(&response)
    }

    /// PUT `body` to `kind` and extract the server's copy of the record.
    pub fn put(&self, kind: ResourceKind, ids: &Ids, body: &Content) -> Result<Content> {
        let request = self.client.build_put(kind, ids, body)?;
        let response = self.send(&request)?;
        debug!(resource = %kind, "updated resource");
        extract_content(&response)
    }

    /// Fetch any record wrapper by its identifiers.
    pub fn fetch<R: Record>(&self, ids: &Ids, content_type: ContentType) -> Result<R> {
        self.get(R::KIND, ids, content_type).map(R::from_content)
    }

    pub fn get_bib(&self, mms_id: impl std::fmt::Display) -> Result<Content> {
        self.get(ResourceKind::Bib, &Ids::bib(mms_id), ContentType::Json)
    }

    pub fn get_holdings(&self, mms_id: impl std::fmt::Display) -> Result<Content> {
        self.get(ResourceKind::Holdings, &Ids::bib(mms_id), ContentType::Json)
    }

    pub fn get_holding(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
    ) -> Result<Content> {
        self.get(
            ResourceKind::Holding,
            &Ids::holding(mms_id, holding_id),
            ContentType::Json,
        )
    }

    pub fn get_items(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
    ) -> Result<Content> {
        self.get(
            ResourceKind::Items,
            &Ids::holding(mms_id, holding_id),
            ContentType::Json,
        )
    }

    pub fn get_item(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
        item_pid: impl std::fmt::Display,
    ) -> Result<Content> {
        self.get(
            ResourceKind::Item,
            &Ids::item(mms_id, holding_id, item_pid),
            ContentType::Json,
        )
    }

    pub fn get_bib_requests(&self, mms_id: impl std::fmt::Display) -> Result<Content> {
        self.get(ResourceKind::BibRequests, &Ids::bib(mms_id), ContentType::Json)
    }

    pub fn get_item_requests(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
        item_pid: impl std::fmt::Display,
    ) -> Result<Content> {
        self.get(
            ResourceKind::ItemRequests,
            &Ids::item(mms_id, holding_id, item_pid),
            ContentType::Json,
        )
    }

    pub fn bib(&self, mms_id: impl std::fmt::Display) -> Result<Bib> {
        self.get_bib(mms_id).map(Bib::new)
    }

    pub fn holding(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
    ) -> Result<Holding> {
        self.get_holding(mms_id, holding_id).map(Holding::new)
    }

    pub fn item(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
        item_pid: impl std::fmt::Display,
    ) -> Result<Item> {
        self.get_item(mms_id, holding_id, item_pid).map(Item::new)
    }

    pub fn put_bib(&self, mms_id: impl std::fmt::Display, body: &Content) -> Result<Bib> {
        self.put(ResourceKind::Bib, &Ids::bib(mms_id), body).map(Bib::new)
    }

    pub fn put_holding(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
        body: &Content,
    ) -> Result<Holding> {
        self.put(ResourceKind::Holding, &Ids::holding(mms_id, holding_id), body)
            .map(Holding::new)
    }

    pub fn put_item(
        &self,
        mms_id: impl std::fmt::Display,
        holding_id: impl std::fmt::Display,
        item_pid: impl std::fmt::Display,
        body: &Content,
    ) -> Result<Item> {
        self.put(ResourceKind::Item, &Ids::item(mms_id, holding_id, item_pid), body)
            .map(Item::new)
    }
}
