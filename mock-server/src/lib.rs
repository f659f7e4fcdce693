//! In-memory mock of the Alma bibs API, seeded from `test-vectors/`.
//!
//! Serves GET and PUT for bibs, holdings, and items under `/almaws/v1`.
//! Every request needs an `Authorization: apikey <key>` header. A request
//! whose `Content-Type` is XML gets the stored XML representation back;
//! everything else is answered with JSON. A PUT replaces the record in the
//! format it was sent in and drops the other representation, so a record
//! is only served in the formats it was last written in.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const BIB_JSON: &str = include_str!("../../test-vectors/bib.json");
pub const BIB_XML: &str = include_str!("../../test-vectors/bib.xml");
pub const HOLDING_JSON: &str = include_str!("../../test-vectors/holding.json");
pub const ITEM_JSON: &str = include_str!("../../test-vectors/item.json");

pub const MMS_ID: &str = "9922405930001552";
pub const HOLDING_ID: &str = "22115858660001551";
pub const ITEM_PID: &str = "23115858650001551";

/// One stored record in the representations the API can return.
#[derive(Clone, Debug)]
pub struct Stored {
    pub json: Option<Value>,
    pub xml: Option<String>,
}

impl Stored {
    fn json(json: Value) -> Self {
        Self {
            json: Some(json),
            xml: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Store {
    pub bibs: HashMap<String, Stored>,
    pub holdings: HashMap<(String, String), Stored>,
    pub items: HashMap<(String, String, String), Stored>,
}

impl Store {
    /// Store holding the bundled bib, holding, and item fixtures.
    pub fn seeded() -> Self {
        let parse = |raw: &str| -> Value {
            serde_json::from_str(raw).expect("bundled fixture is valid JSON")
        };
        let mut store = Store::default();
        store.bibs.insert(
            MMS_ID.to_string(),
            Stored {
                json: Some(parse(BIB_JSON)),
                xml: Some(BIB_XML.to_string()),
            },
        );
        store.holdings.insert(
            (MMS_ID.to_string(), HOLDING_ID.to_string()),
            Stored::json(parse(HOLDING_JSON)),
        );
        store.items.insert(
            (MMS_ID.to_string(), HOLDING_ID.to_string(), ITEM_PID.to_string()),
            Stored::json(parse(ITEM_JSON)),
        );
        store
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/bibs/{mms_id}", get(get_bib).put(put_bib))
        .route("/bibs/{mms_id}/holdings", get(list_holdings))
        .route(
            "/bibs/{mms_id}/holdings/{holding_id}",
            get(get_holding).put(put_holding),
        )
        .route("/bibs/{mms_id}/holdings/{holding_id}/items", get(list_items))
        .route(
            "/bibs/{mms_id}/holdings/{holding_id}/items/{item_pid}",
            get(get_item).put(put_item),
        )
        .route("/bibs/{mms_id}/requests", get(list_bib_requests))
        .route(
            "/bibs/{mms_id}/holdings/{holding_id}/items/{item_pid}/requests",
            get(list_item_requests),
        )
        .layer(middleware::from_fn(require_apikey))
        .with_state(db);
    Router::new().nest("/almaws/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Reject requests without an `apikey` authorization header.
async fn require_apikey(request: Request, next: Next) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("apikey "))
        .is_some_and(|key| !key.trim().is_empty());
    if !authorized {
        debug!(uri = %request.uri(), "rejecting request without apikey");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn wants_xml(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/xml"))
}

fn render(record: &Stored, headers: &HeaderMap) -> Result<Response, StatusCode> {
    if wants_xml(headers) {
        let xml = record.xml.as_ref().ok_or(StatusCode::NOT_ACCEPTABLE)?;
        return Ok(([(header::CONTENT_TYPE, "application/xml")], xml.clone()).into_response());
    }
    let json = record.json.as_ref().ok_or(StatusCode::NOT_ACCEPTABLE)?;
    Ok(Json(json.clone()).into_response())
}

/// Replace `record` with the request body in the format it was sent in.
/// The representation in the other format is discarded.
fn replace(record: &mut Stored, headers: &HeaderMap, body: String) -> Result<Response, StatusCode> {
    if wants_xml(headers) {
        *record = Stored {
            json: None,
            xml: Some(body),
        };
    } else {
        let json = serde_json::from_str(&body).map_err(|_| StatusCode::BAD_REQUEST)?;
        *record = Stored::json(json);
    }
    render(record, headers)
}

async fn get_bib(
    State(db): State<Db>,
    Path(mms_id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let store = db.read().await;
    let bib = store.bibs.get(&mms_id).ok_or(StatusCode::NOT_FOUND)?;
    render(bib, &headers)
}

async fn put_bib(
    State(db): State<Db>,
    Path(mms_id): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, StatusCode> {
    let mut store = db.write().await;
    let bib = store.bibs.get_mut(&mms_id).ok_or(StatusCode::NOT_FOUND)?;
    let response = replace(bib, &headers, body)?;
    info!(%mms_id, "bib updated");
    Ok(response)
}

async fn list_holdings(
    State(db): State<Db>,
    Path(mms_id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    if !store.bibs.contains_key(&mms_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let holdings: Vec<Value> = store
        .holdings
        .iter()
        .filter(|((bib, _), _)| *bib == mms_id)
        .filter_map(|(_, h)| h.json.clone())
        .collect();
    Ok(Json(json!({
        "holding": holdings,
        "total_record_count": holdings.len(),
    })))
}

async fn get_holding(
    State(db): State<Db>,
    Path((mms_id, holding_id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let store = db.read().await;
    let holding = store
        .holdings
        .get(&(mms_id, holding_id))
        .ok_or(StatusCode::NOT_FOUND)?;
    render(holding, &headers)
}

async fn put_holding(
    State(db): State<Db>,
    Path((mms_id, holding_id)): Path<(String, String)>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, StatusCode> {
    let mut store = db.write().await;
    let key = (mms_id, holding_id);
    let holding = store.holdings.get_mut(&key).ok_or(StatusCode::NOT_FOUND)?;
    let response = replace(holding, &headers, body)?;
    info!(mms_id = %key.0, holding_id = %key.1, "holding updated");
    Ok(response)
}

async fn list_items(
    State(db): State<Db>,
    Path((mms_id, holding_id)): Path<(String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    if !store.holdings.contains_key(&(mms_id.clone(), holding_id.clone())) {
        return Err(StatusCode::NOT_FOUND);
    }
    let items: Vec<Value> = store
        .items
        .iter()
        .filter(|((bib, hol, _), _)| *bib == mms_id && *hol == holding_id)
        .filter_map(|(_, i)| i.json.clone())
        .collect();
    Ok(Json(json!({
        "item": items,
        "total_record_count": items.len(),
    })))
}

async fn get_item(
    State(db): State<Db>,
    Path((mms_id, holding_id, item_pid)): Path<(String, String, String)>,
    headers: HeaderMap,
) -> Result<Response, StatusCode> {
    let store = db.read().await;
    let item = store
        .items
        .get(&(mms_id, holding_id, item_pid))
        .ok_or(StatusCode::NOT_FOUND)?;
    render(item, &headers)
}

async fn put_item(
    State(db): State<Db>,
    Path((mms_id, holding_id, item_pid)): Path<(String, String, String)>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, StatusCode> {
    let mut store = db.write().await;
    let key = (mms_id, holding_id, item_pid);
    let item = store.items.get_mut(&key).ok_or(StatusCode::NOT_FOUND)?;
    let response = replace(item, &headers, body)?;
    info!(mms_id = %key.0, holding_id = %key.1, item_pid = %key.2, "item updated");
    Ok(response)
}

// The mock keeps no requests; it only distinguishes known from unknown ids.
async fn list_bib_requests(
    State(db): State<Db>,
    Path(mms_id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    if !store.bibs.contains_key(&mms_id) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({"user_request": [], "total_record_count": 0})))
}

async fn list_item_requests(
    State(db): State<Db>,
    Path(key): Path<(String, String, String)>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    if !store.items.contains_key(&key) {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({"user_request": [], "total_record_count": 0})))
}
