use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    extract::Path,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const COLLECTION_ROUTE: &str = "/rest/v1/:collection";

pub async fn start_server(
    host: IpAddr,
    port: u16,
    api_key: String,
    collection: String,
) -> anyhow::Result<()> {
    info!("Starting data store testing server on {host}:{port}");
    info!("Base url: http://{host}:{port}/");
    info!("Collection: {collection:?}");
    info!("API key: {api_key:?}");
    info!("Requests need both `apikey: <key>` and `Authorization: Bearer <key>`");
    info!("Rows with an empty column are rejected with a check constraint violation");

    let router = router(DataStoreState::new(api_key, collection).into());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

pub fn router(state: Arc<DataStoreState>) -> Router<()> {
    Router::new()
        .route(COLLECTION_ROUTE, routing::post(insert).get(list_rows))
        .with_state(state)
}

#[derive(Debug)]
pub struct DataStoreState {
    api_key: String,
    collection: String,
    rows: RwLock<Vec<ContactSubmissionRow>>,
    prefer: RwLock<Vec<Option<String>>>,
}

impl DataStoreState {
    pub fn new(api_key: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            collection: collection.into(),
            rows: Default::default(),
            prefer: Default::default(),
        }
    }

    pub async fn rows(&self) -> Vec<ContactSubmissionRow> {
        self.rows.read().await.clone()
    }

    /// `Prefer` header of every accepted insert, in arrival order.
    pub async fn prefer_headers(&self) -> Vec<Option<String>> {
        self.prefer.read().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSubmissionRow {
    pub name: String,
    pub email: String,
    pub message: String,
    pub user_agent: String,
}

type State = axum::extract::State<Arc<DataStoreState>>;

#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

fn error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

fn check_access(state: &DataStoreState, headers: &HeaderMap, collection: &str) -> Option<Response> {
    let value = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());

    if value(header::HeaderName::from_static("apikey")) != Some(state.api_key.as_str()) {
        return Some(error(StatusCode::UNAUTHORIZED, "Invalid API key"));
    }

    let bearer = value(header::AUTHORIZATION).and_then(|v| v.strip_prefix("Bearer "));
    if bearer != Some(state.api_key.as_str()) {
        return Some(error(StatusCode::UNAUTHORIZED, "Invalid bearer token"));
    }

    if collection != state.collection {
        return Some(error(
            StatusCode::NOT_FOUND,
            format!("relation \"public.{collection}\" does not exist"),
        ));
    }

    None
}

async fn insert(
    state: State,
    headers: HeaderMap,
    Path(collection): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    if let Some(response) = check_access(&state, &headers, &collection) {
        return response;
    }

    let row = match serde_json::from_value::<ContactSubmissionRow>(body) {
        Ok(row) => row,
        Err(err) => return error(StatusCode::BAD_REQUEST, err.to_string()),
    };

    if let Some(column) = [
        ("name", &row.name),
        ("email", &row.email),
        ("message", &row.message),
    ]
    .into_iter()
    .find_map(|(column, value)| value.trim().is_empty().then_some(column))
    {
        return error(
            StatusCode::BAD_REQUEST,
            format!(
                "new row for relation \"{collection}\" violates check constraint \"{collection}_{column}_check\""
            ),
        );
    }

    let prefer = headers
        .get("prefer")
        .and_then(|v| v.to_str().ok())
        .map(Into::into);

    info!(%collection, ?prefer, "Inserted row");
    state.rows.write().await.push(row);
    state.prefer.write().await.push(prefer);

    StatusCode::CREATED.into_response()
}

async fn list_rows(state: State, headers: HeaderMap, Path(collection): Path<String>) -> Response {
    if let Some(response) = check_access(&state, &headers, &collection) {
        return response;
    }

    Json(state.rows().await).into_response()
}
