use std::{net::IpAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing, Form, Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

pub const SUBMIT_ROUTE: &str = "/";
pub const SUBMISSIONS_ROUTE: &str = "/_submissions";

pub async fn start_server(
    host: IpAddr,
    port: u16,
    form_name: String,
    honeypot_field: String,
) -> anyhow::Result<()> {
    info!("Starting form relay testing server on {host}:{port}");
    info!("Form endpoint: http://{host}:{port}{SUBMIT_ROUTE}");
    info!("Received submissions: http://{host}:{port}{SUBMISSIONS_ROUTE}");
    info!("Form name: {form_name:?}");
    info!("Honeypot field: {honeypot_field:?}");

    let router = router(RelayState::new(form_name, honeypot_field).into());

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

pub fn router(state: Arc<RelayState>) -> Router<()> {
    Router::new()
        .route(SUBMIT_ROUTE, routing::post(submit))
        .route(SUBMISSIONS_ROUTE, routing::get(list_submissions))
        .with_state(state)
}

#[derive(Debug)]
pub struct RelayState {
    form_name: String,
    honeypot_field: String,
    submissions: RwLock<Vec<RelaySubmission>>,
}

impl RelayState {
    pub fn new(form_name: impl Into<String>, honeypot_field: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
            honeypot_field: honeypot_field.into(),
            submissions: Default::default(),
        }
    }

    pub async fn submissions(&self) -> Vec<RelaySubmission> {
        self.submissions.read().await.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelaySubmission {
    /// Form fields in the order they were received.
    pub fields: Vec<(String, String)>,
    /// Set when the honeypot field was filled in.
    pub spam: bool,
}

type State = axum::extract::State<Arc<RelayState>>;

async fn submit(state: State, Form(fields): Form<Vec<(String, String)>>) -> Response {
    let value = |key: &str| {
        fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    if value("form-name") != Some(state.form_name.as_str()) {
        return (StatusCode::NOT_FOUND, "Form not found").into_response();
    }

    let spam = value(state.honeypot_field.as_str()).is_some_and(|v| !v.is_empty());
    info!(spam, "Received form submission");

    state
        .submissions
        .write()
        .await
        .push(RelaySubmission { fields, spam });

    Html("<h1>Thank you!</h1>").into_response()
}

async fn list_submissions(state: State) -> Json<Vec<RelaySubmission>> {
    Json(state.submissions().await)
}
