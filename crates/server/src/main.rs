use std::{net::SocketAddr, path::Path, sync::Arc};

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::{Datelike, Utc};
use client_core::{ContactForm, SubmitOutcome};
use motion::ThemeMode;
use serde::Deserialize;
use server_api::{create_inquiry, health, ApiContext};
use shared::{
    domain::Inquiry,
    error::{ApiError, ErrorCode},
    protocol::{healthz_route, inquiries_route, CreateInquiryRequest},
};
use site::{render_page, PageConfig};
use tower_http::{
    limit::RequestBodyLimitLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::{AppState, LocalTransport};
use config::load_settings;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    theme: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ContactSubmission {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = load_settings()?;
    let store = storage::select_store(settings.database_url.as_deref())
        .await
        .context("invalid database configuration")?;
    let api = ApiContext::new(store);
    info!(mode = api.mode().as_str(), "inquiry persistence selected");
    if let Err(error) = health(&api).await {
        warn!(message = %error.message, "inquiry store not reachable yet; serving anyway");
    }

    let state = AppState {
        api,
        scene: settings.scene,
    };
    let app = build_router(Arc::new(state), &settings.assets_dir);

    let addr: SocketAddr = settings
        .server_bind
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.server_bind))?;
    info!(%addr, assets = %settings.assets_dir.display(), "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, assets_dir: &Path) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/contact", post(contact_form))
        .route(inquiries_route(), post(http_create_inquiry))
        .route(healthz_route(), get(healthz))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Unknown or missing values fall back to the default theme.
fn theme_from_query(raw: Option<&str>) -> ThemeMode {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

fn page_config(state: &AppState, theme: ThemeMode) -> PageConfig {
    let mut config = PageConfig::new(theme, Utc::now().year());
    config.scene = state.scene;
    config
}

async fn landing_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let config = page_config(&state, theme_from_query(query.theme.as_deref()));
    Html(render_page(&config, &ContactForm::new()))
}

async fn contact_form(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<ContactSubmission>,
) -> impl IntoResponse {
    let config = page_config(&state, theme_from_query(submission.theme.as_deref()));
    let mut form =
        ContactForm::with_values(submission.name, submission.email, submission.message);

    let status = match form.submit(&LocalTransport(&state.api)).await {
        SubmitOutcome::Sent(_) => StatusCode::OK,
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Failed(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    (status, Html(render_page(&config, &form)))
}

async fn http_create_inquiry(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateInquiryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Inquiry>), (StatusCode, Json<ApiError>)> {
    let Json(request) = payload.map_err(|rejection| {
        let code = if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ErrorCode::TooLarge
        } else {
            ErrorCode::Validation
        };
        (
            status_for(code),
            Json(ApiError::new(code, rejection.body_text())),
        )
    })?;

    let inquiry = create_inquiry(&state.api, request)
        .await
        .map_err(|e| (status_for(e.code), Json(e)))?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

async fn healthz(State(state): State<Arc<AppState>>) -> (StatusCode, &'static str) {
    match health(&state.api).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(_) => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::TooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        ErrorCode::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
