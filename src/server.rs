use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::http::{Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use crate::render;
use crate::template::TemplateSource;
use crate::theme::Theme;

/// Path prefix covered by the CORS preflight gate.
const API_PREFIX: &str = "/api";

#[derive(Clone)]
struct AppState {
    template: Arc<TemplateSource>,
}

#[derive(Debug, Deserialize)]
struct PreviewParams {
    url: Option<String>,
    theme: Option<String>,
}

pub fn app(template: TemplateSource) -> Router {
    let state = AppState {
        template: Arc::new(template),
    };
    Router::new()
        .route("/api/preview", any(preview))
        .fallback(not_found)
        .layer(middleware::from_fn(preflight))
        .with_state(state)
}

/// Short-circuit CORS preflights for the whole API surface, matched routes
/// or not. Everything else passes through untouched.
async fn preflight(req: Request, next: Next) -> Response {
    if req.method() == Method::OPTIONS && req.uri().path().starts_with(API_PREFIX) {
        return StatusCode::OK.into_response();
    }
    next.run(req).await
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn preview(
    State(state): State<AppState>,
    method: Method,
    Query(params): Query<PreviewParams>,
) -> Response {
    if method != Method::GET {
        return (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "message": "Method not allowed", "wants": "GET" })),
        )
            .into_response();
    }

    let template = match state.template.load().await {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(error = %err, "load preview template");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let theme = Theme::from_query(params.theme.as_deref());
    tracing::debug!(theme = theme.name(), has_url = params.url.is_some(), "render preview");

    let html = render::render_preview(&template, theme, params.url.as_deref());
    ([(header::CONTENT_TYPE, "text/html")], html).into_response()
}
