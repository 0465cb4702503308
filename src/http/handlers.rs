//! Route handlers for the render service.

use std::time::Instant;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::http::request;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::error::RenderError;
use crate::render::{build_document, split_fragments};

const PDF_CONTENT_TYPE: &str = "application/pdf";
const PDF_DISPOSITION: &str = "attachment; filename=\"equations.pdf\"";

/// Body of `POST /render`.
#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    /// All equations in one string, separated by the `**` delimiter.
    pub equations_raw: String,

    #[serde(default)]
    pub page_break_between: bool,

    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Equations".to_string()
}

/// `POST /render`: decode, assemble, compile, and return the PDF.
pub async fn render(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<RenderRequest>,
) -> Response {
    let started = Instant::now();
    let request_id = request::request_id(&headers).to_string();

    tracing::debug!(
        request_id = %request_id,
        raw_bytes = req.equations_raw.len(),
        page_break_between = req.page_break_between,
        "Render request received"
    );

    let fragments = match split_fragments(&req.equations_raw) {
        Ok(fragments) => fragments,
        Err(err) => return render_failure(&request_id, err, started),
    };

    let document = build_document(&req.title, &fragments, req.page_break_between);

    match state.compiler.compile(&document).await {
        Ok(pdf) => {
            metrics::record_render("ok", started);
            tracing::info!(
                request_id = %request_id,
                fragments = fragments.len(),
                artifact_bytes = pdf.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Rendered equations to PDF"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, PDF_CONTENT_TYPE),
                    (header::CONTENT_DISPOSITION, PDF_DISPOSITION),
                ],
                pdf,
            )
                .into_response()
        }
        Err(err) => render_failure(&request_id, err, started),
    }
}

/// `GET /`: status payload with an example request body.
pub async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Service OK. POST /render with JSON {\"equations_raw\": \"...\"}",
        "example_payload": {
            "equations_raw": "$20 \\mathrm{~m} / \\mathrm{s}$**$9.81 \\mathrm{~m} / \\mathrm{s}^{2}$**\\[ E = mc^2 \\]",
            "page_break_between": false,
            "title": "Equations"
        }
    }))
}

/// Map a render error onto an HTTP status and JSON `detail` body.
fn render_failure(request_id: &str, err: RenderError, started: Instant) -> Response {
    let outcome = match &err {
        RenderError::InvalidInput(_) => "invalid_input",
        RenderError::CompilationFailed { .. } => "compilation_failed",
        RenderError::Io(_) => "io_error",
    };
    metrics::record_render(outcome, started);

    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    tracing::warn!(
        request_id = %request_id,
        status = %status,
        error = %err,
        "Render request failed"
    );

    (status, Json(json!({ "detail": err.to_string() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_request_fills_in_defaults() {
        let req: RenderRequest =
            serde_json::from_str(r#"{"equations_raw": "a**b"}"#).unwrap();
        assert_eq!(req.equations_raw, "a**b");
        assert!(!req.page_break_between);
        assert_eq!(req.title, "Equations");
    }

    #[test]
    fn render_request_requires_equations_raw() {
        let result: Result<RenderRequest, _> = serde_json::from_str(r#"{"title": "T"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn render_request_accepts_all_fields() {
        let req: RenderRequest = serde_json::from_str(
            r#"{"equations_raw": "x", "page_break_between": true, "title": "Homework"}"#,
        )
        .unwrap();
        assert!(req.page_break_between);
        assert_eq!(req.title, "Homework");
    }
}
