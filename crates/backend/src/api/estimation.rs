use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use std::path::Path;
use std::sync::Arc;

use contracts::submission::Submission;

use super::AppState;

/// Errors surfaced to the client while handling an estimation submission.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("submitted form is malformed: {0}")]
    BadSubmission(#[from] contracts::submission::SubmissionError),
    #[error("submission is missing a building name")]
    MissingBuildingName,
    #[error("building name `{0}` is not usable as a file name")]
    UnsafeBuildingName(String),
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadSubmission(_)
            | ApiError::MissingBuildingName
            | ApiError::UnsafeBuildingName(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::error!("estimation submission failed: {}", self);
        (status, self.to_string()).into_response()
    }
}

/// GET /app/ serves the form page from the frontend bundle.
pub async fn page_main(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    serve_bundle_page(&state.config.storage.static_dir, "index.html").await
}

/// GET /app/result/ serves the static confirmation page.
pub async fn page_result(State(state): State<Arc<AppState>>) -> Result<Html<String>, StatusCode> {
    serve_bundle_page(&state.config.storage.static_dir, "result.html").await
}

async fn serve_bundle_page(static_dir: &str, page: &str) -> Result<Html<String>, StatusCode> {
    let path = Path::new(static_dir).join(page);
    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(Html(body)),
        Err(e) => {
            tracing::error!("cannot read {}: {}", path.display(), e);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// POST /app/ parses the flat field list, writes the building configuration
/// to a timestamped JSON file and redirects to the confirmation page.
pub async fn submit_estimation(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, ApiError> {
    let submission = Submission::from_pairs(&pairs)?;

    let building_name = submission
        .building
        .get("building_name")
        .filter(|name| !name.is_empty())
        .ok_or(ApiError::MissingBuildingName)?;
    // The name becomes part of the output path.
    if !is_safe_name_component(building_name) {
        return Err(ApiError::UnsafeBuildingName(building_name.clone()));
    }

    let stamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let file_name = format!("building_config.{building_name}.{stamp}.json");
    let path = Path::new(&state.config.storage.building_config_dir).join(&file_name);

    let body = serde_json::to_string_pretty(&submission)?;
    tokio::fs::write(&path, body).await?;

    tracing::info!(
        sections = submission.sections.len(),
        "stored building configuration {}",
        path.display()
    );

    Ok(Redirect::to("/app/result/"))
}

/// Whether a submitted name may be embedded in a file name without
/// escaping the configured output directory.
fn is_safe_name_component(name: &str) -> bool {
    !name.contains(['/', '\\', '\0']) && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_unicode_names_are_accepted() {
        assert!(is_safe_name_component("測試大樓"));
        assert!(is_safe_name_component("Tower A-1"));
    }

    #[test]
    fn path_escapes_are_rejected() {
        assert!(!is_safe_name_component("../../x"));
        assert!(!is_safe_name_component("a/b"));
        assert!(!is_safe_name_component("a\\b"));
        assert!(!is_safe_name_component(".."));
        assert!(!is_safe_name_component("a\0b"));
    }
}
