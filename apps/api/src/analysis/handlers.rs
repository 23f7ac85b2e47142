//! Axum route handler for the analyze endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use tracing::info;

use crate::analysis::{analyze_resume_text, models::AnalysisResult};
use crate::errors::AppError;
use crate::extract::is_allowed_file;
use crate::state::AppState;

/// Extracted text shorter than this is rejected as unanalyzable.
const MIN_TEXT_CHARS: usize = 50;

/// POST /api/v1/analyze
///
/// Accepts a single multipart field named `file`, extracts its text, and
/// returns the aggregated analysis. Nothing is persisted; the uploaded
/// bytes live only for the duration of the request.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        if !is_allowed_file(&filename) {
            return Err(AppError::Validation(
                "Invalid file type. Please upload PDF or image (PNG, JPG, JPEG, GIF, BMP)"
                    .to_string(),
            ));
        }

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid file: {e}")))?;

        let text = state.extractor.extract(&filename, &data).await?;
        if text.trim().chars().count() < MIN_TEXT_CHARS {
            return Err(AppError::Validation(
                "Could not extract enough text from the file. Please ensure the file contains readable text."
                    .to_string(),
            ));
        }

        info!(filename = %filename, bytes = data.len(), "Analyzing uploaded resume");
        return Ok(Json(analyze_resume_text(&text)));
    }

    Err(AppError::Validation("No file uploaded".to_string()))
}
