use std::sync::Arc;

use crate::config::Config;
use crate::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document extractor. Default: `DocumentExtractor`
    /// (pdf-extract for PDFs, a tesseract subprocess for images).
    pub extractor: Arc<dyn TextExtractor>,
}
