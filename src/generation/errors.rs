//! Error types for the generation domain

use crate::infrastructure::templates::TemplateError;
use thiserror::Error;

/// Errors that can occur while materializing a project
///
/// Missing non-base templates are not errors; they are recorded as skips in
/// the [`GenerationReport`](crate::generation::GenerationReport).
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Missing base template: {0}")]
    MissingBaseTemplate(String),

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("Template error: {0}")]
    TemplateError(#[from] TemplateError),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
