//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0} environment variable is required (or pass --offline to use keyword classification)")]
    CredentialMissing(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error("Generation error: {0}")]
    GenerationError(#[from] crate::generation::GenerationError),

    #[error("Classifier error: {0}")]
    ClassificationError(#[from] crate::classification::ClassificationError),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] crate::catalog::CatalogError),

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::infrastructure::templates::TemplateError),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("Description cannot be empty")]
    EmptyDescription,
}
