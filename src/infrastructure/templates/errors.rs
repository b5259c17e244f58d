//! Error types for the template infrastructure layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by template sources
///
/// A template that simply does not exist is not an error; sources report it
/// as `Ok(None)`.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Template {0} is not valid UTF-8")]
    InvalidEncoding(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
