//! Template source traits for the infrastructure layer

use crate::infrastructure::templates::TemplateError;
use async_trait::async_trait;

/// Read access to template text addressed by a path relative to a templates root
///
/// Resolution is a plain join of the root and the relative path; sources do
/// not search fallbacks.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Load a template, returning `Ok(None)` when nothing exists at `relative_path`
    async fn load(&self, relative_path: &str) -> Result<Option<String>, TemplateError>;

    /// Human-readable description of where templates come from
    fn describe(&self) -> String;
}
