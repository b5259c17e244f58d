//! Port interfaces for the classification domain

use crate::classification::{ClassificationError, RequirementSpec};
use async_trait::async_trait;

/// Turns a free-text description into a requirement specification
#[async_trait]
pub trait RequirementClassifier: Send + Sync {
    /// Classify a description; errors are recoverable by the caller
    async fn classify(&self, description: &str) -> Result<RequirementSpec, ClassificationError>;
}
