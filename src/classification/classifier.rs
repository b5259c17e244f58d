//! Classifier with remote primary and keyword fallback

use crate::classification::{KeywordClassifier, RequirementClassifier, RequirementSpec};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Produces a [`RequirementSpec`] for any description
///
/// The remote classifier is tried first when one is configured. Any failure
/// (transport, timeout, malformed reply) is logged and answered by the
/// keyword heuristic, so `classify` has no error path. Either way the
/// result names at least one category.
pub struct Classifier {
    primary: Option<Arc<dyn RequirementClassifier>>,
    fallback: KeywordClassifier,
}

impl Classifier {
    /// Classifier that consults `primary` before falling back
    pub fn new(primary: Arc<dyn RequirementClassifier>) -> Self {
        Self {
            primary: Some(primary),
            fallback: KeywordClassifier::new(),
        }
    }

    /// Classifier that only uses the keyword heuristic
    pub fn offline() -> Self {
        Self {
            primary: None,
            fallback: KeywordClassifier::new(),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.primary.is_some()
    }

    pub async fn classify(&self, description: &str) -> RequirementSpec {
        let Some(primary) = &self.primary else {
            debug!("No remote classifier configured, using keyword heuristic");
            return self.fallback.classify(description);
        };

        match primary.classify(description).await {
            Ok(spec) => {
                info!(
                    categories = ?spec.tool_categories,
                    integrations = ?spec.suggested_integrations,
                    "Remote classification succeeded"
                );
                spec.with_default_category().deduplicated()
            }
            Err(e) => {
                warn!(error = %e, "Remote classification failed, falling back to keyword heuristic");
                self.fallback.classify(description)
            }
        }
    }
}
