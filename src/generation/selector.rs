//! Resolution of classifier identifiers against the catalog

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use crate::catalog::{Catalog, Integration, ToolPattern};

/// Maps category and integration ids to catalog records
///
/// Unknown ids are dropped without error and repeated ids resolve once, in
/// order of first appearance.
#[derive(Debug, Clone)]
pub struct Selector {
    catalog: Arc<Catalog>,
}

impl Selector {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolve_patterns<S: AsRef<str>>(&self, categories: &[S]) -> Vec<ToolPattern> {
        resolve(categories, "category", |id| self.catalog.pattern(id))
    }

    pub fn resolve_integrations<S: AsRef<str>>(&self, ids: &[S]) -> Vec<Integration> {
        resolve(ids, "integration", |id| self.catalog.integration(id))
    }
}

fn resolve<'a, S, T, F>(ids: &[S], kind: &str, lookup: F) -> Vec<T>
where
    S: AsRef<str>,
    T: Clone + 'a,
    F: Fn(&str) -> Option<&'a T>,
{
    let mut seen = HashSet::new();
    let mut resolved = Vec::new();

    for id in ids.iter().map(AsRef::as_ref) {
        if !seen.insert(id) {
            continue;
        }
        match lookup(id) {
            Some(record) => resolved.push(record.clone()),
            None => debug!(kind, id, "Ignoring identifier not present in catalog"),
        }
    }

    resolved
}
