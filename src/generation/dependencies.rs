//! Dependency manifest aggregation for generated projects

use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::{Integration, ToolPattern};

/// SDK every generated server depends on
pub const BASE_DEPENDENCY: (&str, &str) = ("@modelcontextprotocol/sdk", "^0.4.0");

/// Version constraint used for catalog-declared dependencies
pub const LATEST: &str = "latest";

/// Package name to version constraint, sorted by package name
///
/// Entries are inserted base first, then patterns, then integrations; a later
/// insert for the same package replaces the earlier constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DependencyManifest(BTreeMap<String, String>);

impl DependencyManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of the base SDK and every declared dependency
    pub fn collect(patterns: &[ToolPattern], integrations: &[Integration]) -> Self {
        let mut manifest = Self::new();
        manifest.insert(BASE_DEPENDENCY.0, BASE_DEPENDENCY.1);

        for dep in patterns.iter().flat_map(|p| p.dependencies.iter()) {
            manifest.insert(dep, LATEST);
        }
        for dep in integrations.iter().flat_map(|i| i.dependencies.iter()) {
            manifest.insert(dep, LATEST);
        }

        manifest
    }

    pub fn insert(&mut self, name: &str, version: &str) {
        self.0.insert(name.to_string(), version.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
