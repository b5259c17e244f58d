//! Render contexts - the data each template is rendered against

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::catalog::{Integration, ToolPattern};
use crate::generation::{DependencyManifest, GenerationConfig, GenerationError};

/// Named values exposed to a template
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderContext {
    variables: Map<String, JsonValue>,
}

impl RenderContext {
    /// Create a new render context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the render context
    pub fn add_variable(&mut self, key: &str, value: JsonValue) {
        self.variables.insert(key.to_string(), value);
    }

    /// Serialize `value` and add it under `key`
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), GenerationError> {
        self.add_variable(key, serde_json::to_value(value)?);
        Ok(())
    }

    /// Check if a variable exists
    pub fn has_variable(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.variables.get(key)
    }

    pub fn variables(&self) -> &Map<String, JsonValue> {
        &self.variables
    }

    /// Context for the base files and the README
    pub fn for_project(
        config: &GenerationConfig,
        dependencies: &DependencyManifest,
    ) -> Result<Self, GenerationError> {
        let mut context = Self::new();
        context.insert("project_name", &config.project_name)?;
        context.insert("description", &config.description)?;
        context.insert("patterns", &config.selected_patterns)?;
        context.insert("integrations", &config.selected_integrations)?;
        context.insert("dependencies", dependencies)?;
        context.insert("env_vars", &config.env_vars())?;
        Ok(context)
    }

    /// Context for one pattern's tool file
    pub fn for_pattern(
        config: &GenerationConfig,
        pattern: &ToolPattern,
    ) -> Result<Self, GenerationError> {
        let mut context = Self::new();
        context.insert("project_name", &config.project_name)?;
        context.insert("pattern", pattern)?;
        context.insert("integrations", &config.selected_integrations)?;
        Ok(context)
    }

    /// Context for one integration's client file
    pub fn for_integration(
        config: &GenerationConfig,
        integration: &Integration,
    ) -> Result<Self, GenerationError> {
        let mut context = Self::new();
        context.insert("project_name", &config.project_name)?;
        context.insert("integration", integration)?;
        Ok(context)
    }
}
