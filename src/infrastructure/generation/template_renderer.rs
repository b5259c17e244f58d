//! Tera-based template renderer implementation

use std::collections::HashMap;
use std::error::Error as _;
use tera::{Context, Tera, Value};

use crate::generation::utils::{to_camel_case, to_proper_case, to_snake_case};
use crate::generation::{GenerationError, RenderContext, TemplateRenderer};

/// Tera-based template renderer
///
/// Templates get the casing filters `pascal_case`, `camel_case` and
/// `snake_case` in addition to tera's built-ins.
pub struct TeraTemplateRenderer;

impl TeraTemplateRenderer {
    pub fn new() -> Self {
        Self
    }

    fn engine() -> Tera {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.register_filter("pascal_case", casing_filter(to_proper_case));
        tera.register_filter("camel_case", casing_filter(to_camel_case));
        tera.register_filter("snake_case", casing_filter(to_snake_case));
        tera
    }
}

impl Default for TeraTemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for TeraTemplateRenderer {
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &RenderContext,
    ) -> Result<String, GenerationError> {
        let mut tera = Self::engine();
        tera.add_raw_template(name, source).map_err(|e| {
            GenerationError::RenderError(format!("Failed to add template '{name}': {}", chain(&e)))
        })?;

        let tera_context = Context::from_serialize(context.variables()).map_err(|e| {
            GenerationError::RenderError(format!("Invalid render context: {}", chain(&e)))
        })?;

        tera.render(name, &tera_context).map_err(|e| {
            GenerationError::RenderError(format!(
                "Failed to render template '{name}': {}",
                chain(&e)
            ))
        })
    }
}

fn casing_filter(
    convert: fn(&str) -> String,
) -> impl Fn(&Value, &HashMap<String, Value>) -> tera::Result<Value> + Send + Sync {
    move |value, _args| match value.as_str() {
        Some(s) => Ok(Value::String(convert(s))),
        None => Err(tera::Error::msg(format!(
            "casing filters expect a string, got {value}"
        ))),
    }
}

/// Tera nests the useful message in the error source chain
fn chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, Value)]) -> RenderContext {
        let mut context = RenderContext::new();
        for (key, value) in pairs {
            context.add_variable(key, value.clone());
        }
        context
    }

    #[test]
    fn test_interpolation() {
        let renderer = TeraTemplateRenderer::new();
        let rendered = renderer
            .render(
                "package.json.tera",
                r#"{ "name": "{{ project_name }}" }"#,
                &context(&[("project_name", serde_json::json!("build-alerts"))]),
            )
            .unwrap();

        assert_eq!(rendered, r#"{ "name": "build-alerts" }"#);
    }

    #[test]
    fn test_iteration_and_filters() {
        let renderer = TeraTemplateRenderer::new();
        let template = "{% for p in patterns %}{{ p.id | camel_case }}Tools{% if not loop.last %}, {% endif %}{% endfor %} in {{ name | pascal_case }}Server";

        let rendered = renderer
            .render(
                "index.ts.tera",
                template,
                &context(&[
                    ("patterns", serde_json::json!([{ "id": "api" }, { "id": "aws-s3" }])),
                    ("name", serde_json::json!("build-alerts")),
                ]),
            )
            .unwrap();

        assert_eq!(rendered, "apiTools, awsS3Tools in BuildAlertsServer");
    }

    #[test]
    fn test_no_html_escaping() {
        let renderer = TeraTemplateRenderer::new();
        let rendered = renderer
            .render(
                "README.md.html",
                "{{ dep }}",
                &context(&[("dep", serde_json::json!("@slack/web-api <beta>"))]),
            )
            .unwrap();

        assert_eq!(rendered, "@slack/web-api <beta>");
    }

    #[test]
    fn test_missing_variable_is_render_error() {
        let renderer = TeraTemplateRenderer::new();
        let result = renderer.render("broken.tera", "{{ missing }}", &RenderContext::new());

        match result.unwrap_err() {
            GenerationError::RenderError(msg) => {
                assert!(msg.contains("broken.tera"));
                assert!(msg.contains("missing"));
            }
            other => panic!("Expected RenderError, got {other:?}"),
        }
    }

    #[test]
    fn test_casing_filter_rejects_non_strings() {
        let renderer = TeraTemplateRenderer::new();
        let result = renderer.render(
            "number.tera",
            "{{ n | pascal_case }}",
            &context(&[("n", serde_json::json!(3))]),
        );
        assert!(result.is_err());
    }
}
