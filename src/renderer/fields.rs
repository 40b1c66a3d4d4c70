use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::{interface::TemplateRenderer, RenderError};

/// Matches `{{.Field}}`, allowing whitespace inside the braces.
fn field_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\{\{\s*\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}")
            .expect("field token pattern is valid")
    })
}

/// Single-pass field substitution over `{{.Field}}` tokens.
///
/// Fields are looked up as top-level keys of the context object. Every
/// other byte of the template is copied through unchanged, so a template
/// without tokens renders to itself.
#[derive(Debug, Default)]
pub struct FieldRenderer;

impl FieldRenderer {
    pub fn new() -> Self {
        Self
    }

    fn lookup<'c>(
        caps: &Captures<'_>,
        template: &str,
        context: &'c serde_json::Value,
    ) -> Result<&'c str, RenderError> {
        let whole = caps.get(0).map_or(0, |m| m.start());
        let field = caps.get(1).map_or("", |m| m.as_str());
        let line = template[..whole].matches('\n').count() + 1;

        match context.get(field) {
            Some(serde_json::Value::String(value)) => Ok(value.as_str()),
            Some(_) => Err(RenderError::NonStringField { field: field.to_string(), line }),
            None => Err(RenderError::UndefinedField { field: field.to_string(), line }),
        }
    }
}

impl TemplateRenderer for FieldRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, RenderError> {
        let mut rendered = String::with_capacity(template.len());
        let mut last = 0;

        for caps in field_token_regex().captures_iter(template) {
            let Some(token) = caps.get(0) else { continue };
            rendered.push_str(&template[last..token.start()]);
            rendered.push_str(Self::lookup(&caps, template, context)?);
            last = token.end();
        }
        rendered.push_str(&template[last..]);

        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn context() -> serde_json::Value {
        json!({
            "GitPrefix": "github.com/x",
            "Name": "proj",
            "ModuleName": "github.com/x/proj",
        })
    }

    #[test]
    fn substitutes_known_fields() {
        let renderer = FieldRenderer::new();
        let result = renderer
            .render("module {{.ModuleName}}\n// {{ .Name }} by {{.GitPrefix}}", &context())
            .unwrap();
        assert_eq!(result, "module github.com/x/proj\n// proj by github.com/x");
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let renderer = FieldRenderer::new();
        let text = "package main\n\nfunc main() { m := map[string]int{} }\n{{ not a token }}";
        assert_eq!(renderer.render(text, &context()).unwrap(), text);
    }

    #[test]
    fn rendering_twice_is_identity() {
        let renderer = FieldRenderer::new();
        let once = renderer.render("import \"{{.ModuleName}}/pkg\"", &context()).unwrap();
        let twice = renderer.render(&once, &context()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let renderer = FieldRenderer::new();
        let ctx = json!({ "Name": "{{.Other}}" });
        assert_eq!(renderer.render("{{.Name}}", &ctx).unwrap(), "{{.Other}}");
    }

    #[test]
    fn undefined_field_reports_name_and_line() {
        let renderer = FieldRenderer::new();
        let err = renderer.render("package main\n// {{.Version}}\n", &context()).unwrap_err();
        match err {
            RenderError::UndefinedField { field, line } => {
                assert_eq!(field, "Version");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_string_field_is_rejected() {
        let renderer = FieldRenderer::new();
        let err = renderer.render("{{.Count}}", &json!({ "Count": 3 })).unwrap_err();
        assert!(matches!(err, RenderError::NonStringField { .. }));
    }
}
