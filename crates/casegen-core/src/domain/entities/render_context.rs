//! Variable substitution for built-in templates.

use std::collections::HashMap;

use crate::domain::value_objects::{ManifestSettings, ProjectInfo, UseCaseName};

/// Context for template rendering.
///
/// A value object holding the variables available to `{{VARIABLE}}`
/// placeholders. Built-in variables are `SCREAMING_SNAKE_CASE`.
///
/// | Variable | Example | Source |
/// |----------|---------|--------|
/// | `USE_CASE` | "getUser" | User input |
/// | `USE_CASE_CAPITALIZED` | "GetUser" | Computed |
/// | `PROJECT_NAME` | "billing" | User input |
/// | `PROJECT_AUTHOR` | "Ada" | User input |
/// | `PROJECT_DESCRIPTION` | "Billing service" | User input |
/// | `PROJECT_VERSION` | "1.0.0" | Config |
/// | `PROJECT_LICENSE` | "ISC" | Config |
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_use_case(name: &UseCaseName) -> Self {
        Self::new()
            .with_variable("USE_CASE", name.as_str())
            .with_variable("USE_CASE_CAPITALIZED", name.capitalized())
    }

    pub fn for_project(info: &ProjectInfo, manifest: &ManifestSettings) -> Self {
        Self::new()
            .with_variable("PROJECT_NAME", info.name.as_str())
            .with_variable("PROJECT_AUTHOR", info.author.as_str())
            .with_variable("PROJECT_DESCRIPTION", info.description.as_str())
            .with_variable("PROJECT_VERSION", manifest.version.as_str())
            .with_variable("PROJECT_LICENSE", manifest.license.as_str())
    }

    /// Add a variable, consuming self. Later values win.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// Single left-to-right pass: substituted values are copied as-is and
    /// never scanned again, so user input containing `{{...}}` survives
    /// verbatim. Unknown placeholders are kept literally.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };

            match self.variables.get(&after[..end]) {
                Some(value) => {
                    out.push_str(value);
                    rest = &after[end + 2..];
                }
                None => {
                    // Emit one brace and rescan so `{{{KEY}}}` still resolves.
                    out.push('{');
                    rest = &rest[start + 1..];
                }
            }
        }

        out.push_str(rest);
        out
    }
}
