//! Registry of well-known file contents.
//! Maps a file base name either to literal text or to a template asset that
//! has to be rendered with the project's render context.

use crate::constants::TEMPLATE_EXTENSION;
use indexmap::IndexMap;
use std::path::Path;

/// How the content of a registered file is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSpec {
    /// Text written as is
    Literal(String),
    /// Content rendered from the asset named by [`asset_name`]
    Template,
}

/// Immutable lookup table from file base name to [`TemplateSpec`].
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    entries: IndexMap<String, TemplateSpec>,
}

impl TemplateRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the contents shipped for generated Go projects.
    pub fn builtin() -> Self {
        Self::new()
            .with_literal(".gitignore", include_str!("../assets/gitignore"))
            .with_literal("Dockerfile", include_str!("../assets/Dockerfile"))
            .with_literal("main.go", include_str!("../assets/main.go"))
            .with_literal("ci.yml", include_str!("../assets/ci.yml"))
            .with_literal("Makefile", include_str!("../assets/Makefile"))
            .with_literal("README.md", include_str!("../assets/README.md"))
            .with_template("sqlc.yaml")
    }

    pub fn with_literal<S: Into<String>>(mut self, name: &str, content: S) -> Self {
        self.entries.insert(name.to_string(), TemplateSpec::Literal(content.into()));
        self
    }

    pub fn with_template(mut self, name: &str) -> Self {
        self.entries.insert(name.to_string(), TemplateSpec::Template);
        self
    }

    /// Looks up the entry for a file base name.
    pub fn lookup(&self, name: &str) -> Option<&TemplateSpec> {
        self.entries.get(name)
    }
}

/// Derives the template asset name for a file: its stem with the template
/// extension, e.g. `sqlc.yaml` becomes `sqlc.txt`.
pub fn asset_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{}.{}", stem, TEMPLATE_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name() {
        assert_eq!(asset_name("sqlc.yaml"), "sqlc.txt");
        assert_eq!(asset_name("Dockerfile"), "Dockerfile.txt");
        assert_eq!(asset_name("ci.yml"), "ci.txt");
    }
}
