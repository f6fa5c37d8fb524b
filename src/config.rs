//! Project configuration for Ignite.
//! Holds the validated choices of one invocation and the data handed to
//! template rendering.

use crate::constants::{SQL_PACKAGE_DATABASE, SUPPORTED_CONTROLLERS, SUPPORTED_DATABASES};
use crate::error::{Error, Result};
use serde::Serialize;
use std::path::PathBuf;

/// Validated set of choices driving structure assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Directory the project is generated into
    pub path: PathBuf,
    /// Project name, also used as the Go module path
    pub project_name: String,
    /// Database type, empty when the project has no database
    pub database: String,
    /// Controller type, empty when none was chosen
    pub controller: String,
    pub with_workflow: bool,
    pub with_dockerfile: bool,
    pub verbose: bool,
}

impl ProjectConfig {
    /// Builds the context passed to every template render.
    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(&self.database)
    }
}

/// Data available to templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub database_type: String,
    pub use_sql_package: bool,
}

impl RenderContext {
    pub fn new(database_type: &str) -> Self {
        Self {
            database_type: database_type.to_string(),
            use_sql_package: database_type == SQL_PACKAGE_DATABASE,
        }
    }

    /// Converts the context into the JSON value handed to the renderer.
    pub fn to_value(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| Error::ConfigError(e.to_string()))
    }
}

/// Raw values supplied on the command line, before validation.
#[derive(Debug, Clone, Default)]
pub struct FlagOptions {
    pub path: PathBuf,
    pub project_name: String,
    pub database: String,
    pub controller: String,
    pub with_workflow: bool,
    pub with_dockerfile: bool,
    pub verbose: bool,
}

/// Case-sensitive membership test against a fixed set of choices.
pub fn is_supported(supported: &[&str], item: &str) -> bool {
    supported.iter().any(|s| *s == item)
}

/// Validates flag-supplied values and turns them into a configuration.
///
/// # Errors
/// * `Error::UnsupportedDatabase` if a database was given and is not supported
/// * `Error::UnsupportedController` if a controller was given and is not supported
pub fn collect_from_flags(options: FlagOptions) -> Result<ProjectConfig> {
    if !options.database.is_empty() && !is_supported(&SUPPORTED_DATABASES, &options.database) {
        return Err(Error::UnsupportedDatabase {
            value: options.database,
            supported: SUPPORTED_DATABASES.join(", "),
        });
    }

    if !options.controller.is_empty()
        && !is_supported(&SUPPORTED_CONTROLLERS, &options.controller)
    {
        return Err(Error::UnsupportedController {
            value: options.controller,
            supported: SUPPORTED_CONTROLLERS.join(", "),
        });
    }

    Ok(ProjectConfig {
        path: options.path,
        project_name: options.project_name,
        database: options.database,
        controller: options.controller,
        with_workflow: options.with_workflow,
        with_dockerfile: options.with_dockerfile,
        verbose: options.verbose,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_supported() {
        assert!(is_supported(&SUPPORTED_DATABASES, "mysql"));
        assert!(!is_supported(&SUPPORTED_DATABASES, "sqlite"));
        assert!(!is_supported(&SUPPORTED_DATABASES, "Postgres"));
    }

    #[test]
    fn test_render_context_sql_package() {
        assert!(RenderContext::new("postgres").use_sql_package);
        assert!(!RenderContext::new("mysql").use_sql_package);
        assert!(!RenderContext::new("").use_sql_package);
    }
}
