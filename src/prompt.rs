//! Interactive collection of the project configuration.
//! Questions go through the [`Prompter`] trait so the flow can run against
//! a terminal or a scripted answer source.

use crate::config::{is_supported, ProjectConfig};
use crate::constants::{SUPPORTED_CONTROLLERS, SUPPORTED_DATABASES};
use crate::error::Result;
use dialoguer::{Input, Select};
use log::{info, warn};
use std::path::PathBuf;

/// Source of answers for interactive questions.
pub trait Prompter {
    /// Asks the user to pick one of `items` and returns the chosen item.
    fn select(&self, prompt: &str, items: &[&str]) -> Result<String>;

    /// Asks a free-form question.
    fn input(&self, prompt: &str) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> Result<String> {
        let selection = Select::new().with_prompt(prompt).default(0).items(items).interact()?;
        Ok(items[selection].to_string())
    }

    fn input(&self, prompt: &str) -> Result<String> {
        let answer: String = Input::new().with_prompt(prompt).allow_empty(true).interact_text()?;
        Ok(answer)
    }
}

/// Returns true for `yes` and `y`; every other answer means no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim(), "yes" | "y")
}

/// Asks until the answer is one of `supported`.
fn select_supported(prompter: &dyn Prompter, prompt: &str, supported: &[&str]) -> Result<String> {
    loop {
        let answer = prompter.select(prompt, supported)?;
        if is_supported(supported, &answer) {
            return Ok(answer);
        }
        warn!("'{}' is not one of: {}", answer, supported.join(", "));
    }
}

/// Collects the configuration by asking the user.
///
/// # Arguments
/// * `prompter` - Answer source
/// * `path` - Directory the project is generated into
/// * `project_name` - Name given on the command line
/// * `verbose` - Verbose flag from the command line
pub fn collect_interactive(
    prompter: &dyn Prompter,
    path: PathBuf,
    project_name: String,
    verbose: bool,
) -> Result<ProjectConfig> {
    info!("Running in interactive mode.");

    let database = select_supported(prompter, "Choose a database type", &SUPPORTED_DATABASES)?;
    info!("Database: {}", database);

    let controller =
        select_supported(prompter, "Choose a controller type", &SUPPORTED_CONTROLLERS)?;
    info!("Controller: {}", controller);

    let with_workflow = is_affirmative(
        &prompter.input("Do you want to include a GitHub Actions workflow? (yes/no)")?,
    );
    info!("Workflow: {}", with_workflow);

    let with_dockerfile =
        is_affirmative(&prompter.input("Do you want to include a Dockerfile? (yes/no)")?);
    info!("Dockerfile: {}", with_dockerfile);

    Ok(ProjectConfig {
        path,
        project_name,
        database,
        controller,
        with_workflow,
        with_dockerfile,
        verbose,
    })
}
