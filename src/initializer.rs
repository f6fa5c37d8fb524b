//! Project initialization: prepares the target directory, builds the tree
//! and hands over to the Go and git tooling.

use crate::builder::TreeBuilder;
use crate::config::ProjectConfig;
use crate::error::{Error, Result};
use crate::loader::AssetLoader;
use crate::registry::TemplateRegistry;
use crate::renderer::TemplateRenderer;
use crate::structure::build_structure;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use walkdir::WalkDir;

/// Capability for running external programs.
pub trait CommandRunner {
    /// Runs `program` with `args` in `dir` and waits for it to finish.
    ///
    /// # Errors
    /// * `Error::CommandSpawn` if the program cannot be started
    /// * `Error::CommandFailed` if it exits unsuccessfully
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()>;
}

/// Runs programs as child processes sharing this process's stdout and stderr.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str], dir: &Path) -> Result<()> {
        let command = format_command(program, args);
        debug!("Running '{}' in {}", command, dir.display());

        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandSpawn { command: command.clone(), source })?;

        if !status.success() {
            return Err(Error::CommandFailed { command, status: status.to_string() });
        }

        Ok(())
    }
}

fn format_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

/// Drives one project generation.
pub struct ProjectInitializer<'a> {
    registry: &'a TemplateRegistry,
    loader: &'a dyn AssetLoader,
    renderer: &'a dyn TemplateRenderer,
    runner: &'a dyn CommandRunner,
    skip_init: bool,
}

impl<'a> ProjectInitializer<'a> {
    pub fn new(
        registry: &'a TemplateRegistry,
        loader: &'a dyn AssetLoader,
        renderer: &'a dyn TemplateRenderer,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self { registry, loader, renderer, runner, skip_init: false }
    }

    /// Skips `go mod init` and `git init`.
    pub fn skip_init(mut self, skip: bool) -> Self {
        self.skip_init = skip;
        self
    }

    /// Generates the project described by `config`.
    ///
    /// Creates the target directory when missing, makes it the working
    /// directory, builds the tree and initializes the module and repository.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Absolute path of the generated project
    pub fn run(&self, config: &ProjectConfig) -> Result<PathBuf> {
        info!("Initializing project {}", config.project_name);

        let project_dir = prepare_project_dir(&config.path)?;
        change_working_dir(&project_dir)?;

        self.create_project_structure(config, &project_dir)?;

        if self.skip_init {
            info!("Skipping module and repository initialization");
        } else {
            self.initialize_modules(config, &project_dir)?;
        }

        Ok(project_dir)
    }

    /// Assembles the structure for `config` and materializes it in `project_dir`.
    pub fn create_project_structure(
        &self,
        config: &ProjectConfig,
        project_dir: &Path,
    ) -> Result<()> {
        let structure = build_structure(config)?;
        let builder = TreeBuilder::new(self.registry, self.loader, self.renderer);
        builder.materialize(&structure, project_dir, &config.render_context())
    }

    fn initialize_modules(&self, config: &ProjectConfig, project_dir: &Path) -> Result<()> {
        info!("Initializing go module...");
        self.runner.run("go", &["mod", "init", &config.project_name], project_dir)?;

        info!("Initializing git repository...");
        self.runner.run("git", &["init"], project_dir)?;

        Ok(())
    }
}

/// Creates `path` if needed and returns its canonical form.
pub fn prepare_project_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        info!("Creating project directory: {}", path.display());
        std::fs::create_dir_all(path)
            .map_err(|source| Error::CreateDirectory { path: path.to_path_buf(), source })?;
    }
    if !path.is_dir() {
        return Err(Error::ConfigError(format!("'{}' is not a directory", path.display())));
    }
    path.canonicalize().map_err(Error::IoError)
}

pub fn change_working_dir(path: &Path) -> Result<()> {
    debug!("Changing working directory to {}", path.display());
    std::env::set_current_dir(path).map_err(Error::IoError)
}

/// Lists every entry below `root`, relative to it, in a stable order.
pub fn list_entries(root: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if let Ok(relative) = entry.path().strip_prefix(root) {
            entries.push(relative.to_path_buf());
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_command() {
        assert_eq!(format_command("go", &["mod", "init", "demo"]), "go mod init demo");
        assert_eq!(format_command("git", &[]), "git");
    }
}
