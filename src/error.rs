//! Error handling for the Ignite application.
//! Defines the error type and result alias used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Ignite operations.
///
/// Every variant is fatal for the invocation: the tool either produces the
/// whole project or stops at the first failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The database type is not a member of the supported set
    #[error("Unsupported database type '{value}'. Supported types are: ({supported}).")]
    UnsupportedDatabase { value: String, supported: String },

    /// The controller type is not a member of the supported set
    #[error("Unsupported controller type '{value}'. Supported types are: ({supported}).")]
    UnsupportedController { value: String, supported: String },

    #[error("Missing project name: the first argument must be the project name.")]
    MissingProjectName,

    /// Interactive prompt could not read an answer
    #[error("Prompt failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents errors in the assembled project structure or its inputs
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    #[error("Failed to create directory '{path}': {source}.")]
    CreateDirectory { path: PathBuf, source: io::Error },

    #[error("Failed to write file '{path}': {source}.")]
    WriteFile { path: PathBuf, source: io::Error },

    /// A structure entry cannot be materialized under its parent
    #[error("Invalid structure entry '{path}': {reason}.")]
    InvalidStructure { path: PathBuf, reason: String },

    /// The registry asks for a template asset that the loader does not have
    #[error("Template '{asset}' for '{name}' was not found.")]
    TemplateNotFound { name: String, asset: String },

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to start '{command}': {source}.")]
    CommandSpawn { command: String, source: io::Error },

    /// An external command exited unsuccessfully
    #[error("Command '{command}' failed with status: {status}.")]
    CommandFailed { command: String, status: String },
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    log::error!("{}", err);
    eprintln!("Error: {}", err);
    std::process::exit(1);
}
