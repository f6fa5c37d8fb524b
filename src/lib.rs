//! Ignite bootstraps Go service projects.
//! It assembles a declarative description of the project tree from a few
//! choices (database, controller, CI workflow, Dockerfile), writes it to disk
//! and initializes the Go module and git repository.

/// Materialization of project structures on disk
pub mod builder;

/// Command-line interface module for the Ignite application
pub mod cli;

/// Project configuration, flag validation and render context
pub mod config;

pub mod constants;

/// Error types and handling for the Ignite application
pub mod error;

/// Project generation flow and external command execution
pub mod initializer;

/// Template asset loading (embedded or from a directory)
pub mod loader;

pub mod logger;

/// Interactive configuration collection
pub mod prompt;

/// File base name to content mapping
pub mod registry;

/// Template rendering
pub mod renderer;

/// Project structure description and assembly
pub mod structure;
