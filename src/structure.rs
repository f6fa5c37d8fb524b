//! Declarative description of the generated project tree.
//! A structure maps entry names to nodes; the builder walks it and
//! materializes it on disk.

use crate::config::ProjectConfig;
use crate::constants::GRPC_CONTROLLER;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;

/// Ordered mapping from entry name to node.
pub type Structure = IndexMap<String, Node>;

/// A single entry of a structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Directory with nested entries
    Directory(Structure),
    /// Directory created without contents
    EmptyDirectory,
    /// File with literal content, possibly empty
    File(String),
}

impl Node {
    /// Builds a directory node from `(name, node)` pairs.
    pub fn dir<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Node)>,
        S: Into<String>,
    {
        Node::Directory(structure_from(entries))
    }

    /// Builds a directory node holding only empty directories.
    pub fn empty_dirs(names: &[&str]) -> Self {
        Node::dir(names.iter().map(|name| (*name, Node::EmptyDirectory)))
    }

    /// Builds an empty file node.
    pub fn file() -> Self {
        Node::File(String::new())
    }
}

fn structure_from<I, S>(entries: I) -> Structure
where
    I: IntoIterator<Item = (S, Node)>,
    S: Into<String>,
{
    entries.into_iter().map(|(name, node)| (name.into(), node)).collect()
}

/// Empty subdirectories created for every database backend.
pub const DATABASE_DIRECTORIES: [&str; 4] = ["generated", "migrations", "queries", "mock"];

/// Returns the skeleton every project starts from.
pub fn default_structure() -> Structure {
    structure_from([
        (
            ".envs",
            Node::dir([
                (".local", Node::dir([("config.env", Node::file())])),
                ("configs", Node::dir([("sqlc.yaml", Node::file())])),
            ]),
        ),
        (
            "cmd",
            Node::dir([
                ("server", Node::dir([("main.go", Node::file())])),
                ("cli", Node::dir([("main.go", Node::file())])),
            ]),
        ),
        ("internal", Node::empty_dirs(&["handlers", "repository", "mock", "services"])),
        ("pkg", Node::EmptyDirectory),
        ("README.md", Node::file()),
        (".gitignore", Node::file()),
        ("Makefile", Node::file()),
    ])
}

/// Adds `internal/<database>` with its code generation directories.
///
/// # Errors
/// * `Error::ConfigError` if `internal` is missing or is not a directory
pub fn insert_database_tree(structure: &mut Structure, database: &str) -> Result<()> {
    match structure.get_mut("internal") {
        Some(Node::Directory(internal)) => {
            internal.insert(database.to_string(), Node::empty_dirs(&DATABASE_DIRECTORIES));
            Ok(())
        }
        _ => Err(Error::ConfigError(
            "failed to access internal directory in project structure".to_string(),
        )),
    }
}

/// Assembles the structure for the given configuration.
///
/// Starts from [`default_structure`] and adds the database, gRPC, workflow
/// and Dockerfile entries the configuration asks for.
pub fn build_structure(config: &ProjectConfig) -> Result<Structure> {
    let mut structure = default_structure();

    if !config.database.is_empty() {
        debug!("Adding database tree for '{}'", config.database);
        insert_database_tree(&mut structure, &config.database)?;
    }

    if config.controller == GRPC_CONTROLLER {
        debug!("Adding gRPC tree");
        structure.insert("gapi".to_string(), Node::empty_dirs(&["generated", "proto"]));
    }

    if config.with_workflow {
        debug!("Adding CI workflow");
        structure.insert(
            ".github".to_string(),
            Node::dir([("workflows", Node::dir([("ci.yml", Node::file())]))]),
        );
    }

    if config.with_dockerfile {
        debug!("Adding Dockerfile");
        structure.insert("Dockerfile".to_string(), Node::file());
    }

    Ok(structure)
}
