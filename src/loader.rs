//! Template asset loading for Ignite.
//! Assets are either compiled into the binary or read from a directory
//! chosen on the command line.
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Assets compiled into the binary, keyed by asset name.
const EMBEDDED_ASSETS: [(&str, &str); 1] = [("sqlc.txt", include_str!("../templates/sqlc.txt"))];

/// Represents the source location of template assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Assets shipped inside the binary
    Embedded,
    /// Assets read from a local directory
    Directory(PathBuf),
}

impl std::fmt::Display for AssetSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetSource::Embedded => write!(f, "embedded templates"),
            AssetSource::Directory(path) => {
                write!(f, "local path: '{}'", path.display())
            }
        }
    }
}

impl AssetSource {
    /// Picks the source from an optional templates directory.
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(path) => Self::Directory(path),
            None => Self::Embedded,
        }
    }
}

/// Trait for resolving template assets by name.
pub trait AssetLoader: Send + Sync {
    /// Loads the text of an asset.
    ///
    /// # Returns
    /// * `Result<Option<String>>` - `None` when the asset does not exist
    fn load(&self, name: &str) -> Result<Option<String>>;
}

/// Loader for the assets compiled into the binary.
#[derive(Debug, Default)]
pub struct EmbeddedLoader;

impl EmbeddedLoader {
    pub fn new() -> Self {
        Self
    }
}

impl AssetLoader for EmbeddedLoader {
    fn load(&self, name: &str) -> Result<Option<String>> {
        Ok(EMBEDDED_ASSETS
            .iter()
            .find(|(asset, _)| *asset == name)
            .map(|(_, content)| content.to_string()))
    }
}

/// Loader for assets stored in a local directory.
pub struct DirectoryLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> DirectoryLoader<P> {
    /// Creates a new DirectoryLoader instance.
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path> + Send + Sync> AssetLoader for DirectoryLoader<P> {
    /// Reads `<dir>/<name>`.
    ///
    /// # Errors
    /// * `Error::IoError` for any failure other than a missing file
    fn load(&self, name: &str) -> Result<Option<String>> {
        let asset_path = self.path.as_ref().join(name);
        debug!("Loading template asset '{}'", asset_path.display());
        match fs::read_to_string(&asset_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::IoError(e)),
        }
    }
}

/// Returns the loader for the given asset source.
///
/// Directory sources are resolved to absolute paths here, so assets are
/// still found after the working directory changes.
///
/// # Errors
/// * `Error::ConfigError` if a directory source does not exist
pub fn get_asset_loader(source: AssetSource) -> Result<Box<dyn AssetLoader>> {
    debug!("Using {}", source);
    match source {
        AssetSource::Embedded => Ok(Box::new(EmbeddedLoader::new())),
        AssetSource::Directory(path) => {
            let missing = || {
                Error::ConfigError(format!(
                    "templates directory '{}' does not exist",
                    path.display()
                ))
            };
            let absolute = path.canonicalize().map_err(|_| missing())?;
            if !absolute.is_dir() {
                return Err(missing());
            }
            Ok(Box::new(DirectoryLoader::new(absolute)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_source_display() {
        assert_eq!(format!("{}", AssetSource::Embedded), "embedded templates");

        let dir_source = AssetSource::Directory(PathBuf::from("/path/to/templates"));
        assert_eq!(format!("{}", dir_source), "local path: '/path/to/templates'");
    }

    #[test]
    fn test_embedded_loader() {
        let loader = EmbeddedLoader::new();
        assert!(loader.load("sqlc.txt").unwrap().is_some());
        assert!(loader.load("missing.txt").unwrap().is_none());
    }
}
