//! Materializes a [`Structure`] on disk.
//!
//! The builder walks the structure depth first. Directories are created
//! before their children are visited, files are written with content resolved
//! through the [`TemplateRegistry`]. Every filesystem mutation happens while
//! holding the builder's guard, so sibling subtrees may be processed from
//! several threads without interleaving writes. The first error stops the
//! build; entries created before it are left in place.

use crate::config::RenderContext;
use crate::error::{Error, Result};
use crate::loader::AssetLoader;
use crate::registry::{asset_name, TemplateRegistry, TemplateSpec};
use crate::renderer::TemplateRenderer;
use crate::structure::{Node, Structure};
use log::{debug, info};
use std::fs;
use std::path::{Component, Path};
use std::sync::{Mutex, PoisonError};

pub struct TreeBuilder<'a> {
    registry: &'a TemplateRegistry,
    loader: &'a dyn AssetLoader,
    renderer: &'a dyn TemplateRenderer,
    guard: Mutex<()>,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(
        registry: &'a TemplateRegistry,
        loader: &'a dyn AssetLoader,
        renderer: &'a dyn TemplateRenderer,
    ) -> Self {
        Self { registry, loader, renderer, guard: Mutex::new(()) }
    }

    /// Creates every entry of `structure` under `base_path`.
    ///
    /// Existing directories are reused and existing files are truncated, so
    /// running the same build twice succeeds. A file is created before its
    /// content is resolved; when resolving fails the file stays empty.
    ///
    /// # Errors
    /// * `Error::InvalidStructure` if an entry name is not a single path component
    /// * `Error::CreateDirectory` / `Error::WriteFile` on filesystem failures
    /// * `Error::TemplateNotFound` / `Error::MinijinjaError` for template files
    pub fn materialize(
        &self,
        structure: &Structure,
        base_path: &Path,
        context: &RenderContext,
    ) -> Result<()> {
        let context = context.to_value()?;
        self.materialize_level(structure, base_path, &context)
    }

    fn materialize_level(
        &self,
        structure: &Structure,
        base_path: &Path,
        context: &serde_json::Value,
    ) -> Result<()> {
        for (name, node) in structure {
            let full_path = base_path.join(name);
            validate_entry_name(name, &full_path)?;

            match node {
                Node::Directory(children) => {
                    info!("Creating directory: {}", full_path.display());
                    self.create_dir(&full_path)?;
                    self.materialize_level(children, &full_path, context)?;
                }
                Node::EmptyDirectory => {
                    info!("Creating empty directory: {}", full_path.display());
                    self.create_dir(&full_path)?;
                }
                Node::File(content) => {
                    info!("Creating file: {}", full_path.display());
                    self.write_file(&full_path, "")?;
                    let content = self.resolve_content(name, content, context)?;
                    if !content.is_empty() {
                        self.write_file(&full_path, &content)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Picks the content written for file `name`.
    ///
    /// A template entry always wins. Otherwise the structure's own content is
    /// used when non-empty, then a literal registry entry, then nothing.
    fn resolve_content(
        &self,
        name: &str,
        content: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        match self.registry.lookup(name) {
            Some(TemplateSpec::Template) => {
                let asset = asset_name(name);
                debug!("Rendering template '{}' for '{}'", asset, name);
                let template = self.loader.load(&asset)?.ok_or_else(|| {
                    Error::TemplateNotFound { name: name.to_string(), asset: asset.clone() }
                })?;
                self.renderer.render(&template, context)
            }
            _ if !content.is_empty() => Ok(content.to_string()),
            Some(TemplateSpec::Literal(text)) => Ok(text.clone()),
            None => Ok(String::new()),
        }
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        fs::create_dir_all(path)
            .map_err(|source| Error::CreateDirectory { path: path.to_path_buf(), source })
    }

    fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        let _guard = self.guard.lock().unwrap_or_else(PoisonError::into_inner);
        fs::write(path, content)
            .map_err(|source| Error::WriteFile { path: path.to_path_buf(), source })
    }
}

/// Ensures an entry name resolves to a direct child of its parent.
fn validate_entry_name(name: &str, full_path: &Path) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidStructure {
        path: full_path.to_path_buf(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("entry name is empty"));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        (Some(Component::Normal(_)), Some(_)) => {
            Err(invalid("entry name must not contain a path separator"))
        }
        _ => Err(invalid("entry name must be a plain file or directory name")),
    }
}
