use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::plugins::PluginDescriptor;

/// Failure while reading plugin descriptors.
///
/// Only directory-level problems surface as errors; per-file problems are
/// logged and skipped during [`PluginRegistry::load_dir`].
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("cannot read plugin directory {path}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot read descriptor {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed descriptor {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Loaded plugin descriptors, ordered by title.
pub struct PluginRegistry {
    plugins: Vec<PluginDescriptor>,
}

impl PluginRegistry {
    /// Load every `*.json` descriptor in `dir`.
    ///
    /// A missing or unlistable directory is an error; a descriptor file that
    /// cannot be read or parsed is logged at `warn` and skipped, so one bad
    /// file never blocks the rest.
    pub fn load_dir(dir: &Path) -> Result<Self, PluginError> {
        let entries = fs::read_dir(dir).map_err(|source| PluginError::Directory {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut plugins = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) => {
                    tracing::warn!("Cannot list entry in {}: {}", dir.display(), e);
                    continue;
                }
            };
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match load_descriptor(&path) {
                Ok(descriptor) => {
                    tracing::debug!(
                        "Loaded plugin '{}' from {}",
                        descriptor.title,
                        path.display()
                    );
                    plugins.push(descriptor);
                }
                Err(e) => tracing::warn!("Cannot load plugin from {}: {}", path.display(), e),
            }
        }

        plugins.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(Self { plugins })
    }

    /// Build a registry from already-constructed descriptors.
    pub fn from_descriptors(mut plugins: Vec<PluginDescriptor>) -> Self {
        plugins.sort_by(|a, b| a.title.cmp(&b.title));
        Self { plugins }
    }

    /// The default per-user plugin directory.
    pub fn default_dir() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "scoresite")?;
        Some(dirs.data_dir().join("plugins"))
    }

    /// Look up a descriptor by exact title. Case-sensitive; a title that
    /// differs only in casing finds nothing.
    pub fn get(&self, title: &str) -> Option<&PluginDescriptor> {
        self.plugins.iter().find(|p| p.title == title)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginDescriptor> {
        self.plugins.iter()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

fn load_descriptor(path: &Path) -> Result<PluginDescriptor, PluginError> {
    let raw = fs::read_to_string(path).map_err(|source| PluginError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| PluginError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
