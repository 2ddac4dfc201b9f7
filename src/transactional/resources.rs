use crate::transactional::errors::{ContextError, Result};
use crate::transactional::locations::CLASSPATH_PREFIX;
use std::path::{Path, PathBuf};

const FILE_PREFIX: &str = "file:";

/// Maps resource locations onto the filesystem.
///
/// `classpath:` locations are relative to the root, `file:` locations are
/// plain paths. Anything else is rejected.
#[derive(Debug, Clone)]
pub struct ResourceLoader {
    root: PathBuf,
}

impl ResourceLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, location: &str) -> Result<PathBuf> {
        if let Some(relative) = location.strip_prefix(CLASSPATH_PREFIX) {
            Ok(self.root.join(relative.trim_start_matches('/')))
        } else if let Some(path) = location.strip_prefix(FILE_PREFIX) {
            Ok(PathBuf::from(path))
        } else {
            Err(ContextError::UnsupportedLocation(location.to_string()))
        }
    }

    pub fn read_to_string(&self, location: &str) -> Result<String> {
        let path = self.resolve(location)?;
        if !path.is_file() {
            return Err(ContextError::ResourceNotFound {
                location: location.to_string(),
                path,
            });
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}
