use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scratch directory that lives for the duration of one test.
///
/// Creation is idempotent. Removal on drop is non-recursive: a directory a
/// test left files in stays where it is, and nothing is reported.
#[derive(Debug)]
pub struct TempDirectory {
    path: PathBuf,
}

impl TempDirectory {
    pub fn create(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        match std::fs::create_dir(&path) {
            Ok(()) => debug!("Created temporary directory {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
                debug!("Temporary directory {} already exists", path.display())
            }
            Err(e) => return Err(e),
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `file_name` inside the directory. Nothing is created.
    pub fn file(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Try to remove the directory now, returning whether it is gone.
    pub fn remove(&self) -> bool {
        match std::fs::remove_dir(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => true,
            Err(e) => {
                debug!(
                    "Leaving temporary directory {} in place: {}",
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}

impl Drop for TempDirectory {
    fn drop(&mut self) {
        self.remove();
    }
}
