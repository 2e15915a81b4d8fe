use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{CaptureError, Result};
use crate::identifier::ResolvedPath;

/// Writes capture artifacts under a fixed root directory.
///
/// Writes are synchronous and land in call order. Nothing is rolled back when
/// a write fails.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    root: PathBuf,
}

impl ArtifactWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target(&self, path: &ResolvedPath, extension: &str) -> PathBuf {
        self.root.join(path.relative_file(extension))
    }

    /// Writes `content` verbatim, replacing any existing file.
    pub fn write(&self, path: &ResolvedPath, extension: &str, content: &str) -> Result<PathBuf> {
        let target = self.prepare(path, extension)?;
        put(&target, content)?;
        Ok(target)
    }

    /// Folds `content` into the existing file with `merge(existing, content)`,
    /// or writes it verbatim when no file exists yet.
    pub fn write_merged<F>(
        &self,
        path: &ResolvedPath,
        extension: &str,
        content: &str,
        merge: F,
    ) -> Result<PathBuf>
    where
        F: FnOnce(&str, &str) -> Result<String>,
    {
        let target = self.prepare(path, extension)?;
        match fs::read_to_string(&target) {
            Ok(existing) => put(&target, &merge(&existing, content)?)?,
            Err(e) if e.kind() == ErrorKind::NotFound => put(&target, content)?,
            Err(source) => {
                return Err(CaptureError::Read {
                    path: target,
                    source,
                })
            }
        }
        Ok(target)
    }

    fn prepare(&self, path: &ResolvedPath, extension: &str) -> Result<PathBuf> {
        let dir = self.root.join(path.relative_dir());
        fs::create_dir_all(&dir).map_err(|source| CaptureError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let target = dir.join(path.file_name(extension));
        log::debug!("dumping artifact to {}", target.display());
        Ok(target)
    }
}

fn put(target: &Path, content: &str) -> Result<()> {
    fs::write(target, content).map_err(|source| CaptureError::Write {
        path: target.to_path_buf(),
        source,
    })
}
