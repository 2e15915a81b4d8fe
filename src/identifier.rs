//! Test identifier to artifact path resolution.
//!
//! A CTS query such as `webgpu:shader,execution,expression:call,builtin:abs:f32`
//! is turned into directory segments plus a file stem:
//!
//! - the configured prefix is stripped from the front;
//! - the rest splits at its first `:` into a file path and a leaf group;
//! - the file path splits on `,` into directories;
//! - if the leaf group holds a `:`, the part before it splits on `,` into more
//!   directories and the part after it is the stem, otherwise the whole leaf
//!   group is the stem;
//! - an identifier with no `:` at all uses its last `,` segment as leaf group.
//!
//! The example above lands at `execution/expression/call/builtin/abs_f32`.

use std::path::PathBuf;

use crate::error::{CaptureError, Result};
use crate::sanitize::sanitize;

pub const DEFAULT_PREFIX: &str = "webgpu:shader,";
pub const FALLBACK_STEM: &str = "index";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedPath {
    dirs: Vec<String>,
    stem: String,
}

impl ResolvedPath {
    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Directory chain relative to the dump root.
    pub fn relative_dir(&self) -> PathBuf {
        self.dirs.iter().collect()
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{}", self.stem, extension)
    }

    pub fn relative_file(&self, extension: &str) -> PathBuf {
        self.relative_dir().join(self.file_name(extension))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierResolver {
    prefix: String,
}

impl Default for IdentifierResolver {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl IdentifierResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn resolve(&self, id: &str) -> Result<ResolvedPath> {
        if id.is_empty() {
            return Err(CaptureError::EmptyIdentifier);
        }
        let rest = id.strip_prefix(self.prefix.as_str()).unwrap_or(id);

        let (file_path, leaf_group) = match rest.split_once(':') {
            Some(parts) => parts,
            None => match rest.rsplit_once(',') {
                Some(parts) => parts,
                None => ("", rest),
            },
        };
        if leaf_group.is_empty() {
            return Err(CaptureError::EmptyLeaf(id.to_string()));
        }

        let mut raw_dirs: Vec<&str> = file_path.split(',').collect();
        let raw_stem = match leaf_group.split_once(':') {
            Some((test_path, params)) => {
                raw_dirs.extend(test_path.split(','));
                params
            }
            None => leaf_group,
        };

        let mut dirs = Vec::with_capacity(raw_dirs.len());
        for raw in raw_dirs {
            let dir = sanitize(raw);
            if dir.is_empty() {
                continue;
            }
            dirs.push(checked(dir)?);
        }

        let stem = match sanitize(raw_stem) {
            s if s.is_empty() => FALLBACK_STEM.to_string(),
            s => checked(s)?,
        };

        Ok(ResolvedPath { dirs, stem })
    }
}

/// Rejects tokens that would leave their parent directory once joined.
fn checked(token: String) -> Result<String> {
    if token == "." || token == ".." || token.contains(['/', '\\']) {
        return Err(CaptureError::UnsafeSegment(token));
    }
    Ok(token)
}
