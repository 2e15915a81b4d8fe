//! Per-device capture context.
//!
//! Holds everything a capture needs between calls: the active test name, the
//! occurrence counts, and the resolver and writer configured for this run.

use std::path::PathBuf;

use crate::artifact::ArtifactWriter;
use crate::config::CaptureConfig;
use crate::error::{CaptureError, Result};
use crate::fixture::{merge_text, BindingKey, Fixture};
use crate::identifier::IdentifierResolver;
use crate::occurrence::OccurrenceTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureState {
    /// No test name set yet.
    Fresh,
    /// A test name is set but no shader module was captured under it.
    Named,
    /// At least one shader module was captured under the current name.
    Capturing,
}

#[derive(Debug, Clone)]
pub struct CaptureSession {
    resolver: IdentifierResolver,
    writer: ArtifactWriter,
    occurrences: OccurrenceTracker,
    shader_extension: String,
    test_name: Option<String>,
}

impl CaptureSession {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            resolver: IdentifierResolver::new(config.prefix.clone()),
            writer: ArtifactWriter::new(config.root.clone()),
            occurrences: OccurrenceTracker::new(),
            shader_extension: config.shader_extension.clone(),
            test_name: None,
        }
    }

    pub fn set_test_name(&mut self, name: impl Into<String>) {
        self.test_name = Some(name.into());
    }

    pub fn test_name(&self) -> Option<&str> {
        self.test_name.as_deref()
    }

    pub fn state(&self) -> CaptureState {
        match self.test_name.as_deref() {
            None => CaptureState::Fresh,
            Some(name) if self.occurrences.current(name) == 0 => CaptureState::Named,
            Some(_) => CaptureState::Capturing,
        }
    }

    pub fn occurrences(&self) -> &OccurrenceTracker {
        &self.occurrences
    }

    pub fn resolver(&self) -> &IdentifierResolver {
        &self.resolver
    }

    pub fn writer(&self) -> &ArtifactWriter {
        &self.writer
    }

    /// Counts a new shader module for the active test, then dumps its source.
    pub fn capture_shader(&mut self, code: &str) -> Result<PathBuf> {
        let name = self.test_name.as_deref().ok_or(CaptureError::NoActiveTest)?;
        let occurrence = self.occurrences.bump(name);
        log::debug!("shader occurrence {occurrence} for {name}");
        self.dump(name, code, &self.shader_extension)
    }

    /// Merges one binding's bytes into the fixture of the current occurrence.
    pub fn capture_binding(&self, key: BindingKey, bytes: &[u8]) -> Result<PathBuf> {
        let name = self.active_name()?;
        let resolved = self.resolver.resolve(name)?;
        let extension = self.occurrences.fixture_extension(name);
        let fragment = Fixture::from_bytes(key, bytes).to_json()?;
        log::debug!("binding {key} ({} bytes) for {name}", bytes.len());
        self.writer
            .write_merged(&resolved, &extension, &fragment, merge_text)
    }

    /// Writes `content` for an arbitrary identifier, replacing any prior file.
    pub fn dump(&self, identifier: &str, content: &str, extension: &str) -> Result<PathBuf> {
        let resolved = self.resolver.resolve(identifier)?;
        log::debug!("capturing {identifier}");
        self.writer.write(&resolved, extension, content)
    }

    fn active_name(&self) -> Result<&str> {
        self.test_name.as_deref().ok_or(CaptureError::NoActiveTest)
    }
}
