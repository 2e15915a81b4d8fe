use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("test identifier is empty")]
    EmptyIdentifier,

    #[error("test identifier `{0}` has an empty leaf group")]
    EmptyLeaf(String),

    #[error("path segment `{0}` would escape the dump root")]
    UnsafeSegment(String),

    #[error("no active test name; set one before capturing")]
    NoActiveTest,

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("fixture is not a flat object of numeric arrays: {source}")]
    MalformedFixture {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode fixture: {0}")]
    EncodeFixture(#[from] serde_json::Error),

    #[error("failed to read capture config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse capture config {}: {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("only WGSL shader sources can be captured")]
    UnsupportedShaderSource,
}

pub type Result<T, E = CaptureError> = std::result::Result<T, E>;
