//! Software stand-in for a WebGPU device that captures what conformance tests
//! submit to it.
//!
//! Every shader module created on a [`MockDevice`] is written out as a `.wgsl`
//! file, and every bind group whose buffers carry initial data is merged into
//! a `.in.json` fixture next to it. File locations follow the active test
//! name; see [`identifier`] for the layout.

pub mod adapter;
pub mod artifact;
pub mod command;
pub mod config;
pub mod device;
pub mod error;
pub mod fixture;
pub mod identifier;
pub mod occurrence;
pub mod resources;
pub mod sanitize;
pub mod session;
pub mod traits;

pub use adapter::{fake_limits, AdapterInfo, MockAdapter, MockGpu};
pub use artifact::ArtifactWriter;
pub use command::{CommandBuffer, CommandEncoder, ComputePass, MockQueue};
pub use config::{load_config, CaptureConfig};
pub use device::{DeviceLost, DeviceLostInfo, DeviceLostReason, GpuError, MockDevice};
pub use error::{CaptureError, Result};
pub use fixture::{BindingKey, Fixture};
pub use identifier::{IdentifierResolver, ResolvedPath};
pub use occurrence::OccurrenceTracker;
pub use resources::*;
pub use sanitize::sanitize;
pub use session::{CaptureSession, CaptureState};
pub use traits::GpuDevice;

/// Creates the entry point a test harness requests adapters from.
pub fn create(config: CaptureConfig) -> MockGpu {
    MockGpu::new(config)
}
