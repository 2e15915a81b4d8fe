use serde::Serialize;

use crate::config::CaptureConfig;
use crate::device::MockDevice;
use crate::session::CaptureSession;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterInfo {
    pub vendor: String,
    pub architecture: String,
    pub description: String,
    pub subgroup_min_size: u32,
    pub subgroup_max_size: u32,
    pub is_fallback_adapter: bool,
}

impl Default for AdapterInfo {
    fn default() -> Self {
        Self {
            vendor: "fake".to_string(),
            architecture: "fake".to_string(),
            description: "fake".to_string(),
            subgroup_min_size: 1,
            subgroup_max_size: 256,
            is_fallback_adapter: false,
        }
    }
}

/// Limits reported by the mock adapter and every device it creates.
pub fn fake_limits() -> wgpu::Limits {
    wgpu::Limits {
        max_texture_dimension_1d: 8192,
        max_texture_dimension_2d: 8192,
        max_texture_dimension_3d: 2048,
        max_texture_array_layers: 256,
        max_bind_groups: 4,
        max_bindings_per_bind_group: 1000,
        max_dynamic_uniform_buffers_per_pipeline_layout: 8,
        max_dynamic_storage_buffers_per_pipeline_layout: 4,
        max_sampled_textures_per_shader_stage: 16,
        max_samplers_per_shader_stage: 16,
        max_storage_buffers_per_shader_stage: 8,
        max_storage_textures_per_shader_stage: 4,
        max_uniform_buffers_per_shader_stage: 65536,
        max_uniform_buffer_binding_size: 134_217_728,
        max_storage_buffer_binding_size: 256,
        min_uniform_buffer_offset_alignment: 8,
        min_storage_buffer_offset_alignment: 268_435_456,
        max_vertex_buffers: 16,
        max_buffer_size: 2048,
        max_vertex_attributes: 16,
        max_vertex_buffer_array_stride: 2048,
        max_color_attachments: 8,
        max_color_attachment_bytes_per_sample: 32,
        max_compute_workgroup_storage_size: 16384,
        max_compute_invocations_per_workgroup: 256,
        max_compute_workgroup_size_x: 256,
        max_compute_workgroup_size_y: 256,
        max_compute_workgroup_size_z: 256,
        max_compute_workgroups_per_dimension: 65535,
        // 16 inter-stage variables of 4 components each.
        max_inter_stage_shader_components: 64,
        ..wgpu::Limits::default()
    }
}

/// Entry point standing in for `navigator.gpu`.
#[derive(Debug, Clone, Default)]
pub struct MockGpu {
    config: CaptureConfig,
}

impl MockGpu {
    pub fn new(config: CaptureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaptureConfig {
        &self.config
    }

    pub async fn request_adapter(&self) -> Option<MockAdapter> {
        Some(MockAdapter {
            config: self.config.clone(),
            info: AdapterInfo::default(),
            limits: fake_limits(),
        })
    }

    pub fn preferred_canvas_format(&self) -> wgpu::TextureFormat {
        wgpu::TextureFormat::Bgra8Unorm
    }

    pub fn has_wgsl_language_feature(&self, _feature: &str) -> bool {
        true
    }
}

#[derive(Debug, Clone)]
pub struct MockAdapter {
    config: CaptureConfig,
    info: AdapterInfo,
    limits: wgpu::Limits,
}

impl MockAdapter {
    pub fn info(&self) -> &AdapterInfo {
        &self.info
    }

    pub fn limits(&self) -> &wgpu::Limits {
        &self.limits
    }

    /// The adapter advertises nothing; devices report every feature.
    pub fn features(&self) -> wgpu::Features {
        wgpu::Features::empty()
    }

    /// Each device gets a fresh capture session built from the adapter's config.
    pub async fn request_device(&self) -> MockDevice {
        self.request_device_with_session(CaptureSession::new(&self.config))
    }

    pub fn request_device_with_session(&self, session: CaptureSession) -> MockDevice {
        MockDevice::new(session, self.info.clone(), self.limits.clone())
    }
}
