use std::path::PathBuf;

use crate::command::{CommandEncoder, MockQueue};
use crate::error::Result;
use crate::resources::{
    BindGroup, BindGroupDescriptor, BindGroupLayout, Buffer, ComputePipeline,
    ComputePipelineDescriptor, PipelineLayout, PipelineLayoutDescriptor, RenderPipeline,
    RenderPipelineDescriptor, Sampler, ShaderModule, Texture,
};

/// Device surface a test driver needs. Shader-module and bind-group creation
/// are the capture points; everything else is shape only.
pub trait GpuDevice {
    fn set_test_name(&self, name: &str);
    fn dump_to_file(&self, identifier: &str, content: &str, extension: &str) -> Result<PathBuf>;

    fn create_buffer(&self, desc: &wgpu::BufferDescriptor<'_>) -> Buffer;
    fn create_texture(&self, desc: &wgpu::TextureDescriptor<'_>) -> Texture;
    fn create_sampler(&self, desc: &wgpu::SamplerDescriptor<'_>) -> Sampler;
    fn create_shader_module(&self, desc: wgpu::ShaderModuleDescriptor<'_>) -> Result<ShaderModule>;
    fn create_bind_group_layout(
        &self,
        desc: &wgpu::BindGroupLayoutDescriptor<'_>,
    ) -> BindGroupLayout;
    fn create_pipeline_layout(&self, desc: &PipelineLayoutDescriptor<'_>) -> PipelineLayout;
    fn create_bind_group(&self, desc: &BindGroupDescriptor<'_>) -> Result<BindGroup>;
    fn create_compute_pipeline(&self, desc: &ComputePipelineDescriptor<'_>) -> ComputePipeline;
    fn create_render_pipeline(&self, desc: &RenderPipelineDescriptor<'_>) -> RenderPipeline;
    fn create_command_encoder(&self, desc: &wgpu::CommandEncoderDescriptor<'_>) -> CommandEncoder;

    fn queue(&self) -> &MockQueue;
    fn limits(&self) -> wgpu::Limits;
    fn features(&self) -> wgpu::Features;
    fn push_error_scope(&self, filter: wgpu::ErrorFilter);
    fn destroy(&self);
}
