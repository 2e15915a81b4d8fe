use std::cell::RefCell;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use crate::adapter::AdapterInfo;
use crate::command::{CommandEncoder, MockQueue};
use crate::error::{CaptureError, Result};
use crate::fixture::BindingKey;
use crate::resources::{
    BindGroup, BindGroupDescriptor, BindGroupLayout, BindingResource, Buffer, ComputePipeline,
    ComputePipelineDescriptor, PipelineLayout, PipelineLayoutDescriptor, RenderPipeline,
    RenderPipelineDescriptor, Sampler, ShaderModule, Texture,
};
use crate::session::{CaptureSession, CaptureState};
use crate::traits::GpuDevice;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GpuError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("out of memory")]
    OutOfMemory,
    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceLostReason {
    Unknown,
    Destroyed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceLostInfo {
    pub reason: DeviceLostReason,
    pub message: String,
}

#[derive(Debug, Default)]
struct LostSlot {
    info: Option<DeviceLostInfo>,
    wakers: Vec<Waker>,
}

/// Resolves once the device is destroyed. Artifacts already written stay as
/// they are.
#[derive(Debug, Clone)]
pub struct DeviceLost {
    slot: Rc<RefCell<LostSlot>>,
}

impl Future for DeviceLost {
    type Output = DeviceLostInfo;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut slot = self.slot.borrow_mut();
        match &slot.info {
            Some(info) => Poll::Ready(info.clone()),
            None => {
                if !slot.wakers.iter().any(|w| w.will_wake(cx.waker())) {
                    slot.wakers.push(cx.waker().clone());
                }
                Poll::Pending
            }
        }
    }
}

/// Software device that dumps WGSL sources and bound buffer contents while
/// otherwise behaving as an inert WebGPU device.
#[derive(Debug)]
pub struct MockDevice {
    session: RefCell<CaptureSession>,
    info: AdapterInfo,
    limits: wgpu::Limits,
    queue: MockQueue,
    error_scopes: RefCell<Vec<wgpu::ErrorFilter>>,
    lost: Rc<RefCell<LostSlot>>,
}

impl MockDevice {
    pub(crate) fn new(session: CaptureSession, info: AdapterInfo, limits: wgpu::Limits) -> Self {
        Self {
            session: RefCell::new(session),
            info,
            limits,
            queue: MockQueue,
            error_scopes: RefCell::new(Vec::new()),
            lost: Rc::new(RefCell::new(LostSlot::default())),
        }
    }

    pub fn adapter_info(&self) -> &AdapterInfo {
        &self.info
    }

    pub fn test_name(&self) -> Option<String> {
        self.session.borrow().test_name().map(str::to_string)
    }

    pub fn capture_state(&self) -> CaptureState {
        self.session.borrow().state()
    }

    pub fn occurrences(&self, test_name: &str) -> u32 {
        self.session.borrow().occurrences().current(test_name)
    }

    pub fn artifact_root(&self) -> PathBuf {
        self.session.borrow().writer().root().to_path_buf()
    }

    pub async fn create_compute_pipeline_async(
        &self,
        desc: &ComputePipelineDescriptor<'_>,
    ) -> ComputePipeline {
        self.create_compute_pipeline(desc)
    }

    /// Always reports no error.
    pub async fn pop_error_scope(&self) -> Option<GpuError> {
        if self.error_scopes.borrow_mut().pop().is_none() {
            log::warn!("pop_error_scope with no scope pushed");
        }
        None
    }

    pub fn lost(&self) -> DeviceLost {
        DeviceLost {
            slot: Rc::clone(&self.lost),
        }
    }

    /// Wakers parked on [`DeviceLost`] futures.
    pub fn pending_lost_wakers(&self) -> usize {
        self.lost.borrow().wakers.len()
    }

    pub fn is_lost(&self) -> bool {
        self.lost.borrow().info.is_some()
    }
}

impl GpuDevice for MockDevice {
    fn set_test_name(&self, name: &str) {
        self.session.borrow_mut().set_test_name(name);
    }

    fn dump_to_file(&self, identifier: &str, content: &str, extension: &str) -> Result<PathBuf> {
        self.session.borrow().dump(identifier, content, extension)
    }

    fn create_buffer(&self, desc: &wgpu::BufferDescriptor<'_>) -> Buffer {
        Buffer::new(desc, self.limits.max_buffer_size)
    }

    fn create_texture(&self, desc: &wgpu::TextureDescriptor<'_>) -> Texture {
        Texture::new(desc)
    }

    fn create_sampler(&self, desc: &wgpu::SamplerDescriptor<'_>) -> Sampler {
        Sampler::new(desc)
    }

    fn create_shader_module(&self, desc: wgpu::ShaderModuleDescriptor<'_>) -> Result<ShaderModule> {
        #[allow(unreachable_patterns)]
        let code = match &desc.source {
            wgpu::ShaderSource::Wgsl(code) => code,
            _ => return Err(CaptureError::UnsupportedShaderSource),
        };
        let artifact = self.session.borrow_mut().capture_shader(code)?;
        Ok(ShaderModule::new(desc.label, artifact))
    }

    fn create_bind_group_layout(
        &self,
        desc: &wgpu::BindGroupLayoutDescriptor<'_>,
    ) -> BindGroupLayout {
        BindGroupLayout::new(desc.label, None)
    }

    fn create_pipeline_layout(&self, desc: &PipelineLayoutDescriptor<'_>) -> PipelineLayout {
        PipelineLayout::new(desc)
    }

    fn create_bind_group(&self, desc: &BindGroupDescriptor<'_>) -> Result<BindGroup> {
        let group = desc.layout.group_index().unwrap_or(0);
        let session = self.session.borrow();
        for entry in desc.entries {
            let BindingResource::Buffer(binding) = &entry.resource else {
                continue;
            };
            if let Some(bytes) = binding.buffer.data() {
                session.capture_binding(BindingKey::new(group, entry.binding), &bytes)?;
            }
        }
        Ok(BindGroup::new(desc.label, group))
    }

    fn create_compute_pipeline(&self, desc: &ComputePipelineDescriptor<'_>) -> ComputePipeline {
        ComputePipeline::new(desc.label)
    }

    fn create_render_pipeline(&self, desc: &RenderPipelineDescriptor<'_>) -> RenderPipeline {
        RenderPipeline::new(desc.label)
    }

    fn create_command_encoder(&self, desc: &wgpu::CommandEncoderDescriptor<'_>) -> CommandEncoder {
        CommandEncoder::new(desc)
    }

    fn queue(&self) -> &MockQueue {
        &self.queue
    }

    fn limits(&self) -> wgpu::Limits {
        self.limits.clone()
    }

    fn features(&self) -> wgpu::Features {
        wgpu::Features::all()
    }

    fn push_error_scope(&self, filter: wgpu::ErrorFilter) {
        self.error_scopes.borrow_mut().push(filter);
    }

    fn destroy(&self) {
        let wakers = {
            let mut slot = self.lost.borrow_mut();
            if slot.info.is_some() {
                return;
            }
            log::warn!("device destroyed");
            slot.info = Some(DeviceLostInfo {
                reason: DeviceLostReason::Destroyed,
                message: "Device destroyed".to_string(),
            });
            std::mem::take(&mut slot.wakers)
        };
        for waker in wakers {
            waker.wake();
        }
    }
}
