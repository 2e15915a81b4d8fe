//! Command recording and submission stubs. Nothing recorded here executes.

use uuid::Uuid;

use crate::resources::{BindGroup, Buffer, ComputePipeline, Texture};

#[derive(Debug)]
pub struct CommandEncoder {
    label: Option<String>,
    commands: usize,
}

impl CommandEncoder {
    pub(crate) fn new(desc: &wgpu::CommandEncoderDescriptor<'_>) -> Self {
        Self {
            label: desc.label.map(str::to_string),
            commands: 0,
        }
    }

    pub fn begin_compute_pass(
        &mut self,
        _desc: &wgpu::ComputePassDescriptor<'_>,
    ) -> ComputePass<'_> {
        ComputePass {
            encoder: self,
            pipeline: None,
        }
    }

    pub fn copy_buffer_to_buffer(
        &mut self,
        _source: &Buffer,
        _source_offset: u64,
        _destination: &Buffer,
        _destination_offset: u64,
        _copy_size: u64,
    ) {
        self.commands += 1;
    }

    pub fn copy_buffer_to_texture(&mut self, _source: &Buffer, _destination: &Texture) {
        self.commands += 1;
    }

    pub fn finish(self) -> CommandBuffer {
        CommandBuffer {
            id: Uuid::new_v4(),
            label: self.label,
            commands: self.commands,
        }
    }
}

#[derive(Debug)]
pub struct ComputePass<'e> {
    encoder: &'e mut CommandEncoder,
    pipeline: Option<Uuid>,
}

impl ComputePass<'_> {
    pub fn set_pipeline(&mut self, pipeline: &ComputePipeline) {
        self.pipeline = Some(pipeline.id());
    }

    pub fn set_bind_group(&mut self, _index: u32, _bind_group: &BindGroup, _offsets: &[u32]) {}

    pub fn dispatch_workgroups(&mut self, x: u32, y: u32, z: u32) {
        log::trace!("dispatch {x}x{y}x{z} on {:?}", self.pipeline);
        self.encoder.commands += 1;
    }

    pub fn end(self) {}
}

#[derive(Debug)]
pub struct CommandBuffer {
    id: Uuid,
    label: Option<String>,
    commands: usize,
}

impl CommandBuffer {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of dispatches and copies recorded.
    pub fn command_count(&self) -> usize {
        self.commands
    }
}

#[derive(Debug, Default)]
pub struct MockQueue;

impl MockQueue {
    pub fn submit<I: IntoIterator<Item = CommandBuffer>>(&self, command_buffers: I) {
        let commands: usize = command_buffers.into_iter().map(|b| b.commands).sum();
        log::trace!("submit of {commands} commands dropped");
    }

    pub async fn on_submitted_work_done(&self) {}

    /// Queue writes never reach the buffer; only mapped initial data is captured.
    pub fn write_buffer(&self, buffer: &Buffer, offset: u64, data: &[u8]) {
        log::trace!(
            "write_buffer of {} bytes at {offset} into {} ignored",
            data.len(),
            buffer.id()
        );
    }

    pub fn write_texture(&self, _texture: &Texture, _data: &[u8]) {}

    pub fn copy_external_image_to_texture(&self, _destination: &Texture) {}
}
