//! Inert stand-ins for GPU resources.
//!
//! These carry just enough state to satisfy callers written against a real
//! device. Only [`Buffer`] contents matter to capture.

use std::cell::{Ref, RefCell, RefMut};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use uuid::Uuid;

#[derive(Debug, Default)]
struct BufferState {
    contents: Vec<u8>,
    captured: bool,
}

/// Host-memory buffer. Clones share contents, like handles to one GPU buffer.
#[derive(Debug, Clone)]
pub struct Buffer {
    id: Uuid,
    label: Option<String>,
    size: u64,
    usage: wgpu::BufferUsages,
    mapped_at_creation: bool,
    state: Rc<RefCell<BufferState>>,
}

impl Buffer {
    /// Buffers larger than `max_size` get no backing memory: their mapped
    /// range is empty and they never capture.
    pub(crate) fn new(desc: &wgpu::BufferDescriptor<'_>, max_size: u64) -> Self {
        let backing = usize::try_from(desc.size)
            .ok()
            .filter(|_| desc.size <= max_size);
        if backing.is_none() {
            log::warn!(
                "buffer of {} bytes exceeds max_buffer_size {max_size}; left unbacked",
                desc.size
            );
        }
        Self {
            id: Uuid::new_v4(),
            label: desc.label.map(str::to_string),
            size: desc.size,
            usage: desc.usage,
            mapped_at_creation: desc.mapped_at_creation && backing.is_some(),
            state: Rc::new(RefCell::new(BufferState {
                contents: vec![0; backing.unwrap_or(0)],
                captured: false,
            })),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn usage(&self) -> wgpu::BufferUsages {
        self.usage
    }

    pub fn get_mapped_range(&self) -> Ref<'_, [u8]> {
        Ref::map(self.state.borrow(), |s| s.contents.as_slice())
    }

    pub fn get_mapped_range_mut(&self) -> RefMut<'_, [u8]> {
        RefMut::map(self.state.borrow_mut(), |s| s.contents.as_mut_slice())
    }

    /// Copies `data` into the mapped range at `offset`, truncating at the end
    /// of the buffer.
    pub fn write_mapped<T: bytemuck::Pod>(&self, offset: usize, data: &[T]) {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let mut range = self.get_mapped_range_mut();
        let start = offset.min(range.len());
        let end = (start + bytes.len()).min(range.len());
        if end - start < bytes.len() {
            log::warn!(
                "mapped write of {} bytes at {offset} truncated to {} bytes",
                bytes.len(),
                end - start
            );
        }
        range[start..end].copy_from_slice(&bytes[..end - start]);
    }

    pub async fn map_async(&self, _mode: wgpu::MapMode) {}

    /// Buffers created mapped become captured once unmapped: their contents
    /// are reported as binding data from then on.
    pub fn unmap(&self) {
        if self.mapped_at_creation {
            self.state.borrow_mut().captured = true;
        }
    }

    /// Captured contents, if this buffer holds initial data.
    pub fn data(&self) -> Option<Vec<u8>> {
        let state = self.state.borrow();
        state.captured.then(|| state.contents.clone())
    }

    pub fn as_entire_binding(&self) -> BindingResource<'_> {
        BindingResource::Buffer(BufferBinding {
            buffer: self,
            offset: 0,
            size: None,
        })
    }

    pub fn destroy(&self) {}
}

#[derive(Debug, Clone)]
pub struct Texture {
    id: Uuid,
    size: wgpu::Extent3d,
    mip_level_count: u32,
    sample_count: u32,
    dimension: wgpu::TextureDimension,
    format: wgpu::TextureFormat,
    usage: wgpu::TextureUsages,
}

impl Texture {
    pub(crate) fn new(desc: &wgpu::TextureDescriptor<'_>) -> Self {
        Self {
            id: Uuid::new_v4(),
            size: wgpu::Extent3d {
                width: desc.size.width,
                height: desc.size.height.max(1),
                depth_or_array_layers: desc.size.depth_or_array_layers.max(1),
            },
            mip_level_count: desc.mip_level_count.max(1),
            sample_count: desc.sample_count.max(1),
            dimension: desc.dimension,
            format: desc.format,
            usage: desc.usage,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn depth_or_array_layers(&self) -> u32 {
        self.size.depth_or_array_layers
    }

    pub fn mip_level_count(&self) -> u32 {
        self.mip_level_count
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn dimension(&self) -> wgpu::TextureDimension {
        self.dimension
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.format
    }

    pub fn usage(&self) -> wgpu::TextureUsages {
        self.usage
    }

    pub fn create_view(&self, desc: &wgpu::TextureViewDescriptor<'_>) -> TextureView {
        TextureView {
            id: Uuid::new_v4(),
            texture: self.id,
            label: desc.label.map(str::to_string),
        }
    }

    pub fn destroy(&self) {}
}

#[derive(Debug, Clone)]
pub struct TextureView {
    id: Uuid,
    texture: Uuid,
    label: Option<String>,
}

impl TextureView {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn texture_id(&self) -> Uuid {
        self.texture
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[derive(Debug, Clone)]
pub struct Sampler {
    id: Uuid,
    label: Option<String>,
    compare: Option<wgpu::CompareFunction>,
}

impl Sampler {
    pub(crate) fn new(desc: &wgpu::SamplerDescriptor<'_>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: desc.label.map(str::to_string),
            compare: desc.compare,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn compare(&self) -> Option<wgpu::CompareFunction> {
        self.compare
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompilationInfo {
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ShaderModule {
    id: Uuid,
    label: Option<String>,
    artifact: PathBuf,
}

impl ShaderModule {
    pub(crate) fn new(label: Option<&str>, artifact: PathBuf) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.map(str::to_string),
            artifact,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Where the source of this module was dumped.
    pub fn artifact(&self) -> &Path {
        &self.artifact
    }

    pub async fn get_compilation_info(&self) -> CompilationInfo {
        CompilationInfo::default()
    }
}

/// Layout stand-in. Layouts handed out by a pipeline remember their group
/// index; standalone layouts report none and capture as group 0.
#[derive(Debug, Clone)]
pub struct BindGroupLayout {
    id: Uuid,
    label: Option<String>,
    group_index: Option<u32>,
}

impl BindGroupLayout {
    pub(crate) fn new(label: Option<&str>, group_index: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.map(str::to_string),
            group_index,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn group_index(&self) -> Option<u32> {
        self.group_index
    }
}

#[derive(Debug, Clone)]
pub struct PipelineLayout {
    id: Uuid,
    bind_group_layouts: Vec<Uuid>,
}

impl PipelineLayout {
    pub(crate) fn new(desc: &PipelineLayoutDescriptor<'_>) -> Self {
        Self {
            id: Uuid::new_v4(),
            bind_group_layouts: desc.bind_group_layouts.iter().map(|l| l.id()).collect(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bind_group_layouts(&self) -> &[Uuid] {
        &self.bind_group_layouts
    }
}

pub struct PipelineLayoutDescriptor<'a> {
    pub label: Option<&'a str>,
    pub bind_group_layouts: &'a [&'a BindGroupLayout],
}

#[derive(Debug, Clone)]
pub struct BindGroup {
    id: Uuid,
    label: Option<String>,
    group_index: u32,
}

impl BindGroup {
    pub(crate) fn new(label: Option<&str>, group_index: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.map(str::to_string),
            group_index,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn group_index(&self) -> u32 {
        self.group_index
    }
}

pub struct BindGroupDescriptor<'a> {
    pub label: Option<&'a str>,
    pub layout: &'a BindGroupLayout,
    pub entries: &'a [BindGroupEntry<'a>],
}

pub struct BindGroupEntry<'a> {
    pub binding: u32,
    pub resource: BindingResource<'a>,
}

pub enum BindingResource<'a> {
    Buffer(BufferBinding<'a>),
    Sampler(&'a Sampler),
    TextureView(&'a TextureView),
}

pub struct BufferBinding<'a> {
    pub buffer: &'a Buffer,
    pub offset: u64,
    pub size: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ComputePipeline {
    id: Uuid,
    label: Option<String>,
}

impl ComputePipeline {
    pub(crate) fn new(label: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.map(str::to_string),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_bind_group_layout(&self, index: u32) -> BindGroupLayout {
        BindGroupLayout::new(None, Some(index))
    }
}

pub struct ComputePipelineDescriptor<'a> {
    pub label: Option<&'a str>,
    pub layout: Option<&'a PipelineLayout>,
    pub module: &'a ShaderModule,
    pub entry_point: Option<&'a str>,
}

#[derive(Debug, Clone)]
pub struct RenderPipeline {
    id: Uuid,
    label: Option<String>,
}

impl RenderPipeline {
    pub(crate) fn new(label: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.map(str::to_string),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_bind_group_layout(&self, index: u32) -> BindGroupLayout {
        BindGroupLayout::new(None, Some(index))
    }
}

pub struct RenderPipelineDescriptor<'a> {
    pub label: Option<&'a str>,
    pub layout: Option<&'a PipelineLayout>,
    pub vertex: &'a ShaderModule,
    pub fragment: Option<&'a ShaderModule>,
}
