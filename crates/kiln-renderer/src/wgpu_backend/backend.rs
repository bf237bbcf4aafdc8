use std::sync::Arc;

use kiln_common::TextureId;
use kiln_config::schema::Projection;
use wgpu::util::DeviceExt;

use super::pipeline::{create_bind_group_layout, create_pipeline};
use super::GpuTextures;
use crate::backend::RenderBackend;
use crate::batch::MAX_TEXTURE_SLOTS;
use crate::gpu::ProjectionUniforms;
use crate::vertex::Vertex;

/// One flushed batch waiting to be replayed into a render pass.
pub struct DrawBatch {
    pub base_vertex: i32,
    pub index_count: u32,
    pub textures: Vec<TextureId>,
    bind_group: wgpu::BindGroup,
}

/// GPU backend for [`BatchRenderer`](crate::batch::BatchRenderer).
///
/// Call order per frame: any number of batch flushes, then
/// [`prepare`](Self::prepare), [`render`](Self::render) inside a pass, and
/// [`finish_frame`](Self::finish_frame) once the commands are submitted.
pub struct WgpuBackend {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    uniform_buffer: wgpu::Buffer,
    sampler: wgpu::Sampler,
    textures: GpuTextures,
    index_buffer: Option<wgpu::Buffer>,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    staging: Vec<Vertex>,
    /// Staging offset of the last upload not yet consumed by a draw.
    pending_base: Option<usize>,
    bound: [Option<TextureId>; MAX_TEXTURE_SLOTS],
    batches: Vec<DrawBatch>,
    projection: Projection,
}

impl WgpuBackend {
    pub fn new(
        device: Arc<wgpu::Device>,
        queue: Arc<wgpu::Queue>,
        format: wgpu::TextureFormat,
        projection: Projection,
        width: u32,
        height: u32,
    ) -> Self {
        let bind_group_layout = create_bind_group_layout(&device);
        let pipeline = create_pipeline(&device, &bind_group_layout, format);

        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("batch uniforms"),
            contents: bytemuck::cast_slice(&[ProjectionUniforms::new(projection, width, height)]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("batch sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let vertex_capacity = 1024;
        let vertex_buffer = create_vertex_buffer(&device, vertex_capacity);
        let textures = GpuTextures::new(device.clone(), queue.clone());

        tracing::info!(format = ?format, projection = ?projection, "wgpu batch backend created");

        Self {
            device,
            queue,
            pipeline,
            bind_group_layout,
            uniform_buffer,
            sampler,
            textures,
            index_buffer: None,
            vertex_buffer,
            vertex_capacity,
            staging: Vec::new(),
            pending_base: None,
            bound: [None; MAX_TEXTURE_SLOTS],
            batches: Vec::new(),
            projection,
        }
    }

    pub fn textures(&self) -> &GpuTextures {
        &self.textures
    }

    pub fn textures_mut(&mut self) -> &mut GpuTextures {
        &mut self.textures
    }

    /// Update the projection for a new viewport size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::cast_slice(&[ProjectionUniforms::new(self.projection, width, height)]),
        );
    }

    pub fn set_projection(&mut self, projection: Projection, width: u32, height: u32) {
        self.projection = projection;
        self.set_viewport(width, height);
    }

    /// Batches recorded since the last [`finish_frame`](Self::finish_frame).
    pub fn batches(&self) -> &[DrawBatch] {
        &self.batches
    }

    /// Copy every staged vertex to the GPU, growing the buffer if needed.
    pub fn prepare(&mut self) {
        if self.staging.is_empty() {
            return;
        }
        if self.staging.len() > self.vertex_capacity {
            self.vertex_capacity = self.staging.len().next_power_of_two();
            self.vertex_buffer = create_vertex_buffer(&self.device, self.vertex_capacity);
            tracing::debug!(vertices = self.vertex_capacity, "Vertex buffer grown");
        }
        self.queue
            .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.staging));
    }

    /// Replay the frame's batches into `pass`, in flush order.
    pub fn render<'pass>(&'pass self, pass: &mut wgpu::RenderPass<'pass>) {
        let Some(index_buffer) = &self.index_buffer else {
            return;
        };
        if self.batches.is_empty() {
            return;
        }

        pass.set_pipeline(&self.pipeline);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        for batch in &self.batches {
            pass.set_bind_group(0, &batch.bind_group, &[]);
            pass.draw_indexed(0..batch.index_count, batch.base_vertex, 0..1);
        }
    }

    /// Drop staged vertices and recorded batches.
    pub fn finish_frame(&mut self) {
        self.staging.clear();
        self.batches.clear();
        self.pending_base = None;
        self.bound = [None; MAX_TEXTURE_SLOTS];
    }

    fn create_bind_group(&self, textures: &[TextureId]) -> wgpu::BindGroup {
        let white = self.textures.white();
        let mut views: Vec<&wgpu::TextureView> = vec![white; MAX_TEXTURE_SLOTS];
        for (unit, &id) in textures.iter().enumerate() {
            match self.textures.view(id) {
                Some(view) => views[unit] = view,
                None => tracing::warn!(texture = %id, unit, "Unknown texture bound, using white"),
            }
        }

        self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("batch bind group"),
            layout: &self.bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: self.uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureViewArray(&views),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
            ],
        })
    }
}

impl RenderBackend for WgpuBackend {
    fn upload_indices(&mut self, indices: &[u32]) {
        self.index_buffer = Some(self.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("batch indices"),
                contents: bytemuck::cast_slice(indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        ));
    }

    fn upload_vertices(&mut self, vertices: &[Vertex]) {
        // An upload that was never drawn is replaced, not kept.
        if let Some(base) = self.pending_base.take() {
            self.staging.truncate(base);
        }
        self.pending_base = Some(self.staging.len());
        self.staging.extend_from_slice(vertices);
    }

    fn bind_texture(&mut self, unit: u32, texture: TextureId) {
        match self.bound.get_mut(unit as usize) {
            Some(entry) => *entry = Some(texture),
            None => tracing::warn!(unit, "Texture unit out of range"),
        }
    }

    fn draw_indexed(&mut self, index_count: u32) {
        let Some(base) = self.pending_base.take() else {
            tracing::warn!(index_count, "Draw without uploaded vertices");
            return;
        };
        let textures: Vec<TextureId> = self.bound.iter().map_while(|t| *t).collect();
        let bind_group = self.create_bind_group(&textures);
        self.batches.push(DrawBatch {
            base_vertex: base as i32,
            index_count,
            textures,
            bind_group,
        });
        self.bound = [None; MAX_TEXTURE_SLOTS];
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("batch vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
