//! The interleaved vertex record written for every quad corner.

/// One quad corner as the GPU sees it.
///
/// Layout: 7 × 4 bytes = 28 bytes, no padding. `color` is packed RGBA with
/// red in the lowest byte so it can be read directly as `Unorm8x4`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: u32,
    pub uv: [f32; 2],
    /// 0 means untextured; k means texture unit k - 1.
    pub texture_slot: f32,
}

/// Vertices emitted per quad.
pub const VERTICES_PER_QUAD: usize = 4;

/// Indices emitted per quad (two triangles).
pub const INDICES_PER_QUAD: usize = 6;

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Unorm8x4,
        2 => Float32x2,
        3 => Float32
    ];

    /// Vertex buffer layout matching the WGSL `VertexInput` struct.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}
