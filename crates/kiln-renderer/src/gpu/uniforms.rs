//! Projection uniform shared by the batch pipeline.

use glam::Mat4;
use kiln_config::schema::Projection;

/// Depth range mapped by the orthographic projection. Sprite z values
/// outside it are clipped.
pub const DEPTH_RANGE: f32 = 1000.0;

/// GPU-side uniform block matching the WGSL `Uniforms` struct (64 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ProjectionUniforms {
    pub projection: [[f32; 4]; 4],
}

impl ProjectionUniforms {
    pub fn new(projection: Projection, width: u32, height: u32) -> Self {
        Self {
            projection: projection_matrix(projection, width, height).to_cols_array_2d(),
        }
    }
}

/// World-to-clip matrix for a viewport. World space has y up.
///
/// `Pixels` puts the origin at the bottom-left with one unit per pixel;
/// `Centered` puts the origin at the viewport centre.
pub fn projection_matrix(projection: Projection, width: u32, height: u32) -> Mat4 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    let (left, right, bottom, top) = match projection {
        Projection::Pixels => (0.0, w, 0.0, h),
        Projection::Centered => (-w / 2.0, w / 2.0, -h / 2.0, h / 2.0),
    };
    Mat4::orthographic_rh(left, right, bottom, top, -DEPTH_RANGE, DEPTH_RANGE)
}
