use std::path::PathBuf;

use crate::batch::BatchError;

/// Errors that can occur while setting up or driving the GPU.
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("surface error: {0}")]
    SurfaceError(String),

    #[error("no suitable GPU adapter found")]
    AdapterNotFound,

    #[error("device error: {0}")]
    DeviceError(String),

    #[error("adapter is missing required capabilities: {0}")]
    MissingFeatures(String),

    #[error("failed to load texture {path}: {reason}")]
    TextureLoad { path: PathBuf, reason: String },

    #[error("invalid texture data: {0}")]
    TextureData(String),

    #[error("batch error: {0}")]
    Batch(#[from] BatchError),
}

impl From<wgpu::SurfaceError> for RendererError {
    fn from(e: wgpu::SurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::CreateSurfaceError> for RendererError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RendererError::SurfaceError(e.to_string())
    }
}

impl From<wgpu::RequestDeviceError> for RendererError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RendererError::DeviceError(e.to_string())
    }
}

/// Physical pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalSize {
    pub width: u32,
    pub height: u32,
}
