use std::sync::Arc;

use winit::window::Window;

use super::{PhysicalSize, RendererError};
use crate::batch::MAX_TEXTURE_SLOTS;

/// Features the batch pipeline needs for its texture binding array.
pub const REQUIRED_FEATURES: wgpu::Features = wgpu::Features::TEXTURE_BINDING_ARRAY
    .union(wgpu::Features::SAMPLED_TEXTURE_AND_STORAGE_BUFFER_ARRAY_NON_UNIFORM_INDEXING);

/// Core GPU state: surface, device, queue and the surface configuration.
pub struct GpuContext {
    pub surface: wgpu::Surface<'static>,
    pub device: Arc<wgpu::Device>,
    pub queue: Arc<wgpu::Queue>,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize,
    pub scale_factor: f64,
}

impl GpuContext {
    /// Create the GPU context for `window`.
    ///
    /// Fails with [`RendererError::MissingFeatures`] if the adapter cannot
    /// bind [`MAX_TEXTURE_SLOTS`] textures in one array.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, RendererError> {
        let inner = window.inner_size();
        let size = PhysicalSize {
            width: inner.width.max(1),
            height: inner.height.max(1),
        };
        let scale_factor = window.scale_factor();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .ok_or(RendererError::AdapterNotFound)?;

        let info = adapter.get_info();
        tracing::info!(
            adapter = %info.name,
            backend = ?info.backend,
            "GPU adapter selected"
        );

        check_capabilities(&adapter)?;

        let required_limits = wgpu::Limits {
            max_sampled_textures_per_shader_stage: MAX_TEXTURE_SLOTS as u32,
            ..wgpu::Limits::default()
        }
        .using_resolution(adapter.limits());

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("kiln device"),
                    required_features: REQUIRED_FEATURES,
                    required_limits,
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await?;

        let capabilities = surface.get_capabilities(&adapter);
        let format = capabilities
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| capabilities.formats.first().copied())
            .ok_or_else(|| RendererError::SurfaceError("surface reports no formats".into()))?;
        let alpha_mode = capabilities
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: if vsync {
                wgpu::PresentMode::AutoVsync
            } else {
                wgpu::PresentMode::AutoNoVsync
            },
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        tracing::info!(
            width = size.width,
            height = size.height,
            format = ?format,
            "GPU context ready"
        );

        Ok(Self {
            surface,
            device: Arc::new(device),
            queue: Arc::new(queue),
            config,
            size,
            scale_factor,
        })
    }

    /// Reconfigure the surface for a new size. Zero sizes are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = PhysicalSize { width, height };
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn current_texture(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }

    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Re-apply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }
}

fn check_capabilities(adapter: &wgpu::Adapter) -> Result<(), RendererError> {
    let missing = REQUIRED_FEATURES - adapter.features();
    if !missing.is_empty() {
        return Err(RendererError::MissingFeatures(format!("{missing:?}")));
    }
    let limit = adapter.limits().max_sampled_textures_per_shader_stage;
    if limit < MAX_TEXTURE_SLOTS as u32 {
        return Err(RendererError::MissingFeatures(format!(
            "max_sampled_textures_per_shader_stage is {limit}, need {MAX_TEXTURE_SLOTS}"
        )));
    }
    Ok(())
}
