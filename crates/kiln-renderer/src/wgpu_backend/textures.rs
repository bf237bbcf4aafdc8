use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use kiln_common::TextureId;

use crate::gpu::RendererError;

struct GpuTexture {
    view: wgpu::TextureView,
    width: u32,
    height: u32,
}

/// Registry of GPU textures addressed by [`TextureId`].
///
/// Also owns a 1×1 white texture used to fill unused binding array entries.
pub struct GpuTextures {
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    textures: HashMap<TextureId, GpuTexture>,
    white: wgpu::TextureView,
    next_id: u32,
}

impl GpuTextures {
    pub fn new(device: Arc<wgpu::Device>, queue: Arc<wgpu::Queue>) -> Self {
        let white = upload_rgba8(&device, &queue, 1, 1, &[255; 4], "white texture");
        Self {
            device,
            queue,
            textures: HashMap::new(),
            white,
            next_id: 1,
        }
    }

    /// Upload tightly packed RGBA8 pixels and register the texture.
    pub fn create_rgba8(&mut self, width: u32, height: u32, pixels: &[u8]) -> Result<TextureId, RendererError> {
        if width == 0 || height == 0 {
            return Err(RendererError::TextureData(format!(
                "texture size {width}x{height} is empty"
            )));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RendererError::TextureData(format!(
                "{width}x{height} RGBA8 needs {expected} bytes, got {}",
                pixels.len()
            )));
        }

        let id = TextureId::new(self.next_id);
        self.next_id += 1;
        let label = format!("texture {id}");
        let view = upload_rgba8(&self.device, &self.queue, width, height, pixels, &label);
        self.textures.insert(id, GpuTexture { view, width, height });
        tracing::debug!(texture = %id, width, height, "Texture created");
        Ok(id)
    }

    /// Decode an image file and register it.
    pub fn load(&mut self, path: &Path) -> Result<TextureId, RendererError> {
        let image = image::open(path)
            .map_err(|e| RendererError::TextureLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .to_rgba8();
        let (width, height) = image.dimensions();
        let id = self.create_rgba8(width, height, image.as_raw())?;
        tracing::info!(texture = %id, path = %path.display(), width, height, "Texture loaded");
        Ok(id)
    }

    pub fn view(&self, id: TextureId) -> Option<&wgpu::TextureView> {
        self.textures.get(&id).map(|t| &t.view)
    }

    pub fn size(&self, id: TextureId) -> Option<(u32, u32)> {
        self.textures.get(&id).map(|t| (t.width, t.height))
    }

    pub fn white(&self) -> &wgpu::TextureView {
        &self.white
    }

    pub fn remove(&mut self, id: TextureId) -> bool {
        self.textures.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

fn upload_rgba8(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    width: u32,
    height: u32,
    pixels: &[u8],
    label: &str,
) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            aspect: wgpu::TextureAspect::All,
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
        },
        pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
