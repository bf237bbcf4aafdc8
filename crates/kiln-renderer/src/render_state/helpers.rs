use crate::gpu::PhysicalSize;

/// Log the first presented frame, once per render state.
///
/// Returns whether this call did the logging.
pub(crate) fn log_first_frame(
    logged: &mut bool,
    size: PhysicalSize,
    format: wgpu::TextureFormat,
    draw_calls: u32,
) -> bool {
    if std::mem::replace(logged, true) {
        return false;
    }
    tracing::info!(
        width = size.width,
        height = size.height,
        format = ?format,
        draw_calls,
        "First frame presented"
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size() -> PhysicalSize {
        PhysicalSize {
            width: 640,
            height: 480,
        }
    }

    #[test]
    fn first_frame_logs_once_per_flag() {
        let format = wgpu::TextureFormat::Bgra8UnormSrgb;
        let mut logged = false;
        assert!(log_first_frame(&mut logged, size(), format, 3));
        assert!(logged);
        assert!(!log_first_frame(&mut logged, size(), format, 3));
    }

    #[test]
    fn separate_flags_log_independently() {
        let format = wgpu::TextureFormat::Bgra8UnormSrgb;
        let mut first = false;
        let mut second = false;
        assert!(log_first_frame(&mut first, size(), format, 1));
        assert!(log_first_frame(&mut second, size(), format, 1));
    }
}
