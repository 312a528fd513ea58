use std::path::Path;

use anyhow::{Context, Result};
use lv_core::frame::FrameBuffer;

/// Encode `fb` as an RGBA8 PNG at `path`.
///
/// # Errors
/// Returns an error if encoding or writing fails.
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<()> {
    image::save_buffer_with_format(
        path,
        &fb.data,
        fb.width,
        fb.height,
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("Impossible d'écrire {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_roundtrip_keeps_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.png");
        let mut fb = FrameBuffer::filled(3, 2, [135, 206, 235, 255]);
        fb.set_pixel(2, 1, [0, 0, 0, 100]);
        save_png(&fb, &path).unwrap();

        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.into_raw(), fb.data);
    }
}
