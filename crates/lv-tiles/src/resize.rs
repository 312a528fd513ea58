use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer as FirResizer};
use lv_core::error::LevelError;
use lv_core::frame::FrameBuffer;

/// Resizer nearest-neighbor réutilisable wrappant fast_image_resize.
///
/// Pixel art stays crisp: no interpolation, no alpha premultiplication.
///
/// # Example
/// ```
/// use lv_tiles::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (the resize API borrows it mutably).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new nearest-neighbor resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new()
                .resize_alg(ResizeAlg::Nearest)
                .use_alpha(false),
            src_buf: Vec::new(),
        }
    }

    /// Resize `src` into `dst`. Dimensions of `dst` determine output size.
    ///
    /// # Errors
    /// Returns an error if either buffer has a zero dimension or the resize
    /// operation fails.
    pub fn resize_into(&mut self, src: &FrameBuffer, dst: &mut FrameBuffer) -> Result<()> {
        for fb in [src, &*dst] {
            if fb.width == 0 || fb.height == 0 {
                return Err(LevelError::InvalidDimensions {
                    width: fb.width,
                    height: fb.height,
                }
                .into());
            }
        }

        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
                .context("Invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4)
                .context("Invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot nearest-neighbor resize.
///
/// # Errors
/// Returns an error if the resize operation fails.
///
/// # Example
/// ```
/// use lv_tiles::resize::resize_nearest;
/// use lv_core::frame::FrameBuffer;
/// let src = FrameBuffer::filled(8, 8, [10, 20, 30, 255]);
/// let dst = resize_nearest(&src, 16, 16).unwrap();
/// assert_eq!(dst.dimensions(), (16, 16));
/// assert_eq!(dst.pixel(15, 15), [10, 20, 30, 255]);
/// ```
pub fn resize_nearest(src: &FrameBuffer, width: u32, height: u32) -> Result<FrameBuffer> {
    let mut dst = FrameBuffer::new(width, height);
    Resizer::new().resize_into(src, &mut dst)?;
    Ok(dst)
}
