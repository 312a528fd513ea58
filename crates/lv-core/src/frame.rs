/// RGBA pixel, channel order r, g, b, a.
pub type Rgba = [u8; 4];

/// Buffer de pixels RGBA, row-major, 4 bytes par pixel.
///
/// Used both for individual tiles and for the composited level image.
///
/// # Example
/// ```
/// use lv_core::frame::FrameBuffer;
/// let fb = FrameBuffer::new(10, 10);
/// assert_eq!(fb.data.len(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Pixels RGBA, row-major, 4 bytes par pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl FrameBuffer {
    /// Crée un buffer transparent aux dimensions données.
    ///
    /// # Example
    /// ```
    /// use lv_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(100, 50);
    /// assert_eq!(fb.width, 100);
    /// assert_eq!(fb.height, 50);
    /// assert_eq!(fb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width as usize) * (height as usize) * 4],
            width,
            height,
        }
    }

    /// Crée un buffer rempli d'une couleur unie.
    ///
    /// # Example
    /// ```
    /// use lv_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::filled(2, 2, [1, 2, 3, 255]);
    /// assert_eq!(fb.pixel(1, 1), [1, 2, 3, 255]);
    /// ```
    #[must_use]
    pub fn filled(width: u32, height: u32, color: Rgba) -> Self {
        let mut fb = Self::new(width, height);
        fb.fill(color);
        fb
    }

    /// Wraps raw RGBA bytes, returning `None` when the length does not match.
    #[must_use]
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() == (width as usize) * (height as usize) * 4 {
            Some(Self {
                data,
                width,
                height,
            })
        } else {
            None
        }
    }

    /// (width, height) in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    /// Accès au pixel (x, y). Hors limites → transparent.
    ///
    /// # Example
    /// ```
    /// use lv_core::frame::FrameBuffer;
    /// let fb = FrameBuffer::new(10, 10);
    /// assert_eq!(fb.pixel(0, 0), [0, 0, 0, 0]);
    /// ```
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let idx = self.index(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    /// Écrit un pixel sans mélange. Ignoré hors limites.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.index(x, y);
        self.data[idx..idx + 4].copy_from_slice(&color);
    }

    /// Remplit tout le buffer.
    pub fn fill(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Remplit le rectangle inclusif `[x0, x1] × [y0, y1]`, clippé au buffer.
    pub fn fill_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let x1 = x1.min(self.width - 1);
        let y1 = y1.min(self.height - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Trace le contour 1 px du rectangle inclusif `[x0, x1] × [y0, y1]`.
    pub fn outline_rect(&mut self, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba) {
        if x0 > x1 || y0 > y1 {
            return;
        }
        for x in x0..=x1 {
            self.set_pixel(x, y0, color);
            self.set_pixel(x, y1, color);
        }
        for y in y0..=y1 {
            self.set_pixel(x0, y, color);
            self.set_pixel(x1, y, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_checks_length() {
        assert!(FrameBuffer::from_raw(2, 2, vec![0; 16]).is_some());
        assert!(FrameBuffer::from_raw(2, 2, vec![0; 15]).is_none());
    }

    #[test]
    fn fill_rect_is_clipped() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.fill_rect(2, 2, 10, 10, [9, 9, 9, 255]);
        assert_eq!(fb.pixel(3, 3), [9, 9, 9, 255]);
        assert_eq!(fb.pixel(1, 1), [0, 0, 0, 0]);
    }

    #[test]
    fn outline_leaves_interior() {
        let mut fb = FrameBuffer::filled(5, 5, [1, 1, 1, 255]);
        fb.outline_rect(1, 1, 3, 3, [0, 0, 0, 100]);
        assert_eq!(fb.pixel(1, 1), [0, 0, 0, 100]);
        assert_eq!(fb.pixel(3, 2), [0, 0, 0, 100]);
        assert_eq!(fb.pixel(2, 2), [1, 1, 1, 255]);
        assert_eq!(fb.pixel(0, 0), [1, 1, 1, 255]);
    }
}
