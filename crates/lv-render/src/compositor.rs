use lv_core::frame::FrameBuffer;

/// Colle `src` sur `dst` en `(x, y)` en utilisant l'alpha de `src` comme masque.
///
/// Every channel, alpha included, becomes `src*a + dst*(255-a)` over 255,
/// rounded. Fully transparent source pixels leave `dst` untouched and fully
/// opaque ones replace it. Parts of `src` outside `dst` are clipped, so `x`
/// and `y` may be negative.
///
/// # Example
/// ```
/// use lv_core::frame::FrameBuffer;
/// use lv_render::compositor::paste_masked;
/// let mut dst = FrameBuffer::filled(4, 4, [0, 0, 255, 255]);
/// let src = FrameBuffer::filled(2, 2, [255, 0, 0, 255]);
/// paste_masked(&mut dst, &src, -1, 3);
/// assert_eq!(dst.pixel(0, 3), [255, 0, 0, 255]);
/// assert_eq!(dst.pixel(1, 3), [0, 0, 255, 255]);
/// ```
pub fn paste_masked(dst: &mut FrameBuffer, src: &FrameBuffer, x: i64, y: i64) {
    let x_start = x.max(0);
    let y_start = y.max(0);
    let x_end = (x + i64::from(src.width)).min(i64::from(dst.width));
    let y_end = (y + i64::from(src.height)).min(i64::from(dst.height));

    for dy in y_start..y_end {
        for dx in x_start..x_end {
            let s = src.pixel((dx - x) as u32, (dy - y) as u32);
            let a = u32::from(s[3]);
            if a == 0 {
                continue;
            }
            let (dx, dy) = (dx as u32, dy as u32);
            if a == 255 {
                dst.set_pixel(dx, dy, s);
                continue;
            }
            let d = dst.pixel(dx, dy);
            let mix = |sc: u8, dc: u8| {
                ((u32::from(sc) * a + u32::from(dc) * (255 - a) + 127) / 255) as u8
            };
            dst.set_pixel(dx, dy, [mix(s[0], d[0]), mix(s[1], d[1]), mix(s[2], d[2]), mix(s[3], d[3])]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_pixels_keep_background() {
        let mut dst = FrameBuffer::filled(2, 2, [10, 20, 30, 255]);
        let mut src = FrameBuffer::filled(2, 2, [200, 0, 0, 255]);
        src.set_pixel(1, 1, [0, 0, 0, 0]);
        paste_masked(&mut dst, &src, 0, 0);
        assert_eq!(dst.pixel(0, 0), [200, 0, 0, 255]);
        assert_eq!(dst.pixel(1, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn partial_alpha_blends_every_channel() {
        let mut dst = FrameBuffer::filled(1, 1, [255, 255, 255, 255]);
        let src = FrameBuffer::filled(1, 1, [0, 0, 0, 100]);
        paste_masked(&mut dst, &src, 0, 0);
        // 255 * 155 / 255 = 155, alpha 100*100/255 + 255*155/255 ≈ 194
        assert_eq!(dst.pixel(0, 0), [155, 155, 155, 194]);
    }

    #[test]
    fn fully_outside_is_noop() {
        let mut dst = FrameBuffer::filled(2, 2, [1, 1, 1, 255]);
        let before = dst.clone();
        let src = FrameBuffer::filled(2, 2, [9, 9, 9, 255]);
        paste_masked(&mut dst, &src, 5, -7);
        paste_masked(&mut dst, &src, -2, 0);
        assert_eq!(dst, before);
    }
}
