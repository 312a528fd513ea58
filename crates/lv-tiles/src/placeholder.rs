use lv_core::frame::{FrameBuffer, Rgba};
use lv_core::tile::TileKind;

use crate::tileset::{TileSet, TileSource};

/// Table des couleurs de remplissage des tuiles synthétiques.
///
/// Characters absent from this table (reserved and unknown kinds) get no
/// placeholder and therefore render as background.
pub const PLACEHOLDER_COLORS: &[(char, Rgba)] = &[
    ('-', [135, 206, 235, 255]),
    (' ', [135, 206, 235, 255]),
    ('X', [139, 69, 19, 255]),
    ('S', [205, 133, 63, 255]),
    ('Q', [255, 215, 0, 255]),
    ('?', [255, 215, 0, 255]),
    ('E', [165, 42, 42, 255]),
    ('H', [34, 139, 34, 255]),
    ('<', [0, 128, 0, 255]),
    ('>', [0, 128, 0, 255]),
    ('[', [0, 100, 0, 255]),
    (']', [0, 100, 0, 255]),
    ('{', [128, 128, 128, 255]),
    ('}', [128, 128, 128, 255]),
];

const SOLID_OUTLINE: Rgba = [0, 0, 0, 100];
const BLOCK_OUTLINE: Rgba = [0, 0, 0, 150];
const GLYPH_INK: Rgba = [255, 255, 255, 255];
const ENEMY_BODY: Rgba = [139, 69, 19, 255];
const PIPE_SHADE: Rgba = [0, 100, 0, 255];

/// 5×7 bitmap of `?`, one row per byte, MSB = leftmost column.
const QUESTION_GLYPH: [u8; 7] = [
    0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100,
];

/// Build a placeholder tile set at `tile_size` from [`PLACEHOLDER_COLORS`].
///
/// # Example
/// ```
/// use lv_tiles::{synthesize_placeholders, TileSource};
/// let tiles = synthesize_placeholders(16);
/// assert_eq!(tiles.source(), TileSource::Placeholder);
/// assert_eq!(tiles.get('-').unwrap().pixel(0, 0), [135, 206, 235, 255]);
/// assert!(tiles.get('G').is_none());
/// ```
#[must_use]
pub fn synthesize_placeholders(tile_size: u32) -> TileSet {
    let mut tiles = TileSet::new(TileSource::Placeholder);
    for &(ch, color) in PLACEHOLDER_COLORS {
        tiles.insert(ch, Some(placeholder_tile(ch, color, tile_size)));
    }
    tiles
}

fn placeholder_tile(ch: char, color: Rgba, t: u32) -> FrameBuffer {
    let mut fb = FrameBuffer::filled(t, t, color);
    if t < 3 {
        return fb;
    }

    match TileKind::of(ch) {
        TileKind::Solid => fb.outline_rect(1, 1, t - 2, t - 2, SOLID_OUTLINE),
        TileKind::Interactive => {
            fb.outline_rect(1, 1, t - 2, t - 2, BLOCK_OUTLINE);
            draw_glyph(&mut fb, &QUESTION_GLYPH, t / 4, 2);
        }
        TileKind::SpriteEntity if t >= 5 => fill_ellipse(&mut fb, 2, 2, t - 3, t - 3, ENEMY_BODY),
        // pipe tops are two-tone, bodies are flat
        TileKind::PipeSegment if matches!(ch, '<' | '>') => {
            fb.fill_rect(0, t / 2, t - 1, t - 1, PIPE_SHADE);
        }
        _ => {}
    }
    fb
}

fn draw_glyph(fb: &mut FrameBuffer, rows: &[u8], x: u32, y: u32) {
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..5u32 {
            if bits & (0b10000 >> dx) != 0 {
                fb.set_pixel(x + dx, y + dy as u32, GLYPH_INK);
            }
        }
    }
}

/// Fills the ellipse inscribed in the inclusive box `[x0, x1] × [y0, y1]`.
fn fill_ellipse(fb: &mut FrameBuffer, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba) {
    let cx = f64::from(x0 + x1) / 2.0;
    let cy = f64::from(y0 + y1) / 2.0;
    let rx = f64::from(x1 - x0) / 2.0 + 0.5;
    let ry = f64::from(y1 - y0) / 2.0 + 0.5;
    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = (f64::from(x) - cx) / rx;
            let dy = (f64::from(y) - cy) / ry;
            if dx * dx + dy * dy <= 1.0 {
                fb.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tile_has_requested_size() {
        let tiles = synthesize_placeholders(24);
        for (ch, tile) in tiles.iter() {
            assert_eq!(tile.dimensions(), (24, 24), "tuile {ch}");
        }
        assert_eq!(tiles.iter().count(), PLACEHOLDER_COLORS.len());
    }

    #[test]
    fn solid_blocks_have_translucent_outline() {
        let tiles = synthesize_placeholders(16);
        let ground = tiles.get('X').unwrap();
        assert_eq!(ground.pixel(1, 1), SOLID_OUTLINE);
        assert_eq!(ground.pixel(14, 8), SOLID_OUTLINE);
        assert_eq!(ground.pixel(0, 0), [139, 69, 19, 255]);
        assert_eq!(ground.pixel(8, 8), [139, 69, 19, 255]);
    }

    #[test]
    fn question_block_carries_glyph() {
        let tiles = synthesize_placeholders(16);
        let block = tiles.get('?').unwrap();
        assert_eq!(block.pixel(1, 1), BLOCK_OUTLINE);
        // top bar of the glyph starts one column in from x = 16 / 4
        assert_eq!(block.pixel(5, 2), GLYPH_INK);
        assert_eq!(block.pixel(6, 8), GLYPH_INK);
    }

    #[test]
    fn enemy_is_an_ellipse() {
        let tiles = synthesize_placeholders(16);
        let enemy = tiles.get('E').unwrap();
        assert_eq!(enemy.pixel(7, 7), ENEMY_BODY);
        assert_eq!(enemy.pixel(2, 2), [165, 42, 42, 255]);
        assert_eq!(enemy.pixel(0, 7), [165, 42, 42, 255]);
    }

    #[test]
    fn pipe_tops_are_two_tone() {
        let tiles = synthesize_placeholders(16);
        let top = tiles.get('<').unwrap();
        assert_eq!(top.pixel(3, 7), [0, 128, 0, 255]);
        assert_eq!(top.pixel(3, 8), PIPE_SHADE);
        let body = tiles.get(']').unwrap();
        assert_eq!(body.pixel(3, 3), body.pixel(3, 12));
    }

    #[test]
    fn tiny_tiles_do_not_underflow() {
        let tiles = synthesize_placeholders(1);
        assert_eq!(tiles.get('E').unwrap().dimensions(), (1, 1));
        let tiles = synthesize_placeholders(3);
        assert_eq!(tiles.get('Q').unwrap().dimensions(), (3, 3));
    }
}
