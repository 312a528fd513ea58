use std::collections::BTreeMap;

use anyhow::Result;
use lv_core::config::{DEFAULT_TILE_SIZE, RenderConfig, SKY_COLOR};
use lv_core::error::LevelError;
use lv_core::frame::{FrameBuffer, Rgba};
use lv_core::grid::LevelGrid;
use lv_core::tile::TileKind;
use lv_tiles::TileSet;
use lv_tiles::resize::resize_nearest;

use crate::compositor::paste_masked;

/// Paramètres de rendu d'un niveau.
///
/// # Example
/// ```
/// use lv_render::RenderOptions;
/// let opts = RenderOptions::default();
/// assert_eq!(opts.tile_size, 16);
/// assert!(opts.is_sprite('E'));
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Edge of one grid cell in pixels.
    pub tile_size: u32,
    /// Fill color before any tile is drawn.
    pub sky_color: Rgba,
    /// Character whose tile stands in for sprites and unmapped cells.
    pub background_char: char,
    /// Characters drawn at native size, bottom-anchored.
    pub sprite_chars: Vec<char>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            sky_color: SKY_COLOR,
            background_char: '-',
            sprite_chars: vec!['E'],
        }
    }
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        Self {
            tile_size: config.tile_size,
            sky_color: config.sky_color,
            background_char: config.background_char,
            sprite_chars: config.sprite_chars.clone(),
        }
    }
}

impl RenderOptions {
    /// `true` if `ch` is drawn in the sprite pass.
    #[must_use]
    pub fn is_sprite(&self, ch: char) -> bool {
        self.sprite_chars.contains(&ch)
    }
}

/// Tiles ready for one render: terrain scaled to the cell, sprites native.
struct PreparedTiles<'a> {
    background: Option<FrameBuffer>,
    terrain: BTreeMap<char, FrameBuffer>,
    sprites: BTreeMap<char, &'a FrameBuffer>,
}

impl<'a> PreparedTiles<'a> {
    fn new(tiles: &'a TileSet, opts: &RenderOptions) -> Result<Self> {
        let t = opts.tile_size;
        let fit = |tile: &FrameBuffer| resize_nearest(tile, t, t);

        let mut terrain = BTreeMap::new();
        let mut sprites = BTreeMap::new();
        for (ch, tile) in tiles.iter() {
            if opts.is_sprite(ch) {
                sprites.insert(ch, tile);
            } else {
                terrain.insert(ch, fit(tile)?);
            }
        }

        let background = match terrain.get(&opts.background_char) {
            Some(bg) => Some(bg.clone()),
            None => tiles.get(opts.background_char).map(fit).transpose()?,
        };

        Ok(Self {
            background,
            terrain,
            sprites,
        })
    }

    /// Tile drawn in the background pass for a cell.
    fn terrain_for(&self, cell: Option<char>, opts: &RenderOptions) -> Option<&FrameBuffer> {
        match cell {
            Some(ch) if opts.is_sprite(ch) => self.background.as_ref(),
            Some(ch) => self.terrain.get(&ch).or(self.background.as_ref()),
            None => self.background.as_ref(),
        }
    }
}

/// Parse `level` and render it. See [`render_grid`].
///
/// Edge rows that hold only whitespace are dropped before rendering.
///
/// # Errors
/// Returns [`LevelError::EmptyLevel`] for a level without content, or any
/// error of [`render_grid`].
///
/// # Example
/// ```
/// use lv_render::{render_level, RenderOptions};
/// use lv_tiles::synthesize_placeholders;
/// let tiles = synthesize_placeholders(16);
/// let img = render_level("--E-\nXXXX\n", &tiles, &RenderOptions::default()).unwrap();
/// assert_eq!(img.dimensions(), (64, 32));
/// ```
pub fn render_level(level: &str, tiles: &TileSet, opts: &RenderOptions) -> Result<FrameBuffer> {
    let grid = LevelGrid::parse_stripped(level)?;
    render_grid(&grid, tiles, opts)
}

/// Composite `grid` into an image of `width*t × height*t` pixels.
///
/// Two passes in row-major order:
/// 1. background: terrain tiles scaled to `t×t` (nearest); sprite cells,
///    unmapped characters, absent tiles and missing cells of short rows get
///    the background tile.
/// 2. sprites: native size, centered horizontally, bottom edge on the
///    cell's bottom edge, overflowing upward when taller than a cell.
///
/// # Errors
/// Returns [`LevelError::InvalidDimensions`] when the tile size is zero or
/// the image would not fit in `u32` pixels, or a resize error.
pub fn render_grid(grid: &LevelGrid, tiles: &TileSet, opts: &RenderOptions) -> Result<FrameBuffer> {
    let t = opts.tile_size;
    let (cols, rows) = (grid.width(), grid.height());
    if t == 0 {
        return Err(LevelError::InvalidDimensions {
            width: cols as u32,
            height: rows as u32,
        }
        .into());
    }
    let width = u32::try_from(cols).ok().and_then(|c| c.checked_mul(t));
    let height = u32::try_from(rows).ok().and_then(|r| r.checked_mul(t));
    let (Some(width), Some(height)) = (width, height) else {
        return Err(LevelError::InvalidDimensions {
            width: cols as u32,
            height: rows as u32,
        }
        .into());
    };

    log::debug!("Niveau {cols}×{rows} tuiles → image {width}×{height} px");

    let prepared = PreparedTiles::new(tiles, opts)?;
    let mut out = FrameBuffer::filled(width, height, opts.sky_color);
    let step = i64::from(t);

    let mut unknown = 0usize;
    for row in 0..rows {
        for col in 0..cols {
            let cell = grid.get(row, col);
            if let Some(ch) = cell
                && TileKind::of(ch) == TileKind::Unknown
                && !tiles.is_mapped(ch)
            {
                unknown += 1;
            }
            if let Some(tile) = prepared.terrain_for(cell, opts) {
                paste_masked(&mut out, tile, col as i64 * step, row as i64 * step);
            }
        }
    }
    if unknown > 0 {
        log::debug!("{unknown} cellule(s) de caractère inconnu rendues en fond");
    }

    for row in 0..rows {
        for col in 0..cols {
            let Some(ch) = grid.get(row, col) else {
                continue;
            };
            let Some(sprite) = prepared.sprites.get(&ch) else {
                continue;
            };
            let (x, y) = sprite_origin(row, col, t, sprite);
            paste_masked(&mut out, sprite, x, y);
        }
    }

    Ok(out)
}

/// Top-left of a sprite: centered in the cell, bottom-anchored.
fn sprite_origin(row: usize, col: usize, t: u32, sprite: &FrameBuffer) -> (i64, i64) {
    let t = i64::from(t);
    let x = col as i64 * t + (t - i64::from(sprite.width)).div_euclid(2);
    let y = (row as i64 + 1) * t - i64::from(sprite.height);
    (x, y)
}
