use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::LevelError;
use crate::frame::Rgba;
use crate::tile::default_tile_files;

/// Couleur du ciel, utilisée pour remplir l'image avant toute tuile.
pub const SKY_COLOR: Rgba = [135, 206, 235, 255];

/// Taille de tuile par défaut, en pixels.
pub const DEFAULT_TILE_SIZE: u32 = 16;

/// Configuration complète : rendu et découpe.
///
/// Passée explicitement au chargeur de tuiles, au renderer et au splitter.
///
/// # Example
/// ```
/// use lv_core::config::LevelConfig;
/// let config = LevelConfig::default();
/// assert_eq!(config.render.tile_size, 16);
/// assert_eq!(config.split.start_marker, '{');
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct LevelConfig {
    /// Rendering and tile loading.
    pub render: RenderConfig,
    /// Level splitting.
    pub split: SplitConfig,
}

/// Rendering section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RenderConfig {
    /// Edge of one grid cell in pixels.
    pub tile_size: u32,
    /// Directory holding one image per tile character.
    pub tiles_dir: PathBuf,
    /// Where rendered PNGs are written.
    pub output_dir: PathBuf,
    /// Fill color of the image before any tile is drawn.
    pub sky_color: Rgba,
    /// Character whose tile stands in for sprites and unmapped cells.
    pub background_char: char,
    /// Characters drawn at native size in the sprite pass.
    pub sprite_chars: Vec<char>,
    /// `char → file name` inside `tiles_dir`.
    pub tile_files: BTreeMap<char, String>,
}

/// Splitting section.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SplitConfig {
    /// Columns per slice of the playable area. No default.
    pub width: Option<usize>,
    /// Where `<name>_split_<n>.txt` files are written.
    pub output_dir: PathBuf,
    /// Last column of the prefix band.
    pub start_marker: char,
    /// First column of the suffix band.
    pub end_marker: char,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            tiles_dir: PathBuf::from("tiles"),
            output_dir: PathBuf::from("out"),
            sky_color: SKY_COLOR,
            background_char: '-',
            sprite_chars: vec!['E'],
            tile_files: default_tile_files(),
        }
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            width: None,
            output_dir: PathBuf::from("out"),
            start_marker: '{',
            end_marker: '}',
        }
    }
}

impl LevelConfig {
    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization and after CLI overrides.
    pub fn clamp_all(&mut self) {
        self.render.tile_size = self.render.tile_size.clamp(1, 512);
        if self.split.width == Some(0) {
            log::warn!("split.width = 0 ignoré");
            self.split.width = None;
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    split: Option<SplitSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    tile_size: Option<u32>,
    tiles_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    sky_color: Option<Rgba>,
    background_char: Option<String>,
    sprite_chars: Option<Vec<String>>,
    tile_files: Option<BTreeMap<String, String>>,
}

/// Split section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct SplitSection {
    width: Option<usize>,
    output_dir: Option<PathBuf>,
    start_marker: Option<String>,
    end_marker: Option<String>,
}

fn single_char(field: &str, value: &str) -> Result<char, LevelError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(LevelError::Config(format!(
            "{field} doit être un seul caractère, reçu {value:?}"
        ))),
    }
}

/// Parse un document TOML et fusionne avec les valeurs par défaut.
///
/// Entries of `[render.tile_files]` are added to (or replace entries of) the
/// default table rather than replacing it.
///
/// # Errors
/// Returns an error on malformed TOML or on a character field that is not
/// exactly one character.
///
/// # Example
/// ```
/// use lv_core::config::parse_config;
/// let config = parse_config("[render]\ntile_size = 8\n").unwrap();
/// assert_eq!(config.render.tile_size, 8);
/// assert_eq!(config.split.end_marker, '}');
/// ```
pub fn parse_config(content: &str) -> Result<LevelConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut config = LevelConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.tile_size {
            config.render.tile_size = v;
        }
        if let Some(v) = r.tiles_dir {
            config.render.tiles_dir = v;
        }
        if let Some(v) = r.output_dir {
            config.render.output_dir = v;
        }
        if let Some(v) = r.sky_color {
            config.render.sky_color = v;
        }
        if let Some(v) = r.background_char {
            config.render.background_char = single_char("render.background_char", &v)?;
        }
        if let Some(v) = r.sprite_chars {
            config.render.sprite_chars = v
                .iter()
                .map(|s| single_char("render.sprite_chars", s))
                .collect::<Result<_, _>>()?;
        }
        if let Some(v) = r.tile_files {
            for (key, file) in v {
                let ch = single_char("render.tile_files", &key)?;
                config.render.tile_files.insert(ch, file);
            }
        }
    }

    if let Some(s) = file.split {
        if let Some(v) = s.width {
            config.split.width = Some(v);
        }
        if let Some(v) = s.output_dir {
            config.split.output_dir = v;
        }
        if let Some(v) = s.start_marker {
            config.split.start_marker = single_char("split.start_marker", &v)?;
        }
        if let Some(v) = s.end_marker {
            config.split.end_marker = single_char("split.end_marker", &v)?;
        }
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<LevelConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.render.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(config.render.sky_color, SKY_COLOR);
        assert_eq!(config.render.sprite_chars, vec!['E']);
        assert!(config.split.width.is_none());
    }

    #[test]
    fn partial_override() {
        let config = parse_config(
            r#"
[render]
tiles_dir = "assets/smb"
sprite_chars = ["E", "G"]

[render.tile_files]
"E" = "goomba.png"

[split]
width = 50
"#,
        )
        .unwrap();
        assert_eq!(config.render.tiles_dir, PathBuf::from("assets/smb"));
        assert_eq!(config.render.sprite_chars, vec!['E', 'G']);
        assert_eq!(config.render.tile_files[&'E'], "goomba.png");
        assert_eq!(config.render.tile_files[&'X'], "X.png");
        assert_eq!(config.split.width, Some(50));
        assert_eq!(config.render.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn multi_char_marker_is_rejected() {
        let err = parse_config("[split]\nstart_marker = \"{{\"\n").unwrap_err();
        assert!(err.to_string().contains("split.start_marker"));
    }

    #[test]
    fn tile_size_is_clamped() {
        let config = parse_config("[render]\ntile_size = 0\n").unwrap();
        assert_eq!(config.render.tile_size, 1);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levelsmith.toml");
        std::fs::write(&path, "[render]\ntile_size = 32\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.render.tile_size, 32);
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
