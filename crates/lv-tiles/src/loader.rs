use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lv_core::frame::FrameBuffer;

use crate::placeholder::synthesize_placeholders;
use crate::tileset::{TileSet, TileSource};

/// Décode une image disque en RGBA8.
///
/// # Errors
/// Returns an error if the image cannot be opened or decoded.
pub fn load_image(path: &Path) -> Result<FrameBuffer> {
    let img =
        image::open(path).with_context(|| format!("Impossible de charger {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    FrameBuffer::from_raw(width, height, rgba.into_raw())
        .with_context(|| format!("Buffer RGBA incohérent pour {}", path.display()))
}

/// Charge une tuile par entrée de `files` depuis `dir`.
///
/// A missing or undecodable file is not an error: the character is recorded
/// as absent and a warning is logged.
///
/// # Errors
/// Infallible today; the `Result` leaves room for directory-level failures.
///
/// # Example
/// ```no_run
/// use lv_core::tile::default_tile_files;
/// use lv_tiles::load_tiles;
/// use std::path::Path;
/// let tiles = load_tiles(Path::new("tiles"), &default_tile_files()).unwrap();
/// ```
pub fn load_tiles(dir: &Path, files: &BTreeMap<char, String>) -> Result<TileSet> {
    let mut tiles = TileSet::new(TileSource::Directory);

    for (&ch, name) in files {
        let path = dir.join(name);
        if !path.is_file() {
            log::warn!("Tuile manquante pour '{ch}' : {}", path.display());
            tiles.insert(ch, None);
            continue;
        }
        match load_image(&path) {
            Ok(fb) => {
                log::info!("Tuile '{ch}' chargée : {name} ({}×{})", fb.width, fb.height);
                tiles.insert(ch, Some(fb));
            }
            Err(e) => {
                log::warn!("Tuile illisible pour '{ch}' : {e:#}");
                tiles.insert(ch, None);
            }
        }
    }

    Ok(tiles)
}

/// `true` if `dir` exists and contains at least one entry.
fn has_entries(dir: &Path) -> bool {
    fs::read_dir(dir).is_ok_and(|mut entries| entries.next().is_some())
}

/// Build the tile set for a batch: the tile directory when it has content,
/// placeholders otherwise.
///
/// # Errors
/// Propagates errors from [`load_tiles`].
pub fn prepare_tiles(dir: &Path, files: &BTreeMap<char, String>, tile_size: u32) -> Result<TileSet> {
    if has_entries(dir) {
        log::info!("Chargement des tuiles depuis {}", dir.display());
        let tiles = load_tiles(dir, files)?;
        let missing = tiles.missing();
        if !missing.is_empty() {
            let chars: String = missing.iter().collect();
            log::warn!(
                "{} tuile(s) absente(s), rendues en fond : {chars}",
                missing.len()
            );
        }
        Ok(tiles)
    } else {
        log::info!(
            "Dossier de tuiles {} absent ou vide, tuiles de substitution {tile_size}px",
            dir.display()
        );
        Ok(synthesize_placeholders(tile_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
        let fb = FrameBuffer::filled(width, height, color);
        image::save_buffer(path, &fb.data, width, height, image::ExtendedColorType::Rgba8)
            .unwrap();
    }

    fn files(chars: &[char]) -> BTreeMap<char, String> {
        chars
            .iter()
            .map(|&c| (c, lv_core::tile::default_tile_file(c)))
            .collect()
    }

    #[test]
    fn loads_present_and_marks_missing() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("-.png"), 16, 16, [1, 2, 3, 255]);
        write_png(&dir.path().join("E.png"), 16, 24, [9, 9, 9, 255]);

        let tiles = load_tiles(dir.path(), &files(&['-', 'E', 'X'])).unwrap();
        assert_eq!(tiles.source(), TileSource::Directory);
        assert_eq!(tiles.get('-').unwrap().pixel(0, 0), [1, 2, 3, 255]);
        assert_eq!(tiles.get('E').unwrap().dimensions(), (16, 24));
        assert!(tiles.is_mapped('X'));
        assert_eq!(tiles.missing(), vec!['X']);
    }

    #[test]
    fn corrupt_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("X.png"), b"not a png").unwrap();
        let tiles = load_tiles(dir.path(), &files(&['X'])).unwrap();
        assert!(tiles.get('X').is_none());
    }

    #[test]
    fn missing_dir_synthesizes() {
        let dir = tempfile::tempdir().unwrap();
        let tiles = prepare_tiles(&dir.path().join("nope"), &files(&['-']), 8).unwrap();
        assert_eq!(tiles.source(), TileSource::Placeholder);
        assert_eq!(tiles.get('X').unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn empty_dir_synthesizes() {
        let dir = tempfile::tempdir().unwrap();
        let tiles = prepare_tiles(dir.path(), &files(&['-']), 8).unwrap();
        assert_eq!(tiles.source(), TileSource::Placeholder);
    }

    #[test]
    fn populated_dir_loads() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("-.png"), 8, 8, [5, 5, 5, 255]);
        let tiles = prepare_tiles(dir.path(), &files(&['-', 'X']), 8).unwrap();
        assert_eq!(tiles.source(), TileSource::Directory);
        assert!(tiles.get('X').is_none());
        assert_eq!(tiles.missing(), vec!['X']);
    }
}
