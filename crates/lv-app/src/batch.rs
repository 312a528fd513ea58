use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lv_core::config::LevelConfig;
use lv_render::{RenderOptions, render_level};
use lv_split::{SplitMarkers, split_file_name, split_level_with};
use lv_tiles::{TileSet, prepare_tiles};

use crate::inputs::resolve_inputs;
use crate::output::save_png;
use crate::report::{BatchReport, ItemOutcome};

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| String::from("level"), |s| s.to_string_lossy().into_owned())
}

/// Point d'entrée du rendu par lots.
///
/// One tile set is built for the whole batch (tile directory or
/// placeholders). Each matched file is rendered to `<stem>.png` in
/// `config.render.output_dir`. A file that cannot be read, rendered or
/// written is reported as skipped and the batch goes on.
///
/// # Errors
/// Returns an error if the input directory cannot be listed, the tile set
/// cannot be built, or the output directory cannot be created.
pub fn run_render_batch(pattern: &str, config: &LevelConfig) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let files = resolve_inputs(pattern)?;
    if files.is_empty() {
        log::warn!("Aucun fichier ne correspond à {pattern}");
        return Ok(report);
    }
    log::info!("{} niveau(x) à rendre", files.len());

    let render = &config.render;
    let tiles = prepare_tiles(&render.tiles_dir, &render.tile_files, render.tile_size)?;
    let opts = RenderOptions::from(render);

    fs::create_dir_all(&render.output_dir)
        .with_context(|| format!("Création de {}", render.output_dir.display()))?;

    for path in files {
        let outcome = match render_one(&path, &tiles, &opts, &render.output_dir) {
            Ok(output) => {
                log::info!("Niveau sauvegardé : {}", output.display());
                ItemOutcome::Rendered { output }
            }
            Err(e) => {
                log::warn!("Ignoré {} : {e:#}", path.display());
                ItemOutcome::Skipped {
                    reason: format!("{e:#}"),
                }
            }
        };
        report.push(path, outcome);
    }

    Ok(report)
}

fn render_one(path: &Path, tiles: &TileSet, opts: &RenderOptions, out_dir: &Path) -> Result<PathBuf> {
    let level = fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let image = render_level(&level, tiles, opts)?;
    log::debug!(
        "{} → {}×{} px",
        path.display(),
        image.width,
        image.height
    );

    let output = out_dir.join(format!("{}.png", file_stem(path)));
    save_png(&image, &output)?;
    Ok(output)
}

/// Point d'entrée de la découpe par lots.
///
/// Each matched file is split into slices of `width` middle columns written
/// as `<stem>_split_<n>.txt` in `config.split.output_dir`. Missing markers,
/// a playable area narrower than `width` and I/O failures skip the file.
///
/// # Errors
/// Returns an error if the input directory cannot be listed or the output
/// directory cannot be created.
pub fn run_split_batch(pattern: &str, width: usize, config: &LevelConfig) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    let files = resolve_inputs(pattern)?;
    if files.is_empty() {
        log::warn!("Aucun fichier ne correspond à {pattern}");
        return Ok(report);
    }

    let split = &config.split;
    let markers = SplitMarkers {
        start: split.start_marker,
        end: split.end_marker,
    };
    fs::create_dir_all(&split.output_dir)
        .with_context(|| format!("Création de {}", split.output_dir.display()))?;

    for path in files {
        let outcome = match split_one(&path, width, markers, &split.output_dir) {
            Ok(outputs) if outputs.is_empty() => {
                log::warn!(
                    "Ignoré {} : aucune découpe de largeur {width} possible",
                    path.display()
                );
                ItemOutcome::Skipped {
                    reason: format!("aucune découpe de largeur {width} possible"),
                }
            }
            Ok(outputs) => ItemOutcome::Split { outputs },
            Err(e) => {
                log::warn!("Ignoré {} : {e:#}", path.display());
                ItemOutcome::Skipped {
                    reason: format!("{e:#}"),
                }
            }
        };
        report.push(path, outcome);
    }

    Ok(report)
}

fn split_one(
    path: &Path,
    width: usize,
    markers: SplitMarkers,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let level = fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let parts = split_level_with(&level, width, markers)?;

    let stem = file_stem(path);
    let mut outputs = Vec::with_capacity(parts.len());
    for (i, part) in parts.iter().enumerate() {
        let output = out_dir.join(split_file_name(&stem, i + 1));
        if let Err(e) = fs::write(&output, part) {
            discard(&outputs);
            return Err(e).with_context(|| format!("Impossible d'écrire {}", output.display()));
        }
        log::info!("Sauvegardé : {}", output.display());
        outputs.push(output);
    }
    Ok(outputs)
}

/// Remove the slices already written for an input that is being skipped.
fn discard(outputs: &[PathBuf]) {
    for output in outputs {
        if let Err(e) = fs::remove_file(output) {
            log::warn!("Impossible de supprimer {} : {e}", output.display());
        }
    }
}
