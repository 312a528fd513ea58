use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use lv_core::config::{LevelConfig, load_config};

/// levelsmith — rendu de niveaux ASCII en PNG et découpe en tranches jouables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Action à exécuter.
    #[command(subcommand)]
    pub command: Command,

    /// Fichier de configuration TOML. Absent → valeurs par défaut.
    #[arg(short, long, global = true, default_value = "levelsmith.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rend chaque niveau correspondant au motif en PNG.
    Render(RenderArgs),
    /// Découpe chaque niveau correspondant au motif en tranches de largeur fixe.
    Split(SplitArgs),
}

/// Arguments of `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Motif des fichiers de niveau (ex: "levels/*.txt") ou dossier.
    pub pattern: String,

    /// Dossier des tuiles (une image `<caractère>.png` par tuile).
    #[arg(long)]
    pub tiles: Option<PathBuf>,

    /// Dossier de sortie des PNG.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Taille d'une tuile en pixels.
    #[arg(long)]
    pub tile_size: Option<u32>,

    /// Écrire le rapport du lot en JSON.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Arguments of `split`.
#[derive(Args, Debug)]
pub struct SplitArgs {
    /// Motif des fichiers de niveau (ex: "levels/*.txt") ou dossier.
    pub pattern: String,

    /// Colonnes de zone jouable par tranche. Requis ici ou dans la config.
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Dossier de sortie des tranches.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Écrire le rapport du lot en JSON.
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Cli {
    /// Load the `--config` file, or fall back to defaults with a warning
    /// when it does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn resolve_config(&self) -> Result<LevelConfig> {
        if self.config.exists() {
            load_config(&self.config)
        } else {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                self.config.display()
            );
            Ok(LevelConfig::default())
        }
    }

    /// Apply command-line values on top of the file configuration.
    pub fn apply_overrides(&self, config: &mut LevelConfig) {
        match &self.command {
            Command::Render(args) => {
                if let Some(ref dir) = args.tiles {
                    config.render.tiles_dir.clone_from(dir);
                }
                if let Some(ref dir) = args.out {
                    config.render.output_dir.clone_from(dir);
                }
                if let Some(size) = args.tile_size {
                    config.render.tile_size = size;
                }
            }
            Command::Split(args) => {
                if let Some(ref dir) = args.out {
                    config.split.output_dir.clone_from(dir);
                }
                if let Some(width) = args.width {
                    config.split.width = Some(width);
                }
            }
        }
        config.clamp_all();
    }

    /// Report path of the active subcommand.
    #[must_use]
    pub fn report_path(&self) -> Option<&PathBuf> {
        match &self.command {
            Command::Render(args) => args.report.as_ref(),
            Command::Split(args) => args.report.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join("absent.toml");
        let cli = Cli::parse_from(["levelsmith", "render", "x", "-c", absent.to_str().unwrap()]);
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.render.tile_size, LevelConfig::default().render.tile_size);
    }

    #[test]
    fn present_config_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("levelsmith.toml");
        std::fs::write(&path, "[render]\ntile_size = 8\n").unwrap();
        let cli = Cli::parse_from(["levelsmith", "split", "x", "--config", path.to_str().unwrap()]);
        assert_eq!(cli.resolve_config().unwrap().render.tile_size, 8);

        std::fs::write(&path, "[render\n").unwrap();
        assert!(cli.resolve_config().is_err());
    }

    #[test]
    fn render_overrides() {
        let cli = Cli::parse_from([
            "levelsmith",
            "render",
            "levels/*.txt",
            "--tiles",
            "assets",
            "--tile-size",
            "32",
        ]);
        let mut config = LevelConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.render.tiles_dir, PathBuf::from("assets"));
        assert_eq!(config.render.tile_size, 32);
        assert_eq!(config.render.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn split_width_and_global_flags() {
        let cli = Cli::parse_from([
            "levelsmith",
            "split",
            "levels",
            "-w",
            "50",
            "--log-level",
            "debug",
            "--report",
            "r.json",
        ]);
        let mut config = LevelConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.split.width, Some(50));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.report_path(), Some(&PathBuf::from("r.json")));
    }
}
