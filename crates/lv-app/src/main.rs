use anyhow::Result;
use clap::Parser;
use lv_app::batch;
use lv_app::cli::{Cli, Command};
use lv_app::report::{BatchReport, write_report};

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Info))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = cli.resolve_config()?;
    cli.apply_overrides(&mut config);

    // 4. Lancer le lot
    let report = match &cli.command {
        Command::Render(args) => batch::run_render_batch(&args.pattern, &config)?,
        Command::Split(args) => {
            let Some(width) = config.split.width else {
                anyhow::bail!("Largeur de découpe requise : --width N ou [split] width dans la config");
            };
            batch::run_split_batch(&args.pattern, width, &config)?
        }
    };

    summarize(&report);
    if let Some(path) = cli.report_path() {
        write_report(&report, path)?;
        log::info!("Rapport écrit dans {}", path.display());
    }
    Ok(())
}

fn summarize(report: &BatchReport) {
    if report.is_empty() {
        return;
    }
    log::info!(
        "Terminé : {} traité(s), {} ignoré(s)",
        report.succeeded(),
        report.skipped()
    );
}
