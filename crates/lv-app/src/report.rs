use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

/// Issue du traitement d'un fichier d'entrée.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Level rendered to one PNG.
    Rendered {
        /// Written image.
        output: PathBuf,
    },
    /// Level split into one or more text files.
    Split {
        /// Written slices, in order.
        outputs: Vec<PathBuf>,
    },
    /// Nothing written for this input.
    Skipped {
        /// Human-readable cause.
        reason: String,
    },
}

/// One input file and what became of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ItemReport {
    /// Input path as resolved from the pattern.
    pub input: PathBuf,
    /// Result for this input.
    pub outcome: ItemOutcome,
}

/// Rapport d'un lot : une entrée par fichier, dans l'ordre de traitement.
///
/// # Example
/// ```
/// use lv_app::report::{BatchReport, ItemOutcome};
/// let mut report = BatchReport::default();
/// report.push("a.txt", ItemOutcome::Skipped { reason: "vide".into() });
/// assert_eq!(report.skipped(), 1);
/// assert_eq!(report.succeeded(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Per-file results.
    pub items: Vec<ItemReport>,
}

impl BatchReport {
    /// Record the outcome of `input`.
    pub fn push(&mut self, input: impl Into<PathBuf>, outcome: ItemOutcome) {
        self.items.push(ItemReport {
            input: input.into(),
            outcome,
        });
    }

    /// Number of inputs that produced output.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.items.len() - self.skipped()
    }

    /// Number of skipped inputs.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.items
            .iter()
            .filter(|i| matches!(i.outcome, ItemOutcome::Skipped { .. }))
            .count()
    }

    /// `true` when no input matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Écrit le rapport en JSON indenté.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_report(report: &BatchReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Sérialisation du rapport")?;
    std::fs::write(path, json)
        .with_context(|| format!("Impossible d'écrire le rapport {}", path.display()))
}
