use thiserror::Error;

/// Errors originating from level parsing, splitting and configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// A required marker character appears in no row of the level.
    #[error("Marqueur '{marker}' introuvable dans le niveau")]
    MissingMarker {
        /// The marker that was searched for.
        marker: char,
    },

    /// The level has no rows or no columns.
    #[error("Niveau vide")]
    EmptyLevel,

    /// Split width must be at least one column.
    #[error("Largeur de découpe invalide : 0")]
    InvalidSplitWidth,

    /// Invalid width/height dimensions.
    #[error("Dimensions invalides : {width}×{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
