/// Configuration, types, and shared structures for levelsmith.
///
/// This crate contains the level grid, tile classification, pixel buffer
/// and configuration logic shared across the levelsmith workspace.

pub mod config;
pub mod error;
pub mod frame;
pub mod grid;
pub mod tile;

pub use config::LevelConfig;
pub use error::LevelError;
pub use frame::FrameBuffer;
pub use grid::LevelGrid;
pub use tile::TileKind;
