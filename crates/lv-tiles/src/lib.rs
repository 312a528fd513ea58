/// Tile sources for levelsmith: tile directories, placeholder art, resizing.

pub mod loader;
pub mod placeholder;
pub mod resize;
pub mod tileset;

pub use loader::{load_tiles, prepare_tiles};
pub use placeholder::synthesize_placeholders;
pub use tileset::{TileSet, TileSource};
