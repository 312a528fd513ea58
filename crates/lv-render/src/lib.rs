/// Level compositing: character grid + tile set → RGBA image.

pub mod compositor;
pub mod renderer;

pub use renderer::{RenderOptions, render_grid, render_level};
