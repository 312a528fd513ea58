/// Level splitting: cut the playable area between the start and end markers
/// into fixed-width slices that keep both marker bands.

pub mod splitter;

pub use splitter::{SplitMarkers, split_file_name, split_level, split_level_with};
