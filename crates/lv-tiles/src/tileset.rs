use std::collections::BTreeMap;

use lv_core::frame::FrameBuffer;

/// Where the images of a [`TileSet`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSource {
    /// Decoded from a tile directory.
    Directory,
    /// Synthesized colored placeholders.
    Placeholder,
}

/// Jeu de tuiles : caractère → image, ou absent.
///
/// Construit une fois par lot, puis lu sans mutation par le renderer.
///
/// # Example
/// ```
/// use lv_core::frame::FrameBuffer;
/// use lv_tiles::{TileSet, TileSource};
/// let mut tiles = TileSet::new(TileSource::Directory);
/// tiles.insert('-', Some(FrameBuffer::new(16, 16)));
/// tiles.insert('X', None);
/// assert!(tiles.get('-').is_some());
/// assert!(tiles.get('X').is_none());
/// assert_eq!(tiles.missing(), vec!['X']);
/// ```
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: BTreeMap<char, Option<FrameBuffer>>,
    source: TileSource,
}

impl TileSet {
    /// Empty set.
    #[must_use]
    pub fn new(source: TileSource) -> Self {
        Self {
            tiles: BTreeMap::new(),
            source,
        }
    }

    /// Register a character, present or absent.
    pub fn insert(&mut self, ch: char, tile: Option<FrameBuffer>) {
        self.tiles.insert(ch, tile);
    }

    /// Image of `ch`, `None` if unmapped or absent.
    #[must_use]
    pub fn get(&self, ch: char) -> Option<&FrameBuffer> {
        self.tiles.get(&ch).and_then(Option::as_ref)
    }

    /// `true` if `ch` has an entry, even an absent one.
    #[must_use]
    pub fn is_mapped(&self, ch: char) -> bool {
        self.tiles.contains_key(&ch)
    }

    /// Origin of the images.
    #[must_use]
    pub fn source(&self) -> TileSource {
        self.source
    }

    /// Characters whose entry is absent.
    #[must_use]
    pub fn missing(&self) -> Vec<char> {
        self.tiles
            .iter()
            .filter(|(_, t)| t.is_none())
            .map(|(&ch, _)| ch)
            .collect()
    }

    /// Present tiles, in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &FrameBuffer)> {
        self.tiles
            .iter()
            .filter_map(|(&ch, t)| t.as_ref().map(|t| (ch, t)))
    }
}
