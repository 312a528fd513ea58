use std::collections::BTreeMap;

/// Tous les caractères de tuile reconnus, dans l'ordre du format de niveau.
pub const TILE_CHARS: &[char] = &[
    '-', 'X', 'S', 'Q', '?', 'E', 'H', '<', '>', '[', ']', '{', '}', 'G', 'o', 'P',
];

/// Extension of tile image files.
pub const TILE_EXT: &str = "png";

/// Classification of a level character.
///
/// # Example
/// ```
/// use lv_core::tile::TileKind;
/// assert_eq!(TileKind::of('E'), TileKind::SpriteEntity);
/// assert_eq!(TileKind::of('~'), TileKind::Unknown);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Sky / empty space.
    Background,
    /// Ground and brick blocks.
    Solid,
    /// Question blocks.
    Interactive,
    /// Enemies, drawn at native size and bottom-anchored.
    SpriteEntity,
    /// Pipe tops and bodies.
    PipeSegment,
    /// Hills and other scenery.
    Decoration,
    /// Level start `{` and end `}` markers.
    Marker,
    /// Characters of the format with no assigned art yet.
    Reserved,
    /// Anything else. Rendered as background.
    Unknown,
}

impl TileKind {
    /// Classify a level character.
    #[must_use]
    pub fn of(ch: char) -> Self {
        match ch {
            '-' | ' ' => Self::Background,
            'X' | 'S' => Self::Solid,
            'Q' | '?' => Self::Interactive,
            'E' => Self::SpriteEntity,
            '<' | '>' | '[' | ']' => Self::PipeSegment,
            'H' => Self::Decoration,
            '{' | '}' => Self::Marker,
            'G' | 'o' | 'P' => Self::Reserved,
            _ => Self::Unknown,
        }
    }
}

/// File name of a character's tile: the character itself plus `.png`.
///
/// # Example
/// ```
/// use lv_core::tile::default_tile_file;
/// assert_eq!(default_tile_file('-'), "-.png");
/// ```
#[must_use]
pub fn default_tile_file(ch: char) -> String {
    format!("{ch}.{TILE_EXT}")
}

/// Default `char → file name` table for every character of [`TILE_CHARS`].
#[must_use]
pub fn default_tile_files() -> BTreeMap<char, String> {
    TILE_CHARS
        .iter()
        .map(|&ch| (ch, default_tile_file(ch)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_char_is_classified() {
        for &ch in TILE_CHARS {
            assert_ne!(TileKind::of(ch), TileKind::Unknown, "{ch} non classé");
        }
    }

    #[test]
    fn file_table_covers_format() {
        let files = default_tile_files();
        assert_eq!(files.len(), TILE_CHARS.len());
        assert_eq!(files[&'}'], "}.png");
        assert_eq!(files[&'o'], "o.png");
    }
}
