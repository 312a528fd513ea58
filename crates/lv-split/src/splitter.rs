use lv_core::error::LevelError;
use lv_core::grid::LevelGrid;

/// Characters bounding the playable area of a level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitMarkers {
    /// Last column of the prefix band.
    pub start: char,
    /// First column of the suffix band.
    pub end: char,
}

impl Default for SplitMarkers {
    fn default() -> Self {
        Self {
            start: '{',
            end: '}',
        }
    }
}

/// Nom du fichier de la n-ième découpe (n commence à 1).
///
/// # Example
/// ```
/// use lv_split::split_file_name;
/// assert_eq!(split_file_name("mario-1-1", 2), "mario-1-1_split_2.txt");
/// ```
#[must_use]
pub fn split_file_name(stem: &str, n: usize) -> String {
    format!("{stem}_split_{n}.txt")
}

/// Split with the default `{` / `}` markers. See [`split_level_with`].
///
/// # Errors
/// See [`split_level_with`].
///
/// # Example
/// ```
/// use lv_split::split_level;
/// assert_eq!(split_level("{AB}", 1).unwrap(), vec!["{A}", "{B}"]);
/// assert_eq!(split_level("{AB}", 2).unwrap(), vec!["{AB}"]);
/// assert!(split_level("{AB}", 3).unwrap().is_empty());
/// ```
pub fn split_level(level: &str, width: usize) -> Result<Vec<String>, LevelError> {
    split_level_with(level, width, SplitMarkers::default())
}

/// Découpe la zone jouable d'un niveau en tranches de `width` colonnes.
///
/// Rows are right-padded with spaces to the longest row. Each marker's
/// column is taken from the first row (top to bottom) that contains it.
/// Every slice is `prefix + middle[window] + suffix` row by row, where the
/// prefix ends with the start marker column and the suffix begins with the
/// end marker column. A trailing window narrower than `width` is dropped, so
/// all slices have the same width. No slice at all is a valid outcome.
///
/// # Errors
/// - [`LevelError::InvalidSplitWidth`] if `width` is zero.
/// - [`LevelError::EmptyLevel`] if the level has no content.
/// - [`LevelError::MissingMarker`] if either marker appears in no row.
pub fn split_level_with(
    level: &str,
    width: usize,
    markers: SplitMarkers,
) -> Result<Vec<String>, LevelError> {
    if width == 0 {
        return Err(LevelError::InvalidSplitWidth);
    }

    let grid = LevelGrid::parse(level)?;
    let rows = grid.padded_rows(' ');

    let start_col = marker_column(&rows, markers.start)?;
    let end_col = marker_column(&rows, markers.end)?;

    let middle_width = end_col.saturating_sub(start_col + 1);
    let middle_start = start_col + 1;
    log::debug!(
        "Zone jouable : colonnes {middle_start}..{end_col} ({middle_width} colonnes), tranches de {width}"
    );

    let slices: Vec<String> = (0..middle_width / width)
        .map(|i| {
            let from = middle_start + i * width;
            let to = from + width;
            rows.iter()
                .map(|row| {
                    row[..=start_col]
                        .iter()
                        .chain(&row[from..to])
                        .chain(&row[end_col..])
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    let dropped = middle_width % width;
    if dropped > 0 {
        log::debug!("{dropped} colonne(s) finales écartées");
    }
    Ok(slices)
}

fn marker_column(rows: &[Vec<char>], marker: char) -> Result<usize, LevelError> {
    rows.iter()
        .find_map(|row| row.iter().position(|&c| c == marker))
        .ok_or(LevelError::MissingMarker { marker })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARIO_1_1: &str = include_str!("../../../levels/mario-1-1.txt");

    fn middle_band(slice: &str, start_col: usize, width: usize) -> Vec<String> {
        slice
            .lines()
            .map(|row| row.chars().skip(start_col + 1).take(width).collect())
            .collect()
    }

    #[test]
    fn single_row_examples() {
        assert_eq!(split_level("{AB}", 1).unwrap(), vec!["{A}", "{B}"]);
        assert_eq!(split_level("{AB}", 2).unwrap(), vec!["{AB}"]);
        assert_eq!(split_level("{AB}", 3).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn missing_markers() {
        assert_eq!(
            split_level("-AB}", 1),
            Err(LevelError::MissingMarker { marker: '{' })
        );
        assert_eq!(
            split_level("{AB-", 1),
            Err(LevelError::MissingMarker { marker: '}' })
        );
    }

    #[test]
    fn zero_width_is_rejected() {
        assert_eq!(split_level("{AB}", 0), Err(LevelError::InvalidSplitWidth));
    }

    #[test]
    fn remainder_is_dropped() {
        let slices = split_level("{ABCDE}", 2).unwrap();
        assert_eq!(slices, vec!["{AB}", "{CD}"]);
    }

    #[test]
    fn markers_on_different_rows_and_padding() {
        // start marker found on row 1, end marker on row 0
        let slices = split_level("\n---}\n{abcd\nXXXXXXX\n", 1).unwrap();
        assert_eq!(slices.len(), 2);
        let first: Vec<&str> = slices[0].lines().collect();
        let second: Vec<&str> = slices[1].lines().collect();
        assert_eq!(first, vec!["--}   ", "{acd  ", "XXXXXX"]);
        assert_eq!(second, vec!["--}   ", "{bcd  ", "XXXXXX"]);
    }

    #[test]
    fn end_before_start_yields_nothing() {
        assert!(split_level("}AB{", 1).unwrap().is_empty());
    }

    #[test]
    fn custom_markers() {
        let markers = SplitMarkers { start: '|', end: '|' };
        // both markers resolve to the same column: empty playable area
        assert!(split_level_with("|AB|", 1, markers).unwrap().is_empty());
        let markers = SplitMarkers { start: '[', end: ']' };
        assert_eq!(split_level_with("[xy]", 1, markers).unwrap(), vec!["[x]", "[y]"]);
    }

    #[test]
    fn full_level_slices_cover_middle_band() {
        let width = 50;
        let slices = split_level(MARIO_1_1, width).unwrap();
        // markers at columns 3 and 198 of a 202-column level
        assert_eq!(slices.len(), 194 / width);

        let grid = LevelGrid::parse(MARIO_1_1).unwrap();
        let rows = grid.padded_rows(' ');
        for slice in &slices {
            let lines: Vec<&str> = slice.lines().collect();
            assert_eq!(lines.len(), rows.len());
            assert!(lines.iter().all(|l| l.chars().count() == 4 + width + 4));
        }

        // concatenated middles reproduce the first k*width middle columns
        for (r, row) in rows.iter().enumerate() {
            let joined: String = slices
                .iter()
                .map(|s| middle_band(s, 3, width)[r].clone())
                .collect();
            let expected: String = row[4..4 + slices.len() * width].iter().collect();
            assert_eq!(joined, expected, "ligne {r}");
        }
    }
}
