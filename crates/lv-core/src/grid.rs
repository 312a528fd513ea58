use crate::error::LevelError;

/// Grille de caractères d'un niveau. Les lignes peuvent avoir des longueurs
/// différentes ; la largeur logique est celle de la plus longue.
///
/// # Example
/// ```
/// use lv_core::grid::LevelGrid;
/// let grid = LevelGrid::parse("\n--E\nXX\n").unwrap();
/// assert_eq!((grid.width(), grid.height()), (3, 2));
/// assert_eq!(grid.get(1, 2), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrid {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl LevelGrid {
    /// Parse a level: rows split on `\n`, a trailing `\r` dropped from each
    /// row, leading and trailing empty rows trimmed.
    ///
    /// # Errors
    /// Returns [`LevelError::EmptyLevel`] when nothing remains after trimming.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        Self::parse_with(text, str::is_empty)
    }

    /// Like [`Self::parse`], but edge rows made only of whitespace are
    /// trimmed too. Leading spaces of content rows are kept.
    ///
    /// # Errors
    /// Returns [`LevelError::EmptyLevel`] when nothing remains after trimming.
    ///
    /// # Example
    /// ```
    /// use lv_core::grid::LevelGrid;
    /// let grid = LevelGrid::parse_stripped("  \n -X\n\t\n").unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 1));
    /// ```
    pub fn parse_stripped(text: &str) -> Result<Self, LevelError> {
        Self::parse_with(text, |l| l.trim().is_empty())
    }

    fn parse_with(text: &str, blank: impl Fn(&str) -> bool) -> Result<Self, LevelError> {
        let lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let first = lines.iter().position(|l| !blank(l));
        let last = lines.iter().rposition(|l| !blank(l));
        let (Some(first), Some(last)) = (first, last) else {
            return Err(LevelError::EmptyLevel);
        };

        let rows: Vec<Vec<char>> = lines[first..=last]
            .iter()
            .map(|l| l.chars().collect())
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(LevelError::EmptyLevel);
        }
        Ok(Self { rows, width })
    }

    /// Width in cells (longest row).
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells (row count).
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at (row, col), `None` past the end of a short row.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows right-padded with `fill` up to [`Self::width`].
    #[must_use]
    pub fn padded_rows(&self, fill: char) -> Vec<Vec<char>> {
        self.rows
            .iter()
            .map(|r| {
                let mut row = r.clone();
                row.resize(self.width, fill);
                row
            })
            .collect()
    }
}
