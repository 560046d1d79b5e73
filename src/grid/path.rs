//! Word paths on the board and the dictionary that accepts them.

use rustc_hash::FxHashSet;

use super::action::WordPath;
use super::board::CellCoordinate;
use crate::error::CommandError;

/// Extend a highlighted path with a newly selected cell.
///
/// - The first cell is always accepted.
/// - Selecting a cell that is already highlighted clears the path.
/// - A cell that is not a neighbour of the last one is ignored.
/// - Otherwise the cell is appended.
///
/// ```
/// use word_engine::grid::{extend_path, CellCoordinate};
///
/// let path = extend_path(&[], CellCoordinate::new(0, 0));
/// let path = extend_path(&path, CellCoordinate::new(1, 1));
/// assert_eq!(path.len(), 2);
///
/// // too far away: unchanged
/// assert_eq!(extend_path(&path, CellCoordinate::new(3, 3)), path);
///
/// // reselect: cleared
/// assert!(extend_path(&path, CellCoordinate::new(0, 0)).is_empty());
/// ```
#[must_use]
pub fn extend_path(path: &[CellCoordinate], cell: CellCoordinate) -> WordPath {
    let Some(&last) = path.last() else {
        return WordPath::from_slice(&[cell]);
    };

    if path.contains(&cell) {
        return WordPath::new();
    }

    let mut extended = WordPath::from_slice(path);
    if last.is_adjacent(cell) {
        extended.push(cell);
    }
    extended
}

/// Check that `path` is non-empty, never revisits a cell and only steps
/// between neighbours.
pub fn validate_path(path: &[CellCoordinate]) -> Result<(), CommandError> {
    if path.is_empty() {
        return Err(CommandError::InvalidPath("no cells selected".to_string()));
    }

    for (i, cell) in path.iter().enumerate() {
        if path[..i].contains(cell) {
            return Err(CommandError::InvalidPath(format!("cell {cell} is used twice")));
        }
    }

    if let Some(pair) = path.windows(2).find(|pair| !pair[0].is_adjacent(pair[1])) {
        return Err(CommandError::InvalidPath(format!(
            "{} is not next to {}",
            pair[1], pair[0]
        )));
    }

    Ok(())
}

/// Set of accepted words.
///
/// Words are stored and looked up in lowercase.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// An empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated word list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    /// Add a word.
    pub fn insert(&mut self, word: &str) {
        self.words.insert(word.to_lowercase());
    }

    /// Whether `word` is accepted.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for word in iter {
            dictionary.insert(word.as_ref());
        }
        dictionary
    }
}
