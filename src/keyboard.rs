//! Physical keyboard geometry for typo plausibility scoring.
//!
//! A keyboard layout is modeled as two parallel planes of key cells, one for
//! unshifted characters and one for shifted characters, stacked along a third
//! "shift" axis. Every character is assigned the (column, row, plane)
//! coordinates of the cell it occupies, which lets the proximity scorer ask
//! how far apart two characters are on the physical board.

use ahash::{AHashMap, AHashSet};

use crate::error::{KeymendError, Result};

/// US QWERTY main block, unshifted plane.
const QWERTY_UNSHIFTED: &str = "1234567890-=
qwertyuiop[]
asdfghjkl;'
zxcvbnm,./";

/// US QWERTY main block, shifted plane.
const QWERTY_SHIFTED: &str = "!@#$%^&*()_+
QWERTYUIOP{}|
ASDFGHJKL:\"
ZXCVBNM<>?";

/// Coordinates of one key cell: column within the row, row from the top, and
/// shift plane (0 = unshifted, 1 = shifted).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    /// Column within the row (0-based, left to right).
    pub column: u32,
    /// Row from the top of the layout (0-based).
    pub row: u32,
    /// Shift plane: 0 for unshifted, 1 for shifted.
    pub plane: u32,
}

/// A two-plane keyboard layout mapping characters to key coordinates.
///
/// Built once from a pair of newline-delimited layout strings (one row per
/// physical keyboard row, literal spaces stripped) and read-only afterwards.
/// Rows of uneven width simply leave the trailing cells unoccupied.
#[derive(Debug, Clone)]
pub struct KeyboardLayout {
    /// Every cell each character occupies, across both planes
    positions: AHashMap<char, Vec<KeyPosition>>,
    columns: u32,
    rows: u32,
}

impl KeyboardLayout {
    /// Build a layout from unshifted and shifted plane strings.
    ///
    /// Fails if either plane is empty after stripping spaces, or if a
    /// character occupies more than one cell within a single plane.
    pub fn new(unshifted: &str, shifted: &str) -> Result<Self> {
        let planes = [
            Self::parse_plane(unshifted, "unshifted")?,
            Self::parse_plane(shifted, "shifted")?,
        ];

        let rows = planes.iter().map(|plane| plane.len()).max().unwrap_or(0);
        let columns = planes
            .iter()
            .flat_map(|plane| plane.iter().map(|row| row.len()))
            .max()
            .unwrap_or(0);

        let mut positions: AHashMap<char, Vec<KeyPosition>> = AHashMap::new();
        for (plane_index, plane) in planes.iter().enumerate() {
            let mut seen = AHashSet::new();
            for (row, line) in plane.iter().enumerate() {
                for (column, &ch) in line.iter().enumerate() {
                    if !seen.insert(ch) {
                        return Err(KeymendError::configuration(format!(
                            "character '{ch}' occupies more than one key in a layout plane"
                        )));
                    }
                    positions.entry(ch).or_default().push(KeyPosition {
                        column: column as u32,
                        row: row as u32,
                        plane: plane_index as u32,
                    });
                }
            }
        }

        Ok(KeyboardLayout {
            positions,
            columns: columns as u32,
            rows: rows as u32,
        })
    }

    /// The standard US QWERTY layout (main block, two planes).
    pub fn qwerty() -> Self {
        Self::new(QWERTY_UNSHIFTED, QWERTY_SHIFTED).expect("bundled QWERTY layout is well formed")
    }

    /// Every cell the character occupies, normally one per plane it appears
    /// in. Empty for characters absent from the layout.
    pub fn locate(&self, ch: char) -> &[KeyPosition] {
        self.positions
            .get(&ch)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Width of the coordinate grid (widest row across both planes).
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Height of the coordinate grid (row count across both planes).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of distinct characters with a position in the layout.
    pub fn key_count(&self) -> usize {
        self.positions.len()
    }

    /// Split a plane string into rows of characters, stripping literal
    /// spaces. Errors if nothing remains.
    fn parse_plane(plane: &str, name: &str) -> Result<Vec<Vec<char>>> {
        let rows: Vec<Vec<char>> = plane
            .lines()
            .map(|line| line.chars().filter(|&ch| ch != ' ').collect())
            .collect();

        if rows.iter().all(|row| row.is_empty()) {
            return Err(KeymendError::configuration(format!(
                "{name} keyboard layout plane is empty"
            )));
        }

        Ok(rows)
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::qwerty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qwerty_positions() {
        let layout = KeyboardLayout::qwerty();

        assert_eq!(
            layout.locate('q'),
            &[KeyPosition {
                column: 0,
                row: 1,
                plane: 0
            }]
        );
        assert_eq!(
            layout.locate('Q'),
            &[KeyPosition {
                column: 0,
                row: 1,
                plane: 1
            }]
        );
        assert_eq!(
            layout.locate('1'),
            &[KeyPosition {
                column: 0,
                row: 0,
                plane: 0
            }]
        );
        assert_eq!(
            layout.locate('/'),
            &[KeyPosition {
                column: 9,
                row: 3,
                plane: 0
            }]
        );
    }

    #[test]
    fn test_qwerty_dimensions() {
        let layout = KeyboardLayout::qwerty();

        // Widest row is the 13-key shifted letter row ending in '|'
        assert_eq!(layout.columns(), 13);
        assert_eq!(layout.rows(), 4);
        // 45 unshifted keys plus 46 shifted keys, no character shared
        assert_eq!(layout.key_count(), 91);
    }

    #[test]
    fn test_unknown_character_has_no_position() {
        let layout = KeyboardLayout::qwerty();
        assert!(layout.locate('é').is_empty());
        assert!(layout.locate(' ').is_empty());
    }

    #[test]
    fn test_spaces_are_stripped_before_parsing() {
        let layout = KeyboardLayout::new("ab\n  cd", "AB\n  CD").unwrap();
        assert_eq!(
            layout.locate('c'),
            &[KeyPosition {
                column: 0,
                row: 1,
                plane: 0
            }]
        );
    }

    #[test]
    fn test_uneven_rows_are_allowed() {
        let layout = KeyboardLayout::new("abcde\nfg", "ABCDE\nFG").unwrap();
        assert_eq!(layout.columns(), 5);
        assert_eq!(layout.rows(), 2);
        assert_eq!(
            layout.locate('g'),
            &[KeyPosition {
                column: 1,
                row: 1,
                plane: 0
            }]
        );
    }

    #[test]
    fn test_empty_plane_is_configuration_error() {
        assert!(KeyboardLayout::new("", "AB").is_err());
        assert!(KeyboardLayout::new("ab", "").is_err());
        assert!(KeyboardLayout::new("  \n  ", "AB").is_err());
    }

    #[test]
    fn test_duplicate_character_in_plane_is_configuration_error() {
        assert!(KeyboardLayout::new("aba", "AB").is_err());
        // The same character may appear once in each plane
        assert!(KeyboardLayout::new("ab", "ba").is_ok());
    }
}
