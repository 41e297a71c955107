use std::fmt;

use crate::error::{LifeError, LifeResult};

/// Character used for a live cell in the text format.
pub const ALIVE_CHAR: char = '#';
/// Character used for a dead cell in the text format.
pub const DEAD_CHAR: char = '.';
/// Largest accepted side length.
pub const MAX_DIMENSION: usize = 4096;

/// A square N x N matrix of alive/dead cells.
///
/// Cells live in one contiguous buffer addressed by `row * dimension + col`.
/// The dimension never changes after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dimension: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Dimensions of 0 or above [`MAX_DIMENSION`] are rejected.
    pub fn new(dimension: usize) -> LifeResult<Self> {
        let len = dimension
            .checked_mul(dimension)
            .filter(|_| (1..=MAX_DIMENSION).contains(&dimension))
            .ok_or(LifeError::InvalidDimension(dimension))?;
        Ok(Self {
            dimension,
            cells: vec![false; len],
        })
    }

    /// Build a grid directly from a row-major buffer.
    pub(crate) fn from_cells(dimension: usize, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len(), dimension * dimension);
        Self { dimension, cells }
    }

    /// Parse the text format produced by [`Grid`]'s `Display` impl.
    ///
    /// Each non-blank line is one row: `#` (or `O`) for alive, `.` for dead.
    /// The row count must equal the length of every row.
    pub fn from_text(text: &str) -> LifeResult<Self> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let dimension = rows.len();
        if dimension == 0 {
            return Err(LifeError::InvalidPattern {
                line: 1,
                reason: "no rows".to_string(),
            });
        }
        let mut grid = Self::new(dimension)?;

        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != dimension {
                return Err(LifeError::InvalidPattern {
                    line: row + 1,
                    reason: format!("expected {dimension} cells, found {width}"),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let alive = match ch {
                    ALIVE_CHAR | 'O' => true,
                    DEAD_CHAR => false,
                    other => {
                        return Err(LifeError::InvalidPattern {
                            line: row + 1,
                            reason: format!("unexpected character '{other}'"),
                        });
                    }
                };
                grid.set(row, col, alive);
            }
        }
        Ok(grid)
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }

    /// Map signed coordinates into the grid, or `None` when they fall outside it.
    pub fn locate(&self, row: isize, col: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.index(row, col).map(|_| (row, col))
    }

    /// Whether the cell is alive. Coordinates outside the grid read as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i])
    }

    /// Set a cell. Returns `false` (and changes nothing) when out of range.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = alive;
                true
            }
            None => false,
        }
    }

    /// Flip a cell. Returns `false` (and changes nothing) when out of range.
    pub fn toggle(&mut self, row: usize, col: usize) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of live cells in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / n, i % n))
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.dimension)
    }

    /// The raw row-major buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                let ch = if alive { ALIVE_CHAR } else { DEAD_CHAR };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_grid_is_all_dead() {
        let grid = Grid::new(7).unwrap();
        assert_eq!(grid.dimension(), 7);
        assert_eq!(grid.cells().len(), 49);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(Grid::new(0), Err(LifeError::InvalidDimension(0))));
    }

    #[test]
    fn oversized_dimension_rejected() {
        assert!(Grid::new(MAX_DIMENSION).is_ok());
        assert!(matches!(
            Grid::new(MAX_DIMENSION + 1),
            Err(LifeError::InvalidDimension(_))
        ));
        assert!(matches!(
            Grid::new(1usize << 32),
            Err(LifeError::InvalidDimension(_))
        ));
        assert!(matches!(
            Grid::new(usize::MAX),
            Err(LifeError::InvalidDimension(_))
        ));
    }

    #[test]
    fn set_and_read_back() {
        let mut grid = Grid::new(5).unwrap();
        assert!(grid.set(1, 3, true));
        assert!(grid.is_alive(1, 3));
        assert!(!grid.is_alive(3, 1));
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(1, 3)]);
    }

    #[test]
    fn out_of_range_access_is_harmless() {
        let mut grid = Grid::new(3).unwrap();
        assert!(!grid.set(3, 0, true));
        assert!(!grid.toggle(0, 3));
        assert!(!grid.is_alive(10, 10));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn locate_rejects_negative_and_overflow() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.locate(0, 0), Some((0, 0)));
        assert_eq!(grid.locate(3, 3), Some((3, 3)));
        assert_eq!(grid.locate(-1, 2), None);
        assert_eq!(grid.locate(2, 4), None);
    }

    #[test]
    fn clear_kills_everything() {
        let mut grid = Grid::from_text("##\n##").unwrap();
        assert_eq!(grid.population(), 4);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn text_format_renders_rows() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 1, true);
        grid.set(2, 2, true);
        grid.set(3, 0, true);
        insta::assert_snapshot!(grid.to_string(), @r"
        .#..
        ....
        ..#.
        #...
        ");
    }

    #[test]
    fn from_text_accepts_padding_and_o() {
        let grid = Grid::from_text("\n  .O.\n  ..#\n  ###\n").unwrap();
        assert_eq!(grid.dimension(), 3);
        assert_eq!(grid.population(), 5);
        assert!(grid.is_alive(0, 1));
    }

    #[test]
    fn from_text_rejects_ragged_rows() {
        let err = Grid::from_text("...\n..\n...").unwrap_err();
        assert!(matches!(err, LifeError::InvalidPattern { line: 2, .. }));
    }

    #[test]
    fn from_text_rejects_unknown_characters() {
        let err = Grid::from_text("x.\n..").unwrap_err();
        assert!(err.to_string().contains("unexpected character 'x'"));
    }

    #[test]
    fn from_text_rejects_empty_input() {
        assert!(Grid::from_text("  \n").is_err());
    }

    proptest! {
        #[test]
        fn toggle_twice_restores_state(
            cells in proptest::collection::vec(any::<bool>(), 36),
            row in 0usize..6,
            col in 0usize..6,
        ) {
            let original = Grid::from_cells(6, cells);
            let mut grid = original.clone();
            grid.toggle(row, col);
            prop_assert_ne!(&grid, &original);
            grid.toggle(row, col);
            prop_assert_eq!(grid, original);
        }
    }
}
