//! The evolving structure state threaded through the pipeline.
//!
//! Each stage takes the state by value, mutates the grid it owns, and hands
//! it on. The platform set is written once by the platform planner and only
//! read afterwards.

use crate::grid::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A carved gap: the contiguous principal-block columns cleared for one
/// enemy, and the platform segment it sits under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    pub segment: usize,
    pub columns: Vec<usize>,
}

impl Gap {
    pub fn is_contiguous(&self) -> bool {
        self.columns.iter().tuple_windows().all(|(a, b)| a + 1 == *b)
    }

    pub fn overlaps(&self, columns: &[usize]) -> bool {
        self.columns.iter().any(|c| columns.contains(c))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureState {
    pub grid: TileGrid,
    /// Platform rows, ascending and duplicate-free.
    pub platforms: Vec<usize>,
    pub gaps: Vec<Gap>,
}

impl StructureState {
    pub fn new(grid: TileGrid) -> Self {
        StructureState {
            grid,
            platforms: Vec::new(),
            gaps: Vec::new(),
        }
    }

    pub fn top_platform(&self) -> Option<usize> {
        self.platforms.last().copied()
    }

    /// Write the platform sentinel into every column at every row in
    /// `platforms`, then record the set. Rows must already exist in every
    /// column.
    pub fn insert_platforms(&mut self, platforms: Vec<usize>) {
        for &row in &platforms {
            for column in 0..self.grid.column_count() {
                self.grid.set(column, row, Cell::Platform);
            }
        }
        self.platforms = platforms;
    }

    /// Columns already claimed by a gap.
    pub fn gap_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.gaps.iter().flat_map(|g| g.columns.iter().copied())
    }
}

/// True if `rows` is strictly ascending.
pub fn is_strictly_ascending(rows: &[usize]) -> bool {
    rows.iter().tuple_windows().all(|(a, b)| a < b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_platforms_fills_every_column() {
        let grid = TileGrid::from_tag_columns(&vec![vec!["stone"; 3]; 4]);
        let mut state = StructureState::new(grid);
        state.insert_platforms(vec![0, 2]);
        assert!(state.grid.is_platform_row(0));
        assert!(!state.grid.is_platform_row(1));
        assert!(state.grid.is_platform_row(2));
        assert_eq!(state.top_platform(), Some(2));
    }

    #[test]
    fn gap_contiguity() {
        let gap = Gap {
            segment: 1,
            columns: vec![3, 4, 5],
        };
        assert!(gap.is_contiguous());
        assert!(gap.overlaps(&[5, 6]));
        assert!(!Gap {
            segment: 1,
            columns: vec![3, 5]
        }
        .is_contiguous());
    }

    #[test]
    fn ascending_check() {
        assert!(is_strictly_ascending(&[0, 3, 6]));
        assert!(!is_strictly_ascending(&[0, 3, 3]));
        assert!(!is_strictly_ascending(&[4, 1]));
        assert!(is_strictly_ascending(&[]));
    }
}
