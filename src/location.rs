/// A (column, row) cell address in build order: column 0 is the leftmost
/// column and row 0 is the ground-adjacent cell.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct GridLocation {
    column: usize,
    row: usize,
}

impl GridLocation {
    pub fn new(column: usize, row: usize) -> Self {
        GridLocation { column, row }
    }

    #[inline]
    pub fn column(self) -> usize {
        self.column
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_indices_beyond_sixteen_bits() {
        let loc = GridLocation::new(70_000, 65_536);
        assert_eq!(loc.column(), 70_000);
        assert_eq!(loc.row(), 65_536);
        assert_ne!(loc, GridLocation::new(70_000, 0));
        assert!(GridLocation::new(0, 65_536) > GridLocation::new(0, 65_535));
    }
}
