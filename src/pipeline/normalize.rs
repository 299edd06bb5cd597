//! Orientation normalizer: turns top-left, row-major tile rows into
//! bottom-left, column-major build order and drops background tiles.

use crate::grid::*;
use crate::source::TileGridSource;
use log::*;

/// Transpose rows into columns and reverse each column so index 0 is the
/// bottom tile. Ragged rows are tolerated: a column only holds the rows that
/// reach it, so missing tiles collapse downwards.
pub fn transpose_and_invert<T: Clone>(rows: &[Vec<T>]) -> Vec<Vec<T>> {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    (0..width)
        .map(|column| {
            rows.iter()
                .rev()
                .filter_map(|row| row.get(column).cloned())
                .collect()
        })
        .collect()
}

/// Exact inverse of `transpose_and_invert` for rectangular input: back to
/// top-left, row-major rows.
pub fn revert_orientation<T: Clone>(columns: &[Vec<T>]) -> Vec<Vec<T>> {
    let height = columns.iter().map(|c| c.len()).max().unwrap_or(0);
    (0..height)
        .rev()
        .map(|row| columns.iter().filter_map(|c| c.get(row).cloned()).collect())
        .collect()
}

/// Drop background cells, keeping the vertical order of what remains.
pub fn remove_background(columns: Vec<Vec<Cell>>) -> Vec<Vec<Cell>> {
    columns
        .into_iter()
        .map(|column| column.into_iter().filter(|cell| !cell.is_background()).collect())
        .collect()
}

/// Run the whole normalizer over a tile source.
pub fn normalize(source: &dyn TileGridSource) -> TileGrid {
    let rows = source.tile_rows();
    let columns: Vec<Vec<Cell>> = transpose_and_invert(rows)
        .into_iter()
        .map(|column| column.iter().map(|tag| Cell::from_tag(tag)).collect())
        .collect();

    let raw_cells: usize = columns.iter().map(|c| c.len()).sum();
    let grid = TileGrid::new(remove_background(columns));

    debug!(
        "Normalizer: {} rows -> {} columns, removed {} background tiles",
        rows.len(),
        grid.column_count(),
        raw_cells - grid.iter().count()
    );

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawTileRows;

    #[test]
    fn bottom_left_becomes_origin() {
        let rows = vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]];
        let columns = transpose_and_invert(&rows);
        assert_eq!(columns, vec![vec!["e", "c", "a"], vec!["f", "d", "b"]]);
        assert_eq!(revert_orientation(&columns), rows);
    }

    #[test]
    fn background_removal_keeps_order() {
        let source = RawTileRows::from_strs(&[
            vec!["ice", "stone_1"],
            vec!["wood_1", "ice"],
            vec!["stone_2", "wood_2"],
        ]);
        let grid = normalize(&source);
        assert_eq!(
            grid.columns(),
            &[
                vec![Cell::Material("stone_2".into()), Cell::Material("wood_1".into())],
                vec![Cell::Material("wood_2".into()), Cell::Material("stone_1".into())],
            ]
        );
    }

    #[test]
    fn ragged_rows_shorten_columns() {
        let rows = vec![vec!["a"], vec!["b", "c"]];
        assert_eq!(transpose_and_invert(&rows), vec![vec!["b", "a"], vec!["c"]]);
    }
}
