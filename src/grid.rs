use crate::constants::*;
use crate::location::*;
use serde::{Deserialize, Serialize};

/// Material family of a block tag, decided by tag prefix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    /// Background. Never placed.
    Ice,
    Wood,
    Stone,
}

impl MaterialCategory {
    /// Classify a tag such as `"stone_square"`. Returns `None` for tags
    /// outside the known families.
    pub fn classify(tag: &str) -> Option<MaterialCategory> {
        if tag.starts_with("ice") {
            Some(MaterialCategory::Ice)
        } else if tag.starts_with("wood") {
            Some(MaterialCategory::Wood)
        } else if tag.starts_with("stone") {
            Some(MaterialCategory::Stone)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaterialCategory::Ice => "ice",
            MaterialCategory::Wood => "wood",
            MaterialCategory::Stone => "stone",
        }
    }

    pub fn is_background(self) -> bool {
        self == MaterialCategory::Ice
    }
}

/// One cell of the tile grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Material(String),
    Platform,
    Empty,
}

impl Cell {
    /// Parse a raw tag. The reserved tags `"platform"` and `"none"` map to
    /// the sentinels; everything else is a material tag.
    pub fn from_tag(tag: &str) -> Cell {
        match tag {
            PLATFORM_TAG => Cell::Platform,
            EMPTY_TAG => Cell::Empty,
            other => Cell::Material(other.to_string()),
        }
    }

    pub fn is_platform(&self) -> bool {
        matches!(self, Cell::Platform)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn material(&self) -> Option<&str> {
        match self {
            Cell::Material(tag) => Some(tag),
            _ => None,
        }
    }

    /// True for material cells whose tag classifies as background.
    pub fn is_background(&self) -> bool {
        self.material()
            .and_then(MaterialCategory::classify)
            .map(MaterialCategory::is_background)
            .unwrap_or(false)
    }
}

/// Column-major grid in build order: `columns[c][r]` is column `c`, row `r`,
/// with row 0 resting on the ground. Columns may differ in length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGrid {
    columns: Vec<Vec<Cell>>,
}

impl TileGrid {
    pub fn new(columns: Vec<Vec<Cell>>) -> TileGrid {
        TileGrid { columns }
    }

    /// Build a grid from columns of raw tags already in build order.
    pub fn from_tag_columns<S: AsRef<str>>(columns: &[Vec<S>]) -> TileGrid {
        TileGrid {
            columns: columns
                .iter()
                .map(|column| column.iter().map(|t| Cell::from_tag(t.as_ref())).collect())
                .collect(),
        }
    }

    pub fn columns(&self) -> &[Vec<Cell>] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.columns.get(column).map(|c| c.len())
    }

    /// Minimum retained-cell count across all columns; 0 for an empty grid.
    pub fn shortest_column_height(&self) -> usize {
        self.columns.iter().map(|c| c.len()).min().unwrap_or(0)
    }

    pub fn tallest_column_height(&self) -> usize {
        self.columns.iter().map(|c| c.len()).max().unwrap_or(0)
    }

    #[inline]
    pub fn get(&self, column: usize, row: usize) -> Option<&Cell> {
        self.columns.get(column).and_then(|c| c.get(row))
    }

    /// Overwrite an existing cell. Returns false if the cell does not exist;
    /// columns are never grown by this call.
    #[inline]
    pub fn set(&mut self, column: usize, row: usize, cell: Cell) -> bool {
        match self.columns.get_mut(column).and_then(|c| c.get_mut(row)) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Pad a column with `Empty` cells until it holds at least `height` cells.
    pub fn extend_column(&mut self, column: usize, height: usize) {
        if let Some(c) = self.columns.get_mut(column) {
            if c.len() < height {
                c.resize(height, Cell::Empty);
            }
        }
    }

    /// True if every column holds `PLATFORM` at `row`.
    pub fn is_platform_row(&self, row: usize) -> bool {
        !self.columns.is_empty()
            && self
                .columns
                .iter()
                .all(|c| c.get(row).map(Cell::is_platform).unwrap_or(false))
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridLocation, &Cell)> {
        self.columns.iter().enumerate().flat_map(|(column, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(row, cell)| (GridLocation::new(column, row), cell))
        })
    }
}
