use serde::{Deserialize, Serialize};

/// Trait for providing the raw tile grid to the engine.
///
/// Rows are ordered top to bottom and tags left to right, one tag per tile,
/// exactly as an image-matching step reads a mosaic. Rows may be ragged.
pub trait TileGridSource {
    fn tile_rows(&self) -> &[Vec<String>];
}

/// Owned rows of tags, the simplest `TileGridSource`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawTileRows {
    rows: Vec<Vec<String>>,
}

impl RawTileRows {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        RawTileRows { rows }
    }

    /// Convenience constructor from string slices.
    pub fn from_strs<S: AsRef<str>>(rows: &[Vec<S>]) -> Self {
        RawTileRows {
            rows: rows
                .iter()
                .map(|row| row.iter().map(|t| t.as_ref().to_string()).collect())
                .collect(),
        }
    }

    /// A `width` x `height` block of one tag.
    pub fn filled(tag: &str, width: usize, height: usize) -> Self {
        RawTileRows {
            rows: vec![vec![tag.to_string(); width]; height],
        }
    }
}

impl TileGridSource for RawTileRows {
    fn tile_rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl TileGridSource for Vec<Vec<String>> {
    fn tile_rows(&self) -> &[Vec<String>] {
        self
    }
}
