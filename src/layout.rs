use crate::error::LayoutError;
use crate::grid::TileGrid;
use crate::structure::Gap;
use crate::writer::*;
use serde::{Deserialize, Serialize};

/// Role of a placed object.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ObjectKind {
    PrincipalBlock,
    PlatformBlock,
    Enemy,
}

/// One object in the finished level, positioned by its center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    pub kind_id: String,
    /// Type name written to the level file.
    pub display_name: String,
    pub material: String,
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

/// The complete structure layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layout {
    /// Placed objects: principal blocks column by column, then platform
    /// segments row by row, then enemies gap by gap.
    pub records: Vec<PlacedObject>,
    /// Platform rows, ascending.
    pub platforms: Vec<usize>,
    /// Gaps carved for enemies.
    pub gaps: Vec<Gap>,
    /// The final grid the records were emitted from.
    pub grid: TileGrid,
    /// Cells skipped during emission because their tag could not be
    /// classified.
    #[serde(skip)]
    pub skipped: Vec<LayoutError>,
}

impl Layout {
    /// Feed every record to a level sink, in order.
    pub fn write_to<S: LevelSink>(&self, sink: &mut S) {
        for record in &self.records {
            sink.place(record);
        }
    }

    pub fn records_of(&self, kind: ObjectKind) -> impl Iterator<Item = &PlacedObject> {
        self.records.iter().filter(move |r| r.kind == kind)
    }

    pub fn count(&self, kind: ObjectKind) -> usize {
        self.records_of(kind).count()
    }

    /// Render the layout as a complete level document.
    pub fn to_level_xml(&self) -> String {
        let mut writer = XmlLevelWriter::new();
        self.write_to(&mut writer);
        writer.finish()
    }
}
