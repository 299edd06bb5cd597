pub mod config;
pub mod constants;
pub mod coordinates;
pub mod error;
pub mod grid;
pub mod layout;
pub mod location;
pub mod metrics;
pub mod pipeline;
pub mod planner;
pub mod registry;
pub mod source;
pub mod stages;
pub mod structure;
pub mod writer;

pub use config::{GapExtent, GapPolicy, LayoutConfig, PlatformPolicy};
pub use error::{LayoutError, Stage};
pub use grid::{Cell, MaterialCategory, TileGrid};
pub use planner::*;
pub use registry::{DimensionRecord, DimensionRegistry};
pub use source::{RawTileRows, TileGridSource};
pub use writer::{LevelSink, XmlLevelWriter};
