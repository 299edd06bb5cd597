//! Dimensions of every placeable object kind.
//!
//! The registry is built once and handed to the engine; it is never mutated
//! after the engine has been constructed.

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

/// Size and markup name of one placeable kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DimensionRecord {
    pub kind_id: String,
    /// Type name written to the level file, e.g. `"SquareSmall"`.
    pub display_name: String,
    pub width: f64,
    pub height: f64,
}

impl DimensionRecord {
    pub fn new(kind_id: &str, display_name: &str, width: f64, height: f64) -> Self {
        DimensionRecord {
            kind_id: kind_id.to_string(),
            display_name: display_name.to_string(),
            width,
            height,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionRegistry {
    records: FnvHashMap<String, DimensionRecord>,
}

impl DimensionRegistry {
    pub fn new() -> Self {
        DimensionRegistry {
            records: FnvHashMap::default(),
        }
    }

    /// The stock Science Birds objects used by the default configuration.
    pub fn standard() -> Self {
        DimensionRegistry::new()
            .with_record(DimensionRecord::new("small_square", "SquareSmall", 0.43, 0.43))
            .with_record(DimensionRecord::new("square_with_hole", "SquareHole", 0.85, 0.85))
            .with_record(DimensionRecord::new("tiny_square", "SquareTiny", 0.22, 0.22))
            .with_record(DimensionRecord::new("long_rectangle", "RectBig", 2.06, 0.22))
            .with_record(DimensionRecord::new("pig", "BasicSmall", 0.5, 0.5))
    }

    /// Add or replace a record.
    pub fn with_record(mut self, record: DimensionRecord) -> Self {
        self.records.insert(record.kind_id.clone(), record);
        self
    }

    pub fn get(&self, kind_id: &str) -> Option<&DimensionRecord> {
        self.records.get(kind_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_default_kinds() {
        let registry = DimensionRegistry::standard();
        assert_eq!(registry.len(), 5);
        let rect = registry.get("long_rectangle").unwrap();
        assert_eq!(rect.display_name, "RectBig");
        assert_eq!(rect.width, 2.06);
        assert!(registry.get("bird").is_none());
    }

    #[test]
    fn loads_from_json() {
        let registry = DimensionRegistry::from_json(
            r#"{"block": {"kind_id": "block", "display_name": "SquareSmall", "width": 0.25, "height": 0.25}}"#,
        )
        .unwrap();
        assert_eq!(registry.get("block").unwrap().height, 0.25);
    }
}
