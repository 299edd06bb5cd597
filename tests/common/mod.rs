#![allow(dead_code)]

use structure_foreman::*;

pub const EPSILON: f64 = 1e-9;

/// `height` rows of `width` identical tags.
pub fn uniform_rows(tag: &str, width: usize, height: usize) -> RawTileRows {
    RawTileRows::filled(tag, width, height)
}

pub fn engine(config: LayoutConfig) -> LayoutEngine {
    LayoutEngine::new(config, &DimensionRegistry::standard()).unwrap()
}

/// Registry with a 0.25 block, a 1.0 x 0.1 plank and an enemy of the
/// given size.
pub fn quarter_registry(enemy_width: f64, enemy_height: f64) -> DimensionRegistry {
    DimensionRegistry::new()
        .with_record(DimensionRecord::new("block", "SquareSmall", 0.25, 0.25))
        .with_record(DimensionRecord::new("plank", "RectSmall", 1.0, 0.1))
        .with_record(DimensionRecord::new("pig", "BasicSmall", enemy_width, enemy_height))
}

pub fn quarter_config() -> LayoutConfig {
    LayoutConfig {
        principal_block_kind: "block".into(),
        platform_kind: "plank".into(),
        enemy_kind: "pig".into(),
        ..LayoutConfig::default()
    }
}

/// True if the two centered footprints share interior area.
pub fn footprints_overlap(
    a: &PlacedObject,
    b: &PlacedObject,
    registry: &DimensionRegistry,
) -> bool {
    let ra = registry.get(&a.kind_id).unwrap();
    let rb = registry.get(&b.kind_id).unwrap();
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    dx < (ra.width + rb.width) / 2.0 - EPSILON && dy < (ra.height + rb.height) / 2.0 - EPSILON
}
