//! Level emitter: walks the finished grid and produces placed-object records.

use crate::config::{GapExtent, LayoutConfig};
use crate::coordinates::*;
use crate::error::*;
use crate::grid::*;
use crate::layout::*;
use crate::metrics::*;
use crate::structure::*;
use log::*;
use std::ops::Range;

/// Converts a finished `StructureState` into a `Layout`.
pub struct Emitter<'a> {
    config: &'a LayoutConfig,
    metrics: &'a EngineMetrics,
    geometry: &'a StructureGeometry,
}

impl<'a> Emitter<'a> {
    pub fn new(
        config: &'a LayoutConfig,
        metrics: &'a EngineMetrics,
        geometry: &'a StructureGeometry,
    ) -> Self {
        Emitter {
            config,
            metrics,
            geometry,
        }
    }

    pub fn emit(&self, state: StructureState) -> Layout {
        let resolver = CoordinateResolver::new(self.metrics, self.geometry, &state.platforms);
        let mut records = Vec::new();
        let mut skipped = Vec::new();

        self.emit_blocks(&state, &resolver, &mut records, &mut skipped);
        self.emit_platforms(&state, &resolver, &mut records);
        self.emit_enemies(&state, &resolver, &mut records);

        debug!(
            "Emitter: {} records ({} skipped cells)",
            records.len(),
            skipped.len()
        );

        Layout {
            records,
            platforms: state.platforms,
            gaps: state.gaps,
            grid: state.grid,
            skipped,
        }
    }

    fn emit_blocks(
        &self,
        state: &StructureState,
        resolver: &CoordinateResolver,
        records: &mut Vec<PlacedObject>,
        skipped: &mut Vec<LayoutError>,
    ) {
        let principal = &self.metrics.principal.record;

        for (loc, cell) in state.grid.iter() {
            let tag = match cell {
                Cell::Material(tag) => tag,
                Cell::Platform | Cell::Empty => continue,
            };

            match MaterialCategory::classify(tag) {
                Some(category) if category.is_background() => {}
                Some(category) => records.push(PlacedObject {
                    kind: ObjectKind::PrincipalBlock,
                    kind_id: principal.kind_id.clone(),
                    display_name: principal.display_name.clone(),
                    material: category.as_str().to_string(),
                    x: resolver.block_x(loc.column()),
                    y: resolver.block_center_y(loc.row()),
                    rotation: 0.0,
                }),
                None => {
                    let err = LayoutError::UnclassifiedMaterial {
                        column: loc.column(),
                        row: loc.row(),
                        tag: tag.clone(),
                    };
                    warn!("Emitter: {}, skipped", err);
                    skipped.push(err);
                }
            }
        }
    }

    fn emit_platforms(
        &self,
        state: &StructureState,
        resolver: &CoordinateResolver,
        records: &mut Vec<PlacedObject>,
    ) {
        let platform = &self.metrics.platform.record;

        for &row in &state.platforms {
            let present = state
                .grid
                .columns()
                .iter()
                .any(|c| c.get(row).map(Cell::is_platform).unwrap_or(false));
            if !present {
                continue;
            }

            let y = resolver.platform_center_y(row);
            for index in 0..self.geometry.blocks_per_platform {
                records.push(PlacedObject {
                    kind: ObjectKind::PlatformBlock,
                    kind_id: platform.kind_id.clone(),
                    display_name: platform.display_name.clone(),
                    material: self.config.platform_material.clone(),
                    x: resolver.platform_x(index),
                    y,
                    rotation: 0.0,
                });
            }
        }
    }

    fn emit_enemies(
        &self,
        state: &StructureState,
        resolver: &CoordinateResolver,
        records: &mut Vec<PlacedObject>,
    ) {
        let enemy = &self.metrics.enemy.record;

        for gap in &state.gaps {
            let row = match self.enemy_row(state) {
                Some(row) => row,
                None => {
                    warn!(
                        "Emitter: gap {:?} has no room for a {} ({} rows needed), no enemy placed",
                        gap.columns, enemy.kind_id, self.metrics.vertical_blocks_per_enemy
                    );
                    continue;
                }
            };

            let (x, y) = resolver.enemy_center(&gap.columns, row);
            records.push(PlacedObject {
                kind: ObjectKind::Enemy,
                kind_id: enemy.kind_id.clone(),
                display_name: enemy.display_name.clone(),
                material: String::new(),
                x,
                y,
                rotation: 0.0,
            });
        }
    }

    /// Row an enemy stands on: the bottom of the topmost carved run, or the
    /// row above the topmost platform when gaps are open to the sky.
    fn enemy_row(&self, state: &StructureState) -> Option<usize> {
        match self.config.gap_extent {
            GapExtent::UntilTop => state.top_platform().map(|top| top + 1),
            GapExtent::UntilTopPlatform => {
                let run = topmost_open_run(&state.platforms)?;
                if run.len() >= self.metrics.vertical_blocks_per_enemy {
                    Some(run.start)
                } else {
                    None
                }
            }
        }
    }
}

/// The highest run of non-platform rows strictly below the topmost
/// platform. `platforms` must be sorted ascending.
pub fn topmost_open_run(platforms: &[usize]) -> Option<Range<usize>> {
    let mut end = *platforms.last()?;
    let mut index = platforms.len() - 1;

    // Skip platforms stacked directly under the top one.
    while index > 0 && platforms[index - 1] + 1 == end {
        index -= 1;
        end = platforms[index];
    }
    if end == 0 {
        return None;
    }

    let start = if index > 0 { platforms[index - 1] + 1 } else { 0 };
    Some(start..end)
}
