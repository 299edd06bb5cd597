//! Conversion from grid indices to world-space positions.
//!
//! Rows have two heights: platform rows are as tall as the platform kind,
//! every other row is as tall as the principal block. Platform segments are
//! wider than principal blocks, so the platform tiling is centered on the
//! block tiling rather than starting flush with it.

use crate::constants::*;
use crate::metrics::*;

/// Horizontal layout of one structure, fixed once the column count is known.
#[derive(Clone, Debug, PartialEq)]
pub struct StructureGeometry {
    pub column_count: usize,
    pub structure_width: f64,
    /// Platform segments needed to span the structure.
    pub blocks_per_platform: usize,
    /// x of the left edge of platform segment 0.
    pub platform_start: f64,
    /// Added to every emitted x.
    pub x_offset: f64,
    structure_width_scaled: i64,
    platform_width_scaled: i64,
    principal_width_scaled: i64,
}

impl StructureGeometry {
    pub fn new(metrics: &EngineMetrics, column_count: usize, center_horizontally: bool) -> Self {
        let principal_width_scaled = metrics.principal.width_scaled;
        let platform_width_scaled = metrics.platform.width_scaled;
        let structure_width_scaled = principal_width_scaled * column_count as i64;
        let blocks_per_platform =
            cover_count(structure_width_scaled, platform_width_scaled) as usize;

        let structure_width = metrics.principal.width() * column_count as f64;
        let platform_start =
            -(blocks_per_platform as f64 * metrics.platform.width() - structure_width) / 2.0;
        let x_offset = if center_horizontally {
            -structure_width / 2.0
        } else {
            0.0
        };

        StructureGeometry {
            column_count,
            structure_width,
            blocks_per_platform,
            platform_start,
            x_offset,
            structure_width_scaled,
            platform_width_scaled,
            principal_width_scaled,
        }
    }

    /// Columns under the left and right edges of platform segment `segment`.
    ///
    /// Works in doubled fixed-point units so the half-width centering offset
    /// stays integral. Indices may fall outside the grid for edge segments.
    pub fn segment_column_span(&self, segment: usize) -> (i64, i64) {
        let pw = self.platform_width_scaled;
        let doubled_start = -(self.blocks_per_platform as i64 * pw - self.structure_width_scaled)
            + 2 * segment as i64 * pw;
        let doubled_end = doubled_start + 2 * pw;
        let doubled_block = 2 * self.principal_width_scaled;

        (
            doubled_start.div_euclid(doubled_block),
            doubled_end.div_euclid(doubled_block),
        )
    }

    /// Segments whose footprint lies over the structure on both sides, the
    /// only ones that can host a gap.
    pub fn interior_segments(&self) -> std::ops::Range<usize> {
        1..self.blocks_per_platform.saturating_sub(1).max(1)
    }
}

/// Resolves world positions for one structure and its platform set.
///
/// All functions are pure; identical inputs always give bit-identical output.
#[derive(Copy, Clone)]
pub struct CoordinateResolver<'a> {
    metrics: &'a EngineMetrics,
    geometry: &'a StructureGeometry,
    platforms: &'a [usize],
}

impl<'a> CoordinateResolver<'a> {
    /// `platforms` must be sorted ascending.
    pub fn new(
        metrics: &'a EngineMetrics,
        geometry: &'a StructureGeometry,
        platforms: &'a [usize],
    ) -> Self {
        CoordinateResolver {
            metrics,
            geometry,
            platforms,
        }
    }

    /// Count of platform rows strictly below `row`.
    #[inline]
    pub fn platforms_below(&self, row: usize) -> usize {
        self.platforms.partition_point(|&p| p < row)
    }

    /// y of the bottom edge of `row`.
    pub fn row_y(&self, row: usize) -> f64 {
        let below = self.platforms_below(row);
        self.metrics.ground_height
            + below as f64 * self.metrics.platform.height()
            + (row - below) as f64 * self.metrics.principal.height()
    }

    /// x of the center of principal block column `column`.
    pub fn block_x(&self, column: usize) -> f64 {
        let width = self.metrics.principal.width();
        column as f64 * width + width / 2.0 + self.geometry.x_offset
    }

    /// x of the center of platform segment `index`.
    pub fn platform_x(&self, index: usize) -> f64 {
        let width = self.metrics.platform.width();
        self.geometry.platform_start + index as f64 * width + width / 2.0 + self.geometry.x_offset
    }

    pub fn block_center_y(&self, row: usize) -> f64 {
        self.row_y(row) + self.metrics.principal.height() / 2.0
    }

    pub fn platform_center_y(&self, row: usize) -> f64 {
        self.row_y(row) + self.metrics.platform.height() / 2.0
    }

    /// Center of an enemy standing on the bottom edge of `row`, horizontally
    /// centered on `columns`.
    pub fn enemy_center(&self, columns: &[usize], row: usize) -> (f64, f64) {
        let x = if columns.is_empty() {
            self.geometry.x_offset
        } else {
            columns.iter().map(|&c| self.block_x(c)).sum::<f64>() / columns.len() as f64
        };
        (x, self.row_y(row) + self.metrics.enemy.height() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::registry::DimensionRegistry;

    fn metrics() -> EngineMetrics {
        EngineMetrics::resolve(&LayoutConfig::default(), &DimensionRegistry::standard()).unwrap()
    }

    #[test]
    fn rows_above_platforms_use_platform_height() {
        let metrics = metrics();
        let geometry = StructureGeometry::new(&metrics, 5, false);
        let platforms = [1, 3];
        let resolver = CoordinateResolver::new(&metrics, &geometry, &platforms);

        assert_eq!(resolver.platforms_below(0), 0);
        assert_eq!(resolver.platforms_below(1), 0);
        assert_eq!(resolver.platforms_below(2), 1);
        assert_eq!(resolver.platforms_below(4), 2);
        assert_eq!(resolver.row_y(0), -3.5);
        assert_eq!(resolver.row_y(1), -3.5 + 0.43);
        assert_eq!(resolver.row_y(2), -3.5 + 0.22 + 0.43);
    }

    #[test]
    fn platform_tiling_is_centered_on_structure() {
        let metrics = metrics();
        let geometry = StructureGeometry::new(&metrics, 12, false);
        // 12 * 0.43 = 5.16 needs three 2.06 segments.
        assert_eq!(geometry.blocks_per_platform, 3);
        let resolver = CoordinateResolver::new(&metrics, &geometry, &[]);
        let left = resolver.platform_x(0) - 1.03;
        let right = resolver.platform_x(2) + 1.03;
        assert!((left + right - geometry.structure_width).abs() < 1e-9);
    }

    #[test]
    fn interior_segments_skip_edges() {
        let metrics = metrics();
        assert_eq!(StructureGeometry::new(&metrics, 5, false).interior_segments(), 1..1);
        assert_eq!(StructureGeometry::new(&metrics, 12, false).interior_segments(), 1..2);
    }

    #[test]
    fn segment_span_matches_block_columns() {
        let metrics = metrics();
        let geometry = StructureGeometry::new(&metrics, 12, false);
        // Segment 1 covers x in [1.55, 3.61].
        assert_eq!(geometry.segment_column_span(1), (3, 8));
    }

    #[test]
    fn centering_shifts_every_x() {
        let metrics = metrics();
        let geometry = StructureGeometry::new(&metrics, 4, true);
        let resolver = CoordinateResolver::new(&metrics, &geometry, &[]);
        assert!((resolver.block_x(0) + resolver.block_x(3)).abs() < 1e-9);
    }
}
