//! Invariants of the layout engine checked over several structure shapes.

mod common;

use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use structure_foreman::coordinates::{CoordinateResolver, StructureGeometry};
use structure_foreman::metrics::EngineMetrics;
use structure_foreman::pipeline::normalize::{revert_orientation, transpose_and_invert};
use structure_foreman::*;

const SEED: u64 = 0x5C13_0CE0_B12D_5EED;

fn random_rows(rng: &mut StdRng, width: usize, height: usize) -> Vec<Vec<u32>> {
    (0..height)
        .map(|_| (0..width).map(|_| rng.gen_range(0..100)).collect())
        .collect()
}

#[test]
fn four_inversions_restore_the_grid() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for (width, height) in [(3, 3), (5, 5), (2, 7), (9, 4), (1, 6)] {
        let rows = random_rows(&mut rng, width, height);

        let once = transpose_and_invert(&rows);
        assert_eq!(once.len(), width);
        assert!(once.iter().all(|c| c.len() == height));

        let twice = transpose_and_invert(&once);
        let four = transpose_and_invert(&transpose_and_invert(&twice));
        assert_eq!(four, rows, "{}x{}", width, height);

        // Two inversions rotate by half a turn.
        let rotated: Vec<Vec<u32>> = rows
            .iter()
            .rev()
            .map(|r| r.iter().rev().copied().collect())
            .collect();
        assert_eq!(twice, rotated, "{}x{}", width, height);
    }
}

#[test]
fn revert_orientation_inverts_normalization() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    for (width, height) in [(4, 4), (6, 2), (2, 6)] {
        let rows = random_rows(&mut rng, width, height);
        assert_eq!(revert_orientation(&transpose_and_invert(&rows)), rows);
    }
}

fn sample_layouts() -> Vec<Layout> {
    let shapes = [(12, 9), (20, 7), (13, 10), (25, 12)];
    let mut layouts = Vec::new();
    for (width, height) in shapes {
        let engine = engine(LayoutConfig {
            platform_policy: PlatformPolicy::Spacing,
            ..LayoutConfig::default()
        });
        layouts.push(engine.run(&uniform_rows("stone", width, height)).unwrap());

        let engine = engine_with_seed(width as u64 * 31 + height as u64);
        layouts.push(engine.run(&uniform_rows("wood", width, height)).unwrap());
    }
    layouts
}

fn engine_with_seed(seed: u64) -> LayoutEngine {
    LayoutBuilder::new()
        .platform_policy(PlatformPolicy::Ratio)
        .density_ratio(0.3)
        .seed(seed)
        .build()
        .unwrap()
}

#[test]
fn no_two_solid_objects_overlap() {
    let registry = DimensionRegistry::standard();
    for layout in sample_layouts() {
        let records = &layout.records;
        for (i, a) in records.iter().enumerate() {
            for b in &records[i + 1..] {
                assert!(
                    !footprints_overlap(a, b, &registry),
                    "{:?} overlaps {:?}",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn platform_rows_hold_only_platforms() {
    for layout in sample_layouts() {
        for &row in &layout.platforms {
            for column in layout.grid.columns() {
                assert_eq!(column.get(row), Some(&Cell::Platform));
            }
            assert!(layout.grid.is_platform_row(row));
        }
    }
}

#[test]
fn row_height_is_strictly_increasing() {
    let registry = DimensionRegistry::standard();
    let metrics = EngineMetrics::resolve(&LayoutConfig::default(), &registry).unwrap();
    let geometry = StructureGeometry::new(&metrics, 10, false);
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);

    for _ in 0..50 {
        let platforms: Vec<usize> = (0..40).filter(|_| rng.gen_bool(0.3)).collect();
        let resolver = CoordinateResolver::new(&metrics, &geometry, &platforms);
        for row in 0..40 {
            assert!(resolver.row_y(row + 1) > resolver.row_y(row));
        }
    }
}

#[test]
fn gaps_are_exactly_as_wide_as_the_enemy() {
    for layout in sample_layouts() {
        for gap in &layout.gaps {
            // A 0.5 pig needs two 0.43 columns.
            assert_eq!(gap.columns.len(), 2, "{:?}", gap);
            assert!(gap.is_contiguous());
        }
    }

    let engine = LayoutEngine::new(
        LayoutConfig {
            platform_policy: PlatformPolicy::Explicit(vec![2]),
            ..quarter_config()
        },
        &quarter_registry(0.6, 0.5),
    )
    .unwrap();
    let layout = engine.run(&uniform_rows("stone", 30, 5)).unwrap();
    assert!(!layout.gaps.is_empty());
    for gap in &layout.gaps {
        assert_eq!(gap.columns.len(), 3);
        assert!(gap.is_contiguous());
    }
}

#[test]
fn carving_never_shortens_columns() {
    for layout in sample_layouts() {
        let heights: Vec<usize> = layout.grid.columns().iter().map(|c| c.len()).collect();
        assert!(heights.iter().all(|&h| h == heights[0]));
    }
}
