//! GapCarver: clears principal-block columns beneath platform segments so an
//! enemy fits on a platform without touching a block.
//!
//! A gap is centered under one interior platform segment. The segment's
//! center column (two columns when the span is odd) is widened one column
//! left, then one column right, until the enemy's width in principal blocks
//! is covered. Any column that lands outside the grid is an error rather
//! than being clipped.

use super::*;
use crate::config::{GapExtent, GapPolicy};
use crate::constants::MAX_GAP_ATTEMPTS;
use crate::grid::Cell;
use crate::structure::Gap;
use log::*;
use rand::Rng;
use std::collections::VecDeque;

pub struct GapCarver;

/// Center column(s) between `start` and `end`: one column for an even sum,
/// both neighbours for an odd sum.
pub fn center_columns(start: i64, end: i64) -> Vec<i64> {
    let sum = start + end;
    let center = sum.div_euclid(2);
    if sum.rem_euclid(2) == 1 {
        vec![center, center + 1]
    } else {
        vec![center]
    }
}

/// Widen `centers` symmetrically, left first, until it holds `needed`
/// columns. Never narrows: two tied centers stay when one is needed.
pub fn expand_columns(centers: Vec<i64>, needed: usize) -> Vec<i64> {
    let mut columns: VecDeque<i64> = centers.into();
    while columns.len() < needed {
        let (first, last) = match (columns.front(), columns.back()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => break,
        };
        columns.push_front(first - 1);
        if columns.len() < needed {
            columns.push_back(last + 1);
        }
    }
    columns.into()
}

impl GapCarver {
    /// Columns of the gap centered under platform segment `segment`.
    pub fn segment_gap_columns(
        geometry: &StructureGeometry,
        segment: usize,
        needed: usize,
    ) -> Result<Vec<usize>, LayoutError> {
        let (start, end) = geometry.segment_column_span(segment);
        let columns = expand_columns(center_columns(start, end), needed);

        columns
            .into_iter()
            .map(|column| {
                if column < 0 || column >= geometry.column_count as i64 {
                    Err(LayoutError::OutOfBounds {
                        stage: Stage::GapCarver,
                        column,
                        row: None,
                    })
                } else {
                    Ok(column as usize)
                }
            })
            .collect()
    }

    /// One gap under every interior segment. Gaps that would share a column
    /// with an earlier gap are dropped.
    fn centered_gaps(
        state: &StructureState,
        context: &StageContext,
    ) -> Result<Vec<Gap>, LayoutError> {
        let needed = context.metrics.lateral_blocks_per_enemy;
        let mut gaps: Vec<Gap> = Vec::new();

        for segment in context.geometry.interior_segments() {
            let columns = GapCarver::segment_gap_columns(context.geometry, segment, needed)?;
            let collides = gaps.iter().chain(state.gaps.iter()).any(|g| g.overlaps(&columns));
            if collides {
                debug!(
                    "GapCarver: segment {} gap {:?} overlaps an earlier gap, skipped",
                    segment, columns
                );
                continue;
            }
            gaps.push(Gap { segment, columns });
        }

        Ok(gaps)
    }

    /// `requested_gaps` gaps under randomly drawn interior segments, with a
    /// bounded number of redraws on collision per gap.
    fn randomized_gaps(
        state: &StructureState,
        context: &mut StageContext,
    ) -> Result<Vec<Gap>, LayoutError> {
        let needed = context.metrics.lateral_blocks_per_enemy;
        let requested = context.config.requested_gaps;
        let segments = context.geometry.interior_segments();
        let mut gaps: Vec<Gap> = Vec::new();

        if requested > 0 && segments.is_empty() {
            return Err(LayoutError::InsufficientSpace {
                stage: Stage::GapCarver,
                requested,
                placed: 0,
                attempts: 0,
            });
        }

        for _ in 0..requested {
            let mut attempts = 0;
            loop {
                let segment = context.rng.gen_range(segments.clone());
                let columns = GapCarver::segment_gap_columns(context.geometry, segment, needed)?;
                let collides = gaps.iter().chain(state.gaps.iter()).any(|g| g.overlaps(&columns));
                if !collides {
                    gaps.push(Gap { segment, columns });
                    break;
                }

                attempts += 1;
                if attempts >= MAX_GAP_ATTEMPTS {
                    return Err(LayoutError::InsufficientSpace {
                        stage: Stage::GapCarver,
                        requested,
                        placed: gaps.len(),
                        attempts,
                    });
                }
            }
        }

        Ok(gaps)
    }

    /// Write `EMPTY` into every non-platform cell of `gap`'s columns within
    /// the rows covered by `extent`.
    pub fn carve(state: &mut StructureState, gap: &Gap, extent: GapExtent) {
        let top = match state.top_platform() {
            Some(top) => top,
            None => return,
        };

        for &column in &gap.columns {
            let rows = match extent {
                GapExtent::UntilTopPlatform => top,
                GapExtent::UntilTop => state.grid.column_height(column).unwrap_or(0),
            };
            for row in 0..rows {
                let is_platform = state.grid.get(column, row).map(Cell::is_platform).unwrap_or(true);
                if !is_platform {
                    state.grid.set(column, row, Cell::Empty);
                }
            }
        }
    }
}

impl LayoutStage for GapCarver {
    fn name(&self) -> &str {
        "gap_carver"
    }

    fn stage(&self) -> Stage {
        Stage::GapCarver
    }

    fn is_applicable(&self, state: &StructureState, context: &StageContext) -> bool {
        match (state.top_platform(), context.config.gap_extent) {
            (None, _) => false,
            // A platform on the ground has nothing beneath it to carve.
            (Some(top), GapExtent::UntilTopPlatform) => top > 0,
            (Some(_), GapExtent::UntilTop) => true,
        }
    }

    fn apply(
        &self,
        mut state: StructureState,
        context: &mut StageContext,
    ) -> Result<StructureState, LayoutError> {
        let gaps = match context.config.gap_policy {
            GapPolicy::Centered => GapCarver::centered_gaps(&state, context)?,
            GapPolicy::Randomized => GapCarver::randomized_gaps(&state, context)?,
        };

        for gap in &gaps {
            GapCarver::carve(&mut state, gap, context.config.gap_extent);
        }

        debug!(
            "GapCarver: {:?} policy carved {} gaps {:?}",
            context.config.gap_policy,
            gaps.len(),
            gaps.iter().map(|g| &g.columns).collect::<Vec<_>>()
        );

        state.gaps.extend(gaps);
        Ok(state)
    }
}
