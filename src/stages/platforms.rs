//! PlatformPlanner: chooses the platform rows and writes them into the grid.
//!
//! Every chosen row is below the shortest column so each column can hold a
//! platform cell without growing. The one exception is an explicit row list
//! with `extend_ragged_columns` set, where short columns are padded with
//! empty cells first.

use super::*;
use crate::config::PlatformPolicy;
use crate::grid::TileGrid;
use crate::structure::is_strictly_ascending;
use log::*;
use rand::seq::index;

pub struct PlatformPlanner;

impl PlatformPlanner {
    /// Choose platform rows for `grid` without modifying it.
    pub fn plan(
        grid: &TileGrid,
        config: &LayoutConfig,
        metrics: &EngineMetrics,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<usize>, LayoutError> {
        if grid.column_count() == 0 {
            return Err(LayoutError::invalid(
                Stage::PlatformPlanner,
                "structure has no columns",
            ));
        }

        let shortest = grid.shortest_column_height();
        let may_extend =
            config.extend_ragged_columns && matches!(config.platform_policy, PlatformPolicy::Explicit(_));
        if shortest == 0 && !may_extend {
            return Err(LayoutError::invalid(
                Stage::PlatformPlanner,
                "shortest column height is 0",
            ));
        }

        match &config.platform_policy {
            PlatformPolicy::Spacing => Ok(spacing_rows(shortest, metrics.platform_spacing())),
            PlatformPolicy::Ratio => ratio_rows(shortest, config.density_ratio, rng),
            PlatformPolicy::Explicit(rows) => explicit_rows(rows, shortest, may_extend),
        }
    }
}

/// Rows 0, spacing, 2 * spacing, ... below `shortest`.
pub fn spacing_rows(shortest: usize, spacing: usize) -> Vec<usize> {
    (0..shortest).step_by(spacing.max(1)).collect()
}

/// `round(ratio * shortest)` distinct rows sampled without replacement.
pub fn ratio_rows(
    shortest: usize,
    ratio: f64,
    rng: &mut dyn RngCore,
) -> Result<Vec<usize>, LayoutError> {
    let count = (ratio * shortest as f64).round() as usize;
    if count > shortest {
        return Err(LayoutError::invalid(
            Stage::PlatformPlanner,
            format!("{} platforms requested but only {} rows available", count, shortest),
        ));
    }

    let mut rows = index::sample(rng, shortest, count).into_vec();
    rows.sort_unstable();
    Ok(rows)
}

fn explicit_rows(rows: &[usize], shortest: usize, may_extend: bool) -> Result<Vec<usize>, LayoutError> {
    if !is_strictly_ascending(rows) {
        return Err(LayoutError::invalid(
            Stage::PlatformPlanner,
            format!("explicit platform rows {:?} are not strictly ascending", rows),
        ));
    }
    if let Some(&top) = rows.last() {
        if top >= shortest && !may_extend {
            return Err(LayoutError::invalid(
                Stage::PlatformPlanner,
                format!(
                    "platform row {} is beyond the shortest column height {}",
                    top, shortest
                ),
            ));
        }
    }
    Ok(rows.to_vec())
}

impl LayoutStage for PlatformPlanner {
    fn name(&self) -> &str {
        "platform_planner"
    }

    fn stage(&self) -> Stage {
        Stage::PlatformPlanner
    }

    fn apply(
        &self,
        mut state: StructureState,
        context: &mut StageContext,
    ) -> Result<StructureState, LayoutError> {
        let rows = PlatformPlanner::plan(&state.grid, context.config, context.metrics, context.rng)?;

        if let Some(&top) = rows.last() {
            if top >= state.grid.shortest_column_height() {
                for column in 0..state.grid.column_count() {
                    state.grid.extend_column(column, top + 1);
                }
            }
        }

        debug!(
            "PlatformPlanner: {:?} policy placed {} platform rows {:?}",
            context.config.platform_policy,
            rows.len(),
            rows
        );

        state.insert_platforms(rows);
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn spacing_starts_at_ground() {
        assert_eq!(spacing_rows(10, 3), vec![0, 3, 6, 9]);
        assert_eq!(spacing_rows(9, 3), vec![0, 3, 6]);
        assert_eq!(spacing_rows(1, 3), vec![0]);
    }

    #[test]
    fn ratio_rows_are_sorted_and_distinct() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let rows = ratio_rows(20, 0.3, &mut rng).unwrap();
        assert_eq!(rows.len(), 6);
        assert!(is_strictly_ascending(&rows));
        assert!(rows.iter().all(|&r| r < 20));
    }

    #[test]
    fn ratio_of_one_takes_every_row() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(ratio_rows(4, 1.0, &mut rng).unwrap(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn explicit_rows_are_validated() {
        assert!(explicit_rows(&[1, 3], 5, false).is_ok());
        assert!(explicit_rows(&[3, 1], 5, false).is_err());
        assert!(explicit_rows(&[1, 5], 5, false).is_err());
        assert!(explicit_rows(&[1, 5], 5, true).is_ok());
    }
}
