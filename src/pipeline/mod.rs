pub mod emit;
pub mod normalize;

use crate::coordinates::StructureGeometry;
use crate::error::*;
use crate::grid::TileGrid;
use crate::layout::Layout;
use crate::planner::LayoutEngine;
use crate::source::TileGridSource;
use crate::stages::StageContext;
use crate::structure::StructureState;
use log::*;
use rand::RngCore;

/// The overall layout pipeline state.
///
/// Stages run strictly in order: normalize, each layout stage, emit. Every
/// transition moves the structure by value, so no stage ever sees an older
/// copy of the grid.
pub enum LayoutState {
    /// Waiting to read and orient the raw tile rows.
    Normalizing,
    /// Running layout stages; `next_stage` indexes the engine's stage stack.
    Staging {
        structure: StructureState,
        geometry: StructureGeometry,
        next_stage: usize,
    },
    /// Turning the finished grid into records.
    Emitting {
        structure: StructureState,
        geometry: StructureGeometry,
    },
    /// Terminal states.
    Complete(Layout),
    Failed(LayoutError),
}

impl LayoutState {
    /// Skip normalization for a grid that is already in build order.
    pub fn from_grid(engine: &LayoutEngine, grid: TileGrid) -> LayoutState {
        let geometry = StructureGeometry::new(
            engine.metrics(),
            grid.column_count(),
            engine.config().center_horizontally,
        );
        LayoutState::Staging {
            structure: StructureState::new(grid),
            geometry,
            next_stage: 0,
        }
    }
}

/// Run one step of the layout pipeline.
pub fn tick_pipeline(
    state: LayoutState,
    engine: &LayoutEngine,
    source: &dyn TileGridSource,
    rng: &mut dyn RngCore,
) -> LayoutState {
    match state {
        LayoutState::Normalizing => {
            let grid = normalize::normalize(source);
            LayoutState::from_grid(engine, grid)
        }
        LayoutState::Staging {
            structure,
            geometry,
            next_stage,
        } => {
            let stage = match engine.stages().get(next_stage) {
                Some(stage) => stage,
                None => return LayoutState::Emitting { structure, geometry },
            };

            let mut context = StageContext {
                config: engine.config(),
                metrics: engine.metrics(),
                geometry: &geometry,
                rng,
            };

            if !stage.is_applicable(&structure, &context) {
                debug!("Pipeline: stage {} not applicable, skipped", stage.name());
                return LayoutState::Staging {
                    structure,
                    geometry,
                    next_stage: next_stage + 1,
                };
            }

            match stage.apply(structure, &mut context) {
                Ok(structure) => LayoutState::Staging {
                    structure,
                    geometry,
                    next_stage: next_stage + 1,
                },
                Err(err) => {
                    debug!("Pipeline: stage {} failed: {}", stage.name(), err);
                    LayoutState::Failed(err)
                }
            }
        }
        LayoutState::Emitting {
            structure,
            geometry,
        } => {
            let emitter = emit::Emitter::new(engine.config(), engine.metrics(), &geometry);
            LayoutState::Complete(emitter.emit(structure))
        }
        // Terminal states
        s @ LayoutState::Complete(_) | s @ LayoutState::Failed(_) => s,
    }
}

/// Check if the pipeline has reached a terminal state.
pub fn is_complete(state: &LayoutState) -> bool {
    matches!(state, LayoutState::Complete(_) | LayoutState::Failed(_))
}

/// Extract the completed layout, if any.
pub fn get_layout(state: LayoutState) -> Option<Layout> {
    match state {
        LayoutState::Complete(layout) => Some(layout),
        _ => None,
    }
}
