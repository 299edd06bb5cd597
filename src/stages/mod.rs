pub mod gaps;
pub mod platforms;

pub use gaps::GapCarver;
pub use platforms::PlatformPlanner;

use crate::config::LayoutConfig;
use crate::coordinates::StructureGeometry;
use crate::error::*;
use crate::metrics::EngineMetrics;
use crate::structure::StructureState;
use rand::RngCore;

/// Read-only engine data plus the single random source, shared by every
/// stage of one layout run.
pub struct StageContext<'a> {
    pub config: &'a LayoutConfig,
    pub metrics: &'a EngineMetrics,
    pub geometry: &'a StructureGeometry,
    pub rng: &'a mut dyn RngCore,
}

/// One step of the layout pipeline.
///
/// Stages are stateless: they take the structure by value, mutate it, and
/// return it. A stage that fails aborts the whole layout.
pub trait LayoutStage {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Stage reported in errors.
    fn stage(&self) -> Stage;

    fn apply(
        &self,
        state: StructureState,
        context: &mut StageContext,
    ) -> Result<StructureState, LayoutError>;

    /// Return false to skip this stage (state passes through unchanged).
    fn is_applicable(&self, _state: &StructureState, _context: &StageContext) -> bool {
        true
    }
}

/// Build the default stage stack.
///
/// 1. PlatformPlanner -- chooses and inserts platform rows
/// 2. GapCarver -- clears columns under platform segments for enemies
pub fn default_stages() -> Vec<Box<dyn LayoutStage>> {
    vec![Box::new(PlatformPlanner), Box::new(GapCarver)]
}
