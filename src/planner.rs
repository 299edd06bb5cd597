//! Public API for the structure layout engine.
//!
//! The `LayoutBuilder` provides a fluent API for configuring a layout. It
//! produces a `LayoutEngine`, a fully resolved and immutable value that can
//! lay out any number of tile grids, either run to completion or ticked one
//! stage at a time through `LayoutState`.

use crate::config::*;
use crate::error::*;
use crate::grid::TileGrid;
use crate::metrics::EngineMetrics;
use crate::pipeline::{tick_pipeline, LayoutState};
use crate::registry::DimensionRegistry;
use crate::source::TileGridSource;
use crate::stages::{default_stages, LayoutStage};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Re-export key types for convenience
pub use crate::layout::{Layout, ObjectKind, PlacedObject};
pub use crate::pipeline::{get_layout, is_complete};

/// A resolved layout configuration plus its stage stack.
pub struct LayoutEngine {
    config: LayoutConfig,
    metrics: EngineMetrics,
    stages: Vec<Box<dyn LayoutStage>>,
}

impl LayoutEngine {
    /// Resolve `config` against `registry` with the default stage stack.
    pub fn new(config: LayoutConfig, registry: &DimensionRegistry) -> Result<Self, LayoutError> {
        LayoutEngine::with_stages(config, registry, default_stages())
    }

    pub fn with_stages(
        config: LayoutConfig,
        registry: &DimensionRegistry,
        stages: Vec<Box<dyn LayoutStage>>,
    ) -> Result<Self, LayoutError> {
        let metrics = EngineMetrics::resolve(&config, registry)?;
        Ok(LayoutEngine {
            config,
            metrics,
            stages,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn metrics(&self) -> &EngineMetrics {
        &self.metrics
    }

    pub fn stages(&self) -> &[Box<dyn LayoutStage>] {
        &self.stages
    }

    /// The engine's own random source: seeded from `random_seed` when set.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Lay out raw tile rows using the engine's random source.
    pub fn run(&self, source: &dyn TileGridSource) -> Result<Layout, LayoutError> {
        let mut rng = self.rng();
        self.run_with_rng(source, &mut rng)
    }

    /// Lay out raw tile rows with a caller-provided random source.
    pub fn run_with_rng(
        &self,
        source: &dyn TileGridSource,
        rng: &mut dyn RngCore,
    ) -> Result<Layout, LayoutError> {
        self.drive(LayoutState::Normalizing, source, rng)
    }

    /// Lay out a grid that is already in build order (bottom-left origin,
    /// background removed).
    pub fn run_grid(&self, grid: TileGrid, rng: &mut dyn RngCore) -> Result<Layout, LayoutError> {
        let no_rows: Vec<Vec<String>> = Vec::new();
        self.drive(LayoutState::from_grid(self, grid), &no_rows, rng)
    }

    fn drive(
        &self,
        mut state: LayoutState,
        source: &dyn TileGridSource,
        rng: &mut dyn RngCore,
    ) -> Result<Layout, LayoutError> {
        loop {
            state = tick_pipeline(state, self, source, &mut *rng);
            match state {
                LayoutState::Complete(layout) => return Ok(layout),
                LayoutState::Failed(err) => return Err(err),
                _ => continue,
            }
        }
    }
}

/// Fluent builder for a `LayoutEngine`.
pub struct LayoutBuilder {
    config: LayoutConfig,
    registry: DimensionRegistry,
    stages: Vec<Box<dyn LayoutStage>>,
}

impl LayoutBuilder {
    /// Start from the default configuration, the standard registry and the
    /// default stage stack.
    pub fn new() -> Self {
        LayoutBuilder {
            config: LayoutConfig::default(),
            registry: DimensionRegistry::standard(),
            stages: default_stages(),
        }
    }

    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(mut self, registry: DimensionRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn principal_block(mut self, kind_id: impl Into<String>) -> Self {
        self.config.principal_block_kind = kind_id.into();
        self
    }

    pub fn platform_block(mut self, kind_id: impl Into<String>) -> Self {
        self.config.platform_kind = kind_id.into();
        self
    }

    pub fn enemy(mut self, kind_id: impl Into<String>) -> Self {
        self.config.enemy_kind = kind_id.into();
        self
    }

    pub fn platform_policy(mut self, policy: PlatformPolicy) -> Self {
        self.config.platform_policy = policy;
        self
    }

    pub fn density_ratio(mut self, ratio: f64) -> Self {
        self.config.density_ratio = ratio;
        self
    }

    pub fn gap_policy(mut self, policy: GapPolicy) -> Self {
        self.config.gap_policy = policy;
        self
    }

    pub fn gap_extent(mut self, extent: GapExtent) -> Self {
        self.config.gap_extent = extent;
        self
    }

    pub fn requested_gaps(mut self, count: usize) -> Self {
        self.config.requested_gaps = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.random_seed = Some(seed);
        self
    }

    pub fn ground_height(mut self, height: f64) -> Self {
        self.config.ground_height = height;
        self
    }

    pub fn scale_unit(mut self, scale_unit: i64) -> Self {
        self.config.scale_unit = scale_unit;
        self
    }

    pub fn extend_ragged_columns(mut self, extend: bool) -> Self {
        self.config.extend_ragged_columns = extend;
        self
    }

    pub fn center_horizontally(mut self, center: bool) -> Self {
        self.config.center_horizontally = center;
        self
    }

    /// Append a stage to the end of the stack.
    pub fn add_stage(mut self, stage: Box<dyn LayoutStage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn build(self) -> Result<LayoutEngine, LayoutError> {
        LayoutEngine::with_stages(self.config, &self.registry, self.stages)
    }
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lay out raw tile rows with `config` and the standard registry.
pub fn plan_structure(
    source: &dyn TileGridSource,
    config: LayoutConfig,
) -> Result<Layout, LayoutError> {
    LayoutEngine::new(config, &DimensionRegistry::standard())?.run(source)
}
