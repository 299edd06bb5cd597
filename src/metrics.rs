//! Derived constants resolved once when the engine is built.

use crate::config::*;
use crate::constants::*;
use crate::error::*;
use crate::registry::*;

/// A registry record together with its fixed-point dimensions.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedKind {
    pub record: DimensionRecord,
    pub width_scaled: i64,
    pub height_scaled: i64,
}

impl ResolvedKind {
    fn resolve(
        registry: &DimensionRegistry,
        kind_id: &str,
        role: &str,
        scale_unit: i64,
    ) -> Result<ResolvedKind, LayoutError> {
        let record = registry.get(kind_id).ok_or_else(|| {
            LayoutError::invalid(
                Stage::Configuration,
                format!("unknown {} kind \"{}\"", role, kind_id),
            )
        })?;

        let width_scaled = to_scaled(record.width, scale_unit);
        let height_scaled = to_scaled(record.height, scale_unit);
        if !(record.width > 0.0 && record.height > 0.0) || width_scaled <= 0 || height_scaled <= 0 {
            return Err(LayoutError::invalid(
                Stage::Configuration,
                format!(
                    "{} kind \"{}\" has non-positive dimensions {}x{} at scale {}",
                    role, kind_id, record.width, record.height, scale_unit
                ),
            ));
        }

        Ok(ResolvedKind {
            record: record.clone(),
            width_scaled,
            height_scaled,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.record.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.record.height
    }
}

/// Kind dimensions and enemy footprint in principal-block units.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineMetrics {
    pub principal: ResolvedKind,
    pub platform: ResolvedKind,
    pub enemy: ResolvedKind,
    pub scale_unit: i64,
    pub ground_height: f64,
    /// Principal-block columns an enemy needs.
    pub lateral_blocks_per_enemy: usize,
    /// Principal-block rows an enemy needs.
    pub vertical_blocks_per_enemy: usize,
}

impl EngineMetrics {
    pub fn resolve(
        config: &LayoutConfig,
        registry: &DimensionRegistry,
    ) -> Result<EngineMetrics, LayoutError> {
        if config.scale_unit <= 0 {
            return Err(LayoutError::invalid(
                Stage::Configuration,
                format!("scale_unit must be positive, got {}", config.scale_unit),
            ));
        }
        if !(config.density_ratio > 0.0 && config.density_ratio <= 1.0) {
            return Err(LayoutError::invalid(
                Stage::Configuration,
                format!("density_ratio must be in (0, 1], got {}", config.density_ratio),
            ));
        }
        if !config.ground_height.is_finite() {
            return Err(LayoutError::invalid(
                Stage::Configuration,
                "ground_height must be finite",
            ));
        }

        let scale = config.scale_unit;
        let principal =
            ResolvedKind::resolve(registry, &config.principal_block_kind, "principal block", scale)?;
        let platform = ResolvedKind::resolve(registry, &config.platform_kind, "platform", scale)?;
        let enemy = ResolvedKind::resolve(registry, &config.enemy_kind, "enemy", scale)?;

        let lateral_blocks_per_enemy =
            cover_count(enemy.width_scaled, principal.width_scaled) as usize;
        let vertical_blocks_per_enemy =
            cover_count(enemy.height_scaled, principal.height_scaled) as usize;

        Ok(EngineMetrics {
            principal,
            platform,
            enemy,
            scale_unit: scale,
            ground_height: config.ground_height,
            lateral_blocks_per_enemy,
            vertical_blocks_per_enemy,
        })
    }

    /// Rows between consecutive platforms under the spacing policy.
    pub fn platform_spacing(&self) -> usize {
        self.vertical_blocks_per_enemy + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(block: f64, enemy: f64) -> DimensionRegistry {
        DimensionRegistry::new()
            .with_record(DimensionRecord::new("block", "SquareSmall", block, block))
            .with_record(DimensionRecord::new("plank", "RectBig", 2.06, 0.22))
            .with_record(DimensionRecord::new("pig", "BasicSmall", enemy, enemy))
    }

    fn config() -> LayoutConfig {
        LayoutConfig {
            principal_block_kind: "block".into(),
            platform_kind: "plank".into(),
            enemy_kind: "pig".into(),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn exact_division_needs_no_extra_block() {
        let metrics = EngineMetrics::resolve(&config(), &registry(0.25, 0.5)).unwrap();
        assert_eq!(metrics.lateral_blocks_per_enemy, 2);
        assert_eq!(metrics.vertical_blocks_per_enemy, 2);
        assert_eq!(metrics.platform_spacing(), 3);
    }

    #[test]
    fn remainder_rounds_up() {
        let metrics = EngineMetrics::resolve(&config(), &registry(0.43, 0.5)).unwrap();
        assert_eq!(metrics.lateral_blocks_per_enemy, 2);
        let metrics = EngineMetrics::resolve(&config(), &registry(0.22, 0.5)).unwrap();
        assert_eq!(metrics.lateral_blocks_per_enemy, 3);
    }

    #[test]
    fn rejects_unknown_kind() {
        let mut config = config();
        config.enemy_kind = "bird".into();
        let err = EngineMetrics::resolve(&config, &registry(0.25, 0.5)).unwrap_err();
        assert!(matches!(
            err,
            LayoutError::InvalidConfiguration {
                stage: Stage::Configuration,
                ..
            }
        ));
    }

    #[test]
    fn rejects_bad_ratio_and_scale() {
        let mut bad_ratio = config();
        bad_ratio.density_ratio = 0.0;
        assert!(EngineMetrics::resolve(&bad_ratio, &registry(0.25, 0.5)).is_err());

        let mut bad_scale = config();
        bad_scale.scale_unit = 0;
        assert!(EngineMetrics::resolve(&bad_scale, &registry(0.25, 0.5)).is_err());
    }
}
