use crate::constants::*;
use serde::{Deserialize, Serialize};

/// How platform rows are chosen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformPolicy {
    /// One platform every `vertical_blocks_per_enemy + 1` rows, from row 0.
    Spacing,
    /// `round(density_ratio * shortest_column_height)` random rows.
    Ratio,
    /// Caller-provided rows, strictly ascending.
    Explicit(Vec<usize>),
}

/// How gap columns are chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapPolicy {
    /// One gap centered under every interior platform segment.
    Centered,
    /// `requested_gaps` gaps under randomly sampled interior segments.
    Randomized,
}

/// Which rows a gap clears.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapExtent {
    /// Rows strictly below the topmost platform.
    UntilTopPlatform,
    /// Every row of the column.
    UntilTop,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub principal_block_kind: String,
    pub platform_kind: String,
    pub enemy_kind: String,
    pub platform_policy: PlatformPolicy,
    pub density_ratio: f64,
    pub gap_policy: GapPolicy,
    pub gap_extent: GapExtent,
    /// Number of gaps the randomized policy must place.
    pub requested_gaps: usize,
    pub random_seed: Option<u64>,
    pub ground_height: f64,
    /// Fixed-point multiplier for exact width and height division.
    pub scale_unit: i64,
    /// Pad short columns with empty cells instead of rejecting explicit
    /// platform rows beyond their length.
    pub extend_ragged_columns: bool,
    pub platform_material: String,
    /// Shift every x by half the structure width so it straddles x = 0.
    pub center_horizontally: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            principal_block_kind: DEFAULT_PRINCIPAL_BLOCK.to_string(),
            platform_kind: DEFAULT_PLATFORM_BLOCK.to_string(),
            enemy_kind: DEFAULT_ENEMY.to_string(),
            platform_policy: PlatformPolicy::Ratio,
            density_ratio: DEFAULT_PLATFORM_RATIO,
            gap_policy: GapPolicy::Centered,
            gap_extent: GapExtent::UntilTopPlatform,
            requested_gaps: 1,
            random_seed: None,
            ground_height: GROUND_HEIGHT,
            scale_unit: DEFAULT_SCALE_UNIT,
            extend_ragged_columns: false,
            platform_material: DEFAULT_PLATFORM_MATERIAL.to_string(),
            center_horizontally: false,
        }
    }
}

impl LayoutConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
