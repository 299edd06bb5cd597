//! Error kinds produced by the layout engine.
//!
//! `InvalidConfiguration` and `OutOfBounds` abort the whole layout.
//! `InsufficientSpace` aborts too but is recoverable by the caller (lower the
//! density, request fewer gaps, or reseed). `UnclassifiedMaterial` never
//! aborts; the emitter records it on the `Layout` and moves on.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Pipeline stage that raised an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    Configuration,
    Normalizer,
    PlatformPlanner,
    GapCarver,
    Emitter,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Configuration => "configuration",
            Stage::Normalizer => "normalizer",
            Stage::PlatformPlanner => "platform_planner",
            Stage::GapCarver => "gap_carver",
            Stage::Emitter => "emitter",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum LayoutError {
    #[error("[{stage}] invalid configuration: {reason}")]
    InvalidConfiguration { stage: Stage, reason: String },
    #[error("[{stage}] index out of bounds: column {column}, row {row:?}")]
    OutOfBounds {
        stage: Stage,
        column: i64,
        row: Option<usize>,
    },
    #[error("[{stage}] insufficient space: placed {placed} of {requested} after {attempts} attempts")]
    InsufficientSpace {
        stage: Stage,
        requested: usize,
        placed: usize,
        attempts: u32,
    },
    #[error("unclassified material \"{tag}\" at column {column}, row {row}")]
    UnclassifiedMaterial {
        column: usize,
        row: usize,
        tag: String,
    },
}

impl LayoutError {
    pub fn invalid(stage: Stage, reason: impl Into<String>) -> Self {
        LayoutError::InvalidConfiguration {
            stage,
            reason: reason.into(),
        }
    }

    /// True for errors that must abort the layout as a whole.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LayoutError::UnclassifiedMaterial { .. })
    }
}
