//! Construction parameters for a ladder session.

use crate::error::{ConfigError, LadderError};
use serde::{Deserialize, Serialize};

/// Grid dimensions of a ladder program: number of rungs and slots per rung.
///
/// Both values are fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    pub max_rows: usize,
    pub max_cols: usize,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            max_rows: 8,
            max_cols: 6,
        }
    }
}

impl LadderConfig {
    pub fn new(max_rows: usize, max_cols: usize) -> Self {
        Self { max_rows, max_cols }
    }

    /// Total number of slots in the grid.
    pub fn cell_count(&self) -> usize {
        self.max_rows * self.max_cols
    }

    /// Reject grids without at least one row and one column.
    pub fn validate(&self) -> Result<(), LadderError> {
        if self.max_rows == 0 || self.max_cols == 0 {
            return Err(LadderError::InvalidDimensions {
                rows: self.max_rows,
                cols: self.max_cols,
            });
        }
        Ok(())
    }

    /// Parse and validate a config from JSON, e.g. `{"max_rows": 8, "max_cols": 6}`.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
