//! Engine tuning knobs.

use serde::{Deserialize, Serialize};

use crate::availability::DEFAULT_GRANULARITY_MINUTES;
use crate::clock::MINUTES_PER_DAY;
use crate::error::{Result, SlotError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Spacing between candidate start times when listing slots.
    pub granularity_minutes: u32,
    /// How many times admission re-runs read, check and insert after the store
    /// reports a write conflict.
    pub admission_retries: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            granularity_minutes: DEFAULT_GRANULARITY_MINUTES,
            admission_retries: 1,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config. Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.granularity_minutes == 0 || self.granularity_minutes > MINUTES_PER_DAY {
            return Err(SlotError::InvalidGranularity(self.granularity_minutes));
        }
        Ok(())
    }
}
