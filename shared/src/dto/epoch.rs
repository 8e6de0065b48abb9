//! Epoch query DTOs.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EpochError {
    #[error("invalid epoch duration: {0:?}")]
    InvalidDuration(String),

    #[error("epoch not found: {0}")]
    NotFound(String),
}

/// A reward period with a known end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Epoch {
    pub identifier: String,
    pub end_time: DateTime<Utc>,
}

/// One entry of the epochs query as returned by the LCD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochInfo {
    pub identifier: String,
    pub start_time: DateTime<Utc>,
    pub duration: String,
    pub current_epoch: String,
    pub current_epoch_start_time: DateTime<Utc>,
    pub epoch_counting_started: bool,
    pub current_epoch_start_height: String,
}

impl EpochInfo {
    /// Whole seconds of the epoch duration. Fractional seconds are truncated.
    pub fn duration_seconds(&self) -> Result<i64, EpochError> {
        let invalid = || EpochError::InvalidDuration(self.duration.clone());

        let body = self.duration.strip_suffix('s').ok_or_else(invalid)?;
        let whole = match body.split_once('.') {
            Some((whole, frac)) if frac.chars().all(|c| c.is_ascii_digit()) => whole,
            Some(_) => return Err(invalid()),
            None => body,
        };

        whole.parse::<i64>().map_err(|_| invalid())
    }

    /// End of the current epoch: its start plus the epoch duration.
    ///
    /// Durations too large to represent as a timestamp are rejected as invalid.
    pub fn end_time(&self) -> Result<DateTime<Utc>, EpochError> {
        let seconds = self.duration_seconds()?;
        TimeDelta::try_seconds(seconds)
            .and_then(|duration| self.current_epoch_start_time.checked_add_signed(duration))
            .ok_or_else(|| EpochError::InvalidDuration(self.duration.clone()))
    }

    pub fn to_epoch(&self) -> Result<Epoch, EpochError> {
        Ok(Epoch {
            identifier: self.identifier.clone(),
            end_time: self.end_time()?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpochsResponse {
    pub epochs: Vec<EpochInfo>,
}

impl EpochsResponse {
    /// Look up an epoch by identifier (`"day"`, `"week"`, ...).
    pub fn find(&self, identifier: &str) -> Result<Epoch, EpochError> {
        self.epochs
            .iter()
            .find(|info| info.identifier == identifier)
            .ok_or_else(|| EpochError::NotFound(identifier.to_string()))?
            .to_epoch()
    }
}
