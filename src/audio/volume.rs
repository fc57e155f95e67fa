use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ValidationError;

const MAX_PERCENT: u8 = 100;
const DEFAULT_PERCENT: u8 = 50;

/// Playback volume as a whole percentage, 0 through 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct Volume(u8);

impl Volume {
    #[must_use]
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

impl TryFrom<u64> for Volume {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .filter(|percent| *percent <= MAX_PERCENT)
            .map(Self)
            .ok_or(ValidationError::VolumeOutOfRange { value })
    }
}

impl FromStr for Volume {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_suffix('%').unwrap_or(trimmed);
        let value: u64 = digits.parse().map_err(|_err| ValidationError::InvalidVolume {
            value: s.to_owned(),
        })?;
        Self::try_from(value)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
