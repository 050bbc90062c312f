use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Upper bound on [`EvaluatorConfig::num_attempts`].
pub const MAX_ATTEMPTS: u32 = 10;

/// Constants of the progressive buffer evaluation.
///
/// Every field has a default, so a partial JSON object is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluatorConfig {
    /// Number of tolerance rings tried, the exact shape included.
    pub num_attempts: u32,
    /// Growth per ring, as a fraction of the shape's smaller extent side.
    pub buffer_fraction: f64,
    /// Growth of the highlight drawn around a missed answer.
    pub miss_highlight_fraction: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            num_attempts: 3,
            buffer_fraction: 0.25,
            miss_highlight_fraction: 0.1,
        }
    }
}

impl EvaluatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_attempts == 0 {
            return Err(ConfigError::NoAttempts);
        }
        if self.num_attempts > MAX_ATTEMPTS {
            return Err(ConfigError::TooManyAttempts {
                num_attempts: self.num_attempts,
                max: MAX_ATTEMPTS,
            });
        }
        for (field, value) in [
            ("buffer_fraction", self.buffer_fraction),
            ("miss_highlight_fraction", self.miss_highlight_fraction),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidFraction { field, value });
            }
        }
        Ok(())
    }
}
