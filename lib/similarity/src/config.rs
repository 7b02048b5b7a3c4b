//! Engine configuration

use palate_core::{Error, Result, DEFAULT_DECAY_LAMBDA};
use serde::{Deserialize, Serialize};

/// Tunables shared by ranking and profile estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Exponential decay rate applied to history, per day
    #[serde(default = "default_decay_lambda")]
    pub decay_lambda: f64,
}

fn default_decay_lambda() -> f64 {
    DEFAULT_DECAY_LAMBDA
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decay_lambda: DEFAULT_DECAY_LAMBDA,
        }
    }
}

impl EngineConfig {
    pub fn with_decay_lambda(decay_lambda: f64) -> Self {
        Self { decay_lambda }
    }

    /// Lambda must be finite and non-negative
    pub fn validate(&self) -> Result<()> {
        if !self.decay_lambda.is_finite() || self.decay_lambda < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "decay_lambda must be a finite non-negative number, got {}",
                self.decay_lambda
            )));
        }
        Ok(())
    }
}
