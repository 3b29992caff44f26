//! Policy thresholds for risk categorization

use crate::types::RiskLevel;
use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Risk policy configuration
///
/// One threshold table drives both the risk level and the recommended
/// action, so the two can never diverge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Highest aggregate score still considered low risk
    pub low_threshold: u32,

    /// Highest aggregate score still considered medium risk
    pub medium_threshold: u32,

    /// Lookback window for anomaly checks (hours)
    pub window_hours: i64,

    /// In-window transaction count above which frequency is flagged
    pub max_window_transactions: usize,

    /// Price-to-recent-volume ratio above which volume is flagged
    pub volume_ratio_limit: Decimal,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            low_threshold: 30,
            medium_threshold: 60,
            window_hours: 24,
            max_window_transactions: 5,
            volume_ratio_limit: Decimal::from(2),
        }
    }
}

impl RiskConfig {
    /// Validate threshold ordering
    pub fn validate(&self) -> Result<()> {
        if self.medium_threshold <= self.low_threshold {
            return Err(Error::InvalidConfig(format!(
                "medium threshold {} must exceed low threshold {}",
                self.medium_threshold, self.low_threshold
            )));
        }
        if self.window_hours <= 0 {
            return Err(Error::InvalidConfig(format!(
                "window must be positive, got {}h",
                self.window_hours
            )));
        }
        Ok(())
    }

    /// Map an aggregate score to a risk level (inclusive upper bounds)
    pub fn categorize(&self, risk_score: u32) -> RiskLevel {
        if risk_score <= self.low_threshold {
            RiskLevel::Low
        } else if risk_score <= self.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
