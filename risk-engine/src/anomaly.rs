//! Anomalous-activity detection
//!
//! Looks for bursty or outsized activity in the user's recent history and
//! asks the geolocation resolver whether the device location is unusual.
//! The history is snapshotted once per evaluation; the frequency and volume
//! checks both read that snapshot, never the live history.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::collaborators::GeolocationResolver;
use crate::config::RiskConfig;
use crate::history::{window_snapshot, WindowSnapshot};
use crate::types::DomainTransaction;

/// Contribution when in-window transaction count exceeds the limit
pub const HIGH_FREQUENCY_RISK: u32 = 40;
/// Baseline frequency contribution
pub const NORMAL_FREQUENCY_RISK: u32 = 10;
/// Contribution when the proposed price dwarfs recent volume
pub const HIGH_VOLUME_RISK: u32 = 30;
/// Baseline volume contribution
pub const NORMAL_VOLUME_RISK: u32 = 10;
/// Contribution when the device location is anomalous
pub const GEO_ANOMALY_RISK: u32 = 50;
/// Baseline geographic contribution
pub const NORMAL_GEO_RISK: u32 = 10;
/// Contribution when the geolocation resolver is unreachable
pub const GEO_FALLBACK_RISK: u32 = 30;

/// Per-signal breakdown of an anomaly evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnomalyScore {
    /// Frequency sub-score
    pub frequency: u32,

    /// Volume sub-score
    pub volume: u32,

    /// Geographic sub-score
    pub geographic: u32,
}

impl AnomalyScore {
    /// Sum of the three sub-scores
    pub fn total(&self) -> u32 {
        self.frequency + self.volume + self.geographic
    }
}

/// Detects unusual transaction patterns for a user
pub struct AnomalyDetector {
    config: RiskConfig,
    resolver: Arc<dyn GeolocationResolver>,
}

impl AnomalyDetector {
    /// Create a detector backed by the given geolocation resolver
    pub fn new(config: RiskConfig, resolver: Arc<dyn GeolocationResolver>) -> Self {
        Self { config, resolver }
    }

    /// Evaluate the frequency, volume, and geographic sub-checks
    ///
    /// The sub-checks are independent and joined together; their order does
    /// not affect the result.
    pub async fn evaluate(&self, transaction: &DomainTransaction) -> AnomalyScore {
        let snapshot = window_snapshot(&transaction.user, Utc::now(), self.config.window_hours);

        let (frequency, volume, geographic) = tokio::join!(
            async { self.frequency_risk(&snapshot) },
            async { self.volume_risk(&snapshot, transaction.price) },
            self.geographic_risk(&transaction.device_signature),
        );

        debug!(
            frequency,
            volume,
            geographic,
            user = %transaction.user.id,
            "anomaly sub-scores"
        );

        AnomalyScore {
            frequency,
            volume,
            geographic,
        }
    }

    /// Frequency sub-check: bursty in-window activity
    pub fn frequency_risk(&self, snapshot: &WindowSnapshot) -> u32 {
        if snapshot.transaction_count > self.config.max_window_transactions {
            HIGH_FREQUENCY_RISK
        } else {
            NORMAL_FREQUENCY_RISK
        }
    }

    /// Volume sub-check: proposed price against recent in-window volume
    pub fn volume_risk(&self, snapshot: &WindowSnapshot, price: Decimal) -> u32 {
        // +1 keeps the ratio defined when the window is empty
        let ratio = price / (snapshot.total_volume + Decimal::ONE);
        if ratio > self.config.volume_ratio_limit {
            HIGH_VOLUME_RISK
        } else {
            NORMAL_VOLUME_RISK
        }
    }

    async fn geographic_risk(&self, device_signature: &str) -> u32 {
        match self.resolver.resolve(device_signature).await {
            Ok(lookup) if lookup.is_anomaly => GEO_ANOMALY_RISK,
            Ok(_) => NORMAL_GEO_RISK,
            Err(e) => {
                warn!("Geolocation lookup failed, using fallback risk: {}", e);
                GEO_FALLBACK_RISK
            }
        }
    }
}
