//! Risk assessment orchestration
//!
//! Fans out to the three evaluators, sums their contributions, and maps the
//! aggregate through the policy thresholds. Collaborator failures never
//! surface here: each evaluator already folds them into a fallback
//! contribution, so `assess` has no error channel.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::anomaly::{
    AnomalyDetector, GEO_ANOMALY_RISK, GEO_FALLBACK_RISK, HIGH_FREQUENCY_RISK, HIGH_VOLUME_RISK,
};
use crate::collaborators::{
    GeolocationResolver, LengthSignatureValidator, SignatureValidator, StaticGeolocationResolver,
};
use crate::config::RiskConfig;
use crate::device::{DeviceIntegrityVerifier, INVALID_SIGNATURE_RISK, SIGNATURE_FALLBACK_RISK};
use crate::reputation::{ReputationScorer, LOW_REPUTATION_RISK, VERY_LOW_REPUTATION_RISK};
use crate::types::{DomainTransaction, RecommendedAction, SecurityAssessment};

/// Orchestrates the risk evaluators for domain marketplace transactions
pub struct RiskAssessmentEngine {
    config: RiskConfig,
    anomaly: AnomalyDetector,
    device: DeviceIntegrityVerifier,
}

impl RiskAssessmentEngine {
    /// Create an engine with the given policy and collaborators
    pub fn new(
        config: RiskConfig,
        resolver: Arc<dyn GeolocationResolver>,
        validator: Arc<dyn SignatureValidator>,
    ) -> Self {
        Self {
            anomaly: AnomalyDetector::new(config.clone(), resolver),
            device: DeviceIntegrityVerifier::new(validator),
            config,
        }
    }

    /// Engine wired to the placeholder development collaborators
    pub fn with_defaults() -> Self {
        Self::new(
            RiskConfig::default(),
            Arc::new(StaticGeolocationResolver),
            Arc::new(LengthSignatureValidator),
        )
    }

    /// Assess a proposed transaction.
    ///
    /// Always produces an assessment; there is no failure path. The three
    /// evaluators run concurrently and have no dependency on each other.
    pub async fn assess(&self, transaction: &DomainTransaction) -> SecurityAssessment {
        let (reputation, anomaly, device) = tokio::join!(
            async { ReputationScorer::contribution(&transaction.user) },
            self.anomaly.evaluate(transaction),
            self.device.contribution(&transaction.device_signature),
        );

        let risk_score = reputation + anomaly.total() + device;
        let risk_level = self.config.categorize(risk_score);
        let recommended_action = risk_level.recommended_action();

        let mut risk_factors = Vec::new();
        if reputation == VERY_LOW_REPUTATION_RISK {
            risk_factors.push("Very low user reputation".to_string());
        } else if reputation == LOW_REPUTATION_RISK {
            risk_factors.push("Low user reputation".to_string());
        }
        if anomaly.frequency == HIGH_FREQUENCY_RISK {
            risk_factors.push("High transaction frequency".to_string());
        }
        if anomaly.volume == HIGH_VOLUME_RISK {
            risk_factors.push("Unusual transaction volume".to_string());
        }
        if anomaly.geographic == GEO_ANOMALY_RISK {
            risk_factors.push("Geographic anomaly detected".to_string());
        } else if anomaly.geographic == GEO_FALLBACK_RISK {
            risk_factors.push("Geolocation unavailable".to_string());
        }
        if device == INVALID_SIGNATURE_RISK {
            risk_factors.push("Invalid device signature".to_string());
        } else if device == SIGNATURE_FALLBACK_RISK {
            risk_factors.push("Device verification unavailable".to_string());
        }

        let assessment_id = Uuid::new_v4();
        match recommended_action {
            RecommendedAction::Block => info!(
                "Assessment BLOCK for {} on {} (score: {}, id: {})",
                transaction.user.id, transaction.domain_name, risk_score, assessment_id
            ),
            RecommendedAction::Verify => info!(
                "Assessment VERIFY for {} on {} (score: {}, id: {})",
                transaction.user.id, transaction.domain_name, risk_score, assessment_id
            ),
            RecommendedAction::Proceed => debug!(
                "Assessment PROCEED for {} on {} (score: {}, id: {})",
                transaction.user.id, transaction.domain_name, risk_score, assessment_id
            ),
        }

        SecurityAssessment {
            assessment_id,
            risk_level,
            recommended_action,
            risk_score,
            risk_factors,
            assessed_at: Utc::now(),
        }
    }
}
