//! Core types for the risk engine

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a marketplace transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Domain purchase
    Buy,
    /// Domain sale
    Sell,
}

/// A settled transaction in a user's history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// When the transaction settled
    pub timestamp: DateTime<Utc>,

    /// Transaction amount
    pub amount: Decimal,

    /// Buy or sell
    pub tx_type: TransactionType,

    /// Domain the transaction concerned
    pub domain_name: String,
}

/// Marketplace user as seen by the risk engine
///
/// Owned externally. History is in insertion order, which is chronological;
/// the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// User identifier
    pub id: String,

    /// Reputation score (conventionally 0-100)
    pub reputation_score: u32,

    /// Past transactions, oldest first
    pub transaction_history: Vec<TransactionRecord>,
}

/// A proposed domain purchase or sale awaiting assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainTransaction {
    /// User attempting the transaction
    pub user: User,

    /// Domain being bought or sold
    pub domain_name: String,

    /// Proposed price
    pub price: Decimal,

    /// When the request was made
    pub timestamp: DateTime<Utc>,

    /// Opaque device signature token asserted by the client
    pub device_signature: String,
}

/// Risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Low risk
    Low,
    /// Medium risk
    Medium,
    /// High risk
    High,
}

/// Recommended action for a proposed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendedAction {
    /// Let the transaction proceed
    Proceed,
    /// Require extra verification
    Verify,
    /// Block the transaction
    Block,
}

impl RiskLevel {
    /// Action paired with this risk level
    ///
    /// The pairing is fixed so a level can never ship with a mismatched
    /// action.
    pub fn recommended_action(&self) -> RecommendedAction {
        match self {
            RiskLevel::Low => RecommendedAction::Proceed,
            RiskLevel::Medium => RecommendedAction::Verify,
            RiskLevel::High => RecommendedAction::Block,
        }
    }
}

/// Risk assessment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityAssessment {
    /// Assessment ID
    pub assessment_id: Uuid,

    /// Risk level
    pub risk_level: RiskLevel,

    /// Recommended action
    pub recommended_action: RecommendedAction,

    /// Aggregate risk score (sum of evaluator contributions)
    pub risk_score: u32,

    /// Risk factors detected
    pub risk_factors: Vec<String>,

    /// Assessment timestamp
    pub assessed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_action_pairing() {
        assert_eq!(
            RiskLevel::Low.recommended_action(),
            RecommendedAction::Proceed
        );
        assert_eq!(
            RiskLevel::Medium.recommended_action(),
            RecommendedAction::Verify
        );
        assert_eq!(
            RiskLevel::High.recommended_action(),
            RecommendedAction::Block
        );
    }

    #[test]
    fn test_assessment_wire_shape() {
        let assessment = SecurityAssessment {
            assessment_id: Uuid::new_v4(),
            risk_level: RiskLevel::Medium,
            recommended_action: RecommendedAction::Verify,
            risk_score: 50,
            risk_factors: vec!["Low user reputation".to_string()],
            assessed_at: Utc::now(),
        };

        let json = serde_json::to_value(&assessment).unwrap();
        assert_eq!(json["risk_level"], "medium");
        assert_eq!(json["recommended_action"], "verify");
        assert_eq!(json["risk_score"], 50);
    }

    #[test]
    fn test_transaction_type_wire_shape() {
        let json = serde_json::to_value(TransactionType::Buy).unwrap();
        assert_eq!(json, "buy");
    }
}
