//! Reputation-based risk scoring

use crate::types::User;

/// Contribution for reputation below 20
pub const VERY_LOW_REPUTATION_RISK: u32 = 80;
/// Contribution for reputation 20-49
pub const LOW_REPUTATION_RISK: u32 = 50;
/// Contribution for reputation 50-69
pub const FAIR_REPUTATION_RISK: u32 = 30;
/// Contribution for reputation 70 and above
pub const GOOD_REPUTATION_RISK: u32 = 10;

/// Scores risk from a user's standing reputation
pub struct ReputationScorer;

impl ReputationScorer {
    /// Risk contribution for the user's current reputation
    ///
    /// Pure function of the reputation score; no side effects.
    pub fn contribution(user: &User) -> u32 {
        match user.reputation_score {
            0..=19 => VERY_LOW_REPUTATION_RISK,
            20..=49 => LOW_REPUTATION_RISK,
            50..=69 => FAIR_REPUTATION_RISK,
            _ => GOOD_REPUTATION_RISK,
        }
    }
}
