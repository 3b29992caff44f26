//! Lookback-window filtering over transaction history

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::types::User;

/// Point-in-time view of a user's in-window activity
///
/// Read once per assessment and shared by the frequency and volume checks,
/// so both see the same history even when evaluated concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSnapshot {
    /// Number of records inside the window
    pub transaction_count: usize,

    /// Sum of record amounts inside the window
    pub total_volume: Decimal,
}

/// Collect count and volume of history records inside the lookback window.
///
/// A record exactly at the cutoff is excluded (strict greater-than).
pub fn window_snapshot(user: &User, now: DateTime<Utc>, window_hours: i64) -> WindowSnapshot {
    let cutoff = now - Duration::hours(window_hours);

    let mut transaction_count = 0;
    let mut total_volume = Decimal::ZERO;
    for tx in &user.transaction_history {
        if tx.timestamp > cutoff {
            transaction_count += 1;
            total_volume += tx.amount;
        }
    }

    WindowSnapshot {
        transaction_count,
        total_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{TransactionRecord, TransactionType};

    fn user_with_history(history: Vec<TransactionRecord>) -> User {
        User {
            id: "user-1".to_string(),
            reputation_score: 50,
            transaction_history: history,
        }
    }

    fn record(timestamp: DateTime<Utc>, amount: i64) -> TransactionRecord {
        TransactionRecord {
            timestamp,
            amount: Decimal::from(amount),
            tx_type: TransactionType::Buy,
            domain_name: "example.eth".to_string(),
        }
    }

    #[test]
    fn test_empty_history() {
        let user = user_with_history(vec![]);
        let snapshot = window_snapshot(&user, Utc::now(), 24);

        assert_eq!(snapshot.transaction_count, 0);
        assert_eq!(snapshot.total_volume, Decimal::ZERO);
    }

    #[test]
    fn test_old_records_excluded() {
        let now = Utc::now();
        let user = user_with_history(vec![
            record(now - Duration::hours(30), 100),
            record(now - Duration::hours(25), 200),
            record(now - Duration::hours(1), 50),
        ]);

        let snapshot = window_snapshot(&user, now, 24);
        assert_eq!(snapshot.transaction_count, 1);
        assert_eq!(snapshot.total_volume, Decimal::from(50));
    }

    #[test]
    fn test_record_at_exact_cutoff_excluded() {
        let now = Utc::now();
        let user = user_with_history(vec![record(now - Duration::hours(24), 100)]);

        let snapshot = window_snapshot(&user, now, 24);
        assert_eq!(snapshot.transaction_count, 0);
        assert_eq!(snapshot.total_volume, Decimal::ZERO);
    }

    #[test]
    fn test_record_just_inside_cutoff_included() {
        let now = Utc::now();
        let user = user_with_history(vec![record(
            now - Duration::hours(24) + Duration::milliseconds(1),
            100,
        )]);

        let snapshot = window_snapshot(&user, now, 24);
        assert_eq!(snapshot.transaction_count, 1);
        assert_eq!(snapshot.total_volume, Decimal::from(100));
    }

    #[test]
    fn test_volume_sums_all_in_window_records() {
        let now = Utc::now();
        let user = user_with_history(vec![
            record(now - Duration::hours(2), 10),
            record(now - Duration::hours(4), 20),
            record(now - Duration::hours(6), 30),
        ]);

        let snapshot = window_snapshot(&user, now, 24);
        assert_eq!(snapshot.transaction_count, 3);
        assert_eq!(snapshot.total_volume, Decimal::from(60));
    }
}
