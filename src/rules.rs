//! Static fraud rules and their combination into a detection flag.

use std::collections::HashMap;

use crate::config::RuleConfig;
use crate::domain::{FlaggedTransaction, RuleHits, Transaction};

/// Amount strictly above the configured threshold.
fn high_value(tx: &Transaction, config: &RuleConfig) -> bool {
    tx.amount > config.high_value_threshold
}

/// Country on the configured blocklist.
fn suspicious_country(tx: &Transaction, config: &RuleConfig) -> bool {
    config.suspicious_countries.contains(&tx.country)
}

/// Records per customer, needed before the frequency rule can run per row.
fn customer_counts(records: &[Transaction]) -> HashMap<u32, usize> {
    let mut counts = HashMap::new();
    for tx in records {
        *counts.entry(tx.customer_id).or_insert(0) += 1;
    }
    counts
}

/// Evaluate all rules against every record and attach the combined flag.
///
/// The three rules are independent; the detection flag is their logical OR,
/// with no precedence or weighting.
pub fn apply(records: Vec<Transaction>, config: &RuleConfig) -> Vec<FlaggedTransaction> {
    let counts = customer_counts(&records);

    records
        .into_iter()
        .map(|tx| {
            let hits = RuleHits {
                high_value: high_value(&tx, config),
                suspicious_country: suspicious_country(&tx, config),
                frequent_customer: counts
                    .get(&tx.customer_id)
                    .is_some_and(|&n| n > config.frequent_customer_threshold),
            };
            FlaggedTransaction {
                detected: hits.any(),
                rules: hits,
                transaction: tx,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Country;
    use chrono::NaiveDate;

    fn make_tx(id: u64, customer_id: u32, amount: f64, country: Country) -> Transaction {
        Transaction {
            id,
            customer_id,
            amount,
            country,
            fraudulent: false,
            timestamp: NaiveDate::from_ymd_opt(2023, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    fn config() -> RuleConfig {
        RuleConfig::default()
    }

    #[test]
    fn high_value_is_strictly_greater_than_threshold() {
        let flagged = apply(
            vec![
                make_tx(1, 1000, 5000.0, Country::France),
                make_tx(2, 1001, 5000.01, Country::France),
            ],
            &config(),
        );
        assert!(!flagged[0].rules.high_value);
        assert!(flagged[1].rules.high_value);
    }

    #[test]
    fn blocklisted_countries_fire_suspicious_rule() {
        let flagged = apply(
            vec![
                make_tx(1, 1000, 10.0, Country::Germany),
                make_tx(2, 1001, 10.0, Country::Spain),
                make_tx(3, 1002, 10.0, Country::Uk),
                make_tx(4, 1003, 10.0, Country::France),
            ],
            &config(),
        );
        assert!(flagged[0].rules.suspicious_country);
        assert!(flagged[1].rules.suspicious_country);
        assert!(!flagged[2].rules.suspicious_country);
        assert!(!flagged[3].rules.suspicious_country);
    }

    #[test]
    fn frequency_rule_fires_only_above_threshold() {
        // Customer 7 appears 5 times (at threshold, no hit), customer 8
        // appears 6 times (above threshold, every record hits).
        let mut records = Vec::new();
        for i in 0..5 {
            records.push(make_tx(i + 1, 7, 10.0, Country::France));
        }
        for i in 0..6 {
            records.push(make_tx(i + 6, 8, 10.0, Country::France));
        }

        let flagged = apply(records, &config());
        for ftx in &flagged {
            let expected = ftx.transaction.customer_id == 8;
            assert_eq!(ftx.rules.frequent_customer, expected, "id {}", ftx.transaction.id);
        }
    }

    #[test]
    fn detected_is_or_of_all_rules() {
        let records = vec![
            make_tx(1, 1000, 10.0, Country::France),    // nothing fires
            make_tx(2, 1001, 9000.0, Country::France),  // high value only
            make_tx(3, 1002, 10.0, Country::Germany),   // country only
            make_tx(4, 1003, 9000.0, Country::Spain),   // both
        ];

        let flagged = apply(records, &config());
        for ftx in &flagged {
            assert_eq!(ftx.detected, ftx.rules.any());
        }
        assert!(!flagged[0].detected);
        assert!(flagged[1].detected);
        assert!(flagged[2].detected);
        assert!(flagged[3].detected);
    }

    #[test]
    fn empty_blocklist_disables_country_rule() {
        let flagged = apply(
            vec![make_tx(1, 1000, 10.0, Country::Germany)],
            &RuleConfig {
                suspicious_countries: vec![],
                ..config()
            },
        );
        assert!(!flagged[0].rules.suspicious_country);
        assert!(!flagged[0].detected);
    }
}
