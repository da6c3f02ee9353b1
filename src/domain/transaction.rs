//! Transaction data structures for rule-based fraud detection.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Countries a transaction can originate from.
///
/// The variant order is the key order used by the country aggregation, so KPI
/// report rows come out in a stable alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    France,
    Germany,
    Spain,
    #[serde(rename = "UK")]
    Uk,
}

impl Country {
    /// All countries, in aggregation key order.
    pub const ALL: [Country; 4] = [Country::France, Country::Germany, Country::Spain, Country::Uk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::France => "France",
            Country::Germany => "Germany",
            Country::Spain => "Spain",
            Country::Uk => "UK",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single synthetic transaction record.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Unique sequential identifier, starting at 1.
    pub id: u64,

    /// Customer identifier; repeats across records drive the frequency rule.
    pub customer_id: u32,

    /// Transaction amount.
    pub amount: f64,

    /// Originating country.
    pub country: Country,

    /// Ground-truth fraud label.
    pub fraudulent: bool,

    /// Record timestamp; strictly increasing at a fixed interval.
    pub timestamp: NaiveDateTime,
}

impl Transaction {
    /// Calendar month grouping key, `(year, month)`.
    pub fn month_key(&self) -> (i32, u32) {
        use chrono::Datelike;
        (self.timestamp.year(), self.timestamp.month())
    }
}

/// Outcome of evaluating each fraud rule against one record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleHits {
    pub high_value: bool,
    pub suspicious_country: bool,
    pub frequent_customer: bool,
}

impl RuleHits {
    /// True when any rule fired. Any single rule is sufficient for detection.
    pub fn any(&self) -> bool {
        self.high_value || self.suspicious_country || self.frequent_customer
    }
}

/// A transaction annotated with its rule evaluations and combined flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FlaggedTransaction {
    pub transaction: Transaction,
    pub rules: RuleHits,
    /// Combined detection flag: OR of the three rules.
    pub detected: bool,
}
