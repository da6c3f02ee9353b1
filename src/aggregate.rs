//! Group-by reductions over the flagged transaction table.

use std::collections::BTreeMap;

use crate::domain::{Country, FlaggedTransaction};

/// Per-country KPI row for the report.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryKpi {
    pub country: Country,
    pub total_transactions: u64,
    pub fraudulent_transactions: u64,
    pub detected_fraud: u64,
    pub average_amount: f64,
}

/// Per-month trend row for the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrend {
    /// Calendar month key, `(year, month)`.
    pub month: (i32, u32),
    pub fraudulent: u64,
    pub detected: u64,
}

impl MonthlyTrend {
    /// Month label in `YYYY-MM` form.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.month.0, self.month.1)
    }
}

#[derive(Default)]
struct CountryAcc {
    count: u64,
    fraudulent: u64,
    detected: u64,
    amount_sum: f64,
}

/// Aggregate counts, fraud sums, and mean amount per country.
///
/// Rows come out in country key order; countries with no records are omitted.
pub fn by_country(records: &[FlaggedTransaction]) -> Vec<CountryKpi> {
    let mut groups: BTreeMap<Country, CountryAcc> = BTreeMap::new();
    for ftx in records {
        let acc = groups.entry(ftx.transaction.country).or_default();
        acc.count += 1;
        acc.fraudulent += u64::from(ftx.transaction.fraudulent);
        acc.detected += u64::from(ftx.detected);
        acc.amount_sum += ftx.transaction.amount;
    }

    groups
        .into_iter()
        .map(|(country, acc)| CountryKpi {
            country,
            total_transactions: acc.count,
            fraudulent_transactions: acc.fraudulent,
            detected_fraud: acc.detected,
            average_amount: acc.amount_sum / acc.count as f64,
        })
        .collect()
}

/// Aggregate fraud and detection sums per calendar month, in chronological
/// order.
pub fn by_month(records: &[FlaggedTransaction]) -> Vec<MonthlyTrend> {
    let mut groups: BTreeMap<(i32, u32), (u64, u64)> = BTreeMap::new();
    for ftx in records {
        let entry = groups.entry(ftx.transaction.month_key()).or_default();
        entry.0 += u64::from(ftx.transaction.fraudulent);
        entry.1 += u64::from(ftx.detected);
    }

    groups
        .into_iter()
        .map(|(month, (fraudulent, detected))| MonthlyTrend {
            month,
            fraudulent,
            detected,
        })
        .collect()
}

/// Raw delta `sum(fraudulent) - sum(detected)`, printed for parity with the
/// original report. Detection false positives lower it without indicating
/// improvement, so it is not a validated KPI.
pub fn fraud_reduction(records: &[FlaggedTransaction]) -> i64 {
    let fraudulent: i64 = records.iter().map(|f| i64::from(f.transaction.fraudulent)).sum();
    let detected: i64 = records.iter().map(|f| i64::from(f.detected)).sum();
    fraudulent - detected
}
