//! CSV serialization of the country KPI aggregation.

use std::path::Path;

use tracing::info;

use crate::aggregate::CountryKpi;
use crate::error::Result;

const HEADER: [&str; 5] = [
    "Country",
    "TotalTransactions",
    "FraudulentTransactions",
    "DetectedFraud",
    "AverageTransactionAmount",
];

/// Render the KPI rows as CSV text, header included.
pub fn country_csv(kpis: &[CountryKpi]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADER)?;
    for kpi in kpis {
        writer.write_record([
            kpi.country.as_str().to_string(),
            kpi.total_transactions.to_string(),
            kpi.fraudulent_transactions.to_string(),
            kpi.detected_fraud.to_string(),
            format!("{:.2}", kpi.average_amount),
        ])?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e.to_string()).into())
}

/// Write the country KPI report to disk. Failure is fatal to the run.
pub fn write_country_csv<P: AsRef<Path>>(kpis: &[CountryKpi], path: P) -> Result<()> {
    let csv = country_csv(kpis)?;
    std::fs::write(path.as_ref(), csv)?;
    info!(path = %path.as_ref().display(), rows = kpis.len(), "KPI report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Country;

    fn sample_kpis() -> Vec<CountryKpi> {
        vec![
            CountryKpi {
                country: Country::France,
                total_transactions: 240,
                fraudulent_transactions: 12,
                detected_fraud: 130,
                average_amount: 5012.3456,
            },
            CountryKpi {
                country: Country::Uk,
                total_transactions: 260,
                fraudulent_transactions: 10,
                detected_fraud: 120,
                average_amount: 4987.0,
            },
        ]
    }

    #[test]
    fn header_matches_report_contract() {
        let csv = country_csv(&sample_kpis()).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Country,TotalTransactions,FraudulentTransactions,DetectedFraud,AverageTransactionAmount"
        );
    }

    #[test]
    fn one_row_per_country_with_two_decimal_amounts() {
        let csv = country_csv(&sample_kpis()).unwrap();
        let rows: Vec<&str> = csv.lines().skip(1).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "France,240,12,130,5012.35");
        assert_eq!(rows[1], "UK,260,10,120,4987.00");
    }

    #[test]
    fn writes_report_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kpi.csv");
        write_country_csv(&sample_kpis(), &path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, country_csv(&sample_kpis()).unwrap());
    }
}
