//! Pipeline orchestration.
//!
//! Wires the stages in their fixed order: generate, annotate with rules,
//! aggregate, write the CSV report, render the trend chart. Each stage runs
//! exactly once; there is no retry or partial-result recovery.

use tracing::{debug, info};

use crate::aggregate::{self, CountryKpi, MonthlyTrend};
use crate::chart;
use crate::config::Config;
use crate::domain::FlaggedTransaction;
use crate::error::Result;
use crate::{generator, report, rules};

/// Everything a single pipeline run produced, for the CLI layer to print.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub transactions: Vec<FlaggedTransaction>,
    pub country_kpis: Vec<CountryKpi>,
    pub monthly_trends: Vec<MonthlyTrend>,
    /// Raw `sum(fraudulent) - sum(detected)` delta, kept for output parity.
    pub fraud_reduction: i64,
}

pub struct App;

impl App {
    /// Execute the full pipeline against `config`.
    pub fn run(config: &Config) -> Result<PipelineOutcome> {
        let records = generator::generate(&config.generator);
        debug!(records = records.len(), seed = config.generator.seed, "table generated");

        let flagged = rules::apply(records, &config.rules);
        let detected: u64 = flagged.iter().map(|f| u64::from(f.detected)).sum();
        info!(
            records = flagged.len(),
            detected, "fraud rules applied"
        );

        let country_kpis = aggregate::by_country(&flagged);
        let monthly_trends = aggregate::by_month(&flagged);
        let fraud_reduction = aggregate::fraud_reduction(&flagged);

        report::write_country_csv(&country_kpis, &config.report.csv_path)?;

        if config.report.render_chart {
            chart::render_trend_chart(&monthly_trends, &config.report.chart_path)?;
        } else {
            debug!("chart rendering disabled");
        }

        Ok(PipelineOutcome {
            transactions: flagged,
            country_kpis,
            monthly_trends,
            fraud_reduction,
        })
    }
}
