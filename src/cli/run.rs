//! Handler for the `run` command.

use tracing::info;

use crate::aggregate::CountryKpi;
use crate::app::{App, PipelineOutcome};
use crate::cli::{output, RunArgs};
use crate::config::Config;
use crate::domain::FlaggedTransaction;
use crate::error::Result;

const PREVIEW_ROWS: usize = 5;

/// Execute the run command.
pub fn execute(args: &RunArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(seed) = args.seed {
        config.generator.seed = seed;
    }
    if let Some(records) = args.records {
        config.generator.records = records;
    }
    if let Some(ref path) = args.csv_out {
        config.report.csv_path = path.clone();
    }
    if let Some(ref path) = args.chart_out {
        config.report.chart_path = path.clone();
    }
    if args.no_chart {
        config.report.render_chart = false;
    }
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    // Overrides may have invalidated the loaded configuration
    config.validate()?;
    config.init_logging();

    info!(
        records = config.generator.records,
        seed = config.generator.seed,
        "fraudlens starting"
    );

    let outcome = App::run(&config)?;

    print_preview(&outcome.transactions);
    output::note(&format!(
        "Fraud reduced by applying new rules: {} cases",
        outcome.fraud_reduction
    ));
    print_country_kpis(&outcome.country_kpis);
    print_outputs(&config, &outcome);

    info!("fraudlens finished");
    Ok(())
}

fn print_preview(transactions: &[FlaggedTransaction]) {
    output::section("Generated Transactions (preview)");
    println!(
        "  {:>6} {:>10} {:>10} {:10} {:>6} {:>9} {:19}",
        "ID", "Customer", "Amount", "Country", "Fraud", "Detected", "Timestamp"
    );
    println!(
        "  {:─>6} {:─>10} {:─>10} {:─<10} {:─>6} {:─>9} {:─<19}",
        "", "", "", "", "", "", ""
    );

    for ftx in transactions.iter().take(PREVIEW_ROWS) {
        let tx = &ftx.transaction;
        println!(
            "  {:>6} {:>10} {:>10.2} {:10} {:>6} {:>9} {:19}",
            tx.id,
            tx.customer_id,
            tx.amount,
            tx.country.as_str(),
            if tx.fraudulent { 1 } else { 0 },
            if ftx.detected { 1 } else { 0 },
            tx.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
        );
    }
}

fn print_country_kpis(kpis: &[CountryKpi]) {
    output::section("Country KPI Report");
    println!(
        "  {:10} {:>8} {:>12} {:>10} {:>12}",
        "Country", "Txns", "Fraudulent", "Detected", "Avg Amount"
    );
    println!(
        "  {:─<10} {:─>8} {:─>12} {:─>10} {:─>12}",
        "", "", "", "", ""
    );

    for kpi in kpis {
        println!(
            "  {:10} {:>8} {:>12} {:>10} {:>12.2}",
            kpi.country.as_str(),
            kpi.total_transactions,
            kpi.fraudulent_transactions,
            kpi.detected_fraud,
            kpi.average_amount
        );
    }
}

fn print_outputs(config: &Config, outcome: &PipelineOutcome) {
    output::section("Outputs");
    output::success("KPI report written");
    output::field("Report", config.report.csv_path.display());
    if config.report.render_chart {
        output::success("Trend chart written");
        output::field("Chart", config.report.chart_path.display());
        output::field("Months plotted", outcome.monthly_trends.len());
    } else {
        output::note("Chart rendering disabled.");
    }
}
