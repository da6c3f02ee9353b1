//! Handlers for the `check` command group.

use crate::cli::{output, CheckCommand};
use crate::config::Config;
use crate::error::Result;

/// Execute a `check` subcommand.
pub fn execute(command: &CheckCommand) -> Result<()> {
    match command {
        CheckCommand::Config(args) => check_config(args),
    }
}

fn check_config(args: &crate::cli::ConfigPathArg) -> Result<()> {
    let config = Config::load(&args.config)?;

    output::success(&format!("Configuration valid: {}", args.config.display()));
    output::section("Generator");
    output::field("Records", config.generator.records);
    output::field("Seed", config.generator.seed);
    output::field(
        "Customer range",
        format!(
            "[{}, {})",
            config.generator.customer_id_min, config.generator.customer_id_max
        ),
    );
    output::field(
        "Amount range",
        format!(
            "[{:.2}, {:.2})",
            config.generator.amount_min, config.generator.amount_max
        ),
    );
    output::field("Fraud rate", config.generator.fraud_rate);
    output::field("Start", config.generator.start.format("%Y-%m-%d %H:%M:%S"));
    output::field(
        "Interval",
        format!("{}h", config.generator.interval_hours),
    );

    output::section("Rules");
    output::field("High-value threshold", config.rules.high_value_threshold);
    output::field(
        "Suspicious countries",
        config
            .rules
            .suspicious_countries
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    );
    output::field(
        "Frequency threshold",
        config.rules.frequent_customer_threshold,
    );

    output::section("Report");
    output::field("CSV path", config.report.csv_path.display());
    output::field("Chart path", config.report.chart_path.display());
    output::field("Render chart", config.report.render_chart);

    Ok(())
}
