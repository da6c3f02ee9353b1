//! Fraudlens - rule-based fraud detection KPI pipeline.
//!
//! Generates a seeded synthetic transaction table, flags potential fraud with
//! three static threshold rules, aggregates KPIs per country and per month,
//! writes a CSV report, and renders a monthly trend chart. Control flow is
//! strictly sequential: generate → annotate → aggregate → report → chart.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files with built-in defaults
//! - [`domain`] - Core types: transactions, rule hits, detection flags
//! - [`generator`] - Seeded synthetic transaction generation
//! - [`rules`] - The three fraud rules and their OR combination
//! - [`aggregate`] - Country and month group-by reductions
//! - [`report`] - CSV serialization of the country KPIs
//! - [`chart`] - Monthly trend chart rendering
//! - [`app`] - Pipeline orchestration
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use fraudlens::app::App;
//! use fraudlens::config::Config;
//!
//! fn main() -> fraudlens::error::Result<()> {
//!     let config = Config::default();
//!     let outcome = App::run(&config)?;
//!     println!("{} records flagged", outcome.transactions.len());
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod report;
pub mod rules;
