//! Core types shared across the pipeline: transactions and per-record rule
//! evaluations.

pub mod transaction;

pub use transaction::{Country, FlaggedTransaction, RuleHits, Transaction};
