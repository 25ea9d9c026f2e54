//! allowance-cli - Personal income and expense tracker
//!
//! Records a user's income and expenses and reports a running balance over a
//! recurring accounting cycle (weekly or monthly).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: Tracing subscriber setup
//! - `models`: Core data models (users, transactions, categories, summaries)
//! - `storage`: JSON file storage layer
//! - `services`: Cycle resolution, balance aggregation and business logic
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use allowance_cli::models::{CategoryTable, RecurrenceKind};
//! use allowance_cli::services::{resolve_current_cycle, BalanceAggregator};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2025, 5, 15).unwrap();
//! let cycle = resolve_current_cycle(RecurrenceKind::Monthly, today);
//! let table = CategoryTable::builtin();
//! let aggregator = BalanceAggregator::new(&table);
//! let summary = aggregator.aggregate(RecurrenceKind::Monthly, &cycle, &[], &[]);
//! assert_eq!(summary.cycle_period_label, "MAY 2025");
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AllowanceError, AllowanceResult};
