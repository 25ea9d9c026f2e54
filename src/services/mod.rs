//! Service layer for allowance-cli
//!
//! Cycle resolution and balance aggregation, plus the user, transaction and
//! category operations built on the storage layer.

pub mod balance;
pub mod category;
pub mod cycle;
pub mod transaction;
pub mod user;

pub use balance::{summarize_current_cycle, BalanceAggregator, BalanceService};
pub use category::CategoryService;
pub use cycle::{cycle_period_label, previous_cycle, resolve_current_cycle};
pub use transaction::{CreateTransactionInput, TransactionService};
pub use user::UserService;
