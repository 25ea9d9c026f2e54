//! Core data models for allowance-cli
//!
//! Users, transactions, the category registry and the value types produced by
//! cycle resolution and balance aggregation.

pub mod category;
pub mod cycle;
pub mod ids;
pub mod money;
pub mod recurrence;
pub mod summary;
pub mod transaction;
pub mod user;

pub use category::{CategoryFilter, CategoryInfo, CategoryKey, CategoryTable};
pub use cycle::CyclePeriod;
pub use ids::{TransactionId, UserId};
pub use money::Money;
pub use recurrence::RecurrenceKind;
pub use summary::{BalanceSummary, TransactionView};
pub use transaction::{Transaction, TransactionType};
pub use user::User;
