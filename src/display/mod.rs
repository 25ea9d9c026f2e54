//! Display formatting for terminal output

pub mod balance;
pub mod category;
pub mod transaction;
pub mod user;

pub use balance::{format_balance_summary, format_cycle};
pub use category::format_category_table;
pub use transaction::{format_recorded, format_transaction_register, format_transaction_row};
pub use user::{format_user_details, format_user_list};
