//! Terminal display formatting

pub mod report;
pub mod transaction;

pub use report::format_category_report;
pub use transaction::{
    format_amount, format_timestamp_long, format_timestamp_short, format_transaction_register,
    format_transaction_row,
};
