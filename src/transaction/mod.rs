//! Transactions and the pages and endpoints for managing them.
//!
//! This module contains:
//! - The `Transaction` model and validation of user input
//! - The add form and transaction list views shared by the pages
//! - Route handlers for creating, deleting and clearing transactions

mod clear_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod form;
mod list;
mod transactions_page;

pub use clear_endpoint::clear_transactions_endpoint;
pub use core::{
    Transaction, TransactionId, ValidationError, format_date, parse_amount, parse_date,
    validate_amount, validate_label,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use transactions_page::get_transactions_page;

pub(crate) use core::parse_stored_date;
pub(crate) use form::transaction_form;
pub(crate) use list::{TRANSACTION_LIST_ID, transaction_list};
pub(crate) use transactions_page::transactions_header;
