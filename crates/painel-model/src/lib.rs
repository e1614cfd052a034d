//! In-memory record model for the painel dashboard.
//!
//! These are the normalized records the spreadsheet importer produces and the
//! storage layer persists. Field names serialize in camelCase to stay
//! byte-compatible with the JSON payloads the dashboard has historically
//! stored per upload category.

mod category;
mod records;

pub use category::Category;
pub use records::{LedgerItem, PendingApprovalItem, ReturnItem, TransferItem};
