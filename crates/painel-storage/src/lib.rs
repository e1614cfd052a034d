//! Persistence for the painel dashboard's record arrays.
//!
//! One flat JSON array per upload [`Category`](painel_model::Category), keyed
//! by the category's storage key. This mirrors the original dashboard's
//! browser-storage layout (one serialized array per key) on top of SQLite.
//!
//! The importer never touches this store; callers import first and call
//! [`Storage::save`] only on success, so a failed upload leaves the
//! previously stored records for that category intact.

mod schema;
mod storage;

pub use storage::{Storage, StorageError};
