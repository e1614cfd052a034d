use std::path::Path;
use std::sync::{Arc, Mutex};

use painel_model::Category;
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Category-keyed record store. Cheap to clone; all clones share one
/// connection.
#[derive(Debug, Clone)]
pub struct Storage {
    conn: Arc<Mutex<Connection>>,
}

impl Storage {
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_conn(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_conn(Connection::open_in_memory()?)
    }

    fn from_conn(conn: Connection) -> Result<Self> {
        crate::schema::init(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Load the record array stored for `category`. A category that has never
    /// been saved yields an empty vec, like the original dashboard's missing
    /// browser-storage key.
    pub fn load<T: DeserializeOwned>(&self, category: Category) -> Result<Vec<T>> {
        let conn = self.conn.lock().expect("storage mutex poisoned");
        let json: Option<String> = conn
            .query_row(
                "SELECT value FROM records WHERE category = ?1",
                params![category.storage_key()],
                |row| row.get(0),
            )
            .optional()?;

        match json {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the record array stored for `category`. Each upload owns the
    /// whole array; there is no merging.
    pub fn save<T: Serialize>(&self, category: Category, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        let conn = self.conn.lock().expect("storage mutex poisoned");
        conn.execute(
            "INSERT INTO records (category, value, updated_at) VALUES (?1, ?2, CURRENT_TIMESTAMP)
             ON CONFLICT(category) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            params![category.storage_key(), json],
        )?;
        Ok(())
    }

    /// Drop the stored array for `category` (the settings screen's
    /// clear-data action).
    pub fn clear(&self, category: Category) -> Result<()> {
        let conn = self.conn.lock().expect("storage mutex poisoned");
        conn.execute(
            "DELETE FROM records WHERE category = ?1",
            params![category.storage_key()],
        )?;
        Ok(())
    }
}
