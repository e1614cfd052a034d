use std::fmt;

use serde::{Deserialize, Serialize};

/// Upload category. Each category owns one flat record array in storage,
/// keyed by [`Category::storage_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Generic budget/service-order ledger rows shown on the dashboard.
    Ledger,
    /// Budgets waiting for client approval.
    PendingApproval,
    /// Equipment returns.
    Return,
    /// Internal equipment/budget transfers.
    InternalTransfer,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Ledger,
        Category::PendingApproval,
        Category::Return,
        Category::InternalTransfer,
    ];

    /// Storage key for this category.
    ///
    /// The keys match the browser-storage keys of the original dashboard so
    /// existing persisted data keeps loading.
    pub const fn storage_key(self) -> &'static str {
        match self {
            Category::Ledger => "dashboard-data",
            Category::PendingApproval => "followup-data",
            Category::Return => "devolucao-data",
            Category::InternalTransfer => "movimentacao-data",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.storage_key())
    }
}
