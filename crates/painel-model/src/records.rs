use serde::{Deserialize, Serialize};

/// One row of the generic budget/service-order ledger.
///
/// This is the record behind the main dashboard tables and metric cards.
/// String fields default to `""` and `valor` to `0`; a ledger row carries no
/// id of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerItem {
    pub orcamento: String,
    pub os: String,
    pub nome_parceiro: String,
    pub responsavel: String,
    pub valor: f64,
    pub descricao: String,
}

/// A budget waiting for client approval.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingApprovalItem {
    /// Spreadsheet-provided id, or `APR-<row>` synthesized by the importer.
    pub id: String,
    pub orcamento: String,
    pub parceiro: String,
    pub engenheiro: String,
    pub valor: f64,
    pub status: String,
    pub data: String,
}

/// An equipment return awaiting processing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnItem {
    /// Spreadsheet-provided id, or `DEV-<row>` synthesized by the importer.
    pub id: String,
    pub parceiro: String,
    pub equipamento: String,
    pub engenheiro: String,
    pub data_entrada: String,
    pub motivo_devolucao: String,
    /// Defaults to `"Pendente"` when the spreadsheet has no status column
    /// or leaves the cell blank.
    pub status: String,
    pub observacoes: String,
}

/// An internal transfer of equipment or budget between engineers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferItem {
    /// Spreadsheet-provided id, or `MOV-<row>` synthesized by the importer.
    pub id: String,
    pub orcamento: String,
    pub parceiro: String,
    pub engenheiro: String,
    pub tipo_movimentacao: String,
    pub data_movimentacao: String,
    /// Defaults to `"Pendente"`, like [`ReturnItem::status`].
    pub status: String,
    pub observacoes: String,
}
