//! Spreadsheet ingestion for the painel dashboard.
//!
//! Staff upload spreadsheets with unconstrained column layouts; this crate
//! heuristically maps headers onto a fixed target schema, normalizes cell
//! values (pt-BR currency strings included), filters out rows with no usable
//! content, and produces the typed records in [`painel_model`].
//!
//! One parameterized pipeline backs four upload categories:
//!
//! - [`import_ledger_items`]: generic budget/service-order rows
//! - [`import_pending_approvals`]: budgets waiting for approval
//! - [`import_returns`]: equipment returns
//! - [`import_internal_transfers`]: internal transfers
//!
//! Each call is a pure function from file bytes to records; persistence of
//! the result belongs to the caller. A failed import produces no partial
//! output.

use painel_model::{LedgerItem, PendingApprovalItem, ReturnItem, TransferItem};

mod coerce;
mod header;
mod normalize;
mod reader;
mod schema;

use normalize::RecordValues;
use schema::Schema;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The caller handed over a zero-length buffer.
    #[error("no file contents were provided")]
    EmptyFile,
    /// Neither decode pass produced a workbook with a usable sheet.
    #[error("invalid workbook: {reason}")]
    InvalidWorkbook {
        reason: String,
        #[source]
        source: Option<calamine::Error>,
    },
    /// None of the variant's anchor columns were found in the header row.
    #[error("could not identify any of the required columns: {}", .anchors.join(", "))]
    MissingRequiredColumns { anchors: Vec<&'static str> },
    /// Headers resolved, but every data row was discarded as empty or
    /// identity-less.
    #[error("no valid rows found in sheet `{sheet}`")]
    NoValidRows { sheet: String },
}

/// Non-fatal observation made while importing (fallback decoder used,
/// columns left unresolved, unreadable sheet skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportWarning {
    pub message: String,
}

impl ImportWarning {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Records extracted from one uploaded file.
#[derive(Debug)]
pub struct ImportResult<T> {
    /// Normalized records, in input row order.
    pub items: Vec<T>,
    /// Name of the sheet the data came from (the first sheet with any rows).
    pub sheet_name: String,
    pub warnings: Vec<ImportWarning>,
}

/// Import generic ledger rows (orçamento / OS / parceiro / responsável /
/// valor / descrição).
///
/// This is the strictest variant: the sheet must resolve at least one of the
/// `responsavel`, `orcamento`, or `os` columns.
pub fn import_ledger_items(bytes: &[u8]) -> Result<ImportResult<LedgerItem>, ImportError> {
    extract(bytes, &schema::LEDGER, |row| LedgerItem {
        orcamento: row.text("orcamento").to_owned(),
        os: row.text("os").to_owned(),
        nome_parceiro: row.text("nome_parceiro").to_owned(),
        responsavel: row.text("responsavel").to_owned(),
        valor: row.number("valor"),
        descricao: row.text("descricao").to_owned(),
    })
}

/// Import budgets waiting for approval. Rows without an id column get
/// `APR-<row>` ids.
pub fn import_pending_approvals(
    bytes: &[u8],
) -> Result<ImportResult<PendingApprovalItem>, ImportError> {
    extract(bytes, &schema::PENDING_APPROVAL, |row| PendingApprovalItem {
        id: row.text("id").to_owned(),
        orcamento: row.text("orcamento").to_owned(),
        parceiro: row.text("parceiro").to_owned(),
        engenheiro: row.text("engenheiro").to_owned(),
        valor: row.number("valor"),
        status: row.text("status").to_owned(),
        data: row.text("data").to_owned(),
    })
}

/// Import equipment returns. Missing ids become `DEV-<row>`; a missing or
/// blank status becomes `"Pendente"`.
pub fn import_returns(bytes: &[u8]) -> Result<ImportResult<ReturnItem>, ImportError> {
    extract(bytes, &schema::RETURN, |row| ReturnItem {
        id: row.text("id").to_owned(),
        parceiro: row.text("parceiro").to_owned(),
        equipamento: row.text("equipamento").to_owned(),
        engenheiro: row.text("engenheiro").to_owned(),
        data_entrada: row.text("data_entrada").to_owned(),
        motivo_devolucao: row.text("motivo_devolucao").to_owned(),
        status: row.text("status").to_owned(),
        observacoes: row.text("observacoes").to_owned(),
    })
}

/// Import internal transfers. Missing ids become `MOV-<row>`; a missing or
/// blank status becomes `"Pendente"`.
pub fn import_internal_transfers(
    bytes: &[u8],
) -> Result<ImportResult<TransferItem>, ImportError> {
    extract(bytes, &schema::INTERNAL_TRANSFER, |row| TransferItem {
        id: row.text("id").to_owned(),
        orcamento: row.text("orcamento").to_owned(),
        parceiro: row.text("parceiro").to_owned(),
        engenheiro: row.text("engenheiro").to_owned(),
        tipo_movimentacao: row.text("tipo_movimentacao").to_owned(),
        data_movimentacao: row.text("data_movimentacao").to_owned(),
        status: row.text("status").to_owned(),
        observacoes: row.text("observacoes").to_owned(),
    })
}

/// The shared pipeline: decode → select sheet → resolve headers → normalize
/// rows → build typed records.
fn extract<T>(
    bytes: &[u8],
    schema: &Schema,
    build: impl Fn(&RecordValues<'_>) -> T,
) -> Result<ImportResult<T>, ImportError> {
    if bytes.is_empty() {
        return Err(ImportError::EmptyFile);
    }

    let mut warnings = Vec::new();
    let sheet = reader::read_first_populated_sheet(bytes, &mut warnings)?;

    // The selected sheet always has at least one row, but stay total.
    let Some((header_row, data_rows)) = sheet.rows.split_first() else {
        return Err(ImportError::NoValidRows { sheet: sheet.name });
    };

    let headers = header::resolve(schema, header_row);
    if headers.anchors_unresolved(schema) {
        return Err(ImportError::MissingRequiredColumns {
            anchors: schema.anchors.to_vec(),
        });
    }
    for field in headers.unresolved_fields(schema) {
        warnings.push(ImportWarning::new(format!(
            "no column matched `{field}`; its default will be used"
        )));
    }

    let records = normalize::normalize_rows(schema, &headers, data_rows);
    if records.is_empty() {
        return Err(ImportError::NoValidRows {
            sheet: sheet.name,
        });
    }
    log::debug!(
        "imported {} `{}` records from sheet `{}`",
        records.len(),
        schema.label,
        sheet.name
    );

    Ok(ImportResult {
        items: records.iter().map(&build).collect(),
        sheet_name: sheet.name,
        warnings,
    })
}
