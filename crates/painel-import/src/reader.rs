//! Workbook decoding and sheet selection.

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader, Sheets, Xls, Xlsx};

use crate::{ImportError, ImportWarning};

/// The first populated sheet of an uploaded workbook, row-major, with
/// calamine's typed cells preserved (numbers stay numbers, dates stay dates).
pub(crate) struct SheetData {
    pub name: String,
    pub rows: Vec<Vec<Data>>,
}

/// Decode `bytes` and return the first sheet, in workbook order, that has at
/// least one row. Later sheets are never inspected once one has data; callers
/// are expected to upload single-purpose files.
///
/// Decoding runs at most twice: a format-sniffing primary pass, then an
/// explicit `.xlsx`-then-`.xls` pass for buffers the sniffer rejects. A
/// fallback decode is recorded as a warning.
pub(crate) fn read_first_populated_sheet(
    bytes: &[u8],
    warnings: &mut Vec<ImportWarning>,
) -> Result<SheetData, ImportError> {
    let mut workbook = match open_workbook_auto_from_rs(Cursor::new(bytes)) {
        Ok(workbook) => workbook,
        Err(primary) => {
            log::warn!("primary workbook decode failed, trying fallback: {primary}");
            let fallback = Xlsx::new(Cursor::new(bytes))
                .map(Sheets::Xlsx)
                .or_else(|_| Xls::new(Cursor::new(bytes)).map(Sheets::Xls));
            match fallback {
                Ok(workbook) => {
                    warnings.push(ImportWarning::new(
                        "workbook was not recognized by format detection; decoded via fallback",
                    ));
                    workbook
                }
                Err(_) => {
                    return Err(ImportError::InvalidWorkbook {
                        reason: "the file could not be decoded as a spreadsheet".to_owned(),
                        source: Some(primary),
                    })
                }
            }
        }
    };

    let sheet_names = workbook.sheet_names().to_owned();
    if sheet_names.is_empty() {
        return Err(ImportError::InvalidWorkbook {
            reason: "the workbook has no sheets".to_owned(),
            source: None,
        });
    }

    for name in sheet_names {
        let range = match workbook.worksheet_range(&name) {
            Ok(range) => range,
            Err(err) => {
                // A sheet that fails to load does not disqualify the
                // workbook; a later sheet may still carry the data.
                warnings.push(ImportWarning::new(format!(
                    "failed to read sheet `{name}`: {err}"
                )));
                continue;
            }
        };

        if range.is_empty() {
            continue;
        }

        let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();
        log::debug!("selected sheet `{name}` with {} rows", rows.len());
        return Ok(SheetData { name, rows });
    }

    Err(ImportError::InvalidWorkbook {
        reason: "no sheet contains any data".to_owned(),
        source: None,
    })
}
