//! Row normalization: raw cells to per-field values, with validity filtering
//! and id synthesis.

use calamine::Data;

use crate::coerce::{cell_to_string, coerce_number};
use crate::header::HeaderMap;
use crate::schema::{FieldKind, Schema};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Text(String),
    Number(f64),
}

/// One normalized row, positionally aligned with `schema.fields`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordValues<'s> {
    schema: &'s Schema,
    values: Vec<FieldValue>,
}

impl RecordValues<'_> {
    /// Text value of `field`, `""` for number fields.
    pub fn text(&self, field: &str) -> &str {
        match self.get(field) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Numeric value of `field`, `0.0` for text fields.
    pub fn number(&self, field: &str) -> f64 {
        match self.get(field) {
            Some(FieldValue::Number(v)) => *v,
            _ => 0.0,
        }
    }

    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.schema
            .field_position(field)
            .map(|pos| &self.values[pos])
    }

    fn has_identity(&self) -> bool {
        self.schema
            .identity
            .iter()
            .any(|field| !self.text(field).is_empty())
    }
}

/// Normalize `rows` (the sheet minus its header row) against a resolved
/// header map.
///
/// Blank rows are skipped; rows whose identity-bearing fields are all empty
/// are discarded. Skipped and discarded rows still consume their 1-based row
/// index, so synthesized ids reflect the original sheet position.
pub(crate) fn normalize_rows<'s>(
    schema: &'s Schema,
    headers: &HeaderMap,
    rows: &[Vec<Data>],
) -> Vec<RecordValues<'s>> {
    let mut records = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        if row.iter().all(is_blank_cell) {
            continue;
        }

        let mut values: Vec<FieldValue> = schema
            .fields
            .iter()
            .enumerate()
            .map(|(pos, field)| {
                let cell = headers
                    .index_of(pos)
                    .and_then(|col| row.get(col))
                    .unwrap_or(&Data::Empty);
                match field.kind {
                    FieldKind::Number => {
                        let coerced = coerce_number(cell);
                        if coerced.used_fallback {
                            log::debug!(
                                "row {}: coerced `{}` from text to {}",
                                row_index + 2,
                                field.name,
                                coerced.value
                            );
                        }
                        FieldValue::Number(coerced.value)
                    }
                    FieldKind::Text => {
                        let text = cell_to_string(cell);
                        if text.is_empty() {
                            FieldValue::Text(field.default.to_owned())
                        } else {
                            FieldValue::Text(text)
                        }
                    }
                }
            })
            .collect();

        if let (Some(prefix), Some(pos)) = (schema.id_prefix, schema.field_position("id")) {
            if matches!(&values[pos], FieldValue::Text(id) if id.is_empty()) {
                values[pos] = FieldValue::Text(format!("{prefix}-{}", row_index + 1));
            }
        }

        let record = RecordValues { schema, values };
        if record.has_identity() {
            records.push(record);
        }
    }

    records
}

fn is_blank_cell(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        _ => false,
    }
}
