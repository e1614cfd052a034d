//! Header resolution: fuzzy-match the first sheet row onto logical fields.

use calamine::Data;

use crate::coerce::cell_to_string;
use crate::schema::Schema;

/// Resolved column index per schema field, positionally aligned with
/// `schema.fields`. `None` means no candidate matched any header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HeaderMap {
    indices: Vec<Option<usize>>,
}

impl HeaderMap {
    pub fn index_of(&self, field_position: usize) -> Option<usize> {
        self.indices.get(field_position).copied().flatten()
    }

    /// Names of schema fields that did not resolve to any column.
    pub fn unresolved_fields(&self, schema: &Schema) -> Vec<&'static str> {
        schema
            .fields
            .iter()
            .zip(&self.indices)
            .filter(|(_, idx)| idx.is_none())
            .map(|(field, _)| field.name)
            .collect()
    }

    /// True when every anchor field of the schema is unresolved. Schemas
    /// without anchors never trip this.
    pub fn anchors_unresolved(&self, schema: &Schema) -> bool {
        !schema.anchors.is_empty()
            && schema.anchors.iter().all(|name| {
                schema
                    .field_position(name)
                    .and_then(|pos| self.index_of(pos))
                    .is_none()
            })
    }
}

/// Build a [`HeaderMap`] from the header row.
///
/// Every header cell is normalized to a lowercase, trimmed string (empty for
/// blank cells). For each field the ranked candidate list is walked in order,
/// and for each candidate the headers are scanned left to right; the first
/// non-empty header *containing* the candidate wins. An earlier-ranked
/// candidate therefore beats a later-ranked one regardless of column
/// position, and ties on the same candidate go to the leftmost column.
pub(crate) fn resolve(schema: &Schema, header_row: &[Data]) -> HeaderMap {
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_to_string(cell).to_lowercase().trim().to_owned())
        .collect();

    let indices = schema
        .fields
        .iter()
        .map(|field| find_column(&headers, field.candidates))
        .collect();

    let map = HeaderMap { indices };
    log::debug!(
        "resolved `{}` columns: {:?} (unresolved: {:?})",
        schema.label,
        map.indices,
        map.unresolved_fields(schema)
    );
    map
}

fn find_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    candidates.iter().find_map(|candidate| {
        headers
            .iter()
            .position(|header| !header.is_empty() && header.contains(candidate))
    })
}
