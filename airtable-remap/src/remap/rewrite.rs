//! Rewrite record field keys from display names to stable ids

use serde_json::Map;
use thiserror::Error;

use super::index::FieldIndex;
use crate::api::models::{Record, TableDataset};

/// A record referenced a field name that is absent from the table's current
/// metadata snapshot. This happens when a field is renamed or deleted between
/// the metadata fetch and the record fetch; the run aborts rather than drop
/// or misattribute the value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("record {record_id} in table {table_id} references unknown field \"{field_name}\"")]
pub struct UnknownFieldError {
    pub field_name: String,
    pub table_id: String,
    pub record_id: String,
}

/// Produce a copy of `record` whose field map is keyed by field id instead of
/// field name. Values move through unchanged; the original name keys are
/// discarded.
pub fn rewrite_record(
    record: &Record,
    index: &FieldIndex,
    table_id: &str,
) -> Result<Record, UnknownFieldError> {
    let mut fields = Map::with_capacity(record.fields.len());
    for (name, value) in &record.fields {
        let field_id = index.field_id(name).ok_or_else(|| UnknownFieldError {
            field_name: name.clone(),
            table_id: table_id.to_string(),
            record_id: record.id.clone(),
        })?;
        fields.insert(field_id.to_string(), value.clone());
    }

    Ok(Record {
        id: record.id.clone(),
        fields,
        created_time: record.created_time.clone(),
    })
}

/// Rewrite every record of a table. Fails on the first unresolvable field
/// name; an empty record list rewrites to an empty record list.
pub fn rewrite_table(
    table_id: &str,
    table_name: &str,
    records: &[Record],
    index: &FieldIndex,
) -> Result<TableDataset, UnknownFieldError> {
    let records = records
        .iter()
        .map(|record| rewrite_record(record, index, table_id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TableDataset {
        table_id: table_id.to_string(),
        table_name: table_name.to_string(),
        records,
    })
}
