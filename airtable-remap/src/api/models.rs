//! Airtable metadata and record models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single field (column) of a table.
///
/// `id` is stable for the lifetime of the field; `name` is the human-facing
/// label and may be renamed at any time. The record API keys payloads by
/// `name`, which is exactly what this tool undoes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    /// Airtable type tag (e.g., "singleLineText", "checkbox")
    #[serde(rename = "type")]
    pub field_type: String,
}

/// A table within a base, with its current field list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub fields: Vec<Field>,
}

/// One record (row) of a table.
///
/// `fields` maps field name to an opaque value before the rewrite and field
/// id to that same value afterwards. Values pass through untouched; only
/// keys change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// All records of one table, tagged with the table's identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDataset {
    pub table_id: String,
    pub table_name: String,
    pub records: Vec<Record>,
}

/// Response of `GET /v0/meta/bases/{base_id}/tables`.
#[derive(Debug, Deserialize)]
pub struct ListTablesResponse {
    pub tables: Vec<Table>,
}

/// One page of `GET /v0/{base_id}/{table_id}`.
#[derive(Debug, Deserialize)]
pub struct ListRecordsResponse {
    pub records: Vec<Record>,
    /// Cursor for the next page; absent on the last page.
    pub offset: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_list_response() {
        let json = r#"{
            "tables": [
                {
                    "id": "tblTasks00000001",
                    "name": "Tasks",
                    "primaryFieldId": "fldName000000001",
                    "fields": [
                        {"id": "fldName000000001", "name": "Name", "type": "singleLineText"},
                        {"id": "fldDone000000002", "name": "Done", "type": "checkbox"}
                    ]
                }
            ]
        }"#;

        let parsed: ListTablesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.tables.len(), 1);
        let table = &parsed.tables[0];
        assert_eq!(table.id, "tblTasks00000001");
        assert_eq!(table.name, "Tasks");
        assert_eq!(table.fields.len(), 2);
        assert_eq!(table.fields[0].field_type, "singleLineText");
    }

    #[test]
    fn test_parse_record_page_with_offset() {
        let json = r#"{
            "records": [
                {
                    "id": "recAAA",
                    "createdTime": "2024-01-01T00:00:00.000Z",
                    "fields": {"Name": "Ship", "Done": true}
                }
            ],
            "offset": "itrNext/recAAA"
        }"#;

        let page: ListRecordsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.offset.as_deref(), Some("itrNext/recAAA"));
        assert_eq!(page.records[0].fields["Done"], serde_json::json!(true));
    }

    #[test]
    fn test_parse_record_without_fields() {
        // Airtable omits "fields" entirely for records with no populated cells
        let json = r#"{"records": [{"id": "recEmpty"}]}"#;
        let page: ListRecordsResponse = serde_json::from_str(json).unwrap();
        assert!(page.records[0].fields.is_empty());
        assert!(page.offset.is_none());
    }
}
