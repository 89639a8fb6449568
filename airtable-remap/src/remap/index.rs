//! Per-table lookup from field name to stable field id

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::api::models::Table;

/// Snapshot of one table's name → id mapping, built fresh from the metadata
/// API on every run. Names are the mutable display labels; ids survive
/// renames.
#[derive(Debug, Clone)]
pub struct FieldIndex {
    name_to_id: HashMap<String, String>,
}

impl FieldIndex {
    /// Build the index from a table's current field list.
    ///
    /// The metadata API does not produce duplicate field names within a
    /// table; if one ever appears the name is ambiguous and resolves to
    /// nothing, so a record referencing it fails the rewrite instead of
    /// being attributed to an arbitrary id.
    pub fn for_table(table: &Table) -> Self {
        let mut name_to_id: HashMap<String, String> = HashMap::with_capacity(table.fields.len());
        let mut ambiguous: HashSet<String> = HashSet::new();

        for field in &table.fields {
            if ambiguous.contains(&field.name) {
                continue;
            }
            if let Some(first_id) = name_to_id.remove(&field.name) {
                warn!(
                    "Table {} has duplicate field name \"{}\" ({} and {}); name will not resolve",
                    table.id, field.name, first_id, field.id
                );
                ambiguous.insert(field.name.clone());
                continue;
            }
            name_to_id.insert(field.name.clone(), field.id.clone());
        }

        Self { name_to_id }
    }

    /// Resolve a field name to its id. `None` means the name is absent from
    /// the current metadata snapshot (or ambiguous within it); the caller
    /// must treat that explicitly.
    pub fn field_id(&self, name: &str) -> Option<&str> {
        self.name_to_id.get(name).map(String::as_str)
    }

    /// Number of names that resolve to exactly one id.
    pub fn len(&self) -> usize {
        self.name_to_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.name_to_id.is_empty()
    }
}

/// Build one [`FieldIndex`] per table, keyed by table id.
///
/// Keying by id (rather than matching positionally against a second list)
/// makes the later record rewrite independent of the order any API call
/// returns tables in.
pub fn build_field_indexes(tables: &[Table]) -> HashMap<String, FieldIndex> {
    tables
        .iter()
        .map(|table| (table.id.clone(), FieldIndex::for_table(table)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Field;

    fn make_table(id: &str, name: &str, fields: &[(&str, &str)]) -> Table {
        Table {
            id: id.to_string(),
            name: name.to_string(),
            fields: fields
                .iter()
                .map(|(field_id, field_name)| Field {
                    id: field_id.to_string(),
                    name: field_name.to_string(),
                    field_type: "singleLineText".to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_index_resolves_known_names() {
        let table = make_table("tbl1", "Tasks", &[("fld1", "Name"), ("fld2", "Done")]);
        let index = FieldIndex::for_table(&table);

        assert_eq!(index.len(), 2);
        assert_eq!(index.field_id("Name"), Some("fld1"));
        assert_eq!(index.field_id("Done"), Some("fld2"));
    }

    #[test]
    fn test_index_misses_are_none_not_panic() {
        let table = make_table("tbl1", "Tasks", &[("fld1", "Name")]);
        let index = FieldIndex::for_table(&table);

        assert_eq!(index.field_id("Legacy"), None);
    }

    #[test]
    fn test_duplicate_name_does_not_resolve() {
        let table = make_table("tbl1", "Tasks", &[("fld1", "Name"), ("fld9", "Name")]);
        let index = FieldIndex::for_table(&table);

        assert_eq!(index.field_id("Name"), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_triplicate_name_still_ambiguous_and_others_resolve() {
        let table = make_table(
            "tbl1",
            "Tasks",
            &[
                ("fld1", "Name"),
                ("fld2", "Done"),
                ("fld9", "Name"),
                ("fldA", "Name"),
            ],
        );
        let index = FieldIndex::for_table(&table);

        assert_eq!(index.field_id("Name"), None);
        assert_eq!(index.field_id("Done"), Some("fld2"));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_indexes_keyed_by_table_id() {
        let tables = vec![
            make_table("tblA", "People", &[("fldA", "Email")]),
            make_table("tblB", "Orders", &[("fldB", "Total")]),
        ];
        let indexes = build_field_indexes(&tables);

        assert_eq!(indexes.len(), 2);
        assert_eq!(indexes["tblA"].field_id("Email"), Some("fldA"));
        assert_eq!(indexes["tblB"].field_id("Total"), Some("fldB"));
        assert_eq!(indexes["tblB"].field_id("Email"), None);
    }

    #[test]
    fn test_empty_field_list() {
        let table = make_table("tbl1", "Blank", &[]);
        let index = FieldIndex::for_table(&table);
        assert!(index.is_empty());
    }
}
