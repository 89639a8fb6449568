//! Fetch → index → fetch → rewrite pipeline
//!
//! Each stage returns an immutable value consumed by the next; there is no
//! shared accumulator threaded across stages. Tables are matched to their
//! field indexes by table id, never by list position.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::api::{AirtableClient, TableDataset};
use crate::remap::{build_field_indexes, rewrite_table};

/// Export every table of a base with id-keyed records.
///
/// Sequential by design: each table's records are fetched completely before
/// the next table starts, and the rewrite runs only after all fetches are
/// done. Output order follows the metadata API's table order.
pub async fn run(client: &AirtableClient, base_id: &str) -> Result<Vec<TableDataset>> {
    let tables = client
        .list_tables(base_id)
        .await
        .with_context(|| format!("Failed to fetch table metadata for base {base_id}"))?;
    info!("Found {} tables for base {}", tables.len(), base_id);

    let indexes = build_field_indexes(&tables);

    let mut fetched = Vec::with_capacity(tables.len());
    for table in &tables {
        info!("Fetching records for table {} (\"{}\")", table.id, table.name);
        let records = client
            .list_records(base_id, &table.id)
            .await
            .with_context(|| {
                format!("Failed to fetch records for table {} (\"{}\")", table.id, table.name)
            })?;
        info!("  {} records", records.len());
        fetched.push((table, records));
    }

    let mut datasets = Vec::with_capacity(fetched.len());
    for (table, records) in &fetched {
        // Index was built from the same table list, so the id is present.
        let index = indexes
            .get(&table.id)
            .with_context(|| format!("No field index for table {}", table.id))?;
        debug!(
            "Rewriting table {} against {} resolvable field names",
            table.id,
            index.len()
        );
        let dataset = rewrite_table(&table.id, &table.name, records, index)
            .with_context(|| format!("Failed to rewrite records of table {}", table.id))?;
        datasets.push(dataset);
    }

    Ok(datasets)
}
