//! Airtable Web API module
//!
//! Thin, unretried client over the two endpoints this tool consumes: the
//! base metadata API (tables + fields) and the record listing API.

pub mod client;
pub mod error;
pub mod models;

pub use client::AirtableClient;
pub use error::ApiError;
pub use models::{Field, Record, Table, TableDataset};
