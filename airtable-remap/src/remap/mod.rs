//! Field-name to field-id remapping
//!
//! Pure, synchronous core of the tool: build a name → id index per table
//! from a metadata snapshot, then rewrite record field maps against it.

pub mod index;
pub mod rewrite;

pub use index::{FieldIndex, build_field_indexes};
pub use rewrite::{UnknownFieldError, rewrite_record, rewrite_table};
