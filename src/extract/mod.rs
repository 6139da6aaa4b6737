// src/extract/mod.rs
//! Extractors: walk a located table or list and produce an [`AreaListing`]
//! keyed by raw name text.
//!
//! [`AreaListing`]: crate::catalog::AreaListing

pub mod cells;
pub mod list;
pub mod table;
pub mod variants;

pub use cells::{read_labeled_pair, resolve_link, resolve_row_coordinates};
pub use list::list;
pub use table::{multi_table, single_table};
