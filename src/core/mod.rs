// src/core/mod.rs

pub mod angle;
pub mod net;
pub mod query;
pub mod sanitize;

pub use query::Document;
