// src/specs/mod.rs
//! # Page specs
//!
//! Readers for the two page kinds whose layout is fixed, as opposed to the
//! per-country pages handled by [`crate::dispatch`].
//!
//! ## What lives here
//! - `index`: the top-level list of national parks. One `wikitable` row per
//!   country: name and link in the first cell, declared count in the third.
//! - `area`: an area's own page. The coordinate pair is read from the first
//!   latitude/longitude labels anywhere in the document.
//!
//! ## What does not live here
//! - Fetching. Specs take parsed documents; [`crate::core::net`] produces them.
//! - Deciding when to read what. That is the runner's and backfill's job.
//!
//! Both readers are offline-testable against inline fixtures.
pub mod area;
pub mod index;
