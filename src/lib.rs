// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod backfill;
pub mod catalog;
pub mod detect;
pub mod dispatch;
pub mod extract;
pub mod file;
pub mod locate;
pub mod overrides;
pub mod progress;
pub mod report;
pub mod runner;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod log;
