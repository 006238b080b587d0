//! LED wall quote library
//!
//! Sizing and costing engine for LED video walls, exposed for the CLI
//! and for use as a library.

pub mod catalog;
pub mod core;
pub mod i18n;
pub mod pricing;
pub mod quote;
pub mod report;
pub mod sizing;
