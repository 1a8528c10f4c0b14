//! Terminal front end for the CLT vs PJ comparison.
//!
//! Builds input records from flags or a CSV file, reads rate overrides from
//! TOML, and renders the comparison as a table. All fiscal logic lives in
//! `clt_pj_core`.

pub mod config;
pub mod csv_loader;
pub mod format;
pub mod logging;
pub mod report;
pub mod utils;
