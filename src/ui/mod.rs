//! Presentation layer
//!
//! Turns run results into log-ready text. Nothing here prints directly;
//! callers decide where the lines go.

pub mod report;
