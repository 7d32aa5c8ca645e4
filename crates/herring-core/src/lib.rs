#![forbid(unsafe_code)]

//! Data model for 8D corrective-action reports (headless).
//!
//! Design goals:
//! - one-shot transformation: a fully populated [`ReportRecord`] in, document bytes out
//! - deterministic, testable outputs (no hidden state, no I/O in this crate)
//! - serde-friendly shapes so any front end (CLI, web form) can supply records as JSON

pub mod model;

pub use model::{
    ActionItem, CauseCategories, Category, Header, Investigation, ReportRecord, TeamMember,
    parse_lines,
};
