#![forbid(unsafe_code)]

//! `herring` is a headless 8D problem-solving report generator.
//!
//! Given a fully populated [`ReportRecord`], it draws the Ishikawa (fishbone)
//! cause-and-effect diagram for the record's six cause categories, embeds it in
//! a formatted single-sheet xlsx workbook, and returns the workbook bytes.
//!
//! The crate is library-first: input collection (forms, CLI, web) and output
//! delivery (files, downloads) are the caller's concern. One call, one
//! artifact, no shared state across calls.

pub use herring_core::*;

pub use herring_render::{
    FishboneLayout, RasterError, layout_fishbone, render_fishbone_png, render_fishbone_svg,
};
pub use herring_report::SUGGESTED_FILENAME;

/// Effect label drawn at the right end of the diagram spine.
pub const DIAGRAM_PROBLEM_TITLE: &str = "Problem";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Render(#[from] herring_render::RasterError),
    #[error(transparent)]
    Report(#[from] herring_report::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Renders the record's fishbone diagram and assembles the complete 8D
/// workbook, returning the xlsx bytes.
pub fn generate_report(record: &ReportRecord) -> Result<Vec<u8>> {
    tracing::debug!("rendering fishbone diagram");
    let png = herring_render::render_fishbone_png(&record.cause_categories, DIAGRAM_PROBLEM_TITLE)?;
    tracing::debug!(diagram_bytes = png.len(), "assembling 8D workbook");
    let bytes = herring_report::assemble(record, &png)?;
    tracing::debug!(workbook_bytes = bytes.len(), "report complete");
    Ok(bytes)
}
