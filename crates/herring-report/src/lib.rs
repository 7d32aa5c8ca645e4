#![forbid(unsafe_code)]

//! 8D report workbook assembler.
//!
//! Consumes a [`herring_core::ReportRecord`] plus a pre-rendered diagram PNG and
//! emits a single-sheet xlsx workbook as bytes. Layout is a linear sequence of
//! blocks; each block emitter takes the current row cursor and returns the next
//! one, so emission order is explicit and blocks are testable in isolation.

pub mod sheet;

pub use sheet::{SUGGESTED_FILENAME, assemble};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}
