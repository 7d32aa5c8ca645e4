#![forbid(unsafe_code)]

//! Ishikawa (fishbone) diagram rendering, split into three headless stages:
//!
//! - [`layout`]: pure geometry from cause lists to a typed [`layout::FishboneLayout`]
//! - [`svg`]: deterministic SVG text from a layout
//! - [`raster`]: SVG to PNG via pure-Rust rasterization
//!
//! All work is CPU-bound; no stage performs I/O.

pub mod layout;
pub mod raster;
pub mod svg;

pub use layout::{FishboneLayout, layout_fishbone};
pub use raster::RasterError;
pub use svg::render_fishbone_svg;

use herring_core::CauseCategories;

/// Renders the fishbone diagram for `categories` straight to PNG bytes.
///
/// Equal inputs produce byte-equal output: layout and SVG generation are
/// deterministic and the PNG encoder introduces no timestamps or randomness.
pub fn render_fishbone_png(
    categories: &CauseCategories,
    title: &str,
) -> raster::Result<Vec<u8>> {
    let layout = layout::layout_fishbone(categories, title);
    let svg = svg::render_fishbone_svg(&layout);
    raster::svg_to_png(&svg)
}
