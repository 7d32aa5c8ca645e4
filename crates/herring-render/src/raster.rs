#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    #[error("failed to parse SVG")]
    SvgParse,
    #[error("failed to allocate pixmap for raster rendering")]
    PixmapAlloc,
    #[error("failed to encode PNG")]
    PngEncode,
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Family names tried in order before falling back to any installed sans face.
const PREFERRED_SANS: [&str; 6] = [
    "Arial",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "FreeSans",
];

/// Rasterizes an SVG document to PNG at 1:1 scale on a white background.
///
/// The generic sans-serif family is remapped to a face that is actually
/// installed before rendering, so labels shape with whatever the host provides
/// (Arial, DejaVu, Liberation, ...). Output is deterministic for a given host.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    // fontdb aliases the generic sans-serif family to "Arial"; on hosts without
    // an Arial face every <text> element would be dropped from the raster.
    if let Some(family) = pick_sans_family(opt.fontdb_mut()) {
        opt.font_family = family.clone();
        opt.fontdb_mut().set_sans_serif_family(family);
    }

    let tree = usvg::Tree::from_str(svg, &opt).map_err(|_| RasterError::SvgParse)?;

    let size = tree.size();
    let width_px = size.width().ceil().max(1.0) as u32;
    let height_px = size.height().ceil().max(1.0) as u32;

    let mut pixmap =
        tiny_skia::Pixmap::new(width_px, height_px).ok_or(RasterError::PixmapAlloc)?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|_| RasterError::PngEncode)
}

fn pick_sans_family(db: &usvg::fontdb::Database) -> Option<String> {
    for wanted in PREFERRED_SANS {
        if db
            .faces()
            .any(|face| face.families.iter().any(|(name, _)| name == wanted))
        {
            return Some(wanted.to_string());
        }
    }
    db.faces()
        .find(|face| !face.monospaced)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
}
