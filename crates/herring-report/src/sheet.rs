use crate::Result;
use herring_core::{ActionItem, Header, Investigation, ReportRecord, TeamMember};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Image, Workbook, Worksheet};

/// Filename the output sink should suggest for the finished workbook.
pub const SUGGESTED_FILENAME: &str = "8D_Report_with_Ishikawa.xlsx";

const SHEET_NAME: &str = "8D";
const COLUMN_WIDTHS: [f64; 8] = [18.0, 18.0, 22.0, 12.0, 20.0, 18.0, 18.0, 18.0];
const LAST_COL: u16 = 7;

const TITLE_FILL: u32 = 0xCFE2F3;
const SECTION_FILL: u32 = 0xD9EAD3;

/// Display size of the embedded diagram, in pixels.
const DIAGRAM_WIDTH_PX: f64 = 600.0;
const DIAGRAM_HEIGHT_PX: f64 = 400.0;
/// Rows reserved under the image anchor. Tuned for the default row height and
/// the 600x400 image size; revalidate visually if either changes.
const DIAGRAM_ROW_ADVANCE: u32 = 20;

pub(crate) struct Formats {
    title: Format,
    section: Format,
    label: Format,
    value: Format,
    wrapped: Format,
    bold: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            title: Format::new()
                .set_bold()
                .set_font_size(16)
                .set_align(FormatAlign::Center)
                .set_background_color(TITLE_FILL),
            section: Format::new().set_bold().set_background_color(SECTION_FILL),
            label: Format::new().set_bold().set_border(FormatBorder::Thin),
            value: Format::new().set_border(FormatBorder::Thin),
            wrapped: Format::new()
                .set_border(FormatBorder::Thin)
                .set_text_wrap()
                .set_align(FormatAlign::Top),
            bold: Format::new().set_bold(),
        }
    }
}

/// Builds the complete "8D" workbook and returns the xlsx bytes.
///
/// No field is validated: empty strings become empty cells. The block sequence
/// below is the layout contract; reordering it would collide merge regions.
pub fn assemble(record: &ReportRecord, diagram_png: &[u8]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let formats = Formats::new();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;
    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let mut row = title_band(worksheet, &formats, 0)?;
    row = header_strip(worksheet, &formats, row, &record.header)?;
    row = identification_block(worksheet, &formats, row, &record.header)?;

    row = section_header(worksheet, &formats, row, "1- PROBLEM DESCRIPTION")?;
    row = text_block(worksheet, &formats, row, &record.problem_description)?;

    row = team_section(worksheet, &formats, row, &record.team_members)?;
    row = actions_section(
        worksheet,
        &formats,
        row,
        "3- CONTAINMENT ACTIONS",
        &record.containment_actions,
    )?;
    row = investigation_section(worksheet, &formats, row, &record.investigation)?;

    tracing::debug!(row, "embedding fishbone diagram");
    row = embed_diagram(worksheet, row, diagram_png)?;

    row = section_header(worksheet, &formats, row, "5- ROOT CAUSE")?;
    row = text_block(worksheet, &formats, row, &record.root_cause)?;

    row = actions_section(
        worksheet,
        &formats,
        row,
        "6- CORRECTIVE ACTIONS",
        &record.corrective_actions,
    )?;
    row = actions_section(
        worksheet,
        &formats,
        row,
        "7- PREVENTIVE ACTIONS",
        &record.preventive_actions,
    )?;
    signature_block(worksheet, &formats, row)?;

    Ok(workbook.save_to_buffer()?)
}

/// Full-width merged title band with a fill instead of borders.
fn title_band(ws: &mut Worksheet, f: &Formats, row: u32) -> Result<u32> {
    ws.merge_range(row, 0, row, LAST_COL, "8D PROBLEM SOLUTION REPORT", &f.title)?;
    Ok(row + 2)
}

/// Document-control strip: four label/value rows spanning columns A-C only.
fn header_strip(ws: &mut Worksheet, f: &Formats, mut row: u32, header: &Header) -> Result<u32> {
    let rows: [(&str, &str); 4] = [
        ("DOCUMENT NO.", &header.document_no),
        ("CHANGE NO.", &header.change_no),
        ("ISSUE DATE", &header.issue_date),
        ("REV. NO", &header.rev_no),
    ];
    for (label, value) in rows {
        ws.merge_range(row, 0, row, 1, label, &f.label)?;
        ws.write_with_format(row, 2, value, &f.value)?;
        row += 1;
    }
    Ok(row + 1)
}

/// One `label:` / value row in the merged A-B + C-H pattern.
fn kv_row(ws: &mut Worksheet, f: &Formats, row: u32, label: &str, value: &str) -> Result<u32> {
    ws.merge_range(row, 0, row, 1, &format!("{label}:"), &f.label)?;
    ws.merge_range(row, 2, row, LAST_COL, value, &f.value)?;
    Ok(row + 1)
}

fn identification_block(
    ws: &mut Worksheet,
    f: &Formats,
    mut row: u32,
    header: &Header,
) -> Result<u32> {
    let rows: [(&str, &str); 6] = [
        ("Product Name", &header.product_name),
        ("RMA No", &header.rma_no),
        ("Product Model", &header.product_model),
        ("Received Date", &header.received_date),
        ("Serial Number/ IMEI", &header.serial_imei),
        ("Notification Date", &header.notification_date),
    ];
    for (label, value) in rows {
        row = kv_row(ws, f, row, label, value)?;
    }
    Ok(row + 1)
}

fn section_header(ws: &mut Worksheet, f: &Formats, row: u32, title: &str) -> Result<u32> {
    ws.merge_range(row, 0, row, LAST_COL, title, &f.section)?;
    Ok(row + 1)
}

/// Three-row merged free-text block (wrapped, top-aligned) plus a trailing
/// blank row.
fn text_block(ws: &mut Worksheet, f: &Formats, row: u32, text: &str) -> Result<u32> {
    ws.merge_range(row, 0, row + 2, LAST_COL, text, &f.wrapped)?;
    Ok(row + 4)
}

fn team_section(
    ws: &mut Worksheet,
    f: &Formats,
    row: u32,
    members: &[TeamMember],
) -> Result<u32> {
    let mut row = section_header(ws, f, row, "2- TEAM MEMBERS")?;
    ws.write_with_format(row, 0, "NAME", &f.label)?;
    ws.write_with_format(row, 1, "DEPARTMENT", &f.label)?;
    row += 1;
    for member in members {
        ws.write_with_format(row, 0, member.name.as_str(), &f.value)?;
        ws.write_with_format(row, 1, member.department.as_str(), &f.value)?;
        row += 1;
    }
    Ok(row + 1)
}

/// Shared template for the containment/corrective/preventive action sections:
/// one data row per item, action merged A-E, responsible merged F-G, date in H.
fn actions_section(
    ws: &mut Worksheet,
    f: &Formats,
    row: u32,
    title: &str,
    items: &[ActionItem],
) -> Result<u32> {
    let mut row = section_header(ws, f, row, title)?;
    ws.write_with_format(row, 0, "ACTION", &f.label)?;
    ws.write_with_format(row, 5, "RESPONSIBLE", &f.label)?;
    ws.write_with_format(row, 7, "DATE", &f.label)?;
    row += 1;
    for item in items {
        ws.merge_range(row, 0, row, 4, item.action.as_str(), &f.value)?;
        ws.merge_range(row, 5, row, 6, item.responsible.as_str(), &f.value)?;
        ws.write_with_format(row, 7, item.date.as_str(), &f.value)?;
        row += 1;
    }
    Ok(row + 1)
}

fn investigation_section(
    ws: &mut Worksheet,
    f: &Formats,
    row: u32,
    investigation: &Investigation,
) -> Result<u32> {
    let mut row = section_header(ws, f, row, "4- INVESTIGATION")?;
    let rows: [(&str, &str); 4] = [
        ("WHAT", &investigation.what),
        ("HOW", &investigation.how),
        ("WHO", &investigation.who),
        ("WHERE", &investigation.r#where),
    ];
    for (label, value) in rows {
        row = kv_row(ws, f, row, label, value)?;
    }
    Ok(row + 1)
}

/// Anchors the diagram at column A of the current row, forced to 600x400 px,
/// then skips a fixed number of rows to clear its vertical footprint.
fn embed_diagram(ws: &mut Worksheet, row: u32, png: &[u8]) -> Result<u32> {
    let mut image = Image::new_from_buffer(png)?;
    let scale_w = DIAGRAM_WIDTH_PX / image.width();
    let scale_h = DIAGRAM_HEIGHT_PX / image.height();
    let image = image.set_scale_width(scale_w).set_scale_height(scale_h);
    ws.insert_image(row, 0, &image)?;
    Ok(row + DIAGRAM_ROW_ADVANCE)
}

/// Three side-by-side signature boxes: a bold label row, then 2-row x 3-column
/// merged empty boxes, each bordered.
fn signature_block(ws: &mut Worksheet, f: &Formats, row: u32) -> Result<u32> {
    ws.write_with_format(row, 0, "Made by:", &f.bold)?;
    ws.write_with_format(row, 3, "Review by:", &f.bold)?;
    ws.write_with_format(row, 6, "Approve By:", &f.bold)?;
    let row = row + 1;
    for start_col in [0u16, 3, 6] {
        ws.merge_range(row, start_col, row + 1, start_col + 2, "", &f.value)?;
    }
    Ok(row + 2)
}
