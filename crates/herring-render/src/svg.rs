use crate::layout::{FishboneLayout, LineSegment};
use std::fmt::Write as _;

/// Renders a laid-out fishbone diagram as a standalone SVG document.
///
/// Deterministic: equal layouts produce byte-equal SVG text.
pub fn render_fishbone_svg(layout: &FishboneLayout) -> String {
    let mut out = String::new();

    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="Helvetica, Arial, sans-serif">"#,
        w = fmt(layout.width),
        h = fmt(layout.height)
    );
    let _ = write!(
        &mut out,
        r#"<rect x="0" y="0" width="{w}" height="{h}" fill="white"/>"#,
        w = fmt(layout.width),
        h = fmt(layout.height)
    );

    let _ = write!(
        &mut out,
        r#"<text x="{x}" y="28" text-anchor="middle" font-size="16" font-weight="bold">{text}</text>"#,
        x = fmt(layout.width / 2.0),
        text = escape_xml(&layout.heading)
    );

    push_line(&mut out, &layout.spine, 2.0);
    let _ = write!(
        &mut out,
        r#"<text x="{x}" y="{y}" font-size="14" font-weight="bold" dominant-baseline="middle">{text}</text>"#,
        x = fmt(layout.title_x),
        y = fmt(layout.title_y),
        text = escape_xml(&layout.title)
    );

    for branch in &layout.branches {
        push_line(&mut out, &branch.line, 1.5);
        let _ = write!(
            &mut out,
            r#"<text x="{x}" y="{y}" text-anchor="end" font-size="12" font-weight="bold" dominant-baseline="middle">{text}</text>"#,
            x = fmt(branch.label_x),
            y = fmt(branch.label_y),
            text = escape_xml(branch.category.as_str())
        );
        for tick in &branch.ticks {
            push_line(&mut out, &tick.line, 1.0);
            let _ = write!(
                &mut out,
                r#"<text x="{x}" y="{y}" font-size="10" dominant-baseline="middle">{text}</text>"#,
                x = fmt(tick.text_x),
                y = fmt(tick.text_y),
                text = escape_xml(&format!("- {}", tick.cause))
            );
        }
    }

    out.push_str("</svg>");
    out
}

fn push_line(out: &mut String, line: &LineSegment, width: f64) {
    let _ = write!(
        out,
        r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="black" stroke-width="{w}"/>"#,
        x1 = fmt(line.x1),
        y1 = fmt(line.y1),
        x2 = fmt(line.x2),
        y2 = fmt(line.y2),
        w = fmt(width)
    );
}

fn fmt(v: f64) -> String {
    let mut s = format!("{v:.3}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
