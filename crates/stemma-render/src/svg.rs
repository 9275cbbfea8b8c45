use crate::model::ChartLayout;
use std::fmt::Write as _;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// When true, include relation curves.
    pub include_edges: bool,
    /// When true, include person dots.
    pub include_nodes: bool,
    /// When true, include person labels.
    pub include_labels: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            include_edges: true,
            include_nodes: true,
            include_labels: true,
        }
    }
}

/// Stringifies a chart layout to a standalone SVG document.
///
/// Relation curves are written before person markers, preserving the layout's
/// z-order contract.
pub fn render_svg(layout: &ChartLayout, options: &SvgRenderOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = fmt(layout.width),
        h = fmt(layout.height),
    );

    if options.include_edges {
        out.push_str(r#"<g class="relations">"#);
        out.push('\n');
        for e in &layout.edges {
            let _ = writeln!(
                &mut out,
                r#"<path d="M{x1},{y1} Q{cx},{cy} {x2},{y2}" fill="none" stroke="{stroke}" stroke-width="{sw}"/>"#,
                x1 = fmt(e.start.x),
                y1 = fmt(e.start.y),
                cx = fmt(e.control.x),
                cy = fmt(e.control.y),
                x2 = fmt(e.end.x),
                y2 = fmt(e.end.y),
                stroke = escape_xml(&e.stroke),
                sw = fmt(e.stroke_width),
            );
        }
        out.push_str("</g>\n");
    }

    if options.include_nodes {
        out.push_str(r#"<g class="persons">"#);
        out.push('\n');
        for n in &layout.nodes {
            let _ = writeln!(
                &mut out,
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{fill}"/>"#,
                cx = fmt(n.x),
                cy = fmt(n.y),
                r = fmt(n.radius),
                fill = escape_xml(&n.fill),
            );
            if options.include_labels {
                let _ = writeln!(
                    &mut out,
                    r#"<text x="{x}" y="{y}" dy="{dy}" text-anchor="middle" alignment-baseline="middle" fill="{fill}" font-family="{family}" font-size="{size}">{label}</text>"#,
                    x = fmt(n.x),
                    y = fmt(n.y),
                    dy = fmt(n.label_dy),
                    fill = escape_xml(&n.text_color),
                    family = escape_xml(&n.font_family),
                    size = fmt(n.font_size),
                    label = escape_xml(&n.label),
                );
            }
        }
        out.push_str("</g>\n");
    }

    out.push_str("</svg>\n");
    out
}

fn fmt(v: f64) -> String {
    // Round-trippable decimal form (similar to JS `Number#toString()`), but
    // avoid `-0` and tiny float noise from our own calculations.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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
