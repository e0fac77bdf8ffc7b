//! SVG rendering of a board's accumulated shapes.
//!
//! Board coordinates are mathematical (y up); the export flips y into
//! SVG's screen orientation and pads the drawing with a one-unit
//! margin. Output is fully determined by the board contents.

use gridscope_core::{LineStyle, Style2};
use gridscope_kernel::RealPoint2;

use super::{Board2, Shape2};

/// Pixels per board unit in the exported document.
const SCALE: f32 = 32.0;
/// Margin around the drawing, in board units.
const MARGIN: f32 = 1.0;
/// Arrow head length, in board units.
const HEAD_LEN: f32 = 0.3;

pub(super) fn render(board: &Board2) -> String {
    let (lo, hi) = drawing_bounds(board);
    let width = (hi.x - lo.x + 2.0 * MARGIN) * SCALE;
    let height = (hi.y - lo.y + 2.0 * MARGIN) * SCALE;
    // Flip y: board y-up becomes SVG y-down.
    let tx = |p: RealPoint2| -> (f32, f32) {
        ((p.x - lo.x + MARGIN) * SCALE, (hi.y + MARGIN - p.y) * SCALE)
    };

    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.1}\" height=\"{height:.1}\" \
         viewBox=\"0 0 {width:.1} {height:.1}\">\n"
    ));
    for item in board.items() {
        render_shape(&mut out, &item.shape, item.style, &tx);
    }
    out.push_str("</svg>\n");
    out
}

fn drawing_bounds(board: &Board2) -> (RealPoint2, RealPoint2) {
    let mut lo = RealPoint2::splat(f32::INFINITY);
    let mut hi = RealPoint2::splat(f32::NEG_INFINITY);
    for item in board.items() {
        let (slo, shi) = item.shape.bounds();
        lo = lo.min(slo);
        hi = hi.max(shi);
    }
    if board.is_empty() {
        (RealPoint2::ZERO, RealPoint2::splat(10.0))
    } else {
        (lo, hi)
    }
}

fn render_shape(
    out: &mut String,
    shape: &Shape2,
    style: Style2,
    tx: &impl Fn(RealPoint2) -> (f32, f32),
) {
    match shape {
        Shape2::Segment { a, b } => {
            let (x1, y1) = tx(*a);
            let (x2, y2) = tx(*b);
            out.push_str(&format!(
                "  <line x1=\"{x1:.3}\" y1=\"{y1:.3}\" x2=\"{x2:.3}\" y2=\"{y2:.3}\"{}/>\n",
                stroke_attrs(style)
            ));
        }
        Shape2::Arrow { a, b } => {
            let (x1, y1) = tx(*a);
            let (x2, y2) = tx(*b);
            out.push_str(&format!(
                "  <line x1=\"{x1:.3}\" y1=\"{y1:.3}\" x2=\"{x2:.3}\" y2=\"{y2:.3}\"{}/>\n",
                stroke_attrs(style)
            ));
            if let Some(head) = arrow_head(*a, *b) {
                let pts: Vec<String> = head
                    .iter()
                    .map(|&p| {
                        let (x, y) = tx(p);
                        format!("{x:.3},{y:.3}")
                    })
                    .collect();
                out.push_str(&format!(
                    "  <polygon points=\"{}\" fill=\"{}\"/>\n",
                    pts.join(" "),
                    style.pen_color.to_hex()
                ));
            }
        }
        Shape2::Rectangle { center, half_extent } => {
            let (x, y) = tx(RealPoint2::new(center.x - half_extent.x, center.y + half_extent.y));
            let w = 2.0 * half_extent.x * SCALE;
            let h = 2.0 * half_extent.y * SCALE;
            out.push_str(&format!(
                "  <rect x=\"{x:.3}\" y=\"{y:.3}\" width=\"{w:.3}\" height=\"{h:.3}\"{}{}/>\n",
                stroke_attrs(style),
                fill_attrs(style)
            ));
        }
        Shape2::Polygon { vertices, closed } => {
            if vertices.is_empty() {
                return;
            }
            let pts: Vec<String> = vertices
                .iter()
                .map(|&p| {
                    let (x, y) = tx(p);
                    format!("{x:.3},{y:.3}")
                })
                .collect();
            let tag = if *closed { "polygon" } else { "polyline" };
            let fill = if *closed { fill_attrs(style) } else { " fill=\"none\"".to_string() };
            out.push_str(&format!(
                "  <{tag} points=\"{}\"{}{fill}/>\n",
                pts.join(" "),
                stroke_attrs(style)
            ));
        }
        Shape2::Circle { center, radius } => {
            let (cx, cy) = tx(*center);
            let r = radius * SCALE;
            out.push_str(&format!(
                "  <circle cx=\"{cx:.3}\" cy=\"{cy:.3}\" r=\"{r:.3}\"{}{}/>\n",
                stroke_attrs(style),
                fill_attrs(style)
            ));
        }
        Shape2::Arc { center, radius, start_angle, end_angle } => {
            let from = *center + *radius * RealPoint2::new(start_angle.cos(), start_angle.sin());
            let to = *center + *radius * RealPoint2::new(end_angle.cos(), end_angle.sin());
            let (x1, y1) = tx(from);
            let (x2, y2) = tx(to);
            let r = radius * SCALE;
            let span = (end_angle - start_angle).rem_euclid(2.0 * std::f32::consts::PI);
            let large = i32::from(span > std::f32::consts::PI);
            out.push_str(&format!(
                "  <path d=\"M {x1:.3} {y1:.3} A {r:.3} {r:.3} 0 {large} 0 {x2:.3} {y2:.3}\"{} \
                 fill=\"none\"/>\n",
                stroke_attrs(style)
            ));
        }
    }
}

fn arrow_head(a: RealPoint2, b: RealPoint2) -> Option<[RealPoint2; 3]> {
    let dir = b - a;
    if dir.length_squared() < 1e-12 {
        return None;
    }
    let dir = dir.normalize();
    let perp = RealPoint2::new(-dir.y, dir.x);
    let back = b - dir * HEAD_LEN;
    Some([b, back + perp * (HEAD_LEN * 0.5), back - perp * (HEAD_LEN * 0.5)])
}

fn stroke_attrs(style: Style2) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{:.3}\"",
        style.pen_color.to_hex(),
        style.line_width * SCALE
    );
    if style.pen_color.a < 255 {
        attrs.push_str(&format!(" stroke-opacity=\"{:.3}\"", f32::from(style.pen_color.a) / 255.0));
    }
    let lw = style.line_width * SCALE;
    match style.line_style {
        LineStyle::Solid => {}
        LineStyle::Dashed => {
            attrs.push_str(&format!(" stroke-dasharray=\"{:.3} {:.3}\"", 4.0 * lw, 2.0 * lw));
        }
        LineStyle::Dotted => {
            attrs.push_str(&format!(" stroke-dasharray=\"{:.3} {:.3}\"", lw, 2.0 * lw));
        }
    }
    attrs
}

fn fill_attrs(style: Style2) -> String {
    match style.fill_color {
        None => " fill=\"none\"".to_string(),
        Some(c) => {
            let mut attrs = format!(" fill=\"{}\"", c.to_hex());
            if c.a < 255 {
                attrs.push_str(&format!(" fill-opacity=\"{:.3}\"", f32::from(c.a) / 255.0));
            }
            attrs
        }
    }
}
