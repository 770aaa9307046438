// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `sedlog_charts_demo`.
//!
//! Scenes are y-up; SVG is y-down, so every y flips against the page
//! height and rotations negate.

use std::fmt::Write as _;

use kurbo::Point;
use peniko::Brush;
use sedlog_core::{Mark, Page, PolygonMark, RuleMark, Scene, TextAnchor, TextBaseline, TextMark};

pub(crate) fn scene_to_svg(scene: &Scene) -> String {
    let page = scene.page();
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    let _ = write!(
        out,
        r#"viewBox="0 0 {} {}" width="{}" height="{}">"#,
        page.width, page.height, page.width, page.height
    );
    out.push('\n');

    let mut clip_seq = 0usize;
    for mark in scene.marks() {
        match mark {
            Mark::Polygon(p) => write_polygon(&mut out, page, p, &mut clip_seq),
            Mark::Rule(r) => write_rule(&mut out, page, r),
            Mark::Text(t) => write_text(&mut out, page, t),
        }
    }

    out.push_str("</svg>\n");
    out
}

fn points_attr(page: Page, points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{},{}", p.x, page.height - p.y);
    }
    out
}

fn write_polygon(out: &mut String, page: Page, polygon: &PolygonMark, clip_seq: &mut usize) {
    let clip_ref = polygon.clip.as_ref().map(|clip| {
        let id = *clip_seq;
        *clip_seq += 1;
        let _ = write!(
            out,
            r#"<clipPath id="clip{id}"><polygon points="{}"/></clipPath>"#,
            points_attr(page, clip)
        );
        out.push('\n');
        id
    });

    let _ = write!(
        out,
        r#"<polygon points="{}""#,
        points_attr(page, &polygon.points)
    );
    write_paint_attr(out, "fill", &polygon.fill);
    if polygon.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &polygon.stroke);
        let _ = write!(out, r#" stroke-width="{}""#, polygon.stroke_width);
    }
    if let Some(id) = clip_ref {
        let _ = write!(out, r#" clip-path="url(#clip{id})""#);
    }
    out.push_str("/>\n");
}

fn write_rule(out: &mut String, page: Page, rule: &RuleMark) {
    let _ = write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" fill="none""#,
        rule.p0.x,
        page.height - rule.p0.y,
        rule.p1.x,
        page.height - rule.p1.y
    );
    write_paint_attr(out, "stroke", &rule.stroke);
    let _ = write!(out, r#" stroke-width="{}""#, rule.stroke_width);
    out.push_str("/>\n");
}

fn write_text(out: &mut String, page: Page, text: &TextMark) {
    let x = text.pos.x;
    let y = page.height - text.pos.y;
    let baseline = match text.baseline {
        TextBaseline::Middle => "central",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Hanging => "hanging",
    };
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" font-size="{}" dominant-baseline="{baseline}""#,
        text.font_size
    );
    out.push_str(match text.anchor {
        TextAnchor::Start => r#" text-anchor="start""#,
        TextAnchor::Middle => r#" text-anchor="middle""#,
        TextAnchor::End => r#" text-anchor="end""#,
    });
    if text.angle != 0.0 {
        // A counter-clockwise scene rotation is clockwise once flipped.
        let _ = write!(out, r#" transform="rotate({} {x} {y})""#, -text.angle);
    }
    write_paint_attr(out, "fill", &text.fill);
    out.push('>');
    out.push_str(&escape_xml(&text.text));
    out.push_str("</text>\n");
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let paint = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (paint, opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
