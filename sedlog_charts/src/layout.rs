// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout engine.
//!
//! One pass walks the unit sequence from the log base upward, tracking the
//! current column. Each unit becomes one quadrilateral — two if its drawn
//! extent crosses the column top, in which case the first fragment is
//! clipped to the column and a continuation is drawn clipped to the bottom
//! of the next column. Placement is pure geometry; mark generation (paint,
//! labels) happens afterwards over the placed fragments.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Color;
use peniko::color::palette::css;
use sedlog_core::{Mark, PolygonMark, TextMark};

use crate::error::{CodeKind, UnknownCodeError};
use crate::label::{LabelStrategy, ResolvedLabels};
use crate::page::ColumnLayout;
use crate::table::GrainSizeTable;
use crate::unit::Unit;

/// Font size for unit labels, in points.
const LABEL_FONT_SIZE: f64 = 9.0;

/// Smallest visible fragment height that still takes a polite label.
const MIN_LABEL_HEIGHT: f64 = 9.0;

/// Gap between a unit's right edge and its label, in points.
const LABEL_GAP: f64 = 5.0;

/// One visible piece of a unit within a single column.
///
/// `x2`/`x3` are the widths of the base and top grain sizes; a rectangle
/// has `x2 == x3`, a trapezoid (fining or coarsening upward) does not.
/// The quadrilateral through `y_base`/`y_top` may extend past the column;
/// `visible_base..visible_top` is the window that actually shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedFragment {
    /// Column index this fragment draws in.
    pub column: usize,
    /// X of the unit's left edge (the column's grain-size baseline).
    pub x1: f64,
    /// X of the unit's base-width edge.
    pub x2: f64,
    /// X of the unit's top-width edge.
    pub x3: f64,
    /// Y of the quadrilateral's base corners.
    pub y_base: f64,
    /// Y of the quadrilateral's top corners.
    pub y_top: f64,
    /// Bottom of the visible window.
    pub visible_base: f64,
    /// Top of the visible window.
    pub visible_top: f64,
}

impl PlacedFragment {
    /// Returns the height of the visible window.
    pub fn visible_height(&self) -> f64 {
        self.visible_top - self.visible_base
    }

    /// Returns the x of the wider of the two grain-size edges.
    pub fn right_edge(&self) -> f64 {
        self.x2.max(self.x3)
    }

    fn clipped(&self) -> bool {
        self.visible_base != self.y_base || self.visible_top != self.y_top
    }
}

/// A unit placed into the column grid.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedUnit {
    /// Index of the source unit, counted from the log base.
    pub index: usize,
    /// The fragment in the unit's home column.
    pub first: PlacedFragment,
    /// The continuation fragment in the next column, for units whose drawn
    /// extent crosses the column top. At most one split per unit.
    pub continuation: Option<PlacedFragment>,
}

impl PlacedUnit {
    /// Returns the fragment a label should attach to: the taller of the
    /// two visible pieces.
    pub fn label_fragment(&self) -> &PlacedFragment {
        match &self.continuation {
            Some(cont) if self.first.visible_height() <= cont.visible_height() => cont,
            _ => &self.first,
        }
    }
}

fn grain_widths(
    unit: &Unit,
    index: usize,
    grain: &GrainSizeTable,
) -> Result<(f64, f64), UnknownCodeError> {
    let unknown = |code: &str| UnknownCodeError {
        kind: CodeKind::GrainSize,
        code: code.to_string(),
        unit: index,
    };
    let base = grain
        .width_of(&unit.grain_base)
        .ok_or_else(|| unknown(&unit.grain_base))?;
    let top = match &unit.grain_top {
        Some(code) => grain.width_of(code).ok_or_else(|| unknown(code))?,
        None => base,
    };
    Ok((base, top))
}

/// Places every unit into the column grid.
///
/// `drawn_elevations` are the cumulative elevations already converted to
/// drawn points (one more entry than `units`). The current column advances
/// when a unit's drawn base elevation exceeds the column's top; a unit
/// whose top then still crosses the column boundary is split into a
/// clipped fragment and a continuation at the bottom of the next column.
pub fn place_units(
    units: &[Unit],
    drawn_elevations: &[f64],
    grain: &GrainSizeTable,
    columns: &ColumnLayout,
) -> Result<Vec<PlacedUnit>, UnknownCodeError> {
    let h = columns.column_height;
    let origin = columns.origin;
    let top = columns.column_top();

    let mut placed = Vec::with_capacity(units.len());
    let mut j = 0usize;
    for (i, unit) in units.iter().enumerate() {
        let e_base = drawn_elevations[i];
        let e_top = drawn_elevations[i + 1];
        if e_base > (j + 1) as f64 * h {
            j += 1;
        }

        let (w_base, w_top) = grain_widths(unit, i, grain)?;
        let x1 = columns.column_x(j);
        let y_base = e_base - j as f64 * h + origin;
        let y_top = e_top - j as f64 * h + origin;

        let first = PlacedFragment {
            column: j,
            x1,
            x2: x1 + w_base,
            x3: x1 + w_top,
            y_base,
            y_top,
            visible_base: y_base,
            visible_top: y_top.min(top),
        };

        let continuation = (y_top > top).then(|| {
            let x1b = columns.column_x(j + 1);
            let y_base_b = e_base - (j + 1) as f64 * h + origin;
            let y_top_b = e_top - (j + 1) as f64 * h + origin;
            PlacedFragment {
                column: j + 1,
                x1: x1b,
                x2: x1b + w_base,
                x3: x1b + w_top,
                y_base: y_base_b,
                y_top: y_top_b,
                visible_base: origin,
                visible_top: y_top_b,
            }
        });

        placed.push(PlacedUnit {
            index: i,
            first,
            continuation,
        });
    }
    Ok(placed)
}

fn fragment_polygon(fragment: &PlacedFragment, fill: Color, stroke_width: f64) -> PolygonMark {
    let quad = [
        Point::new(fragment.x1, fragment.y_base),
        Point::new(fragment.x2, fragment.y_base),
        Point::new(fragment.x3, fragment.y_top),
        Point::new(fragment.x1, fragment.y_top),
    ];
    let mark = PolygonMark::new(quad)
        .with_fill(fill)
        .with_stroke(css::BLACK, stroke_width);
    if fragment.clipped() {
        let right = fragment.right_edge();
        mark.with_clip([
            Point::new(fragment.x1, fragment.visible_base),
            Point::new(right, fragment.visible_base),
            Point::new(right, fragment.visible_top),
            Point::new(fragment.x1, fragment.visible_top),
        ])
    } else {
        mark
    }
}

/// Generates unit box and label marks from placed units.
///
/// `colors` is the per-unit facies fill, already resolved. Boxes and their
/// labels interleave in log order, base to top.
pub(crate) fn unit_marks(
    placed: &[PlacedUnit],
    units: &[Unit],
    colors: &[Color],
    labels: &ResolvedLabels<'_>,
    strategy: LabelStrategy,
    stroke_width: f64,
) -> Vec<Mark> {
    let mut out = Vec::new();
    for p in placed {
        let fill = colors[p.index];
        out.push(fragment_polygon(&p.first, fill, stroke_width).into());
        if let Some(cont) = &p.continuation {
            out.push(fragment_polygon(cont, fill, stroke_width).into());
        }

        let fragment = p.label_fragment();
        if strategy == LabelStrategy::Polite && fragment.visible_height() < MIN_LABEL_HEIGHT {
            continue;
        }
        if let Some(text) = labels.text_for(p.index, &units[p.index].facies) {
            let anchor = Point::new(
                fragment.right_edge() + LABEL_GAP,
                0.5 * (fragment.visible_base + fragment.visible_top),
            );
            out.push(
                TextMark::new(anchor, text)
                    .with_font_size(LABEL_FONT_SIZE)
                    .with_fill(css::BLACK)
                    .into(),
            );
        }
    }
    out
}
