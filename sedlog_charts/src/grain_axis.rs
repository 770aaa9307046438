// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The grain-size step scale.
//!
//! Every column gets the full step sequence at its foot: one downward tick
//! per grain-size category at that category's width offset, with the code
//! printed vertically beside it. Tick lengths alternate so neighbouring
//! labels clear each other.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use sedlog_core::{Mark, RuleMark, TextAnchor, TextMark};

use crate::page::ColumnLayout;
use crate::table::GrainSizeTable;

/// Stroke width for axis rules and ticks, in points.
const AXIS_STROKE_WIDTH: f64 = 0.5;

/// Downward tick length for odd-indexed categories, in points.
const LONG_TICK: f64 = 15.0;

/// Downward tick length for even-indexed categories, in points.
const SHORT_TICK: f64 = 5.0;

/// Gap between a tick's end and the start of its label, in points.
const LABEL_GAP: f64 = 1.5;

/// Font size for category codes, in points.
const CODE_FONT_SIZE: f64 = 9.0;

/// Generates the grain-size scale for every planned column.
///
/// Besides the ticks and codes, each column gets a baseline along its foot
/// and a closing rule up its origin-side edge spanning the full column
/// height.
pub(crate) fn grain_axis_marks(grain: &GrainSizeTable, columns: &ColumnLayout) -> Vec<Mark> {
    let origin = columns.origin;
    let mut out = Vec::new();
    for j in 0..columns.columns {
        let x0 = columns.column_x(j);
        for (i, (code, width)) in grain.iter().enumerate() {
            let x = x0 + width;
            let tick = if i % 2 == 1 { LONG_TICK } else { SHORT_TICK };
            out.push(
                RuleMark::vertical(x, origin, origin - tick)
                    .with_stroke(css::BLACK, AXIS_STROKE_WIDTH)
                    .into(),
            );
            // The code runs up the page, ending just under its tick.
            out.push(
                TextMark::new(Point::new(x + 0.5, origin - tick - LABEL_GAP), code)
                    .with_font_size(CODE_FONT_SIZE)
                    .with_angle(90.0)
                    .with_anchor(TextAnchor::End)
                    .with_fill(css::BLACK)
                    .into(),
            );
        }
        out.push(
            RuleMark::horizontal(origin, x0 + columns.grain_table_width, x0)
                .with_stroke(css::BLACK, AXIS_STROKE_WIDTH)
                .into(),
        );
        out.push(
            RuleMark::vertical(x0, origin, columns.column_top())
                .with_stroke(css::BLACK, AXIS_STROKE_WIDTH)
                .into(),
        );
    }
    out
}
