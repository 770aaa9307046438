// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The elevation scale.
//!
//! Ticks sit at fixed real-world intervals and roll across columns the
//! same way unit placement does, so the numbers next to a column always
//! match the units drawn in it.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;
use peniko::color::palette::css;
use sedlog_core::{Mark, RuleMark, TextAnchor, TextMark};

use crate::page::{ColumnLayout, drawn_length};

/// Stroke width for tick marks, in points.
const TICK_STROKE_WIDTH: f64 = 0.5;

/// Length of a tick dash, in points.
const TICK_LENGTH: f64 = 5.0;

/// Gap between the column baseline and a tick's number, in points.
const TICK_LABEL_GAP: f64 = 6.0;

/// Font size for tick numbers, in points.
const TICK_FONT_SIZE: f64 = 9.0;

fn format_tick(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        format!("{rounded:.0}")
    } else {
        format!("{value}")
    }
}

/// Generates tick marks and numbers for every planned column.
///
/// `tick_interval` is in real-world units (metres) and is converted with
/// the same transform as unit elevations. The tick count covers the full
/// column capacity, not just the log, so part-filled columns still carry a
/// complete scale.
pub(crate) fn scale_marks(
    columns: &ColumnLayout,
    tick_interval: f64,
    vscale: f64,
) -> Vec<Mark> {
    let step = drawn_length(tick_interval, vscale);
    let ticks = (columns.capacity() / step).floor() as usize + 1;

    let mut out = Vec::new();
    let mut j = 0usize;
    for i in 0..ticks {
        let t = i as f64 * step;
        if t >= (j + 1) as f64 * columns.column_height {
            j += 1;
            // A tick landing exactly on the capacity boundary would start a
            // column that was never planned.
            if j >= columns.columns {
                break;
            }
        }
        let x = columns.column_x(j);
        let y = columns.origin + t - j as f64 * columns.column_height;
        out.push(
            RuleMark::horizontal(y, x, x - TICK_LENGTH)
                .with_stroke(css::BLACK, TICK_STROKE_WIDTH)
                .into(),
        );
        out.push(
            TextMark::new(
                Point::new(x - TICK_LABEL_GAP, y),
                format_tick(i as f64 * tick_interval),
            )
            .with_font_size(TICK_FONT_SIZE)
            .with_anchor(TextAnchor::End)
            .with_fill(css::BLACK)
            .into(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(column_height: f64, columns: usize) -> ColumnLayout {
        ColumnLayout {
            column_height,
            columns,
            origin: 40.0,
            column_spacing: 40.0,
            grain_table_width: 75.0,
        }
    }

    fn tick_positions(marks: &[Mark]) -> Vec<(f64, f64)> {
        marks
            .iter()
            .filter_map(|m| match m {
                Mark::Rule(r) => Some((r.p0.x, r.p0.y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn ticks_cover_the_column_capacity() {
        // At this vscale the drawn step is ~30 pt: ticks at 0, 30, 60, 90,
        // then 120 and onward roll into the second column.
        let columns = grid(100.0, 2);
        let marks = scale_marks(&columns, 30.0, 1000.0 * sedlog_core::PT_PER_MM);
        let ticks = tick_positions(&marks);
        assert_eq!(ticks.len(), 7, "ticks: {ticks:?}");
        assert_eq!(ticks[0], (40.0, 40.0));
        assert!((ticks[3].1 - 130.0).abs() < 1e-9, "ticks: {ticks:?}");
        // The ~120 pt tick rolls to the second column, 20 pt above its base.
        let second_x = 40.0 + 40.0 + 75.0;
        assert_eq!(ticks[4].0, second_x, "ticks: {ticks:?}");
        assert!((ticks[4].1 - 60.0).abs() < 1e-9, "ticks: {ticks:?}");
    }

    #[test]
    fn tick_numbers_are_real_world_values() {
        // 110 pt of capacity at a ~20 pt step holds ticks 0 through 100.
        let columns = grid(110.0, 1);
        let marks = scale_marks(&columns, 20.0, 1000.0 * sedlog_core::PT_PER_MM);
        let labels: Vec<&str> = marks
            .iter()
            .filter_map(|m| match m {
                Mark::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, ["0", "20", "40", "60", "80", "100"]);
    }

    #[test]
    fn formats_whole_numbers_without_decimals() {
        assert_eq!(format_tick(40.0), "40");
        assert_eq!(format_tick(12.5), "12.5");
    }
}
