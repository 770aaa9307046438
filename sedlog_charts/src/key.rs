// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The facies key sheet.
//!
//! A key is rendered onto its own page: one stroked swatch per facies with
//! the code beside it, stacked top-to-bottom, or grouped into custom rows
//! with a comma-joined row label. The sheet sizes itself from the swatch
//! and padding arithmetic.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::color::palette::css;
use sedlog_core::{Mark, Page, PolygonMark, TextMark};

use crate::error::{ConfigurationError, LogError};
use crate::table::FaciesTable;

/// Font size for key labels, in points.
const KEY_FONT_SIZE: f64 = 10.0;

/// Stroke width for swatch outlines, in points.
const SWATCH_STROKE_WIDTH: f64 = 1.0;

/// A facies key sheet description.
#[derive(Clone, Debug)]
pub struct KeySpec {
    /// The facies to list, in table order.
    pub facies: FaciesTable,
    /// Swatch side length, in points.
    pub box_size: f64,
    /// Padding between swatches and around the sheet edge, in points.
    pub padding: f64,
    /// Optional row grouping; row lengths must sum to the facies count.
    pub rows: Option<Vec<usize>>,
}

/// The output of a key render: its computed page plus the marks.
#[derive(Clone, Debug)]
pub struct KeyRender {
    /// The page the key sized itself to.
    pub page: Page,
    /// Generated marks; append order is paint order.
    pub marks: Vec<Mark>,
}

impl KeySpec {
    /// Creates a single-column key with conventional sizing.
    pub fn new(facies: FaciesTable) -> Self {
        Self {
            facies,
            box_size: 40.0,
            padding: 5.0,
            rows: None,
        }
    }

    /// Sets the swatch side length.
    pub fn with_box_size(mut self, box_size: f64) -> Self {
        self.box_size = box_size;
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Groups the key into rows of the given lengths.
    pub fn with_rows(mut self, rows: Vec<usize>) -> Self {
        self.rows = Some(rows);
        self
    }

    /// The conventional row grouping for the built-in 26-facies palette.
    pub fn default_rows() -> Vec<usize> {
        alloc::vec![2, 5, 5, 7, 2, 5]
    }

    /// Renders the key onto its own computed page.
    pub fn render(&self) -> Result<KeyRender, LogError> {
        if let Some(rows) = &self.rows {
            let total: usize = rows.iter().sum();
            if total != self.facies.len() {
                return Err(ConfigurationError::KeyRowsMismatch {
                    rows_total: total,
                    codes: self.facies.len(),
                }
                .into());
            }
        }

        match &self.rows {
            None => Ok(self.render_stacked()),
            Some(rows) => Ok(self.render_rows(rows)),
        }
    }

    fn swatch(&self, x: f64, y: f64, fill: peniko::Color) -> Mark {
        let b = self.box_size;
        PolygonMark::new([
            Point::new(x, y),
            Point::new(x + b, y),
            Point::new(x + b, y + b),
            Point::new(x, y + b),
        ])
        .with_fill(fill)
        .with_stroke(css::BLACK, SWATCH_STROKE_WIDTH)
        .into()
    }

    fn render_stacked(&self) -> KeyRender {
        let n = self.facies.len();
        let (b, pad) = (self.box_size, self.padding);
        let page = Page::new(
            b * 2.0 + pad * 2.0,
            b * n as f64 + pad * (n as f64 + 1.0),
        );

        let mut marks = Vec::new();
        for (i, (code, color)) in self.facies.iter().enumerate() {
            let y = page.height - pad * (i as f64 + 1.0) - b * (i as f64 + 1.0);
            marks.push(self.swatch(pad, y, color));
            marks.push(
                TextMark::new(Point::new(2.0 * pad + b, y + b / 2.0), code)
                    .with_font_size(KEY_FONT_SIZE)
                    .with_fill(css::BLACK)
                    .into(),
            );
        }
        KeyRender { page, marks }
    }

    fn render_rows(&self, rows: &[usize]) -> KeyRender {
        let (b, pad) = (self.box_size, self.padding);
        let widest = rows.iter().copied().max().unwrap_or(0) as f64;
        let page = Page::new(
            widest * b + widest * pad + b * 2.0,
            rows.len() as f64 * b + (rows.len() as f64 + 1.0) * pad,
        );

        let entries: Vec<(&str, peniko::Color)> = self.facies.iter().collect();
        let mut marks = Vec::new();
        let mut next = 0usize;
        for (j, &row_len) in rows.iter().enumerate() {
            let y = page.height - pad * (j as f64 + 1.0) - b * (j as f64 + 1.0);
            for i in 0..row_len {
                let x = pad * (i as f64 + 1.0) + b * i as f64;
                marks.push(self.swatch(x, y, entries[next].1));
                next += 1;
            }
            let codes: Vec<&str> = entries[next - row_len..next].iter().map(|e| e.0).collect();
            let label: String = codes.join(", ");
            let label_x = pad * row_len as f64 + b * row_len as f64 + pad;
            marks.push(
                TextMark::new(Point::new(label_x, y + b / 2.0), label)
                    .with_font_size(KEY_FONT_SIZE)
                    .with_fill(css::BLACK)
                    .into(),
            );
        }
        KeyRender { page, marks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn stacked_key_lists_every_facies() {
        let key = KeySpec::new(FaciesTable::palette());
        let render = key.render().expect("stacked keys always fit");
        let swatches = render
            .marks
            .iter()
            .filter(|m| matches!(m, Mark::Polygon(_)))
            .count();
        let labels = render
            .marks
            .iter()
            .filter(|m| matches!(m, Mark::Text(_)))
            .count();
        assert_eq!(swatches, 26);
        assert_eq!(labels, 26);
        // One swatch column plus a text gutter.
        assert_eq!(render.page.width, 40.0 * 2.0 + 5.0 * 2.0);
    }

    #[test]
    fn default_rows_match_the_palette() {
        let key = KeySpec::new(FaciesTable::palette()).with_rows(KeySpec::default_rows());
        let render = key.render().expect("default rows sum to 26");
        let labels: Vec<&str> = render
            .marks
            .iter()
            .filter_map(|m| match m {
                Mark::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 6, "one joined label per row");
        assert_eq!(labels[0], "inaccessible, cov");
        assert_eq!(labels[4], "gmm, gmmi");
    }

    #[test]
    fn rows_must_sum_to_the_facies_count() {
        let key = KeySpec::new(FaciesTable::palette()).with_rows(vec![2, 5]);
        let err = key.render().expect_err("7 swatches for 26 facies");
        assert!(matches!(
            err,
            LogError::Configuration(ConfigurationError::KeyRowsMismatch {
                rows_total: 7,
                codes: 26
            })
        ));
    }
}
