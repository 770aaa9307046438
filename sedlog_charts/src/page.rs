// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page geometry and the column model.
//!
//! The column model decides how a log of a given total elevation fits onto
//! a page at a chosen vertical scale: how tall one column is, and how many
//! columns are needed. Everything downstream (unit placement, both axes)
//! works in the column coordinates planned here.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use sedlog_core::{PT_PER_MM, Page};

use crate::error::{
    ConfigurationError, InsufficientSpaceError, LayoutWarning, LogError, push_warning,
};

/// A named standard paper size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaperSize {
    /// US letter, 215.9 × 279.4 mm.
    Letter,
    /// US legal, 215.9 × 355.6 mm.
    Legal,
    /// US tabloid, 279.4 × 431.8 mm.
    Tabloid,
    /// ISO A3, 297 × 420 mm.
    A3,
    /// ISO A4, 210 × 297 mm.
    A4,
    /// ISO A5, 148 × 210 mm.
    A5,
}

impl PaperSize {
    /// Parses a standard paper-size name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, ConfigurationError> {
        const NAMES: [(&str, PaperSize); 6] = [
            ("letter", PaperSize::Letter),
            ("legal", PaperSize::Legal),
            ("tabloid", PaperSize::Tabloid),
            ("a3", PaperSize::A3),
            ("a4", PaperSize::A4),
            ("a5", PaperSize::A5),
        ];
        NAMES
            .iter()
            .find(|(n, _)| name.eq_ignore_ascii_case(n))
            .map(|&(_, size)| size)
            .ok_or_else(|| ConfigurationError::UnknownPaperSize(name.to_string()))
    }

    /// Returns the portrait (width, height) in millimetres.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            Self::Letter => (215.9, 279.4),
            Self::Legal => (215.9, 355.6),
            Self::Tabloid => (279.4, 431.8),
            Self::A3 => (297.0, 420.0),
            Self::A4 => (210.0, 297.0),
            Self::A5 => (148.0, 210.0),
        }
    }

    /// Returns the page in drawing points.
    pub fn page(self) -> Page {
        let (w, h) = self.dimensions_mm();
        page_from_mm(w, h)
    }
}

/// Builds a page from explicit millimetre dimensions.
pub fn page_from_mm(width: f64, height: f64) -> Page {
    Page::new(width * PT_PER_MM, height * PT_PER_MM)
}

/// Converts a real-world length in metres to drawn points at `vscale`:1.
pub fn drawn_length(meters: f64, vscale: f64) -> f64 {
    meters * 1000.0 * PT_PER_MM / vscale
}

/// Layout constants fixed for the duration of one render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    /// Offset of the drawing origin from the page corner, in points.
    pub origin: f64,
    /// Padding kept free at the page edge opposite the origin, in points.
    pub padding: f64,
    /// Horizontal gap between adjacent columns, in points.
    pub column_spacing: f64,
    /// Stroke weight for unit outlines, in points.
    pub stroke_width: f64,
    /// Elevation-axis tick spacing in real-world length units (metres).
    pub tick_interval: f64,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            origin: 40.0,
            padding: 5.0,
            column_spacing: 40.0,
            stroke_width: 0.5,
            tick_interval: 20.0,
        }
    }
}

impl PageGeometry {
    /// Sets the drawing-origin offset.
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = origin;
        self
    }

    /// Sets the page-edge padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the inter-column spacing.
    pub fn with_column_spacing(mut self, column_spacing: f64) -> Self {
        self.column_spacing = column_spacing;
        self
    }

    /// Sets the unit outline stroke weight.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the elevation-axis tick interval (real-world units).
    pub fn with_tick_interval(mut self, tick_interval: f64) -> Self {
        self.tick_interval = tick_interval;
        self
    }
}

/// The planned column grid for one render.
///
/// Computed fresh per render by [`ColumnLayout::plan`] and discarded after.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnLayout {
    /// Vertical extent one column can show, in points.
    pub column_height: f64,
    /// Number of columns the log actually uses.
    pub columns: usize,
    /// Drawing-origin offset, in points.
    pub origin: f64,
    /// Horizontal gap between adjacent columns, in points.
    pub column_spacing: f64,
    /// Full width of the grain-size table, in points.
    pub grain_table_width: f64,
}

impl ColumnLayout {
    /// Plans the column grid.
    ///
    /// The column height is the usable page height (page minus origin and
    /// padding) unless `manual_column_height` (real-world metres) is given;
    /// a manual height taller than the page warns and proceeds. The column
    /// count is `requested_columns`, or the minimum needed; either way the
    /// count actually used is the smallest `k` whose combined height
    /// strictly exceeds the drawn log length. If no such `k` exists within
    /// the budget, planning fails with the numbers the caller needs to pick
    /// a smaller `vscale` or more columns.
    pub fn plan(
        page: Page,
        geometry: &PageGeometry,
        grain_table_width: f64,
        top_elevation: f64,
        vscale: f64,
        manual_column_height: Option<f64>,
        requested_columns: Option<usize>,
        warnings: &mut Vec<LayoutWarning>,
    ) -> Result<Self, LogError> {
        if !vscale.is_finite() || vscale <= 0.0 {
            return Err(ConfigurationError::InvalidScale(vscale).into());
        }
        if !geometry.tick_interval.is_finite() || geometry.tick_interval <= 0.0 {
            return Err(ConfigurationError::InvalidTickInterval(geometry.tick_interval).into());
        }

        let usable = page.height - (geometry.origin + geometry.padding);
        let column_height = match manual_column_height {
            Some(meters) => {
                let h = drawn_length(meters, vscale);
                if h > usable {
                    push_warning(
                        warnings,
                        LayoutWarning::ColumnOverflowsPage {
                            page_height: usable,
                            column_height: h,
                        },
                    );
                }
                h
            }
            None => usable,
        };
        if !column_height.is_finite() || column_height <= 0.0 {
            return Err(ConfigurationError::InvalidColumnHeight(column_height).into());
        }

        let total = drawn_length(top_elevation, vscale);
        let budget = requested_columns
            .unwrap_or_else(|| (total / column_height).ceil() as usize)
            .max(1);

        // The smallest k whose combined height strictly exceeds the log.
        let needed = (total / column_height).floor() as usize + 1;
        if needed > budget {
            return Err(InsufficientSpaceError {
                columns: budget,
                vscale,
                available: budget as f64 * column_height,
                required: total,
                column_height,
                min_columns: needed,
            }
            .into());
        }

        Ok(Self {
            column_height,
            columns: needed,
            origin: geometry.origin,
            column_spacing: geometry.column_spacing,
            grain_table_width,
        })
    }

    /// Returns the x of a column's left edge (its grain-size baseline).
    pub fn column_x(&self, column: usize) -> f64 {
        column as f64 * (self.column_spacing + self.grain_table_width) + self.origin
    }

    /// Returns the y of the top of every column.
    pub fn column_top(&self) -> f64 {
        self.column_height + self.origin
    }

    /// Returns the combined drawn length the planned columns can show.
    pub fn capacity(&self) -> f64 {
        self.columns as f64 * self.column_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(
        top_elevation: f64,
        vscale: f64,
        manual: Option<f64>,
        columns: Option<usize>,
    ) -> Result<(ColumnLayout, Vec<LayoutWarning>), LogError> {
        let mut warnings = Vec::new();
        let layout = ColumnLayout::plan(
            PaperSize::A4.page(),
            &PageGeometry::default(),
            75.0,
            top_elevation,
            vscale,
            manual,
            columns,
            &mut warnings,
        )?;
        Ok((layout, warnings))
    }

    #[test]
    fn paper_names_resolve_case_insensitively() {
        assert_eq!(PaperSize::from_name("a4"), Ok(PaperSize::A4));
        assert_eq!(PaperSize::from_name("Letter"), Ok(PaperSize::Letter));
        assert!(matches!(
            PaperSize::from_name("b5"),
            Err(ConfigurationError::UnknownPaperSize(_))
        ));
    }

    #[test]
    fn drawn_length_round_trips_through_vscale() {
        for vscale in [1.0, 10.0, 100.0, 350.0] {
            let drawn = drawn_length(4.0, vscale);
            let real = drawn * vscale / (1000.0 * PT_PER_MM);
            assert!((real - 4.0).abs() < 1e-9, "vscale {vscale}: got {real}");
        }
    }

    #[test]
    fn four_meters_at_100_to_1_fits_one_a4_column() {
        let (layout, warnings) = plan(4.0, 100.0, None, None).expect("fits easily");
        assert_eq!(layout.columns, 1);
        // Usable height is the full page minus origin and padding.
        let expected = 297.0 * PT_PER_MM - 45.0;
        assert!(
            (layout.column_height - expected).abs() < 1e-9,
            "got {}",
            layout.column_height
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
    }

    #[test]
    fn derived_column_count_is_minimal() {
        // 40 m at 100:1 is ~1133.9 pt; a 600 pt manual column needs 2 columns.
        let manual = Some(600.0 * 100.0 / (1000.0 * PT_PER_MM));
        let (layout, _) = plan(40.0, 100.0, manual, None).expect("two columns fit");
        assert_eq!(layout.columns, 2);
        assert!(layout.capacity() > drawn_length(40.0, 100.0));

        // Pinning one column less must fail.
        let err = plan(40.0, 100.0, manual, Some(1)).expect_err("one column is too few");
        match err {
            LogError::InsufficientSpace(e) => {
                assert_eq!(e.columns, 1);
                assert_eq!(e.min_columns, 2);
                assert!(e.required > e.available, "{e}");
            }
            other => panic!("expected InsufficientSpace, got {other:?}"),
        }
    }

    #[test]
    fn exact_multiple_leaves_no_strict_excess() {
        // A log exactly as long as its column satisfies `k * h >= total` but
        // not `k * h > total`, so the minimum-column derivation comes up one
        // short of what re-validation demands.
        let err = plan(4.0, 100.0, Some(4.0), None).expect_err("no strict excess");
        match err {
            LogError::InsufficientSpace(e) => {
                assert_eq!(e.columns, 1);
                assert_eq!(e.min_columns, 2);
            }
            other => panic!("expected InsufficientSpace, got {other:?}"),
        }
    }

    #[test]
    fn oversized_manual_column_warns_and_proceeds() {
        // 400 m at 100:1 would need an 11339 pt column; A4 has ~797 usable.
        let (layout, warnings) = plan(4.0, 100.0, Some(400.0), None).expect("render proceeds");
        assert_eq!(layout.columns, 1);
        assert!(
            matches!(
                warnings.as_slice(),
                [LayoutWarning::ColumnOverflowsPage { .. }]
            ),
            "expected overflow warning, got {warnings:?}"
        );
    }

    #[test]
    fn bad_scale_and_interval_are_rejected() {
        assert!(matches!(
            plan(4.0, 0.0, None, None),
            Err(LogError::Configuration(ConfigurationError::InvalidScale(_)))
        ));
        let mut warnings = Vec::new();
        let err = ColumnLayout::plan(
            PaperSize::A4.page(),
            &PageGeometry::default().with_tick_interval(0.0),
            75.0,
            4.0,
            100.0,
            None,
            None,
            &mut warnings,
        )
        .expect_err("zero tick interval");
        assert!(matches!(
            err,
            LogError::Configuration(ConfigurationError::InvalidTickInterval(_))
        ));
    }
}
