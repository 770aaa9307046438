// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Log composition.
//!
//! [`LogSpec`] owns the inputs of one render — units, registries, page,
//! scale, and layout options — and runs the passes in order: validate,
//! plan columns, place units, then generate unit boxes, the elevation
//! scale, and the grain-size axis. All inputs are immutable for the
//! duration of the call; the output is a fresh mark list.

extern crate alloc;

use alloc::string::ToString;
use alloc::vec::Vec;

use peniko::Color;
use sedlog_core::{Mark, Page};

use crate::elevation::elevations;
use crate::error::{CodeKind, LayoutWarning, LogError, UnknownCodeError};
use crate::grain_axis::grain_axis_marks;
use crate::label::{LabelSource, LabelStrategy};
use crate::layout::{place_units, unit_marks};
use crate::page::{ColumnLayout, PageGeometry, drawn_length};
use crate::scale_axis::scale_marks;
use crate::table::{FaciesTable, GrainSizeTable};
use crate::unit::Unit;

/// A complete description of one log render.
#[derive(Clone, Debug)]
pub struct LogSpec {
    /// The unit sequence, ordered from the log base upward.
    pub units: Vec<Unit>,
    /// Grain-size code → drawn width registry.
    pub grain_sizes: GrainSizeTable,
    /// Facies code → fill color registry.
    pub facies: FaciesTable,
    /// The page to lay out on.
    pub page: Page,
    /// Vertical scale ratio, `vscale`:1 (drawn length = real / vscale).
    pub vscale: f64,
    /// Layout constants (origin, padding, spacing, stroke, tick interval).
    pub geometry: PageGeometry,
    /// Manual column height in real-world metres, `None` for full-page
    /// columns.
    pub manual_column_height: Option<f64>,
    /// Column budget, `None` to derive the minimum.
    pub columns: Option<usize>,
    /// Where unit label text comes from.
    pub labels: LabelSource,
    /// Whether to suppress labels on too-thin units.
    pub label_strategy: LabelStrategy,
}

/// The output of one render.
#[derive(Clone, Debug)]
pub struct LogRender {
    /// Generated marks; append order is paint order.
    pub marks: Vec<Mark>,
    /// The column grid the render used.
    pub columns: ColumnLayout,
    /// Non-fatal advisories raised while rendering.
    pub warnings: Vec<LayoutWarning>,
}

impl LogSpec {
    /// Creates a spec with default geometry, no manual column height, a
    /// derived column count, and no labels.
    pub fn new(
        units: Vec<Unit>,
        grain_sizes: GrainSizeTable,
        facies: FaciesTable,
        page: Page,
        vscale: f64,
    ) -> Self {
        Self {
            units,
            grain_sizes,
            facies,
            page,
            vscale,
            geometry: PageGeometry::default(),
            manual_column_height: None,
            columns: None,
            labels: LabelSource::default(),
            label_strategy: LabelStrategy::default(),
        }
    }

    /// Sets the layout constants.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets a manual column height in real-world metres.
    pub fn with_manual_column_height(mut self, meters: f64) -> Self {
        self.manual_column_height = Some(meters);
        self
    }

    /// Pins the column budget instead of deriving the minimum.
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Sets the label source.
    pub fn with_labels(mut self, labels: LabelSource) -> Self {
        self.labels = labels;
        self
    }

    /// Sets the label strategy.
    pub fn with_label_strategy(mut self, label_strategy: LabelStrategy) -> Self {
        self.label_strategy = label_strategy;
        self
    }

    /// Renders the log to a fresh mark list.
    ///
    /// Fails before any mark is generated if the configuration is
    /// malformed, a unit references an unknown code, or the log cannot fit
    /// the planned columns.
    pub fn render(&self) -> Result<LogRender, LogError> {
        let mut warnings = Vec::new();

        let thicknesses: Vec<f64> = self.units.iter().map(|u| u.thickness).collect();
        let elevs = elevations(&thicknesses, &mut warnings)?;
        let fills = self.resolve_facies()?;

        let top_elevation = elevs.last().copied().unwrap_or(0.0);
        let columns = ColumnLayout::plan(
            self.page,
            &self.geometry,
            self.grain_sizes.full_width(),
            top_elevation,
            self.vscale,
            self.manual_column_height,
            self.columns,
            &mut warnings,
        )?;

        let drawn: Vec<f64> = elevs
            .iter()
            .map(|&e| drawn_length(e, self.vscale))
            .collect();
        let placed = place_units(&self.units, &drawn, &self.grain_sizes, &columns)?;
        let labels = self.labels.resolve(self.units.len(), &mut warnings);

        let mut marks = unit_marks(
            &placed,
            &self.units,
            &fills,
            &labels,
            self.label_strategy,
            self.geometry.stroke_width,
        );
        marks.extend(scale_marks(
            &columns,
            self.geometry.tick_interval,
            self.vscale,
        ));
        marks.extend(grain_axis_marks(&self.grain_sizes, &columns));

        Ok(LogRender {
            marks,
            columns,
            warnings,
        })
    }

    /// Resolves every unit's facies to a fill color up front, so code
    /// errors surface before anything is drawn.
    fn resolve_facies(&self) -> Result<Vec<Color>, UnknownCodeError> {
        self.units
            .iter()
            .enumerate()
            .map(|(i, unit)| {
                self.facies
                    .color_of(&unit.facies)
                    .ok_or_else(|| UnknownCodeError {
                        kind: CodeKind::Facies,
                        code: unit.facies.to_string(),
                        unit: i,
                    })
            })
            .collect()
    }
}
