// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sedimentary log building blocks for `sedlog_core`.
//!
//! This crate turns a sequence of geological units (thickness, grain size,
//! facies) into a paginated, multi-column log diagram:
//! - **Registries** resolve grain-size codes to drawn widths and facies
//!   codes to fill colors.
//! - **The layout engine** assigns units to columns at a chosen vertical
//!   scale, splitting units that cross a column break, and places labels.
//! - **Axis generators** emit the elevation tick scale and the grain-size
//!   step scale at the foot of every column.
//!
//! Everything generates `sedlog_core::Mark`s; append order is paint order.
//! A render is a single synchronous pass over immutable inputs and either
//! completes or fails with a [`LogError`] before useful output exists, so
//! callers should discard the scene on error.

#![no_std]

extern crate alloc;

mod elevation;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod grain_axis;
mod key;
mod label;
mod layout;
mod log_spec;
#[cfg(test)]
mod log_tests;
mod page;
mod scale_axis;
mod table;
mod unit;

pub use elevation::elevations;
pub use error::{
    CodeKind, ConfigurationError, InsufficientSpaceError, LayoutWarning, LogError,
    UnknownCodeError,
};
pub use key::{KeyRender, KeySpec};
pub use label::{LabelSource, LabelStrategy, labels_from_column};
pub use layout::{PlacedFragment, PlacedUnit, place_units};
pub use log_spec::{LogRender, LogSpec};
pub use page::{ColumnLayout, PageGeometry, PaperSize, drawn_length, page_from_mm};
pub use table::{FaciesTable, GrainSizeTable, facies_table, grain_size_table, parse_length_unit};
pub use unit::{Unit, units_from_columns};
