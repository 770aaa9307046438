// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The unit record.
//!
//! Field measurements usually arrive as parallel columns (thicknesses,
//! grain sizes, facies codes). They are folded into one [`Unit`] record per
//! bed at ingestion, so misaligned columns are rejected once instead of
//! surfacing as off-by-one drawing bugs later.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::ConfigurationError;

/// One depositional bed in the stratigraphic sequence.
///
/// Units are ordered from the log base upward and immutable once loaded;
/// the layout engine only derives drawing geometry from them.
#[derive(Clone, Debug, PartialEq)]
pub struct Unit {
    /// Bed thickness in real-world length units (conventionally metres).
    pub thickness: f64,
    /// Grain-size code at the base of the bed.
    pub grain_base: String,
    /// Grain-size code at the top of the bed.
    ///
    /// `None` means the bed has uniform grain size and draws as a
    /// rectangle; a differing top code draws a trapezoid (fining or
    /// coarsening upward).
    pub grain_top: Option<String>,
    /// Facies code, resolved to a fill color through the facies table.
    pub facies: String,
}

impl Unit {
    /// Creates a unit with uniform grain size.
    pub fn new(
        thickness: f64,
        grain_base: impl Into<String>,
        facies: impl Into<String>,
    ) -> Self {
        Self {
            thickness,
            grain_base: grain_base.into(),
            grain_top: None,
            facies: facies.into(),
        }
    }

    /// Sets a distinct grain-size code for the top of the bed.
    pub fn with_grain_top(mut self, grain_top: impl Into<String>) -> Self {
        self.grain_top = Some(grain_top.into());
        self
    }
}

/// Folds parallel measurement columns into a unit sequence.
///
/// All four columns must have the same length. Entries of `grain_top` equal
/// to `sentinel` (the "no data" marker, conventionally `"NaN"`) become
/// uniform-grain units.
pub fn units_from_columns(
    thicknesses: &[f64],
    grain_base: &[&str],
    grain_top: &[&str],
    facies: &[&str],
    sentinel: &str,
) -> Result<Vec<Unit>, ConfigurationError> {
    let n = thicknesses.len();
    for (what, len) in [
        ("thicknesses/grain-size base codes", grain_base.len()),
        ("thicknesses/grain-size top codes", grain_top.len()),
        ("thicknesses/facies codes", facies.len()),
    ] {
        if len != n {
            return Err(ConfigurationError::MismatchedPair {
                what,
                left: n,
                right: len,
            });
        }
    }

    let mut units = Vec::with_capacity(n);
    for i in 0..n {
        let top = (grain_top[i] != sentinel).then(|| grain_top[i].to_string());
        units.push(Unit {
            thickness: thicknesses[i],
            grain_base: grain_base[i].to_string(),
            grain_top: top,
            facies: facies[i].to_string(),
        });
    }
    Ok(units)
}
