// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The elevation calculator.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::{ConfigurationError, LayoutWarning, push_warning};

/// Converts per-unit thicknesses into cumulative elevations from the log
/// base.
///
/// The output has one more entry than the input: `out[0]` is `0.0` and
/// `out[i]` is the elevation of the top of unit `i - 1`. Thicknesses must
/// be finite and non-negative. A sequence with fewer than two entries is
/// accepted but flagged as a degenerate log.
pub fn elevations(
    thicknesses: &[f64],
    warnings: &mut Vec<LayoutWarning>,
) -> Result<Vec<f64>, ConfigurationError> {
    if thicknesses.len() < 2 {
        push_warning(
            warnings,
            LayoutWarning::DegenerateLog {
                units: thicknesses.len(),
            },
        );
    }

    let mut out = Vec::with_capacity(thicknesses.len() + 1);
    let mut running = 0.0;
    out.push(running);
    for (i, &t) in thicknesses.iter().enumerate() {
        if !t.is_finite() || t < 0.0 {
            return Err(ConfigurationError::InvalidThickness { index: i, value: t });
        }
        running += t;
        out.push(running);
    }
    Ok(out)
}
