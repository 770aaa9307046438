// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Length units and conversion.
//!
//! All scene geometry is in drawing points. Callers configure grain-size
//! widths and page sizes in whichever unit is convenient and convert once,
//! up front, through [`convert_length`].

/// Points per millimetre.
pub const PT_PER_MM: f64 = 2.834_645_669_291_3;

/// Points per inch.
pub const PT_PER_IN: f64 = 72.0;

/// A physical length unit accepted by the configuration surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Millimetres.
    Mm,
    /// Inches.
    In,
    /// Drawing points (native).
    Pt,
}

impl LengthUnit {
    /// Parses a unit name as accepted by the configuration surface.
    ///
    /// Returns `None` for anything other than `"mm"`, `"in"`, or `"pt"`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "mm" => Some(Self::Mm),
            "in" => Some(Self::In),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    /// Returns how many drawing points one of this unit spans.
    pub fn points_per_unit(self) -> f64 {
        match self {
            Self::Mm => PT_PER_MM,
            Self::In => PT_PER_IN,
            Self::Pt => 1.0,
        }
    }
}

/// Converts a length between units.
pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.points_per_unit() / to.points_per_unit()
}
