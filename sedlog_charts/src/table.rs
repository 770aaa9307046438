// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grain-size and facies registries.
//!
//! Both registries keep their entries in insertion order (the grain-size
//! order defines the left-to-right step sequence of the grain-size axis,
//! the facies order drives the key sheet) and carry a code → index map so
//! per-unit lookups during layout are O(1).

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;
use peniko::color::{Srgb, parse_color};
use sedlog_core::{LengthUnit, convert_length};

use crate::error::ConfigurationError;

/// Total drawn width of the built-in grain-size scale, in points.
const DEFAULT_LOG_WIDTH: f64 = 75.0;

fn index_of(codes: &[String]) -> Result<HashMap<String, usize>, ConfigurationError> {
    let mut index = HashMap::with_capacity(codes.len());
    for (i, code) in codes.iter().enumerate() {
        if index.insert(code.clone(), i).is_some() {
            return Err(ConfigurationError::DuplicateCode(code.clone()));
        }
    }
    Ok(index)
}

/// Ordered mapping from grain-size code to drawn width.
///
/// Order is significant: it defines the step sequence of the grain-size
/// axis. Widths are conventionally monotonically increasing (coarser =
/// wider); that convention is assumed, not enforced.
#[derive(Clone, Debug, PartialEq)]
pub struct GrainSizeTable {
    codes: Vec<String>,
    widths: Vec<f64>,
    index: HashMap<String, usize>,
}

impl GrainSizeTable {
    /// The standard siliciclastic scale.
    ///
    /// Twelve categories from "no data" through clay, silt, the five sand
    /// grades, and gravel to boulder, with proportional widths spanning
    /// 75 pt.
    pub fn siliciclastic() -> Self {
        const CODES: [&str; 12] = [
            "NaN", "cl", "si", "vf", "f", "m", "c", "vc", "gr", "pebb", "cobb", "boul",
        ];
        const RELATIVE: [f64; 12] = [
            0.1, 0.2, 0.3, 0.4, 0.45, 0.5, 0.55, 0.6, 0.7, 0.8, 0.9, 1.0,
        ];

        let codes: Vec<String> = CODES.iter().map(|c| c.to_string()).collect();
        let widths = RELATIVE.iter().map(|w| w * DEFAULT_LOG_WIDTH).collect();
        let mut index = HashMap::with_capacity(codes.len());
        for (i, code) in codes.iter().enumerate() {
            index.insert(code.clone(), i);
        }
        Self {
            codes,
            widths,
            index,
        }
    }

    /// Builds a custom table from paired code/width columns.
    ///
    /// The columns must have identical lengths and unique codes; widths are
    /// converted from `unit` to points and must be finite and non-negative.
    pub fn from_columns(
        codes: &[&str],
        widths: &[f64],
        unit: LengthUnit,
    ) -> Result<Self, ConfigurationError> {
        if codes.len() != widths.len() {
            return Err(ConfigurationError::MismatchedPair {
                what: "grain-size codes/widths",
                left: codes.len(),
                right: widths.len(),
            });
        }
        let mut converted = Vec::with_capacity(widths.len());
        for (i, &w) in widths.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(ConfigurationError::InvalidWidth { index: i, value: w });
            }
            converted.push(convert_length(w, unit, LengthUnit::Pt));
        }
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let index = index_of(&codes)?;
        Ok(Self {
            codes,
            widths: converted,
            index,
        })
    }

    /// Returns the number of grain-size categories.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table has no categories.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the drawn width for a code, if the code is known.
    pub fn width_of(&self, code: &str) -> Option<f64> {
        self.index.get(code).map(|&i| self.widths[i])
    }

    /// Returns the full table width (the width of the coarsest category).
    ///
    /// This is the horizontal footprint one column's unit boxes occupy, and
    /// the per-column offset stride together with the column spacing.
    pub fn full_width(&self) -> f64 {
        self.widths.last().copied().unwrap_or(0.0)
    }

    /// Iterates categories in axis order as `(code, width)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.codes
            .iter()
            .zip(self.widths.iter())
            .map(|(c, &w)| (c.as_str(), w))
    }
}

/// Mapping from facies code to fill color.
#[derive(Clone, Debug, PartialEq)]
pub struct FaciesTable {
    codes: Vec<String>,
    colors: Vec<Color>,
    index: HashMap<String, usize>,
}

impl FaciesTable {
    /// The built-in 26-facies palette.
    ///
    /// Covers unexposed/covered intervals, massive to climbing-ripple
    /// fine-grained facies, the sandy facies, and the matrix- and
    /// clast-supported gravels, in conventional code order.
    pub fn palette() -> Self {
        const ENTRIES: [(&str, [u8; 3]); 26] = [
            ("inaccessible", [0xFF, 0xFF, 0xFF]),
            ("cov", [0xFF, 0xFF, 0xFF]),
            ("fcm", [0x5A, 0x48, 0x54]),
            ("fcl", [0x74, 0x57, 0x6A]),
            ("fcr", [0x8C, 0x62, 0x7E]),
            ("fcrc", [0xA5, 0x70, 0x93]),
            ("fcrw", [0xD9, 0x98, 0xC1]),
            ("fsm", [0x66, 0x61, 0x54]),
            ("fsl", [0x80, 0x79, 0x69]),
            ("fsr", [0x99, 0x91, 0x7D]),
            ("fsrc", [0xB3, 0xA9, 0x93]),
            ("fsrw", [0xCC, 0xC1, 0xA7]),
            ("sm", [0xE3, 0xAB, 0x4A]),
            ("sh", [0xDB, 0xB7, 0x5C]),
            ("sp", [0xFD, 0xBB, 0x45]),
            ("st", [0xFB, 0xB6, 0x72]),
            ("sr", [0xFF, 0xCE, 0x6F]),
            ("src", [0xEE, 0x96, 0x21]),
            ("srw", [0xF6, 0x8C, 0x35]),
            ("gmm", [0x99, 0x83, 0x4F]),
            ("gmmi", [0xE5, 0xC3, 0x76]),
            ("gcm", [0x66, 0x17, 0x14]),
            ("gcmi", [0x8D, 0x21, 0x1D]),
            ("gcp", [0xB2, 0x2C, 0x26]),
            ("gct", [0xD9, 0x33, 0x28]),
            ("gch", [0xEF, 0x41, 0x30]),
        ];

        let mut codes = Vec::with_capacity(ENTRIES.len());
        let mut colors = Vec::with_capacity(ENTRIES.len());
        let mut index = HashMap::with_capacity(ENTRIES.len());
        for (i, (code, [r, g, b])) in ENTRIES.iter().enumerate() {
            codes.push(code.to_string());
            colors.push(Color::from_rgb8(*r, *g, *b));
            index.insert(code.to_string(), i);
        }
        Self {
            codes,
            colors,
            index,
        }
    }

    /// Builds a custom table from paired code/color columns.
    ///
    /// Colors are parsed as CSS color strings (hex RGB like `"#E3AB4A"`
    /// included); the columns must have identical lengths and unique codes.
    pub fn from_columns(codes: &[&str], colors: &[&str]) -> Result<Self, ConfigurationError> {
        if codes.len() != colors.len() {
            return Err(ConfigurationError::MismatchedPair {
                what: "facies codes/colors",
                left: codes.len(),
                right: colors.len(),
            });
        }
        let mut parsed = Vec::with_capacity(colors.len());
        for (code, value) in codes.iter().zip(colors.iter()) {
            let color = parse_color(value).map_err(|_| ConfigurationError::InvalidColor {
                code: code.to_string(),
                value: value.to_string(),
            })?;
            parsed.push(color.to_alpha_color::<Srgb>());
        }
        let codes: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        let index = index_of(&codes)?;
        Ok(Self {
            codes,
            colors: parsed,
            index,
        })
    }

    /// Returns the number of facies.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns `true` if the table has no facies.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns the fill color for a code, if the code is known.
    pub fn color_of(&self, code: &str) -> Option<Color> {
        self.index.get(code).map(|&i| self.colors[i])
    }

    /// Iterates facies in table order as `(code, color)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> {
        self.codes
            .iter()
            .zip(self.colors.iter())
            .map(|(c, &color)| (c.as_str(), color))
    }
}

/// Parses a width-unit name from the configuration surface.
///
/// Accepts `"mm"`, `"in"`, and `"pt"`; anything else is a
/// [`ConfigurationError`].
pub fn parse_length_unit(name: &str) -> Result<LengthUnit, ConfigurationError> {
    LengthUnit::from_name(name).ok_or_else(|| ConfigurationError::UnknownUnit(name.to_string()))
}

/// Resolves the grain-size configuration surface.
///
/// With both columns omitted this returns the built-in siliciclastic scale.
/// Providing exactly one column is a [`ConfigurationError`]; providing both
/// builds a custom table with widths converted from `unit`.
pub fn grain_size_table(
    codes: Option<&[&str]>,
    widths: Option<&[f64]>,
    unit: LengthUnit,
) -> Result<GrainSizeTable, ConfigurationError> {
    match (codes, widths) {
        (None, None) => Ok(GrainSizeTable::siliciclastic()),
        (Some(codes), Some(widths)) => GrainSizeTable::from_columns(codes, widths, unit),
        _ => Err(ConfigurationError::MissingPairHalf {
            what: "grain-size codes and widths",
        }),
    }
}

/// Resolves the facies configuration surface.
///
/// With both columns omitted this returns the built-in palette. Providing
/// exactly one column is a [`ConfigurationError`].
pub fn facies_table(
    codes: Option<&[&str]>,
    colors: Option<&[&str]>,
) -> Result<FaciesTable, ConfigurationError> {
    match (codes, colors) {
        (None, None) => Ok(FaciesTable::palette()),
        (Some(codes), Some(colors)) => FaciesTable::from_columns(codes, colors),
        _ => Err(ConfigurationError::MissingPairHalf {
            what: "facies codes and colors",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn siliciclastic_scale_shape() {
        let table = GrainSizeTable::siliciclastic();
        assert_eq!(table.len(), 12);
        assert_eq!(table.full_width(), 75.0);
        assert_eq!(table.width_of("f"), Some(0.45 * 75.0));
        assert_eq!(table.width_of("boul"), Some(75.0));
        assert_eq!(table.width_of("mud"), None);
        // Axis order is the input order, finest to coarsest.
        let codes: Vec<&str> = table.iter().map(|(c, _)| c).collect();
        assert_eq!(codes.first().copied(), Some("NaN"));
        assert_eq!(codes.last().copied(), Some("boul"));
    }

    #[test]
    fn custom_widths_are_converted_to_points() {
        let table = GrainSizeTable::from_columns(&["a", "b"], &[10.0, 20.0], LengthUnit::Mm)
            .expect("valid columns");
        let w = table.width_of("a").expect("known code");
        assert!((w - 28.346_456_692_913).abs() < 1e-9, "got {w}");
    }

    #[test]
    fn mismatched_columns_are_a_configuration_error() {
        let err = grain_size_table(Some(&["a", "b"]), Some(&[1.0]), LengthUnit::Mm)
            .expect_err("mismatched lengths");
        assert!(matches!(err, ConfigurationError::MismatchedPair { .. }));
    }

    #[test]
    fn lone_pair_half_is_rejected() {
        let err = grain_size_table(Some(&["a"]), None, LengthUnit::Mm).expect_err("half a pair");
        assert!(matches!(err, ConfigurationError::MissingPairHalf { .. }));

        let err = facies_table(None, Some(&["#FFFFFF"])).expect_err("half a pair");
        assert!(matches!(err, ConfigurationError::MissingPairHalf { .. }));
    }

    #[test]
    fn unit_names_parse_or_error() {
        assert_eq!(parse_length_unit("mm"), Ok(LengthUnit::Mm));
        assert_eq!(
            parse_length_unit("furlong"),
            Err(ConfigurationError::UnknownUnit("furlong".into()))
        );
    }

    #[test]
    fn duplicate_codes_are_rejected() {
        let err = GrainSizeTable::from_columns(&["a", "a"], &[1.0, 2.0], LengthUnit::Pt)
            .expect_err("duplicate code");
        assert_eq!(err, ConfigurationError::DuplicateCode("a".into()));
    }

    #[test]
    fn palette_resolves_hex_and_rejects_junk() {
        let table = FaciesTable::palette();
        assert_eq!(table.len(), 26);
        assert_eq!(table.color_of("sm"), Some(Color::from_rgb8(0xE3, 0xAB, 0x4A)));
        assert_eq!(table.color_of("zz"), None);

        let custom = FaciesTable::from_columns(&["x"], &["#E3AB4A"]).expect("hex parses");
        assert_eq!(custom.color_of("x"), Some(Color::from_rgb8(0xE3, 0xAB, 0x4A)));

        let err = FaciesTable::from_columns(&["x"], &["notacolor"]).expect_err("junk color");
        assert!(matches!(err, ConfigurationError::InvalidColor { .. }));
    }
}
