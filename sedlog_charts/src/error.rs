// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error and warning taxonomy.
//!
//! Errors are fatal and abort a render before useful output exists.
//! Warnings never abort: they are collected into the render output and
//! emitted through `log::warn!`, and the render continues with a
//! documented fallback.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Errors caused by malformed setup.
///
/// These indicate caller programming error and are never recovered.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Paired configuration arrays have different lengths.
    MismatchedPair {
        /// Which pair mismatched, e.g. `"grain-size codes/widths"`.
        what: &'static str,
        /// Length of the first array.
        left: usize,
        /// Length of the second array.
        right: usize,
    },
    /// One half of a paired configuration was provided without the other.
    MissingPairHalf {
        /// Which pair is incomplete.
        what: &'static str,
    },
    /// A code appears more than once in its table.
    DuplicateCode(String),
    /// A grain-size width is not a finite, non-negative length.
    InvalidWidth {
        /// Position of the offending width.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// A facies color string could not be parsed.
    InvalidColor {
        /// The facies code the color was given for.
        code: String,
        /// The unparsable color string.
        value: String,
    },
    /// An unrecognized length-unit name.
    UnknownUnit(String),
    /// An unrecognized standard paper-size name.
    UnknownPaperSize(String),
    /// A unit thickness is not a finite, non-negative number.
    InvalidThickness {
        /// Index of the offending unit, counted from the log base.
        index: usize,
        /// The offending value.
        value: f64,
    },
    /// The vertical scale ratio is not a finite, positive number.
    InvalidScale(f64),
    /// The tick interval is not a finite, positive number.
    InvalidTickInterval(f64),
    /// The resolved column height is not a finite, positive length.
    InvalidColumnHeight(f64),
    /// Custom key rows do not sum to the number of facies codes.
    KeyRowsMismatch {
        /// Sum of the requested row lengths.
        rows_total: usize,
        /// Number of facies codes to lay out.
        codes: usize,
    },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedPair { what, left, right } => {
                write!(f, "{what} must be of identical length, got {left} and {right}")
            }
            Self::MissingPairHalf { what } => {
                write!(f, "both or neither of {what} must be provided")
            }
            Self::DuplicateCode(code) => write!(f, "duplicate code {code:?}"),
            Self::InvalidWidth { index, value } => {
                write!(f, "grain-size width {index} is not a usable length: {value}")
            }
            Self::InvalidColor { code, value } => {
                write!(f, "facies {code:?} has unparsable color {value:?}")
            }
            Self::UnknownUnit(name) => {
                write!(f, "width unit must be \"mm\", \"in\" or \"pt\", got {name:?}")
            }
            Self::UnknownPaperSize(name) => {
                write!(f, "unknown standard paper size {name:?}")
            }
            Self::InvalidThickness { index, value } => {
                write!(f, "unit {index} thickness is not a non-negative number: {value}")
            }
            Self::InvalidScale(vscale) => {
                write!(f, "vertical scale must be finite and positive, got {vscale}")
            }
            Self::InvalidTickInterval(interval) => {
                write!(f, "tick interval must be finite and positive, got {interval}")
            }
            Self::InvalidColumnHeight(height) => {
                write!(f, "column height must be finite and positive, got {height} pt")
            }
            Self::KeyRowsMismatch { rows_total, codes } => {
                write!(
                    f,
                    "custom key rows must sum to the facies count: rows sum to {rows_total}, \
                     facies table has {codes}"
                )
            }
        }
    }
}

/// Which registry a code failed to resolve against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// The grain-size table.
    GrainSize,
    /// The facies table.
    Facies,
}

/// A unit references a code absent from its lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCodeError {
    /// Which table the lookup failed against.
    pub kind: CodeKind,
    /// The unresolved code.
    pub code: String,
    /// Index of the referencing unit, counted from the log base.
    pub unit: usize,
}

impl fmt::Display for UnknownCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let table = match self.kind {
            CodeKind::GrainSize => "grain-size",
            CodeKind::Facies => "facies",
        };
        write!(
            f,
            "unit {} references {table} code {:?} which is not in the {table} table",
            self.unit, self.code
        )
    }
}

/// The configured scale, column count, and page cannot contain the log.
#[derive(Debug, Clone, PartialEq)]
pub struct InsufficientSpaceError {
    /// The column budget that was tried.
    pub columns: usize,
    /// The vertical scale ratio in use.
    pub vscale: f64,
    /// Drawn length available across the column budget, in points.
    pub available: f64,
    /// Drawn length of the whole log, in points.
    pub required: f64,
    /// Height of one column, in points.
    pub column_height: f64,
    /// The smallest column count that would contain the log.
    pub min_columns: usize,
}

impl fmt::Display for InsufficientSpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "not sufficient vertical space with {} columns at {}:1: available {:.3} pt, \
             log length {:.3} pt, column height {:.3} pt, excess {:.3} pt; at least {} \
             columns (or a smaller vscale) would fit the log",
            self.columns,
            self.vscale,
            self.available,
            self.required,
            self.column_height,
            self.required - self.available,
            self.min_columns
        )
    }
}

/// Any fatal render error.
#[derive(Debug, Clone, PartialEq)]
pub enum LogError {
    /// Malformed setup.
    Configuration(ConfigurationError),
    /// A unit references a code absent from its table.
    UnknownCode(UnknownCodeError),
    /// The scale/columns/page combination cannot contain the log.
    InsufficientSpace(InsufficientSpaceError),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(e) => e.fmt(f),
            Self::UnknownCode(e) => e.fmt(f),
            Self::InsufficientSpace(e) => e.fmt(f),
        }
    }
}

impl From<ConfigurationError> for LogError {
    fn from(value: ConfigurationError) -> Self {
        Self::Configuration(value)
    }
}

impl From<UnknownCodeError> for LogError {
    fn from(value: UnknownCodeError) -> Self {
        Self::UnknownCode(value)
    }
}

impl From<InsufficientSpaceError> for LogError {
    fn from(value: InsufficientSpaceError) -> Self {
        Self::InsufficientSpace(value)
    }
}

/// Non-fatal layout advisories.
///
/// The render proceeds with a documented fallback in every case.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutWarning {
    /// A manual column height exceeds the usable page height; the drawn log
    /// will hang off the page.
    ColumnOverflowsPage {
        /// Usable page height (page minus origin and padding), in points.
        page_height: f64,
        /// The requested column height, in points.
        column_height: f64,
    },
    /// A per-unit label array does not match the unit count; labelling is
    /// disabled for this render.
    LabelsLengthMismatch {
        /// Number of labels provided.
        labels: usize,
        /// Number of units in the log.
        units: usize,
    },
    /// The log has fewer than two units and will produce a degenerate
    /// diagram.
    DegenerateLog {
        /// Number of units provided.
        units: usize,
    },
}

impl fmt::Display for LayoutWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnOverflowsPage {
                page_height,
                column_height,
            } => write!(
                f,
                "column height {:.3} pt exceeds usable page height {:.3} pt by {:.3} pt; \
                 the drawn log will hang off the page",
                column_height,
                page_height,
                column_height - page_height
            ),
            Self::LabelsLengthMismatch { labels, units } => write!(
                f,
                "labels must be of the same length as the unit sequence \
                 ({labels} labels for {units} units); printing no labels"
            ),
            Self::DegenerateLog { units } => write!(
                f,
                "only {units} unit(s) provided; the diagram will be degenerate"
            ),
        }
    }
}

/// Records a warning and forwards it to the `log` facade.
pub(crate) fn push_warning(warnings: &mut Vec<LayoutWarning>, warning: LayoutWarning) {
    log::warn!("{warning}");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn insufficient_space_reports_the_numbers() {
        let err = InsufficientSpaceError {
            columns: 2,
            vscale: 100.0,
            available: 800.0,
            required: 1000.0,
            column_height: 400.0,
            min_columns: 3,
        };
        let msg = format!("{err}");
        assert!(msg.contains("2 columns"), "{msg}");
        assert!(msg.contains("800.000"), "{msg}");
        assert!(msg.contains("1000.000"), "{msg}");
        assert!(msg.contains("400.000"), "{msg}");
        assert!(msg.contains("at least 3"), "{msg}");
    }

    #[test]
    fn unknown_code_names_table_and_unit() {
        let err = UnknownCodeError {
            kind: CodeKind::Facies,
            code: "xx".to_string(),
            unit: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("unit 4"), "{msg}");
        assert!(msg.contains("facies"), "{msg}");
        assert!(msg.contains("\"xx\""), "{msg}");
    }
}
