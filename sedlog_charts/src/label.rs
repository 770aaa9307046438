// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit labelling.
//!
//! The label source decides *what* text a unit gets; the strategy decides
//! *whether* a too-thin unit gets it at all. Sources are resolved once,
//! before the layout pass.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::{LayoutWarning, push_warning};

/// Where unit label text comes from.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LabelSource {
    /// No labels.
    #[default]
    None,
    /// Label each unit with its facies code.
    Facies,
    /// Label each unit with its zero-based index from the log base.
    Numbers,
    /// Label each unit with a caller-supplied string; `None` entries are
    /// skipped.
    PerUnit(Vec<Option<String>>),
}

/// Whether to suppress labels that would not fit legibly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelStrategy {
    /// Skip labels on units whose visible height is below the legibility
    /// threshold.
    #[default]
    Polite,
    /// Label every unit regardless of size.
    All,
}

/// Converts a raw label column into per-unit labels.
///
/// Entries equal to `sentinel` (the "no data" marker, conventionally
/// `"NaN"`) become `None` and are never drawn.
pub fn labels_from_column(labels: &[&str], sentinel: &str) -> Vec<Option<String>> {
    labels
        .iter()
        .map(|&l| (l != sentinel).then(|| l.to_string()))
        .collect()
}

/// A label source checked against the unit count.
#[derive(Debug)]
pub(crate) enum ResolvedLabels<'a> {
    None,
    Facies,
    Numbers,
    PerUnit(&'a [Option<String>]),
}

impl LabelSource {
    /// Resolves this source for a log of `units` units.
    ///
    /// A per-unit array of the wrong length falls back to no labels with a
    /// warning rather than failing.
    pub(crate) fn resolve<'a>(
        &'a self,
        units: usize,
        warnings: &mut Vec<LayoutWarning>,
    ) -> ResolvedLabels<'a> {
        match self {
            Self::None => ResolvedLabels::None,
            Self::Facies => ResolvedLabels::Facies,
            Self::Numbers => ResolvedLabels::Numbers,
            Self::PerUnit(labels) => {
                if labels.len() == units {
                    ResolvedLabels::PerUnit(labels)
                } else {
                    push_warning(
                        warnings,
                        LayoutWarning::LabelsLengthMismatch {
                            labels: labels.len(),
                            units,
                        },
                    );
                    ResolvedLabels::None
                }
            }
        }
    }
}

impl ResolvedLabels<'_> {
    /// Returns the label text for one unit, if any.
    pub(crate) fn text_for(&self, index: usize, facies: &str) -> Option<String> {
        match self {
            Self::None => None,
            Self::Facies => Some(facies.to_string()),
            Self::Numbers => Some(format!("{index}")),
            Self::PerUnit(labels) => labels.get(index).cloned().flatten(),
        }
    }
}
