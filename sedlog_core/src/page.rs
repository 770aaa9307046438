// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page dimensions.

/// Page dimensions in drawing points.
///
/// The page is the only thing the layout layer ever reads from a drawing
/// surface; everything else flows one way, from layout into the scene.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Page {
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
}

impl Page {
    /// Creates a page from explicit point dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}
