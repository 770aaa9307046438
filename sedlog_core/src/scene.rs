// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The append-only scene.

extern crate alloc;

use alloc::vec::Vec;

use crate::mark::Mark;
use crate::page::Page;

/// An append-only accumulator of marks for one page.
///
/// Paint order is append order; there is no z-index and no read-back. A
/// failed render may have already appended marks, so callers should discard
/// the scene on error rather than retry onto it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    page: Page,
    marks: Vec<Mark>,
}

impl Scene {
    /// Creates an empty scene for the given page.
    pub fn new(page: Page) -> Self {
        Self {
            page,
            marks: Vec::new(),
        }
    }

    /// Returns the page dimensions.
    pub fn page(&self) -> Page {
        self.page
    }

    /// Appends one mark.
    pub fn push(&mut self, mark: impl Into<Mark>) {
        self.marks.push(mark.into());
    }

    /// Appends a sequence of marks, preserving their order.
    pub fn extend(&mut self, marks: impl IntoIterator<Item = Mark>) {
        self.marks.extend(marks);
    }

    /// Returns the accumulated marks in paint order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the number of accumulated marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mark::RuleMark;

    #[test]
    fn append_order_is_preserved() {
        let mut scene = Scene::new(Page::new(100.0, 100.0));
        scene.push(RuleMark::horizontal(0.0, 0.0, 1.0));
        scene.push(RuleMark::horizontal(1.0, 0.0, 1.0));
        scene.push(RuleMark::horizontal(2.0, 0.0, 1.0));

        let ys: Vec<f64> = scene
            .marks()
            .iter()
            .map(|m| match m {
                Mark::Rule(r) => r.p0.y,
                _ => panic!("expected rules only"),
            })
            .collect();
        assert_eq!(ys, [0.0, 1.0, 2.0]);
    }
}
