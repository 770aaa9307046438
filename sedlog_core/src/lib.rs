// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal drawing-primitive layer for sedimentary log rendering.
//!
//! This crate is the boundary between log layout and actual drawing:
//! - **Marks** are the only primitives the layout layer may emit: filled and
//!   stroked closed polygons (optionally clipped), straight rule segments,
//!   and unshaped text anchored at a point.
//! - A [`Scene`] is an append-only accumulator of marks plus the [`Page`]
//!   dimensions. Paint order is append order; the layout layer never reads
//!   marks back.
//!
//! Scene coordinates are y-up with the origin at the lower-left corner of
//! the page (drafting convention). Renderers targeting y-down formats are
//! expected to flip during serialization.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

#![no_std]

extern crate alloc;

mod mark;
mod page;
mod scene;
mod units;

pub use mark::{Mark, PolygonMark, Points, RuleMark, TextAnchor, TextBaseline, TextMark};
pub use page::Page;
pub use scene::Scene;
pub use units::{LengthUnit, PT_PER_IN, PT_PER_MM, convert_length};
