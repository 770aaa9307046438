// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark primitives.
//!
//! A mark is one drawing operation. The set is deliberately small: log
//! diagrams are built from stroked/filled quadrilaterals, short rule
//! segments, and text anchored at a point.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Brush;
use smallvec::SmallVec;

/// Vertex storage for polygon marks.
///
/// Log units are quadrilaterals, so four vertices stay inline.
pub type Points = SmallVec<[Point; 4]>;

/// Horizontal text anchoring relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// The text starts at the anchor point.
    #[default]
    Start,
    /// The text is centered on the anchor point.
    Middle,
    /// The text ends at the anchor point.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    /// The visual midline runs through the anchor point.
    #[default]
    Middle,
    /// The alphabetic baseline runs through the anchor point.
    Alphabetic,
    /// The text hangs below the anchor point.
    Hanging,
}

/// A single drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    /// A filled and stroked closed polygon, optionally clipped.
    Polygon(PolygonMark),
    /// A stroked straight line segment.
    Rule(RuleMark),
    /// Unshaped text anchored at a point.
    Text(TextMark),
}

/// A filled and stroked closed polygon, optionally clipped.
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonMark {
    /// Polygon vertices, implicitly closed.
    pub points: Points,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in points. Zero disables the stroke.
    pub stroke_width: f64,
    /// Optional clip boundary polygon, implicitly closed.
    ///
    /// When set, only the part of the polygon inside the clip boundary is
    /// painted.
    pub clip: Option<Points>,
}

impl PolygonMark {
    /// Creates a polygon from its vertices with default paint.
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 0.0,
            clip: None,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }

    /// Sets a clip boundary polygon.
    pub fn with_clip(mut self, clip: impl IntoIterator<Item = Point>) -> Self {
        self.clip = Some(clip.into_iter().collect());
        self
    }
}

/// A stroked straight line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    /// Segment start.
    pub p0: Point,
    /// Segment end.
    pub p1: Point,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in points.
    pub stroke_width: f64,
}

impl RuleMark {
    /// Creates a rule between two points.
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Self {
        Self {
            p0: p0.into(),
            p1: p1.into(),
            stroke: Brush::default(),
            stroke_width: 1.0,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(y: f64, x0: f64, x1: f64) -> Self {
        Self::new((x0, y), (x1, y))
    }

    /// Creates a vertical rule.
    pub fn vertical(x: f64, y0: f64, y1: f64) -> Self {
        Self::new((x, y0), (x, y1))
    }

    /// Sets stroke paint and width.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke = stroke.into();
        self.stroke_width = stroke_width;
        self
    }
}

/// Unshaped text anchored at a point.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position.
    pub pos: Point,
    /// Text content (unshaped).
    pub text: String,
    /// Font size in points.
    pub font_size: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: TextBaseline,
    /// Rotation around the anchor point, degrees counter-clockwise.
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
}

impl TextMark {
    /// Creates a text mark with default styling.
    pub fn new(pos: impl Into<Point>, text: impl Into<String>) -> Self {
        Self {
            pos: pos.into(),
            text: text.into(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Middle,
            angle: 0.0,
            fill: Brush::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the vertical alignment.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the rotation angle (degrees counter-clockwise).
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }
}

impl From<PolygonMark> for Mark {
    fn from(value: PolygonMark) -> Self {
        Self::Polygon(value)
    }
}

impl From<RuleMark> for Mark {
    fn from(value: RuleMark) -> Self {
        Self::Rule(value)
    }
}

impl From<TextMark> for Mark {
    fn from(value: TextMark) -> Self {
        Self::Text(value)
    }
}
