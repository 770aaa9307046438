// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate alloc;

use alloc::string::ToString;
use alloc::vec;
use alloc::vec::Vec;

use sedlog_core::{Mark, PT_PER_MM, PolygonMark};

use crate::{
    FaciesTable, GrainSizeTable, LabelSource, LabelStrategy, LayoutWarning, LogError, LogSpec,
    PaperSize, Unit,
};

fn three_unit_log() -> Vec<Unit> {
    vec![
        Unit::new(1.0, "f", "sm"),
        Unit::new(2.0, "f", "sm"),
        Unit::new(1.0, "f", "sm"),
    ]
}

fn spec(units: Vec<Unit>, vscale: f64) -> LogSpec {
    LogSpec::new(
        units,
        GrainSizeTable::siliciclastic(),
        FaciesTable::palette(),
        PaperSize::A4.page(),
        vscale,
    )
}

fn polygons(marks: &[Mark]) -> Vec<&PolygonMark> {
    marks
        .iter()
        .filter_map(|m| match m {
            Mark::Polygon(p) => Some(p),
            _ => None,
        })
        .collect()
}

fn label_texts(marks: &[Mark]) -> Vec<&str> {
    // Unit labels are the only upright text to the right of the grain
    // columns; axis text is either rotated or anchored left of a baseline.
    marks
        .iter()
        .filter_map(|m| match m {
            Mark::Text(t) if t.angle == 0.0 && t.font_size == 9.0 => Some(t),
            _ => None,
        })
        .filter(|t| t.anchor == sedlog_core::TextAnchor::Start)
        .map(|t| t.text.as_str())
        .collect()
}

#[test]
fn four_meters_on_a4_is_one_column_of_three_rectangles() {
    let render = spec(three_unit_log(), 100.0).render().expect("fits an a4");
    assert_eq!(render.columns.columns, 1);
    assert!(render.warnings.is_empty(), "warnings: {:?}", render.warnings);

    let boxes = polygons(&render.marks);
    assert_eq!(boxes.len(), 3, "three units, none split");
    for b in &boxes {
        assert!(b.clip.is_none(), "unsplit units need no clip");
        // Uniform grain size: base and top edges share their right x.
        assert_eq!(b.points[1].x, b.points[2].x);
    }

    // Drawn bottom-to-top: 1 m at 100:1 is ~28.35 pt per metre above the
    // 40 pt origin.
    let meter = 1000.0 * PT_PER_MM / 100.0;
    let y_bases: Vec<f64> = boxes.iter().map(|b| b.points[0].y).collect();
    assert!((y_bases[0] - 40.0).abs() < 1e-9, "bases: {y_bases:?}");
    assert!((y_bases[1] - (40.0 + meter)).abs() < 1e-9, "bases: {y_bases:?}");
    assert!(
        (y_bases[2] - (40.0 + 3.0 * meter)).abs() < 1e-9,
        "bases: {y_bases:?}"
    );
}

#[test]
fn forced_split_draws_a_continuous_unit_across_two_columns() {
    // A 600 pt manual column at 10:1 forces the 4 m log into two columns,
    // splitting the 2 m middle unit.
    let manual = 600.0 * 10.0 / (1000.0 * PT_PER_MM);
    let render = spec(three_unit_log(), 10.0)
        .with_manual_column_height(manual)
        .render()
        .expect("two columns fit");
    assert_eq!(render.columns.columns, 2);
    assert!(render.warnings.is_empty(), "warnings: {:?}", render.warnings);

    let boxes = polygons(&render.marks);
    assert_eq!(boxes.len(), 4, "three units, one drawn twice");

    let clipped: Vec<&&PolygonMark> = boxes.iter().filter(|b| b.clip.is_some()).collect();
    assert_eq!(clipped.len(), 2, "both fragments of the split unit clip");

    // The two fragments share their facies fill and tile the unit height.
    assert_eq!(clipped[0].fill, clipped[1].fill);
    let visible: f64 = clipped
        .iter()
        .map(|b| {
            let clip = b.clip.as_ref().expect("filtered on clip");
            clip[2].y - clip[0].y
        })
        .sum();
    let unit_height = 2.0 * 1000.0 * PT_PER_MM / 10.0;
    assert!(
        (visible - unit_height).abs() < 1e-9,
        "fragments show {visible} of {unit_height}"
    );
}

#[test]
fn oversized_manual_column_warns_but_still_renders() {
    let manual = 900.0 * 10.0 / (1000.0 * PT_PER_MM);
    let render = spec(three_unit_log(), 10.0)
        .with_manual_column_height(manual)
        .render()
        .expect("overflow is advisory");
    assert!(
        matches!(
            render.warnings.as_slice(),
            [LayoutWarning::ColumnOverflowsPage { .. }]
        ),
        "warnings: {:?}",
        render.warnings
    );
}

#[test]
fn pinned_column_budget_fails_when_too_small() {
    let manual = 600.0 * 10.0 / (1000.0 * PT_PER_MM);
    let err = spec(three_unit_log(), 10.0)
        .with_manual_column_height(manual)
        .with_columns(1)
        .render()
        .expect_err("one 600 pt column cannot hold ~1134 pt");
    match err {
        LogError::InsufficientSpace(e) => {
            assert_eq!(e.min_columns, 2);
            assert!(e.required > e.available, "{e}");
        }
        other => panic!("expected InsufficientSpace, got {other:?}"),
    }
}

#[test]
fn polite_labels_skip_thin_units() {
    let units = vec![
        Unit::new(2.0, "f", "sm"),
        Unit::new(0.2, "f", "sh"),
        Unit::new(2.0, "f", "st"),
    ];
    // At 100:1 the middle unit draws ~5.7 pt tall, under the 9 pt
    // legibility threshold.
    let render = spec(units.clone(), 100.0)
        .with_labels(LabelSource::Facies)
        .render()
        .expect("valid log");
    assert_eq!(label_texts(&render.marks), ["sm", "st"]);

    let render = spec(units, 100.0)
        .with_labels(LabelSource::Facies)
        .with_label_strategy(LabelStrategy::All)
        .render()
        .expect("valid log");
    assert_eq!(label_texts(&render.marks), ["sm", "sh", "st"]);
}

#[test]
fn number_labels_are_zero_based() {
    let render = spec(three_unit_log(), 100.0)
        .with_labels(LabelSource::Numbers)
        .render()
        .expect("valid log");
    assert_eq!(label_texts(&render.marks), ["0", "1", "2"]);
}

#[test]
fn per_unit_labels_skip_blank_entries() {
    let labels = LabelSource::PerUnit(vec![
        Some("base".to_string()),
        None,
        Some("top".to_string()),
    ]);
    let render = spec(three_unit_log(), 100.0)
        .with_labels(labels)
        .render()
        .expect("valid log");
    assert_eq!(label_texts(&render.marks), ["base", "top"]);
}

#[test]
fn mismatched_label_array_warns_and_renders_unlabelled() {
    let labels = LabelSource::PerUnit(vec![Some("only".to_string())]);
    let render = spec(three_unit_log(), 100.0)
        .with_labels(labels)
        .render()
        .expect("falls back to no labels");
    assert!(label_texts(&render.marks).is_empty());
    assert!(
        matches!(
            render.warnings.as_slice(),
            [LayoutWarning::LabelsLengthMismatch { labels: 1, units: 3 }]
        ),
        "warnings: {:?}",
        render.warnings
    );
}

#[test]
fn unknown_facies_code_aborts_the_render() {
    let units = vec![Unit::new(1.0, "f", "martian")];
    let err = spec(units, 100.0).render().expect_err("martian facies");
    match err {
        LogError::UnknownCode(e) => {
            assert_eq!(e.code, "martian");
            assert_eq!(e.unit, 0);
        }
        other => panic!("expected UnknownCode, got {other:?}"),
    }
}
