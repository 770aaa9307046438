// Copyright 2025 the Sedlog Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sedimentary log demos for `sedlog_core`.
mod svg;

use sedlog_charts::{
    FaciesTable, GrainSizeTable, KeySpec, LabelSource, LogRender, LogSpec, PaperSize, Unit,
    units_from_columns,
};
use sedlog_core::Scene;

fn main() {
    write_log("sedlog_demo.svg", &section_demo());
    write_log("sedlog_split_demo.svg", &split_demo());
    write_key("sedlog_key.svg");
}

/// A short fluvial measured section: gravel lag, trough and planar
/// cross-bedded bars, rippled tops, and overbank fines.
fn measured_section() -> Vec<Unit> {
    let thicknesses = [
        0.8, 1.4, 0.6, 0.3, 1.1, 0.5, 0.9, 1.6, 0.4, 0.7, 1.0, 0.5,
    ];
    let grain_base = [
        "pebb", "c", "m", "si", "f", "vf", "m", "c", "f", "si", "vf", "cl",
    ];
    let grain_top = [
        "gr", "m", "NaN", "NaN", "vf", "NaN", "f", "m", "NaN", "NaN", "NaN", "NaN",
    ];
    let facies = [
        "gcm", "st", "sp", "fsl", "sr", "fsr", "sm", "st", "sh", "fcl", "fsm", "fcm",
    ];
    units_from_columns(&thicknesses, &grain_base, &grain_top, &facies, "NaN")
        .expect("demo columns align")
}

fn section_demo() -> LogRender {
    LogSpec::new(
        measured_section(),
        GrainSizeTable::siliciclastic(),
        FaciesTable::palette(),
        PaperSize::A4.page(),
        25.0,
    )
    .with_labels(LabelSource::Facies)
    .render()
    .expect("demo section renders")
}

fn split_demo() -> LogRender {
    // Short 4 m columns at 50:1 paginate the same section across the page.
    LogSpec::new(
        measured_section(),
        GrainSizeTable::siliciclastic(),
        FaciesTable::palette(),
        PaperSize::A4.page(),
        50.0,
    )
    .with_manual_column_height(4.0)
    .with_labels(LabelSource::Numbers)
    .render()
    .expect("demo section renders")
}

fn write_log(path: &str, render: &LogRender) {
    for warning in &render.warnings {
        eprintln!("{path}: warning: {warning}");
    }
    let mut scene = Scene::new(PaperSize::A4.page());
    scene.extend(render.marks.iter().cloned());
    std::fs::write(path, svg::scene_to_svg(&scene)).expect("write svg");
    println!(
        "wrote {path} ({} columns, {} marks)",
        render.columns.columns,
        scene.len()
    );
}

fn write_key(path: &str) {
    let key = KeySpec::new(FaciesTable::palette())
        .with_rows(KeySpec::default_rows())
        .render()
        .expect("palette key renders");
    let mut scene = Scene::new(key.page);
    scene.extend(key.marks.iter().cloned());
    std::fs::write(path, svg::scene_to_svg(&scene)).expect("write svg");
    println!("wrote {path} ({} marks)", scene.len());
}
