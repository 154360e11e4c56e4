// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end checks of the generated template.

use nextdraw_canvas::{CanvasSpec, Document, OUTPUT_FILE_NAME};

const EXPECTED: &str = r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="966.568750mm" height="578.800000mm"
     viewBox="-483.284375 -259.400000 966.568750 578.800000">
  <desc>
    Two circles (diameter 15.5 mm) spaced 931.068750 mm center-to-center;
    centered rectangle 863.600000 mm x 558.800000 mm,
    with its center 30.000000 mm below the circles' centers.
    All units are millimeters.
  </desc>
  <g fill="none" stroke="#FFF" stroke-width="0.2" vector-effect="non-scaling-stroke">
    <!-- Circles -->
    <circle cx="-465.534375" cy="0.000000" r="7.750000" />
    <circle cx="465.534375" cy="0.000000" r="7.750000" />
    <!-- Rectangle -->
    <rect x="-431.800000" y="-249.400000" width="863.600000" height="558.800000" />
  </g>
</svg>
"##;

#[test]
fn nextdraw_template_text() {
    let doc = Document::new(&CanvasSpec::NEXTDRAW.layout());
    assert_eq!(doc.to_string(), EXPECTED);
}

#[test]
fn rendering_is_byte_identical_across_runs() {
    let first = Document::new(&CanvasSpec::default().layout()).to_string();
    let second = Document::new(&CanvasSpec::default().layout()).to_string();
    assert_eq!(first, second);
}

#[test]
fn written_file_matches_rendering() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(OUTPUT_FILE_NAME);
    let written = Document::new(&CanvasSpec::NEXTDRAW.layout())
        .write_to(&path)
        .unwrap();
    assert!(written.ends_with(OUTPUT_FILE_NAME));
    assert_eq!(std::fs::read_to_string(written).unwrap(), EXPECTED);
}

#[test]
fn summary_json() {
    let summary = CanvasSpec::NEXTDRAW.layout().summary();
    let json = serde_json::to_string(&summary).unwrap();
    assert_eq!(
        json,
        concat!(
            r#"{"circle_d_mm":15.5,"circle_r_mm":7.75,"spacing_mm":931.0687499999999,"#,
            r#""rect_w_mm":863.5999999999999,"rect_h_mm":558.8,"rect_center_offset_mm":30.0}"#
        )
    );
}
