// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writes `nextdraw_canvas_template.svg` to the current directory.
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see the computed geometry.

use anyhow::{Context, Result};
use nextdraw_canvas::{CanvasSpec, Document, OUTPUT_FILE_NAME};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let layout = CanvasSpec::default().layout();
    let written = Document::new(&layout)
        .write_to(OUTPUT_FILE_NAME)
        .with_context(|| format!("failed to write canvas template {OUTPUT_FILE_NAME}"))?;

    println!("Wrote: {}", written.display());
    let summary = serde_json::to_string(&layout.summary()).context("failed to encode summary")?;
    println!("{summary}");
    Ok(())
}
