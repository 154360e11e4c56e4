// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas templates for the NextDraw pen plotter.
//!
//! A template is two small registration circles on a shared centerline
//! with a sheet-sized rectangle hanging below them, written out as an SVG
//! sized in millimeters so it can be loaded straight into the plotter
//! software.
//!
//! All geometry is in millimeters; inputs given in inches or centimeters
//! are converted as soon as they become a [`Length`].
//!
//! # Examples
//!
//! ```
//! use nextdraw_canvas::{CanvasSpec, Document, Shape};
//!
//! let layout = CanvasSpec::NEXTDRAW.layout();
//!
//! // The padded viewport encloses every shape.
//! let vp = layout.viewport;
//! assert!(vp.contains_rect(layout.left.bounding_box()));
//! assert!(vp.contains_rect(layout.sheet.bounding_box()));
//!
//! let svg = Document::new(&layout).to_string();
//! assert!(svg.contains(r#"viewBox="-483.284375 -259.400000 966.568750 578.800000""#));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]

mod circle;
mod error;
mod insets;
mod layout;
mod point;
mod rect;
mod shape;
mod size;
mod svg;
pub mod units;
mod vec2;

pub use crate::circle::*;
pub use crate::error::*;
pub use crate::insets::*;
pub use crate::layout::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::shape::*;
pub use crate::size::*;
pub use crate::svg::*;
pub use crate::units::Length;
pub use crate::vec2::*;
