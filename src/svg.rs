// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG document representation of a canvas template.
//!
//! The output has one fixed shape: an XML prolog, an `<svg>` root sized in
//! millimeters, a `<desc>` restating the measurements, and a single
//! stroke-only group holding the circles and the sheet rectangle.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use smallvec::{smallvec, SmallVec};

use crate::{Circle, Error, Layout, Length, Rect, Size};

/// The file name the template is written to.
pub const OUTPUT_FILE_NAME: &str = "nextdraw_canvas_template.svg";

/// Stroke width, in user units. Paired with `non-scaling-stroke`, so it is
/// not affected by how the viewer scales the canvas.
const STROKE_WIDTH: f64 = 0.2;

/// A fixed-precision number as it appears in the document.
///
/// Every derived quantity is written with exactly six decimals.
#[derive(Clone, Copy, Debug)]
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// A drawable element of the template.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Element {
    /// A circle, written as `<circle cx cy r>`.
    Circle(Circle),
    /// A rectangle, written as `<rect x y width height>` from its origin.
    Rect(Rect),
}

impl Element {
    /// The comment heading a run of elements of this kind.
    fn heading(&self) -> &'static str {
        match self {
            Element::Circle(_) => "Circles",
            Element::Rect(_) => "Rectangle",
        }
    }

    fn same_kind(&self, other: &Element) -> bool {
        core::mem::discriminant(self) == core::mem::discriminant(other)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Circle(c) => write!(
                f,
                r#"<circle cx="{}" cy="{}" r="{}" />"#,
                Num(c.center.x),
                Num(c.center.y),
                Num(c.radius),
            ),
            Element::Rect(r) => write!(
                f,
                r#"<rect x="{}" y="{}" width="{}" height="{}" />"#,
                Num(r.x0),
                Num(r.y0),
                Num(r.width()),
                Num(r.height()),
            ),
        }
    }
}

/// The human-readable measurements restated in `<desc>`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Description {
    circle_diameter: Length,
    spacing: Length,
    sheet: Size,
    offset: Length,
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The diameter is an input, so it is shown as given rather than padded.
        writeln!(
            f,
            "    Two circles (diameter {:?} mm) spaced {} mm center-to-center;",
            self.circle_diameter.mm(),
            Num(self.spacing.mm()),
        )?;
        writeln!(
            f,
            "    centered rectangle {} mm x {} mm,",
            Num(self.sheet.width),
            Num(self.sheet.height),
        )?;
        writeln!(
            f,
            "    with its center {} mm below the circles' centers.",
            Num(self.offset.mm()),
        )?;
        writeln!(f, "    All units are millimeters.")
    }
}

/// A complete SVG canvas template.
///
/// Built once from a [`Layout`] and not modified afterwards. The text of
/// the document is produced by its `Display` implementation.
///
/// # Examples
///
/// ```
/// use nextdraw_canvas::{CanvasSpec, Document};
///
/// let doc = Document::new(&CanvasSpec::NEXTDRAW.layout());
/// let svg = doc.to_string();
/// assert!(svg.starts_with("<?xml"));
/// assert_eq!(svg.matches("<circle ").count(), 2);
/// assert_eq!(svg.matches("<rect ").count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    viewport: Rect,
    description: Description,
    elements: SmallVec<[Element; 3]>,
}

impl Document {
    /// Build the document for a computed layout.
    pub fn new(layout: &Layout) -> Document {
        let spec = &layout.spec;
        Document {
            viewport: layout.viewport,
            description: Description {
                circle_diameter: spec.circle_diameter,
                spacing: spec.circle_spacing,
                sheet: Size::from_lengths(spec.sheet_width, spec.sheet_height),
                offset: spec.sheet_offset,
            },
            elements: smallvec![
                Element::Circle(layout.left),
                Element::Circle(layout.right),
                Element::Rect(layout.sheet),
            ],
        }
    }

    /// The `viewBox` of the document.
    #[inline]
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// The drawn elements, in document order.
    #[inline]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Write the document to `path` as UTF-8, replacing any existing file.
    ///
    /// Returns the absolute path that was written. A relative `path` is
    /// joined onto the current directory; symlinks and `..` are left as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Resolve`] if `path` cannot be made absolute (the
    /// current directory is gone), and [`Error::Write`] if the file cannot
    /// be written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<PathBuf, Error> {
        let path = path.as_ref();
        let resolved = std::path::absolute(path).map_err(|source| Error::Resolve {
            path: path.to_owned(),
            source,
        })?;
        let text = self.to_string();
        fs::write(&resolved, &text).map_err(|source| Error::Write {
            path: path.to_owned(),
            source,
        })?;
        info!("wrote {} bytes to {}", text.len(), resolved.display());
        Ok(resolved)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vb = self.viewport;
        let (w, h) = (Num(vb.width()), Num(vb.height()));
        writeln!(
            f,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"#
        )?;
        writeln!(f, r#"<svg xmlns="http://www.w3.org/2000/svg""#)?;
        writeln!(f, r#"     width="{w}mm" height="{h}mm""#)?;
        writeln!(
            f,
            r#"     viewBox="{} {} {w} {h}">"#,
            Num(vb.x0),
            Num(vb.y0)
        )?;
        writeln!(f, "  <desc>")?;
        write!(f, "{}", self.description)?;
        writeln!(f, "  </desc>")?;
        writeln!(
            f,
            r##"  <g fill="none" stroke="#FFF" stroke-width="{STROKE_WIDTH}" vector-effect="non-scaling-stroke">"##
        )?;
        let mut prev: Option<&Element> = None;
        for el in &self.elements {
            if !prev.is_some_and(|p| p.same_kind(el)) {
                writeln!(f, "    <!-- {} -->", el.heading())?;
            }
            writeln!(f, "    {el}")?;
            prev = Some(el);
        }
        writeln!(f, "  </g>")?;
        writeln!(f, "</svg>")
    }
}
