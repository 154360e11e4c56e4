// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the registration circles and the sheet on the canvas.
//!
//! Everything is laid out around the origin: the two circles sit on the
//! centerline `y = 0`, mirrored across `x = 0`, and the sheet hangs below
//! them (positive y, since the canvas is y-down).

use log::debug;

use crate::{Circle, Insets, Length, Point, Rect, Shape, Size};

/// The measurements a canvas template is built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    /// Diameter of each registration circle.
    pub circle_diameter: Length,
    /// Center-to-center distance between the two circles.
    pub circle_spacing: Length,
    /// Width of the sheet rectangle.
    pub sheet_width: Length,
    /// Height of the sheet rectangle.
    pub sheet_height: Length,
    /// How far the sheet center sits below the circles' centerline.
    pub sheet_offset: Length,
    /// Margin added around all shapes to size the viewport.
    pub padding: Length,
}

impl CanvasSpec {
    /// The NextDraw template: 1.55 cm circles spaced 36 21/32" apart, above
    /// a 34" x 22" sheet whose center is 3 cm below the circles.
    pub const NEXTDRAW: CanvasSpec = CanvasSpec {
        circle_diameter: Length::from_cm(1.55),
        circle_spacing: Length::from_inch_fraction(36, 21, 32),
        sheet_width: Length::from_inches(34.0),
        sheet_height: Length::from_inches(22.0),
        sheet_offset: Length::from_cm(3.0),
        padding: Length::from_mm(10.0),
    };

    /// Compute where every shape goes.
    pub fn layout(&self) -> Layout {
        let radius = self.circle_diameter.half().mm();
        let half_sep = self.circle_spacing.half().mm();

        let right_center = Point::new(half_sep, 0.0);
        let left = Circle::new(right_center.mirror_x(), radius);
        let right = Circle::new(right_center, radius);

        let sheet_center = Point::new(0.0, self.sheet_offset.mm());
        let sheet = Rect::from_center_size(
            sheet_center,
            Size::from_lengths(self.sheet_width, self.sheet_height),
        );

        let viewport = left
            .bounding_box()
            .union(right.bounding_box())
            .union(sheet.bounding_box())
            + Insets::uniform(self.padding.mm());
        debug_assert!(
            [left.bounding_box(), right.bounding_box(), sheet.bounding_box()]
                .into_iter()
                .all(|bbox| viewport.contains_rect(bbox)),
            "viewport must enclose every shape"
        );

        debug!("circles at {} and {}, r = {radius}", left.center, right.center);
        debug!("sheet origin {}, size {}", sheet.origin(), sheet.size());
        debug!("viewport {viewport:?}");

        Layout {
            spec: *self,
            left,
            right,
            sheet,
            viewport,
        }
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        CanvasSpec::NEXTDRAW
    }
}

/// Computed canvas geometry, in millimeters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// The measurements this layout was computed from.
    pub spec: CanvasSpec,
    /// The circle left of the origin.
    pub left: Circle,
    /// The circle right of the origin.
    pub right: Circle,
    /// The sheet rectangle.
    pub sheet: Rect,
    /// The padded bounding box of all shapes; becomes the SVG `viewBox`.
    pub viewport: Rect,
}

impl Layout {
    /// The key quantities, for reporting.
    pub fn summary(&self) -> Summary {
        Summary {
            circle_d_mm: self.spec.circle_diameter,
            circle_r_mm: Length::from_mm(self.left.radius),
            spacing_mm: self.spec.circle_spacing,
            rect_w_mm: self.spec.sheet_width,
            rect_h_mm: self.spec.sheet_height,
            rect_center_offset_mm: self.spec.sheet_offset,
        }
    }
}

/// The six numbers printed after the template is written.
///
/// Serializes to a JSON object with keys in declaration order.
///
/// ```
/// use nextdraw_canvas::CanvasSpec;
///
/// let json = serde_json::to_string(&CanvasSpec::NEXTDRAW.layout().summary()).unwrap();
/// assert!(json.starts_with(r#"{"circle_d_mm":15.5,"circle_r_mm":7.75,"#));
/// assert!(json.ends_with(r#""rect_center_offset_mm":30.0}"#));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Summary {
    /// Circle diameter.
    pub circle_d_mm: Length,
    /// Circle radius.
    pub circle_r_mm: Length,
    /// Center-to-center circle spacing.
    pub spacing_mm: Length,
    /// Sheet width.
    pub rect_w_mm: Length,
    /// Sheet height.
    pub rect_h_mm: Length,
    /// Sheet center offset below the centerline.
    pub rect_center_offset_mm: Length,
}
