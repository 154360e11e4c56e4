// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A description of the distances between the edges of two rectangles.

use core::ops::Add;

use crate::Rect;

/// Insets from the edges of a rectangle.
///
/// A positive inset represents increased distance from center, so adding
/// insets to a rectangle grows it. This is how canvas padding is applied.
///
/// # Examples
///
/// ```
/// use nextdraw_canvas::{Insets, Rect};
///
/// let rect = Rect::new(0., 0., 10., 10.);
/// let padded = rect + Insets::uniform(3.);
///
/// assert_eq!(padded.width(), 16.0, "10.0 + 3.0 * 2");
/// assert_eq!(padded.x0, -3.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Insets {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Insets {
    /// New uniform insets.
    #[inline]
    pub const fn uniform(d: f64) -> Insets {
        Insets {
            x0: d,
            y0: d,
            x1: d,
            y1: d,
        }
    }
}

impl Add<Rect> for Insets {
    type Output = Rect;

    fn add(self, other: Rect) -> Rect {
        let other = other.abs();
        Rect::new(
            other.x0 - self.x0,
            other.y0 - self.y0,
            other.x1 + self.x1,
            other.y1 + self.y1,
        )
    }
}

impl Add<Insets> for Rect {
    type Output = Rect;

    fn add(self, other: Insets) -> Rect {
        other + self
    }
}
