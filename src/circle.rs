// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use crate::{Point, Rect, Shape};

/// A circle.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    #[inline]
    pub const fn new(center: Point, radius: f64) -> Circle {
        Circle { center, radius }
    }
}

impl Shape for Circle {
    #[inline]
    fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let Point { x, y } = self.center;
        Rect::new(x - r, y - r, x + r, y + r)
    }
}
