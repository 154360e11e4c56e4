// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A generic trait for shapes.

use crate::Rect;

/// A shape that can be placed on the canvas.
pub trait Shape {
    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;
}
