// Copyright 2026 the NextDraw Canvas Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Physical lengths, normalized to millimeters.

use core::fmt;

/// Millimeters in one inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Millimeters in one centimeter.
pub const MM_PER_CM: f64 = 10.0;

/// A physical length.
///
/// Whatever unit a length is given in, it is converted to millimeters on
/// construction and only ever read back as millimeters. The constructors
/// are `const`, so fixed measurements can be written in the unit they were
/// taken in.
///
/// # Examples
///
/// ```
/// use nextdraw_canvas::Length;
///
/// assert!((Length::from_inches(34.0).mm() - 863.6).abs() < 1e-9);
/// assert_eq!(Length::from_cm(3.0), Length::from_mm(30.0));
/// ```
#[derive(Clone, Copy, Default, PartialEq)]
#[derive(serde::Serialize)]
#[serde(transparent)]
pub struct Length(f64);

impl Length {
    /// A length given in millimeters.
    #[inline]
    pub const fn from_mm(mm: f64) -> Length {
        Length(mm)
    }

    /// A length given in centimeters.
    #[inline]
    pub const fn from_cm(cm: f64) -> Length {
        Length(cm * MM_PER_CM)
    }

    /// A length given in inches.
    #[inline]
    pub const fn from_inches(inches: f64) -> Length {
        Length(inches * MM_PER_INCH)
    }

    /// A length given as a mixed number of inches, as read off a tape
    /// measure: `whole + numerator / denominator`.
    ///
    /// ```
    /// use nextdraw_canvas::Length;
    ///
    /// let spacing = Length::from_inch_fraction(36, 21, 32);
    /// assert_eq!(spacing.mm(), (36.0 + 21.0 / 32.0) * 25.4);
    /// ```
    #[inline]
    pub const fn from_inch_fraction(whole: u32, numerator: u32, denominator: u32) -> Length {
        let inches = whole as f64 + numerator as f64 / denominator as f64;
        Length::from_inches(inches)
    }

    /// The length in millimeters.
    #[inline]
    pub const fn mm(self) -> f64 {
        self.0
    }

    /// Half of this length.
    #[inline]
    pub fn half(self) -> Length {
        Length(self.0 / 2.0)
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}mm", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Length::from_mm(15.5).mm(), 15.5);
        assert_eq!(Length::from_cm(1.55).mm(), 15.5);
        assert_eq!(Length::from_inches(22.0).mm(), 22.0 * 25.4);
        assert_eq!(Length::from_inch_fraction(1, 1, 2).mm(), 1.5 * 25.4);
        assert_eq!(Length::from_inch_fraction(4, 0, 1), Length::from_inches(4.0));
        assert_eq!(Length::from_mm(10.0).half().mm(), 5.0);
    }

    #[test]
    fn const_and_runtime_conversions_agree() {
        const SPACING: Length = Length::from_inch_fraction(36, 21, 32);
        let (whole, num, den) = (36, 21, 32);
        assert_eq!(SPACING, Length::from_inch_fraction(whole, num, den));
        assert_eq!(SPACING.mm(), (36.0 + 21.0 / 32.0) * MM_PER_INCH);
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Length::from_mm(30.0)), "30.0mm");
    }
}
