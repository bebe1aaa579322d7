use std::fmt;

use crate::math::{nan_max, nan_min};

use super::{Point, Size};

/// An axis-aligned rectangle given by its top-left `location` and a `size`.
///
/// [`Rectangle::NAN`] stands for "no rectangle": it is what an empty union or
/// a failed intersection returns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    location: Point,
    size: Size,
}

impl Rectangle {
    /// The empty/invalid rectangle, all four components NaN.
    pub const NAN: Self = Self::new(Point::NAN, Size::new(f64::NAN, f64::NAN));

    /// Creates a rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(location: Point, size: Size) -> Self {
        Self { location, size }
    }

    /// Creates a rectangle from raw coordinates.
    #[must_use]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rectangle spanning two corners.
    ///
    /// Axes where `bottom_right` lies before `top_left` get a negative extent.
    #[must_use]
    pub fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        let d = bottom_right - top_left;
        Self::new(top_left, Size::new(d.x(), d.y()))
    }

    #[must_use]
    pub const fn location(&self) -> Point {
        self.location
    }

    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns `location + size`.
    #[must_use]
    pub fn bottom_right(&self) -> Point {
        Point::new(
            self.location.x() + self.size.width,
            self.location.y() + self.size.height,
        )
    }

    /// Returns the centre point, `location + size / 2`.
    #[must_use]
    pub fn centre(&self) -> Point {
        self.location + 0.5 * Point::new(self.size.width, self.size.height)
    }

    /// Returns `true` if all four components are NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.location.is_nan() && self.size.width.is_nan() && self.size.height.is_nan()
    }

    /// Tolerant equality of both corners, see [`Point::is_equal`].
    #[must_use]
    pub fn is_equal(&self, other: &Self, tolerance: f64) -> bool {
        self.location.is_equal(&other.location, tolerance)
            && self.bottom_right().is_equal(&other.bottom_right(), tolerance)
    }

    /// Smallest rectangle containing both inputs.
    ///
    /// Every corner of both rectangles is considered, so inputs with negative
    /// sizes are handled and the result always has a non-negative size.
    /// A NaN component in either input makes the affected axis NaN.
    #[must_use]
    pub fn union(a: &Self, b: &Self) -> Self {
        let (a0, a1) = (a.location, a.bottom_right());
        let (b0, b1) = (b.location, b.bottom_right());

        let min = a0.min(a1).min(b0.min(b1));
        let max = a0.max(a1).max(b0.max(b1));

        Self::from_corners(min, max)
    }

    /// Union of any number of rectangles, folded pairwise in one pass.
    ///
    /// Returns [`Rectangle::NAN`] for an empty sequence.
    #[must_use]
    pub fn union_all<I>(rects: I) -> Self
    where
        I: IntoIterator<Item = Rectangle>,
    {
        let mut iter = rects.into_iter();
        let Some(first) = iter.next() else {
            tracing::trace!("union of an empty rectangle sequence");
            return Self::NAN;
        };

        let mut count = 1_usize;
        let result = iter.fold(first, |acc, r| {
            count += 1;
            Self::union(&acc, &r)
        });
        tracing::trace!(count, "computed rectangle union");

        result
    }

    /// Overlap of two rectangles, or [`Rectangle::NAN`] if they are disjoint.
    ///
    /// Touching edges produce a zero-width or zero-height result. Sizes are
    /// taken as given: a rectangle with a negative extent is not flipped first,
    /// unlike in [`Rectangle::union`].
    #[must_use]
    pub fn intersection(a: &Self, b: &Self) -> Self {
        let (a0, a1) = (a.location, a.bottom_right());
        let (b0, b1) = (b.location, b.bottom_right());

        let x0 = nan_max(a0.x(), b0.x());
        let x1 = nan_min(a1.x(), b1.x());
        let y0 = nan_max(a0.y(), b0.y());
        let y1 = nan_min(a1.y(), b1.y());

        if x1 >= x0 && y1 >= y0 {
            Self::from_xywh(x0, y0, x1 - x0, y1 - y0)
        } else {
            tracing::trace!(%a, %b, "empty intersection");
            Self::NAN
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.location, self.size)
    }
}
