use std::fmt;
use std::ops::{Add, Index, Mul, Neg, Sub};

use crate::error::{GeometryError, Result};
use crate::math::{nan_max, nan_min, Point2, Vector2};

use super::Rectangle;

/// A 2D point or offset from the top-left origin (Y grows downward).
///
/// Points are immutable values; every transforming operation returns a new
/// point. NaN and infinite coordinates are allowed and are used as sentinels
/// by the aggregate operations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Number of addressable components.
    pub const LEN: usize = 2;

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// A point with both coordinates NaN.
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN);

    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the X coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the component at `index` (0 is X, 1 is Y).
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` for any other index.
    pub fn get(&self, index: usize) -> Result<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeometryError::IndexOutOfRange { index }.into()),
        }
    }

    /// Returns `true` if both coordinates are NaN.
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() && self.y.is_nan()
    }

    /// Euclidean length of the vector from the origin to this point.
    ///
    /// NaN if either coordinate is NaN, +∞ if either is infinite and the
    /// other is not NaN.
    #[must_use]
    pub fn modulus(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// A zero vector has no direction and normalizes to (NaN, NaN).
    #[must_use]
    pub fn normalize(&self) -> Self {
        let m = self.modulus();
        Self::new(self.x / m, self.y / m)
    }

    /// Tolerant equality, checked on each axis independently.
    ///
    /// An axis matches when `|a - b| <= tolerance` or when
    /// `|(a - b) / (a + b)| <= tolerance / 2`. When `a + b` is zero the
    /// relative term is NaN or infinite and only the absolute check can pass.
    #[must_use]
    pub fn is_equal(&self, other: &Self, tolerance: f64) -> bool {
        axis_equal(self.x, other.x, tolerance) && axis_equal(self.y, other.y, tolerance)
    }

    /// Component-wise minimum. The result need not equal either input.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        Self::new(nan_min(self.x, other.x), nan_min(self.y, other.y))
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self::new(nan_max(self.x, other.x), nan_max(self.y, other.y))
    }

    /// Computes the smallest rectangle enclosing all `points` in one pass.
    ///
    /// An empty sequence yields a rectangle whose corners are both
    /// (NaN, NaN), so [`Rectangle::is_nan`] holds for it.
    #[must_use]
    pub fn bounds<I>(points: I) -> Rectangle
    where
        I: IntoIterator<Item = Point>,
    {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            tracing::trace!("bounds of an empty point sequence");
            return Rectangle::from_corners(Self::NAN, Self::NAN);
        };

        let mut count = 1_usize;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| {
            count += 1;
            (lo.min(p), hi.max(p))
        });
        tracing::trace!(count, "computed point bounds");

        Rectangle::from_corners(min, max)
    }

    /// Builds a point from a possibly-null array of coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NullInput` when `values` is `None` and
    /// `GeometryError::WrongLength` when it does not hold exactly two values.
    pub fn try_from_array(values: Option<&[f64]>) -> Result<Self> {
        let values = values.ok_or(GeometryError::NullInput)?;
        Ok(Self::try_from(values)?)
    }
}

fn axis_equal(a: f64, b: f64, tolerance: f64) -> bool {
    let diff = a - b;
    diff.abs() <= tolerance || (diff / (a + b)).abs() <= tolerance * 0.5
}

impl Index<usize> for Point {
    type Output = f64;

    /// # Panics
    ///
    /// Panics if `index` is not 0 or 1.
    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("{}", GeometryError::IndexOutOfRange { index }),
        }
    }
}

impl IntoIterator for Point {
    type Item = f64;
    type IntoIter = std::array::IntoIter<f64, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.x, self.y].into_iter()
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        Point::new(self * rhs.x, self * rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        rhs * self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

impl TryFrom<&[f64]> for Point {
    type Error = GeometryError;

    fn try_from(values: &[f64]) -> std::result::Result<Self, Self::Error> {
        match *values {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(GeometryError::WrongLength {
                expected: Self::LEN,
                actual: values.len(),
            }),
        }
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2 {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Vector2> for Point {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2 {
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}
