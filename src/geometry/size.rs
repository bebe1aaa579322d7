use std::fmt;

/// A width/height pair.
///
/// Negative extents are representable and left unvalidated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_fields_unvalidated() {
        let s = Size::new(-2.0, 3.5);
        assert_eq!(s.width, -2.0);
        assert_eq!(s.height, 3.5);
        assert_eq!(Size::from((-2.0, 3.5)), s);
        assert_eq!(s.to_string(), "-2 x 3.5");
    }
}
