use crate::error::{GeometryError, Result};
use crate::math::{sign, Point2, Vector2};

/// A directed segment from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Creates a new segment.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the direction vector `end - start` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.start, &self.end)
    }

    /// Strict interior test on the x coordinate only.
    ///
    /// True iff `p.x` lies strictly between `start.x` and `end.x`.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        sign(p.x - self.start.x) * sign(p.x - self.end.x) < 0.0
    }

    /// Moves `end` toward `start` so that the segment length becomes `length`.
    ///
    /// The new end stays on the line through both original endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ShortenTooLong`] if `length` is not smaller
    /// than the current length.
    pub fn shorten(&self, length: f64) -> Result<Self> {
        let available = self.length();
        let remainder = available - length;
        if remainder <= 0.0 {
            return Err(GeometryError::ShortenTooLong { length, available }.into());
        }
        let ratio = length / remainder;
        let end = Point2::new(
            (self.start.x + ratio * self.end.x) / (1.0 + ratio),
            (self.start.y + ratio * self.end.y) / (1.0 + ratio),
        );
        Ok(Self::new(self.start, end))
    }

    /// Splits the segment into `n` equal consecutive sub-segments.
    pub fn subdivide(&self, n: usize) -> impl Iterator<Item = Segment> + '_ {
        #[allow(clippy::cast_precision_loss)]
        let step = self.direction() / n as f64;
        (0..n).map(move |i| {
            #[allow(clippy::cast_precision_loss)]
            let from = self.start + step * i as f64;
            Segment::new(from, from + step)
        })
    }
}
