use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::Segment;

/// An infinite line in implicit form `a*x + b*y + c = 0`.
///
/// A line built from a segment remembers that segment as its interval,
/// which bounds [`Line::contains`]. Lines built from raw coefficients
/// (or by [`Line::parallel`]) carry no interval and are unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
    interval: Option<Segment>,
}

impl Line {
    /// Creates the line through the endpoints of `segment`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the segment has zero length.
    pub fn from_segment(segment: &Segment) -> Result<Self> {
        let p1 = segment.start;
        let p2 = segment.end;
        let a = p2.y - p1.y;
        let b = p1.x - p2.x;
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::Degenerate(format!(
                "zero-length segment at ({}, {})",
                p1.x, p1.y
            ))
            .into());
        }
        Ok(Self {
            a,
            b,
            c: -p1.y * b - p1.x * a,
            interval: Some(*segment),
        })
    }

    /// Creates the line through two points.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the points coincide.
    pub fn through(p1: Point2, p2: Point2) -> Result<Self> {
        Self::from_segment(&Segment::new(p1, p2))
    }

    /// Creates an unbounded line from its coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if both `a` and `b` are zero.
    pub fn from_coefficients(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(GeometryError::Degenerate("line with a = b = 0".into()).into());
        }
        Ok(Self {
            a,
            b,
            c,
            interval: None,
        })
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Returns the originating segment, if any.
    #[must_use]
    pub fn interval(&self) -> Option<&Segment> {
        self.interval.as_ref()
    }

    fn eval(&self, p: &Point2) -> f64 {
        self.a * p.x + self.b * p.y + self.c
    }

    fn normal_norm(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Signed perpendicular distance from `p` to the line.
    ///
    /// The sign tells which side of the line `p` lies on.
    #[must_use]
    pub fn distance_to(&self, p: &Point2) -> f64 {
        self.eval(p) / self.normal_norm()
    }

    /// Returns whether `p` lies on the line and within the interval's span.
    ///
    /// A zero-width span on one axis (horizontal or vertical interval)
    /// admits only points sharing that coordinate.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        if self.eval(p).abs() >= TOLERANCE {
            return false;
        }
        match &self.interval {
            Some(s) => {
                within_span(p.x - s.start.x, s.end.x - s.start.x)
                    && within_span(p.y - s.start.y, s.end.y - s.start.y)
            }
            None => true,
        }
    }

    /// Signed angle in degrees from this line's direction to `segment`,
    /// in `(-180, 180]`.
    ///
    /// A zero-length segment yields `0`.
    #[must_use]
    pub fn angle(&self, segment: &Segment) -> f64 {
        let la = segment.end.y - segment.start.y;
        let lb = segment.start.x - segment.end.x;
        (self.a * lb - la * self.b)
            .atan2(self.a * la + self.b * lb)
            .to_degrees()
    }

    /// Intersection point with another line, or `None` if they are parallel.
    #[must_use]
    pub fn intersection(&self, other: &Line) -> Option<Point2> {
        let den = self.a * other.b - other.a * self.b;
        if den.abs() <= f64::EPSILON * self.normal_norm() * other.normal_norm() {
            return None;
        }
        Some(self.solve(other, den))
    }

    /// Cramer's rule with a precomputed, non-zero determinant.
    fn solve(&self, other: &Line, den: f64) -> Point2 {
        let x = (self.b * other.c - other.b * self.c) / den;
        let y = (other.a * self.c - self.a * other.c) / den;
        Point2::new(x, y)
    }

    /// Segment from `p` along the line's normal `(a, b)`.
    #[must_use]
    pub fn perpendicular(&self, p: &Point2) -> Segment {
        Segment::new(*p, Point2::new(p.x + self.a, p.y + self.b))
    }

    /// Foot of the perpendicular dropped from `p` onto the line.
    ///
    /// Intersects the line with the normal line through `p`. Their
    /// determinant is `-(a² + b²)`, never zero. Axis-aligned lines yield
    /// the exact axis coordinate.
    #[must_use]
    pub fn projection_of(&self, p: &Point2) -> Point2 {
        let normal = Self {
            a: self.b,
            b: -self.a,
            c: self.a * p.y - self.b * p.x,
            interval: None,
        };
        let den = -(self.a * self.a + self.b * self.b);
        self.solve(&normal, den)
    }

    /// Line with the same direction passing through `p`.
    #[must_use]
    pub fn parallel(&self, p: &Point2) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: -(self.a * p.x + self.b * p.y),
            interval: None,
        }
    }
}

/// Parametric span check: `numerator / denominator` in `[0, 1]`.
///
/// A zero-width span admits numerators within [`TOLERANCE`] of zero.
fn within_span(numerator: f64, denominator: f64) -> bool {
    if denominator == 0.0 {
        return numerator.abs() < TOLERANCE;
    }
    let t = numerator / denominator;
    (0.0..=1.0).contains(&t)
}
