use crate::config::EarthModel;
use crate::geometry::Segment;
use crate::math::Point2;
use crate::model::{Cut, Observation};

use super::{to_geo, to_local};

/// A local Cartesian frame (km) anchored at a geographic origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin: Point2,
    earth: EarthModel,
}

impl LocalFrame {
    /// Creates a frame centered on `origin` (lon, lat in degrees).
    #[must_use]
    pub fn new(origin: Point2, earth: EarthModel) -> Self {
        Self { origin, earth }
    }

    /// Frame centered on the geographic midpoint of the first cut.
    ///
    /// Returns `None` when there are no cuts.
    #[must_use]
    pub fn for_cuts(cuts: &[Cut], earth: EarthModel) -> Option<Self> {
        cuts.first().map(|cut| Self::new(cut.segment.midpoint(), earth))
    }

    /// Geographic origin of the frame.
    #[must_use]
    pub fn origin(&self) -> &Point2 {
        &self.origin
    }

    #[must_use]
    pub fn earth(&self) -> &EarthModel {
        &self.earth
    }

    #[must_use]
    pub fn to_local(&self, geo: &Point2) -> Point2 {
        to_local(geo, &self.origin, &self.earth)
    }

    #[must_use]
    pub fn to_geo(&self, local: &Point2) -> Point2 {
        to_geo(local, &self.origin, &self.earth)
    }

    #[must_use]
    pub fn segment_to_local(&self, segment: &Segment) -> Segment {
        Segment::new(self.to_local(&segment.start), self.to_local(&segment.end))
    }

    #[must_use]
    pub fn segment_to_geo(&self, segment: &Segment) -> Segment {
        Segment::new(self.to_geo(&segment.start), self.to_geo(&segment.end))
    }

    #[must_use]
    pub fn observation_to_local(&self, observation: &Observation) -> Observation {
        Observation {
            displacement: self.segment_to_local(&observation.displacement),
            ..*observation
        }
    }

    /// Converts the cut's endpoints and curvature center into the local plane.
    #[must_use]
    pub fn cut_to_local(&self, cut: &Cut) -> Cut {
        Cut {
            segment: self.segment_to_local(&cut.segment),
            curvature_center: cut.curvature_center.map(|c| self.to_local(&c)),
            ..*cut
        }
    }

    /// Converts the cut's endpoints and curvature center back to geographic.
    #[must_use]
    pub fn cut_to_geo(&self, cut: &Cut) -> Cut {
        Cut {
            segment: self.segment_to_geo(&cut.segment),
            curvature_center: cut.curvature_center.map(|c| self.to_geo(&c)),
            ..*cut
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn frame_origin_is_first_cut_midpoint() {
        let cuts = [
            Cut::new(Point2::new(148.0, 42.0), Point2::new(149.0, 43.0)),
            Cut::new(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)),
        ];
        let frame = LocalFrame::for_cuts(&cuts, EarthModel::default()).unwrap();
        assert_abs_diff_eq!(*frame.origin(), Point2::new(148.5, 42.5), epsilon = 1e-12);
        let mid = frame.to_local(&Point2::new(148.5, 42.5));
        assert_abs_diff_eq!(mid, Point2::new(0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn no_cuts_no_frame() {
        assert!(LocalFrame::for_cuts(&[], EarthModel::default()).is_none());
    }

    #[test]
    fn cut_round_trip_keeps_settings() {
        let frame = LocalFrame::new(Point2::new(148.5, 42.5), EarthModel::default());
        let cut = Cut::new(Point2::new(148.2, 42.3), Point2::new(148.9, 42.8))
            .with_width(7.0)
            .with_curvature_center(Point2::new(148.6, 42.4));
        let back = frame.cut_to_geo(&frame.cut_to_local(&cut));
        assert_eq!(back.width, Some(7.0));
        assert_abs_diff_eq!(back.start(), cut.start(), epsilon = 1e-9);
        assert_abs_diff_eq!(back.end(), cut.end(), epsilon = 1e-9);
        assert_abs_diff_eq!(
            back.curvature_center.unwrap(),
            cut.curvature_center.unwrap(),
            epsilon = 1e-9
        );
    }
}
