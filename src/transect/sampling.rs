use tracing::debug;

use crate::error::{Result, TransectError};
use crate::geometry::{Line, Segment};
use crate::model::{Observation, WeightedSample};

/// Observations bound to one cut, with the cut tightened to their extent.
#[derive(Debug, Clone)]
pub struct TransectSamples {
    /// The effective transect: endpoints are the projections closest to the
    /// original cut's start and end.
    pub transect: Segment,
    pub samples: Vec<WeightedSample>,
}

impl TransectSamples {
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Mean a-priori error of the contributing observations.
    #[must_use]
    pub fn mean_a_priori_error(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.samples.len() as f64;
        self.samples.iter().map(|s| s.observation.error).sum::<f64>() / count
    }
}

/// Selects and decomposes the observations relevant to one cut.
///
/// Works in the local plane: the cut and the observations must share one
/// frame.
pub struct SampleTransect {
    cut: Segment,
    width: f64,
}

impl SampleTransect {
    /// Creates a new `SampleTransect` operation for a cut with band
    /// half-width `width` (km).
    #[must_use]
    pub fn new(cut: Segment, width: f64) -> Self {
        Self { cut, width }
    }

    /// Executes the operation.
    ///
    /// An observation is kept when its start lies strictly within `width`
    /// of the cut line, its speed is positive, and its start projects inside
    /// the cut.
    ///
    /// # Errors
    ///
    /// Returns [`TransectError::EmptyNeighborhood`] if no observation
    /// qualifies, or a geometry error if the cut has zero length.
    pub fn execute(&self, observations: &[Observation]) -> Result<TransectSamples> {
        let cut_line = Line::from_segment(&self.cut)?;

        let mut to_start = self.cut.length();
        let mut to_end = to_start;
        let mut start = self.cut.end;
        let mut end = self.cut.start;

        let mut samples = Vec::new();
        for observation in observations {
            let origin = observation.displacement.start;
            let in_band = cut_line.distance_to(&origin).abs() < self.width;
            if !(in_band && observation.speed > 0.0) {
                continue;
            }

            let proj = cut_line.projection_of(&origin);
            if !cut_line.contains(&proj) {
                continue;
            }

            let through_end = cut_line.parallel(&observation.displacement.end);
            let norm_comp = through_end.projection_of(&origin);
            samples.push(WeightedSample {
                observation: *observation,
                proj,
                norm_comp,
            });

            let d_start = nalgebra::distance(&proj, &self.cut.start);
            if d_start < to_start {
                to_start = d_start;
                start = proj;
            }
            let d_end = nalgebra::distance(&proj, &self.cut.end);
            if d_end < to_end {
                to_end = d_end;
                end = proj;
            }
        }

        if samples.is_empty() {
            return Err(TransectError::EmptyNeighborhood.into());
        }
        debug!(
            kept = samples.len(),
            total = observations.len(),
            "sampled observations near cut"
        );

        Ok(TransectSamples {
            transect: Segment::new(start, end),
            samples,
        })
    }
}
