use crate::error::Result;
use crate::geometry::{Line, Segment};
use crate::math::stats::ResidualStats;
use crate::math::Point2;
use crate::model::WeightedSample;

/// Across-transect component of a sample: `speed * -sin(angle)`, where the
/// angle is measured from the transect line to the observed displacement.
#[must_use]
pub fn across_component(transect_line: &Line, sample: &WeightedSample) -> f64 {
    let angle = transect_line.angle(sample.displacement());
    sample.observation.speed * -angle.to_radians().sin()
}

/// Kernel radius from the sample spacing: `factor` times the largest gap
/// between consecutive sample projections, measured from the transect start.
#[must_use]
pub fn auto_radius(transect: &Segment, samples: &[WeightedSample], factor: f64) -> f64 {
    let mut distances: Vec<f64> = samples
        .iter()
        .map(|s| nalgebra::distance(&transect.start, &s.proj))
        .collect();
    distances.sort_by(f64::total_cmp);

    let max_gap = distances
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(0.0, f64::max);
    max_gap * factor
}

/// Truncated Gaussian interpolation of the across-transect velocity.
///
/// The weight `w(r) = exp(-k r²) - exp(-k R²)` is exactly zero at the
/// cutoff radius `R`, and samples farther than `R` are ignored.
#[derive(Debug, Clone)]
pub struct Interpolator<'a> {
    samples: &'a [WeightedSample],
    components: Vec<f64>,
    radius: f64,
    weight_coef: f64,
}

impl<'a> Interpolator<'a> {
    /// Creates an interpolator over `samples` bound to `transect`.
    ///
    /// # Errors
    ///
    /// Returns a geometry error if the transect has zero length.
    pub fn new(
        transect: &Segment,
        samples: &'a [WeightedSample],
        radius: f64,
        weight_coef: f64,
    ) -> Result<Self> {
        let line = Line::from_segment(transect)?;
        let components = samples.iter().map(|s| across_component(&line, s)).collect();
        Ok(Self {
            samples,
            components,
            radius,
            weight_coef,
        })
    }

    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn weight_coef(&self) -> f64 {
        self.weight_coef
    }

    /// Kernel weight at distance `r`.
    #[must_use]
    pub fn weight(&self, r: f64) -> f64 {
        let k = self.weight_coef;
        (-k * r * r).exp() - (-k * self.radius * self.radius).exp()
    }

    /// Interpolated across-transect velocity at `p`.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        self.evaluate_excluding(p, None)
    }

    /// Interpolated value at `p`, ignoring sample `skip` if given.
    ///
    /// Returns `0` when no sample contributes a non-zero weight.
    #[must_use]
    pub fn evaluate_excluding(&self, p: &Point2, skip: Option<usize>) -> f64 {
        let mut weight_sum = 0.0;
        let mut weighted = 0.0;
        for (i, (sample, component)) in self.samples.iter().zip(&self.components).enumerate() {
            if skip == Some(i) {
                continue;
            }
            let r = nalgebra::distance(p, &sample.proj);
            if r > self.radius {
                continue;
            }
            let w = self.weight(r);
            weight_sum += w;
            weighted += component * w;
        }
        if weight_sum == 0.0 {
            return 0.0;
        }
        weighted / weight_sum
    }

    /// Leave-one-out residuals: each sample's value reconstructed at its own
    /// projection without itself, minus its own component.
    #[must_use]
    pub fn residuals(&self) -> Vec<f64> {
        self.samples
            .iter()
            .zip(&self.components)
            .enumerate()
            .map(|(i, (sample, component))| {
                self.evaluate_excluding(&sample.proj, Some(i)) - component
            })
            .collect()
    }

    /// Statistics of [`Interpolator::residuals`].
    #[must_use]
    pub fn accuracy(&self) -> ResidualStats {
        ResidualStats::from_residuals(&self.residuals()).unwrap_or_default()
    }
}
