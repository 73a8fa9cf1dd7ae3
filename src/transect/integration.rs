use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{Result, TransectError};
use crate::geo::LocalFrame;
use crate::math::{km_to_m, sign, Point2};
use crate::model::Cut;

use super::interpolation::{auto_radius, Interpolator};
use super::sampling::TransectSamples;

/// Interpolated across-transect velocity at one sub-segment midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint {
    /// Midpoint in the local plane.
    pub point: Point2,
    pub velocity: f64,
}

/// Output of one quadrature run.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegrationResult {
    /// Sum of `coriolis * velocity * h`.
    pub lin_value: f64,
    /// Sum of `curvature * velocity² * h * sign(velocity)`.
    pub sqr_value: f64,
    /// Mean leave-one-out residual.
    pub interpolation_accuracy: f64,
    /// RMS leave-one-out residual.
    pub integration_error: f64,
    /// RMS deviation of the residuals from their mean.
    pub std_dev: f64,
    /// Step length in meters.
    pub step_size: f64,
    pub step_count: usize,
    /// Kernel diameter actually used, km.
    pub kernel_diameter: f64,
    /// Weight coefficient actually used, internal units.
    pub weight_coef: f64,
    pub profile: Vec<ProfilePoint>,
}

/// Midpoint-rule integration of the interpolated velocity along a transect.
pub struct Integrate<'a> {
    cut: &'a Cut,
    samples: &'a TransectSamples,
    partitions: usize,
}

impl<'a> Integrate<'a> {
    /// Creates a new `Integrate` operation.
    ///
    /// `cut` supplies the kernel, weight and curvature settings and must be
    /// in the same local frame as `samples`. The integrated path is the
    /// tightened transect of `samples`, split into `partitions` steps.
    #[must_use]
    pub fn new(cut: &'a Cut, samples: &'a TransectSamples, partitions: usize) -> Self {
        Self {
            cut,
            samples,
            partitions,
        }
    }

    /// Executes the quadrature.
    ///
    /// # Errors
    ///
    /// Returns [`TransectError::InsufficientSamples`] when there are fewer
    /// samples than [`SolverConfig::min_samples`]. A geometry error is
    /// returned if the tightened transect has zero length.
    pub fn execute(&self, frame: &LocalFrame, config: &SolverConfig) -> Result<IntegrationResult> {
        let found = self.samples.len();
        if found < config.min_samples {
            return Err(TransectError::InsufficientSamples {
                found,
                required: config.min_samples,
            }
            .into());
        }

        let transect = &self.samples.transect;
        let samples = &self.samples.samples;
        let radius = self
            .cut
            .fixed_kernel_radius()
            .unwrap_or_else(|| auto_radius(transect, samples, config.auto_radius_factor));
        let weight_coef = self.cut.resolved_weight_coef(config);
        let itp = Interpolator::new(transect, samples, radius, weight_coef)?;

        let n = self.partitions.max(1);
        #[allow(clippy::cast_precision_loss)]
        let h = km_to_m(transect.length()) / n as f64;
        debug!(radius, weight_coef, partitions = n, step = h, "integrating transect");

        let earth = frame.earth();
        let mut lin_sum = 0.0;
        let mut sqr_sum = 0.0;
        let mut profile = Vec::with_capacity(n);
        for step in transect.subdivide(n) {
            let mid = step.midpoint();
            let velocity = itp.evaluate(&mid);

            let coriolis = earth.coriolis(frame.to_geo(&mid).y);
            let curvature = self
                .cut
                .curvature_center
                .map_or(0.0, |c| 1.0 / km_to_m(nalgebra::distance(&c, &mid)));

            lin_sum += coriolis * velocity * h;
            sqr_sum += curvature * velocity * velocity * h * sign(velocity);
            profile.push(ProfilePoint {
                point: mid,
                velocity,
            });
        }

        let accuracy = itp.accuracy();
        Ok(IntegrationResult {
            lin_value: lin_sum,
            sqr_value: sqr_sum,
            interpolation_accuracy: accuracy.mean,
            integration_error: accuracy.rms,
            std_dev: accuracy.std_dev,
            step_size: h,
            step_count: profile.len(),
            kernel_diameter: itp.radius() * 2.0,
            weight_coef: itp.weight_coef(),
            profile,
        })
    }
}
