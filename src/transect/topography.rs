use tracing::{debug, warn};

use crate::config::SolverConfig;
use crate::error::Result;
use crate::geo::LocalFrame;
use crate::model::{Cut, Observation};

use super::integration::{Integrate, IntegrationResult};
use super::sampling::SampleTransect;

/// Dynamic topography across one cut.
#[derive(Debug, Clone, PartialEq)]
pub struct DtResult {
    /// The tightened cut in geographic coordinates, with its width resolved.
    pub cut: Cut,
    /// Dynamic topography difference in meters.
    pub dt: f64,
    /// Integration at the coarse resolution.
    pub integration: IntegrationResult,
    /// `|lin(n) - lin(2n)| * dt_coef`. The curvature term is not re-checked.
    pub dt_error: f64,
    /// Mean a-priori error of the contributing observations.
    pub a_priori_error: f64,
    /// Length of the tightened transect, km.
    pub cut_length: f64,
    /// Coriolis parameter over gravity at the frame origin's latitude.
    pub dt_coef: f64,
    pub sample_count: usize,
}

/// Computes dynamic topography for cuts against a fixed observation field.
pub struct DynamicTopography {
    frame: LocalFrame,
    config: SolverConfig,
    observations: Vec<Observation>,
}

impl DynamicTopography {
    /// Creates a processor from geographic observations, converting them
    /// into `frame` once.
    #[must_use]
    pub fn new(frame: LocalFrame, config: SolverConfig, observations: &[Observation]) -> Self {
        let observations = observations
            .iter()
            .map(|o| frame.observation_to_local(o))
            .collect();
        Self {
            frame,
            config,
            observations,
        }
    }

    /// Computes the result for one cut given in geographic coordinates.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::TransectError`] when no observation lies near
    /// the cut or when too few do to integrate, and a geometry error for a
    /// zero-length cut.
    pub fn compute(&self, cut: &Cut) -> Result<DtResult> {
        let config = &self.config;
        let local_cut = self.frame.cut_to_local(cut);
        let width = local_cut.resolved_width(config);

        let sampled = SampleTransect::new(local_cut.segment, width).execute(&self.observations)?;
        let count = sampled.len();

        let coarse = Integrate::new(&local_cut, &sampled, count * config.coarse_factor)
            .execute(&self.frame, config)?;
        let fine = Integrate::new(&local_cut, &sampled, count * config.fine_factor)
            .execute(&self.frame, config)?;

        let earth = self.frame.earth();
        let dt_coef = earth.topography_coefficient(self.frame.origin().y);
        let dt = (coarse.sqr_value + coarse.lin_value) / earth.gravity;
        let dt_error = (coarse.lin_value - fine.lin_value).abs() * dt_coef;
        debug!(samples = count, dt, dt_error, "computed dynamic topography");

        let tightened = Cut {
            segment: sampled.transect,
            width: Some(width),
            ..local_cut
        };
        Ok(DtResult {
            cut: self.frame.cut_to_geo(&tightened),
            dt,
            integration: coarse,
            dt_error,
            a_priori_error: sampled.mean_a_priori_error(),
            cut_length: sampled.transect.length(),
            dt_coef,
            sample_count: count,
        })
    }

    /// Computes every cut in order. Failed cuts are logged and returned as
    /// errors in their slot; they do not stop the batch.
    pub fn compute_all(&self, cuts: &[Cut]) -> Vec<Result<DtResult>> {
        cuts.iter()
            .enumerate()
            .map(|(index, cut)| {
                let result = self.compute(cut);
                if let Err(err) = &result {
                    warn!(cut = index, %err, "skipping cut");
                }
                result
            })
            .collect()
    }
}
