/// Summary statistics over a set of signed residuals.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResidualStats {
    /// Arithmetic mean of the residuals.
    pub mean: f64,
    /// Root-mean-square of the residuals.
    pub rms: f64,
    /// Root-mean-square of `mean - residual`.
    pub std_dev: f64,
}

impl ResidualStats {
    /// Computes the statistics of `residuals`.
    ///
    /// Returns `None` for an empty slice.
    #[must_use]
    pub fn from_residuals(residuals: &[f64]) -> Option<Self> {
        if residuals.is_empty() {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = residuals.len() as f64;

        let mean = residuals.iter().sum::<f64>() / count;
        let rms = (residuals.iter().map(|r| r * r).sum::<f64>() / count).sqrt();
        let std_dev = (residuals
            .iter()
            .map(|r| (mean - r) * (mean - r))
            .sum::<f64>()
            / count)
            .sqrt();

        Some(Self { mean, rms, std_dev })
    }
}
