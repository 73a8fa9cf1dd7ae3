//! Physical constants and solver settings.
//!
//! Both structs are passed explicitly into the stages that need them, so
//! tests can substitute an alternate ellipsoid or tighter thresholds.

/// Oblate-spheroid Earth model plus the physical constants used to turn
/// velocities into dynamic topography.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthModel {
    /// Equatorial radius in meters.
    pub equatorial_radius: f64,
    /// Polar radius in meters.
    pub polar_radius: f64,
    /// Length of a full meridian circle in meters.
    pub meridian_length: f64,
    /// Angular velocity of rotation in rad/s.
    pub angular_velocity: f64,
    /// Standard gravity in m/s².
    pub gravity: f64,
}

impl Default for EarthModel {
    /// Krassovsky ellipsoid.
    fn default() -> Self {
        Self {
            equatorial_radius: 6_378_245.0,
            polar_radius: 6_356_863.0,
            meridian_length: 40_008_600.0,
            angular_velocity: 7.2921e-5,
            gravity: 9.81,
        }
    }
}

impl EarthModel {
    /// Polar flattening `(equatorial - polar) / equatorial`.
    #[must_use]
    pub fn flattening(&self) -> f64 {
        (self.equatorial_radius - self.polar_radius) / self.equatorial_radius
    }

    /// Distance in meters from the center to the surface at `latitude` degrees.
    #[must_use]
    pub fn radius_at_latitude(&self, latitude: f64) -> f64 {
        let s = latitude.to_radians().sin();
        self.equatorial_radius * (1.0 - self.flattening() * s * s)
    }

    /// Radius in meters of the parallel (small circle) at `latitude` degrees.
    #[must_use]
    pub fn parallel_radius(&self, latitude: f64) -> f64 {
        self.radius_at_latitude(latitude) * latitude.to_radians().cos()
    }

    /// Meters spanned by one degree of longitude at `latitude` degrees.
    #[must_use]
    pub fn meters_per_degree_longitude(&self, latitude: f64) -> f64 {
        self.parallel_radius(latitude).to_radians()
    }

    /// Meters spanned by one degree of latitude.
    #[must_use]
    pub fn meters_per_degree_latitude(&self) -> f64 {
        self.meridian_length / 360.0
    }

    /// Coriolis parameter `2 * omega * sin(latitude)` in 1/s.
    #[must_use]
    pub fn coriolis(&self, latitude: f64) -> f64 {
        2.0 * self.angular_velocity * latitude.to_radians().sin()
    }

    /// Coriolis parameter divided by gravity.
    #[must_use]
    pub fn topography_coefficient(&self, latitude: f64) -> f64 {
        self.coriolis(latitude) / self.gravity
    }
}

/// Tunables of the transect pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Band half-width in km used when a cut leaves it unset.
    pub default_width_km: f64,
    /// Gaussian weight coefficient used when a cut leaves it unset.
    pub default_weight_coef: f64,
    /// Records carry the weight coefficient multiplied by this factor.
    pub weight_coef_scale: f64,
    /// Fewer samples than this aborts integration.
    pub min_samples: usize,
    /// Partition count of the reported run, per sample.
    pub coarse_factor: usize,
    /// Partition count of the convergence run, per sample.
    pub fine_factor: usize,
    /// Auto kernel radius as a multiple of the largest sample gap.
    pub auto_radius_factor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            default_width_km: 10.0,
            default_weight_coef: 0.01,
            weight_coef_scale: 1000.0,
            min_samples: 10,
            coarse_factor: 5,
            fine_factor: 10,
            auto_radius_factor: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn flattening_of_krassovsky() {
        let earth = EarthModel::default();
        assert_relative_eq!(earth.flattening(), 21_382.0 / 6_378_245.0);
    }

    #[test]
    fn radii_at_equator_and_pole() {
        let earth = EarthModel::default();
        assert_relative_eq!(earth.radius_at_latitude(0.0), earth.equatorial_radius);
        assert_relative_eq!(
            earth.radius_at_latitude(90.0),
            earth.polar_radius,
            max_relative = 1e-12
        );
        assert!(earth.parallel_radius(90.0).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        let earth = EarthModel::default();
        assert_relative_eq!(earth.meters_per_degree_latitude(), 111_135.0);
    }

    #[test]
    fn coriolis_sign_follows_hemisphere() {
        let earth = EarthModel::default();
        assert!(earth.coriolis(0.0).abs() < 1e-20);
        assert_relative_eq!(earth.coriolis(90.0), 2.0 * earth.angular_velocity);
        assert_relative_eq!(earth.coriolis(-30.0), -earth.coriolis(30.0));
        assert_relative_eq!(
            earth.topography_coefficient(30.0),
            earth.angular_velocity / earth.gravity,
            max_relative = 1e-12
        );
    }
}
