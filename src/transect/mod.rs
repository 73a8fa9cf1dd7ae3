//! The per-cut pipeline: sampling, interpolation, quadrature and result
//! assembly. Everything here works in one local Cartesian frame (km).

mod integration;
mod interpolation;
mod sampling;
mod topography;

pub use integration::{Integrate, IntegrationResult, ProfilePoint};
pub use interpolation::{across_component, auto_radius, Interpolator};
pub use sampling::{SampleTransect, TransectSamples};
pub use topography::{DtResult, DynamicTopography};
