pub mod config;
pub mod error;
pub mod geo;
pub mod geometry;
pub mod math;
pub mod model;
pub mod records;
pub mod transect;

pub use config::{EarthModel, SolverConfig};
pub use error::{DtError, Result};
pub use model::{Cut, Observation, WeightedSample};
pub use transect::{DtResult, DynamicTopography};
