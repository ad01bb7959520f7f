//! Observations module - dated health measurements.

mod observations_model;

pub use observations_model::{HealthObservation, TrendAnalysis};
