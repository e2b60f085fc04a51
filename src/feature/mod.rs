pub mod model;
pub mod service;

pub use model::GeoJsonFeature;
pub use service::{ingest, ValidationError};
