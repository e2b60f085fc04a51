use super::model::GeoJsonFeature;
use std::fmt::{Display, Formatter};
use tracing::info;

#[derive(Debug)]
pub struct ValidationError(serde_json::Error);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Parses a submitted feature. Nothing is stored, the caller gets the same
/// feature back.
pub fn ingest(body: &[u8]) -> Result<GeoJsonFeature, ValidationError> {
    let feature: GeoJsonFeature = serde_json::from_slice(body).map_err(ValidationError)?;
    info!(
        name = feature.properties.name.as_str(),
        start_date = feature.properties.start_date.as_str(),
        end_date = feature.properties.end_date.as_str(),
        rings = feature.geometry.coordinates.len(),
        "Received new feature"
    );
    Ok(feature)
}
