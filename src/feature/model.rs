use geojson::PolygonType;
use serde::{Deserialize, Serialize};

/// An area drawn on the map by a user.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GeoJsonFeature {
    pub r#type: String,
    pub geometry: Geometry,
    pub properties: Properties,
}

/// Rings of `[lon, lat]` positions. Ring closure and coordinate bounds
/// are not checked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Geometry {
    pub r#type: String,
    pub coordinates: PolygonType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub start_date: String,
    pub end_date: String,
    pub name: String,
}
