use csv::ByteRecord;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const COL_NAME: usize = 0;
pub const COL_LAT: usize = 1;
pub const COL_LON: usize = 2;
/// Assumed to be stable across sources, this is not checked against the header.
pub const COL_RADIUS: usize = 9;

const MIN_COLUMNS: usize = 3;

/// A point of interest shown as a marker on the map. Coordinates are kept
/// as they appear in the source, the frontend parses them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub name: String,
    pub lat: String,
    pub lon: String,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RadiusField {
    Present(f64),
    Missing,
    Invalid(String),
}

impl RadiusField {
    pub fn parse(raw: Option<&str>) -> RadiusField {
        match raw {
            None | Some("") => RadiusField::Missing,
            Some(raw) => match raw.parse::<f64>() {
                Ok(radius) if radius.is_finite() => RadiusField::Present(radius),
                _ => RadiusField::Invalid(raw.into()),
            },
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            RadiusField::Present(radius) => *radius,
            RadiusField::Missing | RadiusField::Invalid(_) => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowError {
    TooFewColumns { found: usize },
}

impl Display for RowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RowError::TooFewColumns { found } => write!(
                f,
                "expected at least {MIN_COLUMNS} columns (name, lat, lon), found {found}"
            ),
        }
    }
}

/// A decoded source row. Unlike [`Event`] it keeps track of why the radius
/// ended up being what it is.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub name: String,
    pub lat: String,
    pub lon: String,
    pub radius: RadiusField,
}

impl EventRecord {
    /// Fields that aren't valid UTF-8 (e.g. Latin-1 sources) are decoded
    /// lossily, the row is kept.
    pub fn decode(record: &ByteRecord) -> Result<EventRecord, RowError> {
        let field = |index| record.get(index).map(String::from_utf8_lossy);
        let (Some(name), Some(lat), Some(lon)) = (field(COL_NAME), field(COL_LAT), field(COL_LON))
        else {
            return Err(RowError::TooFewColumns {
                found: record.len(),
            });
        };
        Ok(EventRecord {
            name: name.into_owned(),
            lat: lat.into_owned(),
            lon: lon.into_owned(),
            radius: RadiusField::parse(field(COL_RADIUS).as_deref()),
        })
    }
}

impl From<EventRecord> for Event {
    fn from(val: EventRecord) -> Self {
        Event {
            radius: val.radius.value(),
            name: val.name,
            lat: val.lat,
            lon: val.lon,
        }
    }
}
