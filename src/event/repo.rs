use super::model::{Event, EventRecord, RadiusField, RowError};
use super::source::SourceResolver;
use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Debug, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub error: RowError,
}

#[derive(Debug, Default, PartialEq)]
pub struct LoadReport {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedRow>,
}

/// Decodes a CSV stream with a mandatory header row. Rows may have any
/// number of columns, rows without name, lat and lon are reported as skipped.
pub fn decode_events(source: impl Read) -> Result<LoadReport> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let mut report = LoadReport::default();
    for record in reader.byte_records() {
        let record = record?;
        let line = record.position().map(|it| it.line()).unwrap_or_default();
        match EventRecord::decode(&record) {
            Ok(decoded) => {
                match &decoded.radius {
                    RadiusField::Present(_) => {}
                    RadiusField::Missing => debug!(
                        line,
                        name = decoded.name.as_str(),
                        "Radius is missing, using 0.0"
                    ),
                    RadiusField::Invalid(raw) => warn!(
                        line,
                        raw = raw.as_str(),
                        name = decoded.name.as_str(),
                        "Invalid radius, using 0.0"
                    ),
                }
                report.events.push(decoded.into());
            }
            Err(error) => {
                warn!(line, %error, "Skipping malformed row");
                report.skipped.push(SkippedRow { line, error });
            }
        }
    }
    Ok(report)
}

pub struct EventRepo {
    resolver: Arc<dyn SourceResolver>,
}

impl EventRepo {
    pub fn new(resolver: impl SourceResolver + 'static) -> Self {
        Self {
            resolver: Arc::new(resolver),
        }
    }

    /// Loads a fresh snapshot of the named source. A source that can't be
    /// resolved, opened or read yields an empty list.
    pub fn load(&self, name: Option<&str>) -> Vec<Event> {
        let path = match self.resolver.resolve(name) {
            Ok(path) => path,
            Err(e) => {
                warn!(name, error = %e, "Failed to resolve events source");
                return vec![];
            }
        };
        match load_file(&path) {
            Ok(report) => {
                if report.events.is_empty() && report.skipped.is_empty() {
                    warn!(path = %path.display(), "Events source is empty or only has a header");
                }
                if !report.skipped.is_empty() {
                    let lines: Vec<u64> = report.skipped.iter().map(|it| it.line).collect();
                    warn!(path = %path.display(), ?lines, "Some rows were skipped");
                }
                report.events
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to load events source");
                vec![]
            }
        }
    }

    pub async fn load_async(&self, name: Option<String>) -> Vec<Event> {
        let resolver = self.resolver.clone();
        let res =
            actix_web::web::block(move || EventRepo { resolver }.load(name.as_deref())).await;
        match res {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Events loader didn't finish");
                vec![]
            }
        }
    }
}

fn load_file(path: &Path) -> Result<LoadReport> {
    decode_events(File::open(path)?)
}
