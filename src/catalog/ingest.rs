use std::io::Read;

use serde::Deserialize;

use super::domain::{MapPoint, ParkRecord};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog record at index {index} has an empty name")]
    EmptyName { index: usize },
    #[error("park '{name}' sits at ({x}, {y}), outside the 0-100 map canvas")]
    CoordinatesOutOfCanvas { name: String, x: f32, y: f32 },
}

/// Load a catalog from a JSON array of park records.
pub fn from_json_str(raw: &str) -> Result<Vec<ParkRecord>, CatalogError> {
    let records: Vec<ParkRecord> = serde_json::from_str(raw)?;
    validate(&records)?;
    Ok(records)
}

pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<ParkRecord>, CatalogError> {
    let records: Vec<ParkRecord> = serde_json::from_reader(reader)?;
    validate(&records)?;
    Ok(records)
}

/// Load a catalog from a CSV export. List columns (`States`, `Season Focus`,
/// `Activities`) are pipe-separated within a single cell.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<ParkRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize::<ParkRow>() {
        records.push(row?.into_record());
    }

    validate(&records)?;
    Ok(records)
}

fn validate(records: &[ParkRecord]) -> Result<(), CatalogError> {
    for (index, record) in records.iter().enumerate() {
        if record.name.trim().is_empty() {
            return Err(CatalogError::EmptyName { index });
        }
        if !record.coordinates.within_canvas() {
            return Err(CatalogError::CoordinatesOutOfCanvas {
                name: record.name.clone(),
                x: record.coordinates.x,
                y: record.coordinates.y,
            });
        }
    }
    Ok(())
}

#[derive(Debug, Deserialize)]
struct ParkRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Emoji", default)]
    emoji: String,
    #[serde(rename = "States", default)]
    states: String,
    #[serde(rename = "Region", default)]
    region: String,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Tagline", default)]
    tagline: String,
    #[serde(rename = "Best Time", default)]
    best_time: String,
    #[serde(rename = "Season Focus", default)]
    season_focus: String,
    #[serde(rename = "Activities", default)]
    activities: String,
    #[serde(rename = "X", default)]
    x: f32,
    #[serde(rename = "Y", default)]
    y: f32,
    #[serde(rename = "Environment", default)]
    environment: String,
}

impl ParkRow {
    fn into_record(self) -> ParkRecord {
        ParkRecord {
            name: self.name,
            emoji: self.emoji,
            states: split_list(&self.states),
            region: self.region,
            description: self.description,
            tagline: self.tagline,
            best_time: self.best_time,
            season_focus: split_list(&self.season_focus),
            activities: split_list(&self.activities),
            coordinates: MapPoint {
                x: self.x,
                y: self.y,
            },
            environment: self.environment,
        }
    }
}

fn split_list(cell: &str) -> Vec<String> {
    cell.split('|')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
