//! The static park catalog: the record type plus JSON/CSV intake.

pub mod domain;
pub mod ingest;

pub use domain::{MapPoint, ParkRecord};
pub use ingest::{from_csv_reader, from_json_reader, from_json_str, CatalogError};
