use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error")]
    IoError(#[from] io::Error),
    #[error("HTTP Error: {0}")]
    HttpError(#[from] reqwest::Error),
    #[error("Name record {line} has {fields} fields, expected title, first and last name")]
    MalformedNameRecord { line: u64, fields: usize },
    #[error("Attendees need a vendor but the vendor pool is empty")]
    NoVendors,
    #[error("{attendees} attendees do not fit in {total} tickets")]
    TooManyAttendees { attendees: usize, total: u32 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
