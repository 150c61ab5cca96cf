use crate::error::Error;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Moved,
    Deleted,
    Unrecognized,
    Undated,
}

/// One thing that happened to one entry during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub timestamp: String,
    pub action: ActionKind,
    pub bucket: &'static str,
    pub source: PathBuf,
    pub destination: Option<PathBuf>,
}

impl Action {
    pub fn new(action: ActionKind, bucket: &'static str, source: &Path) -> Self {
        let now: DateTime<Local> = Local::now();
        Action {
            timestamp: now.to_rfc3339(),
            action,
            bucket,
            source: source.to_path_buf(),
            destination: None,
        }
    }

    pub fn with_destination(mut self, destination: &Path) -> Self {
        self.destination = Some(destination.to_path_buf());
        self
    }
}

/// Append `actions` to the CSV file at `path`, writing the header row only
/// when the file is new.
pub fn append(path: &Path, actions: &[Action]) -> Result<(), Error> {
    let file_exists = fs::metadata(path).is_ok();

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for action in actions {
        wtr.serialize(action)?;
    }

    wtr.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}
