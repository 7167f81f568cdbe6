//loader.rs
use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use thiserror::Error;
use tracing::{error, info};

use crate::models::WorkoutDataset;

/// Resource the dataset is read from, fixed for the session.
pub const DEFAULT_SOURCE: &str = "workouts.json";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Where workouts.json lives: an HTTP endpoint or a local file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkoutSource {
    Url(String),
    File(PathBuf),
}

impl WorkoutSource {
    pub fn detect(location: &str) -> WorkoutSource {
        if location.starts_with("http://") || location.starts_with("https://") {
            WorkoutSource::Url(location.to_string())
        } else {
            WorkoutSource::File(PathBuf::from(location))
        }
    }

    /// Performs the session's single read and parse. No retries; any
    /// failure leaves no partial dataset behind.
    pub fn fetch(&self) -> Result<WorkoutDataset, LoadError> {
        let body = match self {
            WorkoutSource::Url(url) => {
                let response = reqwest::blocking::get(url)?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status(status.as_u16()));
                }
                response.text()?
            }
            WorkoutSource::File(path) => fs::read_to_string(path)?,
        };

        let dataset: WorkoutDataset = serde_json::from_str(&body)?;
        info!(
            crossfit = dataset.crossfit.len(),
            engine = dataset.engine.len(),
            "loaded workout dataset"
        );
        Ok(dataset)
    }
}

/// Runs the fetch on its own thread so the UI keeps painting while the
/// read is in flight. The app polls the receiver once per frame; a
/// dropped receiver just discards the result.
pub fn spawn_fetch(source: WorkoutSource) -> mpsc::Receiver<Result<WorkoutDataset, LoadError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = source.fetch();
        if let Err(err) = &result {
            error!("failed to load workouts: {err}");
        }
        let _ = tx.send(result);
    });
    rx
}
