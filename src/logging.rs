use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;

use crate::loss::cost::CostFunction;
use crate::report::reporter::Prediction;
use crate::train::summary::TrainingSummary;
use crate::train::train_config::TrainConfig;

fn log_dir() -> io::Result<()> {
    fs::create_dir_all("logs")
}

fn append_json_line<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    serde_json::to_writer(&mut file, value)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    file.write_all(b"\n")
}

fn timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

#[derive(Debug, Serialize)]
pub struct TrainingRunEntry {
    pub timestamp_ms: u128,
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub target_error: f64,
    pub cost: CostFunction,
    pub final_error: f64,
    pub iterations_run: usize,
    pub elapsed_ms: u64,
}

/// Appends one JSON line describing a completed training run to
/// `logs/training.jsonl`.
pub fn log_training_run(config: &TrainConfig, summary: &TrainingSummary) -> io::Result<()> {
    log_dir()?;
    let entry = TrainingRunEntry {
        timestamp_ms: timestamp_ms(),
        learning_rate: config.learning_rate,
        max_iterations: config.max_iterations,
        target_error: config.target_error,
        cost: config.cost,
        final_error: summary.final_error,
        iterations_run: summary.iterations_run,
        elapsed_ms: summary.elapsed_ms,
    };
    append_json_line("logs/training.jsonl", &entry)
}

#[derive(Debug, Serialize)]
pub struct PredictionLogEntry {
    pub timestamp_ms: u128,
    pub label: String,
    pub predictions: Vec<Prediction>,
}

/// Appends one JSON line per reported pattern to `logs/predictions.jsonl`,
/// predictions in ranked order.
pub fn log_prediction(label: &str, predictions: &[Prediction]) -> io::Result<()> {
    log_dir()?;
    let entry = PredictionLogEntry {
        timestamp_ms: timestamp_ms(),
        label: label.to_string(),
        predictions: predictions.to_vec(),
    };
    append_json_line("logs/predictions.jsonl", &entry)
}
