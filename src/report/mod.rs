pub mod reporter;

pub use reporter::{Prediction, PredictionReporter};
