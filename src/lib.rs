pub mod activation;
pub mod dataset;
pub mod error;
pub mod glyph;
pub mod layers;
pub mod logging;
pub mod loss;
pub mod math;
pub mod network;
pub mod optim;
pub mod report;
pub mod train;

// Convenience re-exports
pub use activation::activation::ActivationFunction;
pub use dataset::example_set::{ExampleSet, TrainingExample};
pub use error::{Error, Result};
pub use glyph::grid::GlyphGrid;
pub use layers::dense::Layer;
pub use loss::cost::CostFunction;
pub use math::matrix::Matrix;
pub use network::classifier::Classifier;
pub use network::network::Network;
pub use optim::sgd::Sgd;
pub use report::reporter::{Prediction, PredictionReporter};
pub use train::summary::TrainingSummary;
pub use train::train_config::TrainConfig;
pub use train::trainer::train_network;
