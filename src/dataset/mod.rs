pub mod example_set;

pub use example_set::{ExampleSet, TrainingExample};
