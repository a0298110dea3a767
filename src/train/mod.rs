pub mod summary;
pub mod train_config;
pub mod trainer;

pub use summary::TrainingSummary;
pub use train_config::TrainConfig;
pub use trainer::train_network;
