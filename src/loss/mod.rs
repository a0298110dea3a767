pub mod cost;
pub mod cross_entropy;
pub mod mse;

pub use cost::CostFunction;
pub use cross_entropy::CrossEntropyLoss;
pub use mse::MseLoss;
