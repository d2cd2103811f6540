mod model;
mod validation;

pub use model::{GateConfig, ThresholdConfig, ThresholdMode};
pub use validation::{parse_log_level, validate_cli};

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
