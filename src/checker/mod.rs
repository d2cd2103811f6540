mod threshold;
mod verdict;

pub use threshold::ThresholdEvaluator;
pub use verdict::{Breach, Metric, Verdict};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
