pub mod check;

pub use check::{CheckOutcome, run_check, run_check_impl, run_gate};
