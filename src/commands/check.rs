use crate::aggregate::{Aggregator, RunSummary};
use crate::checker::{ThresholdEvaluator, Verdict};
use crate::cli::Cli;
use crate::config::{GateConfig, validate_cli};
use crate::output::{LogLevel, LogRecord, ReportSink, write_summary};
use crate::scanner::{OpenProbe, ReadProbe, ReportLocator};
use crate::{EXIT_SUCCESS, Result};

/// Everything one gate run produced before it is turned into an exit code.
#[derive(Debug)]
pub struct CheckOutcome {
    pub summary: RunSummary,
    /// `None` when no reports were found and that was tolerated.
    pub verdict: Option<Verdict>,
}

/// Run the gate for the parsed arguments and report through `sink`.
///
/// A breached threshold surfaces as `ThresholdExceeded`, whose message is the
/// reason shown to the user.
#[must_use]
pub fn run_check(cli: &Cli, sink: &dyn ReportSink) -> i32 {
    let result = run_check_impl(cli, sink).and_then(|outcome| match outcome.verdict {
        Some(verdict) => verdict.into_result().map(|()| true),
        None => Ok(false),
    });

    match result {
        Ok(evaluated) => {
            if evaluated {
                sink.info("All threshold checks passed".to_string());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            sink.record(
                LogRecord::new(LogLevel::Error, format!("Error: {}", e.detailed()))
                    .with_field("error_type", e.error_type()),
            );
            e.exit_code()
        }
    }
}

/// Validate `cli`, then locate, aggregate and evaluate.
///
/// # Errors
/// Configuration, discovery, whole-run parse and summary-write failures.
/// A threshold breach is not an error here; it is carried in the verdict.
pub fn run_check_impl(cli: &Cli, sink: &dyn ReportSink) -> Result<CheckOutcome> {
    let config = validate_cli(cli)?;
    run_gate(&config, ReportLocator::<OpenProbe>::new(), sink)
}

/// Run the pipeline for an already validated configuration.
///
/// # Errors
/// See [`run_check_impl`].
pub fn run_gate<P: ReadProbe>(
    config: &GateConfig,
    locator: ReportLocator<P>,
    sink: &dyn ReportSink,
) -> Result<CheckOutcome> {
    sink.record(
        LogRecord::new(LogLevel::Debug, "Starting TestNG report evaluation")
            .with_field("pattern", &config.report_pattern)
            .with_field("mode", config.thresholds.mode),
    );

    let paths = locator
        .tolerate_empty(!config.fail_if_no_results)
        .locate(&config.report_pattern, sink)?;

    if paths.is_empty() {
        sink.warn(format!(
            "No report files matched '{}', skipping threshold evaluation",
            config.report_pattern
        ));
        let outcome = CheckOutcome {
            summary: RunSummary::default(),
            verdict: None,
        };
        write_summary_file(config, &outcome, sink)?;
        return Ok(outcome);
    }

    let summary = Aggregator::new(sink).aggregate(&paths)?;
    summary.log(sink);

    let verdict = ThresholdEvaluator::new(&config.thresholds).evaluate(&summary.totals, sink);
    let outcome = CheckOutcome {
        summary,
        verdict: Some(verdict),
    };
    write_summary_file(config, &outcome, sink)?;
    Ok(outcome)
}

fn write_summary_file(
    config: &GateConfig,
    outcome: &CheckOutcome,
    sink: &dyn ReportSink,
) -> Result<()> {
    if let Some(path) = &config.summary_file {
        write_summary(path, &outcome.summary, outcome.verdict.as_ref())?;
        sink.debug(format!("Wrote run summary to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
