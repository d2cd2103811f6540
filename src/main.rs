use clap::Parser;
use tracing_subscriber::EnvFilter;

use testng_gate::cli::Cli;
use testng_gate::commands::run_check;
use testng_gate::config::parse_log_level;
use testng_gate::output::TracingSink;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over the configured verbosity when set.
    let filter = EnvFilter::builder()
        .with_default_directive(parse_log_level(&cli.log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let exit_code = run_check(&cli, &TracingSink);
    std::process::exit(exit_code);
}
