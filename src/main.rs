//! resp-bench entrypoint: load config, run the driver, print the report.

use resp_bench::config::Config;
use resp_bench::driver;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging; stdout is reserved for the benchmark report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!(
        host = %config.host,
        port = config.port,
        requests = config.requests,
        "Starting resp-bench"
    );

    let report = driver::run(&config)?;

    // The benchmark's output contract: elapsed seconds, then the rate.
    // The rate line is omitted for a degenerate zero-request run.
    println!("{}", report.elapsed.as_secs_f64());
    match report.throughput() {
        Some(rate) => println!("{rate}"),
        None => warn!("zero requests or zero elapsed time, throughput undefined"),
    }

    Ok(())
}
