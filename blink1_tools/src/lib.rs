#![doc = include_str!("../README.md")]

pub mod output;

/// Initialze tracing with the provided `tracing_subscriber::EnvFilter`.
///
/// Logs go to STDERR, STDOUT is reserved for the report.
///
/// # Example
///
/// ```
/// blink1_tools::init_tracing(
///     tracing_subscriber::EnvFilter::from_default_env()
///         .add_directive("bin_name=warn".parse().unwrap())
/// );
/// ```
pub fn init_tracing(filter: tracing_subscriber::EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
