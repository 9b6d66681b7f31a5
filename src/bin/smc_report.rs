//! Print the CPU and GPU heatsink temperatures and the boost of two fans.
//!
//! Set `DARWIN_SMC_CONFIG` to a JSON file to read other sensors, and `RUST_LOG=debug` to see failed reads. The exit
//! code is always 0.

use darwin_smc::report::ReportConfig;
use tracing::warn;
use tracing_subscriber::{fmt, EnvFilter};

fn main() {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ReportConfig::from_env().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring report configuration");
        ReportConfig::default()
    });

    run(&config);
}

#[cfg(target_os = "macos")]
fn run(config: &ReportConfig) {
    use darwin_smc::{report::Report, smc::Session};

    let session = match Session::open() {
        Ok(session) => session,
        Err(e) => {
            warn!(error = %e, "could not open the SMC");
            return;
        }
    };

    print!("{}", Report::collect(&session, config));

    if let Err(e) = session.close() {
        warn!(error = %e, "could not close the SMC");
    }
}

#[cfg(not(target_os = "macos"))]
fn run(_config: &ReportConfig) {
    warn!("no SMC on this platform");
}
