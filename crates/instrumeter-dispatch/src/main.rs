//! instrumeter probe
//!
//! Loads a telemetry config, samples host CPU and memory through the
//! recorders on a fixed interval, then prints the in-process histograms in
//! Prometheus text format.
//!
//! Usage: `instrumeter-probe [config.yaml]` (default `instrumeter.yaml`).

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use instrumeter_core::Attributes;
use instrumeter_dispatch::{config, Telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "instrumeter.yaml".to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, code = e.code().as_str(), error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let telemetry = match Telemetry::from_config(&cfg.telemetry) {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "telemetry setup failed");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        instruments = ?telemetry.registry().names(),
        interval_ms = cfg.probe.interval_ms,
        iterations = cfg.probe.iterations,
        "instrumeter probe starting"
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(cfg.probe.interval_ms));
    let attrs = Attributes::new();
    for _ in 0..cfg.probe.iterations {
        ticker.tick().await;
        telemetry.record_command_generator_metrics(&attrs);
    }

    print!("{}", telemetry.histograms().render());
    ExitCode::SUCCESS
}
