use anyhow::Result;
use casitas::config::{DEFAULT_PANEL_INTERVAL_MS, DEFAULT_SERVICE_DELAY_MS, DEFAULT_UPDATE_PROBABILITY};
use casitas::ui::run_tui;
use casitas::AppConfig;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "casitas")]
#[command(about = "Hospital Las Casitas - front desk TUI with medical team, appointments and live patient panel")]
#[command(version)]
struct Args {
    /// Simulated service fetch delay in milliseconds
    #[arg(long, default_value_t = DEFAULT_SERVICE_DELAY_MS, value_parser = clap::value_parser!(u64).range(0..=60000))]
    service_delay: u64,

    /// Patient panel update interval in milliseconds
    #[arg(long, default_value_t = DEFAULT_PANEL_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(100..=60000))]
    panel_interval: u64,

    /// Chance that a patient changes status on each panel update
    #[arg(long, default_value_t = DEFAULT_UPDATE_PROBABILITY, value_parser = parse_probability)]
    update_probability: f64,

    /// Seed for a reproducible patient feed
    #[arg(long)]
    seed: Option<u64>,
}

fn parse_probability(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not in 0.0..=1.0", p))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = AppConfig {
        service_delay: Duration::from_millis(args.service_delay),
        panel_interval: Duration::from_millis(args.panel_interval),
        update_probability: args.update_probability,
        seed: args.seed,
    };

    log::info!("Starting front desk with {:?}", config);
    run_tui(config).await
}
