use std::time::Duration;

pub const DEFAULT_SERVICE_DELAY_MS: u64 = 3000;
pub const DEFAULT_PANEL_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_UPDATE_PROBABILITY: f64 = 0.3;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Simulated latency of the service fetch
    pub service_delay: Duration,
    /// Period of the patient status feed
    pub panel_interval: Duration,
    /// Per-patient, per-tick chance of a status reassignment
    pub update_probability: f64,
    /// Fixed RNG seed for a reproducible feed
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_delay: Duration::from_millis(DEFAULT_SERVICE_DELAY_MS),
            panel_interval: Duration::from_millis(DEFAULT_PANEL_INTERVAL_MS),
            update_probability: DEFAULT_UPDATE_PROBABILITY,
            seed: None,
        }
    }
}
