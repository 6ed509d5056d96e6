use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub capabilities: CapabilityConfig,
}

/// Upper bounds on how long the orchestrator waits for each capability.
#[derive(Debug, Deserialize, Clone)]
pub struct CapabilityConfig {
    #[serde(default = "default_deadline_ms")]
    pub catalog_deadline_ms: u64,
    #[serde(default = "default_deadline_ms")]
    pub payment_deadline_ms: u64,
}

fn default_deadline_ms() -> u64 {
    5_000
}

impl Default for CapabilityConfig {
    fn default() -> Self {
        Self {
            catalog_deadline_ms: default_deadline_ms(),
            payment_deadline_ms: default_deadline_ms(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every file source is optional: embedded in a host process the
            // environment alone may configure everything.
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `ORBIT__CAPABILITIES__PAYMENT_DEADLINE_MS=250`
            .add_source(config::Environment::with_prefix("ORBIT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
