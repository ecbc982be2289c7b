use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use rentora_catalog::PricingConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub business_rules: BusinessRules,
    pub simulation: SimulationConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub service_fee_rate: f64,
    pub currency: String,
}

impl BusinessRules {
    pub fn pricing(&self) -> PricingConfig {
        PricingConfig {
            service_fee_rate: self.service_fee_rate,
            currency: self.currency.clone(),
        }
    }
}

/// Latency of the stand-in network calls.
#[derive(Debug, Deserialize, Clone)]
pub struct SimulationConfig {
    pub payment_delay_ms: u64,
    pub login_delay_ms: u64,
}

impl SimulationConfig {
    pub fn payment_delay(&self) -> Duration {
        Duration::from_millis(self.payment_delay_ms)
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub filter: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::builder(&run_mode)?.build()?.try_deserialize()
    }

    /// Built-in defaults, then `config/default`, `config/{run_mode}` and
    /// `config/local` if present, then `RENTORA__*` environment variables.
    fn builder(
        run_mode: &str,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        let builder = Self::defaults()?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RENTORA").separator("__"));
        Ok(builder)
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
        config::Config::builder()
            .set_default("storage.dir", ".rentora")?
            .set_default("storage.key", crate::listing_store::DEFAULT_STORAGE_KEY)?
            .set_default("business_rules.service_fee_rate", 0.10)?
            .set_default("business_rules.currency", "INR")?
            .set_default("simulation.payment_delay_ms", 2000)?
            .set_default("simulation.login_delay_ms", 1500)?
            .set_default(
                "log.filter",
                "rentora_cli=info,rentora_store=info,rentora_core=info",
            )
    }
}
