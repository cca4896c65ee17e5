use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub lifecycle: LifecycleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

/// Timings for the simulated order lifecycle. Both delays are measured from
/// the moment the order is placed, not from the previous transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifecycleConfig {
    pub processing_delay_ms: u64,
    pub ready_delay_ms: u64,
    pub estimated_ready_days: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            storage: StorageConfig {
                data_dir: env::var("PAWHUB_DATA_DIR")
                    .unwrap_or_else(|_| "data".to_string())
                    .into(),
            },
            lifecycle: LifecycleConfig {
                processing_delay_ms: env::var("PAWHUB_PROCESSING_DELAY_MS")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()
                    .unwrap_or(3000),
                ready_delay_ms: env::var("PAWHUB_READY_DELAY_MS")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .unwrap_or(8000),
                estimated_ready_days: env::var("PAWHUB_ESTIMATED_READY_DAYS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()
                    .unwrap_or(2),
            },
        })
    }
}

impl LifecycleConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }

    pub fn ready_delay(&self) -> Duration {
        Duration::from_millis(self.ready_delay_ms)
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: 3000,
            ready_delay_ms: 8000,
            estimated_ready_days: 2,
        }
    }
}
