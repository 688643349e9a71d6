//! Ledger settings value object
//!
//! Tunables for purchase defaults and the income formula. Defaults match the
//! shipped balance; environment variables override them for playtesting.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Economy settings for owned businesses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerSettings {
    /// Base daily income assigned on purchase
    pub default_daily_income: i64,
    /// Income multiplier added per upgrade level
    pub upgrade_income_step: f64,
    /// Flat income added per employee
    pub income_per_employee: i64,
    /// Elapsed game time between automatic collections
    pub income_interval_secs: u64,
}

impl Default for LedgerSettings {
    fn default() -> Self {
        Self {
            default_daily_income: 500,
            upgrade_income_step: 0.2,
            income_per_employee: 10,
            income_interval_secs: 300,
        }
    }
}

impl LedgerSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_daily_income: env_or("BIZOWNER_DEFAULT_DAILY_INCOME", defaults.default_daily_income),
            upgrade_income_step: env_or("BIZOWNER_UPGRADE_INCOME_STEP", defaults.upgrade_income_step),
            income_per_employee: env_or("BIZOWNER_INCOME_PER_EMPLOYEE", defaults.income_per_employee),
            income_interval_secs: env_or("BIZOWNER_INCOME_INTERVAL_SECS", defaults.income_interval_secs),
        }
    }

    pub fn income_interval(&self) -> Duration {
        Duration::from_secs(self.income_interval_secs)
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
