use rust_decimal::Decimal;
use shared::error::{AppError, AppResult};
use std::str::FromStr;

use crate::pricing::{ConfiguredDelivery, DeliveryPolicyKind};

/// Largest accepted `DELIVERY_FEE`
pub const MAX_DELIVERY_FEE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DELIVERY_POLICY | flat | `flat`, `per_item` or `free` |
/// | DELIVERY_FEE | 50 | Fee used by `flat` and `per_item` |
/// | LOG_LEVEL | info | Max tracing level |
/// | LOG_FORMAT | text | `text` or `json` |
/// | LOG_DIR | (unset) | Enables daily rolling log files |
/// | ENVIRONMENT | development | Environment label |
///
/// # Example
///
/// ```ignore
/// DELIVERY_POLICY=per_item DELIVERY_FEE=40 eco-quote order.json
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Delivery fee strategy for ranks without free delivery
    pub delivery_policy: DeliveryPolicyKind,
    /// Fee per order (`flat`) or per line (`per_item`)
    pub delivery_fee: Decimal,
    pub log_level: String,
    pub log_json: bool,
    /// Directory for rolling log files; stderr only when unset
    pub log_dir: Option<String>,
    /// development | staging | production
    pub environment: String,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to defaults (with a warning);
    /// a delivery fee outside `0..=MAX_DELIVERY_FEE` is rejected.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let delivery_fee = parse_or(&lookup, "DELIVERY_FEE", defaults.delivery_fee);
        if delivery_fee < Decimal::ZERO || delivery_fee > MAX_DELIVERY_FEE {
            return Err(AppError::config(format!(
                "DELIVERY_FEE must be between 0 and {MAX_DELIVERY_FEE}, got {delivery_fee}"
            ))
            .with_detail("key", "DELIVERY_FEE"));
        }

        let log_json = lookup("LOG_FORMAT")
            .map(|v| v.trim().eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.log_json);

        Ok(Self {
            delivery_policy: parse_or(&lookup, "DELIVERY_POLICY", defaults.delivery_policy),
            delivery_fee,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json,
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
        })
    }

    /// Delivery policy built from `delivery_policy` and `delivery_fee`
    pub fn delivery(&self) -> ConfiguredDelivery {
        ConfiguredDelivery::from_kind(self.delivery_policy, self.delivery_fee)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            delivery_policy: DeliveryPolicyKind::Flat,
            delivery_fee: Decimal::from(50),
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
            environment: "development".into(),
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable config value");
            default
        }),
        None => default,
    }
}
