//! Runtime configuration for the dispatcher and the simulated quantum oracle.
//!
//! Both configuration types deserialize from JSON with per-field defaults and
//! can be read from environment variables through [`DispatchConfig::from_lookup`]
//! and [`QuantumOracleConfig::from_lookup`]. The lookup indirection keeps the
//! parsing testable without mutating the process environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the per-agent deadline in milliseconds.
pub const ENV_AGENT_TIMEOUT_MS: &str = "DISPATCH_AGENT_TIMEOUT_MS";
/// Environment variable holding the cap on executions running at once.
pub const ENV_MAX_CONCURRENCY: &str = "DISPATCH_MAX_CONCURRENCY";
/// Environment variable holding the oracle's total qubit count.
pub const ENV_QUANTUM_TOTAL_QUBITS: &str = "QUANTUM_TOTAL_QUBITS";
/// Environment variable holding the qubits reserved per prediction.
pub const ENV_QUANTUM_QUBITS_PER_JOB: &str = "QUANTUM_QUBITS_PER_JOB";
/// Environment variable holding the oracle's reported uptime fraction.
pub const ENV_QUANTUM_UPTIME: &str = "QUANTUM_UPTIME_FRACTION";

const DEFAULT_AGENT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_MAX_CONCURRENCY: usize = 256;
const DEFAULT_TOTAL_QUBITS: u32 = 1024;
const DEFAULT_QUBITS_PER_JOB: u32 = 256;
const DEFAULT_UPTIME_FRACTION: f64 = 0.999;
const DEFAULT_BASE_LATENCY_MS: u64 = 100;
const DEFAULT_LATENCY_JITTER_MS: u64 = 400;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A value could not be parsed.
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue {
        /// Configuration key.
        key: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },

    /// A value is outside its permitted range.
    #[error("{key} is out of range: {reason}")]
    OutOfRange {
        /// Configuration key.
        key: &'static str,
        /// Description of the violated bound.
        reason: &'static str,
    },

    /// The JSON document could not be decoded.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Dispatcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Deadline for a single agent execution, in milliseconds.
    #[serde(default = "default_agent_timeout_ms")]
    pub per_agent_timeout_ms: u64,
    /// Most executions one batch runs at the same time. Further positions
    /// wait for a free slot; they are never rejected.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

const fn default_agent_timeout_ms() -> u64 {
    DEFAULT_AGENT_TIMEOUT_MS
}

const fn default_max_concurrency() -> usize {
    DEFAULT_MAX_CONCURRENCY
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            per_agent_timeout_ms: DEFAULT_AGENT_TIMEOUT_MS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl DispatchConfig {
    /// Sets the per-agent deadline.
    #[must_use]
    pub fn with_per_agent_timeout(mut self, timeout: Duration) -> Self {
        self.per_agent_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the cap on concurrently running executions.
    #[must_use]
    pub const fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    /// Returns the per-agent deadline.
    #[must_use]
    pub const fn per_agent_timeout(&self) -> Duration {
        Duration::from_millis(self.per_agent_timeout_ms)
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::OutOfRange`] for a zero timeout or concurrency cap.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`DispatchConfig::from_lookup`].
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for absent
    /// keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a present value does not
    /// parse and [`ConfigError::OutOfRange`] when it is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let defaults = Self::default();
        let config = Self {
            per_agent_timeout_ms: parse_or(
                &lookup,
                ENV_AGENT_TIMEOUT_MS,
                defaults.per_agent_timeout_ms,
            )?,
            max_concurrency: parse_or(&lookup, ENV_MAX_CONCURRENCY, defaults.max_concurrency)?,
        };
        config.validate()
    }

    fn validate(self) -> ConfigResult<Self> {
        if self.per_agent_timeout_ms == 0 {
            return Err(ConfigError::OutOfRange {
                key: ENV_AGENT_TIMEOUT_MS,
                reason: "must be greater than zero",
            });
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::OutOfRange {
                key: ENV_MAX_CONCURRENCY,
                reason: "must be greater than zero",
            });
        }
        Ok(self)
    }
}

/// Simulated quantum oracle settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumOracleConfig {
    /// Qubits the oracle owns in total.
    #[serde(default = "default_total_qubits")]
    pub total_qubits: u32,
    /// Qubits reserved by one prediction.
    #[serde(default = "default_qubits_per_job")]
    pub qubits_per_job: u32,
    /// Fraction of time the oracle reports itself up, in `[0, 1]`.
    #[serde(default = "default_uptime_fraction")]
    pub uptime_fraction: f64,
    /// Minimum simulated prediction latency, in milliseconds.
    #[serde(default = "default_base_latency_ms")]
    pub base_latency_ms: u64,
    /// Upper bound of the input-derived latency added on top of the base.
    #[serde(default = "default_latency_jitter_ms")]
    pub latency_jitter_ms: u64,
}

const fn default_total_qubits() -> u32 {
    DEFAULT_TOTAL_QUBITS
}

const fn default_qubits_per_job() -> u32 {
    DEFAULT_QUBITS_PER_JOB
}

const fn default_uptime_fraction() -> f64 {
    DEFAULT_UPTIME_FRACTION
}

const fn default_base_latency_ms() -> u64 {
    DEFAULT_BASE_LATENCY_MS
}

const fn default_latency_jitter_ms() -> u64 {
    DEFAULT_LATENCY_JITTER_MS
}

impl Default for QuantumOracleConfig {
    fn default() -> Self {
        Self {
            total_qubits: DEFAULT_TOTAL_QUBITS,
            qubits_per_job: DEFAULT_QUBITS_PER_JOB,
            uptime_fraction: DEFAULT_UPTIME_FRACTION,
            base_latency_ms: DEFAULT_BASE_LATENCY_MS,
            latency_jitter_ms: DEFAULT_LATENCY_JITTER_MS,
        }
    }
}

impl QuantumOracleConfig {
    /// Removes simulated latency so predictions complete immediately.
    #[must_use]
    pub const fn without_latency(mut self) -> Self {
        self.base_latency_ms = 0;
        self.latency_jitter_ms = 0;
        self
    }

    /// Number of predictions that can hold qubits at the same time.
    #[must_use]
    pub fn job_capacity(&self) -> u32 {
        self.total_qubits
            .checked_div(self.qubits_per_job)
            .unwrap_or_default()
    }

    /// Parses and validates a JSON document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents and
    /// [`ConfigError::OutOfRange`] for inconsistent qubit counts or an uptime
    /// fraction outside `[0, 1]`.
    pub fn from_json(document: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(document)?;
        config.validate()
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`QuantumOracleConfig::from_lookup`].
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads qubit and uptime settings through `lookup`, falling back to
    /// defaults for absent keys. Latency settings always take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when a present value does not
    /// parse and [`ConfigError::OutOfRange`] when values are inconsistent.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConfigResult<Self> {
        let defaults = Self::default();
        let config = Self {
            total_qubits: parse_or(&lookup, ENV_QUANTUM_TOTAL_QUBITS, defaults.total_qubits)?,
            qubits_per_job: parse_or(
                &lookup,
                ENV_QUANTUM_QUBITS_PER_JOB,
                defaults.qubits_per_job,
            )?,
            uptime_fraction: parse_or(&lookup, ENV_QUANTUM_UPTIME, defaults.uptime_fraction)?,
            ..defaults
        };
        config.validate()
    }

    /// Checks that the qubit counts leave room for at least one job and that
    /// the uptime fraction lies in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the offending setting.
    pub fn validate(self) -> ConfigResult<Self> {
        if self.qubits_per_job == 0 {
            return Err(ConfigError::OutOfRange {
                key: ENV_QUANTUM_QUBITS_PER_JOB,
                reason: "must be greater than zero",
            });
        }
        if self.qubits_per_job > self.total_qubits {
            return Err(ConfigError::OutOfRange {
                key: ENV_QUANTUM_QUBITS_PER_JOB,
                reason: "must not exceed the total qubit count",
            });
        }
        if !(0.0..=1.0).contains(&self.uptime_fraction) {
            return Err(ConfigError::OutOfRange {
                key: ENV_QUANTUM_UPTIME,
                reason: "must be within [0, 1]",
            });
        }
        Ok(self)
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> ConfigResult<T> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}
