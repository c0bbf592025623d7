//! Service configuration, read from environment variables at startup.
//!
//! | variable                   | default              |
//! |----------------------------|----------------------|
//! | `MEDSTOCK_BIND_ADDR`       | `0.0.0.0:8000`       |
//! | `MEDSTOCK_POLICY_ARTIFACT` | `dqn_inventory.json` |
//! | `MEDSTOCK_POLICY`          | `dqn`                |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "MEDSTOCK_BIND_ADDR";
pub const POLICY_ARTIFACT_VAR: &str = "MEDSTOCK_POLICY_ARTIFACT";
pub const POLICY_KIND_VAR: &str = "MEDSTOCK_POLICY";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_POLICY_ARTIFACT: &str = "dqn_inventory.json";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}={value:?}: {message}")]
    Invalid {
        var: &'static str,
        value: String,
        message: String,
    },
}

/// Which policy the service answers with.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PolicyKind {
    /// Trained DQN loaded from the artifact file.
    Dqn,
    /// Order-up-to baseline; no artifact is read.
    OrderUpTo,
}

impl FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dqn" => Ok(PolicyKind::Dqn),
            "order-up-to" | "order_up_to" | "heuristic" => Ok(PolicyKind::OrderUpTo),
            _ => Err("expected one of: dqn, order-up-to".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub artifact_path: PathBuf,
    pub policy_kind: PolicyKind,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = parse_var(&lookup, BIND_ADDR_VAR, DEFAULT_BIND_ADDR, |v| {
            v.parse::<SocketAddr>().map_err(|e| e.to_string())
        })?;

        let policy_kind = parse_var(&lookup, POLICY_KIND_VAR, "dqn", PolicyKind::from_str)?;

        let artifact_path = lookup(POLICY_ARTIFACT_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_ARTIFACT));

        Ok(Self {
            bind_addr,
            artifact_path,
            policy_kind,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    parse(&value).map_err(|message| ConfigError::Invalid {
        var,
        value,
        message,
    })
}
