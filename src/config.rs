/*!
config.rs - server settings.

Sources, highest precedence first:
  1. CLI flags        (--curl-bin, --process-timeout)
  2. Environment      (MCP_CURL_BIN, MCP_CURL_PROCESS_TIMEOUT)
  3. Config file      (-c/--config; JSON, or YAML when the path ends in .yaml/.yml)
  4. Defaults         (curl from PATH, no process timeout)
*/

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::curl::Executor;

pub const ENV_CURL_BIN: &str = "MCP_CURL_BIN";
pub const ENV_PROCESS_TIMEOUT: &str = "MCP_CURL_PROCESS_TIMEOUT";
pub const DEFAULT_CURL_BIN: &str = "curl";

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub curl_bin: Option<String>,
    pub process_timeout_secs: Option<f64>,
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub curl_bin: Option<String>,
    pub process_timeout_secs: Option<f64>,
}

/// Effective settings after merging every source.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub curl_bin: String,
    pub process_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            curl_bin: DEFAULT_CURL_BIN.to_string(),
            process_timeout: None,
        }
    }
}

impl ServerConfig {
    /// Merge sources. `env` is injected so tests don't touch the process environment.
    pub fn resolve(
        cli: Overrides,
        file: Option<FileConfig>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let file = file.unwrap_or_default();
        let env_nonempty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        let curl_bin = cli
            .curl_bin
            .filter(|s| !s.trim().is_empty())
            .or_else(|| env_nonempty(ENV_CURL_BIN))
            .or(file.curl_bin.filter(|s| !s.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_CURL_BIN.to_string());

        let timeout_secs = match cli.process_timeout_secs {
            Some(secs) => Some(secs),
            None => match env_nonempty(ENV_PROCESS_TIMEOUT) {
                Some(raw) => Some(
                    raw.trim()
                        .parse::<f64>()
                        .with_context(|| format!("invalid {ENV_PROCESS_TIMEOUT}: '{raw}'"))?,
                ),
                None => file.process_timeout_secs,
            },
        };
        let process_timeout = timeout_secs.map(to_duration).transpose()?;

        Ok(Self {
            curl_bin,
            process_timeout,
        })
    }

    pub fn executor(&self) -> Executor {
        Executor::new(self.curl_bin.clone()).with_timeout(self.process_timeout)
    }
}

fn to_duration(secs: f64) -> Result<Duration> {
    if !(secs.is_finite() && secs > 0.0) {
        anyhow::bail!("process timeout must be a positive number of seconds, got {secs}");
    }
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("process timeout out of range: {secs}"))
}

/// Read a JSON or YAML config file.
pub fn load_config_file(path: &str) -> Result<FileConfig> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("failed to read config file: {path}"))?;
    let lower = path.to_ascii_lowercase();

    if lower.ends_with(".yaml") || lower.ends_with(".yml") {
        serde_yaml::from_str(&raw).context("failed to parse YAML config file")
    } else {
        serde_json::from_str(&raw).context("failed to parse JSON config file")
    }
}
