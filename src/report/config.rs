use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Error, Result},
    smc::{constants::*, SmcKey},
};

/// Environment variable holding the path of a JSON report configuration
pub const CONFIG_ENV_VAR: &str = "DARWIN_SMC_CONFIG";

/// A temperature sensor printed by the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureProbe {
    pub label: String,
    pub key: String,
}

/// A fan printed by the report, with the keys of its speed registers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FanProfile {
    pub label: String,
    pub min_key: String,
    pub max_key: String,
    pub current_key: String,
    /// Factory minimum speed that boosts are measured from
    pub default_min_rpm: u32,
}

/// What the report reads, in order.
///
/// The default matches the classic two-sensor, two-fan layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub temperatures: Vec<TemperatureProbe>,
    pub fans: Vec<FanProfile>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            temperatures: vec![
                TemperatureProbe { label: "CPU".into(), key: SMC_KEY_CPU_HEATSINK_TEMP.into() },
                TemperatureProbe { label: "GPU".into(), key: SMC_KEY_GPU_HEATSINK_TEMP.into() },
            ],
            fans: vec![
                FanProfile {
                    label: "ODD".into(),
                    min_key: SMC_KEY_FAN0_RPM_MIN.into(),
                    max_key: SMC_KEY_FAN0_RPM_MAX.into(),
                    current_key: SMC_KEY_FAN0_RPM_CUR.into(),
                    default_min_rpm: FAN0_DEFAULT_MIN_RPM,
                },
                FanProfile {
                    label: "CPU".into(),
                    min_key: SMC_KEY_FAN2_RPM_MIN.into(),
                    max_key: SMC_KEY_FAN2_RPM_MAX.into(),
                    current_key: SMC_KEY_FAN2_RPM_CUR.into(),
                    default_min_rpm: FAN2_DEFAULT_MIN_RPM,
                },
            ],
        }
    }
}

impl ReportConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Load the file named by [`CONFIG_ENV_VAR`], or the defaults when it isn't set.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check that every key is a well-formed SMC key
    pub fn validate(&self) -> Result<()> {
        let keys = self
            .temperatures
            .iter()
            .map(|t| &t.key)
            .chain(self.fans.iter().flat_map(|f| [&f.min_key, &f.max_key, &f.current_key]));

        for key in keys {
            key.parse::<SmcKey>().map_err(|e| Error::config(e.to_string()))?;
        }
        Ok(())
    }
}
