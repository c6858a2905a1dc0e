// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::collections::BTreeMap;
use thiserror::Error;

/// Upgrade schedules keyed by network name, then by activation height.
/// Values are network version numbers.
pub type CustomSchedules = BTreeMap<String, BTreeMap<i64, u32>>;

const BUILTIN_NETWORKS: [&str; 2] = ["mainnet", "calibration"];

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Network name cannot be empty")]
    EmptyName,

    #[error("Invalid network name '{0}': only lowercase letters, digits and '-' are allowed")]
    InvalidName(String),

    #[error("Invalid custom upgrades JSON: {0}")]
    InvalidUpgradesJson(#[from] serde_json::Error),

    #[error("Custom upgrade schedule for '{0}' is empty")]
    EmptySchedule(String),

    #[error("Network '{0}' is not built in and has no custom upgrade schedule")]
    MissingSchedule(String),
}

#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Network whose upgrade schedule is used by default
    ///
    /// Env: FIL_DECODER_NETWORK
    /// Built in: mainnet, calibration
    /// Default: mainnet
    pub network: String,

    /// Extra upgrade schedules for devnets
    ///
    /// Env: FIL_DECODER_CUSTOM_UPGRADES
    /// Format: JSON object of network name to {height: network version}
    /// Example: '{"butterfly":{"0":21,"2000":22}}'
    /// Default: none
    pub custom_upgrades: Option<String>,
}

pub(crate) fn default_network() -> String {
    "mainnet".to_string()
}

impl NetworkConfig {
    /// Parse the custom upgrade schedules, if any were configured.
    pub fn custom_schedules(&self) -> Result<CustomSchedules, NetworkError> {
        let Some(raw) = self.custom_upgrades.as_deref() else {
            return Ok(CustomSchedules::new());
        };
        if raw.trim().is_empty() {
            return Ok(CustomSchedules::new());
        }

        let schedules: CustomSchedules = serde_json::from_str(raw)?;
        for (name, schedule) in &schedules {
            Self::validate_name(name)?;
            if schedule.is_empty() {
                return Err(NetworkError::EmptySchedule(name.clone()));
            }
        }
        Ok(schedules)
    }

    pub(crate) fn validate(&self) -> Result<(), NetworkError> {
        Self::validate_name(&self.network)?;
        let schedules = self.custom_schedules()?;

        if !BUILTIN_NETWORKS.contains(&self.network.as_str())
            && !schedules.contains_key(&self.network)
        {
            return Err(NetworkError::MissingSchedule(self.network.clone()));
        }

        Ok(())
    }

    fn validate_name(name: &str) -> Result<(), NetworkError> {
        if name.is_empty() {
            return Err(NetworkError::EmptyName);
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(NetworkError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            custom_upgrades: None,
        }
    }
}
