// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Network upgrade schedules and the height to version mapping.

use crate::error::DecodeError;
use fil_actors_decoder_config::NetworkConfig;
use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Upgrade schedule for '{0}' is empty")]
    Empty(String),

    #[error("Unknown network version {version} in the schedule for '{network}'")]
    UnknownVersion { network: String, version: u32 },

    #[error(
        "Upgrade schedule for '{network}' goes from {previous} to {next} at height {height}; versions must strictly increase"
    )]
    NotIncreasing {
        network: String,
        height: i64,
        previous: NetworkVersion,
        next: NetworkVersion,
    },

    #[error("Invalid network configuration: {0}")]
    Config(#[from] fil_actors_decoder_config::NetworkError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Calibration,
    Custom(String),
}

impl Network {
    pub fn name(&self) -> &str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Calibration => "calibration",
            Network::Custom(name) => name,
        }
    }

    /// Leading character of rendered addresses on this network.
    pub fn address_prefix(&self) -> char {
        match self {
            Network::Mainnet => 'f',
            _ => 't',
        }
    }
}

impl FromStr for Network {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "mainnet" => Network::Mainnet,
            "calibration" | "calibrationnet" => Network::Calibration,
            other => Network::Custom(other.to_string()),
        })
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Filecoin network version, bumped by every protocol upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NetworkVersion {
    V0,
    V1,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
    V17,
    V18,
    V19,
    V20,
    V21,
    V22,
    V23,
    V24,
    V25,
}

impl NetworkVersion {
    pub const ALL: [NetworkVersion; 26] = [
        NetworkVersion::V0,
        NetworkVersion::V1,
        NetworkVersion::V2,
        NetworkVersion::V3,
        NetworkVersion::V4,
        NetworkVersion::V5,
        NetworkVersion::V6,
        NetworkVersion::V7,
        NetworkVersion::V8,
        NetworkVersion::V9,
        NetworkVersion::V10,
        NetworkVersion::V11,
        NetworkVersion::V12,
        NetworkVersion::V13,
        NetworkVersion::V14,
        NetworkVersion::V15,
        NetworkVersion::V16,
        NetworkVersion::V17,
        NetworkVersion::V18,
        NetworkVersion::V19,
        NetworkVersion::V20,
        NetworkVersion::V21,
        NetworkVersion::V22,
        NetworkVersion::V23,
        NetworkVersion::V24,
        NetworkVersion::V25,
    ];

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.get(number as usize).copied()
    }

    /// Actors release whose method schemas are live at this network version.
    pub fn actors_version(self) -> ActorsVersion {
        use NetworkVersion::*;
        match self {
            V0 | V1 | V2 | V3 => ActorsVersion::V0,
            V4 | V5 | V6 | V7 | V8 | V9 => ActorsVersion::V2,
            V10 | V11 => ActorsVersion::V3,
            V12 => ActorsVersion::V4,
            V13 => ActorsVersion::V5,
            V14 => ActorsVersion::V6,
            V15 => ActorsVersion::V7,
            V16 => ActorsVersion::V8,
            V17 => ActorsVersion::V9,
            V18 => ActorsVersion::V10,
            V19 | V20 => ActorsVersion::V11,
            V21 => ActorsVersion::V12,
            V22 => ActorsVersion::V13,
            V23 => ActorsVersion::V14,
            V24 => ActorsVersion::V15,
            V25 => ActorsVersion::V16,
        }
    }
}

impl fmt::Display for NetworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nv{}", self.number())
    }
}

/// Built-in actors release. There was never an actors v1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActorsVersion {
    V0,
    V2,
    V3,
    V4,
    V5,
    V6,
    V7,
    V8,
    V9,
    V10,
    V11,
    V12,
    V13,
    V14,
    V15,
    V16,
}

impl ActorsVersion {
    pub const ALL: [ActorsVersion; 16] = [
        ActorsVersion::V0,
        ActorsVersion::V2,
        ActorsVersion::V3,
        ActorsVersion::V4,
        ActorsVersion::V5,
        ActorsVersion::V6,
        ActorsVersion::V7,
        ActorsVersion::V8,
        ActorsVersion::V9,
        ActorsVersion::V10,
        ActorsVersion::V11,
        ActorsVersion::V12,
        ActorsVersion::V13,
        ActorsVersion::V14,
        ActorsVersion::V15,
        ActorsVersion::V16,
    ];

    pub fn number(self) -> u32 {
        match self {
            ActorsVersion::V0 => 0,
            ActorsVersion::V2 => 2,
            ActorsVersion::V3 => 3,
            ActorsVersion::V4 => 4,
            ActorsVersion::V5 => 5,
            ActorsVersion::V6 => 6,
            ActorsVersion::V7 => 7,
            ActorsVersion::V8 => 8,
            ActorsVersion::V9 => 9,
            ActorsVersion::V10 => 10,
            ActorsVersion::V11 => 11,
            ActorsVersion::V12 => 12,
            ActorsVersion::V13 => 13,
            ActorsVersion::V14 => 14,
            ActorsVersion::V15 => 15,
            ActorsVersion::V16 => 16,
        }
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.number() == number)
    }
}

impl fmt::Display for ActorsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number())
    }
}

/// Network version changes for a chain, keyed by activation height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeSchedule {
    changes: BTreeMap<i64, NetworkVersion>,
}

const MAINNET_UPGRADES: [(i64, NetworkVersion); 26] = [
    (0, NetworkVersion::V0),
    (41_280, NetworkVersion::V1),       // Breeze
    (51_000, NetworkVersion::V2),       // Smoke
    (94_000, NetworkVersion::V3),       // Ignition
    (138_720, NetworkVersion::V4),      // Assembly
    (140_760, NetworkVersion::V5),      // Tape
    (170_000, NetworkVersion::V6),      // Kumquat
    (265_200, NetworkVersion::V7),      // Calico
    (272_400, NetworkVersion::V8),      // Persian
    (336_458, NetworkVersion::V9),      // Orange
    (550_321, NetworkVersion::V10),     // Trust
    (665_280, NetworkVersion::V11),     // Norwegian
    (712_320, NetworkVersion::V12),     // Turbo
    (892_800, NetworkVersion::V13),     // Hyperdrive
    (1_231_620, NetworkVersion::V14),   // Chocolate
    (1_594_680, NetworkVersion::V15),   // OhSnap
    (1_960_320, NetworkVersion::V16),   // Skyr
    (2_383_680, NetworkVersion::V17),   // Shark
    (2_683_348, NetworkVersion::V18),   // Hygge
    (2_809_800, NetworkVersion::V19),   // Lightning
    (2_870_280, NetworkVersion::V20),   // Thunder
    (3_469_380, NetworkVersion::V21),   // Watermelon
    (3_855_360, NetworkVersion::V22),   // Dragon
    (4_154_640, NetworkVersion::V23),   // Waffle
    (4_461_240, NetworkVersion::V24),   // TukTuk
    (4_878_840, NetworkVersion::V25),   // Teep
];

// Calibration genesis already ran the first three upgrades.
const CALIBRATION_UPGRADES: [(i64, NetworkVersion); 23] = [
    (0, NetworkVersion::V3),
    (30, NetworkVersion::V4),
    (60, NetworkVersion::V5),
    (90, NetworkVersion::V6),
    (120, NetworkVersion::V7),
    (240, NetworkVersion::V8),
    (300, NetworkVersion::V9),
    (330, NetworkVersion::V10),
    (360, NetworkVersion::V11),
    (390, NetworkVersion::V12),
    (420, NetworkVersion::V13),
    (450, NetworkVersion::V14),
    (480, NetworkVersion::V15),
    (510, NetworkVersion::V16),
    (16_800, NetworkVersion::V17),
    (322_354, NetworkVersion::V18),
    (489_094, NetworkVersion::V19),
    (492_214, NetworkVersion::V20),
    (1_013_134, NetworkVersion::V21),
    (1_427_974, NetworkVersion::V22),
    (1_779_094, NetworkVersion::V23),
    (2_078_794, NetworkVersion::V24),
    (2_523_454, NetworkVersion::V25),
];

impl UpgradeSchedule {
    /// Build a schedule, rejecting empty tables and versions that do not
    /// strictly increase with height.
    pub fn new(
        network: &str,
        changes: BTreeMap<i64, NetworkVersion>,
    ) -> Result<Self, ScheduleError> {
        if changes.is_empty() {
            return Err(ScheduleError::Empty(network.to_string()));
        }

        let mut previous: Option<NetworkVersion> = None;
        for (&height, &version) in &changes {
            if let Some(previous) = previous
                && version <= previous
            {
                return Err(ScheduleError::NotIncreasing {
                    network: network.to_string(),
                    height,
                    previous,
                    next: version,
                });
            }
            previous = Some(version);
        }

        Ok(Self { changes })
    }

    /// Build a schedule from raw network version numbers, as found in
    /// configuration.
    pub fn from_numbers(network: &str, changes: &BTreeMap<i64, u32>) -> Result<Self, ScheduleError> {
        let changes = changes
            .iter()
            .map(|(&height, &number)| {
                NetworkVersion::from_number(number)
                    .map(|version| (height, version))
                    .ok_or_else(|| ScheduleError::UnknownVersion {
                        network: network.to_string(),
                        version: number,
                    })
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Self::new(network, changes)
    }

    pub fn mainnet() -> Self {
        Self {
            changes: MAINNET_UPGRADES.into_iter().collect(),
        }
    }

    pub fn calibration() -> Self {
        Self {
            changes: CALIBRATION_UPGRADES.into_iter().collect(),
        }
    }

    pub fn version_at(&self, height: i64) -> Option<NetworkVersion> {
        self.changes
            .range(..=height)
            .next_back()
            .map(|(_, version)| *version)
    }

    pub fn activation_height(&self, version: NetworkVersion) -> Option<i64> {
        self.changes
            .iter()
            .find(|(_, v)| **v == version)
            .map(|(height, _)| *height)
    }

    pub fn all_versions(&self) -> Vec<(i64, NetworkVersion)> {
        self.changes.iter().map(|(h, v)| (*h, *v)).collect()
    }

    pub fn version_changed_at(&self, height: i64) -> bool {
        self.changes.contains_key(&height)
    }
}

/// Maps `(network, height)` to the network version in force.
#[derive(Debug, Clone)]
pub struct VersionResolver {
    schedules: HashMap<String, UpgradeSchedule>,
    default_network: Network,
}

impl Default for VersionResolver {
    fn default() -> Self {
        let mut schedules = HashMap::new();
        schedules.insert(Network::Mainnet.name().to_string(), UpgradeSchedule::mainnet());
        schedules.insert(
            Network::Calibration.name().to_string(),
            UpgradeSchedule::calibration(),
        );
        Self {
            schedules,
            default_network: Network::Mainnet,
        }
    }
}

impl VersionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schedule(mut self, network: &Network, schedule: UpgradeSchedule) -> Self {
        self.schedules.insert(network.name().to_string(), schedule);
        self
    }

    /// Built-in schedules plus the custom ones from configuration.
    pub fn from_config(config: &NetworkConfig) -> Result<Self, ScheduleError> {
        let mut resolver = Self::default();
        for (name, changes) in config.custom_schedules()? {
            let schedule = UpgradeSchedule::from_numbers(&name, &changes)?;
            resolver.schedules.insert(name, schedule);
        }
        resolver.default_network = config.network.parse().unwrap_or(Network::Mainnet);
        Ok(resolver)
    }

    /// Network used when a caller does not name one.
    pub fn default_network(&self) -> &Network {
        &self.default_network
    }

    pub fn schedule(&self, network: &Network) -> Option<&UpgradeSchedule> {
        self.schedules.get(network.name())
    }

    pub fn resolve(&self, network: &Network, height: i64) -> Result<NetworkVersion, DecodeError> {
        self.schedule(network)
            .and_then(|schedule| schedule.version_at(height))
            .ok_or_else(|| DecodeError::UnsupportedHeight {
                network: network.name().to_string(),
                height,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_lookup() {
        let resolver = VersionResolver::new();
        let mainnet = Network::Mainnet;

        assert_eq!(resolver.resolve(&mainnet, 0).unwrap(), NetworkVersion::V0);
        assert_eq!(resolver.resolve(&mainnet, 41_279).unwrap(), NetworkVersion::V0);
        assert_eq!(resolver.resolve(&mainnet, 41_280).unwrap(), NetworkVersion::V1);
        assert_eq!(resolver.resolve(&mainnet, 2_683_348).unwrap(), NetworkVersion::V18);
        assert_eq!(resolver.resolve(&mainnet, 3_500_000).unwrap(), NetworkVersion::V21);
        assert_eq!(resolver.resolve(&mainnet, i64::MAX).unwrap(), NetworkVersion::V25);
    }

    #[test]
    fn test_calibration_lookup() {
        let resolver = VersionResolver::new();
        let calibration = Network::Calibration;

        assert_eq!(resolver.resolve(&calibration, 0).unwrap(), NetworkVersion::V3);
        assert_eq!(resolver.resolve(&calibration, 16_800).unwrap(), NetworkVersion::V17);
        assert_eq!(resolver.resolve(&calibration, 16_799).unwrap(), NetworkVersion::V16);
    }

    #[test]
    fn test_height_below_earliest_version() {
        let resolver = VersionResolver::new();
        let err = resolver.resolve(&Network::Mainnet, -1).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnsupportedHeight { height: -1, .. }
        ));
    }

    #[test]
    fn test_unknown_network_is_unsupported() {
        let resolver = VersionResolver::new();
        let err = resolver
            .resolve(&Network::Custom("butterfly".to_string()), 10)
            .unwrap_err();
        assert!(matches!(err, DecodeError::UnsupportedHeight { .. }));
    }

    #[test]
    fn test_resolution_is_monotonic() {
        let resolver = VersionResolver::new();
        for network in [Network::Mainnet, Network::Calibration] {
            let mut previous = None;
            for height in (0..5_000_000).step_by(9_973) {
                let version = resolver.resolve(&network, height).unwrap();
                if let Some(previous) = previous {
                    assert!(version >= previous, "{network} regressed at {height}");
                }
                previous = Some(version);
            }
        }
    }

    #[test]
    fn test_builtin_schedules_are_valid() {
        for (name, schedule) in [
            ("mainnet", UpgradeSchedule::mainnet()),
            ("calibration", UpgradeSchedule::calibration()),
        ] {
            let changes = schedule.all_versions().into_iter().collect();
            assert!(UpgradeSchedule::new(name, changes).is_ok());
        }
    }

    #[test]
    fn test_schedule_rejects_decreasing_versions() {
        let mut changes = BTreeMap::new();
        changes.insert(0, NetworkVersion::V18);
        changes.insert(100, NetworkVersion::V17);

        let err = UpgradeSchedule::new("devnet", changes).unwrap_err();
        assert!(matches!(err, ScheduleError::NotIncreasing { height: 100, .. }));
    }

    #[test]
    fn test_schedule_rejects_unknown_version_number() {
        let mut changes = BTreeMap::new();
        changes.insert(0, 99);
        let err = UpgradeSchedule::from_numbers("devnet", &changes).unwrap_err();
        assert!(matches!(err, ScheduleError::UnknownVersion { version: 99, .. }));
    }

    #[test]
    fn test_resolver_from_config() {
        let config = NetworkConfig {
            network: "devnet".to_string(),
            custom_upgrades: Some(r#"{"devnet":{"0":16,"100":18}}"#.to_string()),
        };
        let resolver = VersionResolver::from_config(&config).unwrap();
        let devnet = Network::Custom("devnet".to_string());

        assert_eq!(resolver.default_network(), &devnet);
        assert_eq!(resolver.resolve(&devnet, 99).unwrap(), NetworkVersion::V16);
        assert_eq!(resolver.resolve(&devnet, 100).unwrap(), NetworkVersion::V18);
        assert!(resolver.resolve(&Network::Mainnet, 0).is_ok());
    }

    #[test]
    fn test_actors_version_mapping() {
        assert_eq!(NetworkVersion::V3.actors_version(), ActorsVersion::V0);
        assert_eq!(NetworkVersion::V9.actors_version(), ActorsVersion::V2);
        assert_eq!(NetworkVersion::V17.actors_version(), ActorsVersion::V9);
        assert_eq!(NetworkVersion::V18.actors_version(), ActorsVersion::V10);
        assert_eq!(NetworkVersion::V20.actors_version(), ActorsVersion::V11);
        assert_eq!(NetworkVersion::V25.actors_version(), ActorsVersion::V16);

        let mut previous = ActorsVersion::V0;
        for version in NetworkVersion::ALL {
            assert!(version.actors_version() >= previous);
            previous = version.actors_version();
        }
    }

    #[test]
    fn test_network_parsing() {
        assert_eq!("mainnet".parse::<Network>().unwrap(), Network::Mainnet);
        assert_eq!("calibrationnet".parse::<Network>().unwrap(), Network::Calibration);
        assert_eq!(Network::Calibration.address_prefix(), 't');
        assert_eq!(Network::Mainnet.address_prefix(), 'f');
    }
}
