//! System power estimation and GPU power-connector parsing.
//!
//! Estimates are deliberately simple sums of nameplate figures: the CPU and
//! GPU at their rated TDP plus flat allowances for the platform, memory,
//! drives, and fans.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{BuildInput, CoolerKind, StorageKind};

/// Motherboard, chipset, USB, and miscellaneous draw.
pub const PLATFORM_BASE_W: u32 = 50;
pub const RAM_MODULE_W: u32 = 3;
pub const NVME_DRIVE_W: u32 = 7;
pub const SATA_SSD_W: u32 = 5;
pub const HDD_W: u32 = 10;
pub const FAN_W: u32 = 3;
pub const AIO_PUMP_W: u32 = 5;

/// Headroom below which a PSU is considered undersized for sustained load.
pub const MIN_HEADROOM_RATIO: f64 = 1.25;

/// Itemized power draw for a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PowerEstimate {
    pub cpu_w: u32,
    pub gpu_w: u32,
    pub platform_w: u32,
    pub memory_w: u32,
    pub storage_w: u32,
    pub cooling_w: u32,
    pub total_w: u32,
}

impl PowerEstimate {
    /// Ratio of supplied wattage to estimated draw.
    ///
    /// Returns `f64::INFINITY` for an empty build so that any PSU counts as
    /// having headroom.
    pub fn headroom_ratio(&self, psu_w: u32) -> f64 {
        if self.total_w == 0 {
            return f64::INFINITY;
        }
        f64::from(psu_w) / f64::from(self.total_w)
    }

    /// Smallest PSU wattage that keeps the recommended headroom.
    pub fn recommended_psu_w(&self) -> u32 {
        (f64::from(self.total_w) * MIN_HEADROOM_RATIO).ceil() as u32
    }
}

/// Estimate sustained system draw from the selected parts.
pub fn estimate_system_draw(build: &BuildInput) -> PowerEstimate {
    let cpu_w = build.cpu.as_ref().map_or(0, |cpu| cpu.specs.tdp_w);
    let gpu_w = build.gpu.as_ref().map_or(0, |gpu| gpu.specs.tdp_w);
    let memory_w = build.ram.as_ref().map_or(0, |ram| ram.specs.modules.saturating_mul(RAM_MODULE_W));
    let storage_w = build
        .storage
        .iter()
        .map(|drive| match drive.specs.kind {
            StorageKind::Nvme => NVME_DRIVE_W,
            StorageKind::SataSsd => SATA_SSD_W,
            StorageKind::Hdd35 | StorageKind::Hdd25 => HDD_W,
        })
        .fold(0u32, u32::saturating_add);
    let case_fans = build.case.as_ref().map_or(0, |case| case.specs.fan_count);
    let cooling_w = match &build.cooler {
        Some(cooler) => {
            let pump = if cooler.specs.kind == CoolerKind::Aio { AIO_PUMP_W } else { 0 };
            cooler.specs.fan_count.saturating_add(case_fans).saturating_mul(FAN_W).saturating_add(pump)
        }
        None => case_fans.saturating_mul(FAN_W),
    };
    let platform_w = if build.is_empty() { 0 } else { PLATFORM_BASE_W };

    let total_w = [cpu_w, gpu_w, platform_w, memory_w, storage_w, cooling_w]
        .into_iter()
        .fold(0u32, u32::saturating_add);
    PowerEstimate { cpu_w, gpu_w, platform_w, memory_w, storage_w, cooling_w, total_w }
}

/// PCIe power plugs a GPU asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectorDemand {
    pub pin8: u32,
    pub pin6: u32,
    pub pin16: u32,
}

impl ConnectorDemand {
    pub fn is_empty(&self) -> bool {
        self.pin8 == 0 && self.pin6 == 0 && self.pin16 == 0
    }
}

fn connector_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:(\d+)\s*[x×]\s*)?(6\+2|16|12|8|6)[\s-]*pins?(?:\s*[x×]\s*(\d+))?")
            .expect("connector pattern is valid")
    })
}

/// Parse free-form connector strings into pin-type counts.
///
/// Accepts forms such as `"2x 8-pin"`, `"8-pin x2"`, `"6+2 pin"`,
/// `"1x 16-pin (12VHPWR)"`, or a bare `"12V-2x6"`. The 12-pin and
/// 12VHPWR/12V-2x6 family all count as 16-pin.
pub fn parse_connector_demand(connectors: &[String]) -> ConnectorDemand {
    let mut demand = ConnectorDemand::default();
    for entry in connectors {
        let mut matched = false;
        for caps in connector_pattern().captures_iter(entry) {
            matched = true;
            let count = caps
                .get(1)
                .or_else(|| caps.get(3))
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .unwrap_or(1);
            match caps.get(2).map(|m| m.as_str()) {
                Some("16") | Some("12") => demand.pin16 = demand.pin16.saturating_add(count),
                Some("8") | Some("6+2") => demand.pin8 = demand.pin8.saturating_add(count),
                Some("6") => demand.pin6 = demand.pin6.saturating_add(count),
                _ => {}
            }
        }
        if !matched {
            let upper = entry.to_ascii_uppercase();
            if upper.contains("12VHPWR") || upper.contains("12V-2X6") || upper.contains("12V2X6") {
                demand.pin16 = demand.pin16.saturating_add(1);
            }
        }
    }
    demand
}
