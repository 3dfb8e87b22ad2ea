//! Built-in compatibility rules, grouped by what they inspect.

mod clearance;
mod efficiency;
mod features;
pub(crate) mod fit;
mod headers;
mod power;
mod storage;
mod thermal;

use super::{FnRule, RuleRegistry};

/// Register every built-in rule in evaluation order.
pub(crate) fn register_builtin(registry: &mut RuleRegistry) {
    registry
        .register(FnRule::new("socketMismatch", fit::socket_mismatch))
        .register(FnRule::new("ramTypeMismatch", fit::ram_type_mismatch))
        .register(FnRule::new("cpuMemoryUnsupported", fit::cpu_memory_unsupported))
        .register(FnRule::new("formFactorMismatch", fit::form_factor_mismatch))
        .register(FnRule::new("coolerSocketUnsupported", fit::cooler_socket_unsupported))
        .register(FnRule::new("ramModulesExceeded", fit::ram_modules_exceeded))
        .register(FnRule::new("noDisplayOutput", fit::no_display_output))
        .register(FnRule::new("gpuTooLong", clearance::gpu_too_long))
        .register(FnRule::new("gpuTooThick", clearance::gpu_too_thick))
        .register(FnRule::new("coolerTooTall", clearance::cooler_too_tall))
        .register(FnRule::new("radiatorIncompatible", clearance::radiator_incompatible))
        .register(FnRule::new("psuTooLong", clearance::psu_too_long))
        .register(FnRule::new("psuWattage", power::psu_wattage))
        .register(FnRule::new("gpuPowerConnectors", power::gpu_power_connectors))
        .register(FnRule::new("coolingCapacity", thermal::cooling_capacity))
        .register(FnRule::new("nvmeSlotsExceeded", storage::nvme_slots_exceeded))
        .register(FnRule::new("sataPortsExceeded", storage::sata_ports_exceeded))
        .register(FnRule::new("driveBayClearance", clearance::drive_bay_clearance))
        .register(FnRule::new("fanHeaders", headers::fan_headers))
        .register(FnRule::new("rgbHeaders", headers::rgb_headers))
        .register(FnRule::new("usbCHeader", headers::usb_c_header))
        .register(FnRule::new("eccSupport", features::ecc_support))
        .register(FnRule::new("ramSpeedRisk", features::ram_speed_risk))
        .register(FnRule::new("biosUpdate", features::bios_update))
        .register(FnRule::new("tier-imbalance", efficiency::tier_imbalance))
        .register(FnRule::new("psu-excessive", efficiency::psu_excessive))
        .register(FnRule::new("ram-speed-excess", efficiency::ram_speed_excess))
        .register(FnRule::new("premium-chipset", efficiency::premium_chipset))
        .register(FnRule::new("storage-excess", efficiency::storage_excess))
        .register(FnRule::new("pcie5-ssd-gaming", efficiency::pcie5_ssd_gaming));
}
