mod common;

use common::*;
use rigsmith_core::model::BuildInput;
use rigsmith_core::power::{estimate_system_draw, parse_connector_demand, ConnectorDemand};

fn connectors(entries: &[&str]) -> ConnectorDemand {
    let owned: Vec<String> = entries.iter().map(|s| s.to_string()).collect();
    parse_connector_demand(&owned)
}

#[test]
fn cpu_gpu_and_platform_sum_to_400_watts() {
    let build = BuildInput {
        cpu: Some(cpu("cpu", "AM5", 6, 120)),
        gpu: Some(gpu("gpu", 7, 230, 300)),
        ..BuildInput::default()
    };
    let estimate = estimate_system_draw(&build);
    assert_eq!(estimate.cpu_w, 120);
    assert_eq!(estimate.gpu_w, 230);
    assert_eq!(estimate.platform_w, 50);
    assert_eq!(estimate.total_w, 400);
    assert_eq!(estimate.recommended_psu_w(), 500);
    assert!((estimate.headroom_ratio(1200) - 3.0).abs() < f64::EPSILON);
}

#[test]
fn reference_build_itemizes_every_allowance() {
    let estimate = estimate_system_draw(&reference_build());
    assert_eq!(estimate.memory_w, 6);
    assert_eq!(estimate.storage_w, 7);
    assert_eq!(estimate.cooling_w, 12);
    assert_eq!(estimate.total_w, 380);
}

#[test]
fn empty_build_draws_nothing() {
    let estimate = estimate_system_draw(&BuildInput::default());
    assert_eq!(estimate.total_w, 0);
    assert!(estimate.headroom_ratio(500).is_infinite());
}

#[test]
fn connector_strings_parse_in_common_spellings() {
    assert_eq!(connectors(&["2x 8-pin"]), ConnectorDemand { pin8: 2, pin6: 0, pin16: 0 });
    assert_eq!(connectors(&["8-pin x2"]), ConnectorDemand { pin8: 2, pin6: 0, pin16: 0 });
    assert_eq!(connectors(&["6+2 pin", "6-pin"]), ConnectorDemand { pin8: 1, pin6: 1, pin16: 0 });
    assert_eq!(connectors(&["1x 16-pin (12VHPWR)"]), ConnectorDemand { pin8: 0, pin6: 0, pin16: 1 });
    assert_eq!(connectors(&["12V-2x6"]), ConnectorDemand { pin8: 0, pin6: 0, pin16: 1 });
    assert!(connectors(&["none listed"]).is_empty());
}

#[test]
fn absurd_specs_saturate_instead_of_overflowing() {
    let mut build = reference_build();
    build.cpu = Some(cpu("cpu-huge", "AM5", 6, u32::MAX));
    build.storage = vec![nvme("ssd-a", u32::MAX, 4), nvme("ssd-b", u32::MAX, 4)];
    if let Some(ram) = build.ram.as_mut() {
        ram.specs.modules = u32::MAX;
    }

    let estimate = estimate_system_draw(&build);
    assert_eq!(estimate.cpu_w, u32::MAX);
    assert_eq!(estimate.memory_w, u32::MAX);
    assert_eq!(estimate.total_w, u32::MAX);
    assert_eq!(build.total_storage_gb(), u32::MAX);

    let demand = connectors(&["4294967295x 8-pin", "4294967295x 8-pin", "12VHPWR"]);
    assert_eq!(demand.pin8, u32::MAX);
    assert_eq!(demand.pin16, 1);
}

#[test]
fn absurd_specs_still_evaluate() {
    let mut build = reference_build();
    if let Some(gpu) = build.gpu.as_mut() {
        gpu.specs.power_connectors = vec!["4294967295x 16-pin".to_string(), "4294967295x 8-pin".to_string()];
    }
    if let Some(case) = build.case.as_mut() {
        case.specs.fan_count = u32::MAX;
        case.specs.drive_bay_clearance_loss_mm = Some(u32::MAX);
    }
    build.storage.push(hdd("hdd-a", u32::MAX));
    build.storage.push(hdd("hdd-b", u32::MAX));

    let result = rigsmith_core::check_compatibility(&build, &Default::default());
    assert!(!result.is_compatible);
    assert!(result.find("gpuPowerConnectors").is_some());
    assert!(result.find("driveBayClearance").is_some());
}
