#![allow(dead_code)]

use rigsmith_core::model::*;

pub fn cpu(id: &str, socket: &str, tier: u8, tdp_w: u32) -> Cpu {
    Part::new(
        id,
        format!("CPU {id}"),
        "Acme",
        CpuSpecs {
            socket: socket.to_string(),
            cores: 6,
            threads: 12,
            tdp_w,
            memory_types: vec![MemoryType::Ddr5],
            tier,
            max_memory_speed_mhz: Some(5200),
            supports_ecc: None,
            integrated_graphics: true,
            release_year: Some(2022),
        },
    )
}

pub fn gpu(id: &str, tier: u8, tdp_w: u32, length_mm: u32) -> Gpu {
    Part::new(
        id,
        format!("GPU {id}"),
        "Acme",
        GpuSpecs {
            tier,
            tdp_w,
            peak_power_w: None,
            length_mm: Some(length_mm),
            thickness_mm: Some(50),
            power_connectors: vec!["1x 8-pin".to_string()],
            vram_gb: Some(12),
        },
    )
}

pub fn board(id: &str, socket: &str, chipset: &str, memory_type: MemoryType) -> Motherboard {
    Part::new(
        id,
        format!("Board {id}"),
        "Acme",
        MotherboardSpecs {
            socket: socket.to_string(),
            chipset: chipset.to_string(),
            form_factor: FormFactor::Atx,
            memory_type,
            memory_slots: 4,
            max_memory_gb: Some(128),
            m2_slots: 2,
            sata_ports: 4,
            fan_headers: 6,
            rgb_12v_headers: 1,
            argb_5v_headers: 1,
            usb_c_header: true,
            supports_ecc: None,
            release_year: Some(2022),
            bios_flashback: false,
        },
    )
}

pub fn ram(id: &str, memory_type: MemoryType, speed_mhz: u32, capacity_gb: u32) -> Ram {
    Part::new(
        id,
        format!("Memory {id}"),
        "Acme",
        RamSpecs { memory_type, speed_mhz, capacity_gb, modules: 2, ecc: false },
    )
}

pub fn nvme(id: &str, capacity_gb: u32, pcie_gen: u8) -> Storage {
    Part::new(
        id,
        format!("SSD {id}"),
        "Acme",
        StorageSpecs { kind: StorageKind::Nvme, capacity_gb, pcie_gen: Some(pcie_gen) },
    )
}

pub fn hdd(id: &str, capacity_gb: u32) -> Storage {
    Part::new(
        id,
        format!("HDD {id}"),
        "Acme",
        StorageSpecs { kind: StorageKind::Hdd35, capacity_gb, pcie_gen: None },
    )
}

pub fn psu(id: &str, wattage_w: u32) -> Psu {
    Part::new(
        id,
        format!("PSU {id}"),
        "Acme",
        PsuSpecs {
            wattage_w,
            form_factor: PsuFormFactor::Atx,
            length_mm: Some(160),
            atx_standard: Some(AtxStandard::Atx3),
            connectors: Some(PsuConnectors { pcie_8pin: 2, pcie_6pin: 0, pcie_16pin: 1 }),
        },
    )
}

pub fn air_cooler(id: &str, tdp_rating_w: u32, height_mm: u32) -> Cooler {
    Part::new(
        id,
        format!("Cooler {id}"),
        "Acme",
        CoolerSpecs {
            kind: CoolerKind::Air,
            tdp_rating_w: Some(tdp_rating_w),
            height_mm: Some(height_mm),
            radiator_mm: None,
            radiator_thickness_mm: None,
            fan_count: 1,
            rgb: RgbProtocol::None,
            sockets: vec!["AM5".to_string()],
        },
    )
}

pub fn aio_cooler(id: &str, radiator_mm: u32, radiator_thickness_mm: u32) -> Cooler {
    Part::new(
        id,
        format!("AIO {id}"),
        "Acme",
        CoolerSpecs {
            kind: CoolerKind::Aio,
            tdp_rating_w: Some(250),
            height_mm: None,
            radiator_mm: Some(radiator_mm),
            radiator_thickness_mm: Some(radiator_thickness_mm),
            fan_count: 3,
            rgb: RgbProtocol::None,
            sockets: Vec::new(),
        },
    )
}

pub fn case(id: &str, form_factor: FormFactor, max_gpu_length_mm: u32) -> Case {
    Part::new(
        id,
        format!("Case {id}"),
        "Acme",
        CaseSpecs {
            form_factor,
            max_gpu_length_mm: Some(max_gpu_length_mm),
            max_gpu_thickness_mm: Some(70),
            max_cooler_height_mm: Some(165),
            max_psu_length_mm: Some(200),
            radiator_support: Some(vec![240, 280, 360]),
            max_radiator_thickness_mm: Some(65),
            fan_count: 3,
            front_usb_c: true,
            drive_bay_clearance_loss_mm: None,
        },
    )
}

/// A complete, priced, compatible build.
///
/// Estimated draw is 380 W (CPU 105 + GPU 200 + platform 50 + memory 6 +
/// NVMe 7 + four fans 12). The only issue it raises is the informational
/// "excellent" cooling note.
pub fn reference_build() -> BuildInput {
    BuildInput {
        cpu: Some(cpu("cpu-am5-6", "AM5", 6, 105).with_price(200.0)),
        gpu: Some(gpu("gpu-7", 7, 200, 300).with_price(550.0)),
        motherboard: Some(board("mb-b650", "AM5", "B650", MemoryType::Ddr5).with_price(180.0)),
        ram: Some(ram("ram-32-ddr5", MemoryType::Ddr5, 5200, 32).with_price(100.0)),
        storage: vec![nvme("ssd-1tb", 1000, 4).with_price(80.0)],
        psu: Some(psu("psu-750", 750).with_price(100.0)),
        cooler: Some(air_cooler("cooler-air", 200, 155).with_price(40.0)),
        case: Some(case("case-mid", FormFactor::Atx, 360).with_price(90.0)),
    }
}

pub fn ids(issues: &[Issue]) -> Vec<&str> {
    issues.iter().map(|i| i.id.as_str()).collect()
}
