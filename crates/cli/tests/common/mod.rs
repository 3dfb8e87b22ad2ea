#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Compatible AM5 build; only raises the "excellent cooling" note.
pub const GOOD_BUILD: &str = r#"{
  "cpu": {"id": "cpu-am5-6", "name": "Ryzen-class 6 core", "manufacturer": "Acme", "price_usd": 200,
          "specs": {"socket": "AM5", "cores": 6, "threads": 12, "tdp_w": 105, "memory_types": ["DDR5"],
                    "tier": 6, "max_memory_speed_mhz": 5200, "integrated_graphics": true, "release_year": 2022}},
  "gpu": {"id": "gpu-7", "name": "Tier 7 card", "manufacturer": "Acme", "price_usd": 550,
          "specs": {"tier": 7, "tdp_w": 200, "length_mm": 300, "thickness_mm": 50,
                    "power_connectors": ["1x 8-pin"], "vram_gb": 12}},
  "motherboard": {"id": "mb-b650", "name": "B650 board", "manufacturer": "Acme", "price_usd": 180,
          "specs": {"socket": "AM5", "chipset": "B650", "form_factor": "ATX", "memory_type": "DDR5",
                    "memory_slots": 4, "max_memory_gb": 128, "m2_slots": 2, "sata_ports": 4,
                    "fan_headers": 6, "rgb_12v_headers": 1, "argb_5v_headers": 1,
                    "usb_c_header": true, "release_year": 2022}},
  "ram": {"id": "ram-32", "name": "32GB DDR5", "manufacturer": "Acme", "price_usd": 100,
          "specs": {"memory_type": "DDR5", "speed_mhz": 5200, "capacity_gb": 32, "modules": 2}},
  "storage": [{"id": "ssd-1tb", "name": "1TB NVMe", "manufacturer": "Acme", "price_usd": 80,
          "specs": {"kind": "nvme", "capacity_gb": 1000, "pcie_gen": 4}}],
  "psu": {"id": "psu-750", "name": "750W", "manufacturer": "Acme", "price_usd": 100,
          "specs": {"wattage_w": 750, "form_factor": "atx", "length_mm": 160, "atx_standard": "atx3",
                    "connectors": {"pcie_8pin": 2, "pcie_16pin": 1}}},
  "cooler": {"id": "cooler-air", "name": "Tower cooler", "manufacturer": "Acme", "price_usd": 40,
          "specs": {"kind": "air", "tdp_rating_w": 200, "height_mm": 155, "fan_count": 1,
                    "rgb": "none", "sockets": ["AM5"]}},
  "case": {"id": "case-mid", "name": "Mid tower", "manufacturer": "Acme", "price_usd": 90,
          "specs": {"form_factor": "ATX", "max_gpu_length_mm": 360, "max_gpu_thickness_mm": 70,
                    "max_cooler_height_mm": 165, "max_psu_length_mm": 200,
                    "radiator_support": [240, 280, 360], "max_radiator_thickness_mm": 65,
                    "fan_count": 3, "front_usb_c": true}}
}"#;

/// Catalog with a correct AM5 board and a faster graphics card.
pub const CATALOG: &str = r#"{
  "motherboards": [
    {"id": "mb-b650", "name": "B650 board", "manufacturer": "Acme", "price_usd": 180,
     "specs": {"socket": "AM5", "chipset": "B650", "form_factor": "ATX", "memory_type": "DDR5",
               "memory_slots": 4, "max_memory_gb": 128, "m2_slots": 2, "sata_ports": 4, "fan_headers": 6,
               "rgb_12v_headers": 1, "argb_5v_headers": 1, "usb_c_header": true, "release_year": 2022}}
  ],
  "gpus": [
    {"id": "gpu-9", "name": "Tier 9 card", "manufacturer": "Acme", "price_usd": 900,
     "specs": {"tier": 9, "tdp_w": 300, "length_mm": 330, "thickness_mm": 60, "power_connectors": ["2x 8-pin"]}}
  ]
}"#;

/// The good build with an LGA1700 board swapped in.
pub fn mismatched_build() -> String {
    GOOD_BUILD.replacen(r#""socket": "AM5", "chipset": "B650""#, r#""socket": "LGA1700", "chipset": "Z790""#, 1)
        .replacen(r#""id": "mb-b650""#, r#""id": "mb-z790""#, 1)
}

pub fn write(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write fixture");
    path
}
