//! Core data model for PC components, builds, and compatibility issues.
//!
//! Every category is a `Part<S>` carrying a category-specific spec record.
//! The closed `Component` union ties the eight categories together so rules
//! and planners can match exhaustively instead of poking at untyped maps.

mod issue;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use issue::{
    CompatibilityResult, Evidence, Issue, IssueCategory, Measurement, Severity,
};

/// Contract violations raised while assembling model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// A single-valued slot was offered a second component.
    #[error("Build already has a {0} selected; only storage accepts multiple parts")]
    DuplicateCategory(ComponentCategory),
}

/// The eight component categories a build is assembled from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Cpu,
    Gpu,
    Motherboard,
    Ram,
    Storage,
    Psu,
    Cooler,
    Case,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 8] = [
        ComponentCategory::Cpu,
        ComponentCategory::Gpu,
        ComponentCategory::Motherboard,
        ComponentCategory::Ram,
        ComponentCategory::Storage,
        ComponentCategory::Psu,
        ComponentCategory::Cooler,
        ComponentCategory::Case,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentCategory::Cpu => "cpu",
            ComponentCategory::Gpu => "gpu",
            ComponentCategory::Motherboard => "motherboard",
            ComponentCategory::Ram => "ram",
            ComponentCategory::Storage => "storage",
            ComponentCategory::Psu => "psu",
            ComponentCategory::Cooler => "cooler",
            ComponentCategory::Case => "case",
        }
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// DDR generation of a memory kit or memory controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemoryType {
    Ddr3,
    Ddr4,
    Ddr5,
}

impl MemoryType {
    /// Fastest speed that still pays off for games on this generation.
    pub fn gaming_sweet_spot_mhz(self) -> u32 {
        match self {
            MemoryType::Ddr3 => 1866,
            MemoryType::Ddr4 => 3600,
            MemoryType::Ddr5 => 6000,
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryType::Ddr3 => f.write_str("DDR3"),
            MemoryType::Ddr4 => f.write_str("DDR4"),
            MemoryType::Ddr5 => f.write_str("DDR5"),
        }
    }
}

/// Motherboard form factors, ordered smallest to largest.
///
/// A case supporting a given form factor also accepts every smaller one, so
/// containment is a plain `>=` comparison.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum FormFactor {
    #[serde(rename = "Mini-ITX", alias = "mini-itx", alias = "mini_itx")]
    MiniItx,
    #[serde(rename = "Micro-ATX", alias = "micro-atx", alias = "micro_atx", alias = "mATX")]
    MicroAtx,
    #[serde(rename = "ATX", alias = "atx")]
    Atx,
    #[serde(rename = "E-ATX", alias = "e-atx", alias = "e_atx")]
    EAtx,
}

impl FormFactor {
    /// True when a case rated for `self` can hold a `board` form factor.
    pub fn contains(self, board: FormFactor) -> bool {
        self >= board
    }
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormFactor::MiniItx => f.write_str("Mini-ITX"),
            FormFactor::MicroAtx => f.write_str("Micro-ATX"),
            FormFactor::Atx => f.write_str("ATX"),
            FormFactor::EAtx => f.write_str("E-ATX"),
        }
    }
}

/// A catalog part: common identity fields plus category-specific specs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part<S> {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
    pub specs: S,
}

impl<S> Part<S> {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        manufacturer: impl Into<String>,
        specs: S,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            manufacturer: manufacturer.into(),
            price_usd: None,
            specs,
        }
    }

    /// Builder-style helper to attach a list price.
    pub fn with_price(mut self, price_usd: f64) -> Self {
        self.price_usd = Some(price_usd);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSpecs {
    pub socket: String,
    pub cores: u32,
    pub threads: u32,
    pub tdp_w: u32,
    /// Memory generations the integrated controller accepts.
    #[serde(default)]
    pub memory_types: Vec<MemoryType>,
    /// Vendor-agnostic performance bucket, 1-10.
    pub tier: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_speed_mhz: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_ecc: Option<bool>,
    #[serde(default)]
    pub integrated_graphics: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuSpecs {
    /// Vendor-agnostic performance bucket, 1-10.
    pub tier: u8,
    pub tdp_w: u32,
    /// Transient peak draw, when the vendor publishes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_power_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness_mm: Option<u32>,
    /// Free-form connector strings, e.g. `"2x 8-pin"` or `"1x 16-pin (12VHPWR)"`.
    #[serde(default)]
    pub power_connectors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_gb: Option<u32>,
}

impl GpuSpecs {
    pub fn peak_power_w(&self) -> u32 {
        self.peak_power_w.unwrap_or(self.tdp_w)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotherboardSpecs {
    pub socket: String,
    pub chipset: String,
    pub form_factor: FormFactor,
    pub memory_type: MemoryType,
    pub memory_slots: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_memory_gb: Option<u32>,
    #[serde(default)]
    pub m2_slots: u32,
    #[serde(default)]
    pub sata_ports: u32,
    /// 4-pin PWM fan headers, including the CPU_FAN header.
    #[serde(default)]
    pub fan_headers: u32,
    #[serde(default)]
    pub rgb_12v_headers: u32,
    #[serde(default)]
    pub argb_5v_headers: u32,
    /// Internal USB 3.2 Type-E header for front-panel USB-C.
    #[serde(default)]
    pub usb_c_header: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_ecc: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u16>,
    #[serde(default)]
    pub bios_flashback: bool,
}

/// Market segment of a motherboard chipset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChipsetClass {
    Entry,
    Mainstream,
    Premium,
}

impl ChipsetClass {
    /// Classify a chipset name such as `"B650"`, `"Z790"`, or `"A620"`.
    pub fn classify(chipset: &str) -> Self {
        let name = chipset.trim().to_ascii_uppercase();
        if name.starts_with("TRX")
            || name.starts_with('X')
            || name.starts_with('Z')
            || name.starts_with('W')
        {
            ChipsetClass::Premium
        } else if name.starts_with('A') || (name.starts_with('H') && name.ends_with("10")) {
            ChipsetClass::Entry
        } else {
            ChipsetClass::Mainstream
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RamSpecs {
    pub memory_type: MemoryType,
    pub speed_mhz: u32,
    /// Total kit capacity.
    pub capacity_gb: u32,
    pub modules: u32,
    #[serde(default)]
    pub ecc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKind {
    #[serde(rename = "nvme")]
    Nvme,
    #[serde(rename = "sata_ssd")]
    SataSsd,
    #[serde(rename = "hdd_3_5")]
    Hdd35,
    #[serde(rename = "hdd_2_5")]
    Hdd25,
}

impl StorageKind {
    /// Drives that occupy a SATA port.
    pub fn uses_sata(self) -> bool {
        !matches!(self, StorageKind::Nvme)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSpecs {
    pub kind: StorageKind,
    pub capacity_gb: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pcie_gen: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PsuFormFactor {
    Atx,
    Sfx,
    SfxL,
}

impl PsuFormFactor {
    /// Typical unit depth when the listing omits it.
    pub fn default_length_mm(self) -> u32 {
        match self {
            PsuFormFactor::Atx => 160,
            PsuFormFactor::Sfx | PsuFormFactor::SfxL => 130,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtxStandard {
    Atx2,
    Atx3,
}

/// PCIe power plugs a PSU ships with. 6+2 plugs count as 8-pin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PsuConnectors {
    #[serde(default)]
    pub pcie_8pin: u32,
    #[serde(default)]
    pub pcie_6pin: u32,
    #[serde(default)]
    pub pcie_16pin: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsuSpecs {
    pub wattage_w: u32,
    pub form_factor: PsuFormFactor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub atx_standard: Option<AtxStandard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connectors: Option<PsuConnectors>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoolerKind {
    Air,
    Aio,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RgbProtocol {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "rgb_12v")]
    Rgb12v,
    #[serde(rename = "argb_5v")]
    Argb5v,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoolerSpecs {
    pub kind: CoolerKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tdp_rating_w: Option<u32>,
    /// Tower height; air coolers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_mm: Option<u32>,
    /// Radiator length (120/240/280/360); AIOs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiator_mm: Option<u32>,
    /// Radiator plus fan thickness; AIOs only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiator_thickness_mm: Option<u32>,
    #[serde(default)]
    pub fan_count: u32,
    #[serde(default)]
    pub rgb: RgbProtocol,
    /// Supported CPU sockets; empty when the listing does not say.
    #[serde(default)]
    pub sockets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseSpecs {
    /// Largest motherboard form factor the case accepts.
    pub form_factor: FormFactor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gpu_length_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_gpu_thickness_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_cooler_height_mm: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_psu_length_mm: Option<u32>,
    /// Radiator lengths the case can mount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radiator_support: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_radiator_thickness_mm: Option<u32>,
    #[serde(default)]
    pub fan_count: u32,
    #[serde(default)]
    pub front_usb_c: bool,
    /// GPU/PSU clearance lost per installed 3.5" drive, for cases whose
    /// drive cage shares that space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drive_bay_clearance_loss_mm: Option<u32>,
}

pub type Cpu = Part<CpuSpecs>;
pub type Gpu = Part<GpuSpecs>;
pub type Motherboard = Part<MotherboardSpecs>;
pub type Ram = Part<RamSpecs>;
pub type Storage = Part<StorageSpecs>;
pub type Psu = Part<PsuSpecs>;
pub type Cooler = Part<CoolerSpecs>;
pub type Case = Part<CaseSpecs>;

/// Closed union over the eight component categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "lowercase")]
pub enum Component {
    Cpu(Cpu),
    Gpu(Gpu),
    Motherboard(Motherboard),
    Ram(Ram),
    Storage(Storage),
    Psu(Psu),
    Cooler(Cooler),
    Case(Case),
}

macro_rules! with_part {
    ($component:expr, $part:ident => $body:expr) => {
        match $component {
            Component::Cpu($part) => $body,
            Component::Gpu($part) => $body,
            Component::Motherboard($part) => $body,
            Component::Ram($part) => $body,
            Component::Storage($part) => $body,
            Component::Psu($part) => $body,
            Component::Cooler($part) => $body,
            Component::Case($part) => $body,
        }
    };
}

impl Component {
    pub fn category(&self) -> ComponentCategory {
        match self {
            Component::Cpu(_) => ComponentCategory::Cpu,
            Component::Gpu(_) => ComponentCategory::Gpu,
            Component::Motherboard(_) => ComponentCategory::Motherboard,
            Component::Ram(_) => ComponentCategory::Ram,
            Component::Storage(_) => ComponentCategory::Storage,
            Component::Psu(_) => ComponentCategory::Psu,
            Component::Cooler(_) => ComponentCategory::Cooler,
            Component::Case(_) => ComponentCategory::Case,
        }
    }

    pub fn id(&self) -> &str {
        with_part!(self, p => p.id.as_str())
    }

    pub fn name(&self) -> &str {
        with_part!(self, p => p.name.as_str())
    }

    pub fn price_usd(&self) -> Option<f64> {
        with_part!(self, p => p.price_usd)
    }

    /// 1-10 bucket used to decide whether a part is an upgrade over another
    /// in the same category.
    ///
    /// CPUs and GPUs carry an explicit tier; the remaining categories derive
    /// one from their headline spec. Cases have no meaningful ordering.
    pub fn upgrade_tier(&self) -> Option<u8> {
        match self {
            Component::Cpu(p) => Some(p.specs.tier),
            Component::Gpu(p) => Some(p.specs.tier),
            Component::Motherboard(p) => Some(match ChipsetClass::classify(&p.specs.chipset) {
                ChipsetClass::Entry => 3,
                ChipsetClass::Mainstream => 5,
                ChipsetClass::Premium => 8,
            }),
            Component::Ram(p) => {
                let base: u8 = match p.specs.capacity_gb {
                    0..=8 => 2,
                    9..=16 => 4,
                    17..=32 => 6,
                    33..=64 => 8,
                    _ => 10,
                };
                let fast = p.specs.speed_mhz >= p.specs.memory_type.gaming_sweet_spot_mhz();
                Some((base + u8::from(fast)).min(10))
            }
            Component::Storage(p) => {
                let base: u8 = match (p.specs.kind, p.specs.pcie_gen) {
                    (StorageKind::Nvme, Some(pcie_gen)) if pcie_gen >= 5 => 8,
                    (StorageKind::Nvme, Some(4)) => 6,
                    (StorageKind::Nvme, _) => 5,
                    (StorageKind::SataSsd, _) => 4,
                    (StorageKind::Hdd25, _) | (StorageKind::Hdd35, _) => 2,
                };
                Some((base + u8::from(p.specs.capacity_gb >= 2000)).min(10))
            }
            Component::Psu(p) => Some((p.specs.wattage_w / 100).clamp(1, 10) as u8),
            Component::Cooler(p) => {
                p.specs.tdp_rating_w.map(|rating| (rating / 30).clamp(1, 10) as u8)
            }
            Component::Case(_) => None,
        }
    }

    pub fn to_ref(&self) -> PartRef {
        PartRef {
            category: self.category(),
            id: self.id().to_string(),
            name: self.name().to_string(),
            price_usd: self.price_usd(),
        }
    }
}

/// Lightweight pointer to a part, used in plans and reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartRef {
    pub category: ComponentCategory,
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<f64>,
}

/// The selected build: at most one part per category, any number of drives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<Cpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu: Option<Gpu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motherboard: Option<Motherboard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram: Option<Ram>,
    #[serde(default)]
    pub storage: Vec<Storage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psu: Option<Psu>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler: Option<Cooler>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case: Option<Case>,
}

impl BuildInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a build from a flat list of tagged components.
    pub fn from_components(
        components: impl IntoIterator<Item = Component>,
    ) -> Result<Self, ModelError> {
        let mut build = Self::default();
        for component in components {
            let category = component.category();
            if category != ComponentCategory::Storage && build.has(category) {
                return Err(ModelError::DuplicateCategory(category));
            }
            build = build.with_component(component);
        }
        Ok(build)
    }

    /// Return a copy with `component` placed in its slot.
    ///
    /// Single-valued slots are replaced; storage drives are appended.
    pub fn with_component(&self, component: Component) -> Self {
        let mut next = self.clone();
        match component {
            Component::Cpu(p) => next.cpu = Some(p),
            Component::Gpu(p) => next.gpu = Some(p),
            Component::Motherboard(p) => next.motherboard = Some(p),
            Component::Ram(p) => next.ram = Some(p),
            Component::Storage(p) => next.storage.push(p),
            Component::Psu(p) => next.psu = Some(p),
            Component::Cooler(p) => next.cooler = Some(p),
            Component::Case(p) => next.case = Some(p),
        }
        next
    }

    /// Return a copy where the part `replaced_id` is swapped for `component`.
    ///
    /// For single-valued categories this is the same as `with_component`.
    /// For storage the drive with the matching id is replaced in place, or
    /// the new drive is appended when no drive matches.
    pub fn replacing(&self, replaced_id: &str, component: Component) -> Self {
        match component {
            Component::Storage(drive) => {
                let mut next = self.clone();
                match next.storage.iter_mut().find(|d| d.id == replaced_id) {
                    Some(slot) => *slot = drive,
                    None => next.storage.push(drive),
                }
                next
            }
            other => self.with_component(other),
        }
    }

    /// Return a copy with the category's slot cleared.
    pub fn without(&self, category: ComponentCategory) -> Self {
        let mut next = self.clone();
        match category {
            ComponentCategory::Cpu => next.cpu = None,
            ComponentCategory::Gpu => next.gpu = None,
            ComponentCategory::Motherboard => next.motherboard = None,
            ComponentCategory::Ram => next.ram = None,
            ComponentCategory::Storage => next.storage.clear(),
            ComponentCategory::Psu => next.psu = None,
            ComponentCategory::Cooler => next.cooler = None,
            ComponentCategory::Case => next.case = None,
        }
        next
    }

    pub fn has(&self, category: ComponentCategory) -> bool {
        match category {
            ComponentCategory::Cpu => self.cpu.is_some(),
            ComponentCategory::Gpu => self.gpu.is_some(),
            ComponentCategory::Motherboard => self.motherboard.is_some(),
            ComponentCategory::Ram => self.ram.is_some(),
            ComponentCategory::Storage => !self.storage.is_empty(),
            ComponentCategory::Psu => self.psu.is_some(),
            ComponentCategory::Cooler => self.cooler.is_some(),
            ComponentCategory::Case => self.case.is_some(),
        }
    }

    /// Every selected part of `category`, cloned into the union type.
    pub fn selected(&self, category: ComponentCategory) -> Vec<Component> {
        match category {
            ComponentCategory::Cpu => self.cpu.iter().cloned().map(Component::Cpu).collect(),
            ComponentCategory::Gpu => self.gpu.iter().cloned().map(Component::Gpu).collect(),
            ComponentCategory::Motherboard => {
                self.motherboard.iter().cloned().map(Component::Motherboard).collect()
            }
            ComponentCategory::Ram => self.ram.iter().cloned().map(Component::Ram).collect(),
            ComponentCategory::Storage => {
                self.storage.iter().cloned().map(Component::Storage).collect()
            }
            ComponentCategory::Psu => self.psu.iter().cloned().map(Component::Psu).collect(),
            ComponentCategory::Cooler => {
                self.cooler.iter().cloned().map(Component::Cooler).collect()
            }
            ComponentCategory::Case => self.case.iter().cloned().map(Component::Case).collect(),
        }
    }

    /// Every selected part in category order.
    pub fn components(&self) -> Vec<Component> {
        ComponentCategory::ALL.iter().flat_map(|c| self.selected(*c)).collect()
    }

    pub fn is_empty(&self) -> bool {
        ComponentCategory::ALL.iter().all(|c| !self.has(*c))
    }

    pub fn nvme_count(&self) -> u32 {
        self.storage.iter().filter(|d| d.specs.kind == StorageKind::Nvme).count() as u32
    }

    pub fn sata_drive_count(&self) -> u32 {
        self.storage.iter().filter(|d| d.specs.kind.uses_sata()).count() as u32
    }

    pub fn hdd_3_5_count(&self) -> u32 {
        self.storage.iter().filter(|d| d.specs.kind == StorageKind::Hdd35).count() as u32
    }

    pub fn total_storage_gb(&self) -> u32 {
        self.storage.iter().map(|d| d.specs.capacity_gb).fold(0u32, u32::saturating_add)
    }
}
