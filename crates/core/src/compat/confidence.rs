use crate::compat::CompatOptions;
use crate::model::{BuildInput, CoolerKind};

const GPU_LENGTH_MISSING: i32 = 10;
const CASE_GPU_LENGTH_MISSING: i32 = 10;
const GPU_THICKNESS_MISSING: i32 = 5;
const CASE_GPU_THICKNESS_MISSING: i32 = 5;
const COOLER_HEIGHT_MISSING: i32 = 10;
const CASE_COOLER_HEIGHT_MISSING: i32 = 10;
const RADIATOR_SIZE_MISSING: i32 = 10;
const CASE_RADIATOR_SUPPORT_MISSING: i32 = 10;
const RADIATOR_THICKNESS_MISSING: i32 = 5;
const CASE_RADIATOR_THICKNESS_MISSING: i32 = 5;
const CASE_PSU_LENGTH_MISSING: i32 = 5;
const PSU_CONNECTORS_MISSING: i32 = 10;
const GPU_CONNECTORS_MISSING: i32 = 5;
const COOLER_RATING_MISSING: i32 = 10;

pub const MANUAL_OVERRIDE_PENALTY: u32 = 5;
pub const MANUAL_OVERRIDE_CAP: u32 = 20;

/// How much of the data the rules need is actually present, 0-100.
///
/// A penalty only applies when the parts on both sides of a check are
/// selected, so an incomplete build is not punished for slots the user has
/// not filled yet. Dropping a field can only lower the result.
pub fn estimate_confidence(build: &BuildInput, options: &CompatOptions) -> u8 {
    let mut penalty = 0i32;
    let mut missing = |absent: bool, points: i32| {
        if absent {
            penalty += points;
        }
    };

    if let (Some(gpu), Some(case)) = (&build.gpu, &build.case) {
        missing(gpu.specs.length_mm.is_none(), GPU_LENGTH_MISSING);
        missing(case.specs.max_gpu_length_mm.is_none(), CASE_GPU_LENGTH_MISSING);
        missing(gpu.specs.thickness_mm.is_none(), GPU_THICKNESS_MISSING);
        missing(case.specs.max_gpu_thickness_mm.is_none(), CASE_GPU_THICKNESS_MISSING);
    }

    if let (Some(cooler), Some(case)) = (&build.cooler, &build.case) {
        match cooler.specs.kind {
            CoolerKind::Air => {
                missing(cooler.specs.height_mm.is_none(), COOLER_HEIGHT_MISSING);
                missing(case.specs.max_cooler_height_mm.is_none(), CASE_COOLER_HEIGHT_MISSING);
            }
            CoolerKind::Aio => {
                missing(cooler.specs.radiator_mm.is_none(), RADIATOR_SIZE_MISSING);
                missing(case.specs.radiator_support.is_none(), CASE_RADIATOR_SUPPORT_MISSING);
                missing(
                    cooler.specs.radiator_thickness_mm.is_none(),
                    RADIATOR_THICKNESS_MISSING,
                );
                missing(
                    case.specs.max_radiator_thickness_mm.is_none(),
                    CASE_RADIATOR_THICKNESS_MISSING,
                );
            }
        }
    }

    if let (Some(_), Some(case)) = (&build.psu, &build.case) {
        missing(case.specs.max_psu_length_mm.is_none(), CASE_PSU_LENGTH_MISSING);
    }

    if let (Some(gpu), Some(psu)) = (&build.gpu, &build.psu) {
        missing(
            options.psu_connectors.is_none() && psu.specs.connectors.is_none(),
            PSU_CONNECTORS_MISSING,
        );
        missing(gpu.specs.power_connectors.is_empty(), GPU_CONNECTORS_MISSING);
    }

    if let (Some(cooler), Some(_)) = (&build.cooler, &build.cpu) {
        missing(cooler.specs.tdp_rating_w.is_none(), COOLER_RATING_MISSING);
    }

    let overrides =
        options.manual_overrides.saturating_mul(MANUAL_OVERRIDE_PENALTY).min(MANUAL_OVERRIDE_CAP);
    penalty += overrides as i32;

    (100 - penalty).clamp(0, 100) as u8
}
