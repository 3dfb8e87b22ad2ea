use crate::model::{BuildInput, CompatibilityResult, FormFactor};
use crate::power::{estimate_system_draw, MIN_HEADROOM_RATIO};
use crate::scoring::{Score, Tally, USABILITY_WEIGHT};

const USABILITY_BASE: i32 = 80;
const COMFORTABLE_HEADROOM: f64 = 1.33;
const GENEROUS_HEADROOM: f64 = 1.40;
const SMALL_FORM_FACTOR_HEAT_W: u32 = 400;

pub(super) fn score(build: &BuildInput, compat: &CompatibilityResult) -> Score {
    let mut tally = Tally::new(USABILITY_BASE, "day-to-day living with the build");

    if let Some(psu) = &build.psu {
        let power = estimate_system_draw(build);
        if power.total_w > 0 {
            let ratio = power.headroom_ratio(psu.specs.wattage_w);
            if ratio < MIN_HEADROOM_RATIO {
                tally.add("psu_headroom", -15, format!("only {ratio:.2}x PSU headroom"));
            }
            if ratio < COMFORTABLE_HEADROOM {
                tally.add("psu_noise", -10, "PSU will run near its limit and loud under load");
            } else if ratio >= GENEROUS_HEADROOM {
                tally.add("psu_headroom", 5, format!("{ratio:.2}x PSU headroom"));
            }
        }
    }

    if let Some(board) = &build.motherboard {
        let used = build.ram.as_ref().map_or(0, |r| r.specs.modules);
        let free_ram = board.specs.memory_slots.saturating_sub(used);
        if free_ram >= 2 {
            tally.add("ram_slots", 10, format!("{free_ram} free memory slots"));
        } else if free_ram == 1 {
            tally.add("ram_slots", 5, "1 free memory slot");
        }
        if board.specs.m2_slots > build.nvme_count() {
            tally.add("m2_slots", 5, "a free M.2 slot for more storage");
        }
    }

    if let Some(case) = &build.case {
        let heat = build
            .cpu
            .as_ref()
            .map_or(0, |c| c.specs.tdp_w)
            .saturating_add(build.gpu.as_ref().map_or(0, |g| g.specs.tdp_w));
        if case.specs.form_factor == FormFactor::MiniItx && heat > SMALL_FORM_FACTOR_HEAT_W {
            tally.add("sff_heat", -10, format!("{heat} W of CPU and GPU heat in a Mini-ITX case"));
        }
    }

    let value = tally.value();
    let summary = match value {
        90..=100 => "Easy to live with and expand",
        70..=89 => "Comfortable",
        _ => "Expect compromises on noise or expansion",
    };
    tally.finish(compat.confidence, USABILITY_WEIGHT, summary)
}
