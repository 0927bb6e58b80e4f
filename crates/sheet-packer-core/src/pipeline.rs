use crate::config::SheetConfig;
use crate::model::{DesignSpec, PackingResult};
use crate::packer::skyline::SkylinePacker;
use crate::packer::TOLERANCE;
use tracing::{debug, instrument};

/// One physical copy expanded from a spec's quantity; the atomic thing the
/// packer places. Lives only for the duration of a `pack` call.
struct Unit<'a> {
    original_id: &'a str,
    width: f64,
    height: f64,
}

impl Unit<'_> {
    fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

#[instrument(skip_all)]
/// Packs every unit of `items` onto a sheet of `config.sheet_width`, returning
/// placements, consumed length, and used area.
///
/// Notes:
/// - Pure and deterministic: identical inputs (including order) yield an
///   identical `PackingResult`.
/// - A spec that exceeds the sheet width in both orientations is dropped
///   without error; its id is reported in `PackingResult::unplaced`.
/// - Inputs are not validated here; see `SheetConfig::validate` and
///   `DesignSpec::validate` for the caller-side checks.
pub fn pack(items: &[DesignSpec], config: &SheetConfig) -> PackingResult {
    let mut unplaced: Vec<String> = Vec::new();
    let mut units: Vec<Unit> = Vec::new();
    for spec in items {
        if spec.width > config.sheet_width + TOLERANCE
            && spec.height > config.sheet_width + TOLERANCE
        {
            debug!(id = %spec.id, spec.width, spec.height, "spec exceeds sheet width in both orientations, dropped");
            record_unplaced(&mut unplaced, &spec.id);
            continue;
        }
        for _ in 0..spec.quantity {
            units.push(Unit {
                original_id: &spec.id,
                width: spec.width,
                height: spec.height,
            });
        }
    }
    if units.is_empty() {
        return PackingResult {
            unplaced,
            ..PackingResult::empty()
        };
    }

    // Largest footprint first; stable so ties keep expansion order.
    units.sort_by(|a, b| b.max_side().total_cmp(&a.max_side()));

    let mut packer = SkylinePacker::new(config.sheet_width, config.spacing);
    let mut placed = Vec::with_capacity(units.len());
    let mut total_area_used = 0.0f64;
    for unit in &units {
        match packer.place(unit.original_id, unit.width, unit.height) {
            Some(p) => {
                total_area_used += p.width * p.height;
                placed.push(p);
            }
            None => {
                debug!(id = %unit.original_id, "no feasible placement for unit, skipped");
                record_unplaced(&mut unplaced, unit.original_id);
            }
        }
    }

    let total_length = placed.iter().map(|p| p.top()).fold(0.0f64, f64::max);
    PackingResult {
        placed,
        total_length,
        total_area_used,
        unplaced,
    }
}

fn record_unplaced(unplaced: &mut Vec<String>, id: &str) {
    if !unplaced.iter().any(|u| u == id) {
        unplaced.push(id.to_string());
    }
}
