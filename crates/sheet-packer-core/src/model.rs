use serde::{Deserialize, Serialize};

/// One line item of a print job: a rectangular design ordered in some quantity.
///
/// Dimensions are in the same linear unit as the sheet width. The packer treats
/// `name` as opaque; it exists for the quoting/UI layers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DesignSpec {
    pub id: String,
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub quantity: u32,
}

impl DesignSpec {
    pub fn new(id: impl Into<String>, name: impl Into<String>, width: f64, height: f64, quantity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            width,
            height,
            quantity,
        }
    }

    /// Caller-side validation. The packer itself never validates its inputs and
    /// its behavior is unspecified for non-positive dimensions.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SheetPackerError;
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(SheetPackerError::InvalidSpec {
                id: self.id.clone(),
                reason: format!("width must be a positive finite number, got {}", self.width),
            });
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(SheetPackerError::InvalidSpec {
                id: self.id.clone(),
                reason: format!("height must be a positive finite number, got {}", self.height),
            });
        }
        Ok(())
    }
}

/// A successfully placed unit. `x,y` is the lower-left corner; `width`/`height`
/// are the effective dimensions after the rotation decision.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlacedUnit {
    /// Id of the `DesignSpec` this unit was expanded from.
    pub original_id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// True if the unit was rotated 90° when placed.
    pub rotated: bool,
}

impl PlacedUnit {
    /// Exclusive top edge (`y + height`) of this placement.
    pub fn top(&self) -> f64 {
        self.y + self.height
    }
    /// Exclusive right edge (`x + width`) of this placement.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Aggregate result of one packing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PackingResult {
    /// Placed units, in placement order (not input order).
    pub placed: Vec<PlacedUnit>,
    /// Consumed sheet length: the maximum top edge over all placed units,
    /// or 0 if nothing was placed. Spacing reserved above a unit is not billed.
    pub total_length: f64,
    /// Sum of effective `width * height` over placed units, spacing excluded.
    pub total_area_used: f64,
    /// Ids of specs that were dropped at expansion or skipped during placement,
    /// deduplicated, in first-drop order. Empty on a fully conserved run.
    pub unplaced: Vec<String>,
}

impl PackingResult {
    pub fn empty() -> Self {
        Self {
            placed: Vec::new(),
            total_length: 0.0,
            total_area_used: 0.0,
            unplaced: Vec::new(),
        }
    }

    /// Computes layout statistics for this result on a sheet of `sheet_width`.
    pub fn stats(&self, sheet_width: f64) -> LayoutStats {
        let num_rotated = self.placed.iter().filter(|p| p.rotated).count();
        let consumed_area = sheet_width * self.total_length;
        let occupancy = if consumed_area > 0.0 {
            self.total_area_used / consumed_area
        } else {
            0.0
        };
        LayoutStats {
            num_placed: self.placed.len(),
            num_rotated,
            num_unplaced: self.unplaced.len(),
            total_length: self.total_length,
            total_area_used: self.total_area_used,
            occupancy,
        }
    }
}

/// Statistics about layout efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of units placed.
    pub num_placed: usize,
    /// Number of placed units that were rotated.
    pub num_rotated: usize,
    /// Number of distinct specs that contributed fewer units than ordered.
    pub num_unplaced: usize,
    /// Consumed sheet length.
    pub total_length: f64,
    /// Area covered by placed units, spacing excluded.
    pub total_area_used: f64,
    /// total_area_used / (sheet_width * total_length), 0.0 when nothing placed.
    /// Higher is better (less wasted media).
    pub occupancy: f64,
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Placed: {}, Rotated: {}, Unplaced specs: {}, Length: {:.2}, Used Area: {:.2}, Occupancy: {:.2}%",
            self.num_placed,
            self.num_rotated,
            self.num_unplaced,
            self.total_length,
            self.total_area_used,
            self.occupancy * 100.0,
        )
    }
}
