use serde::{Deserialize, Serialize};

/// Sheet parameters for a packing run.
///
/// The sheet is a fixed-width, unbounded-length strip of media. `spacing` is
/// reserved to the right of and above every placed unit so adjacent cuts do not
/// touch; it is not billed into the reported length or area.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SheetConfig {
    /// Usable media width.
    pub sheet_width: f64,
    /// Gap kept between placed units.
    #[serde(default)]
    pub spacing: f64,
}

impl SheetConfig {
    pub fn new(sheet_width: f64) -> Self {
        Self {
            sheet_width,
            spacing: 0.0,
        }
    }

    /// Create a fluent builder for `SheetConfig`.
    pub fn builder(sheet_width: f64) -> SheetConfigBuilder {
        SheetConfigBuilder {
            cfg: Self::new(sheet_width),
        }
    }

    /// Validates the sheet parameters.
    ///
    /// The packer itself does not validate; callers are expected to run this
    /// before invoking `pack` when inputs come from the outside world.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::SheetPackerError;
        if !(self.sheet_width.is_finite() && self.sheet_width > 0.0) {
            return Err(SheetPackerError::InvalidSheetWidth(self.sheet_width));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(SheetPackerError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

/// Builder for `SheetConfig` for ergonomic construction.
#[derive(Debug, Clone)]
pub struct SheetConfigBuilder {
    cfg: SheetConfig,
}

impl SheetConfigBuilder {
    pub fn sheet_width(mut self, v: f64) -> Self {
        self.cfg.sheet_width = v;
        self
    }
    pub fn spacing(mut self, v: f64) -> Self {
        self.cfg.spacing = v;
        self
    }
    pub fn build(self) -> SheetConfig {
        self.cfg
    }
}
