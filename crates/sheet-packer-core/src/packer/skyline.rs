use super::TOLERANCE;
use crate::model::PlacedUnit;
use tracing::trace;

/// A contiguous span `[x, x+width)` of the profile, with `y` the height of
/// material already occupying that span.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkylineSegment {
    pub x: f64,
    pub width: f64,
    pub y: f64,
}

/// Greedy bottom-left skyline packer over a fixed-width, unbounded-length sheet.
///
/// The profile is a total partition of `[0, sheet_width)` at every point in the
/// run: segments are kept left-to-right, non-overlapping, and their widths sum
/// to the sheet width (a single full-width segment at `y = 0` before the first
/// placement). Each call owns its own instance; nothing is shared across runs.
pub struct SkylinePacker {
    sheet_width: f64,
    spacing: f64,
    segments: Vec<SkylineSegment>,
}

impl SkylinePacker {
    pub fn new(sheet_width: f64, spacing: f64) -> Self {
        Self {
            sheet_width,
            spacing,
            segments: vec![SkylineSegment {
                x: 0.0,
                width: sheet_width,
                y: 0.0,
            }],
        }
    }

    /// Current profile, left to right.
    pub fn segments(&self) -> &[SkylineSegment] {
        &self.segments
    }

    /// Shelf height for a unit of width `w` starting on segment `start`:
    /// the tallest segment within the footprint, so the unit rests on the
    /// highest obstruction instead of overlapping placed material. `None` if
    /// the skyline ends before `w` is covered.
    fn shelf_at(&self, start: usize, w: f64) -> Option<f64> {
        let mut y = 0.0f64;
        let mut remaining = w;
        for seg in &self.segments[start..] {
            y = y.max(seg.y);
            remaining -= seg.width;
            if remaining <= TOLERANCE {
                return Some(y);
            }
        }
        None
    }

    /// Best start segment for a `w`x`h` footprint: minimal top edge `y + h`,
    /// then (within tolerance of that minimum) minimal `x`. Returns the start
    /// index and shelf height.
    fn find_level(&self, w: f64, h: f64) -> Option<(usize, f64)> {
        if w > self.sheet_width + TOLERANCE {
            return None;
        }
        let mut best: Option<(usize, f64, f64)> = None;
        for i in 0..self.segments.len() {
            let Some(y) = self.shelf_at(i, w) else {
                continue;
            };
            let top = y + h;
            let take = match best {
                None => true,
                Some((bi, _, best_top)) => {
                    top < best_top - TOLERANCE
                        || (top <= best_top + TOLERANCE && self.segments[i].x < self.segments[bi].x)
                }
            };
            if take {
                best = Some((i, y, top));
            }
        }
        best.map(|(i, y, _)| (i, y))
    }

    /// Places one unit and mutates the profile. The natural orientation is
    /// preferred; the rotated one is tried only when the natural width cannot
    /// fit the sheet or no feasible start exists. Returns `None` when neither
    /// orientation fits.
    pub fn place(&mut self, spec_id: &str, width: f64, height: f64) -> Option<PlacedUnit> {
        let (start, y, w, h, rotated) = match self.find_level(width, height) {
            Some((i, y)) => (i, y, width, height, false),
            None => {
                let (i, y) = self.find_level(height, width)?;
                (i, y, height, width, true)
            }
        };
        let x = self.segments[start].x;
        // Spacing is reserved to the right and above, clamped at the sheet edge.
        let occupy_w = (w + self.spacing).min(self.sheet_width - x);
        self.occupy(start, occupy_w, y + h + self.spacing);
        trace!(
            id = spec_id,
            x,
            y,
            w,
            h,
            rotated,
            segments = self.segments.len(),
            "placed unit"
        );
        Some(PlacedUnit {
            original_id: spec_id.to_string(),
            x,
            y,
            width: w,
            height: h,
            rotated,
        })
    }

    /// Raises the profile over `[x, x+width)` to `new_y`, where `x` is the
    /// start of segment `start`. Fully covered segments are deleted; a
    /// partially covered trailing segment keeps only its uncovered remainder.
    fn occupy(&mut self, start: usize, width: f64, new_y: f64) {
        let x = self.segments[start].x;
        let right = x + width;
        let mut i = start;
        while i < self.segments.len() && self.segments[i].x < right - TOLERANCE {
            let end = self.segments[i].x + self.segments[i].width;
            if end <= right + TOLERANCE {
                self.segments.remove(i);
            } else {
                let seg = &mut self.segments[i];
                seg.width = end - right;
                seg.x = right;
                break;
            }
        }
        self.segments.insert(
            start,
            SkylineSegment {
                x,
                width,
                y: new_y,
            },
        );
        self.merge();
    }

    /// Collapses runs of adjacent segments at the same height (within
    /// tolerance) into one, keeping the profile minimal.
    fn merge(&mut self) {
        let mut i = 1;
        while i < self.segments.len() {
            if (self.segments[i - 1].y - self.segments[i].y).abs() <= TOLERANCE {
                let w = self.segments[i].width;
                self.segments[i - 1].width += w;
                self.segments.remove(i);
            } else {
                i += 1;
            }
        }
    }
}
