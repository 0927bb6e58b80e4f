pub mod skyline;

/// Absolute tolerance for all width/height/position comparisons.
///
/// Applied uniformly at every tolerance-sensitive site: width-accumulation
/// termination, placement tie-breaking, and segment-merge equality. Using one
/// constant keeps the three sites consistent; boundary-case layouts diverge if
/// any of them drifts.
pub const TOLERANCE: f64 = 1e-4;
