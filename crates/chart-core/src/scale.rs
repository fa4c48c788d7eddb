// File: crates/chart-core/src/scale.rs
// Summary: Data domains and the linear/index scales that map them into plot pixels.

/// Numeric [min, max] range of finite values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    /// Domain of the finite `values`, or `None` when there are none.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() { Some(Self { min, max }) } else { None }
    }

    /// max - min, substituting 1 for an empty or non-finite range.
    pub fn span(&self) -> f64 {
        let r = self.max - self.min;
        if r.is_finite() && r > 0.0 { r } else { 1.0 }
    }

    /// Position of `v` inside the domain, 0 at min and 1 at max.
    #[inline]
    pub fn fraction(&self, v: f64) -> f64 {
        (v - self.min) / self.span()
    }
}

/// Maps a domain linearly onto a pixel interval. `start_px` receives `min`.
/// For a vertical axis pass (bottom, top) so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub domain: Domain,
    pub start_px: f32,
    pub end_px: f32,
}

impl LinearScale {
    pub fn new(domain: Domain, start_px: f32, end_px: f32) -> Self {
        Self { domain, start_px, end_px }
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        self.start_px + self.domain.fraction(v) as f32 * (self.end_px - self.start_px)
    }
}

/// Evenly spaces `count` indices across [left_px, right_px]; a single index sits at `left_px`.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    pub left_px: f32,
    pub right_px: f32,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f32, right_px: f32, count: usize) -> Self {
        Self { left_px, right_px, count }
    }
    #[inline]
    pub fn to_px(&self, index: usize) -> f32 {
        let steps = self.count.saturating_sub(1).max(1) as f32;
        self.left_px + (index as f32 / steps) * (self.right_px - self.left_px)
    }
}
