/// A closed range `[min, max]` of scalars.
///
/// Used for box slabs, the cylinder's axial extent and the depth-buffer
/// mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Distance from `min` to `max`; negative for an inverted range.
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Inclusive at both ends.
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }

    pub fn clamp(&self, x: f32) -> f32 {
        x.max(self.min).min(self.max)
    }

    /// Where `x` sits in the range: 0 at `min`, 1 at `max`.
    ///
    /// Values outside the range extrapolate past 0 or 1.
    pub fn fraction(&self, x: f32) -> f32 {
        (x - self.min) / self.size()
    }

    /// `[0, 1]`
    pub const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
}
