use std::fmt;

pub const PRICE_FLOOR: u32 = 10;
pub const PRICE_CEILING: u32 = 500;
pub const PRICE_STEP: u32 = 5;
pub const DEFAULT_PRICE_MIN: u32 = 20;
pub const DEFAULT_PRICE_MAX: u32 = 80;

/// Price bounds in whole dollars.
///
/// Invariant: `PRICE_FLOOR <= min <= max <= PRICE_CEILING`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    /// Clamps both bounds into range and orders them.
    pub fn new(a: u32, b: u32) -> Self {
        let a = a.clamp(PRICE_FLOOR, PRICE_CEILING);
        let b = b.clamp(PRICE_FLOOR, PRICE_CEILING);
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Like [`PriceRange::new`], additionally snapping both bounds to the
    /// slider step.
    pub fn from_slider(a: u32, b: u32) -> Self {
        let clamped = Self::new(a, b);
        Self {
            min: snap(clamped.min),
            max: snap(clamped.max),
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_PRICE_MIN,
            max: DEFAULT_PRICE_MAX,
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${} - ${}", self.min, self.max)
    }
}

// Nearest step counted from the floor; the ceiling is itself on a step.
fn snap(value: u32) -> u32 {
    let offset = value - PRICE_FLOOR;
    let steps = (offset + PRICE_STEP / 2) / PRICE_STEP;
    (PRICE_FLOOR + steps * PRICE_STEP).min(PRICE_CEILING)
}
