//! Preview zoom factor.

/// Smallest zoom, in tenths.
const MIN_TENTHS: u8 = 5;
/// Largest zoom, in tenths.
const MAX_TENTHS: u8 = 20;
/// Default zoom, in tenths.
const DEFAULT_TENTHS: u8 = 10;

/// Preview scale in `[0.5, 2.0]`, moved in steps of 0.1.
///
/// Stored as integer tenths so repeated steps land exactly on the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Zoom(u8);

impl Zoom {
    /// Smallest zoom (0.5).
    pub const MIN: Self = Self(MIN_TENTHS);
    /// Largest zoom (2.0).
    pub const MAX: Self = Self(MAX_TENTHS);

    /// One step larger, saturating at 2.0.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(MAX_TENTHS))
    }

    /// One step smaller, saturating at 0.5.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self(self.0.saturating_sub(1).max(MIN_TENTHS))
    }

    /// Scale factor.
    #[must_use]
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 10.0
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(DEFAULT_TENTHS)
    }
}
