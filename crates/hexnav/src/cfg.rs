//! Fixed layout constants (internal).
//!
//! All grid arithmetic is expressed in multiples of `scale_up`; nothing here
//! is meant to be tuned per call.

/// Height-to-width ratio of the hexagons, as authored (≈ sin 60°).
pub(crate) const HEX_HEIGHT_RATIO: f64 = 0.866;
/// Horizontal distance between two columns of the same row, in `scale_up`.
pub(crate) const COLUMN_SPACING: f64 = 1.5;
/// Horizontal stagger between even and odd rows (half a hex-width), in `scale_up`.
pub(crate) const ROW_SHIFT: f64 = 0.75;

/// tan 60°, the slope of the slanted hexagon edges.
pub(crate) const TAN_60: f64 = 1.732_050_807_568_877_2;

/// Fractional digits kept when printing path coordinates.
pub(crate) const PATH_DECIMALS: usize = 4;
/// `10^PATH_DECIMALS`.
pub(crate) const PATH_SCALE: u64 = 10_000;
