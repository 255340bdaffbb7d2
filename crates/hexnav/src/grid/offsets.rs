use nalgebra::Vector2;

use super::types::{GridCfg, HexCell};
use crate::cfg::{COLUMN_SPACING, HEX_HEIGHT_RATIO, ROW_SHIFT};

/// Whether `(columns * 3 - 1) / 2` is an even integer.
///
/// For even column counts the quotient is fractional, so the flag is false.
pub fn parity_flag(columns: u32) -> bool {
    // (3c - 1) / 2 is even  <=>  4 divides (3c - 1)
    let n = 3 * i64::from(columns) - 1;
    n.rem_euclid(4) == 0
}

/// Vertical distance between consecutive rows.
#[inline]
pub fn hex_half_height(scale_up: f64) -> f64 {
    HEX_HEIGHT_RATIO * scale_up / 2.0
}

/// Horizontal stagger applied to `row`.
#[inline]
pub fn row_shift(row: u32, cfg: &GridCfg) -> f64 {
    let odd = row % 2 == 1;
    if odd == cfg.parity() {
        ROW_SHIFT * cfg.scale_up()
    } else {
        0.0
    }
}

/// Center of `cell` relative to the grid origin.
pub fn offset(cell: HexCell, cfg: &GridCfg) -> Vector2<f64> {
    let s = cfg.scale_up();
    let x = f64::from(cell.column) * COLUMN_SPACING * s + row_shift(cell.row, cfg);
    let y = (f64::from(cell.row) - 1.0) * hex_half_height(s);
    Vector2::new(x, y)
}

/// `offset` together with the scale the menu applies to every tile.
#[inline]
pub fn offsets_and_scale(cell: HexCell, cfg: &GridCfg) -> (Vector2<f64>, f64) {
    (offset(cell, cfg), cfg.scale_up())
}
