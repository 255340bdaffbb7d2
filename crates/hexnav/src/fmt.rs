//! Number formatting for SVG path data.
//!
//! Coordinates are rounded half away from zero to `PATH_DECIMALS` fractional
//! digits, trailing zeros are trimmed, and `-0` prints as `0`. Non-finite
//! values print as `0` so a degenerate input never yields an unparsable path.

use std::fmt::Write as _;

use nalgebra::Vector2;

use crate::cfg::{PATH_DECIMALS, PATH_SCALE};

pub(crate) fn fmt_into(out: &mut String, v: f64) {
    if !v.is_finite() {
        out.push('0');
        return;
    }
    let k = (v * PATH_SCALE as f64).round() as i64;
    if k == 0 {
        out.push('0');
        return;
    }
    if k < 0 {
        out.push('-');
    }
    let abs = k.unsigned_abs();
    let int_part = abs / PATH_SCALE;
    let mut frac = abs % PATH_SCALE;
    let _ = write!(out, "{int_part}");
    if frac == 0 {
        return;
    }
    let mut digits = PATH_DECIMALS;
    while frac % 10 == 0 {
        frac /= 10;
        digits -= 1;
    }
    let _ = write!(out, ".{:0width$}", frac, width = digits);
}

pub(crate) fn fmt(v: f64) -> String {
    let mut out = String::new();
    fmt_into(&mut out, v);
    out
}

/// `x y`, as used by the hexagon outlines.
pub(crate) fn push_point(out: &mut String, p: Vector2<f64>) {
    fmt_into(out, p.x);
    out.push(' ');
    fmt_into(out, p.y);
}

/// `x,y`, as used by the clip shapes.
pub(crate) fn push_pair(out: &mut String, p: Vector2<f64>) {
    fmt_into(out, p.x);
    out.push(',');
    fmt_into(out, p.y);
}
