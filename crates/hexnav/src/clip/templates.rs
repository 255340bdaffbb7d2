use nalgebra::Vector2;

use crate::cfg::TAN_60;
use crate::fmt::push_pair;

/// Returned for any style index without a template.
pub const FALLBACK_PATH: &str = "M0,0 L1,0 L1,1 L0,1 Z";

/// Number of authored templates (valid indices are `0..STYLE_COUNT`).
pub const STYLE_COUNT: usize = 8;

/// Cut depths, as a fraction of the tile height.
pub const SHALLOW: f64 = 0.075;
pub const MEDIUM: f64 = 0.2125;
pub const DEEP: f64 = 0.4;

/// Narrowest tile on which the widest pair of cuts along one edge
/// (two `MEDIUM` cuts) still meets at most at a point: `2 * MEDIUM / tan 60°`.
pub const MIN_ASPECT_RATIO: f64 = 2.0 * MEDIUM / TAN_60;

/// Cut depth per corner, clockwise from top-left: `[TL, TR, BR, BL]`.
pub type CornerCuts = [Option<f64>; 4];

const TEMPLATES: [CornerCuts; STYLE_COUNT] = [
    [Some(SHALLOW), None, None, None],
    [None, Some(SHALLOW), Some(SHALLOW), None],
    [None, None, None, Some(MEDIUM)],
    [Some(MEDIUM), Some(MEDIUM), None, None],
    [Some(SHALLOW), Some(SHALLOW), Some(SHALLOW), Some(SHALLOW)],
    [None, None, Some(DEEP), None],
    [Some(DEEP), None, None, Some(DEEP)],
    [None, Some(MEDIUM), Some(SHALLOW), Some(MEDIUM)],
];

/// Template for `style_index`, if one exists.
#[inline]
pub fn corner_cuts(style_index: usize) -> Option<CornerCuts> {
    TEMPLATES.get(style_index).copied()
}

/// Horizontal extent of a cut of vertical `depth`, so that the cut edge
/// stays at 60° on a tile of the given width/height ratio.
#[inline]
pub fn cut_extent(depth: f64, aspect_ratio: f64) -> f64 {
    depth / aspect_ratio / TAN_60
}

/// Clip outline for the card at `style_index` on a tile with `aspect_ratio`
/// (width / height). Indices without a template yield `FALLBACK_PATH`.
///
/// Two cuts sharing a horizontal edge stay disjoint while
/// `aspect_ratio >= MIN_ASPECT_RATIO`. Narrower (portrait) tiles get crossing
/// cuts; the ratio is not checked.
pub fn shape_path(style_index: usize, aspect_ratio: f64) -> String {
    let Some(cuts) = corner_cuts(style_index) else {
        return FALLBACK_PATH.to_string();
    };
    let mut pts: Vec<Vector2<f64>> = Vec::with_capacity(8);
    for (corner, cut) in cuts.iter().enumerate() {
        let Some(d) = *cut else {
            pts.push(unit_corner(corner));
            continue;
        };
        let h = cut_extent(d, aspect_ratio);
        let (a, b) = match corner {
            0 => (Vector2::new(0.0, d), Vector2::new(h, 0.0)),
            1 => (Vector2::new(1.0 - h, 0.0), Vector2::new(1.0, d)),
            2 => (Vector2::new(1.0, 1.0 - d), Vector2::new(1.0 - h, 1.0)),
            _ => (Vector2::new(h, 1.0), Vector2::new(0.0, 1.0 - d)),
        };
        pts.push(a);
        pts.push(b);
    }

    let mut out = String::with_capacity(pts.len() * 16);
    for (i, p) in pts.iter().enumerate() {
        out.push_str(if i == 0 { "M" } else { " L" });
        push_pair(&mut out, *p);
    }
    out.push_str(" Z");
    out
}

#[inline]
fn unit_corner(corner: usize) -> Vector2<f64> {
    match corner {
        0 => Vector2::new(0.0, 0.0),
        1 => Vector2::new(1.0, 0.0),
        2 => Vector2::new(1.0, 1.0),
        _ => Vector2::new(0.0, 1.0),
    }
}
