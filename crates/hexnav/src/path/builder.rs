use nalgebra::Vector2;

use crate::cfg::HEX_HEIGHT_RATIO;
use crate::fmt::push_point;

/// Point at `radius` from the origin in direction `degrees` (SVG axes).
#[inline]
pub fn polar(radius: f64, degrees: f64) -> Vector2<f64> {
    let th = degrees.to_radians();
    Vector2::new(radius * th.cos(), radius * th.sin())
}

/// Six vertices of a flat-top hexagon of circumradius `side_length`,
/// starting at the left point and running clockwise on screen.
pub fn hex_vertices(side_length: f64) -> [Vector2<f64>; 6] {
    let center = Vector2::new(side_length, side_length * HEX_HEIGHT_RATIO);
    std::array::from_fn(|i| center + polar(side_length, 60.0 * i as f64 + 180.0))
}

/// Point at distance `r` from `from` towards `to`.
#[inline]
fn toward(from: Vector2<f64>, to: Vector2<f64>, r: f64) -> Vector2<f64> {
    let d = to - from;
    let len = d.norm();
    if len == 0.0 {
        from
    } else {
        from + d * (r / len)
    }
}

/// Closed path through `vertices` with every corner rounded by `corner_radius`.
///
/// Per corner the entry and exit points are offset from the vertex along the
/// two adjacent edges; on the slanted hexagon edges that offset is exactly
/// `(r sin 30°, r cos 30°)`. Output: `M exit0 (L entry Q vertex exit)* Z`.
pub fn rounded_polygon_path(vertices: &[Vector2<f64>], corner_radius: f64) -> String {
    let n = vertices.len();
    debug_assert!(n >= 3, "need a polygon, got {n} vertices");
    if n == 0 {
        return String::new();
    }
    let corners: Vec<[Vector2<f64>; 3]> = (0..n)
        .map(|i| {
            let v = vertices[i];
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            [
                toward(v, prev, corner_radius),
                v,
                toward(v, next, corner_radius),
            ]
        })
        .collect();

    let mut out = String::with_capacity(16 + n * 48);
    out.push_str("M ");
    push_point(&mut out, corners[0][2]);
    for k in 1..=n {
        let [entry, vertex, exit] = corners[k % n];
        out.push_str(" L ");
        push_point(&mut out, entry);
        out.push_str(" Q ");
        push_point(&mut out, vertex);
        out.push(' ');
        push_point(&mut out, exit);
    }
    out.push_str(" Z");
    out
}

/// SVG path data for a rounded hexagon (six corners) or its top half (four).
pub fn hex_path(side_length: f64, corner_radius: f64, is_half: bool) -> String {
    let verts = hex_vertices(side_length);
    let used = if is_half { &verts[..4] } else { &verts[..] };
    rounded_polygon_path(used, corner_radius)
}

/// Inputs and output of one `hex_path` call, kept together for renderers.
#[derive(Clone, Debug, PartialEq)]
pub struct HexPath {
    pub side_length: f64,
    pub corner_radius: f64,
    pub is_half: bool,
    pub path: String,
}

impl HexPath {
    pub fn new(side_length: f64, corner_radius: f64, is_half: bool) -> Self {
        Self {
            side_length,
            corner_radius,
            is_half,
            path: hex_path(side_length, corner_radius, is_half),
        }
    }

    /// Logical center in the path's local coordinates.
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.side_length, self.side_length * HEX_HEIGHT_RATIO)
    }
}
