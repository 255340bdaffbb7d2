//! Rounded hexagon outlines as SVG path data.
//!
//! Conventions
//! - Flat-top hexagon, SVG axes (y grows downwards). The local origin is the
//!   top-left of the bounding box; the logical center is `(s, 0.866 s)`.
//! - Every corner is replaced by a quadratic curve whose control point is the
//!   un-rounded vertex; straight `L` segments join consecutive corners.
//! - The half variant keeps the top four vertices and closes across the
//!   middle line.
//!
//! Precondition (not checked): `0 <= corner_radius` and less than half the
//! shortest edge, otherwise the rounded corners overlap.

mod builder;

pub use builder::{hex_path, hex_vertices, polar, rounded_polygon_path, HexPath};

#[cfg(test)]
mod tests;
