//! Clip shapes for the stacked cards.
//!
//! Each card in the ring is cropped by an octagon-like outline whose cut
//! corners continue the 60° edges of the surrounding hexagons, so the stack
//! reads as one tiling. Paths live in object-bounding-box units (`[0,1]²`).
//!
//! - `templates`: the eight authored corner-cut templates and `shape_path`.
//! - `cache`: per-grid-area memo (`GridAreaPathData`) keyed by index.

mod cache;
mod templates;

pub use cache::{ClipPathCache, GridAreaPathData};
pub use templates::{
    corner_cuts, cut_extent, shape_path, CornerCuts, DEEP, FALLBACK_PATH, MEDIUM,
    MIN_ASPECT_RATIO, SHALLOW, STYLE_COUNT,
};
