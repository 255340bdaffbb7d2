//! Hexagon layout engine for the tile navigation menu.
//!
//! Three pure pieces, composed in one direction only:
//! - `grid`: (column, row) → center offset in a staggered flat-top hex grid,
//!   plus the authored menu topology table.
//! - `path`: rounded hexagon (full or half) → SVG path data.
//! - `clip`: style index + aspect ratio → octagon-like clip path in unit
//!   object-bounding-box space, with the per-index memo cache.
//!
//! `ring` rotates the stack of cards that feeds `clip` its indices, and
//! `render` stitches placements and hex paths into a preview SVG.

mod cfg;
pub mod clip;
mod fmt;
pub mod grid;
pub mod path;
pub mod render;
pub mod ring;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::{shape_path, ClipPathCache, GridAreaPathData, FALLBACK_PATH};
    pub use crate::grid::{
        layout, offset, offsets_and_scale, GridCfg, GridCfgError, HexCell, Placement, TileSpec,
        MENU_TILES,
    };
    pub use crate::path::{hex_path, HexPath};
    pub use crate::render::menu_svg;
    pub use crate::ring::{cycle, CardRing};
    pub use nalgebra::Vector2 as Vec2;
}
