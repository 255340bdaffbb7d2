//! Authored menu topology.
//!
//! The table lists every cell of the default three-column menu: a row of
//! half-hexagons hanging from the top edge (rotated so their flat cut faces
//! the border), two rows of navigation tiles, and a row of half-hexagons
//! standing on the bottom edge. Nothing here mutates at runtime.

use super::offsets::offsets_and_scale;
use super::types::{GridCfg, HexCell, Placement};

/// One authored cell of the menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileSpec {
    pub cell: HexCell,
    pub half: bool,
    pub rotation_deg: f64,
    pub label: &'static str,
}

impl TileSpec {
    pub const fn full(column: u32, row: u32, label: &'static str) -> Self {
        Self {
            cell: HexCell::new(column, row),
            half: false,
            rotation_deg: 0.0,
            label,
        }
    }
    pub const fn half(column: u32, row: u32, rotation_deg: f64) -> Self {
        Self {
            cell: HexCell::new(column, row),
            half: true,
            rotation_deg,
            label: "",
        }
    }
}

/// Default menu for `GridCfg::default()` (three columns).
pub const MENU_TILES: &[TileSpec] = &[
    TileSpec::half(0, 0, 180.0),
    TileSpec::half(1, 0, 180.0),
    TileSpec::half(2, 0, 180.0),
    TileSpec::full(0, 1, "resume"),
    TileSpec::full(1, 1, "code"),
    TileSpec::full(2, 1, "art"),
    TileSpec::full(0, 2, "about"),
    TileSpec::full(1, 2, "projects"),
    TileSpec::full(2, 2, "contact"),
    TileSpec::half(0, 3, 0.0),
    TileSpec::half(1, 3, 0.0),
    TileSpec::half(2, 3, 0.0),
];

/// Derived attributes of one authored tile.
pub fn place(tile: &TileSpec, cfg: &GridCfg) -> Placement {
    let (center, scale) = offsets_and_scale(tile.cell, cfg);
    Placement {
        cell: tile.cell,
        center,
        scale,
        is_half: tile.half,
        rotation_deg: tile.rotation_deg,
    }
}

/// Placements for every tile, in table order.
pub fn layout(tiles: &[TileSpec], cfg: &GridCfg) -> Vec<Placement> {
    tiles.iter().map(|t| place(t, cfg)).collect()
}

impl HexCell {
    /// Placement of this cell according to `MENU_TILES`.
    /// Cells missing from the table resolve to a full, unrotated hexagon.
    pub fn placement(self, cfg: &GridCfg) -> Placement {
        match MENU_TILES.iter().find(|t| t.cell == self) {
            Some(tile) => place(tile, cfg),
            None => place(&TileSpec::full(self.column, self.row, ""), cfg),
        }
    }
}
