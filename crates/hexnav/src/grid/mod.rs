//! Offset grid calculator for the staggered flat-top hex menu.
//!
//! Model
//! - Same-row neighbours sit `1.5 * scale_up` apart; consecutive rows are
//!   `hex_half_height` apart and staggered by half a hex-width, so row `r`
//!   and row `r + 1` interleave into a continuous tiling.
//! - Which parity of row carries the stagger is decided once per `GridCfg`
//!   from the column count (`parity_flag`), keeping the grid centred.
//! - Row 1 sits on the vertical origin.
//!
//! The cells that actually exist, and which of them are half-hexagons, come
//! from the authored table in `topology`.

mod offsets;
pub mod topology;
mod types;

pub use offsets::{hex_half_height, offset, offsets_and_scale, parity_flag, row_shift};
pub use topology::{layout, place, TileSpec, MENU_TILES};
pub use types::{GridCfg, GridCfgError, HexCell, Placement};
