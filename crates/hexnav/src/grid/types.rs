//! Grid configuration and cell types.
//!
//! - `GridCfg`: column count + hexagon scale, with the stagger parity cached.
//! - `HexCell`: logical (column, row) address.
//! - `Placement`: the derived attributes of a cell (center, half, rotation).

use std::fmt;

use nalgebra::Vector2;

use super::offsets::parity_flag;

/// Global grid configuration.
///
/// Invariants:
/// - `columns > 0`, `scale_up` finite and `> 0` (enforced by `new`).
/// - `parity` always equals `parity_flag(columns)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCfg {
    columns: u32,
    scale_up: f64,
    parity: bool,
}

impl GridCfg {
    pub fn new(columns: u32, scale_up: f64) -> Result<Self, GridCfgError> {
        if columns == 0 {
            return Err(GridCfgError::ZeroColumns);
        }
        if !(scale_up.is_finite() && scale_up > 0.0) {
            return Err(GridCfgError::NonPositiveScale { scale_up });
        }
        Ok(Self {
            columns,
            scale_up,
            parity: parity_flag(columns),
        })
    }
    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }
    #[inline]
    pub fn scale_up(&self) -> f64 {
        self.scale_up
    }
    /// True when odd rows carry the stagger, false when even rows do.
    #[inline]
    pub fn parity(&self) -> bool {
        self.parity
    }
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            columns: 3,
            scale_up: 100.0,
            parity: parity_flag(3),
        }
    }
}

/// Rejected grid configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum GridCfgError {
    ZeroColumns,
    NonPositiveScale { scale_up: f64 },
}

impl fmt::Display for GridCfgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid needs at least one column"),
            Self::NonPositiveScale { scale_up } => {
                write!(f, "scale_up must be finite and positive, got {scale_up}")
            }
        }
    }
}

impl std::error::Error for GridCfgError {}

/// Logical grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCell {
    pub column: u32,
    pub row: u32,
}

impl HexCell {
    #[inline]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

/// Where and how a cell is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub cell: HexCell,
    /// Center offset from the grid origin.
    pub center: Vector2<f64>,
    /// Hexagon size unit the offsets were computed with.
    pub scale: f64,
    pub is_half: bool,
    pub rotation_deg: f64,
}
