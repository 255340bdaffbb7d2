use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::templates::shape_path;

/// Last computed clip geometry for one grid area.
#[derive(Clone, Debug, PartialEq)]
pub struct GridAreaPathData {
    pub width: f64,
    pub height: f64,
    pub shape_path: String,
}

impl GridAreaPathData {
    fn compute(grid_area_index: usize, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shape_path: shape_path(grid_area_index, width / height),
        }
    }
}

/// Memo of `GridAreaPathData` keyed by grid area index.
///
/// An entry is recomputed only when the requested width or height differs
/// from the stored one. No eviction: the index domain is the ring size.
#[derive(Clone, Debug, Default)]
pub struct ClipPathCache {
    entries: HashMap<usize, GridAreaPathData>,
    recomputations: u64,
}

impl ClipPathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clip data for `grid_area_index` at the given rendered size.
    pub fn get(&mut self, grid_area_index: usize, width: f64, height: f64) -> &GridAreaPathData {
        match self.entries.entry(grid_area_index) {
            Entry::Occupied(slot) => {
                let slot = slot.into_mut();
                if slot.width != width || slot.height != height {
                    tracing::trace!(grid_area_index, width, height, "clip path resized");
                    *slot = GridAreaPathData::compute(grid_area_index, width, height);
                    self.recomputations += 1;
                }
                slot
            }
            Entry::Vacant(slot) => {
                tracing::trace!(grid_area_index, width, height, "clip path computed");
                self.recomputations += 1;
                slot.insert(GridAreaPathData::compute(grid_area_index, width, height))
            }
        }
    }

    /// Stored entry without touching it.
    #[inline]
    pub fn peek(&self, grid_area_index: usize) -> Option<&GridAreaPathData> {
        self.entries.get(&grid_area_index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries computed so far (first fills plus resizes).
    #[inline]
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }
}
