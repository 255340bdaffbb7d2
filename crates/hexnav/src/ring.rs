//! Ring of stacked cards.
//!
//! The showcase stacks up to `STYLE_COUNT` cards; stepping forward sends the
//! front card to the back. A card's position in the ring is its grid area
//! index, which is what selects its clip template.

use crate::clip::ClipPathCache;

/// `items` rotated left by `steps` (negative steps rotate right).
/// Wraps in both directions; an empty slice yields an empty vector.
pub fn cycle<T: Clone>(items: &[T], steps: isize) -> Vec<T> {
    if items.is_empty() {
        return Vec::new();
    }
    let k = steps.rem_euclid(items.len() as isize) as usize;
    let mut out = items.to_vec();
    out.rotate_left(k);
    out
}

/// Cards in display order; index 0 is the front card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardRing<T> {
    cards: Vec<T>,
}

impl<T> CardRing<T> {
    pub fn new(cards: Vec<T>) -> Self {
        Self { cards }
    }

    /// Front card goes to the back.
    pub fn advance(&mut self) {
        if !self.cards.is_empty() {
            self.cards.rotate_left(1);
        }
    }

    /// Back card comes to the front.
    pub fn retreat(&mut self) {
        if !self.cards.is_empty() {
            self.cards.rotate_right(1);
        }
    }

    #[inline]
    pub fn active(&self) -> Option<&T> {
        self.cards.first()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// `(grid_area_index, card)` pairs in display order.
    pub fn grid_areas(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.cards.iter().enumerate()
    }

    /// Clip path of every card for tiles of `width × height`, via `cache`.
    pub fn clip_paths(&self, cache: &mut ClipPathCache, width: f64, height: f64) -> Vec<String> {
        (0..self.cards.len())
            .map(|i| cache.get(i, width, height).shape_path.clone())
            .collect()
    }
}
