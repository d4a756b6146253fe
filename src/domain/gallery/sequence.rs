// SPDX-License-Identifier: MPL-2.0
//! Circular sequence navigation over the artwork ring.

/// Number of artworks in the gallery ring.
pub const ARTWORK_COUNT: usize = 4;

/// Position in the artwork ring, guaranteed to be in `0..ARTWORK_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ArtworkIndex(usize);

impl ArtworkIndex {
    /// First artwork of the ring.
    pub const FIRST: Self = Self(0);

    /// Last artwork of the ring.
    pub const LAST: Self = Self(ARTWORK_COUNT - 1);

    /// Creates an index, returning `None` when `value` is outside the ring.
    #[must_use]
    pub fn new(value: usize) -> Option<Self> {
        (value < ARTWORK_COUNT).then_some(Self(value))
    }

    /// Returns the raw position.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Iterates over every position of the ring in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..ARTWORK_COUNT).map(Self)
    }
}

/// Returns the position following `index`, wrapping from the last artwork to the first.
#[must_use]
pub fn next(index: ArtworkIndex) -> ArtworkIndex {
    if index == ArtworkIndex::LAST {
        ArtworkIndex::FIRST
    } else {
        ArtworkIndex(index.0 + 1)
    }
}

/// Returns the position preceding `index`, wrapping from the first artwork to the last.
#[must_use]
pub fn previous(index: ArtworkIndex) -> ArtworkIndex {
    if index == ArtworkIndex::FIRST {
        ArtworkIndex::LAST
    } else {
        ArtworkIndex(index.0 - 1)
    }
}

/// Mounted gallery state: the artwork currently on display.
///
/// A fresh state always starts on the first artwork. Only [`advance`](Self::advance)
/// and [`retreat`](Self::retreat) change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GalleryState {
    current: ArtworkIndex,
}

impl GalleryState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> ArtworkIndex {
        self.current
    }

    /// Moves to the next artwork and returns the new position.
    pub fn advance(&mut self) -> ArtworkIndex {
        self.current = next(self.current);
        self.current
    }

    /// Moves to the previous artwork and returns the new position.
    pub fn retreat(&mut self) -> ArtworkIndex {
        self.current = previous(self.current);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(value: usize) -> ArtworkIndex {
        ArtworkIndex::new(value).expect("index in range")
    }

    #[test]
    fn new_rejects_out_of_range_values() {
        assert!(ArtworkIndex::new(3).is_some());
        assert!(ArtworkIndex::new(4).is_none());
        assert!(ArtworkIndex::new(usize::MAX).is_none());
    }

    #[test]
    fn next_advances_and_wraps() {
        assert_eq!(next(idx(0)), idx(1));
        assert_eq!(next(idx(1)), idx(2));
        assert_eq!(next(idx(2)), idx(3));
        assert_eq!(next(idx(3)), idx(0));
    }

    #[test]
    fn previous_retreats_and_wraps() {
        assert_eq!(previous(idx(0)), idx(3));
        assert_eq!(previous(idx(3)), idx(2));
        assert_eq!(previous(idx(2)), idx(1));
        assert_eq!(previous(idx(1)), idx(0));
    }

    #[test]
    fn next_and_previous_are_inverses() {
        for index in ArtworkIndex::all() {
            assert_eq!(next(previous(index)), index);
            assert_eq!(previous(next(index)), index);
        }
    }

    #[test]
    fn all_yields_every_position_once() {
        let values: Vec<usize> = ArtworkIndex::all().map(ArtworkIndex::value).collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn state_starts_on_first_artwork() {
        assert_eq!(GalleryState::new().current(), ArtworkIndex::FIRST);
        assert_eq!(GalleryState::default().current().value(), 0);
    }

    #[test]
    fn advancing_four_times_returns_to_start() {
        let mut state = GalleryState::new();
        state.advance();
        state.advance();
        assert_eq!(state.advance(), idx(3));
        assert_eq!(state.advance(), idx(0));
    }

    #[test]
    fn retreating_from_start_wraps_to_last() {
        let mut state = GalleryState::new();
        assert_eq!(state.retreat(), idx(3));
    }
}
