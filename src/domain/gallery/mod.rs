// SPDX-License-Identifier: MPL-2.0
//! Gallery domain types.
//!
//! The gallery is a fixed ring of artworks. Its only state is the position in
//! that ring, modelled by [`ArtworkIndex`] so an out-of-range position cannot
//! be represented.

pub mod sequence;

pub use sequence::{next, previous, ArtworkIndex, GalleryState, ARTWORK_COUNT};
