// SPDX-License-Identifier: MPL-2.0
//! Media resources shown by the gallery.
//!
//! The artworks are compiled into the binary; see [`catalog`].

pub mod catalog;

pub use catalog::{Artwork, ArtworkCatalog};
