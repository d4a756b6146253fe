// SPDX-License-Identifier: MPL-2.0
//! The fixed artwork catalog.
//!
//! Artworks are SVG files embedded at compile time via `include_bytes!`.
//! Their render handles are created once on first access and cached with
//! `OnceLock`, so cloning a handle for every frame stays cheap.

use crate::domain::gallery::{ArtworkIndex, ARTWORK_COUNT};
use iced::widget::svg::Handle;
use std::sync::OnceLock;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artwork {
    /// Resource name, stable across builds.
    pub name: &'static str,
    /// I18n key of the accessible description.
    pub description_key: &'static str,
    data: &'static [u8],
}

impl Artwork {
    /// Raw SVG source.
    #[must_use]
    pub fn data(&self) -> &'static [u8] {
        self.data
    }
}

macro_rules! artwork {
    ($name:literal, $key:literal) => {
        Artwork {
            name: $name,
            description_key: $key,
            data: include_bytes!(concat!("../../assets/artwork/", $name, ".svg")),
        }
    };
}

static ARTWORKS: [Artwork; ARTWORK_COUNT] = [
    artwork!("picture01", "artwork-1-description"),
    artwork!("picture02", "artwork-2-description"),
    artwork!("picture03", "artwork-3-description"),
    artwork!("picture04", "artwork-4-description"),
];

/// Read-only view over the embedded artworks, indexed by [`ArtworkIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtworkCatalog;

impl ArtworkCatalog {
    #[must_use]
    pub fn len(&self) -> usize {
        ARTWORKS.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ARTWORKS.is_empty()
    }

    /// Returns the artwork at `index`. Total: every index is in range.
    #[must_use]
    pub fn get(&self, index: ArtworkIndex) -> &'static Artwork {
        &ARTWORKS[index.value()]
    }

    /// Returns the cached render handle for the artwork at `index`.
    #[must_use]
    pub fn handle(&self, index: ArtworkIndex) -> Handle {
        static HANDLES: OnceLock<Vec<Handle>> = OnceLock::new();
        let handles = HANDLES.get_or_init(|| {
            ARTWORKS
                .iter()
                .map(|artwork| Handle::from_memory(artwork.data))
                .collect()
        });
        handles[index.value()].clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Artwork> {
        ARTWORKS.iter()
    }
}
