//! Slide Model
//!
//! The canonical slide sequence and its looped form. The looped sequence
//! appends a single clone of slide 0 so that a forward scroll past the
//! last slide lands on something that looks like the first one.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to a bundled image
///
/// The core never decodes images; surfaces resolve the handle to whatever
/// they can draw.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single carousel slide
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Caption text
    pub caption: String,
    /// Photo shown behind the caption
    pub image: ImageRef,
    /// Position in the canonical (non-looped) sequence
    pub original_index: usize,
}

impl Slide {
    pub fn new(caption: impl Into<String>, image: ImageRef, original_index: usize) -> Self {
        Self {
            caption: caption.into(),
            image,
            original_index,
        }
    }
}

/// Canonical slides plus one trailing clone of slide 0
///
/// Length is always `N + 1` for `N` canonical slides, and entry `N` carries
/// the caption and image of entry 0.
#[derive(Clone, Debug)]
pub struct LoopedSlides {
    entries: Vec<Slide>,
}

impl LoopedSlides {
    /// Build the looped sequence. Returns `None` for an empty input.
    pub fn new(canonical: Vec<Slide>) -> Option<Self> {
        let first = canonical.first()?.clone();
        let mut entries = canonical;
        entries.push(Slide {
            original_index: 0,
            ..first
        });
        Some(Self { entries })
    }

    /// Number of canonical slides (N)
    pub fn canonical_len(&self) -> usize {
        self.entries.len() - 1
    }

    /// Number of entries including the clone (N + 1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never empty: there is always at least one slide plus its clone
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of the clone entry
    pub fn clone_index(&self) -> usize {
        self.canonical_len()
    }

    /// Entry at a looped position
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.entries.get(index)
    }

    /// Map any looped position to its canonical position
    pub fn canonical_index(&self, index: usize) -> usize {
        if index >= self.clone_index() {
            0
        } else {
            index
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.entries.iter()
    }
}
