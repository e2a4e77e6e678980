//! Content Store
//!
//! All display text and image references ship with the binary as JSON and
//! are parsed exactly once at startup. After loading, the content is
//! immutable and shared behind an [`Arc`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::slides::{ImageRef, Slide};

/// Bundled content, embedded at compile time
const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

/// Errors that can occur when loading content
#[derive(Debug, Error)]
pub enum ContentError {
    /// The JSON could not be parsed
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// The memories section has no slides
    #[error("Memories must contain at least one slide")]
    NoSlides,

    /// A slide has an empty caption
    #[error("Slide {index} has an empty caption")]
    EmptyCaption {
        /// Position of the offending slide
        index: usize,
    },

    /// A slide has an empty image reference
    #[error("Slide {index} has no image reference")]
    MissingImage {
        /// Position of the offending slide
        index: usize,
    },
}

/// Splash screen text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashContent {
    pub title: String,
    pub subtitle: String,
}

/// Welcome screen text
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeContent {
    pub title: String,
    pub name: String,
    pub subtitle: String,
    pub button_text: String,
}

/// Home screen text (birthday message card)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeContent {
    pub date_badge: String,
    pub greeting: String,
    pub name: String,
    pub image_badge: String,
    pub note_title: String,
    pub note_lines: Vec<String>,
    pub note_footer: String,
    pub note_signature: String,
}

/// One slide as written in the content file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Caption shown over the photo
    pub text: String,
    /// Image reference (resolved by the surface)
    pub image: String,
}

/// Memories carousel content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoriesContent {
    pub slides: Vec<SlideContent>,
}

/// Every piece of text the app shows
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppContent {
    pub splash: SplashContent,
    pub welcome: WelcomeContent,
    pub home: HomeContent,
    pub memories: MemoriesContent,
}

impl AppContent {
    /// Parse and validate content from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Load the content bundled with the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.memories.slides.is_empty() {
            return Err(ContentError::NoSlides);
        }

        for (index, slide) in self.memories.slides.iter().enumerate() {
            if slide.text.trim().is_empty() {
                return Err(ContentError::EmptyCaption { index });
            }
            if slide.image.trim().is_empty() {
                return Err(ContentError::MissingImage { index });
            }
        }

        Ok(())
    }

    /// Canonical (non-looped) slide sequence
    pub fn slides(&self) -> Vec<Slide> {
        self.memories
            .slides
            .iter()
            .enumerate()
            .map(|(index, s)| Slide::new(s.text.clone(), ImageRef::new(&s.image), index))
            .collect()
    }
}

/// Shared, immutable content handle
#[derive(Clone, Debug)]
pub struct ContentStore {
    content: Arc<AppContent>,
}

impl ContentStore {
    /// Load the bundled content
    pub fn load() -> Result<Self, ContentError> {
        let content = AppContent::bundled()?;
        tracing::debug!(
            slides = content.memories.slides.len(),
            "Content store loaded"
        );
        Ok(Self::from_content(content))
    }

    /// Wrap already-parsed content
    pub fn from_content(content: AppContent) -> Self {
        Self {
            content: Arc::new(content),
        }
    }

    pub fn splash(&self) -> &SplashContent {
        &self.content.splash
    }

    pub fn welcome(&self) -> &WelcomeContent {
        &self.content.welcome
    }

    pub fn home(&self) -> &HomeContent {
        &self.content.home
    }

    pub fn memories(&self) -> &MemoriesContent {
        &self.content.memories
    }

    /// Canonical slide sequence
    pub fn slides(&self) -> Vec<Slide> {
        self.content.slides()
    }
}
