//! Static description of the novel to produce.

use serde::{Deserialize, Serialize};

/// A named character with a personality sketch.
///
/// # Examples
///
/// ```
/// use feuilleton_core::Character;
///
/// let lead = Character::new("林晚星", "坚强独立的服装设计师");
/// assert_eq!(lead.name(), "林晚星");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct Character {
    /// Character name as it appears in prose
    name: String,
    /// Short personality descriptor woven into prompts
    personality: String,
}

impl Character {
    /// Creates a new character record.
    pub fn new(name: impl Into<String>, personality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            personality: personality.into(),
        }
    }
}

/// Immutable description of the work to produce.
///
/// Created once from configuration input and read-only afterward; every
/// prompt in the pipeline embeds some subset of these fields.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct NovelConfig {
    /// Language the novel is written in (e.g. "zh")
    language: String,
    /// Novel title, also the output subdirectory name
    title: String,
    /// Total number of chapters the outline must cover
    total_chapters: u32,
    /// Target word count per chapter
    words_per_chapter: u32,
    /// Story genre (e.g. 现代都市言情)
    genre: String,
    /// Emotional tone of the narrative
    tone: String,
    /// Ordered plot elements the outline should thread through
    plot_elements: Vec<String>,
    /// Female lead character sheet
    female_lead: Character,
    /// Male lead character sheet
    male_lead: Character,
}

impl NovelConfig {
    /// Returns a builder for constructing a NovelConfig.
    pub fn builder() -> NovelConfigBuilder {
        NovelConfigBuilder::default()
    }
}
