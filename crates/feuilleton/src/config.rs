//! The configuration document.
//!
//! One YAML file describes the whole run: backend selection and parameters,
//! the novel's metadata, the two leads, the story style, and the generation
//! options. Anything missing from a required section aborts the run before
//! the first generation call.

use feuilleton_core::{Character, NovelConfig};
use feuilleton_error::{ConfigError, FeuilletonResult};
use feuilleton_models::AiServiceConfig;
use feuilleton_narrative::GenerationConfig;
use serde::Deserialize;
use std::path::Path;

fn default_language() -> String {
    "zh".to_string()
}

/// The `basic` block.
#[derive(Debug, Clone, Deserialize)]
pub struct BasicConfig {
    /// Language the novel is written in
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// The `novel` block.
#[derive(Debug, Clone, Deserialize)]
pub struct NovelSection {
    /// Novel title, also the output subdirectory name
    pub title: String,
    /// Total number of chapters the outline must cover
    pub total_chapters: u32,
    /// Target word count per chapter
    pub words_per_chapter: u32,
}

/// The `characters` block.
#[derive(Debug, Clone, Deserialize)]
pub struct CharactersSection {
    /// Female lead character sheet
    pub female_lead: Character,
    /// Male lead character sheet
    pub male_lead: Character,
}

/// The `story_style` block.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryStyleSection {
    /// Story genre
    pub genre: String,
    /// Emotional tone
    pub tone: String,
    /// Ordered plot elements
    pub plot_elements: Vec<String>,
}

/// The complete configuration document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeuilletonConfig {
    /// Backend selection and per-backend parameters
    pub ai_service: AiServiceConfig,
    /// Language settings
    #[serde(default)]
    pub basic: BasicConfig,
    /// Novel metadata
    pub novel: NovelSection,
    /// The two leads
    pub characters: CharactersSection,
    /// Genre, tone and plot elements
    pub story_style: StoryStyleSection,
    /// Generation options; every field has a default
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl FeuilletonConfig {
    /// Load and validate the configuration document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the file cannot be read or a
    /// required field is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> FeuilletonResult<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read {}: {}", path.display(), e)))?;

        let parsed = settings.try_deserialize::<Self>().map_err(|e| {
            ConfigError::new(format!("Invalid configuration in {}: {}", path.display(), e))
        })?;

        Ok(parsed)
    }

    /// Assemble the immutable novel description from the document.
    pub fn novel_config(&self) -> FeuilletonResult<NovelConfig> {
        NovelConfig::builder()
            .language(self.basic.language.clone())
            .title(self.novel.title.clone())
            .total_chapters(self.novel.total_chapters)
            .words_per_chapter(self.novel.words_per_chapter)
            .genre(self.story_style.genre.clone())
            .tone(self.story_style.tone.clone())
            .plot_elements(self.story_style.plot_elements.clone())
            .female_lead(self.characters.female_lead.clone())
            .male_lead(self.characters.male_lead.clone())
            .build()
            .map_err(|e| ConfigError::new(format!("Incomplete novel description: {}", e)).into())
    }
}
