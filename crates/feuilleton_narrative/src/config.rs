//! Generation options for the chapter loop.
//!
//! These structs mirror the `generation` block of the configuration
//! document. Everything has a default so the whole block may be omitted.

use serde::Deserialize;

fn default_max_previous_chapters() -> usize {
    1
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_generate_all() -> bool {
    true
}

fn default_start_index() -> usize {
    1
}

/// Which chapter-generation strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    /// Condition every chapter on the world setting, the full outline, and
    /// the sliding window of prior chapters.
    #[default]
    ContextRich,
    /// Condition each chapter only on the novel description and its own
    /// outline line.
    ContextFree,
}

/// Contiguous sub-range of outline lines to realize.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChapterRange {
    /// Generate every outline line, ignoring the indices below
    #[serde(default = "default_generate_all")]
    pub generate_all: bool,
    /// 1-based inclusive start of the sub-range
    #[serde(default = "default_start_index")]
    pub start_index: usize,
    /// Inclusive end of the sub-range; defaults to the last outline line
    #[serde(default)]
    pub end_index: Option<usize>,
}

impl Default for ChapterRange {
    fn default() -> Self {
        Self {
            generate_all: true,
            start_index: 1,
            end_index: None,
        }
    }
}

/// The `generation` configuration block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenerationConfig {
    /// Strategy selector
    #[serde(default)]
    pub mode: GenerationMode,
    /// Context window capacity in chapters
    #[serde(default = "default_max_previous_chapters")]
    pub max_previous_chapters: usize,
    /// Root directory for all novel output
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Outline sub-range selection
    #[serde(default)]
    pub chapters: ChapterRange,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            mode: GenerationMode::default(),
            max_previous_chapters: default_max_previous_chapters(),
            output_dir: default_output_dir(),
            chapters: ChapterRange::default(),
        }
    }
}
