//! World-setting and outline generation.
//!
//! A two-stage sequential flow: derive the world setting from the novel
//! description, then expand it into a chapter-by-chapter outline. The raw
//! outline is normalized into one well-formed line per chapter before
//! anything downstream sees it.

use crate::{NovelWorkspace, prompt, scrub};
use feuilleton_core::{GenerateRequest, NovelConfig};
use feuilleton_error::FeuilletonResult;
use feuilleton_interface::FeuilletonDriver;
use tracing::{info, warn};

/// Token every well-formed outline line starts with.
pub const CHAPTER_MARKER: &str = "第";

/// Full-width separator between a chapter title and its summary.
pub const TITLE_SEPARATOR: char = '：';

/// Result of outline normalization.
///
/// Rejected lines are returned rather than silently discarded so callers
/// can observe how far the backend drifted from the requested grammar; a
/// shorter-than-configured outline is then a measurable condition instead
/// of a surprise at the end of the chapter loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedOutline {
    /// Retained lines, rejoined with single line breaks in original order.
    pub outline: String,
    /// Lines dropped by the format filter, in original order.
    pub rejected: Vec<String>,
}

impl NormalizedOutline {
    /// Retained lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.outline.lines()
    }

    /// Number of retained chapter lines.
    pub fn chapter_count(&self) -> usize {
        if self.outline.is_empty() {
            0
        } else {
            self.outline.lines().count()
        }
    }
}

/// Normalize raw outline text into one line per chapter.
///
/// Lines are trimmed; blank lines disappear; a line survives only if it
/// starts with the chapter marker and contains the title separator. This is
/// a best-effort filter, not a correctness guarantee — a backend that
/// produces zero well-formed lines yields an empty outline.
pub fn normalize(raw: &str) -> NormalizedOutline {
    let mut retained = Vec::new();
    let mut rejected = Vec::new();

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with(CHAPTER_MARKER) && line.contains(TITLE_SEPARATOR) {
            retained.push(line);
        } else {
            rejected.push(line.to_string());
        }
    }

    NormalizedOutline {
        outline: retained.join("\n"),
        rejected,
    }
}

/// Two-stage generator producing the world setting and the outline.
pub struct OutlineGenerator<'a, D> {
    driver: &'a D,
    workspace: &'a NovelWorkspace,
}

impl<'a, D: FeuilletonDriver> OutlineGenerator<'a, D> {
    /// Create an outline generator over a driver and a novel workspace.
    pub fn new(driver: &'a D, workspace: &'a NovelWorkspace) -> Self {
        Self { driver, workspace }
    }

    /// Run both stages and persist their artifacts.
    ///
    /// The world setting is overwritten; the normalized outline is appended
    /// to its file. Any backend failure here aborts the run — the outline
    /// is a hard prerequisite for everything after it.
    pub async fn generate(&self, novel: &NovelConfig) -> FeuilletonResult<NormalizedOutline> {
        info!(title = %novel.title(), "Generating world setting");
        let request = GenerateRequest::from_prompt(prompt::world_setting(novel));
        let response = self.driver.generate(&request).await?;
        let world_setting = scrub::strip_reasoning(&response.text);
        self.workspace.write_world_setting(&world_setting).await?;

        info!(title = %novel.title(), chapters = novel.total_chapters(), "Generating outline");
        let request = GenerateRequest::from_prompt(prompt::outline(novel, &world_setting));
        let response = self.driver.generate(&request).await?;
        let normalized = normalize(&scrub::strip_reasoning(&response.text));

        if !normalized.rejected.is_empty() {
            warn!(
                rejected = normalized.rejected.len(),
                retained = normalized.chapter_count(),
                "Dropped malformed outline lines"
            );
        }

        self.workspace.append_outline(&normalized.outline).await?;
        info!(
            chapters = normalized.chapter_count(),
            path = %self.workspace.outline_path().display(),
            "Outline saved"
        );

        Ok(normalized)
    }
}
