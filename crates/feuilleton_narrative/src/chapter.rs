//! Chapter-by-chapter prose generation.
//!
//! Iterates the outline lines (all of them or a configured sub-range),
//! maintaining a bounded window of previously generated chapters as context.
//! A failure in one chapter is logged and skipped; the loop continues with
//! the next outline line.

use crate::outline::TITLE_SEPARATOR;
use crate::{ChapterRange, GenerationMode, NovelWorkspace, prompt, scrub};
use feuilleton_core::{ChapterRecord, ContextWindow, GenerateRequest, NovelConfig};
use feuilleton_error::{FeuilletonResult, OutlineError, OutlineErrorKind};
use feuilleton_interface::FeuilletonDriver;
use tracing::{info, warn};

/// Strategy for assembling a chapter prompt.
///
/// Both variants share the per-chapter I/O contract (generate, scrub,
/// persist, record); they differ only in how much accumulated context the
/// prompt carries. The context-rich variant owns the world setting it loaded
/// at entry.
enum ChapterStrategy {
    ContextRich { world_setting: String },
    ContextFree,
}

impl ChapterStrategy {
    fn assemble(
        &self,
        novel: &NovelConfig,
        chapter_number: usize,
        outline_line: &str,
        full_outline: &str,
        window: &ContextWindow,
    ) -> String {
        match self {
            ChapterStrategy::ContextRich { world_setting } => {
                let previous_summary = context_summary(window);
                prompt::chapter_rich(
                    novel,
                    chapter_number,
                    outline_line,
                    full_outline,
                    world_setting,
                    &previous_summary,
                )
            }
            ChapterStrategy::ContextFree => {
                prompt::chapter_simple(novel, chapter_number, outline_line)
            }
        }
    }
}

/// Concatenate the window's records into a prior-chapter summary.
///
/// An empty window substitutes the fixed first-chapter placeholder.
fn context_summary(window: &ContextWindow) -> String {
    if window.is_empty() {
        return prompt::NO_PRIOR_CHAPTERS.to_string();
    }

    window
        .iter()
        .map(|record| format!("{}\n内容概要：{}\n", record.outline, record.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derive a chapter title from its outline line.
///
/// The title is the substring before the full-width separator, minus the
/// leading chapter-marker token. Without a separator the title is undefined
/// and the chapter file gets no suffix.
fn extract_title(outline_line: &str) -> Option<String> {
    let (head, _) = outline_line.split_once(TITLE_SEPARATOR)?;
    head.split_once(char::is_whitespace)
        .map(|(_, title)| title.trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Generates chapters from an outline, in order, with failure isolation.
pub struct ChapterGenerator<'a, D> {
    driver: &'a D,
    workspace: &'a NovelWorkspace,
    mode: GenerationMode,
    window: ContextWindow,
}

impl<'a, D: FeuilletonDriver> ChapterGenerator<'a, D> {
    /// Create a chapter generator.
    ///
    /// `max_previous_chapters` bounds the context window; the default
    /// configuration keeps only the single most recent chapter.
    pub fn new(
        driver: &'a D,
        workspace: &'a NovelWorkspace,
        mode: GenerationMode,
        max_previous_chapters: usize,
    ) -> Self {
        Self {
            driver,
            workspace,
            mode,
            window: ContextWindow::new(max_previous_chapters),
        }
    }

    /// Generate every selected chapter, returning the records that succeeded.
    ///
    /// Chapter numbering always reflects position within the full outline:
    /// a range of 3..=5 produces chapters numbered 3, 4 and 5 in both
    /// filenames and prompts. The returned list may be shorter than the
    /// selection and may skip indices where generation failed.
    pub async fn generate_chapters(
        &mut self,
        outline: &str,
        novel: &NovelConfig,
        range: &ChapterRange,
    ) -> FeuilletonResult<Vec<ChapterRecord>> {
        let lines: Vec<&str> = outline
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let (start, selected) = select_range(&lines, range)?;

        let strategy = match self.mode {
            GenerationMode::ContextRich => ChapterStrategy::ContextRich {
                world_setting: self.workspace.load_world_setting().await?,
            },
            GenerationMode::ContextFree => ChapterStrategy::ContextFree,
        };

        let mut chapters = Vec::new();

        for (offset, outline_line) in selected.iter().enumerate() {
            let chapter_number = start + offset;
            info!(chapter = chapter_number, "Generating chapter");

            match self
                .generate_single(&strategy, novel, chapter_number, outline_line, outline)
                .await
            {
                Ok(record) => {
                    self.window.push(record.clone());
                    chapters.push(record);
                }
                Err(e) => {
                    warn!(chapter = chapter_number, error = %e, "Skipping chapter after failure");
                    continue;
                }
            }
        }

        Ok(chapters)
    }

    async fn generate_single(
        &self,
        strategy: &ChapterStrategy,
        novel: &NovelConfig,
        chapter_number: usize,
        outline_line: &str,
        full_outline: &str,
    ) -> FeuilletonResult<ChapterRecord> {
        let prompt = strategy.assemble(novel, chapter_number, outline_line, full_outline, &self.window);

        let response = self
            .driver
            .generate(&GenerateRequest::from_prompt(prompt))
            .await?;
        let content = scrub::strip_reasoning(&response.text);

        let title = extract_title(outline_line);
        let path = self
            .workspace
            .write_chapter(chapter_number, title.as_deref(), &content)
            .await?;
        info!(chapter = chapter_number, path = %path.display(), "Chapter saved");

        Ok(ChapterRecord {
            index: chapter_number,
            outline: outline_line.to_string(),
            content,
        })
    }
}

/// Resolve the configured range against the outline.
///
/// Returns the 1-based number of the first selected chapter and the
/// selected lines. `generate_all` short-circuits the indices.
fn select_range<'l>(
    lines: &[&'l str],
    range: &ChapterRange,
) -> FeuilletonResult<(usize, Vec<&'l str>)> {
    if range.generate_all {
        return Ok((1, lines.to_vec()));
    }

    let start = range.start_index;
    let end = range.end_index.unwrap_or(lines.len());

    if start == 0 || start > lines.len() || end < start {
        return Err(OutlineError::new(OutlineErrorKind::InvalidRange {
            start,
            end,
            available: lines.len(),
        })
        .into());
    }

    let end = end.min(lines.len());
    Ok((start, lines[start - 1..end].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_text_between_marker_and_separator() {
        assert_eq!(extract_title("第3章 重逢：他乡再见"), Some("重逢".to_string()));
        assert_eq!(
            extract_title("第12章 雨夜 告白：天台对话"),
            Some("雨夜 告白".to_string())
        );
    }

    #[test]
    fn no_separator_means_no_title() {
        assert_eq!(extract_title("第3章 重逢"), None);
    }

    #[test]
    fn no_marker_token_means_no_title() {
        assert_eq!(extract_title("重逢：他乡再见"), None);
    }

    #[test]
    fn summary_uses_placeholder_when_window_empty() {
        let window = ContextWindow::new(1);
        assert_eq!(context_summary(&window), prompt::NO_PRIOR_CHAPTERS);
    }

    #[test]
    fn summary_concatenates_outline_and_content() {
        let mut window = ContextWindow::new(2);
        window.push(ChapterRecord {
            index: 1,
            outline: "第1章 初见：相遇".to_string(),
            content: "正文一".to_string(),
        });
        window.push(ChapterRecord {
            index: 2,
            outline: "第2章 误会：矛盾".to_string(),
            content: "正文二".to_string(),
        });

        let summary = context_summary(&window);
        let first = summary.find("第1章").unwrap();
        let second = summary.find("第2章").unwrap();
        assert!(first < second);
        assert!(summary.contains("内容概要：正文一"));
        assert!(summary.contains("内容概要：正文二"));
    }

    #[test]
    fn select_range_defaults_to_everything() {
        let lines = vec!["a", "b", "c"];
        let (start, selected) = select_range(&lines, &ChapterRange::default()).unwrap();
        assert_eq!(start, 1);
        assert_eq!(selected, lines);
    }

    #[test]
    fn select_range_clamps_open_end() {
        let lines = vec!["a", "b", "c", "d", "e"];
        let range = ChapterRange {
            generate_all: false,
            start_index: 3,
            end_index: None,
        };
        let (start, selected) = select_range(&lines, &range).unwrap();
        assert_eq!(start, 3);
        assert_eq!(selected, vec!["c", "d", "e"]);
    }

    #[test]
    fn select_range_rejects_out_of_bounds_start() {
        let lines = vec!["a", "b"];
        let range = ChapterRange {
            generate_all: false,
            start_index: 5,
            end_index: None,
        };
        assert!(select_range(&lines, &range).is_err());
    }
}
