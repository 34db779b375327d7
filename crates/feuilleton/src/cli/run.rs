//! Pipeline orchestration for the binary.

use crate::FeuilletonConfig;
use feuilleton_core::ChapterRecord;
use feuilleton_error::FeuilletonResult;
use feuilleton_models::AnyDriver;
use feuilleton_narrative::{ChapterGenerator, NovelWorkspace, OutlineGenerator};
use std::time::Instant;
use tracing::info;

/// What a completed run reports back to the console.
#[derive(Debug)]
pub struct RunSummary {
    /// Chapters that were actually generated (may be fewer than the outline)
    pub chapters: Vec<ChapterRecord>,
    /// Wall-clock seconds for the whole run
    pub elapsed_secs: f64,
}

impl RunSummary {
    /// A short boundary-safe preview of the last generated chapter.
    pub fn last_chapter_preview(&self) -> Option<String> {
        let last = self.chapters.last()?;
        let preview: String = last.content.chars().take(200).collect();
        if last.content.chars().count() > 200 {
            Some(format!("{}...", preview))
        } else {
            Some(preview)
        }
    }
}

/// Run the full pipeline: outline, then chapters.
///
/// Everything before the chapter loop is fatal; failures inside the loop
/// are isolated per chapter by the generator itself.
pub async fn run_novel(config: &FeuilletonConfig) -> FeuilletonResult<RunSummary> {
    let start = Instant::now();

    let novel = config.novel_config()?;
    let driver = AnyDriver::from_config(&config.ai_service)?;
    let workspace = NovelWorkspace::create(&config.generation.output_dir, novel.title()).await?;

    let outline = OutlineGenerator::new(&driver, &workspace)
        .generate(&novel)
        .await?;

    let mut generator = ChapterGenerator::new(
        &driver,
        &workspace,
        config.generation.mode,
        config.generation.max_previous_chapters,
    );
    let chapters = generator
        .generate_chapters(&outline.outline, &novel, &config.generation.chapters)
        .await?;

    info!(
        generated = chapters.len(),
        outlined = outline.chapter_count(),
        "Run complete"
    );

    Ok(RunSummary {
        chapters,
        elapsed_secs: start.elapsed().as_secs_f64(),
    })
}
