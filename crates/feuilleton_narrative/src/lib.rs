//! Outline and chapter sequencing engine for Feuilleton.
//!
//! This crate stitches multiple text-generation calls into a coherent
//! multi-chapter artifact:
//! - [`OutlineGenerator`] derives a world setting and expands it into a
//!   chapter-by-chapter outline, normalized to one line per chapter.
//! - [`ChapterGenerator`] realizes outline lines sequentially, maintaining a
//!   bounded [`feuilleton_core::ContextWindow`] of recent chapters, with
//!   per-chapter failure isolation.
//! - [`NovelWorkspace`] owns the flat-file layout under the output root.

mod chapter;
mod config;
mod outline;
pub mod prompt;
pub mod scrub;
mod storage;

pub use chapter::ChapterGenerator;
pub use config::{ChapterRange, GenerationConfig, GenerationMode};
pub use outline::{CHAPTER_MARKER, NormalizedOutline, OutlineGenerator, TITLE_SEPARATOR, normalize};
pub use storage::NovelWorkspace;
