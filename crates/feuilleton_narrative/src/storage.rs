//! Filesystem layout for one novel's output.
//!
//! A novel's artifacts live under `<output_root>/<title>/`: the outline
//! (append-safe), the world setting (overwrite), and one file per generated
//! chapter. Every operation is open-write-close; nothing holds a file
//! across await points.

use feuilleton_error::{FeuilletonResult, OutlineError, OutlineErrorKind, StorageError};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

const OUTLINE_FILE: &str = "outline.txt";
const WORLD_SETTING_FILE: &str = "world_setting.txt";

/// Directory handle for one novel's output files.
#[derive(Debug, Clone)]
pub struct NovelWorkspace {
    novel_dir: PathBuf,
}

impl NovelWorkspace {
    /// Create the output directory structure for a novel.
    ///
    /// Both the output root and the per-novel subdirectory (named after the
    /// title) are created if absent.
    pub async fn create(output_root: impl AsRef<Path>, title: &str) -> FeuilletonResult<Self> {
        let novel_dir = output_root.as_ref().join(title);

        fs::create_dir_all(&novel_dir)
            .await
            .map_err(|e| StorageError::io(novel_dir.display(), e))?;

        debug!(dir = %novel_dir.display(), "Prepared novel workspace");

        Ok(Self { novel_dir })
    }

    /// The per-novel output directory.
    pub fn novel_dir(&self) -> &Path {
        &self.novel_dir
    }

    /// Path of the outline file.
    pub fn outline_path(&self) -> PathBuf {
        self.novel_dir.join(OUTLINE_FILE)
    }

    /// Path of the world setting file.
    pub fn world_setting_path(&self) -> PathBuf {
        self.novel_dir.join(WORLD_SETTING_FILE)
    }

    /// Append the outline to its file, line-break safe.
    ///
    /// Existing content that does not end in a line break gets one before
    /// the new text, and the appended text always ends in exactly one
    /// trailing line break. Appending twice back-to-back therefore leaves
    /// exactly one line break between the two writes.
    pub async fn append_outline(&self, outline: &str) -> FeuilletonResult<()> {
        let path = self.outline_path();

        let mut content = match fs::read_to_string(&path).await {
            Ok(existing) => existing,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(StorageError::io(path.display(), e).into()),
        };

        if !content.is_empty() && !content.ends_with('\n') {
            content.push('\n');
        }
        content.push_str(outline);
        content.push('\n');

        fs::write(&path, content)
            .await
            .map_err(|e| StorageError::io(path.display(), e))?;

        debug!(path = %path.display(), "Saved outline");
        Ok(())
    }

    /// Overwrite the world setting file.
    pub async fn write_world_setting(&self, text: &str) -> FeuilletonResult<()> {
        let path = self.world_setting_path();
        fs::write(&path, text)
            .await
            .map_err(|e| StorageError::io(path.display(), e))?;

        debug!(path = %path.display(), "Saved world setting");
        Ok(())
    }

    /// Load the persisted world setting.
    ///
    /// # Errors
    ///
    /// Returns [`OutlineErrorKind::MissingWorldSetting`] when the file does
    /// not exist; the context-rich strategy treats that as fatal.
    pub async fn load_world_setting(&self) -> FeuilletonResult<String> {
        let path = self.world_setting_path();
        match fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(OutlineError::new(
                OutlineErrorKind::MissingWorldSetting(path.display().to_string()),
            )
            .into()),
            Err(e) => Err(StorageError::io(path.display(), e).into()),
        }
    }

    /// Write one chapter's prose to `<NNN>[_<title>].txt`.
    ///
    /// The index is zero-padded to three digits; the title suffix is only
    /// present when a title could be derived from the outline line.
    pub async fn write_chapter(
        &self,
        index: usize,
        title: Option<&str>,
        content: &str,
    ) -> FeuilletonResult<PathBuf> {
        let filename = match title {
            Some(title) => format!("{:03}_{}.txt", index, title),
            None => format!("{:03}.txt", index),
        };

        let path = self.novel_dir.join(filename);
        fs::write(&path, content)
            .await
            .map_err(|e| StorageError::io(path.display(), e))?;

        debug!(path = %path.display(), chapter = index, "Saved chapter");
        Ok(path)
    }
}
