//! Serialized novel generation driven by sequenced text-generation calls.
//!
//! This facade crate re-exports the workspace's public surface and hosts the
//! `feuilleton` binary: derive a world setting, expand it into a chapter
//! outline, then generate each chapter's prose with a bounded window of
//! prior chapters as context.

pub mod cli;
mod config;

pub use config::{
    BasicConfig, CharactersSection, FeuilletonConfig, NovelSection, StoryStyleSection,
};

pub use feuilleton_core::{
    ChapterRecord, Character, ContextWindow, GenerateRequest, GenerateResponse, Message,
    NovelConfig, Role,
};
pub use feuilleton_error::{
    BackendError, ConfigError, FeuilletonError, FeuilletonErrorKind, FeuilletonResult, HttpError,
    JsonError, OutlineError, OutlineErrorKind, StorageError, StorageErrorKind,
};
pub use feuilleton_interface::FeuilletonDriver;
pub use feuilleton_models::{AiServiceConfig, AnyDriver, BackendKind, OllamaConfig, OpenAiConfig};
pub use feuilleton_narrative::{
    ChapterGenerator, ChapterRange, GenerationConfig, GenerationMode, NormalizedOutline,
    NovelWorkspace, OutlineGenerator, normalize,
};
