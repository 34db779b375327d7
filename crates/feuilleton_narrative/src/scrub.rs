//! Removal of reasoning-marker spans from generated text.
//!
//! Some backends emit their scratch reasoning between `<think>` markers.
//! Those spans are not part of the narrative output and are discarded
//! wholesale, markers included, before anything is persisted or reused as
//! context.

use regex::Regex;
use std::sync::LazyLock;

static REASONING_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<think>.*?</think>").expect("reasoning span pattern"));

/// Strip every paired `<think>…</think>` span, including across line
/// boundaries, then drop the blank lines the removal leaves behind.
///
/// Text outside the spans is preserved in its original order. An unpaired
/// marker is left untouched.
pub fn strip_reasoning(text: &str) -> String {
    let stripped = REASONING_SPAN.replace_all(text, "");
    stripped
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
