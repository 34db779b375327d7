use async_trait::async_trait;
use feuilleton_core::{Character, GenerateRequest, GenerateResponse, NovelConfig};
use feuilleton_error::{BackendError, FeuilletonResult};
use feuilleton_interface::FeuilletonDriver;
use feuilleton_narrative::{ChapterGenerator, ChapterRange, GenerationMode, NovelWorkspace};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

const OUTLINE: &str = "第1章 初见：咖啡厅偶遇\n第2章 误会：图纸风波\n第3章 和解：雨夜告白\n第4章 重逢：他乡再见\n第5章 终章：婚礼钟声";

/// Mock driver that echoes a chapter body and records every prompt it sees.
struct RecordingDriver {
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
}

impl RecordingDriver {
    fn new() -> Self {
        Self {
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail_on_call: None,
        }
    }

    fn failing_on(call: usize) -> Self {
        Self {
            fail_on_call: Some(call),
            ..Self::new()
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl FeuilletonDriver for RecordingDriver {
    async fn generate(&self, req: &GenerateRequest) -> FeuilletonResult<GenerateResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.prompts
            .lock()
            .unwrap()
            .push(req.messages[0].content().clone());

        if self.fail_on_call == Some(call) {
            return Err(BackendError::new("simulated backend outage").into());
        }

        Ok(GenerateResponse {
            text: format!("第{}次调用的正文", call),
        })
    }

    fn provider_name(&self) -> &'static str {
        "recording"
    }

    fn model_name(&self) -> &str {
        "recording-v1"
    }
}

fn novel() -> NovelConfig {
    NovelConfig::builder()
        .language("zh")
        .title("星河入梦")
        .total_chapters(5u32)
        .words_per_chapter(2000u32)
        .genre("现代都市言情")
        .tone("温暖治愈")
        .plot_elements(vec!["咖啡厅偶遇".to_string(), "雨夜告白".to_string()])
        .female_lead(Character::new("林晚星", "坚强独立的服装设计师"))
        .male_lead(Character::new("顾沉舟", "外冷内热的建筑师"))
        .build()
        .unwrap()
}

async fn workspace_with_world_setting(dir: &tempfile::TempDir) -> NovelWorkspace {
    let workspace = NovelWorkspace::create(dir.path(), "星河入梦").await.unwrap();
    workspace
        .write_world_setting("现代都市，设计工作室与建筑事务所比邻而居。")
        .await
        .unwrap();
    workspace
}

#[tokio::test]
async fn sub_range_keeps_full_outline_numbering() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = workspace_with_world_setting(&dir).await;
    let driver = RecordingDriver::new();

    let range = ChapterRange {
        generate_all: false,
        start_index: 3,
        end_index: Some(5),
    };

    let mut generator =
        ChapterGenerator::new(&driver, &workspace, GenerationMode::ContextRich, 1);
    let chapters = generator
        .generate_chapters(OUTLINE, &novel(), &range)
        .await
        .unwrap();

    let indices: Vec<usize> = chapters.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![3, 4, 5]);

    // Filenames carry the full-outline numbers, not 1..=3.
    assert!(workspace.novel_dir().join("003_和解.txt").exists());
    assert!(workspace.novel_dir().join("004_重逢.txt").exists());
    assert!(workspace.novel_dir().join("005_终章.txt").exists());
    assert!(!workspace.novel_dir().join("001_初见.txt").exists());

    // Prompts name the real chapter numbers too.
    let prompts = driver.prompts();
    assert!(prompts[0].contains("当前章节: 3"));
    assert!(prompts[2].contains("当前章节: 5"));
}

#[tokio::test]
async fn failed_chapter_is_skipped_and_loop_continues() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = workspace_with_world_setting(&dir).await;
    let driver = RecordingDriver::failing_on(2);

    let outline = "第1章 初见：咖啡厅偶遇\n第2章 误会：图纸风波\n第3章 和解：雨夜告白";
    let mut generator =
        ChapterGenerator::new(&driver, &workspace, GenerationMode::ContextRich, 1);
    let chapters = generator
        .generate_chapters(outline, &novel(), &ChapterRange::default())
        .await
        .unwrap();

    let indices: Vec<usize> = chapters.iter().map(|c| c.index).collect();
    assert_eq!(indices, vec![1, 3]);

    assert!(workspace.novel_dir().join("001_初见.txt").exists());
    assert!(!workspace.novel_dir().join("002_误会.txt").exists());
    assert!(workspace.novel_dir().join("003_和解.txt").exists());
}

#[tokio::test]
async fn window_capacity_bounds_prompt_context() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = workspace_with_world_setting(&dir).await;
    let driver = RecordingDriver::new();

    let mut generator =
        ChapterGenerator::new(&driver, &workspace, GenerationMode::ContextRich, 1);
    generator
        .generate_chapters(OUTLINE, &novel(), &ChapterRange::default())
        .await
        .unwrap();

    let prompts = driver.prompts();

    // First chapter sees the fixed no-prior-chapters placeholder.
    assert!(prompts[0].contains("这是第一章，没有前文内容。"));

    // Third chapter sees chapter 2's content but not chapter 1's: the
    // window holds a single record.
    assert!(prompts[2].contains("第2次调用的正文"));
    assert!(!prompts[2].contains("第1次调用的正文"));
}

#[tokio::test]
async fn context_free_mode_ignores_world_setting_and_history() {
    let dir = tempfile::tempdir().unwrap();
    // No world setting file on purpose: the context-free strategy must not
    // need it.
    let workspace = NovelWorkspace::create(dir.path(), "星河入梦").await.unwrap();
    let driver = RecordingDriver::new();

    let mut generator =
        ChapterGenerator::new(&driver, &workspace, GenerationMode::ContextFree, 1);
    let chapters = generator
        .generate_chapters(OUTLINE, &novel(), &ChapterRange::default())
        .await
        .unwrap();

    assert_eq!(chapters.len(), 5);

    let prompts = driver.prompts();
    assert!(!prompts[1].contains("世界观设定"));
    assert!(!prompts[1].contains("前文概要"));
    assert!(prompts[1].contains("本章大纲: 第2章 误会：图纸风波"));
}

#[tokio::test]
async fn context_rich_mode_requires_world_setting() {
    let dir = tempfile::tempdir().unwrap();
    let workspace = NovelWorkspace::create(dir.path(), "星河入梦").await.unwrap();
    let driver = RecordingDriver::new();

    let mut generator =
        ChapterGenerator::new(&driver, &workspace, GenerationMode::ContextRich, 1);
    let err = generator
        .generate_chapters(OUTLINE, &novel(), &ChapterRange::default())
        .await
        .unwrap_err();

    assert!(format!("{}", err).contains("World setting file not found"));
    assert!(driver.prompts().is_empty());
}
