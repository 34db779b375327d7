use feuilleton::{FeuilletonConfig, GenerationMode};
use std::io::Write;

const FULL_CONFIG: &str = r#"
ai_service:
  provider: openai
  openai:
    base_url: https://api.openai.com
    api_key: sk-test
    model: gpt-4o-mini
    temperature: 0.8
    max_tokens: 1800
basic:
  language: zh
novel:
  title: 星河入梦
  total_chapters: 20
  words_per_chapter: 2000
characters:
  female_lead:
    name: 林晚星
    personality: 坚强独立的服装设计师
  male_lead:
    name: 顾沉舟
    personality: 外冷内热的建筑师
story_style:
  genre: 现代都市言情
  tone: 温暖治愈
  plot_elements:
    - 咖啡厅偶遇
    - 误会与和解
    - 雨夜告白
generation:
  mode: context_free
  max_previous_chapters: 2
  output_dir: build/novels
  chapters:
    generate_all: false
    start_index: 3
    end_index: 5
"#;

const MINIMAL_CONFIG: &str = r#"
ai_service:
  provider: ollama
  ollama:
    base_url: http://localhost:11434
    model: qwen2.5
novel:
  title: 灯塔来信
  total_chapters: 5
  words_per_chapter: 1500
characters:
  female_lead:
    name: 苏青
    personality: 安静爱书的店主
  male_lead:
    name: 陈屿
    personality: 守灯塔的摄影师
story_style:
  genre: 治愈系言情
  tone: 温柔怀旧
  plot_elements:
    - 灯塔初识
"#;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_document_parses() {
    let file = write_config(FULL_CONFIG);
    let config = FeuilletonConfig::load(file.path()).unwrap();

    assert_eq!(config.ai_service.provider, "openai");
    let openai = config.ai_service.openai.as_ref().unwrap();
    assert_eq!(openai.model, "gpt-4o-mini");
    assert_eq!(openai.max_tokens, 1800);

    assert_eq!(config.generation.mode, GenerationMode::ContextFree);
    assert_eq!(config.generation.max_previous_chapters, 2);
    assert_eq!(config.generation.output_dir, "build/novels");
    assert!(!config.generation.chapters.generate_all);
    assert_eq!(config.generation.chapters.start_index, 3);
    assert_eq!(config.generation.chapters.end_index, Some(5));
}

#[test]
fn omitted_sections_fall_back_to_defaults() {
    let file = write_config(MINIMAL_CONFIG);
    let config = FeuilletonConfig::load(file.path()).unwrap();

    assert_eq!(config.basic.language, "zh");
    assert_eq!(config.generation.mode, GenerationMode::ContextRich);
    assert_eq!(config.generation.max_previous_chapters, 1);
    assert_eq!(config.generation.output_dir, "output");
    assert!(config.generation.chapters.generate_all);

    let ollama = config.ai_service.ollama.as_ref().unwrap();
    assert_eq!(ollama.temperature, 0.5);
}

#[test]
fn novel_config_assembles_from_sections() {
    let file = write_config(FULL_CONFIG);
    let config = FeuilletonConfig::load(file.path()).unwrap();
    let novel = config.novel_config().unwrap();

    assert_eq!(novel.title(), "星河入梦");
    assert_eq!(*novel.total_chapters(), 20);
    assert_eq!(novel.female_lead().name(), "林晚星");
    assert_eq!(novel.plot_elements().len(), 3);
}

#[test]
fn missing_required_section_is_an_error() {
    let without_characters = FULL_CONFIG.replace("characters:", "ignored:");
    let file = write_config(&without_characters);
    assert!(FeuilletonConfig::load(file.path()).is_err());
}

#[test]
fn missing_file_is_an_error() {
    let err = FeuilletonConfig::load("does/not/exist.yaml").unwrap_err();
    assert!(format!("{}", err).contains("does/not/exist.yaml"));
}
