//! Prompt templates for the generation pipeline.
//!
//! Each function renders one complete prompt from the novel description and
//! whatever accumulated context the stage has. The wording is part of the
//! system's observable behavior: the outline prompt in particular pins the
//! one-line-per-chapter grammar that normalization later enforces.

use feuilleton_core::NovelConfig;

/// Placeholder used as the context summary when no prior chapters exist.
pub const NO_PRIOR_CHAPTERS: &str = "这是第一章，没有前文内容。";

/// Prompt for the one-off world/character/conflict description.
pub fn world_setting(novel: &NovelConfig) -> String {
    format!(
        "请为一部言情小说创作世界观设定，包括时代背景、主要场景、人物关系和核心冲突，要求：
- 小说标题：{title}
- 小说语言：{language}
- 总章节数：{total_chapters}章
- 女主角名字：{female_name}，性格：{female_personality}
- 男主角名字：{male_name}，性格：{male_personality}
- 故事类型：{genre}
- 感情基调：{tone}
- 重要剧情元素：{plot_elements}

直接输出设定内容，不要输出任何解释说明。",
        title = novel.title(),
        language = novel.language(),
        total_chapters = novel.total_chapters(),
        female_name = novel.female_lead().name(),
        female_personality = novel.female_lead().personality(),
        male_name = novel.male_lead().name(),
        male_personality = novel.male_lead().personality(),
        genre = novel.genre(),
        tone = novel.tone(),
        plot_elements = novel.plot_elements().join("、"),
    )
}

/// Prompt for the chapter-by-chapter outline, conditioned on the world setting.
pub fn outline(novel: &NovelConfig, world_setting: &str) -> String {
    format!(
        "基于以下世界观设定，为这部言情小说生成详细的章节大纲：

{world_setting}

要求：
- 小说标题：{title}
- 小说语言：{language}
- 总章节数：{total_chapters}章
- 女主角名字：{female_name}，性格：{female_personality}
- 男主角名字：{male_name}，性格：{male_personality}
- 故事类型：{genre}
- 感情基调：{tone}
- 重要剧情元素：{plot_elements}

输出格式要求：
- 每章大纲必须只占一行
- 每行格式为：第X章 章节名：章节内容概要
- 不要输出多余的空行
- 不要输出序号或其他格式

示例格式：
第1章 初见：男女主角在咖啡厅偶遇，开启故事
第2章 误会：一场误会导致两人产生矛盾
...",
        world_setting = world_setting,
        title = novel.title(),
        language = novel.language(),
        total_chapters = novel.total_chapters(),
        female_name = novel.female_lead().name(),
        female_personality = novel.female_lead().personality(),
        male_name = novel.male_lead().name(),
        male_personality = novel.male_lead().personality(),
        genre = novel.genre(),
        tone = novel.tone(),
        plot_elements = novel.plot_elements().join("、"),
    )
}

/// Context-rich chapter prompt: world setting, full outline, and the recent
/// chapter window all bias the generation.
pub fn chapter_rich(
    novel: &NovelConfig,
    chapter_number: usize,
    outline_line: &str,
    full_outline: &str,
    world_setting: &str,
    previous_summary: &str,
) -> String {
    format!(
        "基于以下背景信息生成小说章节，要求内容连贯自然，适合读者阅读：

1. 世界观设定：
{world_setting}

2. 完整大纲：
{full_outline}

3. 前文概要：
{previous_summary}

4. 当前章节信息：
- 小说标题: {title}
- 当前章节: {chapter_number}
- 字数要求: {words_per_chapter}字
- 小说类型: {genre}
- 感情基调: {tone}
- 女主角: {female_name}，性格：{female_personality}
- 男主角: {male_name}，性格：{male_personality}
- 本章大纲: {outline_line}

创作要求：
1. 场景描写：
- 选择1-2个核心场景，不要频繁跳转
- 场景细节要丰富，渲染氛围
- 通过环境烘托人物心理

2. 情节发展：
- 以一条主要情节线索为主
- 情节推进要循序渐进，不要跳跃
- 每个转折都要有合理铺垫
- 人物对话和行为要符合性格特点

3. 情感表达：
- 通过细节体现情感变化
- 保持情感基调的连贯性
- 感情发展要自然，不要突兀

4. 写作要求：
- 保持与前文的连贯性
- 为下章内容做好铺垫
- 直接输出小说内容，不要输出任何解释说明",
        world_setting = world_setting,
        full_outline = full_outline,
        previous_summary = previous_summary,
        title = novel.title(),
        chapter_number = chapter_number,
        words_per_chapter = novel.words_per_chapter(),
        genre = novel.genre(),
        tone = novel.tone(),
        female_name = novel.female_lead().name(),
        female_personality = novel.female_lead().personality(),
        male_name = novel.male_lead().name(),
        male_personality = novel.male_lead().personality(),
        outline_line = outline_line,
    )
}

/// Context-free chapter prompt: only the static novel description and the
/// chapter's own outline line.
pub fn chapter_simple(novel: &NovelConfig, chapter_number: usize, outline_line: &str) -> String {
    format!(
        "根据以下信息生成小说章节，要求内容连贯自然，适合读者阅读：

- 小说标题: {title}
- 当前章节: {chapter_number}
- 字数要求: {words_per_chapter}字
- 小说类型: {genre}
- 感情基调: {tone}
- 女主角: {female_name}，性格：{female_personality}
- 男主角: {male_name}，性格：{male_personality}
- 本章大纲: {outline_line}

直接输出小说内容，不要输出任何解释说明。",
        title = novel.title(),
        chapter_number = chapter_number,
        words_per_chapter = novel.words_per_chapter(),
        genre = novel.genre(),
        tone = novel.tone(),
        female_name = novel.female_lead().name(),
        female_personality = novel.female_lead().personality(),
        male_name = novel.male_lead().name(),
        male_personality = novel.male_lead().personality(),
        outline_line = outline_line,
    )
}
