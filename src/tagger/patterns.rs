use crate::constants::SKILL_SECTION_NAMES;
use regex::Regex;
use std::sync::LazyLock;

/// Group a recognized term belongs to; the table below is ordered by priority
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    AiProduct,
    AiTechnique,
    Language,
    Framework,
    Integration,
    Datastore,
    Tooling,
}

// `(?-u:\b)` is an ASCII word boundary: terms glued to CJK or accented text still match.
const SKILL_TABLE: &[(SkillCategory, &str)] = &[
    (
        SkillCategory::AiProduct,
        r"(?i)(?-u:\b)(OpenAI|GPT-4|GPT-3\.5|ChatGPT|Claude|Gemini|Anthropic|LangChain|LlamaIndex|Hugging Face|Transformers)(?-u:\b)",
    ),
    (
        SkillCategory::AiTechnique,
        r"(?i)(?-u:\b)(Prompt Engineering|Few-shot|Chain of Thought|CoT|Persona-based|RAG|Retrieval Augmented Generation|Fine-tuning|Zero-shot|In-context Learning|Adversarial Prompting)(?-u:\b)",
    ),
    (
        SkillCategory::Language,
        r"(?i)(?-u:\b)(Python|JavaScript|TypeScript|HTML|CSS)(?-u:\b)",
    ),
    (
        SkillCategory::Framework,
        r"(?i)(?-u:\b)(TensorFlow|PyTorch|Scikit-learn|Flask|FastAPI|React|Node\.js|Express)(?-u:\b)",
    ),
    (
        SkillCategory::Integration,
        r"(?i)(?-u:\b)(API|REST|GraphQL|OAuth|JWT|AWS API|Google API|GitHub API)(?-u:\b)",
    ),
    (
        SkillCategory::Datastore,
        r"(?i)(?-u:\b)(PostgreSQL|MongoDB|SQLite|Redis|Firebase)(?-u:\b)",
    ),
    (
        SkillCategory::Tooling,
        r"(?i)(?-u:\b)(Git|GitHub|Docker|VS Code|npm|yarn)(?-u:\b)",
    ),
];

/// A compiled entry of the skill table
pub struct SkillPattern {
    pub category: SkillCategory,
    pub regex: Regex,
}

static SKILL_PATTERNS: LazyLock<Vec<SkillPattern>> = LazyLock::new(|| {
    SKILL_TABLE
        .iter()
        .map(|(category, pattern)| SkillPattern {
            category: *category,
            regex: Regex::new(pattern).expect("skill table patterns are valid"),
        })
        .collect()
});

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let names = SKILL_SECTION_NAMES.join("|");
    Regex::new(&format!(r"(?i)^(##+\s*)?({names})")).expect("section heading pattern is valid")
});

/// Skill patterns in priority order
pub fn skill_patterns() -> &'static [SkillPattern] {
    &SKILL_PATTERNS
}

/// Whether a trimmed line opens a skills section ("## Built With", "Tools", ...)
pub fn is_section_heading(line: &str) -> bool {
    SECTION_HEADING.is_match(line)
}

/// Every recognized term in `text`: table order first, then position in the text.
/// Yields the matched text as written, not normalized.
pub fn find_skills(text: &str) -> impl Iterator<Item = &str> {
    skill_patterns()
        .iter()
        .flat_map(move |pattern| pattern.regex.find_iter(text).map(|m| m.as_str()))
}
