use crate::constants::{FALLBACK_LANGUAGES, MAX_FALLBACK_TAGS};
use crate::models::{LabelSet, RepositoryRecord};

/// Keyword rules checked against the lowercased name and description, in order
const KEYWORD_RULES: &[(&[&str], &[&str])] = &[
    (&["ai", "chat", "gpt"], &["AI", "OpenAI"]),
    (&["gemini"], &["Google Gemini", "AI"]),
    (&["prompt"], &["Prompt Engineering"]),
    (&["llm"], &["LLM", "AI"]),
    (&["chatbot", "bot"], &["AI", "Chatbot"]),
    (&["api"], &["API"]),
    (&["web", "frontend"], &["HTML", "CSS", "JavaScript"]),
    (&["react"], &["React"]),
    (&["node"], &["Node.js"]),
    (&["python"], &["Python"]),
    (&["flask"], &["Flask"]),
];

/// Derive tags from repository metadata alone, for repositories whose README
/// yields nothing. Returns at most [`MAX_FALLBACK_TAGS`] labels.
pub fn derive_fallback(repo: &RepositoryRecord) -> LabelSet {
    let mut labels = LabelSet::new();

    if let Some(language) = repo.language.as_deref() {
        if FALLBACK_LANGUAGES.contains(&language) {
            labels.push(language);
        }
    }

    let name = repo.name.to_lowercase();
    let description = repo.description.as_deref().unwrap_or_default().to_lowercase();

    for (keywords, tags) in KEYWORD_RULES {
        let hit = keywords
            .iter()
            .any(|keyword| name.contains(keyword) || description.contains(keyword));
        if hit {
            for tag in *tags {
                labels.push(tag);
            }
        }
    }

    labels.truncate(MAX_FALLBACK_TAGS);
    labels
}
