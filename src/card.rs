use crate::constants::{CARD_LINK_LABEL, PLACEHOLDER_TAG};
use crate::models::{LabelSet, RepositoryRecord};
use crate::tagger::derive_fallback;
use serde::Serialize;
use std::fmt;

/// Outbound link on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLink {
    pub href: String,
    pub label: String,
    /// Open in a new browsing context
    pub new_tab: bool,
}

/// Display unit for one repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCard {
    pub title: String,
    /// Never empty
    pub tags: Vec<String>,
    pub link: CardLink,
}

/// Build the card for `repo`.
///
/// Uses `labels` when non-empty, otherwise tags derived from the repository
/// metadata, otherwise a single placeholder chip. The URL is passed through
/// untouched.
pub fn render(repo: &RepositoryRecord, labels: LabelSet) -> ProjectCard {
    let mut tags = if labels.is_empty() {
        derive_fallback(repo)
    } else {
        labels
    }
    .into_vec();

    if tags.is_empty() {
        tags.push(PLACEHOLDER_TAG.to_string());
    }

    ProjectCard {
        title: repo.name.clone(),
        tags,
        link: CardLink {
            href: repo.url.clone(),
            label: CARD_LINK_LABEL.to_string(),
            new_tab: true,
        },
    }
}

impl ProjectCard {
    /// List-item markup for the project list
    pub fn to_html(&self) -> String {
        let chips: String = self
            .tags
            .iter()
            .map(|tag| format!("<span class=\"tech-tag\">{}</span>", escape_html(tag)))
            .collect();
        let target = if self.link.new_tab {
            " target=\"_blank\" rel=\"noopener noreferrer\""
        } else {
            ""
        };

        format!(
            concat!(
                "<li class=\"project-item active\">",
                "<div class=\"project-card\">",
                "<div class=\"project-card-header\"><h3 class=\"project-title\">{title}</h3></div>",
                "<div class=\"project-tech\">{chips}</div>",
                "<a href=\"{href}\"{target} class=\"github-btn\"><span>{label}</span></a>",
                "</div></li>"
            ),
            title = escape_html(&self.title),
            chips = chips,
            href = escape_html(&self.link.href),
            target = target,
            label = escape_html(&self.link.label),
        )
    }
}

impl fmt::Display for ProjectCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📁 {}", self.title)?;
        writeln!(f, "   [{}]", self.tags.join("] ["))?;
        write!(f, "   🔗 {}", self.link.href)
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>) -> RepositoryRecord {
        RepositoryRecord::new(name, None, language, format!("https://github.com/someone/{name}"))
    }

    #[test]
    fn test_render_uses_extracted_labels() {
        let labels: LabelSet = ["LangChain", "FastAPI"].into_iter().collect();
        let card = render(&repo("AI-Tutor", Some("Python")), labels);
        assert_eq!(card.title, "AI-Tutor");
        assert_eq!(card.tags, vec!["LangChain", "FastAPI"]);
        assert_eq!(card.link.href, "https://github.com/someone/AI-Tutor");
        assert!(card.link.new_tab);
    }

    #[test]
    fn test_render_falls_back_to_metadata() {
        let card = render(&repo("foodplannerbot", Some("JavaScript")), LabelSet::new());
        assert_eq!(card.tags, vec!["JavaScript", "AI", "Chatbot"]);
    }

    #[test]
    fn test_render_placeholder_when_nothing_found() {
        let card = render(&repo("Portfolio", None), LabelSet::new());
        assert_eq!(card.tags, vec![PLACEHOLDER_TAG]);
    }

    #[test]
    fn test_render_passes_url_through() {
        let record = RepositoryRecord::new("odd", None, None, "not a url");
        let card = render(&record, LabelSet::new());
        assert_eq!(card.link.href, "not a url");
    }

    #[test]
    fn test_to_html_escapes_text() {
        let labels: LabelSet = ["<b>"].into_iter().collect();
        let card = render(&repo("x&y", None), labels);
        let html = card.to_html();
        assert!(html.contains("x&amp;y"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("target=\"_blank\""));
    }

    #[test]
    fn test_display_lists_tags() {
        let labels: LabelSet = ["Python", "Flask"].into_iter().collect();
        let text = render(&repo("Resume-Tailor-Assistant", None), labels).to_string();
        assert!(text.contains("Resume-Tailor-Assistant"));
        assert!(text.contains("[Python] [Flask]"));
    }
}
