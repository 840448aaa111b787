use crate::constants::MAX_EXTRACTED_TAGS;
use crate::models::LabelSet;
use crate::tagger::patterns::{find_skills, is_section_heading};

const BULLET_MARKERS: &[&str] = &["- ", "* ", "• "];

/// Extract skill tags from a README-like document.
///
/// Lines inside a skills section ("## Built With", "Tools", ...) are scanned
/// bullet by bullet; every line is also scanned as plain text. The first empty
/// line inside a skills section ends the whole scan. Returns at most
/// [`MAX_EXTRACTED_TAGS`] labels in first-seen order.
pub fn extract(text: &str) -> LabelSet {
    let mut labels = LabelSet::new();
    let mut in_skills_section = false;

    for line in text.lines() {
        let line = line.trim();

        if is_section_heading(line) {
            in_skills_section = true;
            continue;
        }

        if in_skills_section {
            if let Some(item) = strip_bullet(line) {
                collect(&mut labels, item);
            } else if line.is_empty() {
                break;
            }
        }

        collect(&mut labels, line);
    }

    labels.truncate(MAX_EXTRACTED_TAGS);
    labels
}

fn strip_bullet(line: &str) -> Option<&str> {
    BULLET_MARKERS
        .iter()
        .find(|marker| line.starts_with(*marker))
        .map(|marker| line[marker.len()..].trim_start())
}

fn collect(labels: &mut LabelSet, text: &str) {
    for skill in find_skills(text) {
        labels.push(skill);
    }
}
