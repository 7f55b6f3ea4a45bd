//! Tag name normalization and validation.

use std::collections::BTreeSet;

use crate::error::CoreError;

/// Maximum length of a normalized tag name.
pub const MAX_TAG_LENGTH: usize = 35;

/// Maximum number of tags on a single question.
pub const MAX_TAGS_PER_QUESTION: usize = 10;

/// Normalize a tag name: trimmed, lowercase, inner whitespace collapsed to `-`.
pub fn normalize_tag_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Normalize, de-duplicate and validate the tag list submitted with a question.
///
/// Blank entries are dropped. Order of first appearance is preserved.
pub fn normalize_tag_list(tags: &[String]) -> Result<Vec<String>, CoreError> {
    let mut seen = BTreeSet::new();
    let mut normalized = Vec::with_capacity(tags.len());

    for raw in tags {
        let name = normalize_tag_name(raw);
        if name.is_empty() {
            continue;
        }
        if name.chars().count() > MAX_TAG_LENGTH {
            return Err(CoreError::Validation(format!(
                "Tag '{name}' exceeds maximum length of {MAX_TAG_LENGTH} characters"
            )));
        }
        if seen.insert(name.clone()) {
            normalized.push(name);
        }
    }

    if normalized.len() > MAX_TAGS_PER_QUESTION {
        return Err(CoreError::Validation(format!(
            "A question may have at most {MAX_TAGS_PER_QUESTION} tags"
        )));
    }

    Ok(normalized)
}
