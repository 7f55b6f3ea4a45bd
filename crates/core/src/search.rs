//! Question search modes.
//!
//! Search is a case-insensitive substring match; the mode picks which fields
//! participate. This module lives in `core` so the repository layer and the
//! handlers agree on the accepted `?type=` values.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// Maximum accepted length of a search query.
pub const MAX_QUERY_LENGTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Title, description, owner username or tag name.
    #[default]
    All,
    Title,
    /// Owner username.
    User,
    /// Tag name.
    Tag,
}

impl FromStr for SearchType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "all" => Ok(SearchType::All),
            "title" => Ok(SearchType::Title),
            "user" => Ok(SearchType::User),
            "tag" => Ok(SearchType::Tag),
            other => Err(CoreError::Validation(format!(
                "Invalid search type '{other}'. Must be one of: all, title, user, tag"
            ))),
        }
    }
}

/// Trim the raw query and enforce the length limit.
pub fn normalize_query(raw: &str) -> Result<String, CoreError> {
    let query = raw.trim();
    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(CoreError::Validation(format!(
            "Search query exceeds maximum length of {MAX_QUERY_LENGTH} characters"
        )));
    }
    Ok(query.to_string())
}

/// Build an `ILIKE` pattern matching `query` anywhere, escaping wildcards.
pub fn contains_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_type_means_all() {
        assert_eq!("".parse::<SearchType>().unwrap(), SearchType::All);
        assert_eq!("tag".parse::<SearchType>().unwrap(), SearchType::Tag);
        assert!("body".parse::<SearchType>().is_err());
    }

    #[test]
    fn pattern_escapes_like_wildcards() {
        assert_eq!(contains_pattern("rust"), "%rust%");
        assert_eq!(contains_pattern("100%_done"), "%100\\%\\_done%");
    }

    #[test]
    fn query_is_trimmed_and_capped() {
        assert_eq!(normalize_query("  axum ").unwrap(), "axum");
        assert!(normalize_query(&"q".repeat(MAX_QUERY_LENGTH + 1)).is_err());
    }
}
