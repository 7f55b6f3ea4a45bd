//! `@username` mention extraction for comment bodies.
//!
//! Comments carry mentions two ways: an explicit list of user ids sent by the
//! editor's mention picker, and `@handle` text typed inline. Handlers resolve
//! the handles to ids and merge both sets with [`merge_mention_ids`].

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::DbId;

/// A handle must start the text or follow a character that cannot be part of
/// a username or an email local part, so `bob@example.com` is not a mention.
const MENTION_PATTERN: &str = r"(?:^|[^A-Za-z0-9_.@])@([A-Za-z0-9_]{3,32})\b";

static MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MENTION_PATTERN).expect("valid regex"));

/// Maximum number of distinct users a single comment may mention.
pub const MAX_MENTIONS_PER_COMMENT: usize = 20;

/// Extract distinct mention handles from comment content, in first-seen order.
pub fn extract_handles(content: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    MENTION_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|handle| seen.insert(handle.to_lowercase()))
        .collect()
}

/// Merge explicit and resolved mention ids into a sorted, de-duplicated list.
pub fn merge_mention_ids(explicit: &[DbId], resolved: &[DbId]) -> Vec<DbId> {
    explicit
        .iter()
        .chain(resolved)
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
