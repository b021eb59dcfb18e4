//! Mention styling.
//!
//! The platform embeds @-mentions in a message's HTML body as
//! `<spark-mention ...>Name</spark-mention>` spans. This is a narrow,
//! known-format substitution over that fixed tag, not an HTML parser: each
//! distinct extracted name is wrapped wherever it literally occurs in the
//! item's plain-text description. Mention names are assumed to be
//! unambiguous literal substrings of the description.

use once_cell::sync::Lazy;
use regex::Regex;
use roomfeed_core::FeedItem;
use std::collections::HashSet;

/// Inner text is a bounded character set: word characters, spaces, and
/// common name punctuation.
static MENTION_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<spark-mention[^>]*>([\w .'\-]+)</spark-mention>")
        .expect("mention pattern is valid")
});

const STYLE_OPEN: &str = "<span class=\"feed-mention\">";
const STYLE_CLOSE: &str = "</span>";

/// Rewrite mentioned names in the item's description with a styled
/// wrapper. Items without an HTML body are left untouched, so the pass is
/// idempotent on markup-free input.
pub fn style_mentions(item: &mut FeedItem) {
    let Some(html) = item.raw.html.as_deref() else {
        return;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for capture in MENTION_TAG.captures_iter(html) {
        let name = capture.get(1).map(|m| m.as_str()).unwrap_or_default();
        // First occurrence wins; later identical names are not reprocessed.
        if name.is_empty() || !seen.insert(name) {
            continue;
        }
        item.description = item
            .description
            .replace(name, &format!("{STYLE_OPEN}{name}{STYLE_CLOSE}"));
    }
}
