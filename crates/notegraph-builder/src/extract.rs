//! Wikilink reference extraction: `[[Note]]`, `[[folder/Note]]`,
//! `[[Note#Heading]]`, `[[Note|display text]]`.
//!
//! This is the only markdown awareness in the engine; full parsing
//! (frontmatter, tags, word counts) happens in an external collaborator.

use regex::Regex;
use std::sync::LazyLock;

/// Matches [[...]] pattern
static WIKILINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").unwrap());

/// Extract all wikilink targets from raw note content, in document order.
///
/// Embeds (`![[...]]`) are excluded. Display-text pipes and heading/block
/// fragments are stripped, so `[[Note#Heading|text]]` yields `Note`.
/// Duplicate targets are kept: multiplicity becomes edge weight.
pub fn extract_link_targets(content: &str) -> Vec<String> {
    WIKILINK_PATTERN
        .captures_iter(content)
        .filter_map(|caps| {
            let start = caps.get(0)?.start();

            // Skip if preceded by ! (it's an embed, not a wikilink)
            if start > 0 && content.as_bytes().get(start - 1) == Some(&b'!') {
                return None;
            }

            let raw_target = caps.get(1)?.as_str();

            // Drop display text: [[target|display]]
            let target = raw_target.split('|').next().unwrap_or(raw_target);
            // Drop heading/block fragments: [[target#heading]]
            let target = target.split('#').next().unwrap_or(target).trim();

            if target.is_empty() {
                None
            } else {
                Some(target.to_string())
            }
        })
        .collect()
}
