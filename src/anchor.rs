//! Anchor slugs: URL fragment identifiers derived from heading text.
//!
//! Every heading that is navigable gets a slug that doubles as its `#fragment`, its HTML `id`,
//! and the key the active-section tracker observes. Two headings with the same text must not
//! share a slug, so slugs are claimed through a [`SlugRegistry`] that lives for one document.

use std::collections::{HashMap, HashSet};

/// Map heading text to a lowercase ASCII slug.
///
/// Non-ASCII characters are transliterated, runs of anything that is not alphanumeric collapse
/// to a single `-`, and leading or trailing separators are stripped. Text with nothing
/// alphanumeric in it yields the empty string, which callers treat as "not navigable".
#[must_use]
pub fn slugify(text: &str) -> String {
    slug::slugify(text.trim())
}

/// Hands out document-unique slugs in document order.
///
/// The first heading to produce a slug keeps it; later ones get `-2`, `-3`, … appended. A
/// suffixed candidate that was already claimed (say by a heading literally titled "Intro 2")
/// is skipped, so uniqueness holds for every non-empty slug claimed through one registry.
#[derive(Debug, Default)]
pub struct SlugRegistry {
    claimed: HashSet<String>,
    next_suffix: HashMap<String, usize>,
}

impl SlugRegistry {
    #[must_use]
    /// Start an empty registry for a new document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slug for `text`, disambiguating against everything claimed so far.
    ///
    /// Empty slugs are returned as-is and never recorded.
    pub fn claim(&mut self, text: &str) -> String {
        let base = slugify(text);
        if base.is_empty() {
            return base;
        }

        if self.claimed.insert(base.clone()) {
            return base;
        }

        let mut suffix = self.next_suffix.get(&base).copied().unwrap_or(2);
        let slug = loop {
            let candidate = format!("{base}-{suffix}");
            suffix += 1;
            if self.claimed.insert(candidate.clone()) {
                break candidate;
            }
        };
        self.next_suffix.insert(base, suffix);
        slug
    }
}

#[cfg(test)]
#[path = "tests/anchor.rs"]
mod tests;
