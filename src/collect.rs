use std::{collections::HashSet, path::PathBuf};

use indexmap::IndexMap;

use crate::Settings;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// A note with its last-modified time and the raw tags found in it.
#[derive(Clone, Debug, Default)]
pub struct Document {
    pub path: PathBuf,
    /// Modification time in seconds since the epoch.
    pub mtime: u64,
    /// Tags as they appear in the note, marker characters included.
    pub tags: Vec<String>,
}

/// Count tag occurrences over documents inside the recency window.
///
/// With a nonzero `days_back` in settings, documents modified strictly
/// earlier than `now - days_back` days are dropped; a document sitting
/// exactly at the cutoff still counts. Tags whose lowercased form is
/// on the ignore list are dropped, surviving tags keep the case they
/// were first seen with.
///
/// `now` is epoch seconds and comes in as a parameter, so identical
/// inputs always produce an identical mapping.
pub fn collect(
    documents: &[Document],
    settings: &Settings,
    now: u64,
) -> IndexMap<String, usize> {
    let ignore: HashSet<String> = settings
        .ignore_tags
        .iter()
        .map(|t| t.to_lowercase())
        .collect();

    let cutoff = (settings.days_back > 0).then(|| {
        now.saturating_sub(u64::from(settings.days_back) * SECONDS_PER_DAY)
    });

    let mut counts = IndexMap::new();

    for doc in documents {
        if let Some(cutoff) = cutoff {
            if doc.mtime < cutoff {
                log::debug!("collect: skipping stale note {:?}", doc.path);
                continue;
            }
        }

        for tag in &doc.tags {
            let Some(name) = canonical_tag(tag) else {
                continue;
            };
            if ignore.contains(&name.to_lowercase()) {
                continue;
            }
            *counts.entry(name.to_owned()).or_default() += 1;
        }
    }

    counts
}

/// Strip a single leading marker character like `#` off a tag.
///
/// Returns `None` when nothing is left of the tag afterwards.
pub fn canonical_tag(raw: &str) -> Option<&str> {
    let mut chars = raw.chars();
    let name = match chars.next() {
        Some(c) if !c.is_alphanumeric() => chars.as_str(),
        Some(_) => raw,
        None => return None,
    };
    (!name.is_empty()).then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn doc(mtime: u64, tags: &[&str]) -> Document {
        Document {
            mtime,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    fn settings(days_back: u32, ignore: &[&str]) -> Settings {
        Settings {
            days_back,
            ignore_tags: ignore.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn no_window_includes_everything() {
        let docs = vec![
            doc(0, &["#old"]),
            doc(NOW - 1000 * SECONDS_PER_DAY, &["#ancient", "#old"]),
            doc(NOW, &["#fresh"]),
        ];
        let counts = collect(&docs, &settings(0, &[]), NOW);

        assert_eq!(counts.get("old"), Some(&2));
        assert_eq!(counts.get("ancient"), Some(&1));
        assert_eq!(counts.get("fresh"), Some(&1));
    }

    #[test]
    fn window_boundary_is_strict() {
        let cutoff = NOW - 7 * SECONDS_PER_DAY;
        let docs = vec![
            doc(NOW - 8 * SECONDS_PER_DAY, &["#too-old"]),
            doc(cutoff - 1, &["#just-missed"]),
            doc(cutoff, &["#on-the-line"]),
            doc(NOW - 6 * SECONDS_PER_DAY, &["#recent"]),
        ];
        let counts = collect(&docs, &settings(7, &[]), NOW);

        assert_eq!(counts.get("too-old"), None);
        assert_eq!(counts.get("just-missed"), None);
        assert_eq!(counts.get("on-the-line"), Some(&1));
        assert_eq!(counts.get("recent"), Some(&1));
    }

    #[test]
    fn ignore_is_case_insensitive() {
        let docs = vec![doc(NOW, &["#Daily", "#daily", "#Work"])];
        let counts = collect(&docs, &settings(0, &["DAILY"]), NOW);

        assert!(!counts.contains_key("Daily"));
        assert!(!counts.contains_key("daily"));
        assert_eq!(counts.get("Work"), Some(&1));
    }

    #[test]
    fn ignoring_does_not_change_stored_case() {
        let docs = vec![doc(NOW, &["#Work", "#work"])];
        let counts = collect(&docs, &settings(0, &["daily"]), NOW);

        // Distinct cases stay distinct entries with their own case.
        assert_eq!(counts.get("Work"), Some(&1));
        assert_eq!(counts.get("work"), Some(&1));
    }

    #[test]
    fn markers_are_stripped() {
        assert_eq!(canonical_tag("#foo"), Some("foo"));
        assert_eq!(canonical_tag("@foo"), Some("foo"));
        assert_eq!(canonical_tag("foo"), Some("foo"));
        assert_eq!(canonical_tag("#"), None);
        assert_eq!(canonical_tag(""), None);

        let docs = vec![doc(NOW, &["#foo", "foo", "#"])];
        let counts = collect(&docs, &settings(0, &[]), NOW);
        assert_eq!(counts.get("foo"), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn degenerate_inputs_give_empty_mapping() {
        assert!(collect(&[], &settings(0, &[]), NOW).is_empty());

        let tagless = vec![doc(NOW, &[])];
        assert!(collect(&tagless, &settings(0, &[]), NOW).is_empty());

        let all_ignored = vec![doc(NOW, &["#a", "#b"])];
        assert!(collect(&all_ignored, &settings(0, &["a", "b"]), NOW)
            .is_empty());
    }

    #[test]
    fn counts_accumulate_across_documents() {
        let docs = vec![
            doc(NOW, &["#a", "#b"]),
            doc(NOW, &["#a"]),
            doc(NOW, &["#a", "#b", "#c"]),
        ];
        let counts = collect(&docs, &settings(0, &[]), NOW);

        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&2));
        assert_eq!(counts.get("c"), Some(&1));
    }

    #[test]
    fn collect_is_repeatable() {
        let docs = vec![doc(NOW, &["#a", "#b"]), doc(NOW - 10, &["#a"])];
        let cfg = settings(7, &["b"]);

        assert_eq!(collect(&docs, &cfg, NOW), collect(&docs, &cfg, NOW));
    }
}
