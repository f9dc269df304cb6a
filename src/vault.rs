//! Reading documents out of a note vault on disk.

use std::{fs, path::Path, time::UNIX_EPOCH};

use anyhow::{Context, Result};
use lazy_regex::regex;
use walkdir::{DirEntry, WalkDir};

use crate::Document;

/// Read every Markdown note under `path` into a document list.
///
/// Hidden files and directories are skipped so things like an
/// `.obsidian/` configuration folder don't contribute tags. The
/// document timestamp is the file's modification time.
pub fn scan(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let mut documents = Vec::new();

    for e in WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let e = e?;
        if !e.file_type().is_file() {
            continue;
        }

        match e.path().extension().and_then(|x| x.to_str()) {
            Some("md") => {}
            _ => {
                log::debug!("scan: skipping non-note {:?}", e.path());
                continue;
            }
        }

        let mtime = e
            .metadata()?
            .modified()
            .with_context(|| format!("scan: no mtime for {:?}", e.path()))?
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let text = fs::read_to_string(e.path())
            .with_context(|| format!("scan: failed to read {:?}", e.path()))?;

        documents.push(Document {
            path: e.path().to_owned(),
            mtime,
            tags: tags(&text),
        });
    }

    Ok(documents)
}

fn is_hidden(e: &DirEntry) -> bool {
    e.depth() > 0
        && e.file_name()
            .to_str()
            .map(|s| s.starts_with('.'))
            .unwrap_or(false)
}

/// Extract inline hashtags from note text, markers included.
///
/// A hashtag is `#` followed by tag characters, with at least one
/// non-digit among them. `#123` is a heading link or an issue number,
/// not a tag.
pub fn tags(text: &str) -> Vec<String> {
    regex!(r"(?:^|\s)(#[0-9A-Za-z_/-]+)")
        .captures_iter(text)
        .map(|c| c[1].to_owned())
        .filter(|t| t[1..].chars().any(|c| !c.is_ascii_digit()))
        .collect()
}
