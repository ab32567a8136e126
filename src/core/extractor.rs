//! Policy file walker and `rc.type` extraction.
//!
//! Every regular file under the policy root is read, decoded lossily and searched for
//! `rc.type is "<value>"`. Unreadable files are reported on stderr and skipped.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Result, bail};
use colored::Colorize;
use glob::Pattern;
use regex::Regex;
use walkdir::WalkDir;

use crate::core::types::Occurrence;

/// `\s` also matches newlines, so the keyword and value may sit on separate lines.
static RC_TYPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"rc\.type\s+is\s+"([^"]+)""#).unwrap());

/// A file or walk entry that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}

/// Result of walking a policy directory.
#[derive(Debug, Default)]
pub struct ExtractResult {
    pub occurrences: Vec<Occurrence>,
    pub files_scanned: usize,
    pub skipped: Vec<SkippedFile>,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths relative to the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled form of the config `ignores` list.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(root: &Path, ignores: &[String]) -> Self {
        let mut literal_paths = Vec::new();
        let mut globs = Vec::new();

        for p in ignores {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    ),
                }
            } else {
                literal_paths.push(root.join(p));
            }
        }

        Self {
            literal_paths,
            globs,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }
        let path_str = path.to_string_lossy();
        self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// Pull every `rc.type is "..."` value out of a block of text.
///
/// Captured values are trimmed of surrounding whitespace.
pub fn extract_from_text(content: &str) -> Vec<String> {
    RC_TYPE_REGEX
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Walk `root` recursively and extract occurrences from every file.
///
/// Fails only when `root` is not an existing directory. Individual read failures are
/// logged and collected in [`ExtractResult::skipped`].
pub fn extract_occurrences(root: &Path, ignores: &[String]) -> Result<ExtractResult> {
    if !root.is_dir() {
        bail!("Policy directory not found: {}", root.display());
    }

    let ignore_set = IgnoreSet::new(root, ignores);
    let mut result = ExtractResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !ignore_set.is_ignored(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                warn_skipped(&path, &e.to_string());
                result.skipped.push(SkippedFile {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                let path = path.display().to_string();
                warn_skipped(&path, &e.to_string());
                result.skipped.push(SkippedFile {
                    path,
                    error: e.to_string(),
                });
                continue;
            }
        };

        result.files_scanned += 1;
        let content = String::from_utf8_lossy(&bytes);
        let filename = entry.file_name().to_string_lossy();
        result.occurrences.extend(
            extract_from_text(&content)
                .into_iter()
                .map(|resource_type| Occurrence::new(filename.as_ref(), resource_type)),
        );
    }

    Ok(result)
}

fn warn_skipped(path: &str, error: &str) {
    eprintln!(
        "{} couldn't read file {}: {}",
        "warning:".bold().yellow(),
        path,
        error
    );
}
