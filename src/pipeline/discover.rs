//! Wildcard file discovery.
//!
//! Patterns are expanded when the step that consumes them runs, after the
//! earlier steps have written their outputs. Only the file-name component
//! may contain wildcards.

use super::layout::PathTemplate;
use std::path::Path;
use tracing::{debug, warn};

/// Expand a template into tool arguments.
///
/// Concrete templates pass through unchanged. Patterns expand to the
/// matching paths in byte order, rendered relative to `base` the same way
/// the template is. When nothing matches, the pattern itself is returned as
/// the only argument, the way an interactive shell leaves an unmatched glob.
pub fn expand(template: &PathTemplate, base: Option<&Path>) -> Vec<String> {
    if !template.is_pattern() {
        return vec![template.to_string()];
    }

    let matches = matching_names(template, base);
    if matches.is_empty() {
        warn!("No files match {template}; passing the pattern through");
        return vec![template.to_string()];
    }

    debug!("{template} matched {} file(s)", matches.len());
    matches
        .into_iter()
        .map(|name| match template.dir() {
            Some(dir) => format!("{dir}/{name}"),
            None => name,
        })
        .collect()
}

/// Sorted file names in the template's directory matching its pattern.
fn matching_names(template: &PathTemplate, base: Option<&Path>) -> Vec<String> {
    let base = base.unwrap_or_else(|| Path::new("."));
    let dir = template.dir().map_or_else(|| base.to_path_buf(), |d| base.join(d));

    let entries = match std::fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot list {}: {e}", dir.display());
            return Vec::new();
        }
    };

    let pattern = template.file_name();
    let mut names: Vec<String> = entries
        .filter_map(std::result::Result::ok)
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                debug!(
                    "Skipping non-UTF-8 file name {} in {}",
                    raw.to_string_lossy(),
                    dir.display()
                );
                None
            }
        })
        .filter(|name| !name.starts_with('.') || pattern.starts_with('.'))
        .filter(|name| wildcard_match(pattern, name))
        .collect();
    names.sort();
    names
}

/// Match `name` against a pattern where `*` matches any run of characters
/// and `?` matches exactly one.
pub fn wildcard_match(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` and the name index it was tried at.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some(&c) if c == '?' || c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, tried)) => {
                    p = star + 1;
                    n = tried + 1;
                    backtrack = Some((star, tried + 1));
                }
                None => return false,
            },
        }
    }

    pattern[p..].iter().all(|&c| c == '*')
}
