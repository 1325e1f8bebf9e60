use std::path::Path;

use super::matchers::numbering::numbering_span;
use crate::cli::GroupBy;

const UNKNOWN_KEY: &str = "unknown";

/// Series key for `path` under the given strategy.
pub fn series_key(path: &Path, group_by: GroupBy) -> String {
    let key = match group_by {
        GroupBy::Prefix => prefix_key(path).or_else(|| folder_key(path)),
        GroupBy::Folder => folder_key(path),
    };
    key.unwrap_or_else(|| UNKNOWN_KEY.to_string())
}

fn prefix_key(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let span = numbering_span(file_name)?;
    non_empty(normalize_key(&file_name[..span.start]))
}

fn folder_key(path: &Path) -> Option<String> {
    let folder = path.parent()?.file_name()?.to_str()?;
    non_empty(normalize_key(folder))
}

fn non_empty(key: String) -> Option<String> {
    (!key.is_empty()).then_some(key)
}

/// Lowercase `name` and collapse separator runs into single spaces.
pub fn normalize_key(name: &str) -> String {
    name.split(|c: char| {
        c.is_whitespace() || matches!(c, '.' | '_' | '-' | '[' | ']' | '(' | ')' | '{' | '}')
    })
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}
