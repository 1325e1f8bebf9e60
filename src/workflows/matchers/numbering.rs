use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::ops::Range;
use std::path::Path;

use super::Matcher;
use crate::domain::models::Episode;
use crate::error::ExtractError;

static NUMBERING: Lazy<Regex> = Lazy::new(|| Regex::new(r"[Ss](\d+)[Ee](\d+)").unwrap());

/// Matches the `SxxEyy` numbering anywhere in a file's base name.
pub struct NumberingMatcher;

impl Matcher for NumberingMatcher {
    fn match_episode(&self, file_path: &Path) -> Result<Option<Episode>, ExtractError> {
        parse_episode(file_path)
    }
}

/// Extract season and episode numbers from the base name of `path`.
///
/// The leftmost occurrence wins when a name carries several.
pub fn parse_episode(path: &Path) -> Result<Option<Episode>, ExtractError> {
    let Some(file_name) = base_name(path) else {
        return Ok(None);
    };
    let Some(caps) = NUMBERING.captures(file_name) else {
        return Ok(None);
    };

    let season = parse_number(path, &caps, 1, "season")?;
    let number = parse_number(path, &caps, 2, "episode")?;

    Ok(Some(Episode {
        season,
        number,
        filename: path.to_path_buf(),
    }))
}

/// Byte range of the leftmost numbering match in `file_name`.
pub fn numbering_span(file_name: &str) -> Option<Range<usize>> {
    NUMBERING.find(file_name).map(|m| m.range())
}

fn base_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|name| name.to_str())
}

fn parse_number(
    path: &Path,
    caps: &Captures,
    group: usize,
    field: &'static str,
) -> Result<u32, ExtractError> {
    // both groups are mandatory in the pattern
    let digits = caps.get(group).map(|m| m.as_str()).unwrap_or_default();
    digits
        .parse()
        .map_err(|source| ExtractError::NumberOutOfRange {
            path: path.to_path_buf(),
            field,
            digits: digits.to_string(),
            source,
        })
}
