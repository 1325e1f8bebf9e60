use std::path::Path;

use crate::domain::models::Episode;
use crate::error::ExtractError;

/// Classifies a single file as an episode.
///
/// `Ok(None)` means the file simply does not look like an episode.
pub trait Matcher {
    fn match_episode(&self, file_path: &Path) -> Result<Option<Episode>, ExtractError>;
}

pub mod numbering;
