use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ScanError;

pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "mkv", "mp4", "avi", "m4v", "mov", "wmv", "webm", "ts", "m2ts", "mpg", "mpeg", "flv", "ogv",
];

/// Decides which walked files are handed to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFilter {
    // None lets every regular file through
    extensions: Option<Vec<String>>,
}

impl VideoFilter {
    pub fn extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();
        Self {
            extensions: Some(extensions),
        }
    }

    pub fn all_files() -> Self {
        Self { extensions: None }
    }

    /// True for an allow-list with no extensions left in it.
    pub fn accepts_nothing(&self) -> bool {
        matches!(&self.extensions, Some(extensions) if extensions.is_empty())
    }

    pub fn accepts(&self, path: &Path) -> bool {
        let Some(extensions) = &self.extensions else {
            return true;
        };
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(ext)))
            .unwrap_or(false)
    }
}

impl Default for VideoFilter {
    fn default() -> Self {
        Self::extensions(DEFAULT_EXTENSIONS)
    }
}

/// Lazy walk over the video files below a root folder.
///
/// Entries come out sorted by file name within each directory. Entries that
/// cannot be read are skipped.
pub struct VideoWalker {
    entries: walkdir::IntoIter,
    filter: VideoFilter,
}

impl Iterator for VideoWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            match self.entries.next()? {
                Ok(entry) => {
                    if entry.file_type().is_file() && self.filter.accepts(entry.path()) {
                        return Some(entry.into_path());
                    }
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable entry: {e}");
                }
            }
        }
    }
}

/// Recursively list the video files under `root`.
///
/// Fails only when `root` itself cannot be opened; a root that is a file is
/// walked as a single entry.
pub fn list_videos(root: &Path, filter: VideoFilter) -> Result<VideoWalker, ScanError> {
    let root_error = |source| ScanError::TraversalRoot {
        path: root.to_path_buf(),
        source,
    };

    let metadata = fs::metadata(root).map_err(root_error)?;
    if metadata.is_dir() {
        fs::read_dir(root).map_err(root_error)?;
    }

    let entries = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    Ok(VideoWalker { entries, filter })
}
