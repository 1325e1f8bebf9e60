use std::path::Path;

use super::grouper::series_key;
use super::matchers::Matcher;
use crate::cli::{GroupBy, Order};
use crate::domain::models::EpisodeMap;
use crate::error::ScanError;
use crate::media::walker::{list_videos, VideoFilter};

#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub filter: VideoFilter,
    pub group_by: GroupBy,
    pub order: Order,
}

#[derive(Debug, Default)]
pub struct ScanReport {
    pub episodes: EpisodeMap,
    pub visited: usize,
    pub skipped: usize,
}

/// Walk `root`, classify every video and group the episodes by series.
///
/// Files that do not carry an episode number are skipped; only a root that
/// cannot be walked fails the scan.
pub fn scan(
    root: &Path,
    matcher: &dyn Matcher,
    options: &ScanOptions,
) -> Result<ScanReport, ScanError> {
    let mut report = ScanReport::default();

    for video in list_videos(root, options.filter.clone())? {
        report.visited += 1;
        tracing::debug!("Processing: {video:?}");

        match matcher.match_episode(&video) {
            Ok(Some(episode)) => {
                let key = series_key(&video, options.group_by);
                report.episodes.insert(key, episode);
            }
            Ok(None) => {
                tracing::debug!("Not a series episode: {video:?}");
                report.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("Skipping {video:?}: {e}");
                report.skipped += 1;
            }
        }
    }

    if options.order == Order::Episode {
        report.episodes.sort_episodes();
    }

    Ok(report)
}
