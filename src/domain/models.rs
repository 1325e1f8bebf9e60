use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Episode {
    pub season: u32,
    pub number: u32,
    #[serde(serialize_with = "serialize_lossy")]
    pub filename: PathBuf,
}

// Non UTF-8 bytes become U+FFFD instead of failing the whole report.
fn serialize_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Episodes bucketed by series key.
///
/// Keys iterate in sorted order; each bucket keeps the order episodes were
/// inserted in until [`EpisodeMap::sort_episodes`] is called.
#[derive(Debug, Serialize, Default, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct EpisodeMap {
    groups: BTreeMap<String, Vec<Episode>>,
}

impl EpisodeMap {
    pub fn insert(&mut self, key: String, episode: Episode) {
        self.groups.entry(key).or_default().push(episode);
    }

    pub fn get(&self, key: &str) -> Option<&[Episode]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Episode])> {
        self.groups
            .iter()
            .map(|(key, episodes)| (key.as_str(), episodes.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn episode_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Sort every bucket by season, then episode number.
    pub fn sort_episodes(&mut self) {
        for episodes in self.groups.values_mut() {
            episodes.sort_by_key(|e| (e.season, e.number));
        }
    }
}
