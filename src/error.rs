use std::num::ParseIntError;
use std::path::PathBuf;

/// Failures that stop a scan before any episode is classified.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The root folder itself could not be opened.
    #[error("cannot walk {}", path.display())]
    TraversalRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A `~` path was given but no home directory is known.
    #[error("cannot expand {}: home directory not found", path.display())]
    HomeUnavailable { path: PathBuf },

    /// `~user` style paths are not resolved.
    #[error("unsupported home shorthand in {}: only `~` and `~/...` are expanded", path.display())]
    UnsupportedHome { path: PathBuf },
}

/// Failures while turning a matched filename into an episode.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("{field} number `{digits}` is out of range in {}", path.display())]
    NumberOutOfRange {
        path: PathBuf,
        field: &'static str,
        digits: String,
        #[source]
        source: ParseIntError,
    },
}
