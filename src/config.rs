use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::cli::{Cli, GroupBy, Order, OutputFormat};
use crate::error::ScanError;
use crate::media::walker::VideoFilter;

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub extensions: Option<Vec<String>>,
    pub group_by: Option<GroupBy>,
    pub order: Option<Order>,
    pub format: Option<OutputFormat>,
}

/// Effective settings after merging the command line over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub root: PathBuf,
    pub filter: VideoFilter,
    pub group_by: GroupBy,
    pub order: Order,
    pub format: OutputFormat,
}

impl Settings {
    pub fn resolve(cli: &Cli, file: ConfigFile) -> Result<Self> {
        let filter = if cli.all_files {
            VideoFilter::all_files()
        } else if let Some(extensions) = cli.extensions.as_ref().or(file.extensions.as_ref()) {
            VideoFilter::extensions(extensions)
        } else {
            VideoFilter::default()
        };
        if filter.accepts_nothing() {
            bail!("Extension list is empty: give at least one extension or use --all-files");
        }

        Ok(Self {
            root: expand_home(&cli.folder)?,
            filter,
            group_by: cli.group_by.or(file.group_by).unwrap_or_default(),
            order: cli.order.or(file.order).unwrap_or_default(),
            format: cli.format.or(file.format).unwrap_or_default(),
        })
    }
}

/// Load the config file.
///
/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let config_path = match explicit {
        Some(path) => {
            let path = expand_home(path)?;
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => {
            let path = get_config_path();
            if !path.exists() {
                return Ok(ConfigFile::default());
            }
            path
        }
    };

    tracing::debug!("Using config file: {}", config_path.display());
    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    Ok(config)
}

/// Resolve a leading `~` against the home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf, ScanError> {
    expand_home_with(path, dirs::home_dir())
}

fn expand_home_with(path: &Path, home: Option<PathBuf>) -> Result<PathBuf, ScanError> {
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };
    let Some(first) = first.to_str() else {
        return Ok(path.to_path_buf());
    };

    if first == "~" {
        let home = home.ok_or_else(|| ScanError::HomeUnavailable {
            path: path.to_path_buf(),
        })?;
        Ok(home.join(components.as_path()))
    } else if first.starts_with('~') {
        Err(ScanError::UnsupportedHome {
            path: path.to_path_buf(),
        })
    } else {
        Ok(path.to_path_buf())
    }
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("episode-scanner"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/viewer"))
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(
            expand_home_with(Path::new("~/Downloads/Torrents"), home()).unwrap(),
            PathBuf::from("/home/viewer/Downloads/Torrents")
        );
        assert_eq!(
            expand_home_with(Path::new("~"), home()).unwrap(),
            PathBuf::from("/home/viewer")
        );
    }

    #[test]
    fn test_expand_home_leaves_other_paths() {
        assert_eq!(
            expand_home_with(Path::new("/srv/tv"), home()).unwrap(),
            PathBuf::from("/srv/tv")
        );
        assert_eq!(
            expand_home_with(Path::new("tv/~shows"), home()).unwrap(),
            PathBuf::from("tv/~shows")
        );
        assert_eq!(
            expand_home_with(Path::new("./~"), home()).unwrap(),
            PathBuf::from("./~")
        );
    }

    #[test]
    fn test_expand_home_rejects_user_shorthand() {
        let result = expand_home_with(Path::new("~someone/tv"), home());
        assert!(matches!(result, Err(ScanError::UnsupportedHome { .. })));
    }

    #[test]
    fn test_expand_home_without_home() {
        let result = expand_home_with(Path::new("~/tv"), None);
        assert!(matches!(result, Err(ScanError::HomeUnavailable { .. })));
    }

    #[test]
    fn test_parse_config_file() {
        let config: ConfigFile = toml::from_str(
            r#"
            extensions = ["mkv", "avi"]
            group_by = "folder"
            order = "episode"
            format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(
            config,
            ConfigFile {
                extensions: Some(vec!["mkv".to_string(), "avi".to_string()]),
                group_by: Some(GroupBy::Folder),
                order: Some(Order::Episode),
                format: Some(OutputFormat::Json),
            }
        );
    }

    #[test]
    fn test_parse_config_rejects_unknown_keys() {
        assert!(toml::from_str::<ConfigFile>("tvdb_api_key = \"abc\"").is_err());
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "order = \"episode\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.order, Some(Order::Episode));
        assert_eq!(config.group_by, None);
    }

    #[test]
    fn test_load_missing_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "order = 3\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from(["episode-scanner", "/srv/tv", "--order", "discovery"])
            .unwrap();
        let file = ConfigFile {
            extensions: Some(vec!["avi".to_string()]),
            group_by: Some(GroupBy::Folder),
            order: Some(Order::Episode),
            format: None,
        };

        let settings = Settings::resolve(&cli, file).unwrap();
        assert_eq!(settings.root, PathBuf::from("/srv/tv"));
        assert_eq!(settings.filter, VideoFilter::extensions(["avi"]));
        assert_eq!(settings.group_by, GroupBy::Folder);
        assert_eq!(settings.order, Order::Discovery);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_all_files_overrides_config_extensions() {
        let cli = Cli::try_parse_from(["episode-scanner", "/srv/tv", "--all-files"]).unwrap();
        let file = ConfigFile {
            extensions: Some(vec!["avi".to_string()]),
            ..ConfigFile::default()
        };

        let settings = Settings::resolve(&cli, file).unwrap();
        assert_eq!(settings.filter, VideoFilter::all_files());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["episode-scanner", "/srv/tv"]).unwrap();
        let settings = Settings::resolve(&cli, ConfigFile::default()).unwrap();
        assert_eq!(settings.filter, VideoFilter::default());
        assert_eq!(settings.group_by, GroupBy::Prefix);
        assert_eq!(settings.order, Order::Discovery);
        assert_eq!(settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_empty_extensions_rejected() {
        let cli = Cli::try_parse_from(["episode-scanner", "/srv/tv", "--extensions", ""]).unwrap();
        let result = Settings::resolve(&cli, ConfigFile::default());
        assert!(result.unwrap_err().to_string().contains("Extension list is empty"));

        let cli = Cli::try_parse_from(["episode-scanner", "/srv/tv"]).unwrap();
        let file = ConfigFile {
            extensions: Some(Vec::new()),
            ..ConfigFile::default()
        };
        assert!(Settings::resolve(&cli, file).is_err());
    }
}
