use anyhow::Context;
use anyhow::Result;
use camino::Utf8Path;
use camino::Utf8PathBuf;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::path::PathBuf;

const CONFIG_FILE_NAME: &str = "vercmp.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// the main config struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub sort_order: SortOrder,
    pub dedup: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_order: SortOrder::default(),
            dedup: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    #[serde(default)]
    sort: SortToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct SortToml {
    order: Option<SortOrder>,
    dedup: Option<bool>,
}

/// search for the config file
/// 1. vercmp.toml next to the executable
/// 2. vercmp.toml in the current directory
pub fn find_config_file() -> Option<Utf8PathBuf> {

    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf));

    let cwd = std::env::current_dir().ok();

    first_config_file([exe_dir, cwd].into_iter().flatten())
}

fn first_config_file(dirs: impl IntoIterator<Item = PathBuf>) -> Option<Utf8PathBuf> {
    dirs.into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter_map(|p| Utf8PathBuf::from_path_buf(p).ok())
        .find(|p| p.is_file())
}

impl Config {

    /// An explicitly named file must exist. Otherwise the usual places are
    /// searched, and no file at all means defaults.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(Utf8PathBuf::from(path)),
            None => find_config_file(),
        };

        match path {
            Some(path) => {
                tracing::debug!("using config file {path}");
                Self::from_path(&path)
            }
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Utf8Path) -> Result<Self> {
        let mut contents = String::new();
        std::fs::File::open(path)
            .with_context(|| format!("failed to open config file {path}"))?
            .read_to_string(&mut contents)
            .with_context(|| format!("failed to read config file {path}"))?;
        Self::from_toml_str(&contents).with_context(|| format!("invalid config file {path}"))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let toml: ConfigToml = toml::from_str(contents)?;
        let defaults = Self::default();
        Ok(Self {
            sort_order: toml.sort.order.unwrap_or(defaults.sort_order),
            dedup: toml.sort.dedup.unwrap_or(defaults.dedup),
        })
    }
}
