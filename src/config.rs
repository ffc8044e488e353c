use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given
pub const CONFIG_FILE: &str = "wordrack.json";

/// Paths and limits for building the site and answering CLI queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word list, one word per line
    #[serde(default = "default_words")]
    pub words: PathBuf,

    /// Payload served with the website
    #[serde(default = "default_dawg")]
    pub dawg: PathBuf,

    /// Optional second copy of the payload
    #[serde(default)]
    pub package_dawg: Option<PathBuf>,

    #[serde(default = "default_service_worker")]
    pub service_worker: PathBuf,

    /// Template with a `{HASH}` placeholder for the cache token
    #[serde(default = "default_service_worker_template")]
    pub service_worker_template: PathBuf,

    /// Files hashed into the cache token.
    /// If empty, the word list and the template are used.
    #[serde(default)]
    pub hash_files: Vec<PathBuf>,

    /// Most `?` tiles accepted in a CLI query
    #[serde(default = "default_max_wildcards")]
    pub max_wildcards: usize,

    /// Longest rack (and required run) accepted in a CLI query
    #[serde(default = "default_max_rack")]
    pub max_rack: usize,
}

fn default_words() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_dawg() -> PathBuf {
    PathBuf::from("www/dawg.js")
}

fn default_service_worker() -> PathBuf {
    PathBuf::from("www/service-worker.js")
}

fn default_service_worker_template() -> PathBuf {
    PathBuf::from("service-worker.js")
}

fn default_max_wildcards() -> usize {
    2
}

fn default_max_rack() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words: default_words(),
            dawg: default_dawg(),
            package_dawg: None,
            service_worker: default_service_worker(),
            service_worker_template: default_service_worker_template(),
            hash_files: Vec::new(),
            max_wildcards: default_max_wildcards(),
            max_rack: default_max_rack(),
        }
    }
}

impl Config {
    /// Load from `path`, else from `wordrack.json` if present, else defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new(CONFIG_FILE);
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Files to hash for the cache token
    pub fn effective_hash_files(&self) -> Vec<PathBuf> {
        if self.hash_files.is_empty() {
            vec![self.words.clone(), self.service_worker_template.clone()]
        } else {
            self.hash_files.clone()
        }
    }
}
