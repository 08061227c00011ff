use std::env;
use std::path::PathBuf;

const DEFAULT_SAVE_DIR: &str = ".";
const DEFAULT_LOG_FILE: &str = "desk-puzzles.log";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config
{
    pub save_dir: PathBuf,
    pub log_file: PathBuf,
    pub log_filter: String,
    pub dictionary_path: Option<PathBuf>,
}

impl Config
{
    pub fn from_env() -> Self
    {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            save_dir: get("DESK_PUZZLES_SAVE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_DIR)),
            log_file: get("DESK_PUZZLES_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            dictionary_path: get("DESK_PUZZLES_DICTIONARY").map(PathBuf::from),
        }
    }
}

impl Default for Config
{
    fn default() -> Self
    {
        Self::from_lookup(|_| None)
    }
}
