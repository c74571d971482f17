//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_RELAY_URL: &str = "https://api.allorigins.win/raw?url=";
pub const DEFAULT_SEARCH_URL: &str = "https://itunes.apple.com/search";
pub const DEFAULT_ENTITY: &str = "song";

#[derive(Parser, Debug, Clone)]
#[command(name = "genre-grid")]
#[command(about = "Search a public song catalog and browse the results by genre")]
#[command(version)]
pub struct Config {
    /// Search to run on startup
    pub query: Option<String>,

    /// Relay prefix the encoded endpoint URL is appended to. Empty to call the endpoint directly.
    #[arg(long = "relay-url", env = "GENRE_GRID_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    pub relay_base_url: String,

    /// Catalog search endpoint
    #[arg(long = "search-url", env = "GENRE_GRID_SEARCH_URL", default_value = DEFAULT_SEARCH_URL)]
    pub search_base_url: String,

    /// Catalog entity to search for
    #[arg(long, env = "GENRE_GRID_ENTITY", default_value = DEFAULT_ENTITY)]
    pub entity: String,

    /// Give up on a request after this many seconds (no limit by default)
    #[arg(long = "timeout-secs", env = "GENRE_GRID_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Directory for the rotating log file
    #[arg(long = "log-dir", env = "GENRE_GRID_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn uses_relay(&self) -> bool {
        !self.relay_base_url.trim().is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: None,
            relay_base_url: DEFAULT_RELAY_URL.to_string(),
            search_base_url: DEFAULT_SEARCH_URL.to_string(),
            entity: DEFAULT_ENTITY.to_string(),
            timeout_secs: None,
            log_dir: PathBuf::from(".logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parser_defaults() {
        let parsed = Config::try_parse_from(["genre-grid"]).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.search_base_url, defaults.search_base_url);
        assert_eq!(parsed.entity, defaults.entity);
        assert_eq!(parsed.log_dir, defaults.log_dir);
        assert!(parsed.timeout().is_none());
    }

    #[test]
    fn empty_relay_disables_relay() {
        let parsed = Config::try_parse_from(["genre-grid", "--relay-url", "", "jazz"]).unwrap();
        assert!(!parsed.uses_relay());
        assert_eq!(parsed.query.as_deref(), Some("jazz"));
    }

    #[test]
    fn timeout_is_seconds() {
        let parsed = Config::try_parse_from(["genre-grid", "--timeout-secs", "7"]).unwrap();
        assert_eq!(parsed.timeout(), Some(Duration::from_secs(7)));
    }
}
