//! Command line and environment configuration.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    history::{DEFAULT_HISTORY_SIZE, History},
    library::Library,
    observers::TransitionLogger,
};

/// Command-line arguments for the lending desk
#[derive(Parser, Debug, Clone)]
#[command(name = "lending-desk", version, about = "Interactive lending desk for a small library")]
pub struct Config {
    /// Start with an empty catalog and borrower directory instead of the demo data
    #[arg(long, env = "LENDING_DESK_EMPTY")]
    pub empty: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter directive, e.g. "info" or "lending_desk=debug".
    /// `RUST_LOG` takes precedence when set.
    #[arg(long, env = "LENDING_DESK_LOG", default_value = "warn")]
    pub log_level: String,

    /// Number of completed check-outs and returns kept in the activity history
    #[arg(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,
}

impl Config {
    /// Log filter built from `RUST_LOG`, or from `--log-level` when unset
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Library set up as this configuration asks: history size, transition
    /// logging and, unless `--empty`, the demo collection.
    #[must_use]
    pub fn library(&self) -> Library {
        let mut library = Library::with_history(History::with_capacity(self.history_size));
        library.register_observer(Box::new(TransitionLogger));
        if !self.empty {
            library.seed_demo_data();
        }
        library
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use clap::{CommandFactory, Parser};

    use super::Config;

    #[test]
    fn test_command_definition() {
        Config::command().debug_assert();
    }

    #[test]
    fn test_defaults_seed_demo_data() {
        let config = Config::try_parse_from(["lending-desk"]).expect("defaults should parse");
        assert!(!config.no_color);
        assert_eq!(config.history_size, 100);

        let library = config.library();
        assert_eq!(library.query().items().len(), 3);
        assert_eq!(library.query().borrowers().len(), 2);
    }

    #[test]
    fn test_empty_library() {
        let config = Config::try_parse_from(["lending-desk", "--empty", "--history-size", "5"])
            .expect("flags should parse");
        let library = config.library();
        assert!(library.query().items().is_empty());
        assert!(library.query().borrowers().is_empty());
    }

    #[test]
    fn test_rejects_bad_history_size() {
        assert!(Config::try_parse_from(["lending-desk", "--history-size", "lots"]).is_err());
    }
}
