//! Command-line interface for the Gomoku board.

use std::path::{Path, PathBuf};

use clap::Parser;
use gomoku::{AppConfig, ConfigError};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

/// Gomoku - two-player five-in-a-row on a native board
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player five-in-a-row", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file. Missing files are an error only when given explicitly.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size, overriding the config file
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    pub print_default_config: bool,
}

impl Cli {
    /// Explicit `--config` must exist; the default path falls back to built-in values.
    /// `--size` wins over whatever the file says.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        self.load_config_with_default(Path::new(DEFAULT_CONFIG_PATH))
    }

    fn load_config_with_default(&self, default_path: &Path) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::load_or_default(default_path)?,
        };

        if let Some(size) = self.size {
            config.game.board_size = size;
            config.validate()?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("gomoku.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_no_args() {
        let cli = Cli::try_parse_from(["gomoku"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.size.is_none());
        assert!(!cli.print_default_config);
    }

    #[test]
    fn test_size_and_config() {
        let cli = Cli::try_parse_from(["gomoku", "--size", "19", "-c", "my.toml"]).unwrap();
        assert_eq!(cli.size, Some(19));
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_rejects_non_numeric_size() {
        assert!(Cli::try_parse_from(["gomoku", "--size", "big"]).is_err());
    }

    #[test]
    fn test_size_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[game]\nboard_size = 9\n");
        let cli = Cli::try_parse_from(["gomoku", "-c", path.to_str().unwrap(), "--size", "19"]).unwrap();

        let config = cli.load_config().unwrap();
        assert_eq!(config.game.board_size, 19);
    }

    #[test]
    fn test_config_file_used_without_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[game]\nboard_size = 9\n");
        let cli = Cli::try_parse_from(["gomoku", "-c", path.to_str().unwrap()]).unwrap();

        assert_eq!(cli.load_config().unwrap().game.board_size, 9);
    }

    #[test]
    fn test_size_override_is_validated() {
        let cli = Cli::try_parse_from(["gomoku", "--size", "3"]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gomoku.toml");

        assert!(matches!(
            cli.load_config_with_default(&missing),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_missing_explicit_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from(["gomoku", "-c", missing.to_str().unwrap()]).unwrap();

        assert!(matches!(cli.load_config(), Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["gomoku"]).unwrap();

        let config = cli
            .load_config_with_default(&dir.path().join("gomoku.toml"))
            .unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_default_path_file_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[window]\nwidth = 640.0\n");
        let cli = Cli::try_parse_from(["gomoku", "-s", "11"]).unwrap();

        let config = cli.load_config_with_default(&path).unwrap();
        assert_eq!(config.window.width, 640.0);
        assert_eq!(config.game.board_size, 11);
    }
}
