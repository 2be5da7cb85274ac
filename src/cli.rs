use clap::Parser;

/// safety-config: terminal UI for the Safety DB vulnerability database settings
#[derive(Parser, Debug, Clone)]
#[command(name = "safety-config")]
#[command(version)]
#[command(about = "Configure the Safety DB vulnerability database source", long_about = None)]
pub struct Cli {
    /// Directory holding settings.toml and theme.toml (defaults to the
    /// platform config directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    pub config_dir: Option<std::path::PathBuf>,

    /// PyUP API key. Pre-fills the key field, overriding the stored value.
    #[arg(long, env = "PYUP_API_KEY", hide_env_values = true)]
    pub pyup_api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the stored settings and exit without opening the UI
    #[arg(long, default_value_t = false)]
    pub print_settings: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["safety-config"]);
        assert!(cli.config_dir.is_none());
        assert!(cli.pyup_api_key.is_none());
        assert_eq!(cli.log_level, "info");
        assert!(!cli.print_settings);
    }

    #[test]
    fn test_config_dir_flag() {
        let cli = Cli::parse_from(["safety-config", "-C", "/tmp/test"]);
        assert_eq!(cli.config_dir, Some(std::path::PathBuf::from("/tmp/test")));
    }

    #[test]
    fn test_api_key_flag() {
        let cli = Cli::parse_from(["safety-config", "--pyup-api-key", "test-key"]);
        assert_eq!(cli.pyup_api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_print_settings_flag() {
        let cli = Cli::parse_from(["safety-config", "--print-settings"]);
        assert!(cli.print_settings);
    }
}
