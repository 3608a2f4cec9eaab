use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a configuration file overriding the sample members
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Generate an example configuration file and exit
    #[arg(short, long)]
    pub generate_config: bool,

    /// Set the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

pub fn generate_example_config() -> String {
    r#"# chatroom example configuration

[room]
# Members in insertion order. Duplicates are allowed.
members = ["멤버1", "멤버2", "멤버3"]
"#.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DemoConfig;

    #[test]
    fn test_no_arguments_use_defaults() {
        let cli = Cli::try_parse_from(["chatroom"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.generate_config);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::try_parse_from(["chatroom", "-c", "room.toml", "-l", "debug"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("room.toml")));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_example_config_parses() {
        let config = DemoConfig::from_toml(&generate_example_config()).unwrap();
        assert_eq!(config.room.members, vec!["멤버1", "멤버2", "멤버3"]);
    }
}
