// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

use datamap_logging::CliLoggingArgs;
use std::path::PathBuf;

pub mod loader;
pub mod query;

pub use clap::Parser;
pub use loader::Format;
pub use query::QueryCommands;

#[derive(clap::Parser, Debug)]
#[command(
    name = "dmq",
    about = "Query nested JSON, TOML and YAML documents by path",
    version
)]
pub struct Cli {
    /// Document to query; `-` reads stdin
    #[arg(short, long)]
    pub file: PathBuf,
    /// Document format (inferred from the file extension when omitted)
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    #[command(flatten)]
    pub logging: CliLoggingArgs,
    #[command(subcommand)]
    pub command: QueryCommands,
}

impl Cli {
    /// Load the document and run the query, returning the text to print
    pub fn execute(&self) -> anyhow::Result<String> {
        let map = loader::read_document(&self.file, self.format)?;
        self.command.run(&map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_query_with_default() {
        let cli = Cli::try_parse_from([
            "dmq", "-f", "app.toml", "int", "server", "port", "--default", "-1",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("app.toml"));
        match cli.command {
            QueryCommands::Int(args) => {
                assert_eq!(args.path.segments(), vec!["server", "port"]);
                assert_eq!(args.default.as_deref(), Some("-1"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_logging_and_format() {
        let cli = Cli::try_parse_from([
            "dmq",
            "--file",
            "-",
            "--format",
            "yaml",
            "--log-level",
            "trace",
            "keys",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(Format::Yaml));
        assert!(!cli.logging.is_empty());
        assert!(matches!(cli.command, QueryCommands::Keys(ref p) if p.path.is_empty()));
    }

    #[test]
    fn test_file_is_required() {
        assert!(Cli::try_parse_from(["dmq", "get", "a"]).is_err());
    }
}
