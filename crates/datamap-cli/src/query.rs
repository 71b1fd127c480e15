// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Query subcommands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use datamap::{format_duration, parse_bool, parse_duration, DataMap, Value};

/// A data path given on the command line
#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Path segments; a single `a/b/c` argument is split on `/`, keeping
    /// empty segments (`a//b` names the empty key under `a`)
    pub path: Vec<String>,
}

impl PathArgs {
    pub fn segments(&self) -> Vec<String> {
        match self.path.as_slice() {
            [single] if single.contains('/') => single.split('/').map(str::to_string).collect(),
            _ => self.path.clone(),
        }
    }
}

/// A data path plus the value to use when it does not exist
#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    #[command(flatten)]
    pub path: PathArgs,

    /// Value to use when the path does not exist
    #[arg(long, allow_hyphen_values = true)]
    pub default: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum QueryCommands {
    /// Print the raw value at a path (JSON, strings unquoted)
    Get(LookupArgs),
    /// Print the value at a path as a boolean
    Bool(LookupArgs),
    /// Print the value at a path as an integer
    Int(LookupArgs),
    /// Print the string at a path
    String(LookupArgs),
    /// Print the duration at a path
    Duration(LookupArgs),
    /// List the keys of the data map at a path (the document root by default)
    Keys(PathArgs),
}

impl QueryCommands {
    /// Run the query against `map` and return the text to print
    pub fn run(&self, map: &DataMap) -> Result<String> {
        match self {
            QueryCommands::Get(args) => get_value(map, args),
            QueryCommands::Bool(args) => {
                let path = args.path.segments();
                let value = match &args.default {
                    Some(d) => map.bool_or(parse_bool(d).context("invalid --default")?, &path)?,
                    None => map.bool(&path)?,
                };
                Ok(value.to_string())
            }
            QueryCommands::Int(args) => {
                let path = args.path.segments();
                let value = match &args.default {
                    Some(d) => map.int_or(d.parse().context("invalid --default")?, &path)?,
                    None => map.int(&path)?,
                };
                Ok(value.to_string())
            }
            QueryCommands::String(args) => {
                let path = args.path.segments();
                let value = match &args.default {
                    Some(d) => map.string_or(d, &path)?,
                    None => map.string(&path)?,
                };
                Ok(value.to_string())
            }
            QueryCommands::Duration(args) => {
                let path = args.path.segments();
                let value = match &args.default {
                    Some(d) => {
                        map.duration_or(parse_duration(d).context("invalid --default")?, &path)?
                    }
                    None => map.duration(&path)?,
                };
                Ok(format_duration(value))
            }
            QueryCommands::Keys(args) => {
                let keys: Vec<&str> = map.map(&args.segments())?.keys().collect();
                Ok(keys.join("\n"))
            }
        }
    }
}

fn get_value(map: &DataMap, args: &LookupArgs) -> Result<String> {
    let path = args.path.segments();
    let value = match &args.default {
        // Defaults are read as JSON literals, falling back to a plain string
        Some(d) => {
            let fallback = serde_json::from_str::<serde_json::Value>(d)
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(d.clone()));
            map.retrieve_or(&fallback, &path)?.to_value()
        }
        None => map.retrieve(&path)?.to_value(),
    };
    render(value)
}

fn render(value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Ok(serde_json::to_string_pretty(&serde_json::Value::from(other))?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datamap::ErrorKind;

    fn lookup(path: &[&str], default: Option<&str>) -> LookupArgs {
        LookupArgs {
            path: PathArgs {
                path: path.iter().map(|s| s.to_string()).collect(),
            },
            default: default.map(str::to_string),
        }
    }

    fn sample() -> DataMap {
        serde_json::from_str(
            r#"{
                "server": {"port": "8080", "timeout": "90s", "tls": "true", "name": "api"},
                "limits": [1, 2]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_segments_split_single_argument() {
        let args = PathArgs {
            path: vec!["server/port".into()],
        };
        assert_eq!(args.segments(), vec!["server", "port"]);

        let args = PathArgs {
            path: vec!["server".into(), "port".into()],
        };
        assert_eq!(args.segments(), vec!["server", "port"]);

        let args = PathArgs { path: vec![] };
        assert!(args.segments().is_empty());
    }

    #[test]
    fn test_segments_keep_empty_keys() {
        let args = PathArgs {
            path: vec!["a//b".into()],
        };
        assert_eq!(args.segments(), vec!["a", "", "b"]);

        let map: DataMap = serde_json::from_str(r#"{"a": {"": {"b": 1}, "b": 2}}"#).unwrap();
        assert_eq!(QueryCommands::Int(lookup(&["a//b"], None)).run(&map).unwrap(), "1");
        assert_eq!(QueryCommands::Int(lookup(&["a/b"], None)).run(&map).unwrap(), "2");

        let err = QueryCommands::Int(lookup(&["a/b/"], None)).run(&map).unwrap_err();
        let err = err.downcast_ref::<datamap::Error>().unwrap();
        assert_eq!(err.kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_typed_queries() {
        let map = sample();
        let run = |cmd: QueryCommands| cmd.run(&map).unwrap();

        assert_eq!(run(QueryCommands::Int(lookup(&["server", "port"], None))), "8080");
        assert_eq!(run(QueryCommands::Bool(lookup(&["server/tls"], None))), "true");
        assert_eq!(run(QueryCommands::String(lookup(&["server", "name"], None))), "api");
        assert_eq!(
            run(QueryCommands::Duration(lookup(&["server", "timeout"], None))),
            "1m30s"
        );
    }

    #[test]
    fn test_defaults() {
        let map = sample();
        let run = |cmd: QueryCommands| cmd.run(&map).unwrap();

        assert_eq!(run(QueryCommands::Int(lookup(&["server", "workers"], Some("-1")))), "-1");
        assert_eq!(run(QueryCommands::Bool(lookup(&["debug"], Some("f")))), "false");
        assert_eq!(run(QueryCommands::String(lookup(&["host"], Some("localhost")))), "localhost");
        assert_eq!(
            run(QueryCommands::Duration(lookup(&["server", "idle"], Some("5m")))),
            "5m0s"
        );
        assert_eq!(run(QueryCommands::Get(lookup(&["missing"], Some("[1]")))), "[\n  1\n]");
        assert_eq!(run(QueryCommands::Get(lookup(&["missing"], Some("plain")))), "plain");
    }

    #[test]
    fn test_invalid_default_is_reported() {
        let err = QueryCommands::Int(lookup(&["server", "workers"], Some("many")))
            .run(&sample())
            .unwrap_err();
        assert!(err.to_string().contains("invalid --default"));
    }

    #[test]
    fn test_lookup_errors_keep_their_kind() {
        let err = QueryCommands::String(lookup(&["limits"], None))
            .run(&sample())
            .unwrap_err();
        let err = err.downcast_ref::<datamap::Error>().unwrap();
        assert_eq!(err.kind(), ErrorKind::BadType);
    }

    #[test]
    fn test_get_and_keys() {
        let map = sample();
        assert_eq!(
            QueryCommands::Get(lookup(&["server", "name"], None)).run(&map).unwrap(),
            "api"
        );
        assert_eq!(
            QueryCommands::Get(lookup(&["limits"], None)).run(&map).unwrap(),
            "[\n  1,\n  2\n]"
        );
        assert_eq!(
            QueryCommands::Keys(PathArgs { path: vec![] }).run(&map).unwrap(),
            "limits\nserver"
        );
        assert_eq!(
            QueryCommands::Keys(PathArgs {
                path: vec!["server".into()]
            })
            .run(&map)
            .unwrap(),
            "name\nport\ntimeout\ntls"
        );
    }
}
