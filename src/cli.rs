// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line interface for inspecting and validating configuration files.
//!
//! The `sectcfg` binary is a thin shell over [`execute`], which writes its report to
//! any [`Write`] so it can be tested without a process.

use crate::domain::{ConfigLookup, Result};
use crate::service::ConfigLoader;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

/// Top-level arguments.
#[derive(Debug, Parser)]
#[command(
    name = "sectcfg",
    version,
    about = "Inspect and validate sectioned INI-style configuration files"
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        /// Configuration file
        file: PathBuf,
        /// Section name
        section: String,
        /// Key name
        key: String,
    },
    /// Check that required keys are present, reporting every missing key
    Check {
        /// Configuration file
        file: PathBuf,
        /// Required keys of a section
        #[arg(short, long = "require", value_name = "SECTION:KEY[,KEY...]")]
        require: Vec<Requirement>,
    },
    /// Print the parsed document in normalized form
    Dump {
        /// Configuration file
        file: PathBuf,
        /// Emit JSON instead of INI text
        #[arg(long)]
        json: bool,
    },
}

/// A `SECTION:KEY[,KEY...]` requirement given to `check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    /// Section the keys must appear in
    pub section: String,
    /// Required keys
    pub keys: Vec<String>,
}

impl FromStr for Requirement {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (section, keys) = s
            .split_once(':')
            .ok_or_else(|| format!("expected SECTION:KEY[,KEY...], got '{}'", s))?;

        let section = section.trim();
        if section.is_empty() {
            return Err(format!("missing section name in '{}'", s));
        }

        let keys: Vec<String> = keys
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(str::to_string)
            .collect();
        if keys.is_empty() {
            return Err(format!("no keys given for section '{}'", section));
        }

        Ok(Requirement {
            section: section.to_string(),
            keys,
        })
    }
}

/// Runs a parsed command line, writing its report to `out`.
///
/// Returns `Ok(false)` when `check` found missing keys; they have already been
/// reported to `out`.
///
/// # Errors
///
/// Loading, parsing and lookup failures are returned unchanged; failures writing to
/// `out` surface as [`ConfigError::IoError`](crate::domain::ConfigError::IoError).
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<bool> {
    let loader = ConfigLoader::new();

    match &cli.command {
        Commands::Get { file, section, key } => {
            let doc = loader.load(file)?;
            writeln!(out, "{}", doc.get_string(section, key)?)?;
            Ok(true)
        }
        Commands::Check { file, require } => {
            let doc = loader.load(file)?;
            let mut ok = true;
            for requirement in require {
                let keys: Vec<&str> = requirement.keys.iter().map(String::as_str).collect();
                if let Err(err) = doc.get_required(&requirement.section, &keys) {
                    writeln!(out, "{}", err)?;
                    ok = false;
                }
            }
            if ok {
                writeln!(out, "{}: ok", file.display())?;
            }
            Ok(ok)
        }
        Commands::Dump { file, json } => {
            let doc = loader.load(file)?;
            if *json {
                serde_json::to_writer_pretty(&mut *out, &doc).map_err(std::io::Error::from)?;
                writeln!(out)?;
            } else {
                write!(out, "{}", doc)?;
            }
            Ok(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigError;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run(args: &[&str]) -> (Result<bool>, String) {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        let mut out = Vec::new();
        let result = execute(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_requirement_parse() {
        let req: Requirement = "lvm: volume_group, volume_driver ,".parse().unwrap();
        assert_eq!(req.section, "lvm");
        assert_eq!(req.keys, vec!["volume_group", "volume_driver"]);
    }

    #[test]
    fn test_requirement_parse_errors() {
        assert!("lvm".parse::<Requirement>().is_err());
        assert!(":volume_group".parse::<Requirement>().is_err());
        assert!("lvm:".parse::<Requirement>().is_err());
    }

    #[test]
    fn test_get() {
        let file = config_file("[lvm]\nvolume_group = cinder-volumes\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run(&["sectcfg", "get", path, "lvm", "volume_group"]);
        assert!(result.unwrap());
        assert_eq!(out, "cinder-volumes\n");

        let (result, _) = run(&["sectcfg", "get", path, "lvm", "missing"]);
        assert!(matches!(result, Err(ConfigError::MissingKey { .. })));
    }

    #[test]
    fn test_check_reports_every_section() {
        let file = config_file("[DEFAULT]\nverbose = True\n[lvm]\nvolume_group = v\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run(&[
            "sectcfg",
            "check",
            path,
            "--require",
            "DEFAULT:verbose,debug",
            "-r",
            "database:connection",
            "-r",
            "lvm:volume_group",
        ]);

        assert!(!result.unwrap());
        assert!(out.contains("[DEFAULT] is missing required keys: debug"));
        assert!(out.contains("[database] is missing required keys: connection"));
        assert!(!out.contains("[lvm]"));
    }

    #[test]
    fn test_check_ok() {
        let file = config_file("[lvm]\nvolume_group = v\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run(&["sectcfg", "check", path, "-r", "lvm:volume_group"]);
        assert!(result.unwrap());
        assert!(out.ends_with(": ok\n"));
    }

    #[test]
    fn test_dump_ini_and_json() {
        let file = config_file("[lvm]\nb = 2\na = 1\n");
        let path = file.path().to_str().unwrap();

        let (_, ini) = run(&["sectcfg", "dump", path]);
        assert_eq!(ini, "[lvm]\na = 1\nb = 2\n");

        let (_, json) = run(&["sectcfg", "--verbose", "dump", path, "--json"]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["lvm"]["a"], "1");
    }

    #[test]
    fn test_parse_error_surfaces() {
        let file = config_file("verbose = True\n");
        let path = file.path().to_str().unwrap();

        let (result, _) = run(&["sectcfg", "dump", path]);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
