//! NUCOS command line
//!
//! Commands:
//! - convert: Convert a value between two units
//! - same: Check whether two names are the same unit
//! - types: List unit types
//! - units: List the units of a type
//! - info: Primary name, abbreviation and type of a unit
//! - dump: Export the whole unit table as JSON, text or reStructuredText

use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use nucos_core::ConversionError;
use nucos_units::UNITS;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
usage: nucos <command> [args]

commands:
  convert <from> <to> <value> [--type <unit type>] [--json]
  same <unit> <unit>
  types
  units <unit type> [--all]
  info <unit> [--type <unit type>]
  dump [--format json|txt|rst] [--output <path>]
  help

Set RUST_LOG for diagnostics, e.g. RUST_LOG=debug or RUST_LOG=warn,nucos_units=trace.";

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    fn usage(msg: impl Into<String>) -> Self {
        CliError::Usage(msg.into())
    }

    fn code(&self) -> &'static str {
        match self {
            CliError::Usage(_) => "USAGE",
            CliError::Conversion(e) => e.code(),
            CliError::Io(_) => "IO_ERROR",
            CliError::Json(_) => "IO_ERROR",
        }
    }

    fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) | CliError::Conversion(_) => 1,
            CliError::Io(_) | CliError::Json(_) => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DumpFormat {
    Json,
    Text,
    Rst,
}

impl FromStr for DumpFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(DumpFormat::Json),
            "txt" | "text" => Ok(DumpFormat::Text),
            "rst" => Ok(DumpFormat::Rst),
            other => Err(CliError::usage(format!(
                "unknown dump format '{}' (expected json, txt or rst)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Convert {
        from: String,
        to: String,
        value: f64,
        unit_type: Option<String>,
        json: bool,
    },
    Same {
        a: String,
        b: String,
    },
    Types,
    Units {
        unit_type: String,
        all: bool,
    },
    Info {
        unit: String,
        unit_type: Option<String>,
    },
    Dump {
        format: DumpFormat,
        output: Option<PathBuf>,
    },
    Help,
}

#[derive(Debug, Serialize)]
struct Converted<'a> {
    unit_type: &'a str,
    from: &'a str,
    to: &'a str,
    input: f64,
    value: f64,
}

#[derive(Debug)]
struct UnitInfo<'a> {
    unit_type: &'a str,
    primary_name: &'a str,
    abbreviation: &'a str,
}

/// Split `args` into positionals and `--flag [value]` options
struct ArgList {
    positional: Vec<String>,
    options: Vec<(String, Option<String>)>,
}

impl ArgList {
    fn parse(args: &[String], valued: &[&str], switches: &[&str]) -> Result<Self, CliError> {
        let mut positional = Vec::new();
        let mut options = Vec::new();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            if let Some(name) = arg.strip_prefix("--") {
                if valued.contains(&name) {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::usage(format!("--{} needs a value", name)))?;
                    options.push((name.to_string(), Some(value.clone())));
                } else if switches.contains(&name) {
                    options.push((name.to_string(), None));
                } else {
                    return Err(CliError::usage(format!("unknown option --{}", name)));
                }
            } else {
                positional.push(arg.clone());
            }
        }

        Ok(ArgList { positional, options })
    }

    fn value(&self, name: &str) -> Option<String> {
        self.options
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.clone())
    }

    fn flag(&self, name: &str) -> bool {
        self.options.iter().any(|(n, _)| n == name)
    }

    fn exactly<const N: usize>(&self, command: &str, names: [&str; N]) -> Result<[String; N], CliError> {
        <[String; N]>::try_from(self.positional.clone()).map_err(|_| {
            CliError::usage(format!("usage: nucos {} <{}>", command, names.join("> <")))
        })
    }
}

fn parse_args(args: &[String]) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Ok(Command::Help);
    };

    match command.as_str() {
        "convert" => {
            let list = ArgList::parse(rest, &["type"], &["json"])?;
            let [from, to, value] = list.exactly("convert", ["from", "to", "value"])?;
            let value = value
                .parse::<f64>()
                .map_err(|_| CliError::usage(format!("'{}' is not a number", value)))?;
            Ok(Command::Convert {
                from,
                to,
                value,
                unit_type: list.value("type"),
                json: list.flag("json"),
            })
        }
        "same" => {
            let list = ArgList::parse(rest, &[], &[])?;
            let [a, b] = list.exactly("same", ["unit", "unit"])?;
            Ok(Command::Same { a, b })
        }
        "types" => {
            ArgList::parse(rest, &[], &[])?.exactly("types", [])?;
            Ok(Command::Types)
        }
        "units" => {
            let list = ArgList::parse(rest, &[], &["all"])?;
            let [unit_type] = list.exactly("units", ["unit type"])?;
            Ok(Command::Units {
                unit_type,
                all: list.flag("all"),
            })
        }
        "info" => {
            let list = ArgList::parse(rest, &["type"], &[])?;
            let [unit] = list.exactly("info", ["unit"])?;
            Ok(Command::Info {
                unit,
                unit_type: list.value("type"),
            })
        }
        "dump" => {
            let list = ArgList::parse(rest, &["format", "output"], &[])?;
            list.exactly("dump", [])?;
            let format = match list.value("format") {
                Some(f) => f.parse()?,
                None => DumpFormat::Json,
            };
            Ok(Command::Dump {
                format,
                output: list.value("output").map(PathBuf::from),
            })
        }
        "help" | "--help" | "-h" => Ok(Command::Help),
        other => Err(CliError::usage(format!("unknown command '{}'", other))),
    }
}

fn run(command: &Command, out: &mut impl Write) -> Result<(), CliError> {
    tracing::debug!(?command, "running");

    match command {
        Command::Convert {
            from,
            to,
            value,
            unit_type,
            json,
        } => {
            let (unit_type, result) = match unit_type {
                Some(t) => {
                    let result = UNITS.convert_with_type(t, from, to, *value)?;
                    (UNITS.unit_type_name(t)?, result)
                }
                None => {
                    let result = UNITS.convert(from, to, *value)?;
                    (UNITS.unit_type_of(from)?, result)
                }
            };
            if *json {
                let converted = Converted {
                    unit_type,
                    from: from.as_str(),
                    to: to.as_str(),
                    input: *value,
                    value: result,
                };
                serde_json::to_writer(&mut *out, &converted)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", result)?;
            }
        }
        Command::Same { a, b } => {
            writeln!(out, "{}", UNITS.is_same_unit(a, b))?;
        }
        Command::Types => {
            for name in UNITS.unit_types() {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Units { unit_type, all } => {
            let names = if *all {
                UNITS.supported_names(unit_type)?
            } else {
                UNITS.unit_names(unit_type)?
            };
            for name in names {
                writeln!(out, "{}", name)?;
            }
        }
        Command::Info { unit, unit_type } => {
            let owner = match unit_type {
                Some(t) => UNITS.unit_type_name(t)?,
                None => UNITS.unit_type_of(unit)?,
            };
            let info = UnitInfo {
                unit_type: owner,
                primary_name: UNITS.primary_name(unit, Some(owner))?,
                abbreviation: UNITS.abbreviation(unit, Some(owner))?,
            };
            writeln!(out, "unit type:    {}", info.unit_type)?;
            writeln!(out, "primary name: {}", info.primary_name)?;
            writeln!(out, "abbreviation: {}", info.abbreviation)?;
        }
        Command::Dump { format, output } => match output {
            Some(path) => {
                let mut file = BufWriter::new(File::create(path)?);
                dump(*format, &mut file)?;
                file.flush()?;
                tracing::info!(path = %path.display(), "unit table written");
            }
            None => dump(*format, out)?,
        },
        Command::Help => {
            writeln!(out, "nucos {}\n\n{}", VERSION, USAGE)?;
        }
    }

    Ok(())
}

fn dump(format: DumpFormat, out: &mut impl Write) -> Result<(), CliError> {
    let table = UNITS.table();
    match format {
        DumpFormat::Json => {
            nucos_units::write_json(table, &mut *out, true)?;
            writeln!(out)?;
        }
        DumpFormat::Text => nucos_units::write_text(table, out)?,
        DumpFormat::Rst => nucos_units::write_rst(table, out)?,
    }
    Ok(())
}

fn report(err: &CliError, json: bool) {
    if json {
        let body = json!({ "error": { "code": err.code(), "message": err.to_string() } });
        println!("{}", body);
    } else {
        eprintln!("error: {}", err);
    }
}

/// Filter from a `RUST_LOG` value; unset or unparsable means warn
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn init_logging() {
    let directives = env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(log_filter(directives.as_deref()))
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");

    let result = parse_args(&args).and_then(|command| {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        run(&command, &mut out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(err, CliError::Usage(_)) && !json {
                eprintln!("error: {}\n\n{}", err, USAGE);
            } else {
                report(&err, json);
            }
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn output(command: &str) -> Result<String, CliError> {
        let command = parse_args(&args(command))?;
        let mut buf = Vec::new();
        run(&command, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_parse_convert() {
        let cmd = parse_args(&args("convert ft m 3 --type Length")).unwrap();
        assert_eq!(
            cmd,
            Command::Convert {
                from: "ft".into(),
                to: "m".into(),
                value: 3.0,
                unit_type: Some("Length".into()),
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_negative_value() {
        let cmd = parse_args(&args("convert F C -40")).unwrap();
        assert!(matches!(cmd, Command::Convert { value, .. } if value == -40.0));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_args(&args("convert ft m")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("convert ft m x")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("convert ft m 1 --bogus")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("frobnicate")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("dump --format xml")), Err(CliError::Usage(_))));
        assert!(matches!(parse_args(&args("info --type")), Err(CliError::Usage(_))));
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse_args(&[]).unwrap(), Command::Help);
        assert_eq!(parse_args(&args("help")).unwrap(), Command::Help);
    }

    fn close(a: f64, b: f64) -> bool {
        ((a - b) / b).abs() < 1e-9
    }

    #[test]
    fn test_convert_output() {
        let inches: f64 = output("convert feet inches 2").unwrap().trim().parse().unwrap();
        assert!(close(inches, 24.0));
        assert_eq!(output("convert C K 0 --type temperature").unwrap(), "273.15\n");
    }

    #[test]
    fn test_convert_json_output() {
        let out = output("convert ft in 1 --json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["unit_type"], "Length");
        assert!(close(value["value"].as_f64().unwrap(), 12.0));
    }

    #[test]
    fn test_conversion_error_codes() {
        let err = output("convert kgt miles 0").unwrap_err();
        assert_eq!(err.code(), nucos_core::codes::NOT_SUPPORTED_UNIT);
        assert_eq!(err.exit_code(), 1);

        let err = output("convert feet miles 0 --type BadType").unwrap_err();
        assert_eq!(err.code(), nucos_core::codes::INVALID_UNIT_TYPE);
    }

    #[test]
    fn test_same_and_lists() {
        assert_eq!(output("same knot kts").unwrap(), "true\n");
        assert_eq!(output("same knot m/s").unwrap(), "false\n");
        assert!(output("types").unwrap().starts_with("Length\nOil Concentration\n"));
        assert_eq!(output("units time").unwrap(), "second\nminute\nhour\nday\n");
        assert!(output("units time --all").unwrap().starts_with("second\ns\nsec\n"));
    }

    #[test]
    fn test_info() {
        let out = output("info oz").unwrap();
        assert!(out.contains("unit type:    Volume"));
        assert!(out.contains("primary name: fluid ounce"));

        let out = output("info oz --type Mass").unwrap();
        assert!(out.contains("primary name: ounce"));
    }

    #[test]
    fn test_dump_formats() {
        assert!(output("dump").unwrap().starts_with("{\n  \"Length\""));
        assert!(output("dump --format txt").unwrap().contains("\nKinematic Viscosity:\n"));
        assert!(output("dump --format rst").unwrap().contains("API degree\n"));
    }

    #[test]
    fn test_log_filter_directives() {
        let filter = log_filter(Some("warn,nucos_units=debug")).to_string();
        assert!(filter.contains("nucos_units=debug"));
        assert!(filter.contains("warn"));
        assert_eq!(log_filter(None).to_string(), "warn");
        assert_eq!(log_filter(Some("nucos_units=loud")).to_string(), "warn");
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = CliError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(err.exit_code(), 2);
    }
}
