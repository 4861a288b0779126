//! Command-line parsing for the `lark` binary.

use std::path::PathBuf;

use crate::EvalConfig;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Parse and run a program.
    Run { path: PathBuf, config: EvalConfig },
    /// Parse a program and report errors without running it.
    Check { path: PathBuf },
    Help,
    Version,
}

/// A command line that could not be understood; the message goes to stderr
/// followed by the usage text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing file path")]
    MissingPath,
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid value for --max-depth: '{0}'")]
    InvalidDepth(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
}

/// Parse the arguments after the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|a| a.as_ref().to_owned()).collect();
    let Some(first) = args.first() else {
        return Ok(Command::Help);
    };

    match first.as_str() {
        "help" | "--help" | "-h" => Ok(Command::Help),
        "version" | "--version" | "-V" => Ok(Command::Version),
        "check" => {
            let (path, config) = parse_run_args(&args[1..])?;
            if config != EvalConfig::default() {
                return Err(UsageError::UnknownOption("--max-depth".to_owned()));
            }
            Ok(Command::Check { path })
        }
        "run" => {
            let (path, config) = parse_run_args(&args[1..])?;
            Ok(Command::Run { path, config })
        }
        // `lark file.lark` is shorthand for `lark run file.lark`.
        _ => {
            let (path, config) = parse_run_args(&args)?;
            Ok(Command::Run { path, config })
        }
    }
}

fn parse_run_args(args: &[String]) -> Result<(PathBuf, EvalConfig), UsageError> {
    let mut path = None;
    let mut config = EvalConfig::default();
    for arg in args {
        if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth
                .parse::<usize>()
                .map_err(|_| UsageError::InvalidDepth(depth.to_owned()))?;
            config = config.with_max_call_depth(depth);
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            return Err(UsageError::UnexpectedArgument(arg.clone()));
        }
    }
    let path = path.ok_or(UsageError::MissingPath)?;
    Ok((path, config))
}

pub const USAGE: &str = "\
Lark scripting language

Usage: lark <command> [options]

Commands:
  run <file>           Parse and run a program
  check <file>         Parse a program without running it
  <file>               Same as `run <file>`
  help                 Show this help message
  version              Show version information

Run options:
  --max-depth=<n>      Fail when calls nest deeper than <n>

Environment:
  RUST_LOG             Enable logging to stderr (e.g. RUST_LOG=lark_eval=trace)
  LARK_LOG_TREE        Indent log output by call nesting";
