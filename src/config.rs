use std::ffi::OsString;

use clap::Parser;

use crate::cli::{Cli, LONG_NAMES};
use crate::error::AppError;

/// Options resolved from the command line for one process invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunConfiguration {
    verbose: bool,
}

impl RunConfiguration {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

impl From<Cli> for RunConfiguration {
    fn from(cli: Cli) -> Self {
        Self::new(cli.verbose)
    }
}

/// Resolve a configuration from an explicit argument list.
///
/// `args` starts with the program name, as `std::env::args_os()` does. Nothing
/// else (environment, files) is consulted.
pub fn resolve<I, T>(args: I) -> Result<RunConfiguration, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::try_parse_from(normalize(args))?;
    Ok(cli.into())
}

/// Rewrite `-verbose` / `-verbose=<BOOL>` to their double-dash form. Tokens
/// after a `--` terminator are left alone.
fn normalize<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut flags_done = false;

    for (index, arg) in args.into_iter().map(Into::into).enumerate() {
        if index == 0 || flags_done {
            normalized.push(arg);
            continue;
        }

        let rewritten = match arg.to_str() {
            Some("--") => {
                flags_done = true;
                None
            }
            Some(text) if is_single_dash_long(text) => Some(OsString::from(format!("-{text}"))),
            _ => None,
        };
        normalized.push(rewritten.unwrap_or(arg));
    }

    normalized
}

fn is_single_dash_long(arg: &str) -> bool {
    let Some(rest) = arg.strip_prefix('-') else {
        return false;
    };
    if rest.starts_with('-') {
        return false;
    }
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_NAMES.contains(&name)
}
