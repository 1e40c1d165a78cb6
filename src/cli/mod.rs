pub mod output;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(
    name = "quantumforecaster",
    about = "Quantum forecaster - run the forecasting application",
    args_override_self = true
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOL",
        value_parser = parse_bool
    )]
    pub verbose: bool,
}

/// Long option names that may also be spelled with a single dash (`-verbose`).
pub const LONG_NAMES: &[&str] = &["verbose", "help"];

/// Boolean spellings accepted in `--verbose=<BOOL>`.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(format!("invalid boolean value '{value}'")),
    }
}
