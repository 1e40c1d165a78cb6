use std::io::{self, Write};

use crate::error::AppError;

/// Report a terminal error. clap errors carry their own usage rendering;
/// everything else is a JSON object.
pub fn print_error<W: Write>(out: &mut W, err: &AppError) -> io::Result<()> {
    match err {
        AppError::InvalidArgument(clap_err) => write!(out, "{}", clap_err.render()),
        AppError::Application(_) => writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
        ),
    }
}
