pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod shell;

use std::ffi::OsString;

use app::App;

/// Run one invocation with the production application and return the exit code.
pub async fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    shell::execute(args, App::new).await.exit_code
}
