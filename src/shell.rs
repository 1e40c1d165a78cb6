use std::ffi::OsString;
use std::future::Future;
use std::io::{self, Write};

use crate::cli::output::print_error;
use crate::config;
use crate::error::{AppError, BoxError};
use crate::logging;

/// The collaborator the shell drives: built from the verbose flag, then run
/// to completion exactly once.
pub trait Application {
    fn run(&mut self) -> impl Future<Output = Result<(), BoxError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Idle,
    Configured,
    Running,
    Succeeded,
    Failed,
}

impl Lifecycle {
    pub fn is_terminal(self) -> bool {
        matches!(self, Lifecycle::Succeeded | Lifecycle::Failed)
    }

    // Idle may end directly when argument resolution stops the run.
    fn can_advance_to(self, next: Lifecycle) -> bool {
        matches!(
            (self, next),
            (Lifecycle::Idle, Lifecycle::Configured)
                | (Lifecycle::Idle, Lifecycle::Succeeded)
                | (Lifecycle::Idle, Lifecycle::Failed)
                | (Lifecycle::Configured, Lifecycle::Running)
                | (Lifecycle::Running, Lifecycle::Succeeded)
                | (Lifecycle::Running, Lifecycle::Failed)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub state: Lifecycle,
    pub exit_code: i32,
}

struct Shell<O, E> {
    state: Lifecycle,
    stdout: O,
    stderr: E,
}

impl<O: Write, E: Write> Shell<O, E> {
    fn new(stdout: O, stderr: E) -> Self {
        Self {
            state: Lifecycle::Idle,
            stdout,
            stderr,
        }
    }

    fn advance(&mut self, next: Lifecycle) {
        debug_assert!(
            self.state.can_advance_to(next),
            "illegal lifecycle transition {:?} -> {:?}",
            self.state,
            next
        );
        tracing::debug!(from = ?self.state, to = ?next, "lifecycle transition");
        self.state = next;
    }

    fn finish(mut self, result: Result<(), AppError>) -> Outcome {
        match result {
            Ok(()) => {
                self.advance(Lifecycle::Succeeded);
                Outcome {
                    state: self.state,
                    exit_code: 0,
                }
            }
            Err(err) => {
                // help goes to stdout, like any requested output
                let written = if err.is_informational() {
                    print_error(&mut self.stdout, &err)
                } else {
                    print_error(&mut self.stderr, &err)
                };
                if let Err(io_err) = written {
                    tracing::warn!(error = %io_err, "failed to report error");
                }

                if err.is_informational() {
                    self.advance(Lifecycle::Succeeded);
                } else {
                    self.advance(Lifecycle::Failed);
                }
                Outcome {
                    state: self.state,
                    exit_code: err.exit_code(),
                }
            }
        }
    }
}

/// Resolve `args`, build the application with `construct`, run it and map the
/// result to an exit code. Failures are reported on stderr; the caller owns
/// the actual process exit.
pub async fn execute<I, T, A, F>(args: I, construct: F) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    A: Application,
    F: FnOnce(bool) -> A,
{
    execute_with(args, construct, io::stdout(), io::stderr()).await
}

/// [`execute`] with explicit output streams.
pub async fn execute_with<I, T, A, F, O, E>(
    args: I,
    construct: F,
    stdout: O,
    stderr: E,
) -> Outcome
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    A: Application,
    F: FnOnce(bool) -> A,
    O: Write,
    E: Write,
{
    let mut shell = Shell::new(stdout, stderr);

    let config = match config::resolve(args) {
        Ok(config) => config,
        Err(err) => return shell.finish(Err(err)),
    };
    logging::init(config.verbose());
    shell.advance(Lifecycle::Configured);

    let mut app = construct(config.verbose());
    shell.advance(Lifecycle::Running);

    let result = app.run().await.map_err(AppError::Application);
    let outcome = shell.finish(result);
    debug_assert!(outcome.state.is_terminal());
    outcome
}
