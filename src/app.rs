use crate::error::BoxError;
use crate::shell::Application;

/// The forecasting application. Construction never fails; any setup work
/// happens inside [`Application::run`].
#[derive(Debug, Clone)]
pub struct App {
    verbose: bool,
}

impl App {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Application for App {
    async fn run(&mut self) -> Result<(), BoxError> {
        tracing::debug!(verbose = self.verbose, "forecast run started");
        Ok(())
    }
}
