use std::error::Error;

/// Opaque failure returned by an [`Application`](crate::shell::Application) run.
pub type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidArgument(#[from] clap::Error),

    #[error(transparent)]
    Application(BoxError),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidArgument(err) => err.exit_code(),
            AppError::Application(_) => 1,
        }
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::InvalidArgument(_) => "invalid_argument",
            AppError::Application(_) => "application",
        }
    }

    /// True for `--help` / `--version`, which clap reports through its error path.
    pub fn is_informational(&self) -> bool {
        matches!(self, AppError::InvalidArgument(err) if err.exit_code() == 0)
    }

    /// Full error text, including every underlying cause.
    pub fn message(&self) -> String {
        match self {
            AppError::InvalidArgument(err) => err.to_string(),
            AppError::Application(err) => {
                let mut message = err.to_string();
                let mut source = err.source();
                while let Some(cause) = source {
                    message.push_str(": ");
                    message.push_str(&cause.to_string());
                    source = cause.source();
                }
                message
            }
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.error_type(),
            "message": self.message(),
        })
    }
}
