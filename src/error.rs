use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    /// Text the user typed could not be accepted for the field it was entered into.
    #[error("{0}")]
    InvalidInput(String),

    /// An update or delete matched no row.
    #[error("Project {0} does not exist.")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProjectError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ProjectError::InvalidInput(message.into())
    }

    /// Whether the session can report this error and keep going.
    /// A broken console leaves nobody to report to.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ProjectError::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, ProjectError>;
