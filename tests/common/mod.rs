mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from projects for tests
pub use projects::core::db::{NewProject, Project, ProjectDb, ProjectRepository};
pub use projects::{ProjectError, ProjectService, Session, SessionController};
