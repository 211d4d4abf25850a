pub mod core;
pub mod error;
pub mod service;
pub mod session;

pub use crate::core::db::{NewProject, Project, ProjectDb, ProjectRepository};
pub use error::{ProjectError, Result};
pub use service::ProjectService;
pub use session::{Session, SessionController};
