use std::io::Cursor;
use std::str::FromStr;

use projects::core::db::{NewProject, ProjectDb};
use projects::{ProjectService, Session, SessionController};
use rust_decimal::Decimal;

/// Creates a ProjectDb backed by a file in a fresh temp directory.
/// Returns both the database and the temp directory (which must be kept alive).
pub async fn create_test_db() -> (ProjectDb, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("projects.db");
    let db = ProjectDb::new(&path)
        .await
        .expect("Failed to create test database");
    (db, dir)
}

pub fn make_new_project(name: &str) -> NewProject {
    NewProject {
        name: name.to_string(),
        ..NewProject::default()
    }
}

pub fn dec(text: &str) -> Decimal {
    Decimal::from_str(text).expect("test decimal literal")
}

/// Result of driving a whole menu session from scripted answers.
pub struct SessionRun {
    pub session: Session,
    pub output: String,
    pub db: ProjectDb,
}

/// Runs the menu with `answers` as console input, one answer per line.
/// Running out of answers reads as a blank line, which exits at the menu.
pub async fn run_session(db: ProjectDb, answers: &[&str]) -> anyhow::Result<SessionRun> {
    let mut script = answers.join("\n");
    script.push('\n');
    run_session_bytes(db, script.as_bytes()).await
}

/// Runs the menu with raw console bytes as input.
pub async fn run_session_bytes(db: ProjectDb, script: &[u8]) -> anyhow::Result<SessionRun> {
    let mut controller = SessionController::new(
        ProjectService::new(db),
        Cursor::new(script.to_vec()),
        Vec::new(),
    );
    let session = controller.run().await?;
    let (service, output) = controller.into_parts();
    Ok(SessionRun {
        session,
        output: String::from_utf8(output)?,
        db: service.into_repository(),
    })
}
