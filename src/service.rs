//! Project service: the seam between the session and the repository.

use crate::core::db::{NewProject, Project, ProjectRepository};
use crate::error::Result;

/// Forwards each call to the repository unchanged. Validation belongs to the
/// session's input parsing; the repository's constraints are the only other
/// check.
#[derive(Debug)]
pub struct ProjectService<R> {
    repo: R,
}

impl<R: ProjectRepository> ProjectService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_repository(self) -> R {
        self.repo
    }

    pub async fn add_project(&self, project: &NewProject) -> Result<Project> {
        self.repo.add_project(project).await
    }

    pub async fn fetch_all_projects(&self) -> Result<Vec<Project>> {
        self.repo.get_projects().await
    }

    pub async fn fetch_project_by_id(&self, id: i64) -> Result<Option<Project>> {
        self.repo.get_project_by_id(id).await
    }

    pub async fn modify_project_details(&self, project: &Project) -> Result<u64> {
        self.repo.update_project(project).await
    }

    pub async fn delete_project(&self, id: i64) -> Result<u64> {
        self.repo.delete_project(id).await
    }
}
