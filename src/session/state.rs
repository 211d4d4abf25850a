//! Session state
//!
//! The "current project" slot. The loop owns one `Session` value; each menu
//! handler borrows it and hands back the state to continue with.

use crate::core::db::Project;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    NoProjectSelected,
    ProjectSelected(Project),
}

impl Session {
    /// State after looking a project up: selected when found, empty otherwise.
    /// The previous selection never survives a lookup.
    pub fn from_lookup(found: Option<Project>) -> Self {
        match found {
            Some(project) => Session::ProjectSelected(project),
            None => Session::NoProjectSelected,
        }
    }

    pub fn current(&self) -> Option<&Project> {
        match self {
            Session::ProjectSelected(project) => Some(project),
            Session::NoProjectSelected => None,
        }
    }

    pub fn is_selected(&self, id: i64) -> bool {
        self.current().is_some_and(|project| project.id == id)
    }

    /// State after project `deleted_id` was removed from storage.
    pub fn after_delete(&self, deleted_id: i64) -> Self {
        if self.is_selected(deleted_id) {
            Session::NoProjectSelected
        } else {
            self.clone()
        }
    }
}
