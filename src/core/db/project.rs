use std::fmt;

use rust_decimal::Decimal;

use crate::core::db::model::{Category, Material, Step};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
    /// Loaded only by `get_project_by_id`; empty in listings.
    pub materials: Vec<Material>,
    pub steps: Vec<Step>,
    pub categories: Vec<Category>,
    pub(super) _guard: (),
}

#[derive(Debug, Clone, Default)]
pub struct NewProject {
    pub name: String,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub difficulty: Option<i32>,
    pub notes: Option<String>,
}

pub trait ProjectRepository {
    fn add_project(&self, project: &NewProject) -> impl Future<Output = Result<Project>>;
    fn get_projects(&self) -> impl Future<Output = Result<Vec<Project>>>;
    fn get_project_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Project>>>;
    /// Writes every editable field of `project`, returning the number of rows touched.
    fn update_project(&self, project: &Project) -> impl Future<Output = Result<u64>>;
    fn delete_project(&self, id: i64) -> impl Future<Output = Result<u64>>;
}

#[cfg(test)]
impl Project {
    pub(crate) fn fixture(id: i64, name: &str) -> Self {
        Project {
            id,
            name: name.to_string(),
            estimated_hours: None,
            actual_hours: None,
            difficulty: None,
            notes: None,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
            _guard: (),
        }
    }
}

/// Renders `-` for an absent value.
pub struct OrDash<'a, T>(pub &'a Option<T>);

impl<T: fmt::Display> fmt::Display for OrDash<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => write!(f, "-"),
        }
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "   ID: {}", self.id)?;
        writeln!(f, "   Name: {}", self.name)?;
        writeln!(f, "   Estimated hours: {}", OrDash(&self.estimated_hours))?;
        writeln!(f, "   Actual hours: {}", OrDash(&self.actual_hours))?;
        writeln!(f, "   Difficulty: {}", OrDash(&self.difficulty))?;
        write!(f, "   Notes: {}", OrDash(&self.notes))?;

        if !self.materials.is_empty() {
            write!(f, "\n   Materials:")?;
            for material in &self.materials {
                write!(f, "\n      {}", material)?;
            }
        }
        if !self.steps.is_empty() {
            write!(f, "\n   Steps:")?;
            for step in &self.steps {
                write!(f, "\n      {}", step)?;
            }
        }
        if !self.categories.is_empty() {
            write!(f, "\n   Categories:")?;
            for category in &self.categories {
                write!(f, "\n      {}", category)?;
            }
        }
        Ok(())
    }
}
