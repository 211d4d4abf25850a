//! Interactive menu session.
//!
//! [`SessionController`] prints the menu, reads one answer per prompt and
//! dispatches to the [`ProjectService`]. A failed operation is reported and
//! abandoned; the session continues with the state it had before the
//! operation started.

mod menu;
mod state;

use std::io::{BufRead, Write};

use rust_decimal::Decimal;

use crate::core::db::{NewProject, OrDash, Project, ProjectRepository};
use crate::core::input;
use crate::error::{ProjectError, Result};
use crate::service::ProjectService;

pub use menu::{MenuAction, Selection};
pub use state::Session;

enum Flow {
    Continue(Session),
    Exit,
}

pub struct SessionController<R, I, O> {
    service: ProjectService<R>,
    input: I,
    output: O,
}

impl<R, I, O> SessionController<R, I, O>
where
    R: ProjectRepository,
    I: BufRead,
    O: Write,
{
    pub fn new(service: ProjectService<R>, input: I, output: O) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    pub fn into_parts(self) -> (ProjectService<R>, O) {
        (self.service, self.output)
    }

    /// Runs the menu until the user exits, returning the final session state.
    /// Only console failures end the loop early.
    pub async fn run(&mut self) -> Result<Session> {
        let mut session = Session::default();
        loop {
            match self.process_selection(&session).await {
                Ok(Flow::Continue(next)) => session = next,
                Ok(Flow::Exit) => return Ok(session),
                Err(e) if e.is_recoverable() => {
                    tracing::warn!(error = %e, "Menu operation failed");
                    writeln!(self.output, "\nError: {} Try again.", e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn process_selection(&mut self, session: &Session) -> Result<Flow> {
        self.print_operations(session)?;
        let selection = Selection::from(self.prompt_int("Enter a menu selection")?);
        tracing::debug!(?selection, "Menu selection");

        let next = match selection {
            Selection::Exit => {
                writeln!(self.output, "Exiting the menu.")?;
                return Ok(Flow::Exit);
            }
            Selection::Action(MenuAction::AddProject) => {
                self.create_project().await?;
                session.clone()
            }
            Selection::Action(MenuAction::ListProjects) => {
                self.list_projects().await?;
                session.clone()
            }
            Selection::Action(MenuAction::SelectProject) => self.select_project().await?,
            Selection::Action(MenuAction::UpdateProject) => {
                self.update_project_details(session).await?
            }
            Selection::Action(MenuAction::DeleteProject) => self.delete_project(session).await?,
            Selection::Unknown(number) => {
                tracing::warn!(selection = number, "Unknown menu selection");
                writeln!(self.output, "\n{} is not a valid selection. Try again.", number)?;
                session.clone()
            }
        };
        Ok(Flow::Continue(next))
    }

    async fn create_project(&mut self) -> Result<()> {
        let name = self
            .prompt_string("Enter the project name")?
            .ok_or_else(|| ProjectError::invalid_input("A project name is required."))?;
        let estimated_hours = input::parse_hours(&self.prompt("Enter the estimated hours")?)?;
        let actual_hours = input::parse_hours(&self.prompt("Enter the actual hours")?)?;
        let difficulty =
            input::parse_difficulty(&self.prompt("Enter the project difficulty (1-5)")?)?;
        let notes = self.prompt_string("Enter the project notes")?;

        let project = NewProject {
            name,
            estimated_hours,
            actual_hours,
            difficulty,
            notes,
        };
        let db_project = self.service.add_project(&project).await?;
        writeln!(
            self.output,
            "You have successfully created project: {}",
            db_project
        )?;
        Ok(())
    }

    async fn list_projects(&mut self) -> Result<()> {
        let projects = self.service.fetch_all_projects().await?;
        writeln!(self.output, "\nProjects:")?;
        for project in &projects {
            writeln!(self.output, "   {}: {}", project.id, project.name)?;
        }
        Ok(())
    }

    async fn select_project(&mut self) -> Result<Session> {
        self.list_projects().await?;
        let id = self.prompt_project_id("Enter a project ID to select a project")?;
        let session = Session::from_lookup(self.service.fetch_project_by_id(id).await?);
        match session.current() {
            Some(_) => tracing::debug!(project_id = id, "Selected project"),
            None => {
                tracing::warn!(project_id = id, "No project to select");
                writeln!(self.output, "\nThere is no project with ID {}.", id)?;
            }
        }
        Ok(session)
    }

    async fn update_project_details(&mut self, session: &Session) -> Result<Session> {
        let Some(current) = session.current() else {
            writeln!(self.output, "\nPlease select a project.")?;
            return Ok(session.clone());
        };

        let name = self.prompt_string(&format!(
            "Enter the project name [{}]",
            current.name
        ))?;
        let estimated_hours = input::parse_hours(&self.prompt(&format!(
            "Enter the estimated hours [{}]",
            OrDash(&current.estimated_hours)
        ))?)?;
        let actual_hours = input::parse_hours(&self.prompt(&format!(
            "Enter the actual hours [{}]",
            OrDash(&current.actual_hours)
        ))?)?;
        let difficulty = input::parse_difficulty(&self.prompt(&format!(
            "Enter the project difficulty (1-5) [{}]",
            OrDash(&current.difficulty)
        ))?)?;
        let notes = self.prompt_string(&format!(
            "Enter the project notes [{}]",
            OrDash(&current.notes)
        ))?;

        let merged = merge_update(current, name, estimated_hours, actual_hours, difficulty, notes);
        if self.service.modify_project_details(&merged).await? == 0 {
            return Err(ProjectError::NotFound(merged.id));
        }
        Ok(Session::from_lookup(
            self.service.fetch_project_by_id(merged.id).await?,
        ))
    }

    async fn delete_project(&mut self, session: &Session) -> Result<Session> {
        self.list_projects().await?;
        let id = self.prompt_project_id("Enter the ID of the project to delete")?;
        if self.service.delete_project(id).await? == 0 {
            return Err(ProjectError::NotFound(id));
        }
        writeln!(self.output, "Project {} has been deleted.", id)?;
        Ok(session.after_delete(id))
    }

    fn print_operations(&mut self, session: &Session) -> Result<()> {
        writeln!(
            self.output,
            "\nThese are the available selections. Press the Enter key to quit:"
        )?;
        for action in MenuAction::ALL {
            writeln!(self.output, "  {}) {}", action.number(), action.label())?;
        }
        match session.current() {
            Some(project) => writeln!(self.output, "\nYou are working with project: {}", project)?,
            None => writeln!(self.output, "\nYou are not working with a project.")?,
        }
        Ok(())
    }

    fn prompt_project_id(&mut self, prompt: &str) -> Result<i64> {
        self.prompt_int(prompt)?
            .ok_or_else(|| ProjectError::invalid_input("A project ID is required."))
    }

    fn prompt_int(&mut self, prompt: &str) -> Result<Option<i64>> {
        input::parse_int(&self.prompt(prompt)?)
    }

    fn prompt_string(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(input::parse_text(&self.prompt(prompt)?))
    }

    /// Prints `prompt: ` and reads one line. End of input reads as a blank line.
    fn prompt(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}: ", prompt)?;
        self.output.flush()?;
        let mut line = Vec::new();
        self.input.read_until(b'\n', &mut line)?;
        String::from_utf8(line).map_err(|_| {
            tracing::warn!(prompt, "Answer was not valid UTF-8");
            ProjectError::invalid_input("That answer is not valid text.")
        })
    }
}

/// Applies the answers of an update: a blank answer keeps the current value.
fn merge_update(
    current: &Project,
    name: Option<String>,
    estimated_hours: Option<Decimal>,
    actual_hours: Option<Decimal>,
    difficulty: Option<i32>,
    notes: Option<String>,
) -> Project {
    let mut merged = current.clone();
    merged.name = name.unwrap_or_else(|| current.name.clone());
    merged.estimated_hours = estimated_hours.or(current.estimated_hours);
    merged.actual_hours = actual_hours.or(current.actual_hours);
    merged.difficulty = difficulty.or(current.difficulty);
    merged.notes = notes.or_else(|| current.notes.clone());
    merged
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::str::FromStr;

    use super::*;

    /// Holds one project that storage has already lost: lookups still find it,
    /// but writes touch no rows.
    struct StaleRepository {
        project: Project,
    }

    impl ProjectRepository for StaleRepository {
        async fn add_project(&self, _project: &NewProject) -> Result<Project> {
            Ok(self.project.clone())
        }

        async fn get_projects(&self) -> Result<Vec<Project>> {
            Ok(vec![self.project.clone()])
        }

        async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>> {
            Ok((id == self.project.id).then(|| self.project.clone()))
        }

        async fn update_project(&self, _project: &Project) -> Result<u64> {
            Ok(0)
        }

        async fn delete_project(&self, _id: i64) -> Result<u64> {
            Ok(0)
        }
    }

    async fn run_stale(script: &str) -> (Session, String) {
        let project = Project::fixture(1, "Build shed");
        let mut controller = SessionController::new(
            ProjectService::new(StaleRepository { project }),
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        let session = controller.run().await.unwrap();
        let (_, output) = controller.into_parts();
        (session, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn update_touching_no_rows_is_not_found() {
        let (session, output) = run_stale("3\n1\n4\nRenamed\n\n\n\n\n\n").await;

        assert!(output.contains("Error: Project 1 does not exist. Try again."));
        assert_eq!(
            session,
            Session::ProjectSelected(Project::fixture(1, "Build shed"))
        );
    }

    #[tokio::test]
    async fn delete_touching_no_rows_is_not_found() {
        let (session, output) = run_stale("3\n1\n5\n1\n\n").await;

        assert!(output.contains("Error: Project 1 does not exist. Try again."));
        assert!(!output.contains("has been deleted"));
        assert_eq!(session.current().map(|p| p.id), Some(1));
    }

    #[test]
    fn blank_answers_keep_every_field() {
        let mut current = Project::fixture(1, "Build shed");
        current.actual_hours = Some(Decimal::from_str("2.50").unwrap());
        current.difficulty = Some(3);
        current.notes = Some("Buy lumber first".to_string());

        let merged = merge_update(&current, None, None, None, None, None);
        assert_eq!(merged, current);
    }

    #[test]
    fn answers_replace_only_their_field() {
        let mut current = Project::fixture(1, "Build shed");
        current.difficulty = Some(3);

        let estimate = Decimal::from_str("10.00").unwrap();
        let merged = merge_update(
            &current,
            Some("Build big shed".to_string()),
            Some(estimate),
            None,
            None,
            None,
        );
        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "Build big shed");
        assert_eq!(merged.estimated_hours, Some(estimate));
        assert_eq!(merged.actual_hours, None);
        assert_eq!(merged.difficulty, Some(3));
    }
}
