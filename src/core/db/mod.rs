mod model;
mod project;
mod state;

use std::path::Path;

use state::DbState;

use crate::error::Result;

pub use model::{Category, Material, Step};
pub use project::{NewProject, OrDash, Project, ProjectRepository};

#[derive(Debug)]
pub struct ProjectDb {
    state: DbState,
}

impl ProjectDb {
    /// Open (creating if needed) the database file and bring its schema up to date.
    pub async fn new<P: AsRef<Path>>(db_file: P) -> Result<Self> {
        Ok(Self {
            state: DbState::new(db_file).await?,
        })
    }

    /// Insert the "Hang a door" sample project with its materials, steps and categories.
    pub async fn load_sample_data(&self) -> Result<()> {
        self.state.load_sample_data().await?;
        tracing::info!("Loaded sample project data");
        Ok(())
    }

    pub async fn close(&self) -> Result<()> {
        self.state.close().await
    }
}

#[derive(sqlx::FromRow)]
struct ProjectRecord {
    project_id: i64,
    project_name: String,
    estimated_hours: Option<String>,
    actual_hours: Option<String>,
    difficulty: Option<i32>,
    notes: Option<String>,
}

impl TryFrom<ProjectRecord> for Project {
    type Error = crate::error::ProjectError;

    fn try_from(record: ProjectRecord) -> Result<Self> {
        Ok(Project {
            id: record.project_id,
            name: record.project_name,
            estimated_hours: model::decimal_from_column(record.estimated_hours)?,
            actual_hours: model::decimal_from_column(record.actual_hours)?,
            difficulty: record.difficulty,
            notes: record.notes,
            materials: Vec::new(),
            steps: Vec::new(),
            categories: Vec::new(),
            _guard: (),
        })
    }
}

#[derive(sqlx::FromRow)]
struct MaterialRecord {
    material_id: i64,
    material_name: String,
    num_required: Option<i32>,
    cost: Option<String>,
}

#[derive(sqlx::FromRow)]
struct StepRecord {
    step_id: i64,
    step_text: String,
    step_order: i32,
}

#[derive(sqlx::FromRow)]
struct CategoryRecord {
    category_id: i64,
    category_name: String,
}

impl ProjectRepository for ProjectDb {
    async fn add_project(&self, project: &NewProject) -> Result<Project> {
        let mut conn = self.state.conn().await?;
        let record = sqlx::query_as::<_, ProjectRecord>(
            r#"INSERT INTO project (project_name, estimated_hours, actual_hours, difficulty, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING project_id, project_name, estimated_hours, actual_hours, difficulty, notes"#,
        )
        .bind(&project.name)
        .bind(model::decimal_to_column(project.estimated_hours))
        .bind(model::decimal_to_column(project.actual_hours))
        .bind(project.difficulty)
        .bind(&project.notes)
        .fetch_one(&mut *conn)
        .await?;
        let project = Project::try_from(record)?;
        tracing::info!(project_id = project.id, name = %project.name, "Inserted project");
        Ok(project)
    }

    async fn get_projects(&self) -> Result<Vec<Project>> {
        let mut conn = self.state.conn().await?;
        sqlx::query_as::<_, ProjectRecord>(
            r#"SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
            FROM project ORDER BY project_id ASC"#,
        )
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(Project::try_from)
        .collect()
    }

    async fn get_project_by_id(&self, id: i64) -> Result<Option<Project>> {
        let mut conn = self.state.conn().await?;
        let Some(record) = sqlx::query_as::<_, ProjectRecord>(
            r#"SELECT project_id, project_name, estimated_hours, actual_hours, difficulty, notes
            FROM project WHERE project_id = $1"#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        else {
            tracing::debug!(project_id = id, "No project with this id");
            return Ok(None);
        };
        let mut project = Project::try_from(record)?;

        project.materials = sqlx::query_as::<_, MaterialRecord>(
            r#"SELECT material_id, material_name, num_required, cost
            FROM material WHERE project_id = $1 ORDER BY material_id ASC"#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|record| {
            Ok(Material {
                id: record.material_id,
                name: record.material_name,
                num_required: record.num_required,
                cost: model::decimal_from_column(record.cost)?,
                _guard: (),
            })
        })
        .collect::<Result<_>>()?;

        project.steps = sqlx::query_as::<_, StepRecord>(
            r#"SELECT step_id, step_text, step_order
            FROM step WHERE project_id = $1 ORDER BY step_order ASC, step_id ASC"#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|record| Step {
            id: record.step_id,
            text: record.step_text,
            order: record.step_order,
            _guard: (),
        })
        .collect();

        project.categories = sqlx::query_as::<_, CategoryRecord>(
            r#"SELECT c.category_id, c.category_name
            FROM project_category pc
            JOIN category c ON pc.category_id = c.category_id
            WHERE pc.project_id = $1
            ORDER BY c.category_name ASC"#,
        )
        .bind(id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .map(|record| Category {
            id: record.category_id,
            name: record.category_name,
            _guard: (),
        })
        .collect();

        Ok(Some(project))
    }

    async fn update_project(&self, project: &Project) -> Result<u64> {
        let mut conn = self.state.conn().await?;
        let rows = sqlx::query(
            r#"UPDATE project SET
                project_name = $1,
                estimated_hours = $2,
                actual_hours = $3,
                difficulty = $4,
                notes = $5
            WHERE project_id = $6"#,
        )
        .bind(&project.name)
        .bind(model::decimal_to_column(project.estimated_hours))
        .bind(model::decimal_to_column(project.actual_hours))
        .bind(project.difficulty)
        .bind(&project.notes)
        .bind(project.id)
        .execute(&mut *conn)
        .await?
        .rows_affected();
        tracing::info!(project_id = project.id, rows, "Updated project");
        Ok(rows)
    }

    async fn delete_project(&self, id: i64) -> Result<u64> {
        let mut conn = self.state.conn().await?;
        let rows = sqlx::query(r#"DELETE FROM project WHERE project_id = $1"#)
            .bind(id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        tracing::info!(project_id = id, rows, "Deleted project");
        Ok(rows)
    }
}
