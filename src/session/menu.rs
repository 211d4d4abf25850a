#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddProject,
    ListProjects,
    SelectProject,
    UpdateProject,
    DeleteProject,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::AddProject,
        MenuAction::ListProjects,
        MenuAction::SelectProject,
        MenuAction::UpdateProject,
        MenuAction::DeleteProject,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuAction::AddProject => 1,
            MenuAction::ListProjects => 2,
            MenuAction::SelectProject => 3,
            MenuAction::UpdateProject => 4,
            MenuAction::DeleteProject => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddProject => "Add a project",
            MenuAction::ListProjects => "List projects",
            MenuAction::SelectProject => "Select a project",
            MenuAction::UpdateProject => "Update project details",
            MenuAction::DeleteProject => "Delete a project",
        }
    }
}

/// What the user picked at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Exit,
    Action(MenuAction),
    Unknown(i64),
}

impl From<Option<i64>> for Selection {
    fn from(value: Option<i64>) -> Self {
        let Some(number) = value else {
            return Selection::Exit;
        };
        MenuAction::ALL
            .into_iter()
            .find(|action| action.number() == number)
            .map_or(Selection::Unknown(number), Selection::Action)
    }
}
