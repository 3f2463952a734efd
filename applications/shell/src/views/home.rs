//! Home page: a local-only demonstration task board.
//!
//! Nothing here is sent to the backend; the board lives for as long as the
//! shell runs.

use crate::views::sidebar::Sidebar;
use todo_core::User;

/// Sidebar sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Upcoming,
    Today,
    Calendar,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Upcoming, Section::Today, Section::Calendar];

    pub fn label(self) -> &'static str {
        match self {
            Section::Upcoming => "Upcoming",
            Section::Today => "Today",
            Section::Calendar => "Calendar",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.label().eq_ignore_ascii_case(name))
    }
}

/// The three task lists on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskList {
    Today,
    Tomorrow,
    ThisWeek,
}

impl TaskList {
    pub const ALL: [TaskList; 3] = [TaskList::Today, TaskList::Tomorrow, TaskList::ThisWeek];

    pub fn title(self) -> &'static str {
        match self {
            TaskList::Today => "Today",
            TaskList::Tomorrow => "Tomorrow",
            TaskList::ThisWeek => "This Week",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "today" => Some(TaskList::Today),
            "tomorrow" => Some(TaskList::Tomorrow),
            "week" | "thisweek" | "this-week" => Some(TaskList::ThisWeek),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            TaskList::Today => 0,
            TaskList::Tomorrow => 1,
            TaskList::ThisWeek => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTask {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

/// Local task board state.
#[derive(Debug, Clone)]
pub struct TaskBoard {
    active: Section,
    lists: [Vec<BoardTask>; 3],
    next_id: u64,
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::demo()
    }
}

impl TaskBoard {
    /// Empty board
    pub fn empty() -> Self {
        Self {
            active: Section::default(),
            lists: [Vec::new(), Vec::new(), Vec::new()],
            next_id: 1,
        }
    }

    /// Board seeded with demo tasks
    pub fn demo() -> Self {
        let mut board = Self::empty();
        for text in [
            "Database create for company",
            "Website templates",
            "Meet work teem",
        ] {
            board.add_task(TaskList::Today, text);
        }
        for text in ["Work teem", "Job interview"] {
            board.add_task(TaskList::Tomorrow, text);
        }
        for text in [
            "Research content ideas",
            "Consult accountant",
            "Print business card",
        ] {
            board.add_task(TaskList::ThisWeek, text);
        }
        board
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn set_section(&mut self, section: Section) {
        self.active = section;
    }

    pub fn tasks(&self, list: TaskList) -> &[BoardTask] {
        &self.lists[list.index()]
    }

    /// Append a task. Blank text is ignored; the text is trimmed.
    pub fn add_task(&mut self, list: TaskList, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.lists[list.index()].push(BoardTask {
            id,
            text: text.to_string(),
            completed: false,
        });
        Some(id)
    }

    /// Flip a task's completion. Returns the new value, or `None` for an
    /// unknown id.
    pub fn toggle(&mut self, id: u64) -> Option<bool> {
        let task = self.lists.iter_mut().flatten().find(|task| task.id == id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Tasks not yet done in one list
    pub fn pending(&self, list: TaskList) -> usize {
        self.tasks(list).iter().filter(|task| !task.completed).count()
    }

    /// Tasks on the board, done or not
    pub fn total(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Tasks not yet done anywhere on the board
    pub fn pending_total(&self) -> usize {
        TaskList::ALL.into_iter().map(|list| self.pending(list)).sum()
    }

    pub fn render(&self, user: Option<&User>, sidebar: &Sidebar) -> String {
        let mut lines = Vec::new();

        if let Some(user) = user {
            lines.push(format!("Welcome, {}!", user.first_name));
            lines.push(String::new());
        }

        lines.extend(sidebar.render(self));
        lines.push(String::new());

        match self.active {
            Section::Upcoming => {
                lines.push(format!("Upcoming ({})", self.total()));
                for list in TaskList::ALL {
                    lines.push(String::new());
                    lines.extend(self.render_list(list));
                }
            }
            Section::Today => {
                lines.push(format!("Today ({})", self.tasks(TaskList::Today).len()));
                lines.push(String::new());
                lines.extend(self.render_list(TaskList::Today));
            }
            Section::Calendar => {
                lines.push("Calendar view - Coming soon".to_string());
            }
        }

        lines.join("\n")
    }

    fn render_list(&self, list: TaskList) -> Vec<String> {
        let mut lines = vec![list.title().to_string()];
        lines.push("  + Add new task".to_string());
        for task in self.tasks(list) {
            let mark = if task.completed { "x" } else { " " };
            lines.push(format!("  [{}] #{} {}", mark, task.id, task.text));
        }
        lines
    }
}
