//! Home page sidebar: section menu and sign-out.

use crate::views::home::{Section, TaskBoard, TaskList};
use todo_session::AuthSession;

#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    signing_out: bool,
}

impl Sidebar {
    pub fn is_signing_out(&self) -> bool {
        self.signing_out
    }

    /// Mark a sign-out as started. Returns `false` if one is already running.
    ///
    /// The sidebar renders "Signing out..." until
    /// [`finish_sign_out`](Self::finish_sign_out) completes.
    pub fn begin_sign_out(&mut self) -> bool {
        if self.signing_out {
            return false;
        }
        self.signing_out = true;
        true
    }

    /// Run the started sign-out through the session. No-op when none was
    /// started.
    pub async fn finish_sign_out(&mut self, session: &AuthSession) {
        if !self.signing_out {
            return;
        }
        session.logout().await;
        self.signing_out = false;
    }

    fn badge(section: Section, board: &TaskBoard) -> Option<usize> {
        match section {
            Section::Upcoming => Some(board.pending_total()),
            Section::Today => Some(board.pending(TaskList::Today)),
            Section::Calendar => None,
        }
    }

    pub fn render(&self, board: &TaskBoard) -> Vec<String> {
        let mut lines = vec!["Menu".to_string(), "  Tasks".to_string()];

        for section in Section::ALL {
            let marker = if section == board.active_section() { ">" } else { " " };
            let line = match Self::badge(section, board) {
                Some(count) => format!("  {} {} ({})", marker, section.label(), count),
                None => format!("  {} {}", marker, section.label()),
            };
            lines.push(line);
        }

        lines.push("  ----".to_string());
        lines.push("    Settings".to_string());
        lines.push(if self.signing_out {
            "    Signing out...".to_string()
        } else {
            "    Sign Out".to_string()
        });

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badges_follow_pending_counts() {
        let mut board = TaskBoard::demo();
        let sidebar = Sidebar::default();

        let rendered = sidebar.render(&board).join("\n");
        assert!(rendered.contains("> Upcoming (8)"));
        assert!(rendered.contains("  Today (3)"));

        let first = board.tasks(TaskList::Today)[0].id;
        board.toggle(first);
        board.set_section(Section::Today);

        let rendered = sidebar.render(&board).join("\n");
        assert!(rendered.contains("  Upcoming (7)"));
        assert!(rendered.contains("> Today (2)"));
        assert!(rendered.contains("Sign Out"));
        assert!(!sidebar.is_signing_out());
    }

    #[test]
    fn test_sign_out_in_progress() {
        let board = TaskBoard::demo();
        let mut sidebar = Sidebar::default();

        assert!(sidebar.begin_sign_out());
        assert!(sidebar.is_signing_out());
        assert!(!sidebar.begin_sign_out());

        let rendered = sidebar.render(&board).join("\n");
        assert!(rendered.contains("Signing out..."));
        assert!(!rendered.contains("Sign Out"));
    }
}
