//! The shell application: explicit wiring of client, session, history and
//! views, plus per-command dispatch.

use crate::command::Command;
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use crate::views::{FormField, LoginForm, Sidebar, SignupForm, TaskBoard};
use std::sync::Arc;
use todo_client::TodoClient;
use todo_session::{dispatch, AuthSession, Dispatch, History, Navigator, Route, LOADING_PLACEHOLDER};
use tracing::{debug, warn};

/// A location resolves in at most one redirect; anything longer is a loop.
const MAX_REDIRECTS: usize = 3;

/// What the shell is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    NotFound(String),
    Login,
    Signup,
    Home,
}

/// Whether the prompt loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    client: Arc<TodoClient>,
    history: Arc<History>,
    session: Arc<AuthSession>,
    login: LoginForm,
    signup: SignupForm,
    board: TaskBoard,
    sidebar: Sidebar,
    notice: Option<String>,
}

impl App {
    /// Build the client from configuration and start at `start`.
    pub fn new(config: &ShellConfig, start: &str) -> Result<Self> {
        let client = TodoClient::new(config.client_config())?;
        Ok(Self::with_client(Arc::new(client), start))
    }

    /// The session starts LOADING; call [`mount`](Self::mount) before use.
    pub fn with_client(client: Arc<TodoClient>, start: &str) -> Self {
        let history = Arc::new(History::at_path(start));
        let session = Arc::new(AuthSession::new(client.clone(), history.clone()));

        Self {
            client,
            history,
            session,
            login: LoginForm::new(),
            signup: SignupForm::new(),
            board: TaskBoard::demo(),
            sidebar: Sidebar::default(),
            notice: None,
        }
    }

    /// Run the session probe.
    pub async fn mount(&self) {
        self.session.check_auth().await;
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn history(&self) -> &Arc<History> {
        &self.history
    }

    pub fn client(&self) -> &Arc<TodoClient> {
        &self.client
    }

    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn signup_form(&self) -> &SignupForm {
        &self.signup
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Resolve the current location, following guard redirects.
    pub fn screen(&self) -> Screen {
        for _ in 0..MAX_REDIRECTS {
            let location = self.history.location();
            match dispatch(&location, &self.session.state()) {
                Dispatch::Placeholder => return Screen::Loading,
                Dispatch::NotFound => return Screen::NotFound(location),
                Dispatch::Redirect(target) => {
                    debug!(from = %location, to = %target, "Guard redirect");
                    self.history.navigate(target);
                }
                Dispatch::Render(Route::Home) => return Screen::Home,
                Dispatch::Render(Route::Login) => return Screen::Login,
                Dispatch::Render(Route::Signup) => return Screen::Signup,
            }
        }

        let location = self.history.location();
        warn!(location = %location, "Redirect loop");
        Screen::NotFound(location)
    }

    pub fn render(&self) -> String {
        let body = match self.screen() {
            Screen::Loading => LOADING_PLACEHOLDER.to_string(),
            Screen::NotFound(location) => format!("Page not found: {}", location),
            Screen::Login => self.login.render(),
            Screen::Signup => self.signup.render(),
            Screen::Home => {
                let user = self.session.user();
                self.board.render(user.as_ref(), &self.sidebar)
            }
        };

        match &self.notice {
            Some(notice) => format!("{}\n\n{}", notice, body),
            None => body,
        }
    }

    /// Whether a started operation is waiting for [`settle`](Self::settle).
    pub fn is_busy(&self) -> bool {
        self.sidebar.is_signing_out()
    }

    /// Finish work started by the last command. `logout` only marks the
    /// sidebar as signing out, so the in-progress screen can be shown first;
    /// the backend call happens here.
    pub async fn settle(&mut self) {
        self.sidebar.finish_sign_out(&self.session).await;
    }

    /// Parse and run one prompt line. Blank lines just re-render.
    pub async fn handle_line(&mut self, line: &str) -> Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        let command = Command::parse(line)?;
        self.handle(command).await
    }

    pub async fn handle(&mut self, command: Command) -> Result<Flow> {
        self.notice = None;
        let screen = self.screen();

        match command {
            Command::Help => self.notice = Some(help(&screen)),
            Command::Quit => return Ok(Flow::Quit),
            Command::Go(path) => self.history.go(path),
            Command::Refresh => self.session.check_auth().await,

            Command::Set { field, value } => {
                let accepted = match screen {
                    Screen::Login => self.login.set(field, value),
                    Screen::Signup => self.signup.set(field, value),
                    _ => return Err(not_here("set")),
                };
                if !accepted {
                    return Err(no_such_field(field));
                }
            }
            Command::TogglePassword => match screen {
                Screen::Login => self.login.toggle_password_visibility(),
                Screen::Signup => self.signup.toggle_password_visibility(),
                _ => return Err(not_here("show")),
            },
            Command::ToggleConfirmPassword => match screen {
                Screen::Signup => self.signup.toggle_confirm_password_visibility(),
                _ => return Err(not_here("show confirm")),
            },
            Command::Submit => match screen {
                Screen::Login => {
                    self.login.submit(&self.session).await;
                }
                Screen::Signup => {
                    let navigator: &dyn Navigator = self.history.as_ref();
                    if let Some(message) = self.signup.submit(&self.client, navigator).await {
                        self.notice = Some(message);
                    }
                }
                _ => return Err(not_here("submit")),
            },

            Command::Section(section) => {
                require_home(&screen, "section")?;
                self.board.set_section(section);
            }
            Command::Add { list, text } => {
                require_home(&screen, "add")?;
                if self.board.add_task(list, &text).is_none() {
                    return Err(ShellError::Command("Task text is empty".into()));
                }
            }
            Command::Toggle(id) => {
                require_home(&screen, "toggle")?;
                if self.board.toggle(id).is_none() {
                    return Err(ShellError::Command(format!("No task #{}", id)));
                }
            }
            Command::Logout => {
                require_home(&screen, "logout")?;
                if !self.sidebar.begin_sign_out() {
                    debug!("Sign-out already in progress");
                }
            }
        }

        Ok(Flow::Continue)
    }
}

fn not_here(command: &str) -> ShellError {
    ShellError::Command(format!("`{}` is not available on this page", command))
}

fn no_such_field(field: FormField) -> ShellError {
    ShellError::Command(format!("This form has no {} field", field.name()))
}

fn require_home(screen: &Screen, command: &str) -> Result<()> {
    if *screen == Screen::Home {
        Ok(())
    } else {
        Err(not_here(command))
    }
}

fn help(screen: &Screen) -> String {
    let page = match screen {
        Screen::Login => {
            "  set email <value>       set password <value>\n  \
             show                    toggle password visibility\n  \
             submit                  sign in\n  \
             signup                  go to the sign-up page"
        }
        Screen::Signup => {
            "  set <first|last|email|password|confirm> <value>\n  \
             show [confirm]          toggle password visibility\n  \
             submit                  create the account\n  \
             login                   go to the sign-in page"
        }
        Screen::Home => {
            "  section <upcoming|today|calendar>\n  \
             add <today|tomorrow|week> <text>\n  \
             toggle <id>             mark a task done or not done\n  \
             logout                  sign out"
        }
        Screen::Loading | Screen::NotFound(_) => "  home | login | signup",
    };

    format!(
        "Commands:\n{}\n  go <path>               open a location\n  \
         refresh                 re-check the session\n  \
         help | quit",
        page
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use todo_client::ClientConfig;

    fn app(start: &str) -> App {
        // never contacted: these tests do not mount
        let client = TodoClient::new(ClientConfig::new("http://127.0.0.1:1/api")).unwrap();
        App::with_client(Arc::new(client), start)
    }

    #[test]
    fn test_unmounted_app_shows_placeholder() {
        let app = app("/");
        assert_eq!(app.screen(), Screen::Loading);
        assert_eq!(app.render(), LOADING_PLACEHOLDER);
        // no redirect while loading
        assert_eq!(app.history().location(), "/");
    }

    #[test]
    fn test_unknown_location_is_not_found() {
        let app = app("/settings");
        assert_eq!(app.screen(), Screen::NotFound("/settings".into()));
        assert!(app.render().contains("Page not found"));
    }

    #[tokio::test]
    async fn test_quit_and_help() {
        let mut app = app("/login");
        assert_eq!(app.handle(Command::Help).await.unwrap(), Flow::Continue);
        assert!(app.notice().unwrap().contains("Commands"));
        assert_eq!(app.handle(Command::Quit).await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn test_board_commands_need_home() {
        let mut app = app("/login");
        match app.handle(Command::Toggle(1)).await {
            Err(ShellError::Command(msg)) => assert!(msg.contains("toggle")),
            other => panic!("Expected Command error, got: {:?}", other),
        }
    }

    #[test]
    fn test_help_lists_page_commands() {
        assert!(help(&Screen::Home).contains("section"));
        assert!(help(&Screen::Signup).contains("confirm"));
        assert!(help(&Screen::Login).contains("submit"));
    }
}
