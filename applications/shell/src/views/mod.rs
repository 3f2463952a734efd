//! Page views rendered by the shell.

mod fields;
mod home;
mod login;
mod sidebar;
mod signup;

pub use fields::{FormErrors, FormField};
pub use home::{BoardTask, Section, TaskBoard, TaskList};
pub use login::LoginForm;
pub use sidebar::Sidebar;
pub use signup::SignupForm;
