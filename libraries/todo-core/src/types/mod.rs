mod ids;
mod task;
mod user;
mod validation;

pub use ids::{TaskId, UserId};
pub use task::{NewTask, Task, TaskFilter, TaskUpdate};
pub use user::User;
pub use validation::ValidationErrors;
