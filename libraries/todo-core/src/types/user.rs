/// User domain type
use crate::types::UserId;
use serde::{Deserialize, Serialize};

/// Account snapshot as returned by the backend.
///
/// Wire names are snake_case (`first_name`, `last_name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Login email
    pub email: String,
}

impl User {
    /// "First Last", skipping an empty part
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}
