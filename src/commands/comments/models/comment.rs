use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Login GitHub shows for comments whose author account was deleted.
pub const GHOST_LOGIN: &str = "ghost";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewComment {
    pub author: Option<Author>,
    pub body: String,
    pub path: Option<String>,
    pub line: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl ReviewComment {
    pub fn author_login(&self) -> &str {
        self.author
            .as_ref()
            .map(|a| a.login.as_str())
            .unwrap_or(GHOST_LOGIN)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Author {
    pub login: String,
}
