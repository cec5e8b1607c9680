use serde::{Deserialize, Serialize};

/// Author entity - a person who writes posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
}
