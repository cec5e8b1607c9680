use serde::{Deserialize, Serialize};

/// Category entity - a content section posts are filed under.
///
/// The slug is the stable identifier used in URLs and query filters;
/// it never changes once the category exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
}
