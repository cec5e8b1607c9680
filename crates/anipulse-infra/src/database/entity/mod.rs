//! SeaORM entities for the content schema.

pub mod author;
pub mod category;
pub mod comment;
pub mod post;
