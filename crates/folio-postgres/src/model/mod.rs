//! Database models for all entities in the system.
//!
//! Each entity has a `Queryable` row struct, an `Insertable` `New*` struct,
//! and, where updates are supported, an `AsChangeset` `Update*` struct.

mod blog_comment;
mod blog_post;
mod project;
mod visitor_message;

pub use blog_comment::{BlogComment, NewBlogComment};
pub use blog_post::{BlogPost, NewBlogPost, UpdateBlogPost};
pub use project::{NewProject, Project, UpdateProject};
pub use visitor_message::{NewVisitorMessage, VisitorMessage};
