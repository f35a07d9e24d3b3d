//! Request payload types for all handlers.

mod blog_comment;
mod blog_post;
mod pagination;
mod project;
mod visitor_message;

pub use blog_comment::CreateBlogComment;
pub use blog_post::{CreateBlogPost, UpdateBlogPost};
pub use pagination::PaginationParams;
pub use project::{CreateProject, UpdateProject};
pub use visitor_message::CreateVisitorMessage;
