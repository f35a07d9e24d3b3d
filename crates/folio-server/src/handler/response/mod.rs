//! Response types for all handlers.

mod blog_comment;
mod blog_post;
mod error_response;
mod monitor;
mod project;
mod visitor_message;

pub use blog_comment::{BlogComment, BlogCommentNode, BlogComments, CommentDeleted};
pub use blog_post::{BlogPost, BlogPosts};
pub use error_response::ErrorResponse;
pub use monitor::HealthStatus;
pub use project::{Project, Projects};
pub use visitor_message::{VisitorMessage, VisitorMessages};
