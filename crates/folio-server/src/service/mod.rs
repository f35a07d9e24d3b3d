//! Application state, configuration, and domain services.
//!
//! The service layer owns everything handlers depend on through [`State`]
//! extraction: the database client, the admin bearer token, and the
//! comment-thread assembly used by the blog surface.
//!
//! [`State`]: axum::extract::State

mod comments;
mod config;
mod service_state;

pub use crate::error::{Error as ServiceError, ErrorKind, Result};
pub use comments::{CommentNode, build_comment_tree, derive_initials, pick_avatar_color};
pub use config::ServiceConfig;
pub use service_state::{AdminToken, ServiceState};
