//! Shared database types: PostgreSQL enum mappings.

mod avatar_color;
mod post_status;

pub use avatar_color::AvatarColor;
pub use post_status::PostStatus;
