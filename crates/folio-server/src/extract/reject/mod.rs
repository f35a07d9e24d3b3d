//! Request body extractors with detailed rejection handling.
//!
//! These extractors are drop-in replacements for their standard Axum
//! counterparts; their rejections are converted into the handler error type
//! instead of axum's plain-text defaults.

pub mod json;
pub mod validated_json;

pub use self::json::Json;
pub use self::validated_json::ValidateJson;
