//! HTTP request extractors with improved error handling and validation.
//!
//! This module provides the custom Axum extractors used by the handlers:
//!
//! - [`Json`] - JSON deserialization with detailed error messages
//! - [`ValidateJson`] - JSON extraction with automatic `validator` validation
//! - [`AdminAuth`] - bearer-token authentication for the admin surface
//!
//! All rejections are converted into the handler [`Error`] type so failed
//! extraction produces the same response shape as handler errors.
//!
//! [`Error`]: crate::handler::Error

mod admin;
pub mod reject;

pub use crate::extract::admin::AdminAuth;
pub use crate::extract::reject::{Json, ValidateJson};
