//! Cross-cutting helpers.
//!
//! - `logging`: Tracing initialization and log-safe truncation.

pub mod logging;
