//! Target envelope implementations
//!
//! Each module wraps a `(description, body)` pair in one assistant's prompt
//! file syntax. The body is always copied through untouched; an empty
//! description leaves out the description field entirely.

pub mod claude_code;
pub mod cursor;
pub mod gemini;
pub mod github_copilot;
