//! Target envelope tests
//!
//! Snapshots of every envelope for the fixture prompts, plus property checks
//! over generated documents.

mod envelopes;
mod properties;
