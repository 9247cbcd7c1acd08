//! Shared test fixtures for the Covey workspace.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod fixtures;

pub use fixtures::{agent_positions, OpenField};
