pub mod branch;
pub mod changelog;
pub mod config;
pub mod error;
pub mod event;
pub mod git;
pub mod labels;
pub mod release;
pub mod tag;
pub mod ui;
pub mod version;
pub mod workflow;

pub use error::{AutoReleaseError, Result};
