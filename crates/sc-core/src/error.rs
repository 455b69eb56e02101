//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `CoreError` via `From` impls or wrap `CoreError` as one variant.

use thiserror::Error;

use crate::{AgentId, ResourceId, TargetId};

/// The top-level error type for `sc-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("target {0} not found")]
    TargetNotFound(TargetId),

    #[error("resource {0} not found")]
    ResourceNotFound(ResourceId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
