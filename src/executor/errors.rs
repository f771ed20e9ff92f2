//! Executor error types
//!
//! Execution surfaces the two failure sources unchanged: constraint
//! violations (recoverable, caller may correct and retry) and store
//! failures (propagated opaquely from the collaborator).

use thiserror::Error;

use crate::constraints::ConstraintError;
use crate::store::StoreError;

/// Result type for statement execution
pub type ExecutorResult<T> = Result<T, ExecutorError>;

/// Errors surfaced by statement execution
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The candidate row violated a schema constraint
    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    /// The backing store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ExecutorError {
    /// Returns whether this is a recoverable constraint violation
    pub fn is_constraint(&self) -> bool {
        matches!(self, ExecutorError::Constraint(_))
    }

    /// Returns whether this is a store failure
    pub fn is_store(&self) -> bool {
        matches!(self, ExecutorError::Store(_))
    }

    /// Returns the constraint violation, if that is what this is
    pub fn as_constraint(&self) -> Option<&ConstraintError> {
        match self {
            ExecutorError::Constraint(err) => Some(err),
            ExecutorError::Store(_) => None,
        }
    }
}
