use thiserror::Error;

use crate::ports::RepositoryError;

/// Failures of a booking attempt. Running out of desks is not one of them.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("value cannot be absent (parameter '{param}')")]
    MissingArgument { param: &'static str },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl BookingError {
    /// Name of the absent parameter, for [`BookingError::MissingArgument`].
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::MissingArgument { param } => Some(param),
            Self::Repository(_) => None,
        }
    }
}
