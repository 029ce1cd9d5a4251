//! # Application Errors
//!
//! Failures that cross from the listing pipeline to the presentation layer.
//!
//! Only a failed proposal fetch is propagated. Quality oracle failures and
//! malformed quality records are absorbed by the pipeline and never show
//! up here.
//!
//! # Examples
//!
//! ```
//! use proposal_discovery::application::error::ApplicationError;
//! use proposal_discovery::infrastructure::error::SourceError;
//!
//! let err: ApplicationError = SourceError::connection("refused").into();
//! assert!(matches!(err, ApplicationError::SourceUnavailable(_)));
//! ```

use crate::infrastructure::error::SourceError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The proposal source could not serve the request.
    #[error("proposal source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
