use ptkit_format::FormatError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StdError {
	#[error("unimplemented function")]
	Unimplemented,
	#[error("invalid array length: {0}")]
	InvalidArrayLength(f64),
	/// Message produced by [`crate::error`]
	#[error("{0}")]
	Raised(String),
	#[error(transparent)]
	Format(#[from] FormatError),
}

pub type Result<T, E = StdError> = std::result::Result<T, E>;
