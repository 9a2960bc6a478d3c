use ptkit_format::format;
use ptkit_value::Val;
use tracing::debug;

use crate::error::{Result, StdError};

/// Accepts anything, does nothing
pub fn noop(_args: &[Val]) {}

pub fn identity<T>(value: T) -> T {
	value
}

/// Placeholder for functions that are not written yet
pub fn unimplemented<T>() -> Result<T> {
	Err(StdError::Unimplemented)
}

/// Fails with the message [`format`] builds from `args`.
///
/// If the message itself can't be formatted, that error is returned instead.
pub fn error<T>(args: &[Val]) -> Result<T> {
	let message = format(args)?;
	debug!(%message, "raising error");
	Err(StdError::Raised(message))
}
