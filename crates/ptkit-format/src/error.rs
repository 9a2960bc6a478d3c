use thiserror::Error;

/// Hard formatting failures, returned as `Err`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	#[error("truncated format code")]
	TruncatedFormatCode,
	#[error("unrecognized conversion type: {0}")]
	UnrecognizedConversionType(char),
	#[error("not enough values")]
	NotEnoughValues,
	#[error("fixed digits out of range: {0}")]
	FixedOutOfRange(u32),
}

pub type Result<T, E = FormatError> = std::result::Result<T, E>;
