use tracing::debug;

use crate::error::{Result, StdError};

/// Longest range produced, 128 MiB of `f64`s
pub const MAX_RANGE_LEN: usize = 1 << 24;

/// `[0, 1, ..., stop - 1]`; a `NaN` stop gives an empty range
pub fn range(stop: f64) -> Result<Vec<f64>> {
	range_from(0.0, if stop.is_nan() { 0.0 } else { stop }, 1.0)
}

/// Numbers from `start` towards `stop` (exclusive) in increments of `step`.
///
/// A zero or `NaN` step counts as 1, and a range pointing away from `stop` is empty.
pub fn range_from(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
	let step = if step == 0.0 || step.is_nan() { 1.0 } else { step };
	let len = ((stop - start) / step).ceil();
	if len.is_nan() || len > MAX_RANGE_LEN as f64 {
		debug!(start, stop, step, "invalid range length");
		return Err(StdError::InvalidArrayLength(len));
	}

	let len = len.max(0.0) as usize;
	let mut out = Vec::with_capacity(len);
	let mut value = start;
	for _ in 0..len {
		out.push(value);
		value += step;
	}
	Ok(out)
}
