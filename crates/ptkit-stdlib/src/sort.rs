use std::cmp::Ordering;

use ptkit_value::Val;

/// Default comparator: `1` when `a > b`, `-1` when `a < b`, `0` when equal or unordered
pub fn cmp(a: &Val, b: &Val) -> i32 {
	match a.compare(b) {
		Some(Ordering::Greater) => 1,
		Some(Ordering::Less) => -1,
		Some(Ordering::Equal) | None => 0,
	}
}

/// Largest of `values` by `>`, the earliest one wins ties
pub fn max(values: &[Val]) -> Option<&Val> {
	let (first, rest) = values.split_first()?;
	Some(rest.iter().fold(first, |best, v| {
		if v.compare(best) == Some(Ordering::Greater) {
			v
		} else {
			best
		}
	}))
}

/// Smallest of `values` by `<`, the earliest one wins ties
pub fn min(values: &[Val]) -> Option<&Val> {
	let (first, rest) = values.split_first()?;
	Some(rest.iter().fold(first, |best, v| {
		if v.compare(best) == Some(Ordering::Less) {
			v
		} else {
			best
		}
	}))
}

/// Top-down merge sort, stable for any comparator.
///
/// `slice::sort_by` may panic when the comparator isn't a total order, which [`cmp`] is
/// not once `NaN` or mixed kinds are involved.
fn merge_sort<T: Clone>(items: &mut [T], compare: &mut impl FnMut(&T, &T) -> Ordering) {
	if items.len() <= 1 {
		return;
	}
	let mid = items.len() / 2;
	merge_sort(&mut items[..mid], compare);
	merge_sort(&mut items[mid..], compare);

	let left = items[..mid].to_vec();
	let (mut l, mut r) = (0, mid);
	let mut out = 0;
	// out < r until the left half runs out, the right tail is already in place
	while l < left.len() {
		if r < items.len() && compare(&items[r], &left[l]) == Ordering::Less {
			items[out] = items[r].clone();
			r += 1;
		} else {
			items[out] = left[l].clone();
			l += 1;
		}
		out += 1;
	}
}

/// Sorts in place with [`cmp`], keeping equal elements in their original order
pub fn sort(arr: &mut [Val]) -> &mut [Val] {
	sort_by(arr, |a, b| cmp(a, b).cmp(&0))
}

/// Sorts in place with a custom comparator, keeping equal elements in their original order
pub fn sort_by(arr: &mut [Val], mut compare: impl FnMut(&Val, &Val) -> Ordering) -> &mut [Val] {
	merge_sort(arr, &mut compare);
	arr
}
