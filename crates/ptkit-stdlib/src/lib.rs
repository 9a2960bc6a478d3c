//! Small helpers over [`Val`](ptkit_value::Val): type predicates, host-style coercions,
//! deep copy, comparison and stable sorting, and lookup inside lists of records.

mod arrays;
mod convert;
mod error;
mod lists;
mod misc;
mod objects;
mod sort;
mod types;

pub use arrays::*;
pub use convert::*;
pub use error::{Result, StdError};
pub use lists::*;
pub use misc::*;
pub use objects::*;
pub use sort::*;
pub use types::*;
