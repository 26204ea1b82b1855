//! Small helpers which don't belong to any particular algorithm.

pub mod in_range_option;
