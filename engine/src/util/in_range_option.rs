//! No space overhead `Option`s for ids with a reserved sentinel value.

use std::fmt::Debug;

/// Trait to define sentinel values for types used with `InRangeOption`.
pub trait Sentinel: PartialEq + Copy {
    const SENTINEL: Self;
}

impl Sentinel for u32 {
    const SENTINEL: u32 = u32::MAX;
}

impl Sentinel for usize {
    const SENTINEL: usize = usize::MAX;
}

/// An `Option<T>` which is stored as a plain `T`, the sentinel encoding `None`.
///
/// Used for the predecessor array of the shortest path tree, where most entries
/// are set and a `Vec<Option<u32>>` would double the memory.
/// To work with the data, convert back into an actual `Option` through `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InRangeOption<T: Sentinel + Debug>(T);

impl<T: Sentinel + Debug> InRangeOption<T> {
    pub const NONE: Self = InRangeOption(T::SENTINEL);

    #[inline]
    pub fn some(value: T) -> Self {
        assert_ne!(value, T::SENTINEL, "InRangeOption::some: got sentinel as a value");
        InRangeOption(value)
    }

    #[inline]
    pub fn value(self) -> Option<T> {
        if self.0 != T::SENTINEL {
            Some(self.0)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == T::SENTINEL
    }
}

impl<T: Sentinel + Debug> From<Option<T>> for InRangeOption<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NONE, Self::some)
    }
}

impl<T: Sentinel + Debug> Default for InRangeOption<T> {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_option() {
        assert_eq!(InRangeOption::<u32>::from(Some(7)).value(), Some(7));
        assert_eq!(InRangeOption::<u32>::from(None).value(), None);
        assert!(InRangeOption::<u32>::default().is_none());
        assert!(!InRangeOption::some(0usize).is_none());
    }

    #[test]
    #[should_panic]
    fn rejects_sentinel_as_value() {
        InRangeOption::some(u32::MAX);
    }
}
