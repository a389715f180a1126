use core::iter::FusedIterator;

/// An infinite iterator over an arithmetic sequence of integers.
///
/// This `struct` is created by the [`counter`] function. See its
/// documentation for more.
#[derive(Clone, Copy, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Counter<T> {
    next: T,
    step: T,
}

/// Creates an infinite iterator yielding `start`, `start + step`,
/// `start + 2 * step`, and so on.
///
/// Works with any primitive integer type; on signed types a negative `step`
/// counts downward. The sequence never ends on its own, so bound it with
/// something finite ([`Iterator::take`], or zipping it against a finite
/// sequence as [`enumerate`] does).
///
/// ```
/// use lockstep::counter;
///
/// let mut squares = counter(0u32, 1).map(|n| n * n);
/// assert_eq!(squares.next(), Some(0));
/// assert_eq!(squares.next(), Some(1));
/// assert_eq!(squares.next(), Some(4));
///
/// let countdown: Vec<_> = counter(3i32, -1).take(4).collect();
/// assert_eq!(countdown, [3, 2, 1, 0]);
/// ```
///
/// Advancing past the range of `T` follows the standard arithmetic overflow
/// rules (a panic in debug builds).
///
/// [`enumerate`]: crate::enumerate
pub fn counter<T: Count>(start: T, step: T) -> Counter<T> {
    Counter { next: start, step }
}

impl<T: Count> Iterator for Counter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let current = self.next;
        self.next = current.forward(self.step);
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<T> {
        self.next = self.next.forward_by(self.step, n);
        self.next()
    }

    #[track_caller]
    fn count(self) -> usize {
        panic!("counting sequence is infinite");
    }
}

impl<T: Count> FusedIterator for Counter<T> {}

/// Index arithmetic used by [`Counter`].
///
/// Implemented for all primitive integer types. This trait is sealed and
/// cannot be implemented outside of this crate.
pub trait Count: Copy + private::Sealed {
    /// `self` advanced by one step.
    fn forward(self, step: Self) -> Self;

    /// `self` advanced by `n` steps at once.
    ///
    /// Panics if `n` itself is not representable in `Self`.
    fn forward_by(self, step: Self, n: usize) -> Self;
}

mod private {
    pub trait Sealed {}
}

macro_rules! impl_count {
    ($($t:ty)+) => {$(
        impl private::Sealed for $t {}

        impl Count for $t {
            #[inline]
            fn forward(self, step: Self) -> Self {
                self + step
            }

            #[inline]
            fn forward_by(self, step: Self, n: usize) -> Self {
                let n = <$t>::try_from(n)
                    .unwrap_or_else(|_| panic!("step count out of range for counter type"));
                self + step * n
            }
        }
    )+};
}

impl_count!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);
