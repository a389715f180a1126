use core::iter::FusedIterator;

/// An iterator that steps a tuple of underlying iterators in lockstep.
///
/// This `struct` is created by the [`zip`] function. See its documentation
/// for more.
///
/// `Zip` yields a tuple with one element per underlying iterator and stops
/// as soon as any of them is exhausted. Its capabilities degrade to the
/// weakest among its constituents:
///
/// * it is an [`Iterator`] when every constituent is,
/// * an [`ExactSizeIterator`] when every constituent is, with the shortest
///   length,
/// * a [`DoubleEndedIterator`] when every constituent is double-ended *and*
///   exact-size (lengths are needed to line up the back ends),
/// * a [`FusedIterator`] when every constituent is.
#[derive(Clone, Debug)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Zip<T> {
    iters: T,
}

impl<T> Zip<T> {
    /// Consumes the adapter and returns the tuple of underlying iterators,
    /// wherever they currently point.
    pub fn into_inner(self) -> T {
        self.iters
    }
}

/// Conversion of a tuple of sequences into a [`Zip`] iterator.
///
/// Implemented for tuples of up to eight [`IntoIterator`] values. This is
/// the trait bound of the [`zip`] function; it is rarely used directly.
pub trait IntoZip {
    /// The tuple of iterators produced by the conversion.
    type IntoIters;

    /// Turns every element of the tuple into an iterator and wraps the
    /// result in a [`Zip`].
    fn into_zip(self) -> Zip<Self::IntoIters>;
}

/// Iterates over several sequences at the same time, like Python's `zip`.
///
/// Takes a tuple of up to eight values implementing [`IntoIterator`] and
/// returns an iterator over tuples of their elements. If the sequences have
/// different lengths, the shortest one decides the overall range.
///
/// Pass `&c` to iterate a collection read-only, `&mut c` to get mutable
/// access to its elements, or `c` by value to consume it; the tuple may mix
/// all three.
///
/// ```
/// use lockstep::zip;
///
/// let strings = ["a", "b", "c"];
/// let numbers = [1, 2, 3, 4, 5];
///
/// let pairs: Vec<_> = zip((&strings, &numbers)).collect();
/// assert_eq!(pairs, [(&"a", &1), (&"b", &2), (&"c", &3)]);
/// ```
///
/// Note that once the shortest sequence is exhausted, constituents listed
/// before it in the tuple have already been advanced one step past the last
/// yielded element, same as with [`Iterator::zip`].
pub fn zip<T: IntoZip>(sources: T) -> Zip<T::IntoIters> {
    sources.into_zip()
}

/// Pointwise minimum of two size hints.
fn shorter_hint(
    (a_lower, a_upper): (usize, Option<usize>),
    (b_lower, b_upper): (usize, Option<usize>),
) -> (usize, Option<usize>) {
    let lower = a_lower.min(b_lower);
    let upper = match (a_upper, b_upper) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (upper, None) | (None, upper) => upper,
    };
    (lower, upper)
}

macro_rules! impl_zip {
    ($(($T:ident, $iter:ident)),+) => {
        impl<$($T: IntoIterator),+> IntoZip for ($($T,)+) {
            type IntoIters = ($($T::IntoIter,)+);

            fn into_zip(self) -> Zip<Self::IntoIters> {
                let ($($iter,)+) = self;
                Zip { iters: ($($iter.into_iter(),)+) }
            }
        }

        impl<$($T: Iterator),+> Iterator for Zip<($($T,)+)> {
            type Item = ($($T::Item,)+);

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                let ($($iter,)+) = &mut self.iters;
                Some(($($iter.next()?,)+))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                let ($($iter,)+) = &self.iters;
                let mut hint = (usize::MAX, None);
                $(hint = shorter_hint(hint, $iter.size_hint());)+
                hint
            }
        }

        impl<$($T),+> DoubleEndedIterator for Zip<($($T,)+)>
        where
            $($T: DoubleEndedIterator + ExactSizeIterator,)+
        {
            fn next_back(&mut self) -> Option<Self::Item> {
                let ($($iter,)+) = &mut self.iters;
                // The back ends only line up once every constituent has been
                // trimmed to the common (shortest) length; elements past that
                // length can never be part of a yielded tuple.
                let mut common = usize::MAX;
                $(common = common.min($iter.len());)+
                $(
                    for _ in common..$iter.len() {
                        $iter.next_back();
                    }
                )+
                Some(($($iter.next_back()?,)+))
            }
        }

        impl<$($T: ExactSizeIterator),+> ExactSizeIterator for Zip<($($T,)+)> {
            fn len(&self) -> usize {
                let ($($iter,)+) = &self.iters;
                let mut len = usize::MAX;
                $(len = len.min($iter.len());)+
                len
            }
        }

        impl<$($T: FusedIterator),+> FusedIterator for Zip<($($T,)+)> {}
    };
}

impl_zip!((A, a));
impl_zip!((A, a), (B, b));
impl_zip!((A, a), (B, b), (C, c));
impl_zip!((A, a), (B, b), (C, c), (D, d));
impl_zip!((A, a), (B, b), (C, c), (D, d), (E, e));
impl_zip!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f));
impl_zip!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g));
impl_zip!((A, a), (B, b), (C, c), (D, d), (E, e), (F, f), (G, g), (H, h));
