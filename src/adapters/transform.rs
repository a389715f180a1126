use core::fmt;
use core::iter::FusedIterator;

/// An iterator that lazily applies a function to the elements of an
/// underlying iterator.
///
/// This `struct` is created by the [`transform`] function. See its
/// documentation for more.
///
/// `Transform` exposes exactly the capability set of the iterator it wraps:
/// it is double-ended, exact-size or fused precisely when the underlying
/// iterator is.
#[derive(Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Transform<I, F> {
    iter: I,
    f: F,
}

/// Lazily applies `f` to every element of a sequence on access.
///
/// This works like [`Iterator::map`], but accepts any [`IntoIterator`]
/// source and binds it on construction. When the source yields references
/// and `f` returns a reference into its argument, writes through the result
/// land in the source:
///
/// ```
/// use std::collections::BTreeMap;
/// use lockstep::transform;
///
/// let mut map = BTreeMap::from([(1, String::from("1")), (2, String::from("2"))]);
/// for value in transform(&mut map, |(_key, value)| value) {
///     value.push('a');
/// }
///
/// assert_eq!(map[&1], "1a");
/// assert_eq!(map[&2], "2a");
/// ```
pub fn transform<I, F, B>(source: I, f: F) -> Transform<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> B,
{
    Transform { iter: source.into_iter(), f }
}

impl<I: fmt::Debug, F> fmt::Debug for Transform<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("iter", &self.iter).finish()
    }
}

impl<B, I, F> Iterator for Transform<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    #[inline]
    fn next(&mut self) -> Option<B> {
        self.iter.next().map(&mut self.f)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<B> {
        self.iter.nth(n).map(&mut self.f)
    }

    fn fold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let mut f = self.f;
        self.iter.fold(init, move |acc, item| g(acc, f(item)))
    }
}

impl<B, I, F> DoubleEndedIterator for Transform<I, F>
where
    I: DoubleEndedIterator,
    F: FnMut(I::Item) -> B,
{
    #[inline]
    fn next_back(&mut self) -> Option<B> {
        self.iter.next_back().map(&mut self.f)
    }

    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<B> {
        self.iter.nth_back(n).map(&mut self.f)
    }

    fn rfold<Acc, G>(self, init: Acc, mut g: G) -> Acc
    where
        G: FnMut(Acc, B) -> Acc,
    {
        let mut f = self.f;
        self.iter.rfold(init, move |acc, item| g(acc, f(item)))
    }
}

impl<B, I, F> ExactSizeIterator for Transform<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item) -> B,
{
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<B, I, F> FusedIterator for Transform<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item) -> B,
{
}
