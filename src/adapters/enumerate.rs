use crate::adapters::zip::{zip, Zip};
use crate::sources::counter::{counter, Count, Counter};

/// An iterator that pairs every element of a sequence with a running index.
///
/// This is the composition `zip((counter(start, step), source))`, created by
/// the [`enumerate`] and [`enumerate_with`] functions. Because the index
/// side is infinite, the adapter is forward-only regardless of what the
/// source supports.
pub type Enumerate<I, Idx = usize> = Zip<(Counter<Idx>, I)>;

/// Pairs every element of a sequence with its index, like Python's
/// `enumerate`.
///
/// Indices are `usize` starting at zero. Pass `&c` for read-only access to
/// the elements, `&mut c` to mutate them through the adapter, or `c` by
/// value to consume the source.
///
/// ```
/// use lockstep::enumerate;
///
/// let mut strings = vec![String::from("a"), String::from("b"), String::from("c")];
/// for (index, string) in enumerate(&mut strings) {
///     string.push_str(&index.to_string());
/// }
///
/// assert_eq!(strings, ["a0", "b1", "c2"]);
/// ```
pub fn enumerate<I: IntoIterator>(source: I) -> Enumerate<I::IntoIter> {
    enumerate_with(source, 0, 1)
}

/// Like [`enumerate`], but with a configurable index start and step.
///
/// The index may be any primitive integer type; signed types allow negative
/// starts and decreasing indices.
///
/// ```
/// use lockstep::enumerate_with;
///
/// let indexed: Vec<_> = enumerate_with(["a", "b", "c"], 4i32, -2).collect();
/// assert_eq!(indexed, [(4, "a"), (2, "b"), (0, "c")]);
/// ```
pub fn enumerate_with<I, Idx>(source: I, start: Idx, step: Idx) -> Enumerate<I::IntoIter, Idx>
where
    I: IntoIterator,
    Idx: Count,
{
    zip((counter(start, step), source))
}
