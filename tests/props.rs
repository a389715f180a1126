use itertools::izip;
use lockstep::{enumerate_with, transform, zip};
use quickcheck::quickcheck;

#[test]
fn prop_zip_stops_at_shortest() {
    fn p(a: Vec<u32>, b: Vec<u32>, c: Vec<u32>) -> bool {
        zip((&a, &b, &c)).count() == a.len().min(b.len()).min(c.len())
    }
    quickcheck(p as fn(Vec<u32>, Vec<u32>, Vec<u32>) -> bool)
}

#[test]
fn prop_zip_matches_itertools() {
    fn p(a: Vec<i8>, b: Vec<i8>, c: Vec<i8>) -> bool {
        let ours: Vec<_> = zip((&a, &b, &c)).collect();
        let theirs: Vec<_> = izip!(&a, &b, &c).collect();
        ours == theirs
    }
    quickcheck(p as fn(Vec<i8>, Vec<i8>, Vec<i8>) -> bool)
}

#[test]
fn prop_zip_reversed_is_forward_reversed() {
    fn p(a: Vec<i16>, b: Vec<i16>) -> bool {
        let backward: Vec<_> = zip((&a, &b)).rev().collect();
        let mut forward: Vec<_> = zip((&a, &b)).collect();
        forward.reverse();
        backward == forward
    }
    quickcheck(p as fn(Vec<i16>, Vec<i16>) -> bool)
}

#[test]
fn prop_enumerate_indices_are_arithmetic() {
    fn p(items: Vec<u8>, start: i16, step: i16) -> bool {
        let (start, step) = (i64::from(start), i64::from(step));
        enumerate_with(&items, start, step)
            .enumerate()
            .all(|(position, (index, _item))| index == start + position as i64 * step)
    }
    quickcheck(p as fn(Vec<u8>, i16, i16) -> bool)
}

#[test]
fn prop_transform_matches_eager_map() {
    fn p(items: Vec<i32>) -> bool {
        let lazy: Vec<i32> = transform(&items, |n| n.wrapping_mul(3)).collect();
        let eager: Vec<i32> = items.iter().map(|n| n.wrapping_mul(3)).collect();
        lazy == eager
    }
    quickcheck(p as fn(Vec<i32>) -> bool)
}
