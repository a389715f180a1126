use std::collections::LinkedList;

use lockstep::{enumerate, enumerate_with};

#[test]
fn enumerate_elements() {
    let strings: LinkedList<&str> = ["a", "b", "c"].into_iter().collect();

    let mut expected = 0;
    for (index, string) in enumerate(&strings) {
        assert_eq!(index, expected);
        assert_eq!(*string, ["a", "b", "c"][expected]);
        expected += 1;
    }
    assert_eq!(expected, 3);
}

#[test]
fn enumerate_offset() {
    let strings = ["a", "b", "c"];
    let indexed: Vec<_> = enumerate_with(&strings, 4usize, 1).collect();
    assert_eq!(indexed, [(4, &"a"), (5, &"b"), (6, &"c")]);
}

#[test]
fn enumerate_negative_offset() {
    let strings = ["a", "b", "c"];
    let indexed: Vec<_> = enumerate_with(&strings, -3i32, 1).collect();
    assert_eq!(indexed, [(-3, &"a"), (-2, &"b"), (-1, &"c")]);
}

#[test]
fn enumerate_decreasing() {
    let strings = ["a", "b", "c"];
    let indexed: Vec<_> = enumerate_with(&strings, 4i32, -2).collect();
    assert_eq!(indexed, [(4, &"a"), (2, &"b"), (0, &"c")]);
}

#[test]
fn enumerate_mutate() {
    let mut strings: LinkedList<String> = ["a", "b", "c"].map(String::from).into_iter().collect();
    for (index, string) in enumerate(&mut strings) {
        string.push_str(&index.to_string());
    }

    assert!(strings.iter().eq(["a0", "b1", "c2"].iter()));
}

#[test]
fn enumerate_by_value() {
    let strings = vec![String::from("x"), String::from("y")];
    let owned: Vec<(usize, String)> = enumerate(strings).collect();
    assert_eq!(owned, [(0, String::from("x")), (1, String::from("y"))]);
}

#[test]
fn enumerate_skip_ahead() {
    let numbers = [10, 20, 30, 40];
    let mut it = enumerate(&numbers);
    assert_eq!(it.nth(2), Some((2, &30)));
    assert_eq!(it.next(), Some((3, &40)));
    assert_eq!(it.next(), None);
}

#[test]
fn enumerate_empty() {
    let empty: Vec<i32> = Vec::new();
    assert_eq!(enumerate(&empty).next(), None);
}
