use ordered_tree::OrderedTree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// The fewest levels a binary tree holding `len` nodes can have.
fn min_height(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// Applies a set of operations to a tree and a `BTreeSet`, checking after each one that the
/// tree still agrees with the set.
fn do_ops<K>(ops: &[Op<K>], bst: &mut OrderedTree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Reinsert(i) => {
                if set.is_empty() {
                    continue;
                }
                let key = set.iter().nth(i % set.len()).cloned();
                let height = bst.height();
                bst.extend(key);
                if bst.height() != height || bst.len() != set.len() {
                    return false;
                }
            }
            Op::Height => {
                let height = bst.height();
                if height < min_height(bst.len()) || height > bst.len() {
                    return false;
                }
            }
        }
    }

    bst.ascending().eq(set.iter())
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn fuzz_multiple_operations_string(ops: Vec<Op<String>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set)
}

#[quickcheck]
fn ascending_is_sorted_and_deduplicated(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort_unstable();
    expected.dedup();

    tree.ascending().copied().eq(expected)
}

#[quickcheck]
fn descending_is_reversed_ascending(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let mut ascending: Vec<_> = tree.ascending().collect();
    ascending.reverse();

    tree.descending().eq(ascending)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn duplicates_change_nothing(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let keys: Vec<_> = tree.ascending().copied().collect();
    let height = tree.height();

    tree.extend(xs);

    tree.ascending().copied().eq(keys) && tree.height() == height
}

#[quickcheck]
fn min_max_match_iterators(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();

    tree.min() == tree.ascending().next() && tree.max() == tree.descending().next()
}

#[quickcheck]
fn clone_matches(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.into_iter().collect();
    let cloned = tree.clone();

    cloned.ascending().eq(tree.ascending()) && cloned.height() == tree.height()
}

#[test]
fn end_to_end() {
    let mut tree = OrderedTree::new();
    assert!(!tree.contains(&42));
    assert_eq!(tree.height(), 0);

    for key in [5, 3, 7, 2, 4, 6, 8, 1, 9] {
        tree.insert(key);
    }

    let ascending: Vec<_> = tree.ascending().copied().collect();
    assert_eq!(ascending, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let descending: Vec<_> = tree.descending().copied().collect();
    assert_eq!(descending, [9, 8, 7, 6, 5, 4, 3, 2, 1]);
    assert_eq!(tree.height(), 4);
}
