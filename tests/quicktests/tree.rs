use plain_bst::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

fn is_strictly_ascending<T: Ord>(tree: &Tree<T>) -> bool {
    let values: Vec<_> = tree.iter().collect();
    values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    is_strictly_ascending(&tree) && tree.iter().eq(set.iter()) && tree.len() == set.len()
}

#[quickcheck]
fn ascending_after_any_operations(ops: Vec<Op<i32>>) -> bool {
    let mut tree = Tree::new();
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(v);
            }
            Op::Remove(v) => {
                tree.remove(&v);
            }
        }
    }

    is_strictly_ascending(&tree) && tree.iter().len() == tree.len()
}

#[quickcheck]
fn insert_twice_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let before: Vec<_> = tree.iter().copied().collect();
    let len = tree.len();

    let inserted_again = tree.insert(x);
    let after: Vec<_> = tree.iter().copied().collect();

    !inserted_again && before == after && len == tree.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    // We may have inserted the same value multiple times - they all go with one removal.
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
}

#[quickcheck]
fn removing_one_value_removes_exactly_it(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let mut expected: Vec<_> = tree.iter().copied().collect();
    let was_present = expected.contains(&x);
    expected.retain(|v| *v != x);

    let removed = tree.remove(&x);
    let actual: Vec<_> = tree.iter().copied().collect();

    removed.is_some() == was_present && actual == expected
}

#[quickcheck]
fn maximum_is_last_in_order(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.maximum() == tree.iter().last() && tree.minimum() == tree.iter().next()
}

#[quickcheck]
fn owned_iteration_matches_borrowed(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let borrowed: Vec<_> = tree.iter().copied().collect();
    let owned: Vec<_> = tree.into_iter().collect();

    borrowed == owned
}

#[test]
fn walkthrough() {
    let mut tree = Tree::new();
    for x in [50, 30, 70, 20, 40, 60, 80] {
        tree.insert(x);
    }
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![20, 30, 40, 50, 60, 70, 80]
    );
    assert!(tree.find(&50).is_some());

    tree.remove(&50);
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![20, 30, 40, 60, 70, 80]
    );

    tree.remove(&30);
    assert_eq!(
        tree.iter().copied().collect::<Vec<_>>(),
        vec![20, 40, 60, 70, 80]
    );

    assert_eq!(tree.maximum(), Some(&80));
}

#[test]
fn maximum_of_empty_tree_is_none() {
    let tree: Tree<i32> = Tree::new();
    assert_eq!(tree.maximum(), None);
    assert_eq!(tree.minimum(), None);
    assert!(tree.is_empty());
}
