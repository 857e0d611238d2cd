use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wing_tree::{Accessor, InOrder, LeftWing, Order, Position, PreOrder, RightWing, Side, Traversal, Tree, Wing};

type Pred = fn(&(i32, u8), &(i32, u8)) -> bool;
type Treap = Tree<(i32, u8), Pred, Pred>;

fn taller(a: &(i32, u8), b: &(i32, u8)) -> bool {
    a.1 > b.1
}

fn key_less(a: &(i32, u8), b: &(i32, u8)) -> bool {
    a.0 < b.0
}

fn treap(items: impl IntoIterator<Item = (i32, u8)>) -> Treap {
    let mut tree = Tree::with_predicates(taller as Pred, key_less as Pred);
    tree.extend(items);
    tree
}

/// Recursive reference walk driven by an accessor instead of the links the
/// iterators follow.
fn reference(tree: &Treap, order: Order, wing: Side) -> Vec<(i32, u8)> {
    fn walk(a: &mut Accessor<'_, (i32, u8)>, order: Order, wing: Side, out: &mut Vec<(i32, u8)>) {
        let value = *a.get().unwrap();
        if order == Order::Pre {
            out.push(value);
        }
        if a.down(wing) {
            walk(a, order, wing, out);
            a.up();
        }
        if order == Order::In {
            out.push(value);
        }
        if a.down(wing.other()) {
            walk(a, order, wing, out);
            a.up();
        }
    }

    let mut out = Vec::new();
    if let Some(mut root) = tree.root_accessor() {
        walk(&mut root, order, wing, &mut out);
    }
    out
}

fn traversal<O: Traversal, W: Wing>(tree: &Treap) -> Vec<(i32, u8)> {
    tree.traverse::<O, W>().copied().collect()
}

fn by_increment<O: Traversal, W: Wing>(tree: &Treap) -> Vec<(i32, u8)> {
    let mut out = Vec::new();
    let mut position = Position::<O, W>::first(tree);
    while let Some(value) = tree.get(position) {
        out.push(*value);
        position.increment(tree);
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn iterators_match_recursive_walks(items in proptest::collection::vec((-50i32..50, any::<u8>()), 0..96)) {
        let tree = treap(items);

        prop_assert_eq!(traversal::<PreOrder, LeftWing>(&tree), reference(&tree, Order::Pre, Side::Left));
        prop_assert_eq!(traversal::<PreOrder, RightWing>(&tree), reference(&tree, Order::Pre, Side::Right));
        prop_assert_eq!(traversal::<InOrder, LeftWing>(&tree), reference(&tree, Order::In, Side::Left));
        prop_assert_eq!(traversal::<InOrder, RightWing>(&tree), reference(&tree, Order::In, Side::Right));

        prop_assert_eq!(by_increment::<PreOrder, RightWing>(&tree), traversal::<PreOrder, RightWing>(&tree));
        prop_assert_eq!(by_increment::<InOrder, LeftWing>(&tree), traversal::<InOrder, LeftWing>(&tree));
    }

    #[test]
    fn wings_mirror_in_order(items in proptest::collection::vec((-50i32..50, any::<u8>()), 0..96)) {
        let tree = treap(items);
        let mut backwards = traversal::<InOrder, RightWing>(&tree);
        backwards.reverse();
        prop_assert_eq!(backwards, traversal::<InOrder, LeftWing>(&tree));
    }

    #[test]
    fn ranges_stop_at_last(items in proptest::collection::vec((-50i32..50, any::<u8>()), 1..64), skip in 0usize..64, take in 0usize..64) {
        let tree = treap(items);
        let all = traversal::<PreOrder, LeftWing>(&tree);
        let start = skip % all.len();
        let stop = (start + take).min(all.len());

        let mut first = tree.begin_with::<PreOrder, LeftWing>();
        for _ in 0..start {
            first.increment(&tree);
        }
        let mut last = first;
        for _ in start..stop {
            last.increment(&tree);
        }
        let range: Vec<_> = tree.range(first, last).copied().collect();
        prop_assert_eq!(range, all[start..stop].to_vec());
    }
}

#[test]
fn right_wing_pre_order_visits_right_subtree_first() {
    //         (5)
    //        /   \
    //      (3)   (8)
    //     /   \
    //   (1)   (4)
    let tree = treap([(5, 9), (3, 7), (8, 7), (1, 1), (4, 1)]);
    let keys = |values: Vec<(i32, u8)>| values.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    assert_eq!(keys(traversal::<PreOrder, LeftWing>(&tree)), vec![5, 3, 1, 4, 8]);
    assert_eq!(keys(traversal::<PreOrder, RightWing>(&tree)), vec![5, 8, 3, 4, 1]);
    assert_eq!(keys(traversal::<InOrder, LeftWing>(&tree)), vec![1, 3, 4, 5, 8]);
    assert_eq!(keys(traversal::<InOrder, RightWing>(&tree)), vec![8, 5, 4, 3, 1]);
}

#[test]
fn unreachable_last_runs_to_end() {
    let tree = treap([(2, 5), (1, 1), (3, 1)]);
    let last = tree.begin();
    let mut first = last;
    first.increment(&tree);
    let tail: Vec<i32> = tree.range(first, last).map(|&(key, _)| key).collect();
    assert_eq!(tail, vec![2, 3]);
}

#[test]
fn cross_variant_positions_share_nodes() {
    let tree = treap([(2, 5), (1, 1), (3, 1)]);
    let root = tree.begin_with::<PreOrder, LeftWing>();
    let in_order: Position<InOrder, RightWing> = root.cast();
    assert_eq!(tree.get(in_order), Some(&(2, 5)));
    assert_eq!(in_order.cast::<PreOrder, LeftWing>(), root);
    assert_ne!(root, Position::end());
}
