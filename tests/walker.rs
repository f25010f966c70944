//! Tests for walks: skipping, laziness, and fallible children accessors.

use std::cell::RefCell;

use ramify::traverse::{BreadthFirstTraverser, ChildrenFn, PreOrderTraverser};
use ramify::{Visit, WalkOrder, Walker};

//  0
//  |-- 1
//  |   |-- 3
//  |   |   `-- 7
//  |   `-- 4
//  `-- 2
//      |-- 5
//      `-- 6
fn children(node: &u32) -> Vec<u32> {
    match node {
        0 => vec![1, 2],
        1 => vec![3, 4],
        2 => vec![5, 6],
        3 => vec![7],
        _ => vec![],
    }
}

fn node_of(visit: &mut Visit<u32>) -> u32 {
    *visit.node()
}

#[test]
fn projector_receives_node_and_parent() {
    let walker = Walker::new(children)
        .with_projector(|visit: &mut Visit<u32>| (*visit.parent(), *visit.node()));
    assert_eq!(
        walker.walk(0).collect::<Vec<_>>(),
        [(0, 1), (1, 3), (3, 7), (1, 4), (0, 2), (2, 5), (2, 6)]
    );
}

#[test]
fn skip_in_projector_prunes_whole_subtree() {
    let walker = Walker::new(children).with_projector(|visit: &mut Visit<u32>| {
        if *visit.node() == 1 {
            visit.skip_children();
        }
        *visit.node()
    });
    let dfs: Vec<_> = walker.walk_in(0, WalkOrder::DepthFirst).collect();
    assert_eq!(dfs, [1, 2, 5, 6]);
    let bfs: Vec<_> = walker.walk_in(0, WalkOrder::BreadthFirst).collect();
    assert_eq!(bfs, [1, 2, 5, 6]);
}

#[test]
fn skip_on_walk_applies_to_last_visit() {
    let walker = Walker::new(children);
    let mut walk = walker.walk_in(0, WalkOrder::BreadthFirst);
    let mut visited = Vec::new();
    while let Some(visit) = walk.next() {
        if *visit.node() == 2 {
            walk.skip_children();
        }
        visited.push(*visit.node());
    }
    assert_eq!(visited, [1, 2, 3, 4, 7]);
}

#[test]
fn skip_on_yielded_record_has_no_effect() {
    let walker = Walker::new(children);
    let mut visited = Vec::new();
    for mut visit in walker.walk_in(0, WalkOrder::DepthFirst) {
        if *visit.node() == 1 {
            visit.skip_children();
        }
        visited.push(*visit.node());
    }
    assert_eq!(visited, [1, 3, 7, 4, 2, 5, 6]);
}

#[test]
fn skip_before_first_step_yields_nothing() {
    let walker = Walker::new(children);
    for order in WalkOrder::ALL {
        let mut walk = walker.walk_in(0, order);
        walk.skip_children();
        assert_eq!(walk.next(), None, "order = {}", order);
    }
}

#[test]
fn children_are_requested_lazily() {
    let requested = RefCell::new(Vec::new());
    let walker = Walker::new(|node: &u32| {
        requested.borrow_mut().push(*node);
        children(node)
    })
    .with_projector(node_of);

    // Visits after the first one, and the nodes expanded by then.
    let cases: [(WalkOrder, [(u32, &[u32]); 2]); 2] = [
        (WalkOrder::DepthFirst, [(3, &[0, 1]), (7, &[0, 1, 3])]),
        (WalkOrder::BreadthFirst, [(2, &[0]), (3, &[0, 1])]),
    ];
    for (order, later) in cases {
        requested.borrow_mut().clear();
        let mut walk = walker.walk_in(0, order);
        assert!(requested.borrow().is_empty(), "order = {}", order);

        assert_eq!(walk.next(), Some(1), "order = {}", order);
        // Children of `1` are requested only when they are needed.
        assert_eq!(*requested.borrow(), [0], "order = {}", order);
        for (node, expanded) in later {
            assert_eq!(walk.next(), Some(node), "order = {}", order);
            assert_eq!(*requested.borrow(), expanded, "order = {}", order);
        }

        drop(walk);
        assert_eq!(
            requested.borrow().len(),
            later[1].1.len(),
            "order = {}",
            order
        );
    }
}

#[test]
fn skipped_node_is_never_expanded() {
    let requested = RefCell::new(Vec::new());
    let walker = Walker::new(|node: &u32| {
        requested.borrow_mut().push(*node);
        children(node)
    })
    .with_projector(|visit: &mut Visit<u32>| {
        if *visit.node() == 3 {
            visit.skip_children();
        }
        *visit.node()
    });

    for order in WalkOrder::ALL {
        requested.borrow_mut().clear();
        assert_eq!(walker.walk_in(0, order).count(), 6);
        assert!(!requested.borrow().contains(&3), "order = {}", order);
    }
}

#[test]
fn infinite_tree_is_walkable() {
    let walker = Walker::new(|n: &u64| [2 * n, 2 * n + 1])
        .with_projector(|visit: &mut Visit<u64>| *visit.node());
    let bfs: Vec<_> = walker.walk_in(1, WalkOrder::BreadthFirst).take(6).collect();
    assert_eq!(bfs, [2, 3, 4, 5, 6, 7]);
    let dfs: Vec<_> = walker.walk_in(1, WalkOrder::DepthFirst).take(4).collect();
    assert_eq!(dfs, [2, 4, 8, 16]);
}

#[test]
fn deep_chain_does_not_overflow() {
    const DEPTH: u32 = 200_000;
    let walker = Walker::new(|n: &u32| (*n < DEPTH).then(|| n + 1)).with_projector(node_of);
    assert_eq!(walker.walk_in(0, WalkOrder::DepthFirst).last(), Some(DEPTH));
}

#[test]
fn walks_from_one_walker_are_independent() {
    let walker = Walker::new(children).with_projector(node_of);
    let mut first = walker.walk_in(0, WalkOrder::BreadthFirst);
    let mut second = walker.walk_in(0, WalkOrder::BreadthFirst);

    let mut interleaved = (Vec::new(), Vec::new());
    loop {
        let (a, b) = (first.next(), second.next());
        if a.is_none() && b.is_none() {
            break;
        }
        interleaved.0.extend(a);
        interleaved.1.extend(b);
    }
    assert_eq!(interleaved.0, [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(interleaved.0, interleaved.1);
}

#[test]
fn named_orders_fall_back_to_default() {
    let walker = Walker::new(children)
        .with_projector(node_of)
        .with_default_order(WalkOrder::BreadthFirst);
    assert_eq!(walker.resolve("depth-first"), WalkOrder::DepthFirst);
    assert_eq!(walker.resolve("post-order"), WalkOrder::BreadthFirst);
    assert_eq!(walker.resolve(""), WalkOrder::BreadthFirst);

    assert!(walker.walk_named(0, "nonsense").eq(walker.walk(0)));
    assert!(walker
        .walk_named(0, "depth-first")
        .eq(walker.walk_in(0, WalkOrder::DepthFirst)));
    assert_eq!(walker.walk_named(0, "nonsense").order(), WalkOrder::BreadthFirst);
}

#[test]
fn fallible_walk_stops_at_first_error() {
    let walker = Walker::new(|n: &u32| if *n == 3 { Err(*n) } else { Ok(children(n)) })
        .with_projector(node_of);

    let mut walk = walker.try_walk_in(0, WalkOrder::DepthFirst);
    assert_eq!(walk.next(), Some(Ok(1)));
    assert_eq!(walk.next(), Some(Ok(3)));
    assert_eq!(walk.next(), Some(Err(3)));
    assert_eq!(walk.next(), None);
    assert_eq!(walk.next(), None);

    let bfs: Vec<_> = walker.try_walk_in(0, WalkOrder::BreadthFirst).collect();
    assert_eq!(bfs, [Ok(1), Ok(2), Ok(3), Ok(4), Ok(5), Ok(6), Err(3)]);
}

#[test]
fn fallible_walk_can_skip_failing_node() {
    let walker = Walker::new(|n: &u32| if *n == 3 { Err(*n) } else { Ok(children(n)) })
        .with_projector(|visit: &mut Visit<u32>| {
            if *visit.node() == 3 {
                visit.skip_children();
            }
            *visit.node()
        });
    let visited: Result<Vec<_>, _> = walker.try_walk_named(0, "breadth-first").collect();
    assert_eq!(visited, Ok(vec![1, 2, 3, 4, 5, 6]));
}

#[test]
fn panicking_projector_propagates() {
    let walker = Walker::new(children).with_projector(|visit: &mut Visit<u32>| {
        assert_ne!(*visit.node(), 4, "refusing to visit 4");
        *visit.node()
    });
    let result = std::panic::catch_unwind(|| walker.walk(0).count());
    assert!(result.is_err());
}

#[test]
fn cloned_traverser_continues_independently() {
    let mut traverser = BreadthFirstTraverser::new(0, ChildrenFn(children));
    assert_eq!(traverser.next().map(|v| v.map(|v| *v.node())), Some(Ok(1)));

    let mut cloned = traverser.clone();
    cloned.skip_children();
    let rest: Vec<_> = traverser.map(|v| v.map(|v| *v.node())).collect();
    let rest_skipped: Vec<_> = cloned.map(|v| v.map(|v| *v.node())).collect();
    assert_eq!(rest, [Ok(2), Ok(3), Ok(4), Ok(5), Ok(6), Ok(7)]);
    assert_eq!(rest_skipped, [Ok(2), Ok(5), Ok(6)]);
}

#[test]
fn pre_order_traverser_reports_depth() {
    let mut traverser = PreOrderTraverser::new(0, ChildrenFn(children));
    assert_eq!(traverser.depth(), 0);
    let mut collected = Vec::new();
    while let Some(Ok(visit)) = traverser.next() {
        collected.push((*visit.node(), traverser.depth()));
    }
    assert_eq!(
        collected,
        [(1, 1), (3, 2), (7, 3), (4, 2), (2, 1), (5, 2), (6, 2)]
    );
    assert_eq!(traverser.depth(), 0);
}
