//! Property tests comparing every order against straightforward recursive
//! implementations on random trees.

use std::collections::VecDeque;

use proptest::prelude::*;
use proptest::sample::Index;
use ramify::{Traversal, TraversalOrder, Visit, WalkOrder, Walker};

/// A tree with nodes `0..len`, rooted at `0`.
#[derive(Debug, Clone)]
struct Tree {
    /// Parent of each node. The root is its own parent.
    parents: Vec<usize>,
    /// Children of each node, in visiting order.
    children: Vec<Vec<usize>>,
}

impl Tree {
    /// Builds a tree where node `i + 1` is a child of some node in `0..=i`.
    fn from_parent_picks(picks: &[Index]) -> Self {
        let len = picks.len() + 1;
        let mut parents = vec![0; len];
        let mut children = vec![Vec::new(); len];
        for (i, pick) in picks.iter().enumerate() {
            let node = i + 1;
            let parent = pick.index(node);
            parents[node] = parent;
            children[parent].push(node);
        }
        Self { parents, children }
    }

    fn len(&self) -> usize {
        self.parents.len()
    }

    fn children_of(&self, node: &usize) -> Vec<usize> {
        self.children[*node].clone()
    }

    fn is_strict_descendant(&self, mut node: usize, ancestor: usize) -> bool {
        while node != 0 {
            node = self.parents[node];
            if node == ancestor {
                return true;
            }
        }
        false
    }

    fn depth(&self, mut node: usize) -> usize {
        let mut depth = 0;
        while node != 0 {
            node = self.parents[node];
            depth += 1;
        }
        depth
    }

    fn pre_order(&self) -> Vec<(usize, usize)> {
        fn rec(tree: &Tree, node: usize, out: &mut Vec<(usize, usize)>) {
            for &child in &tree.children[node] {
                out.push((child, node));
                rec(tree, child, out);
            }
        }
        let mut out = Vec::new();
        rec(self, 0, &mut out);
        out
    }

    fn post_order(&self) -> Vec<(usize, usize)> {
        fn rec(tree: &Tree, node: usize, out: &mut Vec<(usize, usize)>) {
            for &child in &tree.children[node] {
                rec(tree, child, out);
                out.push((child, node));
            }
        }
        let mut out = Vec::new();
        rec(self, 0, &mut out);
        out
    }

    fn breadth_first(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        let mut queue = VecDeque::from([0]);
        while let Some(node) = queue.pop_front() {
            for &child in &self.children[node] {
                out.push((child, node));
                queue.push_back(child);
            }
        }
        out
    }
}

fn arb_tree() -> impl Strategy<Value = Tree> {
    proptest::collection::vec(any::<Index>(), 0..64)
        .prop_map(|picks| Tree::from_parent_picks(&picks))
}

proptest! {
    #[test]
    fn traversal_matches_recursive_orders(tree in arb_tree()) {
        let traversal = Traversal::new(|node: &usize| tree.children_of(node));

        let bfs: Vec<_> = traversal.traverse_in(0, TraversalOrder::BreadthFirst).collect();
        let pre: Vec<_> = traversal.traverse_in(0, TraversalOrder::PreOrder).collect();
        let post: Vec<_> = traversal.traverse_in(0, TraversalOrder::PostOrder).collect();

        prop_assert_eq!(bfs, tree.breadth_first());
        prop_assert_eq!(pre, tree.pre_order());
        prop_assert_eq!(post, tree.post_order());
    }

    #[test]
    fn walker_matches_recursive_orders(tree in arb_tree()) {
        let walker = Walker::new(|node: &usize| tree.children_of(node))
            .with_projector(|visit: &mut Visit<usize>| (*visit.node(), *visit.parent()));

        let bfs: Vec<_> = walker.walk_in(0, WalkOrder::BreadthFirst).collect();
        let dfs: Vec<_> = walker.walk_in(0, WalkOrder::DepthFirst).collect();

        prop_assert_eq!(bfs, tree.breadth_first());
        prop_assert_eq!(dfs, tree.pre_order());
    }

    #[test]
    fn every_order_visits_each_node_once(tree in arb_tree()) {
        let traversal = Traversal::new(|node: &usize| tree.children_of(node))
            .with_projector(|node: &usize, _: &usize| *node);
        let expected: Vec<usize> = (1..tree.len()).collect();

        for order in TraversalOrder::ALL {
            let mut nodes: Vec<_> = traversal.traverse_in(0, order).collect();
            nodes.sort_unstable();
            prop_assert_eq!(&nodes, &expected, "order = {}", order);
        }
    }

    #[test]
    fn breadth_first_depth_never_decreases(tree in arb_tree()) {
        let traversal = Traversal::new(|node: &usize| tree.children_of(node))
            .with_projector(|node: &usize, _: &usize| tree.depth(*node));
        let depths: Vec<_> = traversal.traverse_in(0, TraversalOrder::BreadthFirst).collect();
        prop_assert!(depths.windows(2).all(|w| w[0] <= w[1]), "depths = {:?}", depths);
    }

    #[test]
    fn skipped_subtree_is_never_visited(tree in arb_tree(), skip in any::<Index>()) {
        let skipped = skip.index(tree.len());
        let walker = Walker::new(|node: &usize| tree.children_of(node))
            .with_projector(|visit: &mut Visit<usize>| {
                if *visit.node() == skipped {
                    visit.skip_children();
                }
                *visit.node()
            });

        // The root is never visited, so skipping it has no effect.
        let expected: Vec<_> = tree
            .pre_order()
            .into_iter()
            .map(|(node, _)| node)
            .filter(|&node| skipped == 0 || !tree.is_strict_descendant(node, skipped))
            .collect();
        let expected_bfs: Vec<_> = tree
            .breadth_first()
            .into_iter()
            .map(|(node, _)| node)
            .filter(|&node| skipped == 0 || !tree.is_strict_descendant(node, skipped))
            .collect();

        let dfs: Vec<_> = walker.walk_in(0, WalkOrder::DepthFirst).collect();
        let bfs: Vec<_> = walker.walk_in(0, WalkOrder::BreadthFirst).collect();
        prop_assert_eq!(dfs, expected);
        prop_assert_eq!(bfs, expected_bfs);
    }

    #[test]
    fn unknown_tokens_select_default_order(tree in arb_tree(), token in "[a-z-]{0,16}") {
        let traversal = Traversal::new(|node: &usize| tree.children_of(node))
            .with_default_order(TraversalOrder::PostOrder);
        let expected = TraversalOrder::from_token(&token).unwrap_or(TraversalOrder::PostOrder);

        prop_assert_eq!(traversal.resolve(&token), expected);
        prop_assert!(traversal
            .traverse_named(0, &token)
            .eq(traversal.traverse_in(0, expected)));

        let walker = Walker::new(|node: &usize| tree.children_of(node));
        let expected = WalkOrder::from_token(&token).unwrap_or_default();
        prop_assert_eq!(walker.walk_named(0, &token).order(), expected);
    }
}
