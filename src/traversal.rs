//! Traversals in breadth-first, pre-order, and post-order.

use core::fmt;
use core::iter;
use core::marker::PhantomData;

use crate::order::TraversalOrder;
use crate::traverse::{
    into_ok, BreadthFirstTraverser, Children, ChildrenFn, PostOrderTraverser, PreOrderTraverser,
    TryChildrenFn,
};

/// Projector returning the node and its parent.
pub type PairIdentity<N> = fn(&N, &N) -> (N, N);

/// Returns copies of the node and its parent.
fn pair_identity<N: Clone>(node: &N, parent: &N) -> (N, N) {
    (node.clone(), parent.clone())
}

/// Traversal engine with breadth-first, pre-order, and post-order traversals.
///
/// Unlike [`Walker`][`crate::Walker`], subtrees cannot be skipped, and the
/// projector receives only the node and its parent. The default order is
/// [`TraversalOrder::PreOrder`].
///
/// # Examples
///
/// ```
/// use ramify::{Traversal, TraversalOrder};
///
/// //  R
/// //  |-- A
/// //  |   `-- A1
/// //  `-- B
/// let children = |n: &&str| match *n {
///     "R" => vec!["A", "B"],
///     "A" => vec!["A1"],
///     _ => vec![],
/// };
/// let traversal =
///     Traversal::new(children).with_projector(|node: &&str, _: &&str| node.to_string());
///
/// let bfs: Vec<_> = traversal.traverse_in("R", TraversalOrder::BreadthFirst).collect();
/// assert_eq!(bfs, ["A", "B", "A1"]);
/// let pre: Vec<_> = traversal.traverse("R").collect();
/// assert_eq!(pre, ["A", "A1", "B"]);
/// let post: Vec<_> = traversal.traverse_named("R", "post-order").collect();
/// assert_eq!(post, ["A1", "A", "B"]);
/// ```
pub struct Traversal<N, F, P = PairIdentity<N>> {
    /// Children accessor.
    children_of: F,
    /// Projector from a node and its parent to the traversal result.
    project: P,
    /// Order used when none is given.
    default_order: TraversalOrder,
    /// Node type marker.
    _node: PhantomData<fn(&N) -> N>,
}

impl<N: Clone, F> Traversal<N, F> {
    /// Creates a traversal yielding `(node, parent)` pairs, in pre-order by
    /// default.
    #[inline]
    #[must_use]
    pub fn new(children_of: F) -> Self {
        Self {
            children_of,
            project: pair_identity::<N>,
            default_order: TraversalOrder::default(),
            _node: PhantomData,
        }
    }
}

impl<N, F, P> Traversal<N, F, P> {
    /// Replaces the projector.
    ///
    /// The projector is called once per visited node with the node and its
    /// parent, and its return value is yielded.
    #[inline]
    #[must_use]
    pub fn with_projector<Q>(self, project: Q) -> Traversal<N, F, Q> {
        Traversal {
            children_of: self.children_of,
            project,
            default_order: self.default_order,
            _node: PhantomData,
        }
    }

    /// Replaces the default order.
    #[inline]
    #[must_use]
    pub fn with_default_order(self, order: TraversalOrder) -> Self {
        Self {
            default_order: order,
            ..self
        }
    }

    /// Returns the order used when none is given.
    #[inline]
    #[must_use]
    pub fn default_order(&self) -> TraversalOrder {
        self.default_order
    }

    /// Returns the order named by the token, or the default order if the
    /// token is not recognized.
    #[must_use]
    pub fn resolve(&self, token: &str) -> TraversalOrder {
        TraversalOrder::from_token(token).unwrap_or_else(|| {
            debug_event!(
                token,
                fallback = %self.default_order,
                "unrecognized traversal order, using the default"
            );
            self.default_order
        })
    }

    /// Creates a traverse with the given children accessor.
    fn start<C: Children<N>>(
        &self,
        root: N,
        children: C,
        order: TraversalOrder,
    ) -> Traverse<N, C, &P>
    where
        N: Clone,
    {
        trace_event!(order = %order, "starting traversal");
        let inner = match order {
            TraversalOrder::BreadthFirst => {
                TraverseInner::BreadthFirst(BreadthFirstTraverser::new(root, children))
            }
            TraversalOrder::PreOrder => {
                TraverseInner::PreOrder(PreOrderTraverser::new(root, children))
            }
            TraversalOrder::PostOrder => {
                TraverseInner::PostOrder(PostOrderTraverser::new(root, children))
            }
        };
        Traverse {
            inner,
            project: &self.project,
        }
    }
}

impl<N, F, J, P> Traversal<N, F, P>
where
    N: Clone,
    F: Fn(&N) -> J,
    J: IntoIterator<Item = N>,
{
    /// Traverses descendants of the root in the default order.
    #[inline]
    pub fn traverse(&self, root: N) -> Traverse<N, ChildrenFn<&F>, &P> {
        self.traverse_in(root, self.default_order)
    }

    /// Traverses descendants of the root in the given order.
    #[inline]
    pub fn traverse_in(&self, root: N, order: TraversalOrder) -> Traverse<N, ChildrenFn<&F>, &P> {
        self.start(root, ChildrenFn(&self.children_of), order)
    }

    /// Traverses descendants of the root in the order named by the token.
    ///
    /// Unrecognized tokens select the default order.
    #[inline]
    pub fn traverse_named(&self, root: N, token: &str) -> Traverse<N, ChildrenFn<&F>, &P> {
        self.traverse_in(root, self.resolve(token))
    }
}

impl<N, F, J, E, P> Traversal<N, F, P>
where
    N: Clone,
    F: Fn(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
{
    /// Traverses descendants of the root in the default order, with a
    /// fallible children accessor.
    #[inline]
    pub fn try_traverse(&self, root: N) -> Traverse<N, TryChildrenFn<&F>, &P> {
        self.try_traverse_in(root, self.default_order)
    }

    /// Traverses descendants of the root in the given order, with a fallible
    /// children accessor.
    ///
    /// ```
    /// use ramify::{Traversal, TraversalOrder};
    ///
    /// let traversal = Traversal::new(|n: &u32| match n {
    ///     0 => Ok(vec![1, 2]),
    ///     1 => Ok(vec![]),
    ///     _ => Err(format!("cannot read {}", n)),
    /// });
    ///
    /// let mut post = traversal.try_traverse_in(0, TraversalOrder::PostOrder);
    /// assert_eq!(post.next(), Some(Ok((1, 0))));
    /// assert_eq!(post.next(), Some(Err("cannot read 2".to_owned())));
    /// assert_eq!(post.next(), None);
    /// ```
    #[inline]
    pub fn try_traverse_in(
        &self,
        root: N,
        order: TraversalOrder,
    ) -> Traverse<N, TryChildrenFn<&F>, &P> {
        self.start(root, TryChildrenFn(&self.children_of), order)
    }

    /// Traverses descendants of the root in the order named by the token,
    /// with a fallible children accessor.
    ///
    /// Unrecognized tokens select the default order.
    #[inline]
    pub fn try_traverse_named(&self, root: N, token: &str) -> Traverse<N, TryChildrenFn<&F>, &P> {
        self.try_traverse_in(root, self.resolve(token))
    }
}

impl<N, F: Clone, P: Clone> Clone for Traversal<N, F, P> {
    fn clone(&self) -> Self {
        Self {
            children_of: self.children_of.clone(),
            project: self.project.clone(),
            default_order: self.default_order,
            _node: PhantomData,
        }
    }
}

impl<N, F, P> fmt::Debug for Traversal<N, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traversal")
            .field("default_order", &self.default_order)
            .finish_non_exhaustive()
    }
}

/// Traverser selected by the traversal order.
enum TraverseInner<N, C: Children<N>> {
    /// Breadth-first traverser.
    BreadthFirst(BreadthFirstTraverser<N, C>),
    /// Pre-order traverser.
    PreOrder(PreOrderTraverser<N, C>),
    /// Post-order traverser.
    PostOrder(PostOrderTraverser<N, C>),
}

/// A traversal started from a [`Traversal`].
///
/// With an infallible children accessor this yields projected results, and
/// with a fallible one (`try_traverse*` methods) it yields `Result`s, ending
/// after the first error.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<N, C: Children<N>, P> {
    /// Traverser.
    inner: TraverseInner<N, C>,
    /// Projector from a node and its parent to the traversal result.
    project: P,
}

impl<N, C, P> Traverse<N, C, P>
where
    N: Clone,
    C: Children<N>,
{
    /// Returns the order of the traversal.
    #[must_use]
    pub fn order(&self) -> TraversalOrder {
        match self.inner {
            TraverseInner::BreadthFirst(_) => TraversalOrder::BreadthFirst,
            TraverseInner::PreOrder(_) => TraversalOrder::PreOrder,
            TraverseInner::PostOrder(_) => TraversalOrder::PostOrder,
        }
    }

    /// Visits the next node and projects it.
    fn step<R>(&mut self) -> Option<Result<R, C::Error>>
    where
        P: FnMut(&N, &N) -> R,
    {
        let next = match &mut self.inner {
            TraverseInner::BreadthFirst(inner) => inner.next(),
            TraverseInner::PreOrder(inner) => inner.next(),
            TraverseInner::PostOrder(inner) => inner.next(),
        };
        Some(next?.map(|visit| (self.project)(visit.node(), visit.parent())))
    }

    /// Returns the bounds of the remaining number of visits.
    fn remaining_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            TraverseInner::BreadthFirst(inner) => inner.size_hint(),
            TraverseInner::PreOrder(inner) => inner.size_hint(),
            TraverseInner::PostOrder(inner) => inner.size_hint(),
        }
    }
}

impl<N, F, J, P, R> Iterator for Traverse<N, ChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> J,
    J: IntoIterator<Item = N>,
    P: FnMut(&N, &N) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step().map(into_ok)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining_hint()
    }
}

impl<N, F, J, P, R> iter::FusedIterator for Traverse<N, ChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> J,
    J: IntoIterator<Item = N>,
    P: FnMut(&N, &N) -> R,
{
}

impl<N, F, J, E, P, R> Iterator for Traverse<N, TryChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
    P: FnMut(&N, &N) -> R,
{
    type Item = Result<R, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining_hint()
    }
}

impl<N, F, J, E, P, R> iter::FusedIterator for Traverse<N, TryChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
    P: FnMut(&N, &N) -> R,
{
}

impl<N, C, P> fmt::Debug for Traverse<N, C, P>
where
    N: fmt::Debug,
    C: Children<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Traverse");
        match &self.inner {
            TraverseInner::BreadthFirst(inner) => s.field("inner", inner),
            TraverseInner::PreOrder(inner) => s.field("inner", inner),
            TraverseInner::PostOrder(inner) => s.field("inner", inner),
        };
        s.finish_non_exhaustive()
    }
}
