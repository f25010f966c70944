//! Walks with skippable subtrees.

use core::fmt;
use core::iter;
use core::marker::PhantomData;

use crate::order::WalkOrder;
use crate::traverse::{
    into_ok, BreadthFirstTraverser, Children, ChildrenFn, PreOrderTraverser, TryChildrenFn,
};
use crate::visit::Visit;

/// Projector returning the visit record itself.
pub type VisitIdentity<N> = fn(&mut Visit<N>) -> Visit<N>;

/// Returns a copy of the visit record.
fn visit_identity<N: Clone>(visit: &mut Visit<N>) -> Visit<N> {
    visit.clone()
}

/// Traversal engine whose visits can skip the subtree of the visited node.
///
/// A walker is built once from a children accessor, and optionally a
/// projector and a default order. Every walk started from it is independent.
///
/// # Examples
///
/// ```
/// use ramify::{Walker, WalkOrder};
///
/// //  "/"
/// //  |-- "/bin"
/// //  `-- "/usr"
/// //      `-- "/usr/lib"
/// let children = |path: &&str| match *path {
///     "/" => vec!["/bin", "/usr"],
///     "/usr" => vec!["/usr/lib"],
///     _ => vec![],
/// };
/// let walker = Walker::new(children).with_projector(|visit: &mut ramify::Visit<&str>| {
///     format!("{} in {}", visit.node(), visit.parent())
/// });
///
/// let lines: Vec<_> = walker.walk_in("/", WalkOrder::BreadthFirst).collect();
/// assert_eq!(lines, ["/bin in /", "/usr in /", "/usr/lib in /usr"]);
/// ```
pub struct Walker<N, F, P = VisitIdentity<N>> {
    /// Children accessor.
    children_of: F,
    /// Projector from a visit to the walk result.
    project: P,
    /// Order used when none is given.
    default_order: WalkOrder,
    /// Node type marker.
    _node: PhantomData<fn(&N) -> N>,
}

impl<N: Clone, F> Walker<N, F> {
    /// Creates a walker yielding the [`Visit`] records themselves, in
    /// depth-first order by default.
    #[inline]
    #[must_use]
    pub fn new(children_of: F) -> Self {
        Self {
            children_of,
            project: visit_identity::<N>,
            default_order: WalkOrder::default(),
            _node: PhantomData,
        }
    }
}

impl<N, F, P> Walker<N, F, P> {
    /// Replaces the projector.
    ///
    /// The projector is called once per visit and its return value is
    /// yielded. Calling [`Visit::skip_children`] inside the projector
    /// prevents the walk from visiting descendants of the node.
    #[inline]
    #[must_use]
    pub fn with_projector<Q>(self, project: Q) -> Walker<N, F, Q> {
        Walker {
            children_of: self.children_of,
            project,
            default_order: self.default_order,
            _node: PhantomData,
        }
    }

    /// Replaces the default order.
    #[inline]
    #[must_use]
    pub fn with_default_order(self, order: WalkOrder) -> Self {
        Self {
            default_order: order,
            ..self
        }
    }

    /// Returns the order used when none is given.
    #[inline]
    #[must_use]
    pub fn default_order(&self) -> WalkOrder {
        self.default_order
    }

    /// Returns the order named by the token, or the default order if the
    /// token is not recognized.
    ///
    /// ```
    /// use ramify::{Walker, WalkOrder};
    ///
    /// let walker: Walker<u8, _> = Walker::new(|_: &u8| Vec::<u8>::new());
    /// assert_eq!(walker.resolve("breadth-first"), WalkOrder::BreadthFirst);
    /// assert_eq!(walker.resolve("sideways"), WalkOrder::DepthFirst);
    /// ```
    #[must_use]
    pub fn resolve(&self, token: &str) -> WalkOrder {
        WalkOrder::from_token(token).unwrap_or_else(|| {
            debug_event!(
                token,
                fallback = %self.default_order,
                "unrecognized walk order, using the default"
            );
            self.default_order
        })
    }

    /// Creates a walk with the given children accessor.
    fn start<C: Children<N>>(&self, root: N, children: C, order: WalkOrder) -> Walk<N, C, &P>
    where
        N: Clone,
    {
        trace_event!(order = %order, "starting walk");
        let inner = match order {
            WalkOrder::BreadthFirst => {
                WalkInner::BreadthFirst(BreadthFirstTraverser::new(root, children))
            }
            WalkOrder::DepthFirst => WalkInner::DepthFirst(PreOrderTraverser::new(root, children)),
        };
        Walk {
            inner,
            project: &self.project,
        }
    }
}

impl<N, F, J, P> Walker<N, F, P>
where
    N: Clone,
    F: Fn(&N) -> J,
    J: IntoIterator<Item = N>,
{
    /// Walks descendants of the root in the default order.
    #[inline]
    pub fn walk(&self, root: N) -> Walk<N, ChildrenFn<&F>, &P> {
        self.walk_in(root, self.default_order)
    }

    /// Walks descendants of the root in the given order.
    #[inline]
    pub fn walk_in(&self, root: N, order: WalkOrder) -> Walk<N, ChildrenFn<&F>, &P> {
        self.start(root, ChildrenFn(&self.children_of), order)
    }

    /// Walks descendants of the root in the order named by the token.
    ///
    /// Unrecognized tokens select the default order.
    #[inline]
    pub fn walk_named(&self, root: N, token: &str) -> Walk<N, ChildrenFn<&F>, &P> {
        self.walk_in(root, self.resolve(token))
    }
}

impl<N, F, J, E, P> Walker<N, F, P>
where
    N: Clone,
    F: Fn(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
{
    /// Walks descendants of the root in the default order, with a fallible
    /// children accessor.
    ///
    /// ```
    /// use ramify::Walker;
    ///
    /// let walker = Walker::new(|n: &u32| match n {
    ///     0 => Ok(vec![1, 2]),
    ///     1 => Err("cannot read 1"),
    ///     _ => Ok(vec![]),
    /// })
    /// .with_projector(|visit: &mut ramify::Visit<u32>| *visit.node());
    ///
    /// let mut walk = walker.try_walk(0);
    /// assert_eq!(walk.next(), Some(Ok(1)));
    /// assert_eq!(walk.next(), Some(Err("cannot read 1")));
    /// assert_eq!(walk.next(), None);
    /// ```
    #[inline]
    pub fn try_walk(&self, root: N) -> Walk<N, TryChildrenFn<&F>, &P> {
        self.try_walk_in(root, self.default_order)
    }

    /// Walks descendants of the root in the given order, with a fallible
    /// children accessor.
    #[inline]
    pub fn try_walk_in(&self, root: N, order: WalkOrder) -> Walk<N, TryChildrenFn<&F>, &P> {
        self.start(root, TryChildrenFn(&self.children_of), order)
    }

    /// Walks descendants of the root in the order named by the token, with a
    /// fallible children accessor.
    ///
    /// Unrecognized tokens select the default order.
    #[inline]
    pub fn try_walk_named(&self, root: N, token: &str) -> Walk<N, TryChildrenFn<&F>, &P> {
        self.try_walk_in(root, self.resolve(token))
    }
}

impl<N, F: Clone, P: Clone> Clone for Walker<N, F, P> {
    fn clone(&self) -> Self {
        Self {
            children_of: self.children_of.clone(),
            project: self.project.clone(),
            default_order: self.default_order,
            _node: PhantomData,
        }
    }
}

impl<N, F, P> fmt::Debug for Walker<N, F, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Walker")
            .field("default_order", &self.default_order)
            .finish_non_exhaustive()
    }
}

/// Traverser selected by the walk order.
enum WalkInner<N, C: Children<N>> {
    /// Breadth-first traverser.
    BreadthFirst(BreadthFirstTraverser<N, C>),
    /// Depth-first (pre-order) traverser.
    DepthFirst(PreOrderTraverser<N, C>),
}

/// A walk started from a [`Walker`].
///
/// With an infallible children accessor this yields projected results, and
/// with a fallible one (`try_walk*` methods) it yields `Result`s, ending
/// after the first error.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Walk<N, C: Children<N>, P> {
    /// Traverser.
    inner: WalkInner<N, C>,
    /// Projector from a visit to the walk result.
    project: P,
}

impl<N, C, P> Walk<N, C, P>
where
    N: Clone,
    C: Children<N>,
{
    /// Returns the order of the walk.
    #[must_use]
    pub fn order(&self) -> WalkOrder {
        match self.inner {
            WalkInner::BreadthFirst(_) => WalkOrder::BreadthFirst,
            WalkInner::DepthFirst(_) => WalkOrder::DepthFirst,
        }
    }

    /// Prevents the walk from visiting descendants of the node visited most
    /// recently.
    ///
    /// This is useful with the default projector, where the consumer sees the
    /// visit only after it is projected.
    ///
    /// ```
    /// use ramify::Walker;
    ///
    /// let walker = Walker::new(|n: &u32| if *n < 3 { vec![n + 1] } else { vec![] });
    /// let mut walk = walker.walk(0);
    /// assert_eq!(walk.next().map(|visit| *visit.node()), Some(1));
    /// walk.skip_children();
    /// assert_eq!(walk.next(), None);
    /// ```
    pub fn skip_children(&mut self) {
        match &mut self.inner {
            WalkInner::BreadthFirst(inner) => inner.skip_children(),
            WalkInner::DepthFirst(inner) => inner.skip_children(),
        }
    }

    /// Visits the next node and projects it.
    fn step<R>(&mut self) -> Option<Result<R, C::Error>>
    where
        P: FnMut(&mut Visit<N>) -> R,
    {
        let next = match &mut self.inner {
            WalkInner::BreadthFirst(inner) => inner.next(),
            WalkInner::DepthFirst(inner) => inner.next(),
        };
        let mut visit = match next? {
            Ok(visit) => visit,
            Err(e) => return Some(Err(e)),
        };
        let result = (self.project)(&mut visit);
        // The decision is fixed once the projector returns.
        if visit.is_skipping_children() {
            self.skip_children();
        }
        Some(Ok(result))
    }
}

impl<N, F, J, P, R> Iterator for Walk<N, ChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> J,
    J: IntoIterator<Item = N>,
    P: FnMut(&mut Visit<N>) -> R,
{
    type Item = R;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step().map(into_ok)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            WalkInner::BreadthFirst(inner) => inner.size_hint(),
            WalkInner::DepthFirst(inner) => inner.size_hint(),
        }
    }
}

impl<N, F, J, P, R> iter::FusedIterator for Walk<N, ChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> J,
    J: IntoIterator<Item = N>,
    P: FnMut(&mut Visit<N>) -> R,
{
}

impl<N, F, J, E, P, R> Iterator for Walk<N, TryChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
    P: FnMut(&mut Visit<N>) -> R,
{
    type Item = Result<R, E>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            WalkInner::BreadthFirst(inner) => inner.size_hint(),
            WalkInner::DepthFirst(inner) => inner.size_hint(),
        }
    }
}

impl<N, F, J, E, P, R> iter::FusedIterator for Walk<N, TryChildrenFn<F>, P>
where
    N: Clone,
    F: FnMut(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
    P: FnMut(&mut Visit<N>) -> R,
{
}

impl<N, C, P> fmt::Debug for Walk<N, C, P>
where
    N: fmt::Debug,
    C: Children<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Walk");
        match &self.inner {
            WalkInner::BreadthFirst(inner) => s.field("inner", inner),
            WalkInner::DepthFirst(inner) => s.field("inner", inner),
        };
        s.finish_non_exhaustive()
    }
}
