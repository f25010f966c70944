//! Breadth-first traversal.

use core::fmt;
use core::iter;

use alloc::collections::VecDeque;

use crate::traverse::Children;
use crate::visit::Visit;

/// Breadth-first traverser.
///
/// Visits all children of the root, then all grandchildren, and so on. Within
/// a level, nodes are visited in the order the children accessor returns them.
/// The root itself is not visited.
///
/// Each node is expanded (i.e. its children are requested) only when the
/// traversal reaches its level, so the traverser works with infinite trees as
/// long as the consumer stops pulling.
///
/// # Examples
///
/// ```
/// use ramify::traverse::{BreadthFirstTraverser, ChildrenFn};
///
/// //  0
/// //  |-- 1
/// //  |   `-- 3
/// //  `-- 2
/// let children = ChildrenFn(|n: &u8| match n {
///     0 => vec![1, 2],
///     1 => vec![3],
///     _ => vec![],
/// });
/// let visited: Vec<_> = BreadthFirstTraverser::new(0, children)
///     .map(|visit| visit.map(|visit| visit.into_parts()))
///     .collect::<Result<_, _>>()
///     .unwrap_or_else(|never| match never {});
/// assert_eq!(visited, [(1, 0), (2, 0), (3, 1)]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct BreadthFirstTraverser<N, C: Children<N>> {
    /// Children accessor.
    children: C,
    /// Nodes to be expanded.
    queue: VecDeque<N>,
    /// Node being expanded, and its children not yet visited.
    current: Option<(N, C::Iter)>,
    /// Node visited most recently, not yet queued.
    ///
    /// Before the first step, this is the root.
    last: Option<N>,
}

impl<N, C> BreadthFirstTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
    /// Creates a traverser visiting descendants of the given root.
    ///
    /// This does not call the children accessor yet.
    #[inline]
    pub fn new(root: N, children: C) -> Self {
        Self {
            children,
            queue: VecDeque::new(),
            current: None,
            last: Some(root),
        }
    }

    /// Prevents the traverser from visiting descendants of the node visited
    /// most recently.
    ///
    /// Before the first call to `next()`, this prevents expansion of the root,
    /// so the traverser yields nothing.
    ///
    /// ```
    /// use ramify::traverse::{BreadthFirstTraverser, ChildrenFn};
    ///
    /// let children = ChildrenFn(|n: &u8| match n {
    ///     0 => vec![1, 2],
    ///     1 => vec![3],
    ///     2 => vec![4],
    ///     _ => vec![],
    /// });
    /// let mut traverser = BreadthFirstTraverser::new(0, children);
    /// let mut visited = Vec::new();
    /// while let Some(Ok(visit)) = traverser.next() {
    ///     if *visit.node() == 1 {
    ///         traverser.skip_children();
    ///     }
    ///     visited.push(*visit.node());
    /// }
    /// assert_eq!(visited, [1, 2, 4]);
    /// ```
    #[inline]
    pub fn skip_children(&mut self) {
        self.last = None;
    }

    /// Returns the number of nodes waiting to be expanded.
    ///
    /// The node visited most recently is not counted.
    #[inline]
    #[must_use]
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Releases all pending state so that the traverser yields nothing more.
    fn abort(&mut self) {
        self.queue.clear();
        self.current = None;
        self.last = None;
        debug_event!("children accessor failed, breadth-first traversal aborted");
    }
}

impl<N, C> Iterator for BreadthFirstTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
    type Item = Result<Visit<N>, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(last) = self.last.take() {
            self.queue.push_back(last);
        }
        loop {
            if let Some((parent, rest)) = self.current.as_mut() {
                match rest.next() {
                    Some(child) => {
                        let visit = Visit::new(child.clone(), parent.clone());
                        self.last = Some(child);
                        return Some(Ok(visit));
                    }
                    None => self.current = None,
                }
            }

            // The current node has no more children. Expand the next one.
            let head = self.queue.pop_front()?;
            match self.children.children(&head) {
                Ok(children) => self.current = Some((head, children)),
                Err(e) => {
                    self.abort();
                    return Some(Err(e));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.queue.is_empty() && self.current.is_none() && self.last.is_none() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<N, C> iter::FusedIterator for BreadthFirstTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
}

impl<N, C> Clone for BreadthFirstTraverser<N, C>
where
    N: Clone,
    C: Children<N> + Clone,
    C::Iter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            queue: self.queue.clone(),
            current: self.current.clone(),
            last: self.last.clone(),
        }
    }
}

impl<N, C> fmt::Debug for BreadthFirstTraverser<N, C>
where
    N: fmt::Debug,
    C: Children<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadthFirstTraverser")
            .field("queue", &self.queue)
            .field("current", &self.current.as_ref().map(|(node, _)| node))
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}
