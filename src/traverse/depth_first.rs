//! Depth-first traversal.
//!
//! Both traversers keep the path from the root to the node being expanded on
//! an explicit stack, so deep trees do not overflow the call stack.

use core::fmt;
use core::iter;

use alloc::vec::Vec;

use crate::traverse::Children;
use crate::visit::Visit;

/// Pre-order depth-first traverser.
///
/// A node is visited before any of its descendants, and its whole subtree is
/// visited before its next sibling. The root itself is not visited.
///
/// # Examples
///
/// ```
/// use ramify::traverse::{ChildrenFn, PreOrderTraverser};
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
/// let visited: Vec<_> = PreOrderTraverser::new(0, children)
///     .map(|visit| visit.map(|visit| *visit.node()))
///     .collect::<Result<_, _>>()
///     .unwrap_or_else(|never| match never {});
/// assert_eq!(visited, [1, 3, 2]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PreOrderTraverser<N, C: Children<N>> {
    /// Children accessor.
    children: C,
    /// Ancestors of the next node, with their children not yet visited.
    stack: Vec<(N, C::Iter)>,
    /// Node visited most recently, not yet expanded.
    ///
    /// Before the first step, this is the root.
    last: Option<N>,
}

impl<N, C> PreOrderTraverser<N, C>
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
            stack: Vec::new(),
            last: Some(root),
        }
    }

    /// Prevents the traverser from visiting descendants of the node visited
    /// most recently.
    ///
    /// Before the first call to `next()`, this prevents expansion of the root,
    /// so the traverser yields nothing.
    #[inline]
    pub fn skip_children(&mut self) {
        self.last = None;
    }

    /// Returns the depth of the node visited most recently.
    ///
    /// Children of the root have depth 1. Returns 0 before the first step
    /// and after the traversal is completed.
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Releases all pending state so that the traverser yields nothing more.
    fn abort(&mut self) {
        self.stack.clear();
        self.last = None;
        debug_event!("children accessor failed, pre-order traversal aborted");
    }
}

impl<N, C> Iterator for PreOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
    type Item = Result<Visit<N>, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        // Dive into the node visited last, unless skipped.
        if let Some(last) = self.last.take() {
            match self.children.children(&last) {
                Ok(children) => self.stack.push((last, children)),
                Err(e) => {
                    self.abort();
                    return Some(Err(e));
                }
            }
        }
        loop {
            let (parent, rest) = self.stack.last_mut()?;
            match rest.next() {
                Some(child) => {
                    let visit = Visit::new(child.clone(), parent.clone());
                    self.last = Some(child);
                    return Some(Ok(visit));
                }
                // No more children. Leave the node.
                None => {
                    self.stack.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.stack.is_empty() && self.last.is_none() {
            (0, Some(0))
        } else {
            (0, None)
        }
    }
}

impl<N, C> iter::FusedIterator for PreOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
}

impl<N, C> Clone for PreOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N> + Clone,
    C::Iter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            stack: self.stack.clone(),
            last: self.last.clone(),
        }
    }
}

impl<N, C> fmt::Debug for PreOrderTraverser<N, C>
where
    N: fmt::Debug,
    C: Children<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreOrderTraverser")
            .field(
                "ancestors",
                &self.stack.iter().map(|(node, _)| node).collect::<Vec<_>>(),
            )
            .field("last", &self.last)
            .finish_non_exhaustive()
    }
}

/// Post-order depth-first traverser.
///
/// A node is visited after all of its descendants, and before its next
/// sibling's subtree. The root itself is not visited.
///
/// # Examples
///
/// ```
/// use ramify::traverse::{ChildrenFn, PostOrderTraverser};
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
/// let visited: Vec<_> = PostOrderTraverser::new(0, children)
///     .map(|visit| visit.map(|visit| *visit.node()))
///     .collect::<Result<_, _>>()
///     .unwrap_or_else(|never| match never {});
/// assert_eq!(visited, [3, 1, 2]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct PostOrderTraverser<N, C: Children<N>> {
    /// Children accessor.
    children: C,
    /// Path to the node being expanded, with their children not yet visited.
    stack: Vec<(N, C::Iter)>,
    /// Root, before the first step.
    root: Option<N>,
}

impl<N, C> PostOrderTraverser<N, C>
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
            stack: Vec::new(),
            root: Some(root),
        }
    }

    /// Expands the node and pushes it to the stack.
    fn push(&mut self, node: N) -> Result<(), C::Error> {
        match self.children.children(&node) {
            Ok(children) => {
                self.stack.push((node, children));
                Ok(())
            }
            Err(e) => {
                self.stack.clear();
                self.root = None;
                debug_event!("children accessor failed, post-order traversal aborted");
                Err(e)
            }
        }
    }
}

impl<N, C> Iterator for PostOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
    type Item = Result<Visit<N>, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(root) = self.root.take() {
            if let Err(e) = self.push(root) {
                return Some(Err(e));
            }
        }
        loop {
            let (_, rest) = self.stack.last_mut()?;
            match rest.next() {
                // Dive into the child first.
                Some(child) => {
                    if let Err(e) = self.push(child) {
                        return Some(Err(e));
                    }
                }
                // All descendants are visited. Leave the node.
                None => {
                    let (node, _) = self.stack.pop()?;
                    // Leaving the root completes the traversal.
                    let (parent, _) = self.stack.last()?;
                    return Some(Ok(Visit::new(node, parent.clone())));
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match (self.root.is_some(), self.stack.len()) {
            (false, 0) => (0, Some(0)),
            // Every non-root node on the stack is yet to be visited, unless an
            // expansion fails first.
            (false, len) if C::NEVER_FAILS => (len - 1, None),
            (false, _) => (0, None),
            (true, _) => (0, None),
        }
    }
}

impl<N, C> iter::FusedIterator for PostOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N>,
{
}

impl<N, C> Clone for PostOrderTraverser<N, C>
where
    N: Clone,
    C: Children<N> + Clone,
    C::Iter: Clone,
{
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            stack: self.stack.clone(),
            root: self.root.clone(),
        }
    }
}

impl<N, C> fmt::Debug for PostOrderTraverser<N, C>
where
    N: fmt::Debug,
    C: Children<N>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostOrderTraverser")
            .field(
                "path",
                &self.stack.iter().map(|(node, _)| node).collect::<Vec<_>>(),
            )
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
