//! Per-step visit records.

/// Whether a traversal descends into the children of a visited node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Control {
    /// Children of the node will be visited.
    #[default]
    Descend,
    /// Children (and thus all descendants) of the node will not be visited.
    SkipChildren,
}

/// A visit of a node, reached from its parent.
///
/// The root of a traversal is never visited itself, so every visit has a
/// parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Visit<N> {
    /// Visited node.
    node: N,
    /// Parent of the visited node.
    parent: N,
    /// Descent decision for the visited node.
    control: Control,
}

impl<N> Visit<N> {
    /// Creates a new visit which descends into the children of the node.
    #[inline]
    #[must_use]
    pub fn new(node: N, parent: N) -> Self {
        Self {
            node,
            parent,
            control: Control::Descend,
        }
    }

    /// Returns a reference to the visited node.
    #[inline]
    #[must_use]
    pub fn node(&self) -> &N {
        &self.node
    }

    /// Returns a reference to the parent of the visited node.
    #[inline]
    #[must_use]
    pub fn parent(&self) -> &N {
        &self.parent
    }

    /// Returns the descent decision for the visited node.
    #[inline]
    #[must_use]
    pub fn control(&self) -> Control {
        self.control
    }

    /// Returns true if the descendants of the node will be skipped.
    #[inline]
    #[must_use]
    pub fn is_skipping_children(&self) -> bool {
        self.control == Control::SkipChildren
    }

    /// Prevents the traversal from visiting descendants of the node.
    ///
    /// Inside a projector passed to [`Walker::with_projector`], this takes
    /// effect for the visit being projected:
    ///
    /// ```
    /// use ramify::{Visit, Walker, WalkOrder};
    ///
    /// let children = |n: &u32| if *n < 100 { vec![n * 10 + 1, n * 10 + 2] } else { vec![] };
    /// let walker = Walker::new(children).with_projector(|visit: &mut Visit<u32>| {
    ///     if *visit.node() == 1 {
    ///         visit.skip_children();
    ///     }
    ///     *visit.node()
    /// });
    ///
    /// let visited: Vec<_> = walker.walk_in(0, WalkOrder::BreadthFirst).collect();
    /// assert_eq!(visited, [1, 2, 21, 22, 211, 212, 221, 222]);
    /// ```
    ///
    /// Once the projector has returned, this has no effect on the walk. In
    /// particular, records yielded by a walk with the default projector are
    /// copies, so use [`Walk::skip_children`] on the walk itself instead.
    ///
    /// [`Walker::with_projector`]: crate::Walker::with_projector
    /// [`Walk::skip_children`]: crate::Walk::skip_children
    #[inline]
    pub fn skip_children(&mut self) {
        self.control = Control::SkipChildren;
    }

    /// Sets the descent decision for the visited node.
    #[inline]
    pub fn set_control(&mut self, control: Control) {
        self.control = control;
    }

    /// Returns the visited node and its parent.
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (N, N) {
        (self.node, self.parent)
    }

    /// Converts the nodes.
    #[must_use]
    pub fn map<F, U>(self, mut f: F) -> Visit<U>
    where
        F: FnMut(N) -> U,
    {
        Visit {
            node: f(self.node),
            parent: f(self.parent),
            control: self.control,
        }
    }
}
