//! Children accessors.

use core::convert::Infallible;

/// Access to the children of a node.
///
/// Traversers call this once per expanded node, lazily, at the point where the
/// children are first needed.
pub trait Children<N> {
    /// Iterator over the children of a node.
    type Iter: Iterator<Item = N>;
    /// Error returned when the children cannot be listed.
    type Error;

    /// Whether [`children`][`Self::children`] never returns an error.
    ///
    /// Traversers use this to promise a lower bound in `size_hint`, since a
    /// failing expansion ends a traversal early.
    const NEVER_FAILS: bool = false;

    /// Returns the children of the given node in traversal order.
    fn children(&mut self, node: &N) -> Result<Self::Iter, Self::Error>;
}

impl<N, C: Children<N> + ?Sized> Children<N> for &mut C {
    type Iter = C::Iter;
    type Error = C::Error;
    const NEVER_FAILS: bool = C::NEVER_FAILS;

    #[inline]
    fn children(&mut self, node: &N) -> Result<Self::Iter, Self::Error> {
        (**self).children(node)
    }
}

/// Infallible children accessor from a function.
///
/// ```
/// use ramify::traverse::{ChildrenFn, PreOrderTraverser};
///
/// let children = ChildrenFn(|n: &u8| if *n < 2 { vec![n + 1] } else { vec![] });
/// let nodes: Vec<_> = PreOrderTraverser::new(0, children)
///     .map(|visit| *visit.unwrap_or_else(|never| match never {}).node())
///     .collect();
/// assert_eq!(nodes, [1, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChildrenFn<F>(pub F);

impl<N, F, J> Children<N> for ChildrenFn<F>
where
    F: FnMut(&N) -> J,
    J: IntoIterator<Item = N>,
{
    type Iter = J::IntoIter;
    type Error = Infallible;
    const NEVER_FAILS: bool = true;

    #[inline]
    fn children(&mut self, node: &N) -> Result<Self::Iter, Self::Error> {
        Ok((self.0)(node).into_iter())
    }
}

/// Fallible children accessor from a function.
///
/// An error aborts the traversal: it is yielded in place of the next item,
/// and the traverser is exhausted afterwards.
#[derive(Debug, Clone, Copy)]
pub struct TryChildrenFn<F>(pub F);

impl<N, F, J, E> Children<N> for TryChildrenFn<F>
where
    F: FnMut(&N) -> Result<J, E>,
    J: IntoIterator<Item = N>,
{
    type Iter = J::IntoIter;
    type Error = E;

    #[inline]
    fn children(&mut self, node: &N) -> Result<Self::Iter, Self::Error> {
        (self.0)(node).map(IntoIterator::into_iter)
    }
}

/// Extracts the value from a result that cannot be an error.
#[inline]
pub(crate) fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(v) => v,
        Err(never) => match never {},
    }
}
