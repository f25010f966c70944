//! Tree traversals.
//!
//! Traversers in this module are the building blocks of
//! [`Walker`][`crate::Walker`] and [`Traversal`][`crate::Traversal`]. They
//! yield a [`Visit`][`crate::Visit`] per non-root node, or the error of the
//! children accessor which aborted the traversal.

mod breadth_first;
mod children;
mod depth_first;

pub use self::breadth_first::BreadthFirstTraverser;
pub(crate) use self::children::into_ok;
pub use self::children::{Children, ChildrenFn, TryChildrenFn};
pub use self::depth_first::{PostOrderTraverser, PreOrderTraverser};
